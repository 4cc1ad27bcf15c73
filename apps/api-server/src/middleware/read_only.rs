//! Write-blocking middleware for read-only deployments.

use actix_web::{
    Error, HttpResponse,
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready},
    http::Method,
};
use forecourt_core::policy::AccessPolicy;
use forecourt_shared::ErrorResponse;
use std::future::{Future, Ready, ready};
use std::pin::Pin;

/// Read-only guard middleware factory.
///
/// Consults the injected [`AccessPolicy`] for every mutating verb and
/// rejects the request with 403 before it reaches a handler. GET, HEAD and
/// OPTIONS always pass.
pub struct ReadOnlyGuard {
    policy: AccessPolicy,
}

impl ReadOnlyGuard {
    pub fn new(policy: AccessPolicy) -> Self {
        Self { policy }
    }
}

impl<S, B> Transform<S, ServiceRequest> for ReadOnlyGuard
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = ReadOnlyGuardService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(ReadOnlyGuardService {
            service,
            policy: self.policy.clone(),
        }))
    }
}

pub struct ReadOnlyGuardService<S> {
    service: S,
    policy: AccessPolicy,
}

impl<S, B> Service<ServiceRequest> for ReadOnlyGuardService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>>>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let is_write = matches!(
            *req.method(),
            Method::POST | Method::PUT | Method::PATCH | Method::DELETE
        );

        if is_write && !self.policy.permits_write(req.path()) {
            tracing::warn!(
                method = %req.method(),
                path = %req.path(),
                "Rejected write in read-only mode"
            );

            let error = ErrorResponse::forbidden(
                "This is a read-only endpoint. Write operations are not allowed.",
            );
            let response = HttpResponse::Forbidden().json(error);

            let (http_req, _payload) = req.into_parts();
            let srv_response = ServiceResponse::new(http_req, response);

            return Box::pin(async move { Ok(srv_response.map_into_right_body()) });
        }

        let fut = self.service.call(req);
        Box::pin(async move {
            let res = fut.await?;
            Ok(res.map_into_left_body())
        })
    }
}
