//! HTTP handlers and route configuration.

mod content;
mod health;
mod vehicles;

use actix_web::web;

use crate::middleware::error::AppError;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    // Malformed JSON bodies get the standard { status, message } envelope
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| {
        AppError::Validation(err.to_string()).into()
    }));
    cfg.service(
        web::scope("/api")
            .route("/health", web::get().to(health::health_check))
            .service(
                web::scope("/vehicles")
                    .route("", web::get().to(vehicles::list_vehicles))
                    .route("/{id}", web::get().to(vehicles::get_vehicle)),
            )
            .service(
                web::scope("/content/vehicles/{id}")
                    .route("", web::get().to(content::vehicle_bundle))
                    .route(
                        "/platform/{platform}",
                        web::get().to(content::platform_content),
                    )
                    .route("/email", web::post().to(content::email_content))
                    .route("/export", web::get().to(content::export_content)),
            ),
    );
}
