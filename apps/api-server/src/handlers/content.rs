//! Marketing content handlers.
//!
//! Generation is a pure computation over the stored snapshot; these
//! handlers fetch, generate, and return without writing anything back.

use actix_web::{HttpResponse, http::header, web};
use chrono::{Datelike, Utc};

use forecourt_core::content::email::{self, EmailScenario};
use forecourt_core::content::export::{self, ExportFormat};
use forecourt_core::content::{self, Platform, media};
use forecourt_shared::ApiResponse;
use forecourt_shared::dto::{EmailData, EmailRequest, ExportQuery, PlatformContent};

use crate::middleware::error::AppResult;
use crate::state::AppState;

use super::vehicles::load_vehicle;

/// GET /api/content/vehicles/{id}
pub async fn vehicle_bundle(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let vehicle = load_vehicle(&state, &path).await?;
    let bundle =
        content::generate_bundle(&vehicle, EmailScenario::Generic, None, Utc::now().year());

    Ok(HttpResponse::Ok().json(ApiResponse::ok(bundle)))
}

/// GET /api/content/vehicles/{id}/platform/{platform}
pub async fn platform_content(
    state: web::Data<AppState>,
    path: web::Path<(String, String)>,
) -> AppResult<HttpResponse> {
    let (raw_id, platform_tag) = path.into_inner();
    let vehicle = load_vehicle(&state, &raw_id).await?;

    let platform = Platform::from_tag(&platform_tag);
    let data = PlatformContent {
        platform: platform.as_str().to_owned(),
        content: content::platform_text(&vehicle, platform),
        has_360_media: media::has_panoramic_media(&vehicle.images),
    };

    Ok(HttpResponse::Ok().json(ApiResponse::ok(data)))
}

/// POST /api/content/vehicles/{id}/email
pub async fn email_content(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<EmailRequest>,
) -> AppResult<HttpResponse> {
    let vehicle = load_vehicle(&state, &path).await?;
    let req = body.into_inner();

    let scenario = EmailScenario::parse(
        req.scenario.as_deref().unwrap_or(""),
        req.holiday.as_deref(),
    );
    let has_360 = media::has_panoramic_media(&vehicle.images);
    let rendered = email::render(
        &vehicle,
        has_360,
        scenario,
        req.custom_message.as_deref(),
        Utc::now().year(),
    );

    Ok(HttpResponse::Ok().json(ApiResponse::ok(EmailData::new(rendered, has_360))))
}

/// GET /api/content/vehicles/{id}/export
///
/// Streams one platform's text as a download. Unknown platform or format
/// tags fall back (facebook, plain text) instead of failing.
pub async fn export_content(
    state: web::Data<AppState>,
    path: web::Path<String>,
    query: web::Query<ExportQuery>,
) -> AppResult<HttpResponse> {
    let vehicle = load_vehicle(&state, &path).await?;

    let platform = Platform::from_tag(query.platform.as_deref().unwrap_or("facebook"));
    let format = ExportFormat::from_tag(query.format.as_deref().unwrap_or("txt"));

    let text = content::platform_text(&vehicle, platform);
    let title = format!("{} - {} Content", vehicle.display_name(), platform.label());
    let stem = format!("{}-{}-{}", vehicle.make, vehicle.model, platform.as_str());
    let doc = export::export(&text, &title, &stem, format);

    Ok(HttpResponse::Ok()
        .content_type(doc.content_type)
        .insert_header((
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", doc.file_name),
        ))
        .body(doc.body))
}
