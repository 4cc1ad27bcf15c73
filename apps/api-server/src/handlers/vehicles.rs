//! Vehicle inventory handlers. Read-only: the store is a mirror of an
//! upstream dealer management system.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use forecourt_core::domain::VehicleSnapshot;
use forecourt_shared::ApiResponse;
use forecourt_shared::dto::{VehicleListData, VehicleResponse};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/vehicles
pub async fn list_vehicles(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let vehicles = state.vehicles.list_available().await?;
    let items: Vec<VehicleResponse> = vehicles.iter().map(VehicleResponse::from).collect();

    Ok(HttpResponse::Ok().json(ApiResponse::ok(VehicleListData::new(items))))
}

/// GET /api/vehicles/{id}
pub async fn get_vehicle(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let vehicle = load_vehicle(&state, &path).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(VehicleResponse::from(&vehicle))))
}

/// Look up a vehicle by its raw path id.
///
/// Ids are opaque to callers, so one that fails to parse as a UUID gets the
/// same 404 as an unknown id.
pub(super) async fn load_vehicle(
    state: &AppState,
    raw_id: &str,
) -> Result<VehicleSnapshot, AppError> {
    let not_found = || AppError::NotFound(format!("Vehicle {} not found", raw_id));

    let id = Uuid::parse_str(raw_id).map_err(|_| not_found())?;
    state.vehicles.find_by_id(id).await?.ok_or_else(not_found)
}

#[cfg(test)]
pub(super) mod tests {
    use std::sync::Arc;

    use actix_web::{App, test, web};
    use chrono::{TimeZone, Utc};
    use uuid::Uuid;

    use forecourt_core::domain::{VehicleSnapshot, VehicleStatus};

    use crate::handlers::configure_routes;
    use crate::state::{AppState, InMemoryVehicleRepository};

    /// Snapshot with enough populated fields to exercise every generator.
    pub(in crate::handlers) fn camry(id: Uuid, day: u32) -> VehicleSnapshot {
        let ts = Utc.with_ymd_and_hms(2024, 5, day, 12, 0, 0).unwrap();
        VehicleSnapshot {
            id,
            make: "Toyota".to_owned(),
            model: "Camry".to_owned(),
            year: 2021,
            trim: Some("XSE".to_owned()),
            vin: Some("4T1K61AK5MU123456".to_owned()),
            color: Some("Silver".to_owned()),
            price: Some(24_999),
            mileage: Some(18_500),
            features: vec!["Panoramic Sunroof".to_owned(), "Leather Seats".to_owned()],
            images: vec!["front.jpg".to_owned()],
            description: Some("One owner, garage kept.".to_owned()),
            status: VehicleStatus::Available,
            created_at: ts,
            updated_at: ts,
            last_facebook_post_at: None,
            last_marketplace_post_at: None,
            facebook_post_id: None,
        }
    }

    pub(in crate::handlers) fn seeded_state(vehicles: Vec<VehicleSnapshot>) -> AppState {
        AppState::with_repository(Arc::new(InMemoryVehicleRepository::with_vehicles(vehicles)))
    }

    #[actix_web::test]
    async fn listing_returns_available_vehicles_newest_first() {
        let older = camry(Uuid::new_v4(), 1);
        let newer = camry(Uuid::new_v4(), 20);
        let mut sold = camry(Uuid::new_v4(), 10);
        sold.status = VehicleStatus::Sold;

        let state = seeded_state(vec![older.clone(), sold, newer.clone()]);
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/vehicles").to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["results"], 2);
        assert_eq!(body["data"]["vehicles"][0]["id"], newer.id.to_string());
        assert_eq!(body["data"]["vehicles"][1]["id"], older.id.to_string());
    }

    #[actix_web::test]
    async fn detail_returns_the_wire_shape() {
        let id = Uuid::new_v4();
        let state = seeded_state(vec![camry(id, 1)]);
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::get()
            .uri(&format!("/api/vehicles/{}", id))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["id"], id.to_string());
        assert_eq!(body["data"]["make"], "Toyota");
        assert_eq!(body["data"]["status"], "available");
        assert_eq!(body["data"]["createdAt"], "2024-05-01T12:00:00+00:00");
    }

    #[actix_web::test]
    async fn unknown_id_is_a_404_with_status_and_message() {
        let state = seeded_state(vec![]);
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::get()
            .uri(&format!("/api/vehicles/{}", Uuid::new_v4()))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 404);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], 404);
        assert!(body["message"].as_str().unwrap().contains("not found"));
    }

    #[actix_web::test]
    async fn non_uuid_id_gets_the_same_404() {
        let state = seeded_state(vec![camry(Uuid::new_v4(), 1)]);
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/vehicles/not-a-uuid")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 404);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], 404);
        assert_eq!(body["message"], "Vehicle not-a-uuid not found");
    }
}
