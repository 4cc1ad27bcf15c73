//! Application state - shared across all handlers.

use std::sync::Arc;

use forecourt_core::domain::{VehicleSnapshot, VehicleStatus};
use forecourt_core::error::RepoError;
use forecourt_core::ports::VehicleRepository;
use forecourt_infra::database::{DatabaseConfig, SeaOrmVehicleRepository, connect};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub vehicles: Arc<dyn VehicleRepository>,
}

/// In-memory vehicle repository for when the database is not configured.
///
/// Serves whatever snapshots it was seeded with, so demos and handler tests
/// run without a Postgres instance.
pub struct InMemoryVehicleRepository {
    vehicles: Vec<VehicleSnapshot>,
}

impl InMemoryVehicleRepository {
    pub fn new() -> Self {
        Self {
            vehicles: Vec::new(),
        }
    }

    pub fn with_vehicles(vehicles: Vec<VehicleSnapshot>) -> Self {
        Self { vehicles }
    }
}

impl Default for InMemoryVehicleRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl VehicleRepository for InMemoryVehicleRepository {
    async fn find_by_id(&self, id: uuid::Uuid) -> Result<Option<VehicleSnapshot>, RepoError> {
        Ok(self.vehicles.iter().find(|v| v.id == id).cloned())
    }

    async fn list_available(&self) -> Result<Vec<VehicleSnapshot>, RepoError> {
        let mut available: Vec<VehicleSnapshot> = self
            .vehicles
            .iter()
            .filter(|v| v.status == VehicleStatus::Available)
            .cloned()
            .collect();
        available.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(available)
    }
}

impl AppState {
    /// Build the application state with appropriate implementations.
    pub async fn new(db_config: Option<&DatabaseConfig>) -> Self {
        let vehicles: Arc<dyn VehicleRepository> = match db_config {
            Some(config) => match connect(config).await {
                Ok(db) => Arc::new(SeaOrmVehicleRepository::new(db)),
                Err(e) => {
                    tracing::error!(
                        "Failed to connect to database: {}. Using in-memory fallback.",
                        e
                    );
                    Arc::new(InMemoryVehicleRepository::new())
                }
            },
            None => {
                tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
                Arc::new(InMemoryVehicleRepository::new())
            }
        };

        tracing::info!("Application state initialized");

        Self { vehicles }
    }

    /// State over an explicit repository, used by tests and demos.
    pub fn with_repository(vehicles: Arc<dyn VehicleRepository>) -> Self {
        Self { vehicles }
    }
}
