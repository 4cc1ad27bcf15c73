//! PostgreSQL vehicle repository.

use async_trait::async_trait;
use sea_orm::{ColumnTrait, DbConn, EntityTrait, QueryFilter, QueryOrder};
use uuid::Uuid;

use forecourt_core::domain::VehicleSnapshot;
use forecourt_core::error::RepoError;
use forecourt_core::ports::VehicleRepository;

use super::entity::vehicle::{self, Entity as VehicleEntity};

/// SeaORM-backed implementation of the vehicle repository port.
pub struct SeaOrmVehicleRepository {
    db: DbConn,
}

impl SeaOrmVehicleRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

#[async_trait]
impl VehicleRepository for SeaOrmVehicleRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<VehicleSnapshot>, RepoError> {
        tracing::debug!(vehicle_id = %id, "Finding vehicle by id");

        let found = VehicleEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(found.map(Into::into))
    }

    async fn list_available(&self) -> Result<Vec<VehicleSnapshot>, RepoError> {
        let rows = VehicleEntity::find()
            .filter(vehicle::Column::Status.eq(vehicle::Status::Available))
            .order_by_desc(vehicle::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}
