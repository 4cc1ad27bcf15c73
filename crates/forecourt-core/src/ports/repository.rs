use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::VehicleSnapshot;
use crate::error::RepoError;

/// Read access to the vehicle inventory.
///
/// The service never writes inventory rows; the stock is maintained by an
/// upstream system and this port only mirrors it. Implementations return
/// `Ok(None)` for an unknown id rather than an error so callers can map
/// the miss to their own not-found representation.
#[async_trait]
pub trait VehicleRepository: Send + Sync {
    /// Fetches a single vehicle by id.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<VehicleSnapshot>, RepoError>;

    /// Lists vehicles currently offered for sale, newest first.
    async fn list_available(&self) -> Result<Vec<VehicleSnapshot>, RepoError>;
}
