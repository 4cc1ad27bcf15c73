//! Vehicle entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

use forecourt_core::domain::{VehicleSnapshot, VehicleStatus};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "vehicles")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub trim: Option<String>,
    pub vin: Option<String>,
    pub color: Option<String>,
    pub price: Option<i64>,
    pub mileage: Option<i64>,
    pub features: Vec<String>,
    pub images: Vec<String>,
    pub description: Option<String>,
    pub status: Status,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
    pub last_facebook_post_at: Option<DateTimeWithTimeZone>,
    pub last_marketplace_post_at: Option<DateTimeWithTimeZone>,
    pub facebook_post_id: Option<String>,
}

/// Lifecycle status stored as a short string column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum Status {
    #[sea_orm(string_value = "available")]
    Available,
    #[sea_orm(string_value = "pending")]
    Pending,
    #[sea_orm(string_value = "sold")]
    Sold,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Status> for VehicleStatus {
    fn from(status: Status) -> Self {
        match status {
            Status::Available => VehicleStatus::Available,
            Status::Pending => VehicleStatus::Pending,
            Status::Sold => VehicleStatus::Sold,
        }
    }
}

impl From<VehicleStatus> for Status {
    fn from(status: VehicleStatus) -> Self {
        match status {
            VehicleStatus::Available => Status::Available,
            VehicleStatus::Pending => Status::Pending,
            VehicleStatus::Sold => Status::Sold,
        }
    }
}

/// Conversion from SeaORM Model to the domain snapshot.
impl From<Model> for VehicleSnapshot {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            make: model.make,
            model: model.model,
            year: model.year,
            trim: model.trim,
            vin: model.vin,
            color: model.color,
            price: model.price,
            mileage: model.mileage,
            features: model.features,
            images: model.images,
            description: model.description,
            status: model.status.into(),
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
            last_facebook_post_at: model.last_facebook_post_at.map(Into::into),
            last_marketplace_post_at: model.last_marketplace_post_at.map(Into::into),
            facebook_post_id: model.facebook_post_id,
        }
    }
}

/// Conversion from the domain snapshot to a SeaORM ActiveModel.
impl From<VehicleSnapshot> for ActiveModel {
    fn from(v: VehicleSnapshot) -> Self {
        Self {
            id: Set(v.id),
            make: Set(v.make),
            model: Set(v.model),
            year: Set(v.year),
            trim: Set(v.trim),
            vin: Set(v.vin),
            color: Set(v.color),
            price: Set(v.price),
            mileage: Set(v.mileage),
            features: Set(v.features),
            images: Set(v.images),
            description: Set(v.description),
            status: Set(v.status.into()),
            created_at: Set(v.created_at.into()),
            updated_at: Set(v.updated_at.into()),
            last_facebook_post_at: Set(v.last_facebook_post_at.map(Into::into)),
            last_marketplace_post_at: Set(v.last_marketplace_post_at.map(Into::into)),
            facebook_post_id: Set(v.facebook_post_id),
        }
    }
}
