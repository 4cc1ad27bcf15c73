use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Vehicles::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Vehicles::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Vehicles::Make).string().not_null())
                    .col(ColumnDef::new(Vehicles::Model).string().not_null())
                    .col(ColumnDef::new(Vehicles::Year).integer().not_null())
                    .col(ColumnDef::new(Vehicles::Trim).string())
                    .col(ColumnDef::new(Vehicles::Vin).string())
                    .col(ColumnDef::new(Vehicles::Color).string())
                    .col(ColumnDef::new(Vehicles::Price).big_integer())
                    .col(ColumnDef::new(Vehicles::Mileage).big_integer())
                    .col(
                        ColumnDef::new(Vehicles::Features)
                            .array(ColumnType::Text)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Vehicles::Images)
                            .array(ColumnType::Text)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Vehicles::Description).text())
                    .col(ColumnDef::new(Vehicles::Status).string_len(16).not_null())
                    .col(
                        ColumnDef::new(Vehicles::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Vehicles::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Vehicles::LastFacebookPostAt).timestamp_with_time_zone())
                    .col(
                        ColumnDef::new(Vehicles::LastMarketplacePostAt).timestamp_with_time_zone(),
                    )
                    .col(ColumnDef::new(Vehicles::FacebookPostId).string())
                    .to_owned(),
            )
            .await?;

        // The listing endpoint filters on status and orders by recency
        manager
            .create_index(
                Index::create()
                    .name("idx_vehicles_status_created_at")
                    .table(Vehicles::Table)
                    .col(Vehicles::Status)
                    .col(Vehicles::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Vehicles::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Vehicles {
    Table,
    Id,
    Make,
    Model,
    Year,
    Trim,
    Vin,
    Color,
    Price,
    Mileage,
    Features,
    Images,
    Description,
    Status,
    CreatedAt,
    UpdatedAt,
    LastFacebookPostAt,
    LastMarketplacePostAt,
    FacebookPostId,
}
