use sea_orm_migration::{prelude::*, schema::*};

use super::m20241001_000004_create_train_type_table::TrainType;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Train::Table)
                    .if_not_exists()
                    .col(pk_auto(Train::Id))
                    .col(string_uniq(Train::Name))
                    .col(string(Train::NameSearch))
                    .col(integer(Train::CargoNum))
                    .col(integer(Train::PlacesInCargo))
                    .col(integer(Train::TrainTypeId))
                    .col(string_null(Train::Image))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_train_train_type_id")
                            .from(Train::Table, Train::TrainTypeId)
                            .to(TrainType::Table, TrainType::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Train::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Train {
    Table,
    Id,
    Name,
    NameSearch,
    CargoNum,
    PlacesInCargo,
    TrainTypeId,
    Image,
}
