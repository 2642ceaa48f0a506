use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20241001_000006_create_crew_table::Crew, m20241001_000007_create_journey_table::Journey,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(JourneyCrew::Table)
                    .if_not_exists()
                    .col(integer(JourneyCrew::JourneyId))
                    .col(integer(JourneyCrew::CrewId))
                    .primary_key(
                        Index::create()
                            .name("pk_journey_crew")
                            .col(JourneyCrew::JourneyId)
                            .col(JourneyCrew::CrewId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_journey_crew_journey_id")
                            .from(JourneyCrew::Table, JourneyCrew::JourneyId)
                            .to(Journey::Table, Journey::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_journey_crew_crew_id")
                            .from(JourneyCrew::Table, JourneyCrew::CrewId)
                            .to(Crew::Table, Crew::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(JourneyCrew::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum JourneyCrew {
    Table,
    JourneyId,
    CrewId,
}
