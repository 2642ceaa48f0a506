use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20241001_000007_create_journey_table::Journey, m20241001_000009_create_order_table::Orders,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Ticket::Table)
                    .if_not_exists()
                    .col(pk_auto(Ticket::Id))
                    .col(integer(Ticket::Cargo))
                    .col(integer(Ticket::Seat))
                    .col(integer(Ticket::JourneyId))
                    .col(integer(Ticket::OrderId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_ticket_journey_id")
                            .from(Ticket::Table, Ticket::JourneyId)
                            .to(Journey::Table, Journey::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_ticket_order_id")
                            .from(Ticket::Table, Ticket::OrderId)
                            .to(Orders::Table, Orders::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // A seat slot can only be sold once per journey.
        manager
            .create_index(
                Index::create()
                    .name("idx_ticket_seat_slot_unique")
                    .table(Ticket::Table)
                    .col(Ticket::JourneyId)
                    .col(Ticket::Cargo)
                    .col(Ticket::Seat)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Ticket::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Ticket {
    Table,
    Id,
    Cargo,
    Seat,
    JourneyId,
    OrderId,
}
