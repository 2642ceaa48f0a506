pub use sea_orm_migration::prelude::*;

mod m20241001_000001_create_user_table;
mod m20241001_000002_create_station_table;
mod m20241001_000003_create_route_table;
mod m20241001_000004_create_train_type_table;
mod m20241001_000005_create_train_table;
mod m20241001_000006_create_crew_table;
mod m20241001_000007_create_journey_table;
mod m20241001_000008_create_journey_crew_table;
mod m20241001_000009_create_order_table;
mod m20241001_000010_create_ticket_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20241001_000001_create_user_table::Migration),
            Box::new(m20241001_000002_create_station_table::Migration),
            Box::new(m20241001_000003_create_route_table::Migration),
            Box::new(m20241001_000004_create_train_type_table::Migration),
            Box::new(m20241001_000005_create_train_table::Migration),
            Box::new(m20241001_000006_create_crew_table::Migration),
            Box::new(m20241001_000007_create_journey_table::Migration),
            Box::new(m20241001_000008_create_journey_crew_table::Migration),
            Box::new(m20241001_000009_create_order_table::Migration),
            Box::new(m20241001_000010_create_ticket_table::Migration),
        ]
    }
}
