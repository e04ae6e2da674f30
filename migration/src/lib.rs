pub use sea_orm_migration::prelude::*;

mod m20250301_000001_create_direction_type_table;
mod m20250301_000002_create_movement_type_table;
mod m20250301_000003_create_vehicle_type_table;
mod m20250301_000004_create_study_table;
mod m20250301_000005_create_study_direction_table;
mod m20250301_000006_create_direction_movement_table;
mod m20250301_000007_create_movement_vehicle_class_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_direction_type_table::Migration),
            Box::new(m20250301_000002_create_movement_type_table::Migration),
            Box::new(m20250301_000003_create_vehicle_type_table::Migration),
            Box::new(m20250301_000004_create_study_table::Migration),
            Box::new(m20250301_000005_create_study_direction_table::Migration),
            Box::new(m20250301_000006_create_direction_movement_table::Migration),
            Box::new(m20250301_000007_create_movement_vehicle_class_table::Migration),
        ]
    }
}
