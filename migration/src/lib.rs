pub use sea_orm_migration::prelude::*;

mod m20250612_000001_create_tables;
mod m20250618_000001_create_verification_codes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250612_000001_create_tables::Migration),
            Box::new(m20250618_000001_create_verification_codes::Migration),
        ]
    }
}
