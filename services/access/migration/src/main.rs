use sea_orm_migration::prelude::*;

mod m20260823_000001_create_residents;
mod m20260823_000002_create_otp_sessions;
mod m20260823_000003_create_gate_passes;
mod m20260823_000004_create_announcements;
mod m20260823_000005_create_emergency_contacts;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260823_000001_create_residents::Migration),
            Box::new(m20260823_000002_create_otp_sessions::Migration),
            Box::new(m20260823_000003_create_gate_passes::Migration),
            Box::new(m20260823_000004_create_announcements::Migration),
            Box::new(m20260823_000005_create_emergency_contacts::Migration),
        ]
    }
}

#[tokio::main]
async fn main() {
    cli::run_cli(Migrator).await;
}
