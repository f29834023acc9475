pub use sea_orm_migration::prelude::*;

mod m20260801_000001_create_profile_table;
mod m20260801_000002_create_company_table;
mod m20260801_000003_create_job_posting_table;
mod m20260801_000004_create_api_rotation_state_table;
mod m20260801_000005_create_user_preference_table;
mod m20260801_000006_create_user_company_track_table;
mod m20260801_000007_create_alert_table;
mod m20260801_000008_create_hiring_signal_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260801_000001_create_profile_table::Migration),
            Box::new(m20260801_000002_create_company_table::Migration),
            Box::new(m20260801_000003_create_job_posting_table::Migration),
            Box::new(m20260801_000004_create_api_rotation_state_table::Migration),
            Box::new(m20260801_000005_create_user_preference_table::Migration),
            Box::new(m20260801_000006_create_user_company_track_table::Migration),
            Box::new(m20260801_000007_create_alert_table::Migration),
            Box::new(m20260801_000008_create_hiring_signal_table::Migration),
        ]
    }
}
