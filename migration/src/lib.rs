pub use sea_orm_migration::prelude::*;

mod m20250301_000001_create_user_table;
mod m20250301_000002_create_folder_table;
mod m20250301_000003_create_document_table;
mod m20250301_000004_create_document_access_table;
mod m20250301_000005_create_memo_table;
mod m20250301_000006_create_notification_table;
mod m20250301_000007_create_attendance_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_user_table::Migration),
            Box::new(m20250301_000002_create_folder_table::Migration),
            Box::new(m20250301_000003_create_document_table::Migration),
            Box::new(m20250301_000004_create_document_access_table::Migration),
            Box::new(m20250301_000005_create_memo_table::Migration),
            Box::new(m20250301_000006_create_notification_table::Migration),
            Box::new(m20250301_000007_create_attendance_table::Migration),
        ]
    }
}
