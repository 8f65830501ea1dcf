//! Attendance tracking.

use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::attendance::AttendanceRepository, error::AppError, model::attendance::Attendance,
};

pub struct AttendanceService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AttendanceService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Opens an attendance record for a successful login.
    ///
    /// Failures are logged and swallowed so they never block the login itself.
    pub async fn log_login(&self, user_id: i32) {
        let repo = AttendanceRepository::new(self.db);

        if let Err(err) = repo.create(user_id, Utc::now()).await {
            tracing::warn!("Failed to record login for user {}: {}", user_id, err);
        }
    }

    /// Closes the user's most recent open record.
    ///
    /// # Returns
    /// - `Ok(Attendance)` - The closed record
    /// - `Err(AppError::NotFound)` - No open record exists
    pub async fn logout(&self, user_id: i32) -> Result<Attendance, AppError> {
        let repo = AttendanceRepository::new(self.db);

        repo.close_latest_open(user_id, Utc::now())
            .await?
            .ok_or_else(|| AppError::NotFound("No open attendance record".to_string()))
    }

    pub async fn get_for_user(&self, user_id: i32) -> Result<Vec<Attendance>, AppError> {
        let repo = AttendanceRepository::new(self.db);

        Ok(repo.get_for_user(user_id).await?)
    }
}
