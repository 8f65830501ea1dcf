use chrono::{DateTime, Utc};

use crate::model::attendance::AttendanceDto;

/// One login session of a user. `logout_at` stays unset until the user logs out.
#[derive(Debug, Clone, PartialEq)]
pub struct Attendance {
    pub id: i32,
    pub user_id: i32,
    pub login_at: DateTime<Utc>,
    pub logout_at: Option<DateTime<Utc>>,
}

impl Attendance {
    pub fn into_dto(self) -> AttendanceDto {
        AttendanceDto {
            id: self.id,
            login_at: self.login_at,
            logout_at: self.logout_at,
        }
    }

    pub fn from_entity(entity: entity::attendance::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            login_at: entity.login_at,
            logout_at: entity.logout_at,
        }
    }
}
