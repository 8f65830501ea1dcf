use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceDto {
    pub id: i32,
    pub login_at: DateTime<Utc>,
    /// Null while the session is still open.
    pub logout_at: Option<DateTime<Utc>>,
}
