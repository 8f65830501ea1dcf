use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of every error response.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct ErrorDto {
    /// Human readable description.
    pub message: String,
    /// Stable machine readable code, e.g. `not_found`.
    pub error: String,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct CountDto {
    pub count: u64,
}
