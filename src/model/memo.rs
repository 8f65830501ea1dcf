use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MemoDto {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Body for creating or replacing a memo.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Default)]
pub struct MemoInputDto {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
}

/// Memo list with a status message.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct MemoListDto {
    pub message: String,
    pub memos: Vec<MemoDto>,
}

/// A single memo returned by create, update and delete.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct MemoResponseDto {
    pub message: String,
    pub memo: MemoDto,
}
