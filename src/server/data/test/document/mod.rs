use crate::server::{data::document::DocumentRepository, model::document::CreateDocumentParam};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_visible_to;
