use crate::server::data::document_access::DocumentAccessRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};
