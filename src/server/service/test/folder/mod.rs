use crate::server::{
    data::document::DocumentRepository,
    error::{auth::AuthError, AppError},
    model::user::User,
    service::{folder::FolderService, notification::NotificationService},
};
use test_utils::{builder::TestBuilder, factory};

mod rename;
