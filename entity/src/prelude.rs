pub use super::attendance::Entity as Attendance;
pub use super::document::Entity as Document;
pub use super::document_access::Entity as DocumentAccess;
pub use super::folder::Entity as Folder;
pub use super::memo::Entity as Memo;
pub use super::notification::Entity as Notification;
pub use super::user::Entity as User;
