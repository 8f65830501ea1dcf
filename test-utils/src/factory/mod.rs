//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with a `Factory` struct for customization and a
//! `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let user = factory::create_user(&db).await?;
//! let document = factory::create_document(&db, user.id).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let admin = factory::user::UserFactory::new(&db)
//!     .email("root@example.com")
//!     .admin(true)
//!     .build()
//!     .await?;
//! ```

pub mod document;
pub mod folder;
pub mod helpers;
pub mod memo;
pub mod notification;
pub mod user;

pub use document::{create_document, grant_access};
pub use folder::create_folder;
pub use memo::create_memo;
pub use notification::create_notification;
pub use user::{create_admin, create_user};
