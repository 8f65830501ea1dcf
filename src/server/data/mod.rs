//! Data access layer.
//!
//! Repository structs perform the database operations for each table and convert SeaORM
//! entity models into domain models before returning. `blob` holds the filesystem store for
//! document and profile picture contents.

pub mod attendance;
pub mod blob;
pub mod document;
pub mod document_access;
pub mod folder;
pub mod memo;
pub mod notification;
pub mod user;

#[cfg(test)]
mod test;
