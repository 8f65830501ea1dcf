//! Data transfer objects exchanged over the REST API.
//!
//! These types define the JSON wire format. Server-side domain models convert into them at
//! the controller boundary.

pub mod api;
pub mod attendance;
pub mod auth;
pub mod document;
pub mod folder;
pub mod memo;
pub mod notification;
pub mod user;
