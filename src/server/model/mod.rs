//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and
//! transformed to DTOs at the controller boundary. Parameter types carry validated input
//! from controllers into services.

pub mod attendance;
pub mod document;
pub mod folder;
pub mod memo;
pub mod notification;
pub mod user;
