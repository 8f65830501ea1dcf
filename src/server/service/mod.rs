//! Service layer for business logic and orchestration.
//!
//! Services sit between the controller (API) layer and the data (repository) layer. They:
//!
//! - **Validate**: Enforce input rules and ownership checks
//! - **Orchestrate**: Coordinate repositories, the blob store and token signing
//! - **Work with domain models**: Never with DTOs or entity models
//! - **Run side effects**: Notifications and attendance, best effort

pub mod attendance;
pub mod auth;
pub mod document;
pub mod folder;
pub mod memo;
pub mod notification;
pub mod token;
pub mod user;

#[cfg(test)]
mod test;
