//! HTTP request handlers.
//!
//! Controllers authenticate the caller through `AuthGuard`, convert DTOs into service
//! parameters, call the service layer and convert the returned domain models back into
//! DTOs. Each handler is annotated with `#[utoipa::path]` so the router can assemble the
//! OpenAPI document.

pub mod attendance;
pub mod auth;
pub mod document;
pub mod folder;
pub mod memo;
pub mod notification;
pub mod storage;
pub mod upload;
pub mod user;
