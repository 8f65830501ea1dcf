//! SeaORM entity models for the docvault schema.
//!
//! One module per table. Foreign keys are declared on the owning side so that
//! `Schema::create_table_from_entity` reproduces the same constraints the
//! migrations create.

pub mod prelude;

pub mod attendance;
pub mod document;
pub mod document_access;
pub mod folder;
pub mod memo;
pub mod notification;
pub mod user;
