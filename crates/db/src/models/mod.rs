//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` + `Validate` create DTO for inserts
//! - A `Deserialize` + `Validate` update DTO (all `Option` fields) for patches

pub mod chatbot_rule;
pub mod contact_message;
pub mod faq;
pub mod feedback;
pub mod inquiry;
pub mod project;
pub mod service;
pub mod session;
pub mod settings;
pub mod stat;
pub mod team_member;
pub mod user;
