//! Domain layer for the agency site backend.
//!
//! Zero internal dependencies: pure types, constants, validators and the
//! two pieces of site logic (the chatbot keyword matcher and the counter
//! value parser) shared by the repository and HTTP layers.

pub mod chatbot;
pub mod counter;
pub mod defaults;
pub mod error;
pub mod faq;
pub mod inquiry;
pub mod message;
pub mod roles;
pub mod slug;
pub mod types;
pub mod validation;
