//! HTTP handlers, one module per resource.

pub mod auth;
pub mod chatbot;
pub mod dashboard;
pub mod faqs;
pub mod feedback;
pub mod inquiries;
pub mod messages;
pub mod pages;
pub mod projects;
pub mod services;
pub mod settings;
pub mod stats;
pub mod submissions;
pub mod team;
