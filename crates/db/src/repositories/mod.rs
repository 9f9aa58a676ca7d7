//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Collections with default
//! content seed themselves on first read (see [`seed`]).

pub mod chatbot_rule_repo;
pub mod contact_message_repo;
pub mod faq_repo;
pub mod feedback_repo;
pub mod inquiry_repo;
pub mod project_repo;
pub mod seed;
pub mod service_repo;
pub mod session_repo;
pub mod settings_repo;
pub mod stat_repo;
pub mod team_member_repo;
pub mod user_repo;

pub use chatbot_rule_repo::ChatbotRuleRepo;
pub use contact_message_repo::ContactMessageRepo;
pub use faq_repo::FaqRepo;
pub use feedback_repo::FeedbackRepo;
pub use inquiry_repo::InquiryRepo;
pub use project_repo::ProjectRepo;
pub use service_repo::ServiceRepo;
pub use session_repo::SessionRepo;
pub use settings_repo::SettingsRepo;
pub use stat_repo::StatRepo;
pub use team_member_repo::TeamMemberRepo;
pub use user_repo::UserRepo;
