pub mod cache;
pub mod handlers;
pub mod plans;
pub mod progress;
pub mod prompts;
