pub mod handlers;
pub mod navigation;
pub mod phases;
pub mod status;
