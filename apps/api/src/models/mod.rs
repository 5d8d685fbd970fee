pub mod firm;
pub mod ikigai;
pub mod onboarding;
pub mod profile;
pub mod project;
pub mod research;
pub mod versioned;
