pub mod composer;
pub mod inspector;
pub mod prompt;
pub mod store;
pub mod submission;
