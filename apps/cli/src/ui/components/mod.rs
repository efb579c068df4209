pub mod prompt;
pub mod spinner;

pub use prompt::TerminalPrompt;
pub use spinner::Spinner;
