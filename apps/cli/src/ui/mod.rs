use indicatif::MultiProgress;
use std::sync::OnceLock;

pub mod components;
pub mod progress;
pub mod theme;

pub use theme::Theme;

static MULTI_PROGRESS: OnceLock<MultiProgress> = OnceLock::new();

pub fn multi_progress() -> &'static MultiProgress {
    MULTI_PROGRESS.get_or_init(MultiProgress::new)
}
