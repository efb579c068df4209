use domain::Prompt;
use std::io;
use tracing::debug;

/// Operator prompts rendered with cliclack.
///
/// An interrupted prompt falls back to the question's default answer.
pub struct TerminalPrompt;

fn answer_or<T>(answer: io::Result<T>, fallback: T) -> T {
    answer.unwrap_or_else(|e| {
        debug!(error = %e, "Prompt aborted, using the default answer");
        fallback
    })
}

impl Prompt for TerminalPrompt {
    fn confirm(&self, question: &str, default: bool) -> bool {
        crate::ui::multi_progress().suspend(|| {
            let answer = cliclack::confirm(question).initial_value(default).interact();
            answer_or(answer, default)
        })
    }

    fn text(&self, question: &str, default: &str) -> String {
        crate::ui::multi_progress().suspend(|| {
            let mut input = cliclack::input(question).required(false);
            if !default.is_empty() {
                input = input.default_input(default).placeholder(default);
            }
            answer_or(input.interact::<String>(), default.to_string())
        })
    }

    fn select(&self, question: &str, options: &[String], default: usize) -> usize {
        crate::ui::multi_progress().suspend(|| {
            let mut select = cliclack::select(question);
            for (index, label) in options.iter().enumerate() {
                select = select.item(index, label, "");
            }
            answer_or(select.initial_value(default).interact(), default)
        })
    }
}
