/// Blocking operator interaction.
///
/// Prompts have no failure path: an aborted prompt answers with the `default` it was
/// given.
pub trait Prompt: Send + Sync {
    fn confirm(&self, question: &str, default: bool) -> bool;

    fn text(&self, question: &str, default: &str) -> String;

    /// Returns the index of the chosen option.
    fn select(&self, question: &str, options: &[String], default: usize) -> usize;
}
