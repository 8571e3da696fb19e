//! Renderer and prompt seams (the page-side collaborators).

/// Appends opaque lines to the chat log. Escaping and scroll behavior are
/// the implementor's contract; the router hands over raw text.
pub trait LogRenderer: Send + Sync {
    fn append_line(&self, line: &str);
}

/// Yes/no confirmation; the sign-up flow asks before posting.
pub trait ConfirmPrompt: Send + Sync {
    fn confirm(&self, question: &str) -> bool;
}

/// Line-per-println renderer for terminal use.
pub struct StdoutRenderer;

impl LogRenderer for StdoutRenderer {
    fn append_line(&self, line: &str) {
        println!("{line}");
    }
}

/// Prompt that approves everything.
pub struct AlwaysConfirm;

impl ConfirmPrompt for AlwaysConfirm {
    fn confirm(&self, _question: &str) -> bool {
        true
    }
}
