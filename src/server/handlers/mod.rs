pub mod chat;
pub mod generate;
pub mod image;
pub mod recipe;

/// Truncates a string for log lines; never logs full request bodies.
pub(crate) fn truncate(s: &str, max_chars: usize) -> String {
    s.chars().take(max_chars).collect()
}
