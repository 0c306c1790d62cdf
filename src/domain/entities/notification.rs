/// Outbound message with a styled and a plain rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Telegram legacy-Markdown text, user values escaped
    pub markdown: String,
    /// Same content with no markup or escapes
    pub plain: String,
}

impl Notification {
    pub fn new(markdown: impl Into<String>, plain: impl Into<String>) -> Self {
        Self {
            markdown: markdown.into(),
            plain: plain.into(),
        }
    }
}
