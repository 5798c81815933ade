use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::widgets::r#box::{Box, BoxStyle};

/// Prominent notice for a file that did not reach the remote host.
#[derive(Debug, Clone)]
pub struct TransferErrorBlock {
    file: String,
    message: String,
    hint: Option<String>,
}

impl TransferErrorBlock {
    pub const TITLE: &'static str = "File not synced";

    pub fn new(file: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            message: message.into(),
            hint: None,
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool, width: u16) -> String {
        let title = format!(
            "{} {}",
            Icon::Error.colored(supports_color, supports_unicode),
            ColoredText::error(Self::TITLE).bold().render(supports_color)
        );
        let mut b = Box::with_title(title)
            .style(BoxStyle::Error)
            .max_width(width);

        b.add_line(self.file.clone());
        b.add_empty();
        b.add_line(self.message.clone());

        if let Some(hint) = &self.hint {
            b.add_empty();
            b.add_line(format!("FIX: {}", hint));
        }

        b.render(supports_color, supports_unicode)
    }
}

/// Suggest a next step from the failure text, when one is obvious.
pub fn hint_for(message: &str) -> Option<&'static str> {
    if message.starts_with("missing required settings") {
        Some("fill in the listed keys in the config file")
    } else if message.contains("sshpass not supported") {
        Some("use key_file instead of password_file on Windows")
    } else if message.contains("timed out") {
        Some("raise `timeout` or check that the remote host is reachable")
    } else if message.contains("Permission denied") {
        Some("check remote_user and the configured credentials")
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_title_file_and_message() {
        let rendered = TransferErrorBlock::new("src/main.rs", "scp: connection refused")
            .render(false, false, 80);

        assert!(rendered.contains("[FAIL] File not synced"));
        assert!(rendered.contains("src/main.rs"));
        assert!(rendered.contains("scp: connection refused"));
        assert!(rendered.starts_with('+'));
    }

    #[test]
    fn renders_hint_when_present() {
        let rendered = TransferErrorBlock::new("a", "timed out after 5s")
            .with_hint("raise timeout")
            .render(false, true, 80);
        assert!(rendered.contains("FIX: raise timeout"));
    }

    #[test]
    fn hints_match_known_failures() {
        assert!(hint_for("missing required settings: remote_host").is_some());
        assert!(hint_for("failed to upload a: timed out after 1s").is_some());
        assert!(hint_for("something else").is_none());
    }
}
