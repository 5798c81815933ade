use std::path::Path;

use wsmirror::config::ConfigWarning;

use crate::ui::primitives::icon::Icon;
use crate::ui::widgets::r#box::{Box, BoxStyle};

/// Boxed list of unknown config keys
pub fn render_config_warnings(
    path: &Path,
    warnings: &[ConfigWarning],
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let header = format!(
        "{} Unknown config keys in {}",
        Icon::Warning.colored(supports_color, supports_unicode),
        path.display()
    );
    let mut b = Box::with_title(header).style(BoxStyle::Warning);
    for w in warnings {
        let location = match w.line {
            Some(line) => format!("'{}' (line {})", w.key, line),
            None => format!("'{}'", w.key),
        };
        match &w.suggestion {
            Some(suggestion) => b.add_line(format!("{location}: did you mean '{suggestion}'?")),
            None => b.add_line(location),
        }
    }
    b.render(supports_color, supports_unicode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn lists_keys_with_suggestions() {
        let warnings = vec![ConfigWarning {
            key: "remote_hots".to_string(),
            file: PathBuf::from("/c.toml"),
            line: Some(3),
            suggestion: Some("remote_host".to_string()),
        }];

        let rendered = render_config_warnings(Path::new("/c.toml"), &warnings, false, false);
        assert!(rendered.contains("[WARN] Unknown config keys in /c.toml"));
        assert!(rendered.contains("'remote_hots' (line 3): did you mean 'remote_host'?"));
    }
}
