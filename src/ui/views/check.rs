use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

/// What `wsmirror check` found out about one file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckLine {
    pub path: String,
    pub eligible: bool,
    pub reason: Option<String>,
    pub command: Option<String>,
    pub error: Option<String>,
}

pub fn render_check_line(line: &CheckLine, supports_color: bool, supports_unicode: bool) -> String {
    let mut out = String::new();

    if line.eligible {
        out.push_str(&format!(
            "{} {} would be mirrored\n",
            Icon::Success.colored(supports_color, supports_unicode),
            line.path
        ));
    } else {
        out.push_str(&format!(
            "{} {} {}\n",
            Icon::Skipped.colored(supports_color, supports_unicode),
            line.path,
            ColoredText::dim(format!(
                "({})",
                line.reason.as_deref().unwrap_or("not eligible")
            ))
            .render(supports_color)
        ));
    }

    if let Some(command) = &line.command {
        out.push_str(&format!(
            "    {} {}\n",
            Icon::Arrow.colored(supports_color, supports_unicode),
            command
        ));
    }
    if let Some(error) = &line.error {
        out.push_str(&format!(
            "    {} {}\n",
            Icon::Error.colored(supports_color, supports_unicode),
            ColoredText::error(error.as_str()).render(supports_color)
        ));
    }
    out
}
