use crate::ui::blocks::header::CommandHeader;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub fn render_push_header(
    config: &str,
    remote: &str,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut header = CommandHeader::new(Icon::Push, "wsmirror push");
    header.add("Config", config);
    header.add("Remote", remote);
    header.render(supports_color, supports_unicode)
}

/// Closing line: green when everything went out, yellow otherwise.
pub fn render_push_summary(
    synced: usize,
    total: usize,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    if synced == total {
        let text = ColoredText::success(format!("Pushed {} file(s)", total));
        format!(
            "\n{} {}\n",
            Icon::Success.colored(supports_color, supports_unicode),
            text.render(supports_color)
        )
    } else {
        let text = ColoredText::warning(format!(
            "Pushed {} of {} file(s), {} not synced",
            synced,
            total,
            total - synced
        ));
        format!(
            "\n{} {}\n",
            Icon::Warning.colored(supports_color, supports_unicode),
            text.render(supports_color)
        )
    }
}
