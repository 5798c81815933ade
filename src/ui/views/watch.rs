use wsmirror::application::MirrorEvent;

use crate::ui::blocks::header::CommandHeader;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub fn render_watch_header(
    config: &str,
    remote: &str,
    folders: &[String],
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut header = CommandHeader::new(Icon::Watch, "wsmirror watch");
    header.add("Config", config);
    header.add("Remote", remote);
    if folders.is_empty() {
        header.add("Folders", "(none)");
    }
    for folder in folders {
        header.add("Folder", folder.as_str());
    }
    header.add("Hint", "Press Ctrl+C to stop");
    header.render(supports_color, supports_unicode)
}

/// Whether a text-mode event is printed at the given verbosity.
///
/// Outcomes and errors always show; per-save bookkeeping needs `-v`.
pub fn is_visible(event: &MirrorEvent, verbose: u8) -> bool {
    match event {
        MirrorEvent::FileSaved { .. } | MirrorEvent::Skipped { .. } => verbose > 0,
        _ => true,
    }
}

/// One console line per event, prefixed with `[HH:MM:SS]`.
pub fn render_event(
    timestamp: &str,
    event: &MirrorEvent,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let prefix = ColoredText::dim(format!("[{}]", timestamp)).render(supports_color);
    let icon = |i: Icon| i.colored(supports_color, supports_unicode);

    match event {
        MirrorEvent::WatchStarted {
            remote, folders, ..
        } => format!(
            "{} {} Watching {} folder(s) for {}\n",
            prefix,
            icon(Icon::Watch),
            folders.len(),
            remote
        ),
        MirrorEvent::SettingsReloaded { warnings } => {
            if *warnings > 0 {
                format!(
                    "{} {} Settings reloaded ({} unknown key(s))\n",
                    prefix,
                    icon(Icon::Warning),
                    warnings
                )
            } else {
                format!("{} {} Settings reloaded\n", prefix, icon(Icon::Arrow))
            }
        }
        MirrorEvent::FileSaved { path } => {
            format!("{} {} Saved: {}\n", prefix, icon(Icon::Arrow), path)
        }
        MirrorEvent::Disabled { path } => format!(
            "{} {} Not sent: {} (mirroring is disabled)\n",
            prefix,
            icon(Icon::Skipped),
            path
        ),
        MirrorEvent::Skipped { path, reason } => format!(
            "{} {} Skipped: {} ({})\n",
            prefix,
            icon(Icon::Skipped),
            path,
            reason
        ),
        MirrorEvent::TransferSucceeded {
            destination,
            elapsed_ms,
            path,
        } => format!(
            "{} {} Synced: {} -> {} ({} ms)\n",
            prefix,
            icon(Icon::Success),
            path,
            destination,
            elapsed_ms
        ),
        MirrorEvent::TransferFailed { path, message } => format!(
            "{} {} Not synced: {}\n{}\n",
            prefix,
            icon(Icon::Error),
            path,
            indent(message)
        ),
        MirrorEvent::Error { message } => format!(
            "{} {} Error: {}\n",
            prefix,
            icon(Icon::Error),
            message
        ),
        MirrorEvent::Shutdown => format!(
            "\n{} {} Watch stopped.\n",
            prefix,
            icon(Icon::Watch)
        ),
    }
}

fn indent(text: &str) -> String {
    text.lines()
        .map(|l| format!("    {l}"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_started_event_with_watch_icon() {
        let event = MirrorEvent::WatchStarted {
            config: "/c.toml".to_string(),
            remote: "deploy@host:/srv".to_string(),
            folders: vec!["/w/src".to_string()],
        };
        let rendered = render_event("12:00:00", &event, false, false);
        assert_eq!(
            rendered,
            "[12:00:00] [~] Watching 1 folder(s) for deploy@host:/srv\n"
        );
    }

    #[test]
    fn renders_success_with_destination() {
        let event = MirrorEvent::TransferSucceeded {
            path: "/w/src/a.rs".to_string(),
            destination: "deploy@host:/srv/src/a.rs".to_string(),
            elapsed_ms: 42,
        };
        let rendered = render_event("00:00:01", &event, false, true);
        assert!(rendered.starts_with("[00:00:01] ✓ Synced: /w/src/a.rs"));
        assert!(rendered.contains("(42 ms)"));
    }

    #[test]
    fn failure_output_is_indented() {
        let event = MirrorEvent::TransferFailed {
            path: "/w/a".to_string(),
            message: "line one\nline two".to_string(),
        };
        let rendered = render_event("00:00:00", &event, false, false);
        assert!(rendered.contains("[FAIL] Not synced: /w/a\n    line one\n    line two\n"));
    }

    #[test]
    fn skipped_saves_need_verbose() {
        let event = MirrorEvent::Skipped {
            path: "/w/a.log".to_string(),
            reason: "excluded by pattern '*.log'".to_string(),
        };
        assert!(!is_visible(&event, 0));
        assert!(is_visible(&event, 1));
        assert!(is_visible(&MirrorEvent::Shutdown, 0));
    }

    #[test]
    fn header_lists_folders() {
        let rendered = render_watch_header(
            "/c.toml",
            "u@h:/srv",
            &["/w/a".to_string(), "/w/b".to_string()],
            false,
            false,
        );
        assert!(rendered.contains("/w/a"));
        assert!(rendered.contains("/w/b"));
        assert!(rendered.contains("Press Ctrl+C to stop"));
    }
}
