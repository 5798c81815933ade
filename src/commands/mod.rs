pub mod check;
pub mod init;
pub mod push;
pub mod watch;

use std::io;
use std::path::{Path, PathBuf};

use anyhow::Result;
use wsmirror::application::MirrorEvent;
use wsmirror::config::{load_effective, resolve_config_path};
use wsmirror::MirrorConfig;

use crate::ui::blocks::error::{hint_for, TransferErrorBlock};
use crate::ui::blocks::warning::render_config_warnings;
use crate::ui::context::UiContext;
use crate::ui::views::watch::{is_visible, render_event};

/// Locate and load the effective config, printing unknown-key warnings.
pub(crate) fn load_config(ui: &UiContext, cli_config: Option<&Path>) -> Result<(PathBuf, MirrorConfig)> {
    let path = resolve_config_path(cli_config);
    let (config, warnings) = load_effective(&path)?;
    if !warnings.is_empty() {
        eprint!(
            "{}",
            render_config_warnings(&path, &warnings, ui.color, ui.unicode)
        );
    }
    Ok((path, config))
}

/// Local wall-clock time for console lines
pub(crate) fn timestamp() -> String {
    chrono::Local::now().format("%H:%M:%S").to_string()
}

/// Print one event as NDJSON or as a console line.
///
/// Failed transfers additionally get the "File not synced" block on stderr.
pub(crate) fn report(ui: &UiContext, command: &str, event: &MirrorEvent) {
    if ui.json {
        let _ = crate::ui::json::write_line(&mut io::stdout().lock(), &event.to_json(command));
        return;
    }

    if !is_visible(event, ui.verbose) {
        return;
    }

    let rendered = render_event(&timestamp(), event, ui.color, ui.unicode);
    if !event.is_failure() {
        print!("{rendered}");
        return;
    }

    eprint!("{rendered}");
    if let MirrorEvent::TransferFailed { path, message } = event {
        let mut block = TransferErrorBlock::new(path.as_str(), message.as_str());
        if let Some(hint) = hint_for(message) {
            block = block.with_hint(hint);
        }
        eprint!("{}", block.render(ui.color, ui.unicode, ui.caps.width));
    }
}
