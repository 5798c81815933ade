//! Init command - write a starter config file

use std::path::Path;

use anyhow::Result;
use wsmirror::config::{resolve_config_path, write_template};

use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;

pub fn cmd_init(cli_config: Option<&Path>, force: bool, ui: UiContext) -> Result<()> {
    let path = resolve_config_path(cli_config);

    if let Err(e) = write_template(&path, force) {
        if ui.json {
            let _ = crate::ui::json::emit(serde_json::json!({
                "event": "error",
                "command": "init",
                "path": path.display().to_string(),
                "message": e.to_string(),
            }));
        }
        return Err(e.into());
    }

    if ui.json {
        let _ = crate::ui::json::emit(serde_json::json!({
            "event": "complete",
            "command": "init",
            "path": path.display().to_string(),
        }));
    } else {
        println!(
            "{} Created {}",
            Icon::Success.colored(ui.color, ui.unicode),
            path.display()
        );
        println!(
            "{} Next: fill in the remote settings, then run `wsmirror watch`",
            Icon::Arrow.colored(ui.color, ui.unicode)
        );
    }

    Ok(())
}
