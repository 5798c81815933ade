use std::path::{Path, PathBuf};

use anyhow::Result;
use wsmirror::application::watch::describe_remote;
use wsmirror::application::MirrorUseCase;
use wsmirror::domain::path::absolutize;
use wsmirror::infrastructure::ProcessRunner;
use wsmirror::PathFilter;

use crate::ui::blocks::header::CommandHeader;
use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;
use crate::ui::views::check::{render_check_line, CheckLine};

/// Dry run: report eligibility and the command each file would get.
///
/// Nothing is spawned; the command lines are only built and printed.
pub fn cmd_check(cli_config: Option<&Path>, files: &[PathBuf], ui: UiContext) -> Result<()> {
    let (config_path, config) = super::load_config(&ui, cli_config)?;
    let filter = PathFilter::from_config(&config);
    let planner = MirrorUseCase::new(ProcessRunner);

    let lines: Vec<CheckLine> = files
        .iter()
        .map(|file| {
            let path = absolutize(file);
            let eligibility = filter.evaluate(&path);
            let (command, error) = match planner.plan(&path, &config) {
                Ok(plan) => (Some(plan.command.to_string()), None),
                Err(e) => (None, Some(e.to_string())),
            };
            CheckLine {
                path: path.display().to_string(),
                eligible: config.enabled && eligibility.is_eligible(),
                reason: if !config.enabled {
                    Some("mirroring is disabled".to_string())
                } else if eligibility.is_eligible() {
                    None
                } else {
                    Some(eligibility.reason())
                },
                command,
                error,
            }
        })
        .collect();

    if ui.json {
        for line in &lines {
            let _ = crate::ui::json::emit(serde_json::json!({
                "event": "check",
                "command": "check",
                "path": line.path,
                "eligible": line.eligible,
                "reason": line.reason,
                "command_line": line.command,
                "error": line.error,
            }));
        }
        return Ok(());
    }

    let mut header = CommandHeader::new(Icon::Check, "wsmirror check");
    header.add("Config", config_path.display().to_string());
    header.add("Remote", describe_remote(&config));
    print!("{}", header.render(ui.color, ui.unicode));
    println!();

    for line in &lines {
        print!("{}", render_check_line(line, ui.color, ui.unicode));
    }
    Ok(())
}
