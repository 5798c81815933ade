use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{bail, Result};
use wsmirror::application::watch::{describe_remote, run_transfer, EventSink};
use wsmirror::application::{MirrorEvent, MirrorUseCase};
use wsmirror::domain::path::absolutize;
use wsmirror::infrastructure::ProcessRunner;
use wsmirror::PathFilter;

use crate::ui::context::UiContext;
use crate::ui::views::push::{render_push_header, render_push_summary};

/// Mirror each file synchronously, in order.
pub fn cmd_push(cli_config: Option<&Path>, files: &[PathBuf], force: bool, ui: UiContext) -> Result<()> {
    let (config_path, config) = super::load_config(&ui, cli_config)?;

    if !ui.json {
        print!(
            "{}",
            render_push_header(
                &absolutize(&config_path).display().to_string(),
                &describe_remote(&config),
                ui.color,
                ui.unicode
            )
        );
        println!();
    }

    // Every file gets a line here, skipped ones included.
    let ui = UiContext {
        verbose: ui.verbose.max(1),
        ..ui
    };
    let sink: EventSink = Arc::new(move |event: MirrorEvent| super::report(&ui, "push", &event));

    let mirror = MirrorUseCase::new(ProcessRunner);
    let filter = PathFilter::from_config(&config);
    let mut not_synced = 0usize;

    for file in files {
        let path = absolutize(file);

        if !force {
            if !config.enabled {
                sink(MirrorEvent::Disabled {
                    path: path.display().to_string(),
                });
                not_synced += 1;
                continue;
            }
            let eligibility = filter.evaluate(&path);
            if !eligibility.is_eligible() {
                sink(MirrorEvent::Skipped {
                    path: path.display().to_string(),
                    reason: eligibility.reason(),
                });
                not_synced += 1;
                continue;
            }
        }

        if !run_transfer(&mirror, &path, &config, &sink) {
            not_synced += 1;
        }
    }

    if !ui.json {
        print!(
            "{}",
            render_push_summary(files.len() - not_synced, files.len(), ui.color, ui.unicode)
        );
    }

    if not_synced > 0 {
        bail!("{} of {} file(s) not synced", not_synced, files.len());
    }
    Ok(())
}
