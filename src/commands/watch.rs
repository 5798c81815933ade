use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::{Context, Result};
use wsmirror::application::watch::{describe_remote, EventSink, SaveHook, WatchOptions, WatchUseCase};
use wsmirror::application::{MirrorEvent, MirrorUseCase};
use wsmirror::domain::path::absolutize;
use wsmirror::infrastructure::ProcessRunner;

use crate::ui::context::UiContext;
use crate::ui::views::watch::render_watch_header;

pub fn cmd_watch(cli_config: Option<&Path>, ui: UiContext) -> Result<()> {
    let (config_path, config) = super::load_config(&ui, cli_config)?;

    let running = Arc::new(AtomicBool::new(true));
    let running_clone = Arc::clone(&running);
    ctrlc::set_handler(move || {
        running_clone.store(false, Ordering::SeqCst);
    })
    .context("failed to install Ctrl+C handler")?;

    if !ui.json {
        let folders: Vec<String> = config
            .folders_to_sync
            .iter()
            .map(|f| absolutize(f).display().to_string())
            .collect();
        print!(
            "{}",
            render_watch_header(
                &absolutize(&config_path).display().to_string(),
                &describe_remote(&config),
                &folders,
                ui.color,
                ui.unicode
            )
        );
    }

    let sink: EventSink = Arc::new(move |event: MirrorEvent| super::report(&ui, "watch", &event));
    let hook = SaveHook::new(MirrorUseCase::new(ProcessRunner), Arc::clone(&sink));
    let use_case = WatchUseCase::new(WatchOptions::new(config_path), hook, sink);

    use_case.start(config, running)?;
    Ok(())
}
