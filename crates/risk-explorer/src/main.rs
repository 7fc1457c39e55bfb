mod cli;
mod config;
mod logging;
mod report;
mod ui;

use crate::cli::Args;
use crate::config::Config;
use crate::logging::init_tracing;
use crate::report::write_report;
use crate::ui::terminal::ExplorerTerminal;
use crate::ui::{draw_ui, handle_key_event, restore_terminal, setup_terminal, ViewState};
use anyhow::Context;
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use risk_catalog::Dataset;
use std::io;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let (config, config_source) = Config::load_or_default(&args.config)
        .with_context(|| format!("failed to load config {}", args.config.display()))?;
    let _file_guard = init_tracing(&args.log_dir, args.log_to_stderr, &config.log_level)?;
    tracing::info!(
        event = "config.loaded",
        path = %args.config.display(),
        source = config_source.as_str(),
    );

    let data_path = args.data.clone().unwrap_or_else(|| config.data_path.clone());
    let dataset = Dataset::load(&data_path)?;

    let category = args
        .category
        .as_deref()
        .or(config.default_category.as_deref());
    let mut state = ViewState::new(
        &dataset,
        category,
        args.search.clone(),
        config.display.scroll_step,
    )?;

    if args.print {
        let mut stdout = io::stdout().lock();
        write_report(&mut stdout, &dataset, &state)?;
        return Ok(());
    }

    let mut terminal = setup_terminal()?;
    let result = run(&mut terminal, &dataset, &mut state);
    restore_terminal(&mut terminal)?;
    result
}

fn run(terminal: &mut ExplorerTerminal, dataset: &Dataset, state: &mut ViewState) -> anyhow::Result<()> {
    tracing::info!(event = "ui.start", category = %state.category_name());
    loop {
        terminal.draw(|frame| draw_ui(frame, dataset, state))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if handle_key_event(key, state) {
                break;
            }
        }
    }
    tracing::info!(event = "ui.exit");
    Ok(())
}
