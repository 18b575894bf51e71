// src/main.rs
mod cli;

use clap::Parser;
use cli::{Args, is_config_operation, log_output};
use crossterm::tty::IsTty;
use poe2_leagues::config::Config;
use poe2_leagues::data_fetcher::{ListingSource, create_http_client};
use poe2_leagues::error::AppError;
use poe2_leagues::filter::FilterState;
use poe2_leagues::logging::setup_logging;
use poe2_leagues::pipeline::load_listing;
use poe2_leagues::ui::run_interactive_ui;
use poe2_leagues::view::{HtmlView, TerminalView};
use std::fs::File;
use std::io::{BufWriter, stdout};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    if args.once && args.html.is_some() {
        return Err(AppError::config_error(
            "Cannot use both --once and --html simultaneously",
        ));
    }

    // Config may be broken; logging still comes up with the default location
    let config_log_path = Config::load()
        .await
        .ok()
        .and_then(|config| config.log_file_path);
    let custom_log_path = args.log_file.as_deref().or(config_log_path.as_deref());
    let (log_file_path, _guard) =
        setup_logging(log_output(&args), custom_log_path, "poe2_leagues.log").await?;
    tracing::info!("Logs are being written to: {log_file_path}");

    if args.list_config {
        Config::display().await?;
        return Ok(());
    }

    if is_config_operation(&args) {
        let mut config = Config::load().await.unwrap_or_default();

        if let Some(new_source) = args.new_source {
            config.source = new_source;
        }

        if let Some(new_log_path) = args.new_log_file_path {
            config.log_file_path = Some(new_log_path);
        } else if args.clear_log_file_path {
            config.log_file_path = None;
            println!("Custom log file path cleared. Using default location.");
        }

        config.validate()?;
        config.save().await?;
        println!("Config updated successfully!");
        return Ok(());
    }

    let config = Config::load().await?;
    let source = ListingSource::parse(args.source.as_deref().unwrap_or(&config.source));
    let client = create_http_client(config.http_timeout_seconds)?;
    let filter = FilterState::new(args.search.clone().unwrap_or_default(), args.category);
    tracing::info!("Listing source: {source}");

    if let Some(html_path) = args.html {
        let pipeline = load_listing(&client, &source, filter).await;
        let file = File::create(&html_path).map_err(|e| {
            AppError::render_error(format!("Cannot create HTML output '{html_path}': {e}"))
        })?;
        let mut view = HtmlView::new(BufWriter::new(file));
        pipeline.render(&mut view)?;
        println!("Wrote {html_path}");
        return Ok(());
    }

    if args.once {
        let pipeline = load_listing(&client, &source, filter).await;
        let colors = stdout().is_tty();
        pipeline.render(&mut TerminalView::new(stdout()).with_colors(colors))?;
        return Ok(());
    }

    run_interactive_ui(client, source, filter).await
}
