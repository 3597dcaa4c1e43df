//! dwlog library root.
//! Exposes the CLI parser, the high-level `run()` function and the modules
//! behind it: the append-only log store, the summarizer gateway and the
//! git sync client.

pub mod cli;
pub mod config;
pub mod context;
pub mod core;
pub mod db;
pub mod errors;
pub mod logging;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use context::AppContext;
use errors::AppResult;

/// Central command dispatcher
pub async fn dispatch(cli: &Cli, ctx: &AppContext) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(ctx),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, ctx),
        Commands::Save { .. } => cli::commands::save::handle(&cli.command, ctx),
        Commands::Show { .. } => cli::commands::show::handle(&cli.command, ctx),
        Commands::Summary => cli::commands::summary::handle(ctx).await,
        Commands::Sync => cli::commands::sync::handle(ctx).await,
        Commands::Session => cli::commands::session::handle(ctx).await,
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, ctx),
        Commands::Backup { .. } => cli::commands::backup::handle(&cli.command, ctx),
    }
}

/// Entry point used by main.rs
pub async fn run() -> AppResult<()> {
    // 1. parse CLI
    let cli = Cli::parse();

    // 2. diagnostics go to stderr, user output to stdout
    logging::init(cli.verbose);

    // 3. load config once and apply overrides
    let ctx = AppContext::from_cli(&cli)?;

    // 4. hand everything to the dispatcher
    dispatch(&cli, &ctx).await
}
