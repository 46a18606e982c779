//! # Stubwright CLI
//!
//! Repository, transformer and filter generator for Laravel-style projects.
//!
//! ## Startup sequence
//!
//! 1. Parse CLI arguments (clap handles `--help` / `--version` early-exit).
//! 2. Initialise the tracing subscriber (logging).
//! 3. Build the [`OutputManager`].
//! 4. Boot: load configuration, validate settings, register bindings.
//! 5. Dispatch to the appropriate command handler.
//! 6. Translate any [`CliError`] into a user-facing message and exit code.
//!
//! ## Exit codes
//!
//! | Code | Meaning                        |
//! |------|--------------------------------|
//! |  0   | Success                        |
//! |  1   | I/O or internal error          |
//! |  2   | User / input error             |
//! |  3   | Resource not found (stub)      |
//! |  4   | Configuration error            |

use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, info, instrument};

use stubwright_core::domain::{ArtifactKind, GeneratorRequest};

use crate::{
    cli::{Cli, Commands},
    context::AppContext,
    error::{CliError, CliResult},
    logging::init_logging,
    output::OutputManager,
};

mod cli;
mod commands;
mod config;
mod context;
mod error;
mod logging;
mod output;

fn main() -> ExitCode {
    // .env first, so RUST_LOG and STUBWRIGHT__* from it apply everywhere.
    let _ = dotenvy::dotenv();

    // ── 1. Parse arguments ────────────────────────────────────────────────
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version also arrive here; they are not failures.
            let _ = e.print();
            return ExitCode::from(if e.use_stderr() { 2 } else { 0 });
        }
    };

    // ── 2. Initialise tracing ─────────────────────────────────────────────
    if let Err(e) = init_logging(&cli.global) {
        eprintln!("Failed to initialise logging: {e}");
        return ExitCode::from(1);
    }

    debug!(
        verbose = cli.global.verbose,
        quiet = cli.global.quiet,
        no_color = cli.global.no_color,
        "CLI started"
    );

    // ── 3. Build output manager ───────────────────────────────────────────
    let output = OutputManager::new(&cli.global);
    let verbose = cli.global.verbose > 0;

    // ── 4-6. Boot, dispatch, error handling ───────────────────────────────
    match run(cli, &output) {
        Ok(()) => {
            info!("Stubwright completed successfully");
            ExitCode::SUCCESS
        }
        Err(e) => handle_error(e, verbose, &output),
    }
}

/// Dispatch to the correct command handler.
///
/// `init` and `completions` run without booting so they work before a
/// valid configuration exists.
#[instrument(skip_all)]
fn run(cli: Cli, output: &OutputManager) -> CliResult<()> {
    let Cli { global, command } = cli;
    match command {
        Commands::Completions(args) => commands::completions::execute(args),
        Commands::Init(args) => commands::init::execute(args, &global, output),
        command => {
            let ctx = AppContext::boot(&global)?;
            dispatch(command, &ctx, output)
        }
    }
}

fn dispatch(command: Commands, ctx: &AppContext, output: &OutputManager) -> CliResult<()> {
    match command {
        Commands::MakeRepository(args) => commands::make::execute(
            ArtifactKind::Repository,
            GeneratorRequest::new(args.name).model(args.model),
            args.dry_run,
            ctx,
            output,
        ),
        Commands::MakeTransformer(args) => commands::make::execute(
            ArtifactKind::Transformer,
            GeneratorRequest::new(args.name).model(args.model),
            args.dry_run,
            ctx,
            output,
        ),
        Commands::MakeFilter(args) => commands::make::execute(
            ArtifactKind::Filter,
            GeneratorRequest::new(args.name),
            args.dry_run,
            ctx,
            output,
        ),
        Commands::Bindings(cmd) => commands::bindings::execute(cmd, ctx, output),
        Commands::Config(cmd) => commands::config::execute(cmd, ctx, output),
        Commands::Init(_) | Commands::Completions(_) => Ok(()),
    }
}

/// Translate a `CliError` into a user message and an appropriate exit code.
///
/// This is the single place where structured errors become human-readable
/// output and OS exit codes.
fn handle_error(err: CliError, verbose: bool, output: &OutputManager) -> ExitCode {
    err.log();

    // stderr, so the message survives a redirected stdout
    let msg = if output.supports_color() && std::io::IsTerminal::is_terminal(&std::io::stderr()) {
        err.format_colored(verbose)
    } else {
        err.format_plain(verbose)
    };
    eprint!("{msg}");

    ExitCode::from(err.exit_code())
}

// ── tests ─────────────────────────────────────────────────────────────────────
