#![forbid(unsafe_code)]
use std::io::Write as _;

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use difo::cli::{Args, Mode};
use difo::entry::FsProbe;
use difo::error::DifoError;
use difo::view::{self, ViewOptions};
use difo::{slide, terminal};
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() {
    if let Err(e) = run_app() {
        eprintln!("difo: {e:#}");
        std::process::exit(exit_code(&e));
    }
}

fn run_app() -> Result<()> {
    let args = parse_args().validated();
    init_logging(args.log_level());

    if let Some(shell) = args.completions {
        clap_complete::generate(shell, &mut Args::command(), "difo", &mut std::io::stdout());
        return Ok(());
    }

    if !args.path.exists() {
        return Err(DifoError::NotFound { path: args.path }.into());
    }
    let path = args
        .path
        .canonicalize()
        .with_context(|| format!("{}: failed to resolve path", args.path.display()))?;

    let mode = args.mode();
    debug!(path = %path.display(), ?mode, "dispatching");

    let mut out = terminal::buffered_stdout();
    let options = ViewOptions {
        show_hidden: args.show_hidden,
        sort: args.sort_key(),
        terminal_width: terminal::terminal_width(),
        max_depth: args.max_depth,
    };
    let probe = FsProbe;
    let lines = match mode {
        Mode::Tree => view::tree_view(&path, &options, &probe)?,
        Mode::Size => view::size_view(&path, &options, &probe)?,
        Mode::Sort => view::sort_view(&path, &options, &probe)?,
        Mode::Slide => {
            slide::slide_file(&path, &mut out, args.speed)?;
            return Ok(());
        }
    };

    terminal::write_lines(&mut out, &lines, !args.no_color).context("failed to write output")?;
    out.flush().context("failed to write output")?;
    Ok(())
}

/// Help and version go to stdout with status 0; any usage error exits 1.
fn parse_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
            _ => {
                let _ = e.print();
                std::process::exit(1);
            }
        },
    }
}

fn init_logging(default_level: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<DifoError>()
        .map(DifoError::exit_code)
        .unwrap_or(1)
}
