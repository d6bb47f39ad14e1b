//! Application orchestrator.
//! Merges file config with CLI flags, initializes logging, installs the
//! signal handler, runs the relocation engine, and turns its aggregate
//! result into user-facing messages (and optional source-tree removal).

use anyhow::{Context, Result, bail};
use std::fs;
use std::io;
use std::path::Path;
use std::sync::{Arc, Mutex};
use tracing::{debug, error, info};

use crate::cancel::CancelToken;
use crate::cli::Args;
use crate::config;
use crate::engine::{self, EngineOptions, Summary};
use crate::errors::StructuralError;
use crate::logging::init_tracing;
use crate::output as out;
use crate::scan::ExtensionFilter;

/// Run the CLI application.
pub fn run(args: Args) -> Result<()> {
    // Handle --print-config before logging init.
    if args.print_config {
        if let Ok(cfg_env) = std::env::var(config::CONFIG_ENV) {
            out::print_info(&format!(
                "Using {} (explicit):\n  {}",
                config::CONFIG_ENV,
                cfg_env
            ));
            return Ok(());
        }
        let p = config::default_config_path().context("determine default config path")?;
        out::print_info(&format!("Default ext_move config path:\n  {}", p.display()));
        if p.exists() {
            out::print_info("A config file already exists at that location.");
        } else {
            out::print_info("No config file exists there yet; a template is written on first run.");
        }
        return Ok(());
    }

    let (Some(source), Some(destination)) = (args.source.clone(), args.destination.clone()) else {
        bail!("--source and --destination are required");
    };

    // File config supplies defaults; CLI flags win.
    let mut cfg = config::load_config()?.unwrap_or_default();
    if let Some(level) = args.effective_log_level() {
        cfg.log_level = level;
    }
    if let Some(jobs) = args.jobs {
        if jobs == 0 {
            bail!("--jobs must be at least 1");
        }
        cfg.jobs = jobs;
    }

    let guard_opt = init_tracing(&cfg.log_level, cfg.log_file.as_deref(), args.json)
        .context("initialize logging")?;

    // The appender guard must be dropped on SIGINT to flush file logs.
    let cancel = CancelToken::new();
    let guard_slot = Arc::new(Mutex::new(guard_opt));
    {
        let cancel = cancel.clone();
        let guard_slot = Arc::clone(&guard_slot);
        ctrlc::set_handler(move || {
            cancel.cancel();
            out::print_warn("Received interrupt; finishing in-flight moves, then stopping...");
            if let Ok(mut g) = guard_slot.lock() {
                let _ = g.take();
            }
        })
        .context("install signal handler")?;
    }

    debug!("starting ext_move: {args:?}");

    let filter = args.types.as_deref().map(ExtensionFilter::from_tokens);
    let opts = EngineOptions::new(source, destination)
        .with_filter(filter)
        .with_jobs(cfg.jobs);

    let run_result = engine::run(&opts, &cancel);

    // Flush file logs before printing the final summary.
    if let Ok(mut g) = guard_slot.lock() {
        let _ = g.take();
    }

    let result = match run_result {
        Ok(r) => r,
        Err(e) => {
            log_structural_error(&e);
            out::print_error(&e.to_string());
            return Err(e.into());
        }
    };

    match result.summary() {
        Summary::NoneMoved => out::print_user("No files moved."),
        Summary::AllMoved => out::print_user("All files moved."),
        Summary::PartiallyMoved => out::print_user("Some files could not be moved."),
    }
    info!(
        moved = result.moved(),
        failed = result.failed(),
        attempted = result.attempted(),
        "run complete"
    );

    if args.remove_source {
        if cancel.is_cancelled() {
            out::print_warn("Skipping source removal: the run was interrupted.");
        } else if result.failed() > 0 {
            out::print_warn(&format!(
                "Leaving source tree in place: {} file(s) could not be moved.",
                result.failed()
            ));
        } else {
            remove_source_tree(&opts.source);
        }
    }

    Ok(())
}

fn log_structural_error(e: &StructuralError) {
    match e {
        StructuralError::SourceMissing(path) => {
            error!(kind = "source_missing", path = %path.display(), "operation aborted")
        }
        StructuralError::SourceNotDirectory(path) => {
            error!(kind = "source_not_directory", path = %path.display(), "operation aborted")
        }
        StructuralError::SourceUnreadable { path, source } => {
            error!(kind = "source_unreadable", path = %path.display(), error = %source, "operation aborted")
        }
        StructuralError::DestinationCreate { path, source } => {
            error!(kind = "destination_create", path = %path.display(), error = %source, "operation aborted")
        }
        StructuralError::WorkerPool(source) => {
            error!(kind = "worker_pool", error = %source, "operation aborted")
        }
    }
}

/// Best-effort removal of the (hopefully emptied) source tree, with a
/// distinct message per failure class.
fn remove_source_tree(path: &Path) {
    match fs::remove_dir_all(path) {
        Ok(()) => {
            info!(path = %path.display(), "removed source folder");
            out::print_user(&format!("Removed source folder {}", path.display()));
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            out::print_warn(&format!("Source folder {} does not exist", path.display()));
        }
        Err(e) if e.kind() == io::ErrorKind::PermissionDenied => {
            out::print_error(&format!(
                "Permission denied when trying to remove {}",
                path.display()
            ));
        }
        Err(e) => {
            out::print_error(&format!(
                "Error removing source folder {}: {}",
                path.display(),
                e
            ));
        }
    }
}
