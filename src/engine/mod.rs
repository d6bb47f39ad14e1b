//! Relocation engine.
//!
//! Orchestrates scan -> classify -> move for one invocation: one task per
//! candidate file, run on a dedicated rayon pool whose thread count is the
//! admission gate bounding concurrent moves. The parallel collect is the
//! join point, so the engine never returns before every task has produced
//! its outcome, and outcomes may complete in any order.
//!
//! Per-file failures are data: they land in the outcome list and the other
//! tasks keep going. Only structural problems (missing source root,
//! uncreatable destination root) abort before anything is scheduled.

mod outcome;

pub use outcome::{MoveOutcome, OperationResult, Summary};

use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::cancel::CancelToken;
use crate::classify;
use crate::errors::{MoveError, StructuralError};
use crate::fs_ops;
use crate::output as out;
use crate::scan::{self, ExtensionFilter};

/// Default admission gate width: moves are serialized unless asked otherwise.
pub const DEFAULT_JOBS: usize = 1;

/// One engine invocation's inputs. `jobs` is the admission gate width,
/// always passed in explicitly; there is no process-wide worker constant.
#[derive(Debug, Clone)]
pub struct EngineOptions {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub filter: Option<ExtensionFilter>,
    pub jobs: usize,
}

impl EngineOptions {
    pub fn new(source: impl Into<PathBuf>, destination: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
            filter: None,
            jobs: DEFAULT_JOBS,
        }
    }

    pub fn with_filter(mut self, filter: Option<ExtensionFilter>) -> Self {
        self.filter = filter;
        self
    }

    pub fn with_jobs(mut self, jobs: usize) -> Self {
        self.jobs = jobs;
        self
    }
}

/// Run one relocation operation with the production mover.
pub fn run(opts: &EngineOptions, cancel: &CancelToken) -> Result<OperationResult, StructuralError> {
    run_with_mover(opts, cancel, |src, category| {
        fs_ops::relocate(src, &opts.destination, category)
    })
}

/// Engine loop with an injectable move primitive.
///
/// The mover seam exists so tests can observe scheduling (count concurrent
/// entries, inject failures, trip the cancel token mid-run) without touching
/// real files. Production callers use [`run`].
pub fn run_with_mover<M>(
    opts: &EngineOptions,
    cancel: &CancelToken,
    mover: M,
) -> Result<OperationResult, StructuralError>
where
    M: Fn(&Path, &str) -> Result<PathBuf, MoveError> + Sync,
{
    fs::create_dir_all(&opts.destination).map_err(|e| StructuralError::DestinationCreate {
        path: opts.destination.clone(),
        source: e,
    })?;

    debug!(source = %opts.source.display(), "scanning source tree");
    let candidates = scan::scan_candidates(&opts.source, opts.filter.as_ref())?;
    info!(candidates = candidates.len(), "scan complete");

    if candidates.is_empty() {
        return Ok(OperationResult::default());
    }

    // The pool IS the admission gate: at most `jobs` movers run at once.
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(opts.jobs.max(1))
        .thread_name(|i| format!("ext-move-{i}"))
        .build()?;

    debug!(jobs = opts.jobs.max(1), "scheduling moves");
    let outcomes: Vec<MoveOutcome> = pool.install(|| {
        candidates
            .into_par_iter()
            .map(|src| {
                let category = classify::category(&src);
                if cancel.is_cancelled() {
                    warn!(src = %src.display(), "cancelled before move started");
                    out::print_user(&format!("Cancelled moving {}", src.display()));
                    return MoveOutcome::failed(src, category, MoveError::Cancelled);
                }
                match mover(src.as_path(), category.as_str()) {
                    Ok(dest) => {
                        out::print_user(&format!(
                            "Moved {} to {}",
                            src.display(),
                            dest.display()
                        ));
                        MoveOutcome::moved(src, category, dest)
                    }
                    Err(e) => {
                        warn!(src = %src.display(), error = %e, "move failed");
                        MoveOutcome::failed(src, category, e)
                    }
                }
            })
            .collect()
    });

    let result = OperationResult::from_outcomes(outcomes);
    info!(
        moved = result.moved(),
        failed = result.failed(),
        "relocation finished"
    );
    Ok(result)
}
