use std::fs;
use tempfile::tempdir;

use ext_move::cancel::CancelToken;
use ext_move::engine::{self, EngineOptions, Summary};
use ext_move::fs_ops;

// Trip the token from inside the first move: the in-flight move finishes,
// every not-yet-started candidate yields a Cancelled outcome, and the
// outcome count still equals the candidate count.
#[test]
fn cancellation_converts_pending_moves_into_outcomes() -> Result<(), Box<dyn std::error::Error>> {
    let td = tempdir()?;
    let source = td.path().join("incoming");
    let dest = td.path().join("sorted");
    fs::create_dir_all(&source)?;
    let total = 6;
    for i in 0..total {
        fs::write(source.join(format!("f{i}.txt")), "x")?;
    }

    let cancel = CancelToken::new();
    let opts = EngineOptions::new(&source, &dest).with_jobs(1);
    let result = engine::run_with_mover(&opts, &cancel, |src, category| {
        // First admitted move requests shutdown, then completes normally.
        cancel.cancel();
        fs_ops::relocate(src, &opts.destination, category)
    })?;

    assert_eq!(result.attempted(), total, "no outcome may be dropped");
    assert_eq!(result.moved(), 1, "the in-flight move runs to completion");
    assert_eq!(result.failed(), total - 1);
    assert_eq!(result.summary(), Summary::PartiallyMoved);

    let cancelled = result.outcomes().iter().filter(|o| o.is_cancelled()).count();
    assert_eq!(cancelled, total - 1, "skipped moves must be marked cancelled");
    Ok(())
}

// A token tripped before the run starts still produces a well-formed
// result: all candidates accounted for, none moved.
#[test]
fn pre_cancelled_run_moves_nothing() -> Result<(), Box<dyn std::error::Error>> {
    let td = tempdir()?;
    let source = td.path().join("incoming");
    let dest = td.path().join("sorted");
    fs::create_dir_all(&source)?;
    fs::write(source.join("a.txt"), "a")?;
    fs::write(source.join("b.txt"), "b")?;

    let cancel = CancelToken::new();
    cancel.cancel();

    let opts = EngineOptions::new(&source, &dest);
    let result = engine::run(&opts, &cancel)?;

    assert_eq!(result.attempted(), 2);
    assert_eq!(result.moved(), 0);
    assert_eq!(result.summary(), Summary::NoneMoved);
    assert!(result.outcomes().iter().all(|o| o.is_cancelled()));
    assert!(source.join("a.txt").exists());
    assert!(source.join("b.txt").exists());
    Ok(())
}
