use std::fs;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;
use std::time::Duration;
use tempfile::tempdir;

use ext_move::cancel::CancelToken;
use ext_move::engine::{self, EngineOptions, Summary};

// Instrumented mover double: counts how many calls are inside the move at
// once and records the high-water mark.
fn run_counting(jobs: usize, files: usize) -> (usize, usize) {
    let td = tempdir().unwrap();
    let source = td.path().join("incoming");
    let dest = td.path().join("sorted");
    fs::create_dir_all(&source).unwrap();
    for i in 0..files {
        fs::write(source.join(format!("f{i:03}.dat")), "x").unwrap();
    }

    let in_flight = AtomicUsize::new(0);
    let high_water = AtomicUsize::new(0);

    let opts = EngineOptions::new(&source, &dest).with_jobs(jobs);
    let result = engine::run_with_mover(&opts, &CancelToken::new(), |src: &Path, category| {
        let now = in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        high_water.fetch_max(now, Ordering::SeqCst);
        // Hold the slot long enough that overlap would be observable.
        thread::sleep(Duration::from_millis(15));
        in_flight.fetch_sub(1, Ordering::SeqCst);
        Ok(opts.destination.join(category).join(src.file_name().unwrap()))
    })
    .unwrap();

    assert_eq!(result.summary(), Summary::AllMoved);
    (result.attempted(), high_water.load(Ordering::SeqCst))
}

#[test]
fn gate_of_one_serializes_moves() {
    let (attempted, high_water) = run_counting(1, 12);
    assert_eq!(attempted, 12);
    assert_eq!(high_water, 1, "moves overlapped despite a gate of 1");
}

#[test]
fn gate_of_three_is_never_exceeded() {
    let (attempted, high_water) = run_counting(3, 24);
    assert_eq!(attempted, 24);
    assert!(
        high_water <= 3,
        "observed {high_water} concurrent moves past a gate of 3"
    );
}
