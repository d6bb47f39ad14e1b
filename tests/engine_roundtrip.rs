use std::fs;
use tempfile::tempdir;

use ext_move::cancel::CancelToken;
use ext_move::engine::{self, EngineOptions, Summary};

// Full no-filter run: every file ends up at destination/<category>/<name>
// and is gone from its original location.
#[test]
fn every_file_lands_in_its_category_folder() -> Result<(), Box<dyn std::error::Error>> {
    let td = tempdir()?;
    let source = td.path().join("incoming");
    let dest = td.path().join("sorted");
    fs::create_dir_all(source.join("sub"))?;

    let expectations = [
        ("report.pdf", "pdf/report.pdf"),
        ("photo.JPG", "jpg/photo.JPG"),
        ("sub/notes.txt", "txt/notes.txt"),
        ("sub/archive.tar.gz", "other/archive.tar.gz"),
        ("sub/README", "other/README"),
    ];
    for (rel, _) in &expectations {
        fs::write(source.join(rel), *rel)?;
    }

    let opts = EngineOptions::new(&source, &dest).with_jobs(4);
    let result = engine::run(&opts, &CancelToken::new())?;

    assert_eq!(result.summary(), Summary::AllMoved);
    assert_eq!(result.attempted(), expectations.len());
    assert_eq!(result.moved(), expectations.len());

    for (rel, dest_rel) in &expectations {
        let moved_to = dest.join(dest_rel);
        assert!(moved_to.exists(), "{dest_rel} missing");
        assert!(!source.join(rel).exists(), "{rel} still at origin");
        assert_eq!(fs::read_to_string(&moved_to)?, *rel, "content mismatch for {rel}");
    }
    Ok(())
}

// A destination root that does not exist yet is created, not an error.
#[test]
fn destination_root_is_created_on_demand() -> Result<(), Box<dyn std::error::Error>> {
    let td = tempdir()?;
    let source = td.path().join("incoming");
    let dest = td.path().join("deep").join("sorted");
    fs::create_dir_all(&source)?;
    fs::write(source.join("one.txt"), "1")?;

    let opts = EngineOptions::new(&source, &dest);
    let result = engine::run(&opts, &CancelToken::new())?;

    assert_eq!(result.summary(), Summary::AllMoved);
    assert!(dest.join("txt/one.txt").exists());
    Ok(())
}

// Filtered run: non-matching files stay untouched at their original paths.
#[test]
fn filtered_run_leaves_unselected_files_alone() -> Result<(), Box<dyn std::error::Error>> {
    use ext_move::scan::ExtensionFilter;

    let td = tempdir()?;
    let source = td.path().join("incoming");
    let dest = td.path().join("sorted");
    fs::create_dir_all(&source)?;
    fs::write(source.join("a.jpg"), "a")?;
    fs::write(source.join("b.PNG"), "b")?;
    fs::write(source.join("c.gif"), "c")?;

    let filter = ExtensionFilter::from_tokens(["jpg", "png"]);
    let opts = EngineOptions::new(&source, &dest).with_filter(Some(filter));
    let result = engine::run(&opts, &CancelToken::new())?;

    assert_eq!(result.summary(), Summary::AllMoved);
    assert_eq!(result.attempted(), 2);
    assert!(dest.join("jpg/a.jpg").exists());
    assert!(dest.join("png/b.PNG").exists());
    assert!(source.join("c.gif").exists(), "c.gif must stay put");
    assert!(!dest.join("gif").exists());
    Ok(())
}
