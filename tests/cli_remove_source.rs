use assert_cmd::Command;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn isolated_config(dir: &Path) -> std::path::PathBuf {
    let cfg = dir.join("config.xml");
    fs::write(&cfg, "<config><log_level>quiet</log_level></config>").unwrap();
    cfg
}

#[test]
fn remove_source_deletes_the_tree_after_a_clean_run() -> Result<(), Box<dyn std::error::Error>> {
    let td = tempdir()?;
    let source = td.path().join("incoming");
    let dest = td.path().join("sorted");
    fs::create_dir_all(source.join("sub"))?;
    fs::write(source.join("a.txt"), "a")?;
    fs::write(source.join("sub/b.md"), "b")?;

    Command::cargo_bin("ext_move")?
        .env("EXT_MOVE_CONFIG", isolated_config(td.path()))
        .arg("--remove-source")
        .arg("-s")
        .arg(&source)
        .arg("-d")
        .arg(&dest)
        .assert()
        .success()
        .stdout(predicates::str::contains("All files moved."))
        .stdout(predicates::str::contains("Removed source folder"));

    assert!(!source.exists(), "source tree should be gone");
    assert!(dest.join("txt/a.txt").exists());
    assert!(dest.join("md/b.md").exists());
    Ok(())
}

#[test]
fn source_stays_without_the_flag() -> Result<(), Box<dyn std::error::Error>> {
    let td = tempdir()?;
    let source = td.path().join("incoming");
    let dest = td.path().join("sorted");
    fs::create_dir_all(&source)?;
    fs::write(source.join("a.txt"), "a")?;

    // No filter given; absence of a filter must NOT imply deletion.
    Command::cargo_bin("ext_move")?
        .env("EXT_MOVE_CONFIG", isolated_config(td.path()))
        .arg("-s")
        .arg(&source)
        .arg("-d")
        .arg(&dest)
        .assert()
        .success();

    assert!(source.exists(), "source tree must survive without --remove-source");
    Ok(())
}

#[test]
fn remove_source_with_filter_takes_the_leftovers_too() -> Result<(), Box<dyn std::error::Error>> {
    let td = tempdir()?;
    let source = td.path().join("incoming");
    let dest = td.path().join("sorted");
    fs::create_dir_all(&source)?;
    fs::write(source.join("a.jpg"), "a")?;
    fs::write(source.join("b.gif"), "b")?;

    Command::cargo_bin("ext_move")?
        .env("EXT_MOVE_CONFIG", isolated_config(td.path()))
        .args(["-t", "jpg"])
        .arg("--remove-source")
        .arg("-s")
        .arg(&source)
        .arg("-d")
        .arg(&dest)
        .assert()
        .success();

    // Documented: the flag removes the whole tree, unmoved files included.
    assert!(!source.exists());
    assert!(dest.join("jpg/a.jpg").exists());
    assert!(!dest.join("gif").exists());
    Ok(())
}
