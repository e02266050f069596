use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;
use tempfile::TempDir;

fn snipz(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("snipz").unwrap();
    cmd.env("SNIPZ_HOME", home)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .current_dir(home);
    cmd
}

/// Runs `add` and returns the new snippet id (first stdout line).
fn add(home: &Path, args: &[&str]) -> String {
    let output = snipz(home).arg("add").args(args).output().unwrap();
    assert!(output.status.success(), "add failed: {:?}", output);
    String::from_utf8(output.stdout)
        .unwrap()
        .lines()
        .next()
        .unwrap()
        .trim()
        .to_string()
}

fn empty_home() -> TempDir {
    let home = TempDir::new().unwrap();
    // must exist before the first run, which seeds the library
    std::fs::write(home.path().join("config.json"), "{\"seed_samples\": false}").unwrap();
    home
}

#[test]
fn fresh_library_lists_samples() {
    let home = TempDir::new().unwrap();
    snipz(home.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("React useState Hook"))
        .stdout(predicate::str::contains("Python List Comprehension"));

    assert!(home.path().join("code-snippets.json").exists());
    assert!(home.path().join("snippet-categories.json").exists());
}

#[test]
fn add_show_and_remove() {
    let home = empty_home();
    let id = add(
        home.path(),
        &["Greeting", "-l", "rust", "-c", "println!(\"hi\");", "-t", "io, demo"],
    );

    snipz(home.path())
        .args(["show", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Greeting"))
        .stdout(predicate::str::contains("println!(\"hi\");"))
        .stdout(predicate::str::contains("#io #demo"));

    snipz(home.path())
        .args(["rm", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Snippet deleted"));

    snipz(home.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No snippets found."));
}

#[test]
fn add_reads_code_from_stdin() {
    let home = empty_home();
    let id = add_with_stdin(home.path(), "SELECT 1;\n");

    snipz(home.path())
        .args(["show", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("SELECT 1;"));
}

fn add_with_stdin(home: &Path, code: &str) -> String {
    let output = snipz(home)
        .args(["add", "Query", "-l", "sql"])
        .write_stdin(code)
        .output()
        .unwrap();
    assert!(output.status.success());
    String::from_utf8(output.stdout)
        .unwrap()
        .lines()
        .next()
        .unwrap()
        .trim()
        .to_string()
}

#[test]
fn add_without_required_fields_fails() {
    let home = empty_home();
    snipz(home.path())
        .args(["add", "", "-l", "rust", "-c", "x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Validation error"));
}

#[test]
fn add_accepts_whitespace_title() {
    let home = empty_home();
    let id = add(home.path(), &["   ", "-l", "rust", "-c", "x"]);
    assert!(!id.is_empty());
}

#[test]
fn list_filters_by_language_and_tag() {
    let home = empty_home();
    add(home.path(), &["Py one", "-l", "python", "-c", "pass", "-t", "a,b"]);
    add(home.path(), &["Py two", "-l", "python", "-c", "pass", "-t", "a"]);
    add(home.path(), &["Js one", "-l", "javascript", "-c", "1", "-t", "a,b"]);

    snipz(home.path())
        .args(["list", "-l", "python", "-t", "a", "-t", "b"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Py one"))
        .stdout(predicate::str::contains("Py two").not())
        .stdout(predicate::str::contains("Js one").not());
}

#[test]
fn edit_and_favorite() {
    let home = empty_home();
    let id = add(home.path(), &["Old", "-l", "go", "-c", "x"]);

    snipz(home.path())
        .args(["edit", &id, "--title", "New"])
        .assert()
        .success();
    snipz(home.path()).args(["fav", &id]).assert().success();

    snipz(home.path())
        .args(["list", "--favorites"])
        .assert()
        .success()
        .stdout(predicate::str::contains("New"));

    snipz(home.path())
        .args(["edit", "missing", "--title", "X"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Snippet not found"));
}

#[test]
fn export_then_import_into_other_library() {
    let source = TempDir::new().unwrap();
    let export_path = source.path().join("out.json");
    snipz(source.path())
        .args(["export", export_path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 4 snippet(s)"));

    let target = empty_home();
    snipz(target.path())
        .args(["import", export_path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("4 snippet(s) imported"));

    snipz(target.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Docker Compose Example"));
}

#[test]
fn export_defaults_to_fixed_filename() {
    let home = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    let mut cmd = snipz(home.path());
    cmd.current_dir(out.path());
    cmd.arg("export").assert().success();
    assert!(out.path().join("code-snippets.json").exists());
}

#[test]
fn import_rejects_non_array() {
    let home = empty_home();
    let bad = home.path().join("bad.json");
    std::fs::write(&bad, "{\"title\": \"x\"}").unwrap();

    snipz(home.path())
        .args(["import", bad.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid import format"));
}

#[test]
fn import_fills_in_missing_ids() {
    let home = empty_home();
    let partial = home.path().join("partial.json");
    std::fs::write(&partial, r#"[{"title": "Bare", "language": "go", "code": "x"}]"#).unwrap();

    snipz(home.path())
        .args(["import", partial.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 snippet(s) imported"));

    snipz(home.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Bare"));
}

#[test]
fn share_link_round_trips_through_decode() {
    let home = empty_home();
    let id = add(home.path(), &["Hello world", "-l", "rust", "-c", "fn main() {}"]);

    let output = snipz(home.path()).args(["share", &id]).output().unwrap();
    assert!(output.status.success());
    let url = String::from_utf8(output.stdout).unwrap().trim().to_string();
    assert!(url.starts_with("http://localhost:3000/tools/code-snippets?share="));
    assert!(url.contains("Hello%20world"));

    snipz(home.path())
        .args(["share", "--decode", &url])
        .assert()
        .success()
        .stdout(predicate::str::contains("Hello world"))
        .stdout(predicate::str::contains("fn main() {}"));
}

#[test]
fn share_uses_configured_base_url() {
    let home = empty_home();
    snipz(home.path())
        .args(["config", "share-base-url", "https://snips.example/view"])
        .assert()
        .success();
    let id = add(home.path(), &["T", "-l", "c", "-c", "int x;"]);

    snipz(home.path())
        .args(["share", &id])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("https://snips.example/view?share="));
}

#[test]
fn category_lifecycle() {
    let home = empty_home();
    snipz(home.path())
        .args(["category", "add", "My Cat", "-c", "red"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Category added (my-cat)"));

    let id = add(
        home.path(),
        &["T", "-l", "c", "-c", "int x;", "--category", "my-cat"],
    );

    snipz(home.path())
        .args(["category", "rm", "my-cat"])
        .assert()
        .success();

    snipz(home.path())
        .args(["show", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("General"));

    snipz(home.path())
        .args(["category", "rm", "general"])
        .assert()
        .failure();
}

#[test]
fn category_list_shows_snippet_counts() {
    let home = TempDir::new().unwrap();
    snipz(home.path())
        .args(["category", "list"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"frontend\s+● Frontend\s+1\n").unwrap())
        .stdout(predicate::str::is_match(r"general\s+● General\s+0\n").unwrap());
}

#[test]
fn show_prints_timestamps() {
    let home = empty_home();
    let id = add(home.path(), &["T", "-l", "c", "-c", "int x;"]);
    snipz(home.path())
        .args(["show", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created: "))
        .stdout(predicate::str::contains("Updated: "));
}

#[test]
fn tags_and_languages() {
    let home = empty_home();
    add(home.path(), &["A", "-l", "go", "-c", "x", "-t", "zeta, alpha"]);

    snipz(home.path())
        .arg("tags")
        .assert()
        .success()
        .stdout(predicate::str::is_match("(?s)alpha.*zeta").unwrap());

    snipz(home.path())
        .arg("languages")
        .assert()
        .success()
        .stdout(predicate::str::contains("C#"));
}

#[test]
fn config_show_and_reject_bad_values() {
    let home = TempDir::new().unwrap();
    snipz(home.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("default-sort = newest"));

    snipz(home.path())
        .args(["config", "default-sort", "sideways"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Config error"));
}

#[test]
fn data_dir_flag_overrides_env() {
    let home = TempDir::new().unwrap();
    let other = TempDir::new().unwrap();
    snipz(home.path())
        .args(["--data-dir", other.path().to_str().unwrap(), "list"])
        .assert()
        .success();
    assert!(other.path().join("code-snippets.json").exists());
    assert!(!home.path().join("code-snippets.json").exists());
}
