use std::path::Path;
use std::process::{Command, Output};

fn write_site(dir: &Path) {
    std::fs::write(
        dir.join("README.md"),
        "# Docs\n[Go](go.md)\n[Java](java.md)\n[Python](python.md)\n",
    )
    .unwrap();
    for page in ["go.md", "java.md", "python.md"] {
        std::fs::write(dir.join(page), "[README](README.md)\n").unwrap();
    }
}

fn run_cli(dir: &Path, args: &[&str]) -> Output {
    let output = Command::new(env!("CARGO_BIN_EXE_linkrank-cli"))
        .args(args)
        .arg("--dir")
        .arg(dir)
        .env_remove("LINKRANK_CONFIG")
        .env_remove("RUST_LOG")
        .output()
        .unwrap();
    assert!(
        output.status.success(),
        "linkrank-cli {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
    output
}

#[test]
fn test_ranks_json_stdout_is_pure_json() {
    let dir = tempfile::tempdir().unwrap();
    write_site(dir.path());

    for extra in [&[][..], &["--verbose"][..]] {
        let mut args = vec!["ranks", "--format", "json"];
        args.extend_from_slice(extra);
        let output = run_cli(dir.path(), &args);

        let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(report["top"]["name"], "README.md");
        assert_eq!(report["ranks"].as_array().unwrap().len(), 4);
    }
}

#[test]
fn test_top_csv_has_header() {
    let dir = tempfile::tempdir().unwrap();
    write_site(dir.path());

    let output = run_cli(dir.path(), &["top", "--format", "csv", "--no-write", "--verbose"]);
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();

    assert_eq!(lines.len(), 2, "unexpected stdout: {:?}", stdout);
    assert_eq!(lines[0], "page,rank");
    assert!(lines[1].starts_with("README.md,1.9"));
}

#[test]
fn test_top_writes_shard() {
    let dir = tempfile::tempdir().unwrap();
    write_site(dir.path());
    let prefix = dir.path().join("out");

    let output = run_cli(
        dir.path(),
        &["top", "--format", "json", "--output", prefix.to_str().unwrap()],
    );
    let top: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(top["name"], "README.md");

    let shard = std::fs::read_to_string(dir.path().join("out-00000-of-00001")).unwrap();
    assert!(shard.starts_with("README.md,"));
}

#[test]
fn test_dump_respects_format() {
    let dir = tempfile::tempdir().unwrap();
    write_site(dir.path());

    let output = run_cli(dir.path(), &["dump", "--format", "json"]);
    let pages: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let pages = pages.as_array().unwrap();
    assert_eq!(pages.len(), 4);
    assert!(pages.iter().all(|p| p["votes"].is_array()));

    let output = run_cli(dir.path(), &["dump", "--format", "csv"]);
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.lines().next(), Some("page,rank,votes"));
    assert_eq!(stdout.lines().count(), 5);
}
