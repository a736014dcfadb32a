use std::path::PathBuf;

fn exe() -> PathBuf {
    std::env::var_os("CARGO_BIN_EXE_scrollvine")
        .map(PathBuf::from)
        .unwrap_or_else(|| {
            let mut p = PathBuf::from("target").join("debug");
            p.push(if cfg!(windows) {
                "scrollvine.exe"
            } else {
                "scrollvine"
            });
            p
        })
}

#[test]
fn cli_ticks_streams_one_state_per_line() {
    let output = std::process::Command::new(exe())
        .args(["ticks", "--steps", "5"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 5);

    let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
    let last: serde_json::Value = serde_json::from_str(lines[4]).unwrap();
    assert_eq!(first["progress"], 0.0);
    assert_eq!(last["progress"], 1.0);
    assert!(!last["segments"].as_array().unwrap().is_empty());
}

#[test]
fn cli_validate_accepts_a_written_scene() {
    let dir = PathBuf::from("target").join("cli_smoke");
    std::fs::create_dir_all(&dir).unwrap();
    let config_path = dir.join("scene.json");

    let config = scrollvine::skill_tree().unwrap();
    let f = std::fs::File::create(&config_path).unwrap();
    serde_json::to_writer_pretty(f, &config).unwrap();

    let config_arg = config_path.to_string_lossy().to_string();
    let output = std::process::Command::new(exe())
        .args(["validate", "--in", config_arg.as_str()])
        .output()
        .unwrap();
    assert!(output.status.success());

    // The summary includes the category legend for the scene's nodes.
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("16 nodes"));
    assert!(stderr.contains("UI/UX & Design"));
}

#[test]
fn cli_validate_rejects_garbage() {
    let dir = PathBuf::from("target").join("cli_smoke");
    std::fs::create_dir_all(&dir).unwrap();
    let bad_path = dir.join("bad.json");
    std::fs::write(&bad_path, "{\"not\": \"a scene\"}").unwrap();

    let bad_arg = bad_path.to_string_lossy().to_string();
    let status = std::process::Command::new(exe())
        .args(["validate", "--in", bad_arg.as_str()])
        .status()
        .unwrap();
    assert!(!status.success());
}
