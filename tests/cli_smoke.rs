use std::path::PathBuf;

use strata::ExplodedViewConfig;

fn bin() -> PathBuf {
    std::env::var_os("CARGO_BIN_EXE_strata")
        .map(PathBuf::from)
        .unwrap_or_else(|| {
            let mut p = PathBuf::from("target").join("debug");
            p.push(if cfg!(windows) {
                "strata.exe"
            } else {
                "strata"
            });
            p
        })
}

fn write_fixture(dir: &PathBuf) -> PathBuf {
    std::fs::create_dir_all(dir).unwrap();
    let table = ExplodedViewConfig::default().build().unwrap();
    let path = dir.join("table.json");
    let f = std::fs::File::create(&path).unwrap();
    serde_json::to_writer_pretty(f, &table).unwrap();
    path
}

#[test]
fn cli_validates_an_authored_table() {
    let dir = PathBuf::from("target").join("cli_smoke_validate");
    let table_path = write_fixture(&dir);

    let out = std::process::Command::new(bin())
        .args(["validate", "--in"])
        .arg(&table_path)
        .output()
        .unwrap();

    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("ok: 17 channels"));
}

#[test]
fn cli_eval_prints_channel_values() {
    let dir = PathBuf::from("target").join("cli_smoke_eval");
    let table_path = write_fixture(&dir);

    let out = std::process::Command::new(bin())
        .args(["eval", "--in"])
        .arg(&table_path)
        .args(["--progress", "0.2"])
        .output()
        .unwrap();

    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("assembled.opacity"));
    assert!(stdout.contains("layer.chassis.offset_y"));
}

#[test]
fn cli_rejects_a_broken_table() {
    let dir = PathBuf::from("target").join("cli_smoke_invalid");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("broken.json");
    std::fs::write(
        &path,
        r#"{"channels":[{"name":"c","role":"custom","window":{"start":0.5,"end":0.5},"range":{"v0":0.0,"v1":1.0}}]}"#,
    )
    .unwrap();

    let status = std::process::Command::new(bin())
        .args(["validate", "--in"])
        .arg(&path)
        .status()
        .unwrap();

    assert!(!status.success());
}
