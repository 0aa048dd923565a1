//! End-to-end tests for the sector-sync binary.

use sector_sync::testing::{
    assert_cli_failure, assert_cli_success, execute_sector_sync, write_input,
};
use tempfile::TempDir;

const BIN: &str = env!("CARGO_BIN_EXE_sector-sync");

/// A row with id, code, name and coordinates; every other column empty.
fn row(id: &str, code: &str, name: &str, lat: &str, lon: &str) -> String {
    format!("{id};{code};{name}{}{lat};{lon}", ";".repeat(14))
}

fn rows(ids: std::ops::RangeInclusive<i64>) -> Vec<String> {
    ids.map(|id| {
        row(
            &id.to_string(),
            &format!("S{id}"),
            &format!("Setor {id}"),
            "-23.5",
            "-46.6",
        )
    })
    .collect()
}

fn path_str(path: &std::path::Path) -> &str {
    path.to_str().unwrap()
}

#[test]
fn test_script_with_correction_and_skip() {
    let temp_dir = TempDir::new().unwrap();
    let good = row("10", "S1", "Setor A's", "-23.5", "46.6");
    let bad = row("abc", "S2", "Setor B", "", "");
    let input = write_input(&temp_dir, "setores.csv", &[good.as_str(), bad.as_str()]).unwrap();
    let out = temp_dir.path().join("import_setores.sql");

    let output = execute_sector_sync(
        BIN,
        &["script", "--input", path_str(&input), "--output", path_str(&out)],
    )
    .unwrap();
    assert_cli_success(&output, "script");

    let script = std::fs::read_to_string(&out).unwrap();
    assert!(script.contains("DELETE FROM SETORES;"));
    assert!(script.contains("'Setor A''s'"));
    assert!(script.contains("-46.6"));
    assert_eq!(script.matches("INSERT INTO SETORES").count(), 1);
    assert!(script.contains("\nCOMMIT;\n"));
    assert!(script.contains("WHERE ROWNUM <= 10;"));
    assert!(script.ends_with("EXIT;\n"));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Rows read: 2\n"));
    assert!(stdout.contains("Statements generated: 1\n"));
    assert!(stdout.contains("Skipped: 1\n"));
    assert!(stdout.contains("Corrected: 1\n"));
    assert!(stdout.contains("(id 10) corrected [LONGITUDE]"));
    assert!(stdout.contains("(id abc) skipped [ID]: invalid id 'abc'"));
}

#[test]
fn test_script_postgresql_keep_existing() {
    let temp_dir = TempDir::new().unwrap();
    let rows = rows(1..=3);
    let refs: Vec<&str> = rows.iter().map(String::as_str).collect();
    let input = write_input(&temp_dir, "setores.csv", &refs).unwrap();
    let out = temp_dir.path().join("import.sql");

    let output = execute_sector_sync(
        BIN,
        &[
            "script",
            "--input",
            path_str(&input),
            "--output",
            path_str(&out),
            "--dialect",
            "postgresql",
            "--table",
            "public.setores",
            "--keep-existing",
        ],
    )
    .unwrap();
    assert_cli_success(&output, "script --dialect postgresql");

    let script = std::fs::read_to_string(&out).unwrap();
    assert!(script.contains("\nBEGIN;\n"));
    assert!(!script.contains("DELETE FROM"));
    assert_eq!(script.matches("INSERT INTO public.setores").count(), 3);
    assert!(script.contains("ORDER BY ID LIMIT 10;"));
    assert!(!script.contains("EXIT;"));
}

#[test]
fn test_batches() {
    let temp_dir = TempDir::new().unwrap();
    let rows = rows(1..=25);
    let refs: Vec<&str> = rows.iter().map(String::as_str).collect();
    let input = write_input(&temp_dir, "setores.csv", &refs).unwrap();
    let out_dir = temp_dir.path().join("lotes");

    let output = execute_sector_sync(
        BIN,
        &["batches", "--input", path_str(&input), "--output-dir", path_str(&out_dir)],
    )
    .unwrap();
    assert_cli_success(&output, "batches");

    let mut files: Vec<String> = std::fs::read_dir(&out_dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
        .collect();
    files.sort();
    assert_eq!(files, vec!["batch_001.sql", "batch_002.sql", "batch_003.sql"]);

    let last = std::fs::read_to_string(out_dir.join("batch_003.sql")).unwrap();
    assert!(last.starts_with("-- Batch 3/3 - records 21 to 25\nBEGIN\n"));
    assert_eq!(last.matches("INSERT INTO SETORES").count(), 5);
    assert!(last.ends_with("COMMIT;\nEND;\n/\n"));
}

#[test]
fn test_zero_batch_size_fails() {
    let temp_dir = TempDir::new().unwrap();
    let rows = rows(1..=2);
    let refs: Vec<&str> = rows.iter().map(String::as_str).collect();
    let input = write_input(&temp_dir, "setores.csv", &refs).unwrap();
    let out_dir = temp_dir.path().join("lotes");

    let output = execute_sector_sync(
        BIN,
        &[
            "batches",
            "--input",
            path_str(&input),
            "--output-dir",
            path_str(&out_dir),
            "--batch-size",
            "0",
        ],
    )
    .unwrap();
    assert_cli_failure(&output, "batches --batch-size 0");
}

#[test]
fn test_manifest() {
    let temp_dir = TempDir::new().unwrap();
    let rows = rows(1..=4);
    let refs: Vec<&str> = rows.iter().map(String::as_str).collect();
    let input = write_input(&temp_dir, "setores.csv", &refs).unwrap();
    let out = temp_dir.path().join("comandos.json");

    let output = execute_sector_sync(
        BIN,
        &["manifest", "--input", path_str(&input), "--output", path_str(&out)],
    )
    .unwrap();
    assert_cli_success(&output, "manifest");

    let manifest: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
    let entries = manifest.as_array().unwrap();
    assert_eq!(entries.len(), 4);
    assert_eq!(entries[0]["id"], 1);
    assert_eq!(entries[0]["code"], "S1");
    assert_eq!(entries[3]["name"], "Setor 4");
    assert!(entries[3]["sql"]
        .as_str()
        .unwrap()
        .starts_with("INSERT INTO SETORES"));
}

#[test]
fn test_missing_input_is_fatal() {
    let temp_dir = TempDir::new().unwrap();
    let out = temp_dir.path().join("import.sql");

    let output = execute_sector_sync(
        BIN,
        &["script", "--input", "/nonexistent/setores.csv", "--output", path_str(&out)],
    )
    .unwrap();
    assert_cli_failure(&output, "script with missing input");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to read input file"));
    assert!(!out.exists());
}

#[test]
fn test_checkpoint_resume() {
    let temp_dir = TempDir::new().unwrap();
    let rows = rows(1..=7);
    let refs: Vec<&str> = rows.iter().map(String::as_str).collect();
    let input = write_input(&temp_dir, "setores.csv", &refs).unwrap();
    let checkpoint = temp_dir.path().join("applied.json");
    let out_dir = temp_dir.path().join("lotes");

    let output = execute_sector_sync(
        BIN,
        &["checkpoint", "mark", "--checkpoint-file", path_str(&checkpoint), "--ids", "1,2,3,4,5"],
    )
    .unwrap();
    assert_cli_success(&output, "checkpoint mark");
    assert!(String::from_utf8_lossy(&output.stdout).contains("Marked 5 new ids"));

    let output = execute_sector_sync(
        BIN,
        &[
            "batches",
            "--input",
            path_str(&input),
            "--output-dir",
            path_str(&out_dir),
            "--checkpoint-file",
            path_str(&checkpoint),
        ],
    )
    .unwrap();
    assert_cli_success(&output, "batches with checkpoint");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Statements generated: 2\n"));
    assert!(stdout.contains("Skipped: 5\n"));
    assert!(stdout.contains("id 3 already applied"));

    let batch = std::fs::read_to_string(out_dir.join("batch_001.sql")).unwrap();
    assert!(batch.contains("VALUES (6,"));
    assert!(batch.contains("VALUES (7,"));
    assert!(!batch.contains("VALUES (1,"));

    let output = execute_sector_sync(
        BIN,
        &["checkpoint", "show", "--checkpoint-file", path_str(&checkpoint)],
    )
    .unwrap();
    assert_cli_success(&output, "checkpoint show");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Table: SETORES\n"));
    assert!(stdout.contains("Applied ids (5): 1-5\n"));
}

#[test]
fn test_checkpoint_mark_from_manifest() {
    let temp_dir = TempDir::new().unwrap();
    let rows = rows(3..=6);
    let refs: Vec<&str> = rows.iter().map(String::as_str).collect();
    let input = write_input(&temp_dir, "setores.csv", &refs).unwrap();
    let manifest = temp_dir.path().join("comandos.json");
    let checkpoint = temp_dir.path().join("state/applied.json");

    let output = execute_sector_sync(
        BIN,
        &["manifest", "--input", path_str(&input), "--output", path_str(&manifest)],
    )
    .unwrap();
    assert_cli_success(&output, "manifest");

    let output = execute_sector_sync(
        BIN,
        &[
            "checkpoint",
            "mark",
            "--checkpoint-file",
            path_str(&checkpoint),
            "--from-manifest",
            path_str(&manifest),
        ],
    )
    .unwrap();
    assert_cli_success(&output, "checkpoint mark --from-manifest");

    let saved: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&checkpoint).unwrap()).unwrap();
    assert_eq!(saved["applied_ids"], serde_json::json!([3, 4, 5, 6]));
}

#[test]
fn test_checkpoint_show_missing_file() {
    let temp_dir = TempDir::new().unwrap();
    let checkpoint = temp_dir.path().join("none.json");

    let output = execute_sector_sync(
        BIN,
        &["checkpoint", "show", "--checkpoint-file", path_str(&checkpoint)],
    )
    .unwrap();
    assert_cli_success(&output, "checkpoint show");
    assert!(String::from_utf8_lossy(&output.stdout).starts_with("No checkpoint at"));
}

#[test]
fn test_script_with_checkpoint_requires_keep_existing() {
    let temp_dir = TempDir::new().unwrap();
    let rows = rows(1..=3);
    let refs: Vec<&str> = rows.iter().map(String::as_str).collect();
    let input = write_input(&temp_dir, "setores.csv", &refs).unwrap();
    let checkpoint = temp_dir.path().join("applied.json");
    let out = temp_dir.path().join("import.sql");

    let output = execute_sector_sync(
        BIN,
        &["checkpoint", "mark", "--checkpoint-file", path_str(&checkpoint), "--ids", "1,2"],
    )
    .unwrap();
    assert_cli_success(&output, "checkpoint mark");

    let output = execute_sector_sync(
        BIN,
        &[
            "script",
            "--input",
            path_str(&input),
            "--output",
            path_str(&out),
            "--checkpoint-file",
            path_str(&checkpoint),
        ],
    )
    .unwrap();
    assert_cli_failure(&output, "script clearing the table with a checkpoint");
    assert!(String::from_utf8_lossy(&output.stderr).contains("--keep-existing"));
    assert!(!out.exists());

    let output = execute_sector_sync(
        BIN,
        &[
            "script",
            "--input",
            path_str(&input),
            "--output",
            path_str(&out),
            "--checkpoint-file",
            path_str(&checkpoint),
            "--keep-existing",
        ],
    )
    .unwrap();
    assert_cli_success(&output, "script --keep-existing with checkpoint");

    let script = std::fs::read_to_string(&out).unwrap();
    assert!(!script.contains("DELETE FROM"));
    assert_eq!(script.matches("INSERT INTO SETORES").count(), 1);
    assert!(script.contains("VALUES (3,"));
    assert!(script.contains("-- 2 ids already applied were left out\n"));
}

#[test]
fn test_batches_from_manifest() {
    let temp_dir = TempDir::new().unwrap();
    let rows = rows(1..=12);
    let refs: Vec<&str> = rows.iter().map(String::as_str).collect();
    let input = write_input(&temp_dir, "setores.csv", &refs).unwrap();
    let manifest = temp_dir.path().join("comandos.json");
    let checkpoint = temp_dir.path().join("applied.json");
    let out_dir = temp_dir.path().join("lotes");

    let output = execute_sector_sync(
        BIN,
        &["manifest", "--input", path_str(&input), "--output", path_str(&manifest)],
    )
    .unwrap();
    assert_cli_success(&output, "manifest");

    let output = execute_sector_sync(
        BIN,
        &["checkpoint", "mark", "--checkpoint-file", path_str(&checkpoint), "--ids", "1"],
    )
    .unwrap();
    assert_cli_success(&output, "checkpoint mark");

    let output = execute_sector_sync(
        BIN,
        &[
            "batches",
            "--from-manifest",
            path_str(&manifest),
            "--output-dir",
            path_str(&out_dir),
            "--checkpoint-file",
            path_str(&checkpoint),
            "--batch-size",
            "5",
        ],
    )
    .unwrap();
    assert_cli_success(&output, "batches --from-manifest");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Rows read: 12\n"));
    assert!(stdout.contains("Statements generated: 11\n"));
    assert!(stdout.contains("id 1 already applied"));

    let first = std::fs::read_to_string(out_dir.join("batch_001.sql")).unwrap();
    assert!(first.starts_with("-- Batch 1/3 - records 1 to 5\n"));
    assert!(first.contains("VALUES (2,"));
    assert!(!first.contains("VALUES (1,"));
    let last = std::fs::read_to_string(out_dir.join("batch_003.sql")).unwrap();
    assert_eq!(last.matches("INSERT INTO SETORES").count(), 1);
}

#[test]
fn test_batches_rejects_input_with_manifest() {
    let temp_dir = TempDir::new().unwrap();
    let out_dir = temp_dir.path().join("lotes");

    let output = execute_sector_sync(
        BIN,
        &[
            "batches",
            "--input",
            "setores.csv",
            "--from-manifest",
            "comandos.json",
            "--output-dir",
            path_str(&out_dir),
        ],
    )
    .unwrap();
    assert!(!output.status.success());
    assert!(!out_dir.exists());
}
