//! E2E тесты для CLI инструмента `dbc-scan`.
//!
//! Проверяем все подкоманды на фикстурах и на stdin:
//! - `lines` / `sections` — нормализация строк и границы секций
//! - `split` / `number` / `swap` — преобразования токенов

use std::fs;

use assert_cmd::Command;
use e2e_tests::fixture;
use predicates::prelude::*;
use tempfile::tempdir;

/// Создать команду для запуска dbc-scan.
///
/// `cargo_bin` deprecated из-за edge case с custom build directories,
/// но это единственный способ для кросс-крейтовых бинарников.
#[expect(deprecated)]
fn dbc_scan() -> Command {
    Command::cargo_bin("dbc-scan").unwrap()
}

// ============================================================================
// lines
// ============================================================================

#[test]
fn test_lines_strips_crlf_and_skips_blank_lines() {
    let output = dbc_scan()
        .args(["lines", "--input", fixture("network.dbc").to_str().unwrap()])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();

    assert_eq!(lines.len(), 9);
    assert_eq!(lines[0], "1: VERSION \"\"");
    assert_eq!(lines[1], "4: NS_ :");
    assert_eq!(lines[2], "5: CM_");
    assert_eq!(lines[6], "13: BO_ 100 EngineData: 8 ECU");
    assert!(!stdout.contains('\r'));
}

#[test]
fn test_lines_from_stdin() {
    dbc_scan()
        .arg("lines")
        .write_stdin("\n  \nBU_: ECU\r\n")
        .assert()
        .success()
        .stdout("3: BU_: ECU\n");
}

#[test]
fn test_lines_blank_only_file_prints_nothing() {
    dbc_scan()
        .args(["lines", "--input", fixture("blank_only.dbc").to_str().unwrap()])
        .assert()
        .success()
        .stdout("");
}

#[test]
fn test_lines_rejects_wrong_extension() {
    dbc_scan()
        .args(["lines", "--input", fixture("network.txt").to_str().unwrap()])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Expected a .dbc extension"))
        .stderr(predicate::str::contains("Found the extension (txt)"));
}

#[test]
fn test_lines_any_extension_flag() {
    dbc_scan()
        .args(["lines", "--any-extension", "--input", fixture("network.txt").to_str().unwrap()])
        .assert()
        .success()
        .stdout("1: VERSION \"\"\n");
}

#[test]
fn test_lines_latin1_file() {
    dbc_scan()
        .args(["lines", "--input", fixture("latin1.dbc").to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("6: SG_ Oil : 0|8@1+ (1,-40) [-40|215] \"°C\" ECU"))
        .stdout(predicate::str::contains("7: SG_ Kühlung : 8|8@1+ (1,0) [0|255] \"\" ECU"));
}

#[test]
fn test_sections_latin1_file() {
    dbc_scan()
        .args(["sections", "--input", fixture("latin1.dbc").to_str().unwrap()])
        .assert()
        .success()
        .stdout("1\t1\t1\tVERSION \"\"\n2\t3\t1\tBU_: ECU\n3\t5\t3\tBO_ 100 Temp: 8 ECU\n");
}

#[test]
fn test_lines_missing_file() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("missing.dbc");

    dbc_scan()
        .args(["lines", "--input", missing.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to open input file"));
}

// ============================================================================
// sections
// ============================================================================

#[test]
fn test_sections_text() {
    dbc_scan()
        .args(["sections", "--input", fixture("network.dbc").to_str().unwrap()])
        .assert()
        .success()
        .stdout(
            "1\t1\t1\tVERSION \"\"\n\
             2\t4\t3\tNS_ :\n\
             3\t8\t1\tBS_:\n\
             4\t10\t1\tBU_: ECU DASH\n\
             5\t13\t3\tBO_ 100 EngineData: 8 ECU\n",
        );
}

#[test]
fn test_sections_json() {
    let output = dbc_scan()
        .args(["sections", "--json", "--input", fixture("network.dbc").to_str().unwrap()])
        .output()
        .unwrap();

    assert!(output.status.success());
    let sections: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let sections = sections.as_array().unwrap();

    assert_eq!(sections.len(), 5);
    assert_eq!(sections[1]["head"], "NS_ :");
    assert_eq!(sections[1]["line_count"], 3);
    assert_eq!(sections[4]["start_line"], 13);
}

#[test]
fn test_sections_written_file_roundtrip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("written.dbc");
    fs::write(&path, "A\nB\n\n\nC\n").unwrap();

    dbc_scan()
        .args(["sections", "--input", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout("1\t1\t2\tA\n2\t5\t1\tC\n");
}

// ============================================================================
// split / number / swap
// ============================================================================

#[test]
fn test_split_keeps_empty_tokens() {
    dbc_scan().args(["split", "a,,b", "--delimiter", ","]).assert().success().stdout("a\n\nb\n");
}

#[test]
fn test_split_trim() {
    dbc_scan()
        .args(["split", " 0 | 16 ", "-d", "|", "--trim"])
        .assert()
        .success()
        .stdout("0\n16\n");
}

#[test]
fn test_number_valid_and_default() {
    dbc_scan().args(["number", " 0.25 "]).assert().success().stdout("0.25\n");
    dbc_scan().args(["number", "-40"]).assert().success().stdout("-40\n");
    dbc_scan()
        .args(["number", "3.14xyz", "--default", "-1"])
        .assert()
        .success()
        .stdout("-1\n");
}

#[test]
fn test_swap() {
    dbc_scan().args(["swap", "0x01020304"]).assert().success().stdout("0x04030201\n");
    dbc_scan().args(["swap", "1234", "--width", "2"]).assert().success().stdout("0x3412\n");
}

#[test]
fn test_swap_overflow_fails() {
    dbc_scan()
        .args(["swap", "0x1FF", "--width", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not fit in 1 byte(s)"));
}
