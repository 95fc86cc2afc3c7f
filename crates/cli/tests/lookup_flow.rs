use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

const TABLE: &str = "\
_GetKey = $020DF8
_GetCSC = $020E14
_HomeUp = $020862
_ClrScrn = $020862
Reset = $000100
";

fn write_table(dir: &Path) -> PathBuf {
    let path = dir.join("ti84pce.lab");
    std::fs::write(&path, TABLE).expect("write label table");
    path
}

fn eqlookup(labels: &Path) -> Command {
    let mut cmd = Command::cargo_bin("eqlookup").expect("binary");
    cmd.env_remove("EQLOOKUP_LABELS");
    cmd.arg("--labels").arg(labels);
    cmd
}

fn json_lines(labels: &Path, args: &[&str]) -> Vec<Value> {
    let output = eqlookup(labels)
        .arg("--json")
        .args(args)
        .output()
        .expect("run eqlookup");
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(|line| serde_json::from_str(line).expect("json line"))
        .collect()
}

#[test]
fn name_resolves_to_its_address() {
    let temp = tempdir().expect("tempdir");
    let labels = write_table(temp.path());

    eqlookup(&labels)
        .args(["lookup", "_GetKey"])
        .assert()
        .success()
        .stdout(contains("$20DF8"));
}

#[test]
fn address_resolves_to_its_names() {
    let temp = tempdir().expect("tempdir");
    let labels = write_table(temp.path());

    eqlookup(&labels)
        .args(["lookup", "$20DF8"])
        .assert()
        .success()
        .stdout(contains("_GetKey"));

    eqlookup(&labels)
        .args(["lookup", "$20862"])
        .assert()
        .success()
        .stdout(contains("one of").and(contains(r#"["_HomeUp","_ClrScrn"]"#)));
}

#[test]
fn decimal_queries_echo_the_hex_form() {
    let temp = tempdir().expect("tempdir");
    let labels = write_table(temp.path());

    eqlookup(&labels)
        .args(["lookup", "256"])
        .assert()
        .success()
        .stdout(contains("(== $100)").and(contains("Reset")));
}

#[test]
fn undefined_address_reports_both_neighbors() {
    let temp = tempdir().expect("tempdir");
    let labels = write_table(temp.path());

    eqlookup(&labels)
        .args(["lookup", "$20900"])
        .assert()
        .success()
        .stdout(
            contains("could be")
                .and(contains("_HomeUp+0x9e"))
                .and(contains("_GetKey-0x4f8")),
        );
}

#[test]
fn case_insensitive_fallback_names_the_canonical_spelling() {
    let temp = tempdir().expect("tempdir");
    let labels = write_table(temp.path());

    eqlookup(&labels)
        .args(["lookup", "reset"])
        .assert()
        .success()
        .stdout(contains("spelled").and(contains("Reset")));
}

#[test]
fn typos_come_back_with_suggestions() {
    let temp = tempdir().expect("tempdir");
    let labels = write_table(temp.path());

    eqlookup(&labels)
        .args(["lookup", "_GetKye"])
        .assert()
        .success()
        .stdout(contains("idk").and(contains("_GetKey")));
}

#[test]
fn out_of_range_and_unparseable_tokens_answer_politely() {
    let temp = tempdir().expect("tempdir");
    let labels = write_table(temp.path());

    eqlookup(&labels)
        .args(["lookup", "0x1000000"])
        .assert()
        .success()
        .stdout(contains("past $FFFFFF"));

    eqlookup(&labels)
        .args(["lookup", "$FA0h"])
        .assert()
        .success()
        .stdout(contains("Wut?"));
}

#[test]
fn whatis_and_rl_are_lookup_aliases() {
    let temp = tempdir().expect("tempdir");
    let labels = write_table(temp.path());

    eqlookup(&labels)
        .args(["whatis", "_GetKey"])
        .assert()
        .success()
        .stdout(contains("$20DF8"));

    eqlookup(&labels)
        .args(["rl", "$20DF8"])
        .assert()
        .success()
        .stdout(contains("_GetKey"));
}

#[test]
fn stdin_queries_answer_one_line_each() {
    let temp = tempdir().expect("tempdir");
    let labels = write_table(temp.path());

    eqlookup(&labels)
        .arg("lookup")
        .write_stdin("_GetKey\n$20862\n")
        .assert()
        .success()
        .stdout(contains("$20DF8").and(contains("one of")));
}

#[test]
fn lookup_without_queries_or_stdin_is_an_error() {
    let temp = tempdir().expect("tempdir");
    let labels = write_table(temp.path());

    eqlookup(&labels)
        .arg("lookup")
        .write_stdin("")
        .assert()
        .failure()
        .stderr(contains("No queries given"));
}

#[test]
fn json_outcomes_carry_kind_tags() {
    let temp = tempdir().expect("tempdir");
    let labels = write_table(temp.path());

    let lines = json_lines(&labels, &["lookup", "_GetKey", "$20900", "bogus$$$"]);
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0]["kind"], "exact_name");
    assert_eq!(lines[0]["address"], 0x020DF8);
    assert_eq!(lines[1]["kind"], "straddle");
    assert_eq!(lines[1]["before"]["names"][0], "_HomeUp");
    assert_eq!(lines[2]["kind"], "suggestions");
}

#[test]
fn missing_table_is_fatal_and_names_the_path() {
    let temp = tempdir().expect("tempdir");
    let missing = temp.path().join("nope.lab");

    eqlookup(&missing)
        .args(["lookup", "_GetKey"])
        .assert()
        .failure()
        .stderr(contains("nope.lab"));
}
