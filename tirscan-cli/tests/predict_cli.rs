use std::io::Write;

use assert_cmd::Command;
use tempfile::NamedTempFile;

fn fixture_table() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, r#"{{"AAGGAG": 1.5, "AGGAGG": 2.9}}"#).unwrap();
    file
}

fn fixture_clusters() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "cluster,SEQ_unique,CORE REL EXPR mean,CORE REL EXPR std").unwrap();
    writeln!(file, "c1,\"AAGGAG,AGGAGG\",1.8,0.5").unwrap();
    writeln!(file, "c2,AGCTAG,2.5,0.6").unwrap();
    file
}

fn run_tirscan(args: &[&str]) -> String {
    let mut cmd = Command::cargo_bin("tirscan").unwrap();
    let assert = cmd.args(args).assert().success();
    String::from_utf8(assert.get_output().stdout.clone()).unwrap()
}

#[test]
fn sequence_direction_reports_core_and_cluster() {
    let table = fixture_table();
    let clusters = fixture_clusters();

    let stdout = run_tirscan(&[
        "-t",
        table.path().to_str().unwrap(),
        "-c",
        clusters.path().to_str().unwrap(),
        "-s",
        "TTTTTTAAGGAGTT",
        "-f",
        "tsv",
        "-q",
    ]);

    let mut lines = stdout.lines();
    assert!(lines.next().unwrap().starts_with("identifier\t"));
    let row = lines.next().unwrap();
    assert!(row.contains("\tAAGGAG\t"));
    assert!(row.contains("\tTTTTTT\t"));
    assert!(row.ends_with("\tc1"));
}

#[test]
fn sequence_direction_accepts_rna_lowercase() {
    let table = fixture_table();

    let stdout = run_tirscan(&[
        "-t",
        table.path().to_str().unwrap(),
        "-s",
        "uuuuuuaaggaguu",
        "-f",
        "json",
        "-q",
    ]);

    assert!(stdout.contains("\"core\": \"AAGGAG\""));
    assert!(stdout.contains("\"spacer\": \"TT\""));
}

#[test]
fn fasta_batch_direction_reports_every_leader() {
    let table = fixture_table();
    let mut fasta = NamedTempFile::new().unwrap();
    write!(fasta, ">a\nTTTTTTAAGGAGTT\n>b\nTTTAGGAGGTAAGGAGTT\n").unwrap();

    let stdout = run_tirscan(&[
        "-t",
        table.path().to_str().unwrap(),
        "-i",
        fasta.path().to_str().unwrap(),
        "-f",
        "tsv",
        "-q",
    ]);

    let rows: Vec<&str> = stdout.lines().skip(1).collect();
    assert_eq!(rows.len(), 2);
    assert!(rows[0].starts_with("a\t"));
    assert!(rows[0].contains("\tAAGGAG\t"));
    assert!(rows[1].starts_with("b\t"));
    assert!(rows[1].contains("\tAGGAGG\t"));
}

#[test]
fn expression_direction_ranks_clusters_by_distance() {
    let table = fixture_table();
    let clusters = fixture_clusters();

    let stdout = run_tirscan(&[
        "-t",
        table.path().to_str().unwrap(),
        "-c",
        clusters.path().to_str().unwrap(),
        "-e",
        "2.0",
        "-f",
        "tsv",
        "-q",
    ]);

    let rows: Vec<&str> = stdout.lines().skip(1).collect();
    assert_eq!(rows.len(), 2);
    assert!(rows[0].starts_with("1\tc1\t0.4000"));
    assert!(rows[1].starts_with("2\tc2\t0.8333"));
}

#[test]
fn malformed_expression_value_yields_empty_result() {
    let table = fixture_table();
    let clusters = fixture_clusters();

    let stdout = run_tirscan(&[
        "-t",
        table.path().to_str().unwrap(),
        "-c",
        clusters.path().to_str().unwrap(),
        "-e",
        "not_a_number",
        "-q",
    ]);

    assert_eq!(stdout, "No clusters matched.\n");
}

#[test]
fn requires_exactly_one_direction() {
    let table = fixture_table();

    let mut cmd = Command::cargo_bin("tirscan").unwrap();
    cmd.args(["-t", table.path().to_str().unwrap()])
        .assert()
        .failure();

    let mut cmd = Command::cargo_bin("tirscan").unwrap();
    cmd.args([
        "-t",
        table.path().to_str().unwrap(),
        "-s",
        "TTTTTTAAGGAGTT",
        "-e",
        "2.0",
    ])
    .assert()
    .failure();
}

#[test]
fn rejects_zero_max_spacing() {
    let table = fixture_table();

    let mut cmd = Command::cargo_bin("tirscan").unwrap();
    cmd.args([
        "-t",
        table.path().to_str().unwrap(),
        "-s",
        "TTTTTTAAGGAGTT",
        "-m",
        "0",
    ])
    .assert()
    .failure();
}
