use assert_cmd::Command;
use predicates::prelude::*;

fn plotvec() -> Command {
    Command::cargo_bin("plotvec").unwrap()
}

#[test]
fn single_vector_dump() {
    plotvec()
        .args(["vec", "3,4", "--dump"])
        .assert()
        .success()
        .stdout(predicate::str::contains("figure 1"))
        .stdout(predicate::str::contains("xlim [-1, 4]"))
        .stdout(predicate::str::contains("ylim [-1, 5]"))
        .stdout(predicate::str::contains("aspect equal"))
        .stdout(predicate::str::contains(
            "arrow (0, 0) -> (3, 4) color #1f77b4 alpha 1",
        ))
        .stdout(predicate::str::contains("hline y=0 span [-1, 4]"))
        .stdout(predicate::str::contains("vline x=0 span [-1, 5]"))
        .stdout(predicate::str::contains("legend").not());
}

#[test]
fn chained_sum_dump() {
    plotvec()
        .args(["--dump", "vec", "1,0", "0,1", "--chain", "--plotsum"])
        .assert()
        .success()
        .stdout(predicate::str::contains("arrow (0, 0) -> (1, 0) color #1f77b4"))
        .stdout(predicate::str::contains("arrow (1, 0) -> (1, 1) color #ff7f0e"))
        .stdout(predicate::str::contains(
            "dashed (0, 0) -> (0.9, 0.9) color #2ca02c",
        ))
        .stdout(predicate::str::contains("arrow (0.9, 0.9) -> (1, 1) color #2ca02c"));
}

#[test]
fn labels_and_legend_location() {
    plotvec()
        .args([
            "vec",
            "1,2",
            "[-3,1]",
            "--labels",
            "u,v",
            "--legend-loc",
            "upper left",
            "--dump",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("label \"u\""))
        .stdout(predicate::str::contains("arrow (0, 0) -> (-3, 1)"))
        .stdout(predicate::str::contains("legend upper left"));
}

#[test]
fn rect_variant_uses_auto_aspect() {
    plotvec()
        .args(["vec", "5,1", "--rect", "--dump"])
        .assert()
        .success()
        .stdout(predicate::str::contains("aspect auto"));
}

#[test]
fn color_offset_and_tail() {
    plotvec()
        .args(["vec", "1,1", "--tail", "-2,0", "--color-offset", "3", "--dump"])
        .assert()
        .success()
        .stdout(predicate::str::contains("arrow (-2, 0) -> (-1, 1) color #d62728"))
        .stdout(predicate::str::contains("xlim [-3, 1]"));
}

#[test]
fn mismatched_colors_fail() {
    plotvec()
        .args(["vec", "1,0", "0,1", "--colors", "C0", "--dump"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Length mismatch"));
}

#[test]
fn identity_ring_dump() {
    plotvec()
        .args(["ring", "-n", "4", "--dump"])
        .assert()
        .success()
        .stdout(predicate::str::contains("title \"Input vectors\""))
        .stdout(predicate::str::contains("title \"Output vectors\""))
        .stdout(predicate::str::contains("xlim [-1.1, 1.1]"))
        .stdout(predicate::str::contains("xlim [-4, 4]"))
        .stdout(predicate::str::contains("arrow (0, 0) -> (1, 0)").count(2))
        .stdout(predicate::str::contains("arrow (0, 0) -> (0, 1)").count(2))
        .stdout(predicate::str::contains("arrow (0, 0) -> (-1, 0)").count(2))
        .stdout(predicate::str::contains("arrow (0, 0) -> (0, -1)").count(2));
}

#[test]
fn ring_rejects_bad_matrix() {
    plotvec()
        .args(["ring", "--matrix", "1,0,0", "--dump"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Shape error"));
}

#[test]
fn ring_rejects_unknown_colormap() {
    plotvec()
        .args(["ring", "--colormap", "not-a-map", "--dump"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown colormap"));
}

#[test]
fn identity_field_has_single_panel() {
    plotvec()
        .args(["field", "--field-width", "1", "--point-spacing", "1", "--dump"])
        .assert()
        .success()
        .stdout(predicate::str::contains("panel 1"))
        .stdout(predicate::str::contains("panel 2").not())
        .stdout(predicate::str::contains("point (").count(9));
}

#[test]
fn sheared_field_has_two_panels() {
    plotvec()
        .args([
            "field",
            "--matrix",
            "1,1,0,1",
            "--field-width",
            "1",
            "--point-spacing",
            "1",
            "--dump",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("title \"Input points\""))
        .stdout(predicate::str::contains("title \"Output points\""))
        .stdout(predicate::str::contains("point (2, 1)"))
        .stdout(predicate::str::contains("point (").count(18));
}

#[test]
fn log_file_is_written() {
    let dir = tempfile::tempdir().unwrap();
    let log = dir.path().join("plotvec.log");
    plotvec()
        .args(["vec", "1,2", "--dump", "--log"])
        .arg(&log)
        .assert()
        .success();
    let contents = std::fs::read_to_string(&log).unwrap();
    assert!(contents.contains("Starting plotvec"));
    assert!(contents.contains("Plotting 1 vectors"));
}

#[test]
fn single_alpha_applies_to_every_arrow() {
    plotvec()
        .args(["vec", "1,0", "0,1", "--plotsum", "--alpha", "0.5", "--dump"])
        .assert()
        .success()
        .stdout(predicate::str::contains("alpha 0.5").count(4))
        .stdout(predicate::str::contains("alpha 1").not());
}

#[test]
fn alpha_list_is_per_vector() {
    plotvec()
        .args(["vec", "1,0", "0,1", "--alpha", "0.5,1", "--dump"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "arrow (0, 0) -> (1, 0) color #1f77b4 alpha 0.5",
        ))
        .stdout(predicate::str::contains(
            "arrow (0, 0) -> (0, 1) color #ff7f0e alpha 1",
        ));
}

#[test]
fn alpha_list_must_match_vectors() {
    plotvec()
        .args(["vec", "1,0", "0,1", "0,2", "--alpha", "0.5,1", "--dump"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Length mismatch"));
}

#[test]
fn repeated_matrix_makes_one_figure_each() {
    plotvec()
        .args([
            "ring",
            "-n",
            "4",
            "--matrix",
            "1,1,0,1",
            "--matrix",
            "0,-1,1,0",
            "--dump",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("figure 1"))
        .stdout(predicate::str::contains("figure 2"))
        .stdout(predicate::str::contains("figure 3").not())
        .stdout(predicate::str::contains("title \"Output vectors\"").count(2));
}

#[test]
fn repeated_matrix_fails_before_drawing_on_bad_entry() {
    plotvec()
        .args(["field", "--matrix", "1,1,0,1", "--matrix", "1,2", "--dump"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Shape error"))
        .stdout(predicate::str::is_empty());
}
