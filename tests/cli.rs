use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn appraise(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("appraise").unwrap();
    cmd.env("APPRAISE_DATA_DIR", data_dir.path());
    cmd
}

#[test]
fn default_run_prints_comparison() {
    let dir = TempDir::new().unwrap();

    appraise(&dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("--- Appraisal for 2023 Lexus RZ 450e"))
        .stdout(predicate::str::contains("Fantasy Book Value (Standard Market): $"))
        .stdout(predicate::str::contains("vs Your Carvana Offer: $29,600"));
}

#[test]
fn appraise_with_fixed_year() {
    let dir = TempDir::new().unwrap();

    appraise(&dir)
        .args(["appraise", "--as-of", "2025"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Fantasy Book Value (Standard Market): $40,691",
        ))
        .stdout(predicate::str::contains(
            "Realistic Trade-In Floor (Luxury_EV Market): $21,649",
        ))
        .stdout(predicate::str::contains("Carvana is OVERPAYING by $7,951"));
}

#[test]
fn appraise_with_low_offer() {
    let dir = TempDir::new().unwrap();

    appraise(&dir)
        .args(["appraise", "--as-of", "2025", "--offer", "$20,000", "--offer-label", "Dealer"])
        .assert()
        .success()
        .stdout(predicate::str::contains("vs Your Dealer Offer: $20,000"))
        .stdout(predicate::str::contains("Dealer is UNDERPAYING by $1,649"));
}

#[test]
fn estimate_with_excess_mileage() {
    let dir = TempDir::new().unwrap();

    appraise(&dir)
        .args([
            "estimate",
            "--category",
            "Luxury_EV",
            "--mileage",
            "30000",
            "--as-of",
            "2025",
        ])
        .assert()
        .success()
        .stdout("2023 Lexus RZ 450e (Luxury_EV, as of 2025): $19,449\n");
}

#[test]
fn estimate_detail_for_unknown_category() {
    let dir = TempDir::new().unwrap();

    appraise(&dir)
        .args(["estimate", "-c", "Classic", "--as-of", "2025", "--detail"])
        .assert()
        .success()
        .stdout(predicate::str::contains("20.0% (default, unknown category)"));
}

#[test]
fn invalid_vehicle_is_rejected() {
    let dir = TempDir::new().unwrap();

    appraise(&dir)
        .args(["estimate", "--model-year", "1700", "--as-of", "2025"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Validation error: year"));
}

#[test]
fn huge_mileage_is_rejected() {
    let dir = TempDir::new().unwrap();

    appraise(&dir)
        .args(["appraise", "--mileage", "1e20", "--as-of", "2025"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Validation error"))
        .stderr(predicate::str::contains("outside the range"));
}

#[test]
fn valuations_are_recorded_in_history() {
    let dir = TempDir::new().unwrap();

    appraise(&dir).args(["appraise", "--as-of", "2025"]).assert().success();

    appraise(&dir)
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("(Standard, as of 2025): $40,691"))
        .stdout(predicate::str::contains("(Luxury_EV, as of 2025): $21,649"));
}

#[test]
fn empty_history() {
    let dir = TempDir::new().unwrap();

    appraise(&dir)
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("No valuations recorded yet."));
}

#[test]
fn categories_table() {
    let dir = TempDir::new().unwrap();

    appraise(&dir)
        .arg("categories")
        .assert()
        .success()
        .stdout(predicate::str::contains("Toyota_Hybrid"))
        .stdout(predicate::str::contains("Unknown categories use 20.0% per year."));
}

#[test]
fn settings_file_changes_market() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("config.json"),
        r#"{"market": {"dealer_margin": 0.0}, "scenario": {"offer_label": "Neighbor"}}"#,
    )
    .unwrap();

    // 64000 * 0.85^2 is 46239.99..., truncated with no margin
    appraise(&dir)
        .args(["appraise", "--as-of", "2025"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Fantasy Book Value (Standard Market): $46,239\n",
        ))
        .stdout(predicate::str::contains("vs Your Neighbor Offer: $29,600"));
}

#[test]
fn init_then_config() {
    let dir = TempDir::new().unwrap();

    appraise(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote default settings"));

    assert!(dir.path().join("config.json").exists());

    appraise(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Market category: Luxury_EV"));
}

#[test]
fn export_json_to_stdout() {
    let dir = TempDir::new().unwrap();

    let output = appraise(&dir)
        .args(["export", "--format", "json", "--as-of", "2025"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["book"]["value"], 40_691);
    assert_eq!(value["market"]["value"], 21_649);
    assert_eq!(value["verdict"]["verdict"], "overpaying");
}
