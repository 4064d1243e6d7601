use assert_cmd::Command;
use predicates::{prelude::PredicateBooleanExt, str::contains};

fn script(home: &std::path::Path, input: &str) -> assert_cmd::assert::Assert {
    Command::cargo_bin("nichiwari_cli")
        .unwrap()
        .env("NICHIWARI_CLI_SCRIPT", "1")
        .env("NICHIWARI_HOME", home)
        .write_stdin(input.to_string())
        .assert()
}

#[test]
fn script_mode_computes_daily_cost() {
    let home = tempfile::tempdir().unwrap();
    script(home.path(), "quick 150000 3 0 Laptop\nexit\n")
        .success()
        .stdout(contains("¥136/day").and(contains("¥4,080")));
}

#[test]
fn basket_flow_totals_products() {
    let home = tempfile::tempdir().unwrap();
    script(
        home.path(),
        "add Laptop 150000 3\nadd \"Tote bag\" 3000 2\nlist\ncalc\nexit\n",
    )
    .success()
    .stdout(
        contains("Added `Laptop`")
            .and(contains("Tote bag"))
            .and(contains("¥140/day")),
    );
}

#[test]
fn history_persists_between_runs() {
    let home = tempfile::tempdir().unwrap();
    script(home.path(), "quick 36500 1 0 Desk\n").success();
    script(home.path(), "history\n")
        .success()
        .stdout(
            contains("Desk")
                .and(contains("¥100/day"))
                .and(contains("1 of 10 slots used.")),
        );
    assert!(home.path().join("store").join("nichiwari_history.json").exists());
}

#[test]
fn validation_errors_are_reported_not_fatal() {
    let home = tempfile::tempdir().unwrap();
    script(home.path(), "quick 1000 0 0\nquick 36500 1\n")
        .success()
        .stdout(
            contains("Usage period must be at least 1 month").and(contains("¥100/day")),
        );
}

#[test]
fn unknown_commands_get_suggestions() {
    let home = tempfile::tempdir().unwrap();
    script(home.path(), "histroy\n")
        .success()
        .stdout(contains("Unknown command").and(contains("Suggestion: `history`?")));
}

#[test]
fn compare_lists_relatable_items() {
    let home = tempfile::tempdir().unwrap();
    script(home.path(), "compare 100\n")
        .success()
        .stdout(contains("Chewing gum").and(contains("Video streaming plan")));
}

#[test]
fn telemetry_is_written_when_enabled() {
    let home = tempfile::tempdir().unwrap();
    script(
        home.path(),
        "config set telemetry_enabled on\nquick 20000 4 0 Kindle\n",
    )
    .success();
    let log = std::fs::read_to_string(home.path().join("telemetry.jsonl")).unwrap();
    assert!(log.contains("\"daily_cost\":13"));
    assert!(log.contains("nichiwari_cli/"));
}

#[test]
fn history_keys_must_be_file_safe() {
    let home = tempfile::tempdir().unwrap();
    script(
        home.path(),
        "config set history_key \"A b\"\nconfig set history_key work-history\nquick 36500 1 0 Desk\n",
    )
    .success()
    .stdout(contains("history_key `A b` may only contain"));
    assert!(home.path().join("store").join("work-history.json").exists());
}
