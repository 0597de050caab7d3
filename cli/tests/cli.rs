use assert_cmd::Command;
use predicates::prelude::*;

fn roll() -> Command {
    Command::cargo_bin("roll").unwrap()
}

#[test]
fn rolls_a_simple_notation() {
    roll()
        .args(["3d6", "--seed", "42"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^([3-9]|1[0-8])\n$").unwrap());
}

#[test]
fn same_seed_gives_identical_output() {
    let first = roll()
        .args(["4d10+2", "--seed", "7", "--count", "3"])
        .output()
        .unwrap();
    let second = roll()
        .args(["4d10+2", "--seed", "7", "--count", "3"])
        .output()
        .unwrap();
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn repeated_rolls_are_labelled() {
    roll()
        .args(["1d6", "--seed", "1", "--count", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Roll 1:").and(predicate::str::contains("Roll 2:")));
}

#[test]
fn individual_shows_the_dice() {
    roll()
        .args(["2d6", "--seed", "5", "--individual"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2d6 ["));
}

#[test]
fn individual_applies_the_modifier() {
    roll()
        .args(["2d6+3", "--seed", "5", "--individual"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2d6+3 [").and(predicate::str::contains("+3 =")));
}

#[test]
fn json_output_is_machine_readable() {
    roll()
        .args(["2d8-1", "--seed", "3", "--json"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("\"notation\": \"2d8-1\"")
                .and(predicate::str::contains("\"rolls\"")),
        );
}

#[test]
fn invalid_notation_fails_with_a_diagnostic() {
    roll()
        .arg("goblin")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid dice notation"));
}

#[test]
fn zero_repeat_count_is_rejected() {
    roll().args(["1d6", "--count", "0"]).assert().failure();
}
