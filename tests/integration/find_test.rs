use std::process::{Command, Output};

fn run_dicefit(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_dicefit"))
        .args(args)
        .output()
        .expect("Failed to execute dicefit")
}

fn stdout_of(output: &Output) -> String {
    if !output.status.success() {
        panic!(
            "Command failed with status: {:?}\nstderr: {}\nstdout: {}",
            output.status,
            String::from_utf8_lossy(&output.stderr),
            String::from_utf8_lossy(&output.stdout)
        );
    }
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_find_two_d6() {
    let output = run_dicefit(&["find", "--mean", "7", "--dice", "6"]);
    let stdout = stdout_of(&output);

    assert!(stdout.contains("Target Mean: 7"), "Should echo the target");
    assert!(
        !stdout.contains("Target Standard Deviation"),
        "No std-dev was given"
    );
    assert!(stdout.contains("Allowed Dice: [6]"), "Should list the dice");
    assert!(
        stdout.contains("Pre-calculated Expected Values: {d6: 3.5}"),
        "Should show expected values"
    );
    assert!(stdout.contains("Top 5 Matches:"), "Should rank five matches");
    assert!(
        stdout.contains("Match 1: 2d6 (mean=7.00, std_dev=2.42), Distance=0.00, Num Dice=2"),
        "Two d6 should match a mean of 7 exactly:\n{}",
        stdout
    );
}

#[test]
fn test_find_keeps_empty_state_for_tiny_target() {
    let output = run_dicefit(&["find", "--mean", "0.4", "--dice", "d20"]);
    let stdout = stdout_of(&output);

    assert!(stdout.contains("Top 1 Matches:"));
    assert!(stdout.contains("Match 1: none (mean=0.00, std_dev=0.00), Distance=0.40, Num Dice=0"));
}

#[test]
fn test_find_with_std_dev_and_default_dice() {
    let output = run_dicefit(&["find", "--mean", "10.5", "--std-dev", "2.0"]);
    let stdout = stdout_of(&output);

    assert!(stdout.contains("Target Standard Deviation: 2"));
    assert!(stdout.contains("Allowed Dice: [4, 6, 8, 10, 12, 20, 100]"));
    assert!(stdout.contains("Match 1: 4d4"), "Four d4 should rank first:\n{}", stdout);
    assert!(stdout.contains("Match 5:"));
    assert!(!stdout.contains("Match 6:"));
}

#[test]
fn test_find_bracketed_custom_dice() {
    let output = run_dicefit(&["find", "--mean", "4", "--dice", "[3, 5, 7]", "--top", "2"]);
    let stdout = stdout_of(&output);

    assert!(stdout.contains("Allowed Dice: [3, 5, 7]"));
    assert!(stdout.contains("Top 2 Matches:"));
    assert!(stdout.contains("Match 1: 1d7"));
}

#[test]
fn test_find_json_output() {
    let output = run_dicefit(&["find", "--mean", "3.5", "--dice", "6", "--json"]);
    let stdout = stdout_of(&output);

    let value: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");
    let matches = value["matches"].as_array().expect("matches array");
    assert_eq!(matches.len(), 3);
    assert_eq!(matches[0]["distance"].as_f64(), Some(0.0));
    assert_eq!(matches[0]["dice_count"].as_u64(), Some(1));
    assert_eq!(matches[0]["state"]["counts"]["6"].as_u64(), Some(1));
    assert_eq!(matches[0]["state"]["mean"].as_f64(), Some(3.5));
    assert_eq!(value["statistics"]["termination"].as_str(), Some("exhausted"));
}

#[test]
fn test_find_verbose_prints_statistics() {
    let output = run_dicefit(&["find", "--mean", "12", "--preset", "classic", "-v"]);
    let stdout = stdout_of(&output);

    assert!(stdout.contains("Allowed Dice: [6, 20]"));
    assert!(stdout.contains("Search Statistics:"));
    assert!(stdout.contains("Termination: exhausted"));
}

#[test]
fn test_find_rejects_zero_die() {
    let output = run_dicefit(&["find", "--mean", "5", "--dice", "0"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error parsing dice"), "stderr: {}", stderr);
}

#[test]
fn test_find_rejects_literal_expression() {
    let output = run_dicefit(&["find", "--mean", "5", "--dice", "[1, 2+3]"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("'2+3'"), "stderr: {}", stderr);
}

#[test]
fn test_find_rejects_negative_std_dev() {
    let output = run_dicefit(&["find", "--mean", "5", "--std-dev=-1", "--dice", "6"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("must not be negative"), "stderr: {}", stderr);
}
