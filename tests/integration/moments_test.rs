use std::process::Command;

#[test]
fn test_moments_table() {
    let output = Command::new(env!("CARGO_BIN_EXE_dicefit"))
        .args(["moments", "--dice", "d1 d6 d20"])
        .output()
        .expect("Failed to execute dicefit");

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();

    assert_eq!(lines.len(), 4, "header plus three dice:\n{}", stdout);
    assert!(lines[0].contains("Variance"));
    assert!(lines[1].trim_start().starts_with("d1"));
    assert!(lines[1].contains("0.00"), "d1 has no variance");
    assert!(lines[2].contains("3.50") && lines[2].contains("2.92") && lines[2].contains("1.71"));
    assert!(lines[3].contains("10.50") && lines[3].contains("33.25") && lines[3].contains("5.77"));
}

#[test]
fn test_moments_default_preset() {
    let output = Command::new(env!("CARGO_BIN_EXE_dicefit"))
        .arg("moments")
        .output()
        .expect("Failed to execute dicefit");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.lines().count(), 8);
    assert!(stdout.contains("d100"));
    assert!(stdout.contains("833.25"));
}
