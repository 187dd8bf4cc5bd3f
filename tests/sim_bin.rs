use std::process::Command;

#[test]
fn sim_binary_smoke() {
    let output = Command::new(env!("CARGO_BIN_EXE_sim"))
        .args(["--seed", "12"])
        .output()
        .expect("failed to run sim binary");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    let v: serde_json::Value = serde_json::from_str(stdout.trim()).expect("invalid json");
    assert_eq!(v["seed"], 12);
    assert_eq!(v["won"], true);
    assert_eq!(v["ships"].as_array().map(Vec::len), Some(3));
    let guesses = v["guesses"].as_u64().unwrap();
    assert!((9..=49).contains(&guesses));
    // Every cell is fired at once, so a win lands exactly one hit per segment.
    assert_eq!(v["hits"], 9);
}

#[test]
fn layout_is_reproducible() {
    let run = || {
        Command::new(env!("CARGO_BIN_EXE_broadside"))
            .args(["layout", "--seed", "5"])
            .output()
            .expect("failed to run broadside binary")
    };
    let (a, b) = (run(), run());
    assert!(a.status.success());
    assert_eq!(a.stdout, b.stdout);
}

#[test]
fn play_reads_guesses_from_stdin() {
    use std::io::Write;
    use std::process::Stdio;

    let mut child = Command::new(env!("CARGO_BIN_EXE_broadside"))
        .args(["play", "--seed", "5"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("failed to run broadside binary");
    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"A\nA0\nq\n")
        .unwrap();
    let output = child.wait_with_output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Please enter a letter + number like A3"));
    assert!(stdout.contains("HIT!") || stdout.contains("MISS!"));
}
