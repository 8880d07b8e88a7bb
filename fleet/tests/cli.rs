use std::{
    io::Write,
    process::{Command, Output, Stdio},
};

use fleetsim::parse::Scenario;

fn fleet(args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_fleet"))
        .args(args)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to start fleet");
    child
        .stdin
        .take()
        .unwrap()
        .write_all(stdin.as_bytes())
        .unwrap();
    child.wait_with_output().expect("failed to run fleet")
}

#[test]
fn run_prints_the_fleet() {
    let output = fleet(&["run"], "10\n(3, 4, S) (1, 2, N)\n(3, 4) MRL\n(1, 2)\n");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout, "(3, 5, S)\n(1, 2, N) SUNK\n");
}

#[test]
fn run_with_trace_and_board() {
    let output = fleet(&["run", "--trace", "--board", "-"], "3\n(0, 0, E)\n(0, 0) M\n");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("[0.0] ship #0 moved (0, 0) -> (1, 0)\n"));
    assert!(stdout.contains("(1, 0, E)\n"));
    assert!(stdout.contains("~~"));
}

#[test]
fn failures_exit_with_an_error() {
    let output = fleet(&["run"], "5\n(6, 5, E)\n");
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.starts_with("error: "));

    let output = fleet(&["run"], "10\n(1, 2, N)\n(1, 2)\n(1, 2)\n");
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
}

#[test]
fn generate_is_reproducible_and_parseable() {
    let args = ["generate", "--size", "6", "--ships", "4", "--operations", "8", "--seed", "42"];
    let first = fleet(&args, "");
    let second = fleet(&args, "");
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);

    let scenario: Scenario = String::from_utf8(first.stdout).unwrap().parse().unwrap();
    assert_eq!(scenario.board_size, 6);
    assert_eq!(scenario.ships.len(), 4);
    assert_eq!(scenario.operations.len(), 8);
}
