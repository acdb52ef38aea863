use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

fn empty_home(name: &str) -> PathBuf {
    let home = std::env::temp_dir().join(format!("stack-greeter-{}-{}", name, std::process::id()));
    std::fs::create_dir_all(&home).expect("temporary home directory should be created");
    home
}

fn run_binary(envs: &[(&str, &str)], stdin: &[u8]) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_stack-greeter"))
        .current_dir(env!("CARGO_MANIFEST_DIR"))
        .env_clear()
        .envs(envs.iter().copied())
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("binary should start");

    // The process may exit before reading stdin, so a broken pipe is fine here.
    let _ = child
        .stdin
        .take()
        .expect("stdin should be piped")
        .write_all(stdin);

    child.wait_with_output().expect("binary should exit")
}

#[test]
fn when_ambient_configuration_is_missing_should_abort_before_greeting() {
    let home = empty_home("missing-config");

    let output = run_binary(
        &[
            ("HOME", home.to_str().unwrap()),
            ("AWS_EC2_METADATA_DISABLED", "true"),
        ],
        b"Ferris\n",
    );

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("configuration error,"));
}

#[test]
fn when_create_stack_cannot_reach_endpoint_should_still_greet() {
    let home = empty_home("unreachable-endpoint");

    let output = run_binary(
        &[
            ("HOME", home.to_str().unwrap()),
            ("AWS_EC2_METADATA_DISABLED", "true"),
            ("AWS_REGION", "us-east-1"),
            ("AWS_ACCESS_KEY_ID", "AKIDEXAMPLE"),
            ("AWS_SECRET_ACCESS_KEY", "test-secret"),
            ("AWS_ENDPOINT_URL", "http://127.0.0.1:9"),
            ("AWS_MAX_ATTEMPTS", "1"),
        ],
        b"Ferris\n",
    );

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "Hello, World!\n5\nhey 5 there\nhey5there\nPlease enter your name: Hello Ferris\n"
    );
}
