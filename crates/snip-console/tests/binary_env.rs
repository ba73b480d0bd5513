use std::io::Write;
use std::process::{Command, Output, Stdio};

const SNIP_ENV: [&str; 6] = [
    "SNIP_BASE_URL",
    "SNIP_CODE_LENGTH",
    "SNIP_MAX_ATTEMPTS",
    "SNIP_GENERATOR",
    "SNIP_SEED",
    "SNIP_LOG_FORMAT",
];

fn snip(args: &[&str], envs: &[(&str, &str)], stdin: &str) -> Output {
    let mut command = Command::new(env!("CARGO_BIN_EXE_snip"));
    for name in SNIP_ENV {
        command.env_remove(name);
    }
    command
        .env_remove("RUST_LOG")
        .args(args)
        .envs(envs.iter().copied())
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());

    let mut child = command.spawn().expect("spawn snip");
    child
        .stdin
        .take()
        .expect("piped stdin")
        .write_all(stdin.as_bytes())
        .expect("write stdin");
    child.wait_with_output().expect("wait for snip")
}

#[test]
fn settings_are_read_from_environment() {
    let output = snip(
        &[],
        &[
            ("SNIP_BASE_URL", "https://sn.ip/"),
            ("SNIP_CODE_LENGTH", "8"),
            ("SNIP_GENERATOR", "sequential"),
        ],
        "1\nhttps://example.com\n3\n",
    );

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Your short URL is: https://sn.ip/AAAAAAAA\n"), "{stdout}");
}

#[test]
fn flags_override_environment() {
    let output = snip(
        &["--code-length", "4"],
        &[("SNIP_CODE_LENGTH", "8"), ("SNIP_GENERATOR", "sequential")],
        "1\nhttps://example.com\n3\n",
    );

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Your short URL is: http://miacortador.com/AAAA\n"), "{stdout}");
}

#[test]
fn invalid_environment_value_is_rejected() {
    let output = snip(&[], &[("SNIP_CODE_LENGTH", "0")], "3\n");

    assert!(!output.status.success());
}

#[test]
fn seed_with_sequential_generator_warns() {
    let output = snip(
        &["--generator", "sequential"],
        &[("SNIP_SEED", "42")],
        "3\n",
    );

    assert!(output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(
        stderr.contains("seed is ignored by the sequential generator"),
        "{stderr}"
    );

    let output = snip(&["--generator", "random", "--seed", "42"], &[], "3\n");
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(!stderr.contains("seed is ignored"), "{stderr}");
}
