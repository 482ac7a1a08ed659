//! Integration tests that run the CLI binary.

fn bin() -> std::process::Command {
    std::process::Command::new(env!("CARGO_BIN_EXE_autoconveyor"))
}

fn run_banner() -> std::process::Output {
    bin().output().expect("binary not found - run cargo build first")
}

/// First letter uppercased, mirroring the banner's platform display.
fn capitalized_os() -> String {
    let tag = std::env::consts::OS;
    let mut chars = tag.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[test]
fn banner_prints_name_and_version_once() {
    let output = run_banner();
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(concat!("AutoConveyor ", env!("CARGO_PKG_VERSION"))));
    assert_eq!(stdout.matches("🚀").count(), 1, "expected one banner");
}

#[test]
fn banner_starts_with_rocket_and_ends_with_repository() {
    let output = run_banner();
    let stdout = String::from_utf8_lossy(&output.stdout);
    let trimmed = stdout.trim();
    assert!(
        trimmed.starts_with(&format!(
            "🚀 AutoConveyor {} | {}",
            env!("CARGO_PKG_VERSION"),
            capitalized_os()
        )),
        "unexpected first line: {}",
        trimmed.lines().next().unwrap_or_default()
    );
    assert!(trimmed.ends_with("https://github.com/sathya-py/AutoConveyor"));
}

#[test]
fn banner_shows_capitalized_platform() {
    let output = run_banner();
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains(&format!("| {}", capitalized_os())),
        "expected platform {} in output",
        capitalized_os()
    );
}

#[test]
fn banner_is_identical_across_runs() {
    let first = run_banner();
    let second = run_banner();
    assert!(first.status.success() && second.status.success());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn piped_output_has_no_control_sequences() {
    // stdout is a pipe here, so clear and title-set must be skipped
    let output = run_banner();
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        !stdout.contains('\x1b'),
        "control sequences leaked into piped output"
    );
    assert!(!stdout.contains('\x07'));
}

#[test]
fn cli_help_succeeds_and_outputs_usage() {
    let output = bin()
        .arg("--help")
        .output()
        .expect("binary not found - run cargo build first");

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.is_empty());
    assert!(
        stdout.contains("autoconveyor") || stdout.contains("Usage"),
        "expected usage text in output"
    );
}

#[test]
fn cli_version_succeeds() {
    let output = bin()
        .arg("--version")
        .output()
        .expect("binary not found - run cargo build first");

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn unknown_flag_fails() {
    let output = bin()
        .arg("--definitely-not-a-flag")
        .output()
        .expect("binary not found - run cargo build first");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("error") || stderr.contains("unexpected"));
}
