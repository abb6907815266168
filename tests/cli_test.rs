use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;
use textpipe::config::usage::{TEXTCAT_USAGE, TEXTPIPE_USAGE};

fn run(bin: &str, base: &Path, args: &[&str], stdin: Option<&[u8]>) -> Output {
    let mut child = Command::new(bin)
        .args(args)
        .env("BASE_PATH", base)
        .env_remove("RUST_LOG")
        .stdin(if stdin.is_some() {
            Stdio::piped()
        } else {
            Stdio::null()
        })
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();

    if let Some(input) = stdin {
        let mut handle = child.stdin.take().unwrap();
        handle.write_all(input).unwrap();
    }

    child.wait_with_output().unwrap()
}

fn textpipe(base: &Path, args: &[&str], stdin: Option<&[u8]>) -> Output {
    run(env!("CARGO_BIN_EXE_textpipe"), base, args, stdin)
}

fn textcat(base: &Path, args: &[&str], stdin: Option<&[u8]>) -> Output {
    run(env!("CARGO_BIN_EXE_textcat"), base, args, stdin)
}

#[test]
fn test_help_prints_usage_and_touches_nothing() {
    let temp_dir = TempDir::new().unwrap();

    let output = textpipe(temp_dir.path(), &["--help", "--file=input.txt"], None);

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        format!("{}\n", TEXTPIPE_USAGE)
    );
    assert!(!temp_dir.path().join("out.txt").exists());
    assert!(!temp_dir.path().join("out.txt.gz").exists());
}

#[test]
fn test_stdin_to_stdout_is_uppercased() {
    let temp_dir = TempDir::new().unwrap();

    let output = textpipe(temp_dir.path(), &["--in", "--out"], Some(b"hello"));

    assert!(output.status.success());
    assert_eq!(output.stdout, b"HELLO");
    assert!(!temp_dir.path().join("out.txt").exists());
}

#[test]
fn test_dash_selects_stdin() {
    let temp_dir = TempDir::new().unwrap();

    let output = textpipe(temp_dir.path(), &["-", "--out"], Some(b"dash input"));

    assert!(output.status.success());
    assert_eq!(output.stdout, b"DASH INPUT");
}

#[test]
fn test_no_mode_is_usage_error() {
    let temp_dir = TempDir::new().unwrap();

    let output = textpipe(temp_dir.path(), &["--out"], None);

    assert_eq!(output.status.code(), Some(64));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Incorrect usage."));
    assert!(String::from_utf8_lossy(&output.stdout).contains("textpipe usage:"));
}

#[test]
fn test_file_mode_writes_out_txt_silently() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join("input.txt"), "quiet success\n").unwrap();

    let output = textpipe(temp_dir.path(), &["--file=input.txt"], None);

    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    assert_eq!(
        std::fs::read_to_string(temp_dir.path().join("out.txt")).unwrap(),
        "QUIET SUCCESS\n"
    );
}

#[test]
fn test_monitor_logs_stats_to_stderr() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join("input.txt"), "watch me\n").unwrap();

    let output = textpipe(temp_dir.path(), &["--file=input.txt", "--monitor"], None);

    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("System monitoring enabled"));
    assert!(stderr.contains("Final Stats"));

    let quiet = textpipe(temp_dir.path(), &["--file=input.txt"], None);
    assert!(quiet.stderr.is_empty());
}

#[test]
fn test_compress_and_decompress_across_invocations() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join("input.txt"), "zip me up\n").unwrap();

    let first = textpipe(temp_dir.path(), &["--file=input.txt", "--compress"], None);
    assert!(first.status.success());
    assert!(temp_dir.path().join("out.txt.gz").exists());
    assert!(!temp_dir.path().join("out.txt").exists());

    let second = textpipe(
        temp_dir.path(),
        &["--file=out.txt.gz", "--decompress", "--out"],
        None,
    );
    assert!(second.status.success());
    assert_eq!(second.stdout, b"ZIP ME UP\n");
}

#[test]
fn test_compress_wins_over_decompress() {
    let temp_dir = TempDir::new().unwrap();

    let output = textpipe(
        temp_dir.path(),
        &["--in", "--out", "--compress", "--decompress"],
        Some(b"plain text"),
    );

    assert!(output.status.success());
    assert_eq!(&output.stdout[..2], &[0x1f, 0x8b]);
}

#[test]
fn test_missing_file_exit_code() {
    let temp_dir = TempDir::new().unwrap();

    let output = textpipe(temp_dir.path(), &["--file=missing.txt"], None);

    assert_eq!(output.status.code(), Some(66));
    assert!(!output.stderr.is_empty());
    assert!(!temp_dir.path().join("out.txt").exists());
}

#[test]
fn test_bad_gzip_exit_code() {
    let temp_dir = TempDir::new().unwrap();

    let output = textpipe(
        temp_dir.path(),
        &["--in", "--decompress", "--out"],
        Some(b"not gzip at all"),
    );

    assert_eq!(output.status.code(), Some(65));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_textcat_prints_file_verbatim() {
    let temp_dir = TempDir::new().unwrap();
    let content: Vec<u8> = b"lower case stays lower\n\xff\xfe raw bytes\n".to_vec();
    std::fs::write(temp_dir.path().join("raw.bin"), &content).unwrap();

    let output = textcat(temp_dir.path(), &["--file=raw.bin"], None);

    assert!(output.status.success());
    assert_eq!(output.stdout, content);
}

#[test]
fn test_textcat_reads_stdin() {
    let temp_dir = TempDir::new().unwrap();

    let output = textcat(temp_dir.path(), &["-"], Some(b"as is"));

    assert!(output.status.success());
    assert_eq!(output.stdout, b"as is");
}

#[test]
fn test_textcat_help_and_usage_error() {
    let temp_dir = TempDir::new().unwrap();

    let help = textcat(temp_dir.path(), &["--help"], None);
    assert!(help.status.success());
    assert_eq!(
        String::from_utf8(help.stdout).unwrap(),
        format!("{}\n", TEXTCAT_USAGE)
    );

    let invalid = textcat(temp_dir.path(), &[], None);
    assert_eq!(invalid.status.code(), Some(64));
    assert!(String::from_utf8_lossy(&invalid.stderr).contains("Incorrect usage."));
}
