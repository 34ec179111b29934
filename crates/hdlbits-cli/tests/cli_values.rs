// crates/hdlbits-cli/tests/cli_values.rs

use std::fs;
use std::process::{Command, Output};

fn cli() -> Command {
    Command::new(env!("CARGO_BIN_EXE_hdlbits-cli"))
}

fn run_ok(cmd: &mut Command) -> String {
    let out = cmd.output().expect("spawn command");
    assert!(
        out.status.success(),
        "command failed: status={:?}\nstdout:\n{}\nstderr:\n{}",
        out.status.code(),
        String::from_utf8_lossy(&out.stdout),
        String::from_utf8_lossy(&out.stderr)
    );
    String::from_utf8(out.stdout).expect("utf8 stdout")
}

fn run_err(cmd: &mut Command) -> Output {
    let out = cmd.output().expect("spawn command");
    assert!(!out.status.success(), "command unexpectedly succeeded");
    out
}

fn lines(s: &str) -> Vec<i64> {
    s.lines().map(|l| l.trim().parse().expect("integer line")).collect()
}

#[test]
fn clip_and_wrap_from_args() {
    let out = run_ok(cli().args(["clip", "--width", "8", "200", "-200", "5"]));
    assert_eq!(lines(&out), vec![127, -128, 5]);

    let out = run_ok(cli().args(["clip", "--width", "8", "--symmetric", "-200"]));
    assert_eq!(lines(&out), vec![-127]);

    let out = run_ok(cli().args(["wrap", "--width", "8", "0x80", "0xFF", "-129"]));
    assert_eq!(lines(&out), vec![-128, -1, 127]);
}

#[test]
fn round_directions() {
    let out = run_ok(cli().args(["round", "--lsb", "1", "--direction", "HALF_EVEN", "1", "3", "-1", "-3"]));
    assert_eq!(lines(&out), vec![0, 2, 0, -2]);

    let out = run_ok(cli().args(["round", "--lsb", "1", "-1"]));
    assert_eq!(lines(&out), vec![-1]);

    let err = run_err(cli().args(["round", "--lsb", "1", "--direction", "half_up", "1"]));
    assert!(String::from_utf8_lossy(&err.stderr).contains("unsupported round direction"));

    let err = run_err(cli().args(["round", "--lsb", "1", "--unsigned", "-1"]));
    assert!(String::from_utf8_lossy(&err.stderr).contains("domain error"));
}

#[test]
fn truncate_modes() {
    let out = run_ok(cli().args(["truncate", "--lsb", "1", "-3", "3"]));
    assert_eq!(lines(&out), vec![-2, 1]);
    let out = run_ok(cli().args(["truncate", "--lsb", "1", "--symmetric", "-3", "3"]));
    assert_eq!(lines(&out), vec![-1, 1]);
}

#[test]
fn requantize_file_roundtrip() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = dir.path().join("in.txt");
    let output = dir.path().join("out.txt");
    fs::write(&input, "# 12-bit samples\n0x7FF\n-2048\n\n17 # mid\n").expect("write input");

    run_ok(cli().args([
        "requantize",
        "--input-width",
        "12",
        "--output-width",
        "6",
        "--lsb-width",
        "3",
        "--round",
        "--clip",
        "--in",
        input.to_str().unwrap(),
        "--out",
        output.to_str().unwrap(),
    ]));

    let got = lines(&fs::read_to_string(&output).expect("read output"));
    // 2047/8 rounds to 256 -> clip 31; -2048/8 = -256 -> clip -32; 17/8 rounds to 2
    assert_eq!(got, vec![31, -32, 2]);
}

#[test]
fn conversions() {
    let out = run_ok(cli().args(["to-unsigned", "--width", "8", "-1", "-128"]));
    assert_eq!(out.lines().collect::<Vec<_>>(), vec!["255", "128"]);

    let out = run_ok(cli().args(["to-signed", "--width", "8", "0xFF", "0x7F"]));
    assert_eq!(lines(&out), vec![-1, 127]);
}

#[test]
fn bits_inspect_and_edit() {
    let out = run_ok(cli().args([
        "bits",
        "0xDEAD",
        "--concat",
        "0xBEEF:16",
        "--get",
        "31:16",
        "--get",
        "0",
        "--set",
        "7:0=ones",
    ]));
    assert!(out.contains("value    = 0xdeadbeff"), "{out}");
    assert!(out.contains("width    = 32"), "{out}");
    assert!(out.contains("get[31:16] = 0xdead"), "{out}");
    assert!(out.contains("get[0] = 0x1"), "{out}");

    let out = run_ok(cli().args(["bits", "1", "--width", "8", "--reverse", "--positions"]));
    assert!(out.contains("reverse  = 0x80"), "{out}");
    assert!(out.contains("ones     = [0]"), "{out}");

    let out = run_ok(cli().args(["bits", "0xDEADBEEF", "--symbol-width", "8", "--get", "3:2"]));
    assert!(out.contains("get[3:2] = 0xdead"), "{out}");

    let err = run_err(cli().args(["bits", "256", "--width", "8"]));
    assert!(String::from_utf8_lossy(&err.stderr).contains("does not fit"));
}

#[test]
fn bits_fill_with_minus_one_and_slice_alias() {
    let out = run_ok(cli().args(["bits", "0xDEAD", "--set", "7:0=-1", "--slice", "15:8"]));
    assert!(out.contains("value    = 0xdeff"), "{out}");
    assert!(out.contains("get[15:8] = 0xde"), "{out}");
}

#[test]
fn bits_symbol_view_pads_partial_top_symbol() {
    let out = run_ok(cli().args(["bits", "0x1FF", "--symbol-width", "8", "--get", "1", "--get", "0"]));
    assert!(out.contains("width    = 16"), "{out}");
    assert!(out.contains("get[1] = 0x1"), "{out}");
    assert!(out.contains("get[0] = 0xff"), "{out}");

    let out = run_ok(cli().args(["bits", "0x1FF", "--symbol-width", "8", "--set", "1=-1"]));
    assert!(out.contains("value    = 0xffff"), "{out}");
}
