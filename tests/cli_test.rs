use clap::Parser;
use service_wizard::cli::Args;
use std::ffi::OsString;
use std::path::PathBuf;

fn make_args(args: &[&str]) -> Vec<OsString> {
    let mut res = vec![OsString::from("service-wizard")];
    res.extend(args.iter().map(OsString::from));
    res
}

#[test]
fn test_defaults() {
    let parsed = Args::try_parse_from(make_args(&[])).unwrap();

    assert_eq!(parsed.output_dir, PathBuf::from("."));
    assert_eq!(parsed.template_dir, PathBuf::from("templates"));
    assert!(!parsed.stdin);
    assert!(!parsed.verbose);
}

#[test]
fn test_output_dir_argument() {
    let parsed = Args::try_parse_from(make_args(&["./services"])).unwrap();

    assert_eq!(parsed.output_dir, PathBuf::from("./services"));
}

#[test]
fn test_all_flags() {
    let parsed = Args::try_parse_from(make_args(&[
        "--stdin",
        "--verbose",
        "--template-dir",
        "/opt/wizard/templates",
        "./out",
    ]))
    .unwrap();

    assert!(parsed.stdin);
    assert!(parsed.verbose);
    assert_eq!(parsed.template_dir, PathBuf::from("/opt/wizard/templates"));
    assert_eq!(parsed.output_dir, PathBuf::from("./out"));
}

#[test]
fn test_short_flags() {
    let parsed = Args::try_parse_from(make_args(&["-s", "-v", "-t", "tpl"])).unwrap();

    assert!(parsed.stdin);
    assert!(parsed.verbose);
    assert_eq!(parsed.template_dir, PathBuf::from("tpl"));
}

#[test]
fn test_too_many_args() {
    assert!(Args::try_parse_from(make_args(&["./out", "extra"])).is_err());
}
