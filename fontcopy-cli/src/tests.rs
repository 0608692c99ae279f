use super::*;
use clap::CommandFactory;
use fontcopy_core::fs::MemoryFs;

fn parse(args: &[&str]) -> Cli {
    let mut argv = vec!["copy-fonts"];
    argv.extend_from_slice(args);
    Cli::try_parse_from(argv).expect("parse cli")
}

fn container() -> MemoryFs {
    MemoryFs::new()
        .with_file("/fonts/A.ttf", b"alpha".to_vec())
        .with_file("/fonts/B.TTF", b"bravo".to_vec())
        .with_file("/fonts/readme.txt", b"hello".to_vec())
        .with_dir("/font_volume")
}

#[test]
fn command_definition_is_consistent() {
    Cli::command().debug_assert();
}

#[test]
fn bare_invocation_matches_container_defaults() {
    let cli = parse(&[]);
    assert_eq!(cli.config(), CopierConfig::default());
    assert_eq!(cli.log_level(), LevelFilter::Warn);
}

#[test]
fn flags_map_onto_config() {
    let cli = parse(&[
        "--source",
        "/srv/fonts",
        "--dest",
        "/mnt/volume",
        "--keep-going",
        "--dry-run",
        "--no-overwrite",
        "--no-follow-symlinks",
        "-vv",
    ]);
    let config = cli.config();

    assert_eq!(config.source, PathBuf::from("/srv/fonts"));
    assert_eq!(config.destination, PathBuf::from("/mnt/volume"));
    assert!(config.keep_going);
    assert!(config.dry_run);
    assert!(!config.overwrite);
    assert!(!config.follow_symlinks);
    assert_eq!(cli.log_level(), LevelFilter::Debug);
}

#[test]
fn verbose_and_quiet_conflict() {
    let parsed = Cli::try_parse_from(["copy-fonts", "-v", "--quiet"]);
    assert!(parsed.is_err());
}

#[test]
fn prints_completion_and_exits_zero() {
    let fs = container();
    let mut out = Vec::new();

    let code = execute(&parse(&[]), &fs, &mut out).expect("execute");

    assert_eq!(code, EXIT_OK);
    assert_eq!(String::from_utf8(out).unwrap(), "Copy completed.\n");
    assert_eq!(fs.file_names("/font_volume"), vec!["A.ttf"]);
}

#[test]
fn empty_source_still_exits_zero() {
    let fs = MemoryFs::new().with_dir("/fonts").with_dir("/font_volume");
    let mut out = Vec::new();

    let code = execute(&parse(&[]), &fs, &mut out).expect("execute");

    assert_eq!(code, EXIT_OK);
    assert_eq!(String::from_utf8(out).unwrap(), "No .ttf files found.\n");
}

#[test]
fn missing_destination_is_an_error_naming_the_path() {
    let fs = MemoryFs::new().with_dir("/fonts");
    let mut out = Vec::new();

    let err = execute(&parse(&[]), &fs, &mut out).unwrap_err();

    assert!(err.to_string().contains("/font_volume"));
    assert!(out.is_empty());
}

#[test]
fn keep_going_failures_exit_partial() {
    let fs = container()
        .with_file("/fonts/C.ttf", b"charlie".to_vec())
        .fail_copy_of("/fonts/A.ttf");
    let mut out = Vec::new();

    let code = execute(&parse(&["--keep-going"]), &fs, &mut out).expect("execute");

    assert_eq!(code, EXIT_PARTIAL);
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "Copy completed with 1 failure(s).\n"
    );
    assert_eq!(fs.file_names("/font_volume"), vec!["C.ttf"]);
}

#[test]
fn json_flag_emits_report() {
    let fs = container();
    let mut out = Vec::new();

    execute(&parse(&["--json"]), &fs, &mut out).expect("execute");

    let report: CopyReport = serde_json::from_slice(&out).expect("parse json");
    assert_eq!(report.copied.len(), 1);
    assert_eq!(report.skipped, 2);
}

#[test]
fn strict_copy_failure_is_an_error_suggesting_keep_going() {
    let fs = container()
        .with_file("/fonts/C.ttf", b"charlie".to_vec())
        .fail_copy_of("/fonts/A.ttf");
    let mut out = Vec::new();

    let err = execute(&parse(&[]), &fs, &mut out).unwrap_err();

    assert!(err.to_string().contains("--keep-going"));
    assert!(format!("{err:#}").contains("/fonts/A.ttf"));
    assert!(out.is_empty());
    assert!(fs.file_names("/font_volume").is_empty());
}

#[test]
fn configuration_errors_carry_no_keep_going_hint() {
    let fs = MemoryFs::new().with_dir("/font_volume");
    let mut out = Vec::new();

    let err = execute(&parse(&["--keep-going"]), &fs, &mut out).unwrap_err();

    assert_eq!(
        err.to_string(),
        "source directory /fonts does not exist or is not a directory"
    );
}
