use super::*;
use crate::cli::{get_app, run_subcommand};
use crate::helpers::*;
use std::fs;

#[test]
fn can_convert_dialect_from_args() {
    let tmpfile = tempfile::NamedTempFile::new().unwrap();
    let args = vec!["hfvrp-cli", "dialect", PESSOA_INSTANCE_PATH, "--out-result", tmpfile.path().to_str().unwrap()];
    let matches = get_app().try_get_matches_from(args).unwrap();

    run_subcommand(matches).unwrap();

    assert_eq!(fs::read_to_string(tmpfile.path()).unwrap(), fs::read_to_string(INSTANCE_PATH).unwrap());
}

#[test]
fn can_convert_directory_with_custom_extension() {
    let tmpdir = tempfile::tempdir().unwrap();
    let root = tmpdir.path();
    create_files(root, &[("in/A.txt", "NUMBER_OF_VEHICLES\n3\n"), ("in/B.vrp", "NUMBER_OF_VEHICLES\n3\n")]);
    let args = vec![
        "dialect".to_string(),
        root.join("in").to_str().unwrap().to_string(),
        "-o".to_string(),
        root.join("out").to_str().unwrap().to_string(),
        "--extension".to_string(),
        "txt".to_string(),
    ];
    let matches = get_dialect_app().try_get_matches_from(args).unwrap();

    run_dialect(&matches).unwrap();

    assert_eq!(fs::read_to_string(root.join("out/A.txt")).unwrap(), "VEHICLES_AVAILABLE\n3\n");
    assert!(!root.join("out/B.vrp").exists());
}
