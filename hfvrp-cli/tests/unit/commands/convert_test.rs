use super::*;
use crate::cli::{get_app, run_subcommand};
use crate::helpers::*;
use std::fs;

#[test]
fn can_convert_solution_from_args() {
    let tmpfile = tempfile::NamedTempFile::new().unwrap();
    let args = vec![
        "hfvrp-cli",
        "convert",
        "--instance",
        INSTANCE_PATH,
        "--solution",
        SOLUTION_PATH,
        "--out-result",
        tmpfile.path().to_str().unwrap(),
    ];
    let matches = get_app().try_get_matches_from(args).unwrap();

    run_subcommand(matches).unwrap();

    assert_eq!(fs::read_to_string(tmpfile.path()).unwrap(), EXPECTED_SOLUTION);
}

#[test]
fn can_use_config_from_file() {
    let tmpdir = tempfile::tempdir().unwrap();
    let root = tmpdir.path();
    create_files(
        root,
        &[
            ("config.json", r#"{ "capacitiesMarker": "CAPS", "costPrecision": 1 }"#),
            ("A.vrp", "CAPS\n283 400\nVEHICLES_AVAILABLE\n2 1\n"),
            ("A.sol", "Veiculo [type=0, q=283, f=575, r=1.16] Route: 4 5\nCost 7.21\n"),
        ],
    );
    let out_path = root.join("A.txt");
    let args = vec![
        "convert".to_string(),
        "-i".to_string(),
        root.join("A.vrp").to_str().unwrap().to_string(),
        "-s".to_string(),
        root.join("A.sol").to_str().unwrap().to_string(),
        "-o".to_string(),
        out_path.to_str().unwrap().to_string(),
        "-c".to_string(),
        root.join("config.json").to_str().unwrap().to_string(),
    ];
    let matches = get_convert_app().try_get_matches_from(args).unwrap();

    run_convert(&matches).unwrap();

    assert_eq!(fs::read_to_string(out_path).unwrap(), "Route #1: 4 5\nRoute #2: \nRoute #3: \nCost: 7.2");
}

#[test]
fn can_report_missing_solution_file() {
    let args = vec!["convert", "-i", INSTANCE_PATH, "-s", "../data/ails/Solutions/unknown.sol"];
    let matches = get_convert_app().try_get_matches_from(args).unwrap();

    let result = run_convert(&matches);

    assert!(result.unwrap_err().starts_with("cannot open solution file"));
}

#[test]
fn can_require_instance_argument() {
    let args = vec!["convert", "-s", SOLUTION_PATH];

    assert!(get_convert_app().try_get_matches_from(args).is_err());
}
