//! End-to-end smoke tests for the CLI.
//!
//! These tests drive [`foctree_cli::run`] the same way the binary does,
//! against files in a temporary directory.

use std::fs;

use foctree_cli::{Args, Command, run};

const FIXTURE: &str = "focus_tree = {
\tfocus = {
\t\tid = industry
\t\ticon = GFX_goal_production
\t\tcost = 5
\t\tx = 4
\t\ty = 0
\t\tname = Industrial Effort
\t}

\tfocus = {
\t\tid = factories
\t\tprerequisite = { focus = industry }
\t\trelative_position_id = industry
\t\tx = 0
\t\ty = 1
\t}
}";

fn args(command: Command) -> Args {
    Args {
        command,
        config: None,
        log_level: "off".to_string(),
    }
}

fn path_str(path: &std::path::Path) -> String {
    path.to_str().unwrap().to_string()
}

#[test]
fn test_import_then_export_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let script = dir.path().join("national_focus.txt");
    let store = dir.path().join("tree.json");
    let exported = dir.path().join("exported.txt");
    fs::write(&script, FIXTURE).unwrap();

    run(&args(Command::Import {
        input: path_str(&script),
        output: path_str(&store),
    }))
    .unwrap();

    let json = fs::read_to_string(&store).unwrap();
    assert!(json.contains("\"industry\""));
    assert!(json.contains("\"factories\""));

    run(&args(Command::Export {
        input: path_str(&store),
        output: path_str(&exported),
    }))
    .unwrap();

    let script_out = fs::read_to_string(&exported).unwrap();
    assert!(script_out.starts_with("focus_tree = {\n"));
    assert!(script_out.contains("\t\tprerequisite = { focus = industry }\n"));
    assert!(script_out.contains("\t\trelative_position_id = industry\n"));
}

#[test]
fn test_fmt_in_place_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let script = dir.path().join("messy.txt");
    fs::write(
        &script,
        "focus = {\n    id = lone\n    cost = 2   # trailing comment\n}",
    )
    .unwrap();

    run(&args(Command::Fmt {
        input: path_str(&script),
        output: None,
    }))
    .unwrap();
    let once = fs::read_to_string(&script).unwrap();

    run(&args(Command::Fmt {
        input: path_str(&script),
        output: None,
    }))
    .unwrap();
    let twice = fs::read_to_string(&script).unwrap();

    assert_eq!(once, twice);
    assert!(once.contains("\t\tid = lone\n"));
    assert!(once.contains("\t\tcost = 2\n"));
    assert!(!once.contains('#'));
}

#[test]
fn test_localise_writes_language_header() {
    let dir = tempfile::tempdir().unwrap();
    let script = dir.path().join("national_focus.txt");
    let store = dir.path().join("tree.json");
    let loc = dir.path().join("focus_localisation.yml");
    fs::write(&script, FIXTURE).unwrap();

    run(&args(Command::Import {
        input: path_str(&script),
        output: path_str(&store),
    }))
    .unwrap();

    run(&args(Command::Localise {
        input: path_str(&store),
        output: path_str(&loc),
    }))
    .unwrap();

    let content = fs::read_to_string(&loc).unwrap();
    assert!(content.starts_with("l_english:\n"));
    assert!(content.contains(" ENG_industry: \"Industrial Effort\"\n"));
    assert!(content.contains(" ENG_industry_desc: \"\"\n"));
}

#[test]
fn test_missing_input_is_an_error() {
    let dir = tempfile::tempdir().unwrap();

    let result = run(&args(Command::Import {
        input: path_str(&dir.path().join("nope.txt")),
        output: path_str(&dir.path().join("out.json")),
    }));

    assert!(result.is_err());
}

#[test]
fn test_unterminated_script_reports_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let script = dir.path().join("broken.txt");
    fs::write(&script, "focus = { id = broken").unwrap();

    let result = run(&args(Command::Import {
        input: path_str(&script),
        output: path_str(&dir.path().join("out.json")),
    }));

    match result {
        Err(foctree::FoctreeError::Parse { err, .. }) => {
            assert!(!err.diagnostics().is_empty());
        }
        other => panic!("Expected parse error, got {:?}", other.err()),
    }
}
