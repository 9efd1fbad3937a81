use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn omix() -> Command {
    let mut cmd = Command::cargo_bin("omix").unwrap();
    cmd.env_remove("RUST_LOG")
        .env_remove("OMIX_VERBOSE")
        .env_remove("OMIX_NO_COLOR");
    cmd
}

fn script(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn prints_tokens_for_a_clean_script() {
    let file = script("print \"hi\";\n");
    omix()
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Type: Print, Lexeme: print, Literal: nil, Line: 1, Column: 1",
        ))
        .stdout(predicate::str::contains(
            "Type: String, Lexeme: \"hi\", Literal: hi, Line: 1, Column: 7",
        ))
        .stdout(predicate::str::contains("Type: Eof, Lexeme: , Literal: nil, Line: 2, Column: 1"));
}

#[test]
fn lexical_errors_exit_with_65() {
    let file = script("var x = 12.;\n@");
    omix()
        .arg(file.path())
        .assert()
        .code(65)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("ErrorMessage: Invalid Number at line 1, column 9"))
        .stderr(predicate::str::contains(
            "ErrorMessage: Unexpected character: @ at line 2, column 1",
        ));
}

#[test]
fn unreadable_script_exits_with_70() {
    let dir = tempfile::tempdir().unwrap();
    omix()
        .arg(dir.path().join("missing.omx"))
        .assert()
        .code(70)
        .stderr(predicate::str::contains("could not read"));
}

#[test]
fn too_many_arguments_exits_with_64() {
    omix()
        .args(["one.omx", "two.omx"])
        .assert()
        .code(64)
        .stdout(predicate::str::contains("Usage: omix [script]"));
}

#[test]
fn prompt_scans_each_line_until_exit() {
    omix()
        .write_stdin("var x\n@\nexit\nwhile\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Omix Interpreter"))
        .stdout(predicate::str::contains("Type: Identifier, Lexeme: x"))
        .stdout(predicate::str::contains("Lexeme: while").not())
        .stderr(predicate::str::contains("Unexpected character: @"));
}

#[test]
fn prompt_ends_at_end_of_input() {
    omix()
        .write_stdin("fun")
        .assert()
        .success()
        .stdout(predicate::str::contains("Type: Fun, Lexeme: fun"));
}
