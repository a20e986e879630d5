use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn corpus() -> TempDir {
    let dir = TempDir::new().unwrap();
    let files = [
        ("corpus/a.js", "function f() { return 1; }\n"),
        ("corpus/b/broken.js", "function f( { \n"),
        ("corpus/b/plain.js", "const x = 5;\n"),
        ("corpus/c/unbalanced.js", "class A {}\n// {\n"),
        ("corpus/notes.txt", "function ignored() {}\n"),
    ];
    for (rel, content) in files {
        let path = dir.path().join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }
    dir
}

fn cmd(workdir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("snippet-classifier").unwrap();
    cmd.current_dir(workdir)
        .env_remove("SNIPPET_ROOT")
        .env_remove("SNIPPET_OUTPUT_DIR")
        .env("XDG_CONFIG_HOME", workdir.join("xdg"));
    cmd
}

#[test]
fn writes_all_reports() {
    let dir = corpus();

    cmd(dir.path())
        .args(["corpus", "--output-dir", "reports"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Classified 4 snippets"))
        .stdout(predicate::str::contains("syntax_check_summary.txt"));

    let reports = dir.path().join("reports");
    let summary = fs::read_to_string(reports.join("syntax_check_summary.txt")).unwrap();
    assert_eq!(
        summary,
        "Total files with syntax errors: 1\n\
         Total files with function or class definitions: 2\n\
         Total files with balanced braces: 2\n\
         Total files that seem complete: 1\n"
    );

    let complete = fs::read_to_string(reports.join("complete_snippets.txt")).unwrap();
    assert_eq!(complete, format!("{}\n", Path::new("corpus").join("a.js").display()));

    let categories: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(reports.join("snippet_categories.json")).unwrap())
            .unwrap();
    assert_eq!(categories["Complete"], serde_json::json!(["a.js"]));
    assert_eq!(categories["SyntaxError"].as_array().unwrap().len(), 1);

    let table = fs::read_to_string(reports.join("syntax_check_results.csv")).unwrap();
    assert_eq!(table.lines().count(), 5);
    assert!(table.lines().any(|l| l.ends_with("\"Error\",\"No\",\"Unbalanced\"")));
}

#[test]
fn emits_only_selected_reports() {
    let dir = corpus();

    cmd(dir.path())
        .args(["corpus", "-o", "out", "--emit", "summary"])
        .assert()
        .success();

    assert!(dir.path().join("out/syntax_check_summary.txt").exists());
    assert!(!dir.path().join("out/syntax_check_results.csv").exists());
    assert!(!dir.path().join("out/snippet_categories.json").exists());
}

#[test]
fn root_from_environment() {
    let dir = corpus();

    cmd(dir.path())
        .env("SNIPPET_ROOT", "corpus")
        .env("SNIPPET_OUTPUT_DIR", "env-out")
        .assert()
        .success();

    assert!(dir.path().join("env-out/complete_snippets.txt").exists());
}

#[test]
fn root_from_dotenv_file() {
    let dir = corpus();
    fs::write(dir.path().join(".env"), "SNIPPET_ROOT=corpus\nSNIPPET_OUTPUT_DIR=dotenv-out\n").unwrap();

    cmd(dir.path()).assert().success();

    assert!(dir.path().join("dotenv-out/syntax_check_summary.txt").exists());
}

#[test]
fn missing_root_fails() {
    let dir = TempDir::new().unwrap();

    cmd(dir.path())
        .args(["does-not-exist"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a directory"));
}

#[test]
fn python_corpus() {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("py")).unwrap();
    fs::write(dir.path().join("py/a.py"), "def f():\n    return {}\n").unwrap();
    fs::write(dir.path().join("py/b.py"), "def f(:\n").unwrap();
    fs::write(dir.path().join("py/blank.py"), "\n  \n").unwrap();
    fs::write(dir.path().join("py/import.py"), "import os\nfrom sys import path\n").unwrap();
    fs::write(dir.path().join("py/script.py"), "import sys\nprint(sys.argv)\n").unwrap();
    fs::write(dir.path().join("py/pass.py"), "pass\n").unwrap();

    cmd(dir.path())
        .args(["py", "--language", "python", "-o", "out", "--emit", "summary,complete"])
        .assert()
        .success();

    let summary = fs::read_to_string(dir.path().join("out/snippet_summary.txt")).unwrap();
    assert_eq!(
        summary,
        "Number of Successful Snippets: 1\n\
         Number of Failed Snippets: 2\n\
         Number of Executable Snippets: 1\n\
         Number of Snippets Without Function/Class Definition: 1\n\
         Number of Snippets With Only Import Statements: 1\n"
    );
    let successful = fs::read_to_string(dir.path().join("out/successful_python_snippets.txt")).unwrap();
    assert!(successful.trim_end().ends_with("a.py"));
    assert!(!dir.path().join("out/syntax_check_summary.txt").exists());
}
