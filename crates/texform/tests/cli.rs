//! CLI integration tests for texform commands.
//!
//! These tests drive the binary end to end against a stub LaTeX compiler
//! script, so the whole pipeline runs without a TeX installation. They focus
//! on exit codes and load-bearing output, not exact formatting.

// Integration tests live outside cfg(test) by design
#![allow(clippy::tests_outside_test_module)]
#![cfg(unix)]

use std::{fs, os::unix::fs::PermissionsExt, path::Path};

use assert_cmd::Command;
use predicates::prelude::*;

/// A LaTeX template with two placeholders.
const TEMPLATE: &str = "\\documentclass{article}\n\\begin{document}\nDear {{name}}, total {{amount}}.\n\\end{document}\n";

/// Helper to create a temp directory for tests.
fn temp_dir() -> tempfile::TempDir {
    tempfile::tempdir().unwrap()
}

/// Helper to get a texform command.
fn texform() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("texform").unwrap()
}

/// Helper to run `texform` in `dir` with HOME isolated to a subdirectory.
///
/// HOME points away from `dir` itself so a project `.texform.toml` is never
/// mistaken for the global one.
fn texform_in(dir: &Path) -> Command {
    let home = dir.join("home");
    fs::create_dir_all(&home).unwrap();
    let mut cmd = texform();
    cmd.current_dir(dir);
    cmd.env("HOME", home);
    cmd
}

/// Writes an executable stub compiler script.
///
/// The stub answers `--version` successfully. On compile invocations it
/// either writes `<output-dir>/<jobname>.pdf` and exits 0, or prints a LaTeX
/// error line and exits 1.
fn write_stub_compiler(dir: &Path, failing: bool) -> String {
    let body = if failing {
        "#!/bin/sh\n\
         if [ \"$1\" = \"--version\" ]; then echo fakelatex 1.0; exit 0; fi\n\
         echo '! LaTeX Error: something is broken.'\n\
         exit 1\n"
    } else {
        "#!/bin/sh\n\
         if [ \"$1\" = \"--version\" ]; then echo fakelatex 1.0; exit 0; fi\n\
         out=''; job=''\n\
         for arg in \"$@\"; do\n\
           case \"$arg\" in\n\
             -output-directory=*) out=\"${arg#*=}\" ;;\n\
             -jobname=*) job=\"${arg#*=}\" ;;\n\
           esac\n\
         done\n\
         printf '%%PDF-1.4 fake\\n' > \"$out/$job.pdf\"\n\
         exit 0\n"
    };

    let path = dir.join("fakelatex");
    fs::write(&path, body).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path.display().to_string()
}

/// Writes a project config pointing at the stub compiler.
fn write_config(dir: &Path, compiler: &str) {
    fs::write(
        dir.join(".texform.toml"),
        format!("[compiler]\nprogram = \"{compiler}\"\n"),
    )
    .unwrap();
}

/// Writes the sample template source and returns its path as a string.
fn write_template_source(dir: &Path) -> String {
    let path = dir.join("draft.tex");
    fs::write(&path, TEMPLATE).unwrap();
    path.display().to_string()
}

/// Imports the sample template as "Invoice Draft".
fn import_sample(dir: &Path) {
    let source = write_template_source(dir);
    texform_in(dir)
        .args([
            "import",
            &source,
            "--name",
            "Invoice Draft",
            "--description",
            "standard invoice",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported 'Invoice Draft' as ID"));
}

/// Generates one document from the sample template.
fn generate_sample(dir: &Path) {
    texform_in(dir)
        .args([
            "generate",
            "Invoice Draft",
            "--set",
            "name=Ada",
            "--set",
            "amount=120",
            "--description",
            "january",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Generated ID-"));
}

mod init {
    use super::*;

    #[test]
    fn creates_config_file() {
        let dir = temp_dir();

        texform_in(dir.path()).arg("init").assert().success();

        let contents = fs::read_to_string(dir.path().join(".texform.toml")).unwrap();
        assert!(contents.contains("# [compiler]"));
    }

    #[test]
    fn fails_if_config_exists() {
        let dir = temp_dir();
        fs::write(dir.path().join(".texform.toml"), "existing").unwrap();

        texform_in(dir.path())
            .arg("init")
            .assert()
            .failure()
            .stderr(predicate::str::contains("already exists"));
    }

    #[test]
    fn force_overwrites_existing() {
        let dir = temp_dir();
        fs::write(dir.path().join(".texform.toml"), "old content").unwrap();

        texform_in(dir.path())
            .args(["init", "--force"])
            .assert()
            .success();

        let contents = fs::read_to_string(dir.path().join(".texform.toml")).unwrap();
        assert!(contents.contains("# [paths]"));
    }
}

mod import {
    use super::*;

    #[test]
    fn records_template_and_lists_it() {
        let dir = temp_dir();
        let compiler = write_stub_compiler(dir.path(), false);
        write_config(dir.path(), &compiler);

        import_sample(dir.path());

        assert!(dir.path().join("templates.csv").exists());
        assert!(dir.path().join("templates/Invoice Draft.tex").exists());

        texform_in(dir.path())
            .args(["ls", "templates"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Invoice Draft"));
    }

    #[test]
    fn duplicate_name_is_rejected() {
        let dir = temp_dir();
        let compiler = write_stub_compiler(dir.path(), false);
        write_config(dir.path(), &compiler);
        import_sample(dir.path());

        let source = dir.path().join("draft.tex").display().to_string();
        texform_in(dir.path())
            .args([
                "import",
                &source,
                "--name",
                "Invoice Draft",
                "--description",
                "again",
            ])
            .assert()
            .failure()
            .stderr(predicate::str::contains("already imported"));
    }

    #[test]
    fn template_without_placeholders_is_rejected() {
        let dir = temp_dir();
        let compiler = write_stub_compiler(dir.path(), false);
        write_config(dir.path(), &compiler);
        let source = dir.path().join("plain.tex");
        fs::write(&source, "\\documentclass{article}\n").unwrap();

        texform_in(dir.path())
            .args([
                "import",
                &source.display().to_string(),
                "--name",
                "Plain",
                "--description",
                "none",
            ])
            .assert()
            .failure()
            .stderr(predicate::str::contains("no placeholders"));
    }

    #[test]
    fn colliding_initials_get_a_suffix() {
        let dir = temp_dir();
        let compiler = write_stub_compiler(dir.path(), false);
        write_config(dir.path(), &compiler);
        import_sample(dir.path());

        let source = dir.path().join("draft.tex").display().to_string();
        texform_in(dir.path())
            .args([
                "import",
                &source,
                "--name",
                "Internal Digest",
                "--description",
                "collides",
            ])
            .assert()
            .success()
            .stdout(predicate::str::contains("as ID2"));
    }
}

mod generate {
    use super::*;

    #[test]
    fn end_to_end_commits_document() {
        let dir = temp_dir();
        let compiler = write_stub_compiler(dir.path(), false);
        write_config(dir.path(), &compiler);
        import_sample(dir.path());

        generate_sample(dir.path());

        let registry = fs::read_to_string(dir.path().join("documents.csv")).unwrap();
        assert!(registry.contains("Invoice Draft"));

        // The stub compiler produced the PDF at the deterministic path.
        let pdfs: Vec<_> = fs::read_dir(dir.path().join("documents"))
            .unwrap()
            .map(|e| e.unwrap().file_name().into_string().unwrap())
            .collect();
        assert_eq!(pdfs.len(), 1);
        assert!(pdfs[0].starts_with("ID-") && pdfs[0].ends_with(".pdf"));

        texform_in(dir.path())
            .args(["search", "documents", "--id", "id-"])
            .assert()
            .success()
            .stdout(predicate::str::contains("january"));
    }

    #[test]
    fn missing_values_are_reported_together() {
        let dir = temp_dir();
        let compiler = write_stub_compiler(dir.path(), false);
        write_config(dir.path(), &compiler);
        import_sample(dir.path());

        texform_in(dir.path())
            .args(["generate", "Invoice Draft", "--description", "january"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("name, amount"));
    }

    #[test]
    fn invalid_id_format_is_rejected_up_front() {
        let dir = temp_dir();
        let compiler = write_stub_compiler(dir.path(), false);
        write_config(dir.path(), &compiler);
        import_sample(dir.path());

        texform_in(dir.path())
            .args([
                "generate",
                "Invoice Draft",
                "--set",
                "name=Ada",
                "--set",
                "amount=120",
                "--description",
                "january",
                "--id-format",
                "{TEMPLATE}-{BOGUS}-{seq}",
            ])
            .assert()
            .failure()
            .stderr(predicate::str::contains("{BOGUS}"));

        assert!(!dir.path().join("documents").exists());
    }

    #[test]
    fn compile_failure_keeps_registry_clean() {
        let dir = temp_dir();
        let compiler = write_stub_compiler(dir.path(), true);
        write_config(dir.path(), &compiler);
        import_sample(dir.path());

        texform_in(dir.path())
            .args([
                "generate",
                "Invoice Draft",
                "--set",
                "name=Ada",
                "--set",
                "amount=120",
                "--description",
                "january",
            ])
            .assert()
            .failure()
            .stderr(predicate::str::contains("compilation failed"))
            .stderr(predicate::str::contains("LaTeX Error"));

        texform_in(dir.path())
            .args(["ls", "documents"])
            .assert()
            .success()
            .stdout(predicate::str::contains("No documents generated."));

        // The bound source stays behind for inspection.
        let work_files: Vec<_> = fs::read_dir(dir.path().join("temp"))
            .unwrap()
            .map(|e| e.unwrap().file_name().into_string().unwrap())
            .collect();
        assert!(work_files.iter().any(|f| f.ends_with(".tex")));
    }

    #[test]
    fn show_prints_stored_parameters() {
        let dir = temp_dir();
        let compiler = write_stub_compiler(dir.path(), false);
        write_config(dir.path(), &compiler);
        import_sample(dir.path());
        generate_sample(dir.path());

        let registry = fs::read_to_string(dir.path().join("documents.csv")).unwrap();
        let id = registry
            .lines()
            .nth(1)
            .unwrap()
            .split(',')
            .next()
            .unwrap()
            .to_string();

        texform_in(dir.path())
            .args(["show", &id])
            .assert()
            .success()
            .stdout(predicate::str::contains("name = Ada"))
            .stdout(predicate::str::contains("amount = 120"));
    }

    #[test]
    fn regenerate_creates_second_document() {
        let dir = temp_dir();
        let compiler = write_stub_compiler(dir.path(), false);
        write_config(dir.path(), &compiler);
        import_sample(dir.path());
        generate_sample(dir.path());

        let registry = fs::read_to_string(dir.path().join("documents.csv")).unwrap();
        let id = registry
            .lines()
            .nth(1)
            .unwrap()
            .split(',')
            .next()
            .unwrap()
            .to_string();

        texform_in(dir.path())
            .args(["regenerate", &id, "--set", "amount=999"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Generated ID-"));

        let registry = fs::read_to_string(dir.path().join("documents.csv")).unwrap();
        assert_eq!(registry.lines().count(), 3); // header + two documents
    }
}

mod maintenance {
    use super::*;

    #[test]
    fn delete_document_removes_files_and_row() {
        let dir = temp_dir();
        let compiler = write_stub_compiler(dir.path(), false);
        write_config(dir.path(), &compiler);
        import_sample(dir.path());
        generate_sample(dir.path());

        let registry = fs::read_to_string(dir.path().join("documents.csv")).unwrap();
        let id = registry
            .lines()
            .nth(1)
            .unwrap()
            .split(',')
            .next()
            .unwrap()
            .to_string();

        texform_in(dir.path())
            .args(["delete", "document", &id])
            .assert()
            .success()
            .stdout(predicate::str::contains("Deleted document"));

        let registry = fs::read_to_string(dir.path().join("documents.csv")).unwrap();
        assert_eq!(registry.lines().count(), 1); // header only
        assert!(fs::read_dir(dir.path().join("documents")).unwrap().count() == 0);
    }

    #[test]
    fn delete_referenced_template_warns_and_check_flags_it() {
        let dir = temp_dir();
        let compiler = write_stub_compiler(dir.path(), false);
        write_config(dir.path(), &compiler);
        import_sample(dir.path());
        generate_sample(dir.path());

        texform_in(dir.path())
            .args(["delete", "template", "Invoice Draft"])
            .assert()
            .success()
            .stderr(predicate::str::contains("referenced by 1 document(s)"));

        texform_in(dir.path())
            .arg("check")
            .assert()
            .failure()
            .stdout(predicate::str::contains("unknown template"));
    }

    #[test]
    fn open_labels_missing_pdf() {
        let dir = temp_dir();
        let compiler = write_stub_compiler(dir.path(), false);
        write_config(dir.path(), &compiler);
        import_sample(dir.path());
        generate_sample(dir.path());

        let registry = fs::read_to_string(dir.path().join("documents.csv")).unwrap();
        let id = registry
            .lines()
            .nth(1)
            .unwrap()
            .split(',')
            .next()
            .unwrap()
            .to_string();

        // Remove the PDF out from under the registry.
        for entry in fs::read_dir(dir.path().join("documents")).unwrap() {
            fs::remove_file(entry.unwrap().path()).unwrap();
        }

        texform_in(dir.path())
            .args(["open", &id])
            .assert()
            .failure()
            .stderr(predicate::str::contains("PDF not found"));
    }

    #[test]
    fn export_copies_template_source() {
        let dir = temp_dir();
        let compiler = write_stub_compiler(dir.path(), false);
        write_config(dir.path(), &compiler);
        import_sample(dir.path());

        let dest = dir.path().join("out/copy.tex");
        texform_in(dir.path())
            .args(["export", "Invoice Draft", &dest.display().to_string()])
            .assert()
            .success();

        assert_eq!(fs::read_to_string(&dest).unwrap(), TEMPLATE);
    }

    #[test]
    fn check_is_clean_on_fresh_consistent_state() {
        let dir = temp_dir();
        let compiler = write_stub_compiler(dir.path(), false);
        write_config(dir.path(), &compiler);
        import_sample(dir.path());
        generate_sample(dir.path());

        texform_in(dir.path())
            .arg("check")
            .assert()
            .success()
            .stdout(predicate::str::contains("No issues found."));
    }

    #[test]
    fn status_reports_registry_counts() {
        let dir = temp_dir();
        let compiler = write_stub_compiler(dir.path(), false);
        write_config(dir.path(), &compiler);
        import_sample(dir.path());

        texform_in(dir.path())
            .arg("status")
            .assert()
            .success()
            .stdout(predicate::str::contains("1 templates"))
            .stdout(predicate::str::contains("0 documents"));
    }
}
