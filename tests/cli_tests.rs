//! Tests for the ds2html command line

#![cfg(feature = "cli")]

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

const MAIZE_CSV: &str = "Category,Type,Source,Version,Notes,Link\n\
                         Genes,Gene models,NCBI,1.0,N/A,N/A\n\
                         Genes,Proteins,UniProt,2.0,PubMed: 123,https://ftp.uniprot.org/pub/\n";

fn ds2html() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_ds2html"));
    cmd.env_remove("RUST_LOG").env("NO_COLOR", "1");
    cmd
}

fn run(cmd: &mut Command) -> (Output, String, String) {
    let output = cmd.output().expect("failed to run ds2html");
    let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
    let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
    (output, stdout, stderr)
}

fn write_input(dir: &Path, name: &str, csv: &str) {
    fs::create_dir_all(dir).unwrap();
    fs::write(dir.join(name), csv).unwrap();
}

fn entries(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .map(|rd| {
            rd.map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
                .collect()
        })
        .unwrap_or_default();
    names.sort();
    names
}

// ============================================================================
// Rendering
// ============================================================================

mod render {
    use super::*;

    #[test]
    fn test_default_paths() {
        let tmp = TempDir::new().unwrap();
        let input_dir = tmp.path().join("input_csv");
        let output_dir = tmp.path().join("output_html");
        write_input(&input_dir, "MaizeMine_v1.6_Data_Sources.csv", MAIZE_CSV);

        let (output, _, stderr) = run(ds2html()
            .arg("MaizeMine")
            .arg("1.6")
            .arg("--input-dir")
            .arg(&input_dir)
            .arg("--output-dir")
            .arg(&output_dir));
        assert!(output.status.success(), "stderr: {}", stderr);
        assert!(stderr.contains("Created HTML file"));

        // Only the final page is left behind, no temporary sibling
        assert_eq!(entries(&output_dir), vec!["dataSourcesTable_MaizeMine_v1.6.html"]);
        let html = fs::read_to_string(output_dir.join("dataSourcesTable_MaizeMine_v1.6.html"))
            .unwrap();
        assert!(html.starts_with("<html><head>"));
        assert!(html.contains(r#"<th width="20%">Version</th>"#));
        assert!(html.contains(r#"<td class="leftcol" rowspan="2"><h2><p>Genes</p></h2></td>"#));
        assert!(html.ends_with("</body>\n</html>"));
    }

    #[test]
    fn test_stdout_fragment() {
        let tmp = TempDir::new().unwrap();
        write_input(tmp.path(), "table.csv", MAIZE_CSV);

        let (output, stdout, stderr) = run(ds2html()
            .args(["MaizeMine", "1.6", "--stdout", "--fragment", "--quiet"])
            .arg("--input")
            .arg(tmp.path().join("table.csv")));
        assert!(output.status.success(), "stderr: {}", stderr);
        assert!(stdout.starts_with("<table "));
        assert!(stdout.contains(">UniProt FTP</a>"));
        assert!(stderr.is_empty());
    }

    #[test]
    fn test_custom_widths_and_merge_mode() {
        let tmp = TempDir::new().unwrap();
        write_input(tmp.path(), "t.csv", "A,B,C\nx,same,same\n");

        let (output, stdout, _) = run(ds2html()
            .args(["AnyMine", "0.1", "--stdout", "--widths", "20%,40%,40%"])
            .arg("--input")
            .arg(tmp.path().join("t.csv")));
        assert!(output.status.success());
        assert!(stdout.contains(r#"<td colspan="2">same</td>"#));

        let (output, stdout, _) = run(ds2html()
            .args(["AnyMine", "0.1", "--stdout", "--widths", "20%,40%,40%"])
            .args(["--column-merge", "off"])
            .arg("--input")
            .arg(tmp.path().join("t.csv")));
        assert!(output.status.success());
        assert!(!stdout.contains("colspan"));
    }

    #[test]
    fn test_version_flag() {
        let (output, stdout, _) = run(ds2html().arg("--version"));
        assert!(output.status.success());
        assert!(stdout.starts_with("ds2html "));
    }

    #[test]
    fn test_list_profiles() {
        let (output, stdout, _) = run(ds2html().arg("--list-profiles"));
        assert!(output.status.success());
        assert_eq!(stdout.lines().count(), 4);
        assert!(stdout.contains("MaizeMine"));
        assert!(stdout.contains("15% 15% 15% 20% 20% 15%"));
    }

    #[test]
    fn test_positionals_required() {
        let (output, _, stderr) = run(&mut ds2html());
        assert_eq!(output.status.code(), Some(2));
        assert!(stderr.contains("<MINE>"));
    }
}

// ============================================================================
// Failures
// ============================================================================

mod failures {
    use super::*;

    #[test]
    fn test_bad_version_before_file_access() {
        let tmp = TempDir::new().unwrap();
        let out = tmp.path().join("out.html");

        // The input does not exist; the version error must come first
        let (output, _, stderr) = run(ds2html()
            .args(["MaizeMine", "1.6.2"])
            .arg("--input")
            .arg(tmp.path().join("missing.csv"))
            .arg("--output")
            .arg(&out));
        assert_eq!(output.status.code(), Some(1));
        assert!(stderr.contains("not a valid version number"));
        assert!(!stderr.contains("failed to read"));
        assert!(!out.exists());
    }

    #[test]
    fn test_unknown_mine() {
        let tmp = TempDir::new().unwrap();
        let (output, _, stderr) = run(ds2html()
            .args(["NoSuchMine", "1.0"])
            .arg("--input")
            .arg(tmp.path().join("missing.csv")));
        assert_eq!(output.status.code(), Some(1));
        assert!(stderr.contains("Unknown dataset profile"));
        assert!(!stderr.contains("failed to read"));
    }

    #[test]
    fn test_ragged_table_leaves_no_file() {
        let tmp = TempDir::new().unwrap();
        write_input(tmp.path(), "t.csv", "A,B\nx,y\nz\n");
        let out_dir = tmp.path().join("out");

        let (output, _, stderr) = run(ds2html()
            .args(["M", "1.0", "--widths", "50%,50%"])
            .arg("--input")
            .arg(tmp.path().join("t.csv"))
            .arg("--output-dir")
            .arg(&out_dir));
        assert_eq!(output.status.code(), Some(1));
        assert!(stderr.contains("Invalid grid shape"));
        assert!(entries(&out_dir).is_empty());
    }
}

// ============================================================================
// Check and strict modes
// ============================================================================

mod check {
    use super::*;

    #[test]
    fn test_check_clean_table() {
        let tmp = TempDir::new().unwrap();
        write_input(tmp.path(), "t.csv", MAIZE_CSV);
        let out = tmp.path().join("out.html");

        let (output, stdout, _) = run(ds2html()
            .args(["MaizeMine", "1.6", "--check"])
            .arg("--input")
            .arg(tmp.path().join("t.csv"))
            .arg("--output")
            .arg(&out));
        assert!(output.status.success());
        assert!(stdout.contains("Summary: no issues found"));
        // Check mode does not render
        assert!(!out.exists());
    }

    #[test]
    fn test_check_exits_1_on_errors() {
        let tmp = TempDir::new().unwrap();
        write_input(tmp.path(), "t.csv", "A,B\nx\n");

        let (output, stdout, _) = run(ds2html()
            .args(["M", "1.0", "--check", "--widths", "50%,50%"])
            .arg("--input")
            .arg(tmp.path().join("t.csv")));
        assert_eq!(output.status.code(), Some(1));
        assert!(stdout.contains("error: row has 1 column(s), header has 2"));
        assert!(stdout.contains("Summary: 1 error"));
    }

    #[test]
    fn test_check_warnings_exit_0() {
        let tmp = TempDir::new().unwrap();
        write_input(tmp.path(), "t.csv", "A,B\nx,y\n");

        let (output, stdout, _) = run(ds2html()
            .args(["M", "1.0", "--check", "--widths", "40%,50%"])
            .arg("--input")
            .arg(tmp.path().join("t.csv")));
        assert!(output.status.success());
        assert!(stdout.contains("Summary: 1 warning"));
    }

    #[test]
    fn test_strict_refuses_warnings() {
        let tmp = TempDir::new().unwrap();
        write_input(tmp.path(), "t.csv", "A,B\nx,y\n");
        let out = tmp.path().join("out.html");

        let (output, _, stderr) = run(ds2html()
            .args(["M", "1.0", "--strict", "--widths", "40%,50%"])
            .arg("--input")
            .arg(tmp.path().join("t.csv"))
            .arg("--output")
            .arg(&out));
        assert_eq!(output.status.code(), Some(1));
        assert!(stderr.contains("add up to 90%"));
        assert!(stderr.contains("strict mode"));
        assert!(!out.exists());
    }

    #[test]
    fn test_strict_ignores_notes() {
        let tmp = TempDir::new().unwrap();
        write_input(tmp.path(), "t.csv", "A,B\nx,https://example.org/data\n");
        let out = tmp.path().join("out.html");

        let (output, _, stderr) = run(ds2html()
            .args(["M", "1.0", "--strict", "--widths", "50%,50%"])
            .arg("--input")
            .arg(tmp.path().join("t.csv"))
            .arg("--output")
            .arg(&out));
        assert!(output.status.success(), "stderr: {}", stderr);
        assert!(out.exists());
    }
}
