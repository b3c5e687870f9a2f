//! End-to-end tests driving the line-tools binary over stdin/stdout

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;

fn line_tools() -> Command {
    cargo_bin_cmd!("line-tools")
}

mod cli_basics {
    use super::*;

    #[test]
    fn shows_help() {
        line_tools()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("grep"))
            .stdout(predicate::str::contains("uniq"));
    }

    #[test]
    fn shows_version() {
        line_tools()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn missing_subcommand_is_usage_error() {
        line_tools().assert().code(2).stdout("");
    }

    #[test]
    fn unknown_subcommand_is_usage_error() {
        line_tools()
            .arg("wc")
            .write_stdin("a\n")
            .assert()
            .code(2)
            .stdout("")
            .stderr(predicate::str::contains("wc"));
    }

    #[test]
    fn grep_requires_pattern() {
        line_tools().arg("grep").write_stdin("a\n").assert().code(2);
    }

    #[test]
    fn invalid_field_list_is_usage_error() {
        line_tools()
            .args(["cut", "-f", "1,x"])
            .write_stdin("a\tb\n")
            .assert()
            .code(2)
            .stderr(predicate::str::contains("invalid field index"));
    }

    #[test]
    fn empty_delimiter_is_usage_error() {
        line_tools()
            .args(["cut", "-f", "0", "-d", ""])
            .write_stdin("a\n")
            .assert()
            .code(2)
            .stderr(predicate::str::contains("delimiter must not be empty"));
    }
}

mod scenarios {
    use super::*;

    #[test]
    fn grep_keeps_matching_lines_in_order() {
        line_tools()
            .args(["grep", "apple"])
            .write_stdin("apple\nbanana\napple\ncherry\n")
            .assert()
            .success()
            .stdout("apple\napple\n");
    }

    #[test]
    fn grep_ignore_case_and_invert() {
        line_tools()
            .args(["grep", "-i", "-v", "APPLE"])
            .write_stdin("Apple\nbanana\napple pie\ncherry\n")
            .assert()
            .success()
            .stdout("banana\ncherry\n");
    }

    #[test]
    fn grep_long_flags() {
        line_tools()
            .args(["grep", "--ignore-case", "--invert", "b"])
            .write_stdin("A\nB\n")
            .assert()
            .success()
            .stdout("A\n");
    }

    #[test]
    fn sort_numeric_both_directions() {
        line_tools()
            .args(["sort", "-n"])
            .write_stdin("3\n1\n2\n")
            .assert()
            .success()
            .stdout("1\n2\n3\n");

        line_tools()
            .args(["sort", "-n", "-r"])
            .write_stdin("3\n1\n2\n")
            .assert()
            .success()
            .stdout("3\n2\n1\n");
    }

    #[test]
    fn sort_text_default() {
        line_tools()
            .arg("sort")
            .write_stdin("pear\napple\nfig\n")
            .assert()
            .success()
            .stdout("apple\nfig\npear\n");
    }

    #[test]
    fn sort_numeric_failure_aborts_without_output() {
        line_tools()
            .args(["sort", "--numeric"])
            .write_stdin("1\nten\n2\n")
            .assert()
            .code(1)
            .stdout("")
            .stderr(predicate::str::contains("line 2: 'ten' is not a number"));
    }

    #[test]
    fn uniq_counts_adjacent_runs_only() {
        line_tools()
            .args(["uniq", "-c"])
            .write_stdin("apple\napple\nbanana\napple\n")
            .assert()
            .success()
            .stdout("2 apple\n1 banana\n1 apple\n");
    }

    #[test]
    fn uniq_without_count() {
        line_tools()
            .arg("uniq")
            .write_stdin("a\na\nb\na\n")
            .assert()
            .success()
            .stdout("a\nb\na\n");
    }

    #[test]
    fn cut_with_custom_delimiter() {
        line_tools()
            .args(["cut", "-f", "1", "-d", ":"])
            .write_stdin("a:b:c\n")
            .assert()
            .success()
            .stdout("b\n");
    }

    #[test]
    fn cut_reorders_and_defaults_to_tab() {
        line_tools()
            .args(["cut", "--fields", "2,0"])
            .write_stdin("a\tb\tc\nx\ty\n")
            .assert()
            .success()
            .stdout("c\ta\n\tx\n");
    }

    #[test]
    fn crlf_input_is_normalized() {
        line_tools()
            .arg("uniq")
            .write_stdin("a\r\na\r\n")
            .assert()
            .success()
            .stdout("a\n");
    }

    #[test]
    fn verbose_logs_to_stderr_only() {
        line_tools()
            .args(["--verbose", "sort"])
            .env_remove("RUST_LOG")
            .write_stdin("b\na\n")
            .assert()
            .success()
            .stdout("a\nb\n")
            .stderr(predicate::str::contains("lines out"));
    }

    #[test]
    fn legacy_input_warns_unless_quiet() {
        // "café crème brûlée" in windows-1252
        let latin1 = b"caf\xE9 cr\xE8me br\xFBl\xE9e\n".to_vec();

        line_tools()
            .args(["grep", "caf"])
            .env_remove("RUST_LOG")
            .write_stdin(latin1.clone())
            .assert()
            .success()
            .stderr(predicate::str::contains("WARN"));

        line_tools()
            .args(["--quiet", "grep", "caf"])
            .env_remove("RUST_LOG")
            .write_stdin(latin1)
            .assert()
            .success()
            .stdout(predicate::str::starts_with("caf"))
            .stderr("");
    }

    #[test]
    fn verbose_and_quiet_conflict() {
        line_tools()
            .args(["--verbose", "--quiet", "sort"])
            .write_stdin("a\n")
            .assert()
            .code(2);
    }
}
