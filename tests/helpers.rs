//! End-to-end tests for the msg, usage, cmd and fatal subcommands

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]


use common::*;

#[test]
fn test_msg_prints_info_line() {
    let output = run_scriptkit(&["msg", "Starting", "build"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "[*] Starting build\n");
}

#[test]
fn test_msg_without_tokens() {
    let output = run_scriptkit(&["msg"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "[*] \n");
}

#[test]
fn test_msg_keeps_token_spacing() {
    let output = run_scriptkit(&["msg", "two  spaces", "end"]);
    assert_eq!(stdout(&output), "[*] two  spaces end\n");
}

#[test]
fn test_usage_exits_with_one() {
    let output = run_scriptkit(&["usage", "script.sh", "<arg>"]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "Usage: script.sh <arg>\n");
}

#[test]
fn test_fatal_exits_with_one() {
    let output = run_scriptkit(&["fatal", "disk", "full"]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "[fatal] disk full\n");
    assert!(stderr(&output).is_empty());
}

#[test]
fn test_cmd_true_continues() {
    let output = run_scriptkit(&["cmd", "true"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "[cmd] true\n");
}

#[test]
fn test_cmd_false_exits_with_one() {
    let output = run_scriptkit(&["cmd", "false"]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "[cmd] false\n");
    assert!(stderr(&output).is_empty());
}

#[test]
fn test_cmd_propagates_exit_code() {
    let output = run_scriptkit(&["cmd", "sh", "-c", "exit 3"]);
    assert_eq!(output.status.code(), Some(3));
    assert_eq!(stdout(&output), "[cmd] sh -c exit 3\n");
}

#[test]
fn test_cmd_line_precedes_child_output() {
    let output = run_scriptkit(&["cmd", "echo", "hello"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "[cmd] echo hello\nhello\n");
}

#[test]
fn test_cmd_child_inherits_stderr() {
    let output = run_scriptkit(&["cmd", "sh", "-c", "echo oops >&2"]);
    assert!(output.status.success());
    assert_eq!(stderr(&output), "oops\n");
}

#[test]
fn test_cmd_unknown_program() {
    let output = run_scriptkit(&["cmd", "scriptkit-no-such-program", "arg"]);
    assert_eq!(output.status.code(), Some(127));
    assert_eq!(stdout(&output), "[cmd] scriptkit-no-such-program arg\n");
    assert!(stderr(&output).contains("scriptkit-no-such-program: command not found"));
}

#[test]
fn test_cmd_requires_program() {
    let output = run_scriptkit(&["cmd"]);
    assert!(!output.status.success());
    assert!(stdout(&output).is_empty());
}

#[test]
fn test_msg_twice_gives_identical_lines() {
    let temp_dir = create_temp_dir();
    let output = run_shell_script(
        temp_dir.path(),
        r#""$SK" msg again
"$SK" msg again
"#,
    );
    assert!(output.status.success());
    assert_eq!(stdout(&output), "[*] again\n[*] again\n");
}

#[test]
fn test_script_aborts_on_failing_cmd() {
    let temp_dir = create_temp_dir();
    let output = run_shell_script(
        temp_dir.path(),
        r#"set -e
"$SK" msg before
"$SK" cmd sh -c 'exit 4'
"$SK" msg after
"#,
    );
    assert_eq!(output.status.code(), Some(4));
    assert_eq!(stdout(&output), "[*] before\n[cmd] sh -c exit 4\n");
}

#[test]
fn test_script_continues_after_successful_cmd() {
    let temp_dir = create_temp_dir();
    let output = run_shell_script(
        temp_dir.path(),
        r#"set -e
"$SK" cmd touch created
"$SK" msg done
"#,
    );
    assert!(output.status.success());
    assert_eq!(stdout(&output), "[cmd] touch created\n[*] done\n");
    assert!(temp_dir.path().join("created").exists());
}

#[test]
fn test_script_usage_check() {
    let temp_dir = create_temp_dir();
    let output = run_shell_script(
        temp_dir.path(),
        r#"set -e
[ $# -eq 1 ] || "$SK" usage script.sh '<arg>'
"$SK" msg unreachable
"#,
    );
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "Usage: script.sh <arg>\n");
}

#[cfg(unix)]
#[test]
fn test_cmd_non_executable_script() {
    use std::os::unix::fs::PermissionsExt;

    let temp_dir = create_temp_dir();
    let script = temp_dir.path().join("noexec.sh");
    std::fs::write(&script, "#!/bin/sh\necho ran\n").unwrap();
    std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o644)).unwrap();

    let output = run_shell_script(
        temp_dir.path(),
        r#""$SK" cmd ./noexec.sh
"#,
    );
    assert_eq!(output.status.code(), Some(126));
    assert_eq!(stdout(&output), "[cmd] ./noexec.sh\n");
    let stderr = stderr(&output);
    assert!(stderr.contains("./noexec.sh: failed to start"));
    assert!(!stderr.contains("command not found"));
}

#[cfg(unix)]
#[test]
fn test_cmd_directory() {
    let temp_dir = create_temp_dir();
    let dir = temp_dir.path().to_string_lossy().to_string();
    let output = run_scriptkit(&["cmd", &dir]);
    assert_eq!(output.status.code(), Some(126));
    assert!(stderr(&output).contains("failed to start"));
}

#[cfg(target_os = "linux")]
#[test]
fn test_cmd_child_sees_name_as_typed() {
    let output = run_scriptkit(&["cmd", "sh", "-c", "head -c 2 /proc/$$/cmdline; echo"]);
    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "[cmd] sh -c head -c 2 /proc/$$/cmdline; echo\nsh\n"
    );
}
