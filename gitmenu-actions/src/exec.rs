use gitmenu_types::{GitMenuError, GitMenuResult};
use std::path::Path;
use std::process::{Command, Stdio};
use tracing::debug;

/// How a subprocess is attached to the host session.
///
/// Everything is synchronous: `Wait` blocks until the process exits, the
/// other two modes block only for the launch itself. There are no timeouts
/// and no cancellation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecMode {
    /// Detached from the session, all stdio suppressed. Used for GUI-style
    /// tools that open their own window.
    Hidden,
    /// Inherits the session stdio. Used for launching an interactive shell.
    Normal,
    /// Run to completion, capturing stdout and stderr.
    Wait,
}

/// Captured result of a subprocess run.
///
/// For `Hidden` and `Normal` launches only `code` is meaningful (always 0,
/// the process was not waited for). A non-zero `code` is data, not an error:
/// status queries use it as a boolean signal.
#[derive(Debug, Clone, Default)]
pub struct GitOutput {
    pub code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl GitOutput {
    pub fn success(&self) -> bool {
        self.code == 0
    }
}

/// Runs `git` with the given subcommand arguments in `wd`.
pub fn run_git(wd: &Path, mode: ExecMode, args: &[&str]) -> GitMenuResult<GitOutput> {
    let mut argv: Vec<String> = Vec::with_capacity(args.len() + 1);
    argv.push("git".to_string());
    argv.extend(args.iter().map(|a| a.to_string()));
    run_argv(wd, mode, &argv)
}

/// Runs a caller-assembled argument vector in `wd`. Used by actions whose
/// platform or config override replaced the generic git command line.
///
/// A launch failure is an `Err`; a non-zero exit in `Wait` mode is an `Ok`
/// carrying the code.
pub fn run_argv(wd: &Path, mode: ExecMode, argv: &[String]) -> GitMenuResult<GitOutput> {
    let (program, args) = argv
        .split_first()
        .ok_or_else(|| GitMenuError::Config("empty argument vector".to_string()))?;

    debug!("exec {:?} in {:?} ({:?})", argv, wd, mode);

    let mut cmd = Command::new(program);
    cmd.args(args).current_dir(wd);

    match mode {
        ExecMode::Wait => {
            let output = cmd
                .stdin(Stdio::null())
                .output()
                .map_err(|source| GitMenuError::Launch {
                    program: program.clone(),
                    source,
                })?;
            Ok(GitOutput {
                code: output.status.code().unwrap_or(-1),
                stdout: String::from_utf8_lossy(&output.stdout).to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            })
        }
        ExecMode::Hidden => {
            cmd.stdin(Stdio::null())
                .stdout(Stdio::null())
                .stderr(Stdio::null())
                .spawn()
                .map_err(|source| GitMenuError::Launch {
                    program: program.clone(),
                    source,
                })?;
            Ok(GitOutput::default())
        }
        ExecMode::Normal => {
            cmd.spawn().map_err(|source| GitMenuError::Launch {
                program: program.clone(),
                source,
            })?;
            Ok(GitOutput::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn cwd() -> PathBuf {
        std::env::current_dir().unwrap()
    }

    #[test]
    fn test_wait_captures_stdout() {
        let out = run_argv(
            &cwd(),
            ExecMode::Wait,
            &["sh".to_string(), "-c".to_string(), "echo hello".to_string()],
        )
        .unwrap();
        assert!(out.success());
        assert_eq!(out.stdout.trim(), "hello");
    }

    #[test]
    fn test_wait_nonzero_exit_is_data() {
        let out = run_argv(
            &cwd(),
            ExecMode::Wait,
            &["sh".to_string(), "-c".to_string(), "exit 3".to_string()],
        )
        .unwrap();
        assert!(!out.success());
        assert_eq!(out.code, 3);
    }

    #[test]
    fn test_launch_failure_is_error() {
        let err = run_argv(
            &cwd(),
            ExecMode::Wait,
            &["no-such-program-gitmenu".to_string()],
        )
        .unwrap_err();
        match err {
            GitMenuError::Launch { program, .. } => {
                assert_eq!(program, "no-such-program-gitmenu")
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_empty_argv_is_config_error() {
        let err = run_argv(&cwd(), ExecMode::Wait, &[]).unwrap_err();
        assert!(matches!(err, GitMenuError::Config(_)));
    }
}
