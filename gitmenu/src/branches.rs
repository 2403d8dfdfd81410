use gitmenu_actions::exec::{self, ExecMode};
use std::path::Path;
use tracing::debug;

/// One entry of `git branch` output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Branch {
    pub name: String,
    pub current: bool,
}

/// Parses `git branch` output: one branch per line, a two-character marker
/// column in front of the name, `*` marking the checked-out branch.
pub fn parse_branches(output: &str) -> Vec<Branch> {
    output
        .lines()
        .map(|line| line.trim_end())
        .filter(|line| line.len() > 2)
        .map(|line| Branch {
            current: line.starts_with('*'),
            name: line[2..].to_string(),
        })
        .collect()
}

/// Lists local branches in `wd`, or None when the listing failed for any
/// reason. The caller builds no submenu in that case; the failure is not
/// surfaced further.
pub fn local_branches(wd: &Path) -> Option<Vec<Branch>> {
    match exec::run_git(wd, ExecMode::Wait, &["branch"]) {
        Ok(out) if out.success() => Some(parse_branches(&out.stdout)),
        Ok(out) => {
            debug!("branch listing exited with {}", out.code);
            None
        }
        Err(err) => {
            debug!("branch listing failed to launch: {err}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_marks_current() {
        let branches = parse_branches("  main\n* feature/menu\n  wip\n");
        assert_eq!(branches.len(), 3);
        assert_eq!(branches[0].name, "main");
        assert!(!branches[0].current);
        assert_eq!(branches[1].name, "feature/menu");
        assert!(branches[1].current);
        assert_eq!(branches[2].name, "wip");
    }

    #[test]
    fn test_parse_trims_line_endings() {
        let branches = parse_branches("* main\r\n");
        assert_eq!(branches.len(), 1);
        assert_eq!(branches[0].name, "main");
    }

    #[test]
    fn test_parse_skips_blank_lines() {
        assert!(parse_branches("\n\n").is_empty());
        assert!(parse_branches("").is_empty());
    }

    #[test]
    fn test_listing_failure_is_none() {
        assert_eq!(local_branches(Path::new("/no/such/gitmenu/dir")), None);
    }

    #[test]
    fn test_fresh_repository_lists_no_branches() {
        let git_ok = std::process::Command::new("git")
            .arg("--version")
            .stdout(std::process::Stdio::null())
            .stderr(std::process::Stdio::null())
            .status()
            .map(|s| s.success())
            .unwrap_or(false);
        if !git_ok {
            return;
        }

        let dir = tempfile::tempdir().unwrap();
        let status = std::process::Command::new("git")
            .args(["init", "-q"])
            .current_dir(dir.path())
            .status()
            .unwrap();
        assert!(status.success());

        assert_eq!(local_branches(dir.path()), Some(Vec::new()));
    }

    #[test]
    fn test_parse_detached_head_line() {
        let branches = parse_branches("* (HEAD detached at 1a2b3c4)\n  main\n");
        assert_eq!(branches[0].name, "(HEAD detached at 1a2b3c4)");
        assert!(branches[0].current);
    }
}
