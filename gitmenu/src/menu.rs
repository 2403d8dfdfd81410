use crate::branches::{self, Branch};
use crate::mask;
use gitmenu_actions::workdir::wd_from_context;
use gitmenu_actions::{MenuHost, get_action};
use gitmenu_types::{Context, ExitStatus, GitMenuError, GitMenuResult, MenuFlags};
use tracing::debug;

/// How a menu entry materializes in the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Separator,
    Item,
    BranchSubmenu,
}

/// One row of the static menu table. Labels use `&` accelerator markers;
/// the host decides how to render them.
pub struct MenuEntry {
    pub flags: MenuFlags,
    pub label: &'static str,
    pub help: &'static str,
    pub kind: EntryKind,
    pub action: &'static str,
}

/// The menu, fixed at compile time. Table order is menu order; entries are
/// shown when the per-selection mask contains their flags.
pub const MENU: &[MenuEntry] = &[
    MenuEntry {
        flags: MenuFlags::ALWAYS,
        label: "",
        help: "",
        kind: EntryKind::Separator,
        action: "",
    },
    MenuEntry {
        flags: MenuFlags::REPO,
        label: "Git &Add all files now",
        help: "Add all files from this folder now",
        kind: EntryKind::Item,
        action: "addall",
    },
    MenuEntry {
        flags: MenuFlags::REPO,
        label: "Git &Commit Tool",
        help: "Launch the git commit tool in the local or chosen directory",
        kind: EntryKind::Item,
        action: "citool",
    },
    MenuEntry {
        flags: MenuFlags::TRACKED,
        label: "Git &History",
        help: "Show git history of the chosen file or directory",
        kind: EntryKind::Item,
        action: "history",
    },
    MenuEntry {
        flags: MenuFlags::TRACKED.union(MenuFlags::FILE),
        label: "Git &Blame",
        help: "Start a blame viewer on the specified file",
        kind: EntryKind::Item,
        action: "blame",
    },
    MenuEntry {
        flags: MenuFlags::REPO,
        label: "Git &Gui",
        help: "Launch the git gui in the local or chosen directory",
        kind: EntryKind::Item,
        action: "gui",
    },
    MenuEntry {
        flags: MenuFlags::REPO,
        label: "Git Bra&nch",
        help: "Checkout a branch",
        kind: EntryKind::BranchSubmenu,
        action: "checkout",
    },
    MenuEntry {
        flags: MenuFlags::NOREPO,
        label: "Git I&nit Here",
        help: "Initialize a git repository in the local directory",
        kind: EntryKind::Item,
        action: "init",
    },
    MenuEntry {
        flags: MenuFlags::NOREPO.union(MenuFlags::DIR),
        label: "Git &Gui",
        help: "Launch the git gui in the local or chosen directory",
        kind: EntryKind::Item,
        action: "gui",
    },
    MenuEntry {
        flags: MenuFlags::ALWAYS,
        label: "Git Ba&sh",
        help: "Start a git shell in the local or chosen directory",
        kind: EntryKind::Item,
        action: "shell",
    },
    MenuEntry {
        flags: MenuFlags::ALWAYS,
        label: "",
        help: "",
        kind: EntryKind::Separator,
        action: "",
    },
];

/// A built item the host can call back on: maps the host-side id to the
/// action and its variable arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveItem {
    pub id: usize,
    pub action: &'static str,
    pub argv: Vec<String>,
}

/// Builds the full menu for a selection: resets the host, classifies the
/// selection, and walks the table. Returns the id-to-action mapping for the
/// items that were created.
pub fn build_menu(ctx: &Context, host: &mut dyn MenuHost) -> Vec<ActiveItem> {
    host.reset();
    let mask = mask::menu_mask(ctx);
    debug!("menu mask: {}", mask::describe(mask));
    build_menu_with_mask(ctx, mask, host)
}

/// Table walk against a precomputed mask. Split out so composition is
/// testable without running git.
pub fn build_menu_with_mask(
    ctx: &Context,
    mask: MenuFlags,
    host: &mut dyn MenuHost,
) -> Vec<ActiveItem> {
    let mut active = Vec::new();
    let mut next_id = 0usize;

    for entry in MENU {
        if !mask.eligible(entry.flags) {
            continue;
        }
        match entry.kind {
            EntryKind::Separator => host.add_separator(),
            EntryKind::Item => {
                let id = next_id;
                next_id += 1;
                if host.add_item(id, entry.label, entry.help) {
                    active.push(ActiveItem {
                        id,
                        action: entry.action,
                        argv: Vec::new(),
                    });
                }
            }
            EntryKind::BranchSubmenu => {
                let wd = wd_from_context(ctx);
                // No listing, no submenu; the failure stays invisible.
                let Some(branches) = branches::local_branches(&wd) else {
                    continue;
                };
                fill_branch_submenu(entry, &branches, host, &mut next_id, &mut active);
            }
        }
    }

    active
}

/// Populates the branch submenu from an already-parsed listing. The current
/// branch is rendered checked. When the host fails to create an item there
/// is no point trying the rest.
fn fill_branch_submenu(
    entry: &MenuEntry,
    branches: &[Branch],
    host: &mut dyn MenuHost,
    next_id: &mut usize,
    active: &mut Vec<ActiveItem>,
) {
    let id = *next_id;
    *next_id += 1;
    if !host.begin_submenu(id, entry.label, entry.help) {
        return;
    }

    for branch in branches {
        let id = *next_id;
        *next_id += 1;
        if !host.add_item(id, &branch.name, &branch.name) {
            break;
        }
        host.check_item(branch.current);
        active.push(ActiveItem {
            id,
            action: entry.action,
            argv: vec![branch.name.clone()],
        });
    }

    host.end_submenu();
}

/// Dispatches one action by registry name.
pub fn run_action(
    ctx: &Context,
    name: &str,
    argv: Vec<String>,
    host: &mut dyn MenuHost,
) -> GitMenuResult<ExitStatus> {
    let action =
        get_action(name).ok_or_else(|| GitMenuError::UnknownAction(name.to_string()))?;
    Ok(action(ctx, argv, host))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mask::{QueryOutcome, compose_mask};

    /// Records host calls as a flat transcript.
    #[derive(Default)]
    struct RecordingHost {
        calls: Vec<String>,
        fail_items_after: Option<usize>,
        items_built: usize,
    }

    impl MenuHost for RecordingHost {
        fn reset(&mut self) {
            self.calls.push("reset".to_string());
        }

        fn add_separator(&mut self) {
            self.calls.push("separator".to_string());
        }

        fn add_item(&mut self, _id: usize, label: &str, _help: &str) -> bool {
            if let Some(limit) = self.fail_items_after {
                if self.items_built >= limit {
                    return false;
                }
            }
            self.items_built += 1;
            self.calls.push(format!("item:{label}"));
            true
        }

        fn begin_submenu(&mut self, _id: usize, label: &str, _help: &str) -> bool {
            self.calls.push(format!("submenu:{label}"));
            true
        }

        fn end_submenu(&mut self) {
            self.calls.push("end_submenu".to_string());
        }

        fn check_item(&mut self, checked: bool) {
            if checked {
                self.calls.push("checked".to_string());
            }
        }

        fn message_box(&mut self, text: &str) {
            self.calls.push(format!("mbox:{text}"));
        }

        fn platform_argv(&self, _action: &str, _extra: Option<&str>) -> Option<Vec<String>> {
            None
        }
    }

    fn ctx() -> Context {
        // Nonexistent path: any attempted branch listing fails to launch
        // and the submenu is skipped.
        Context::with_kind("/no/such/gitmenu/work", true)
    }

    #[test]
    fn test_no_repo_directory_menu() {
        let mask = compose_mask(true, QueryOutcome::Failure, None);
        let mut host = RecordingHost::default();
        let active = build_menu_with_mask(&ctx(), mask, &mut host);

        assert_eq!(
            host.calls,
            vec![
                "separator",
                "item:Git I&nit Here",
                "item:Git &Gui",
                "item:Git Ba&sh",
                "separator",
            ]
        );
        let actions: Vec<&str> = active.iter().map(|a| a.action).collect();
        assert_eq!(actions, vec!["init", "gui", "shell"]);
    }

    #[test]
    fn test_tracked_file_menu_has_blame() {
        let mask = compose_mask(false, QueryOutcome::Success, Some(QueryOutcome::Success));
        let mut host = RecordingHost::default();
        let active = build_menu_with_mask(
            &Context::with_kind("/no/such/gitmenu/work/readme.txt", false),
            mask,
            &mut host,
        );

        let actions: Vec<&str> = active.iter().map(|a| a.action).collect();
        // Branch submenu is skipped: the working directory does not exist,
        // the listing fails to launch and the failure stays invisible.
        assert_eq!(
            actions,
            vec!["addall", "citool", "history", "blame", "gui", "shell"]
        );
    }

    #[test]
    fn test_untracked_directory_menu_has_no_history() {
        let mask = compose_mask(true, QueryOutcome::Success, Some(QueryOutcome::Failure));
        let mut host = RecordingHost::default();
        let active = build_menu_with_mask(&ctx(), mask, &mut host);

        let actions: Vec<&str> = active.iter().map(|a| a.action).collect();
        assert!(!actions.contains(&"history"));
        assert!(!actions.contains(&"blame"));
        assert!(actions.contains(&"addall"));
    }

    #[test]
    fn test_unavailable_builds_empty_menu() {
        let mut host = RecordingHost::default();
        let active = build_menu_with_mask(&ctx(), MenuFlags::UNAVAILABLE, &mut host);
        assert!(active.is_empty());
        assert!(host.calls.is_empty());
    }

    #[test]
    fn test_branch_submenu_items_and_check_mark() {
        let entry = MENU
            .iter()
            .find(|e| e.kind == EntryKind::BranchSubmenu)
            .unwrap();
        let branches = vec![
            Branch {
                name: "main".to_string(),
                current: false,
            },
            Branch {
                name: "feature/menu".to_string(),
                current: true,
            },
        ];
        let mut host = RecordingHost::default();
        let mut next_id = 0;
        let mut active = Vec::new();
        fill_branch_submenu(entry, &branches, &mut host, &mut next_id, &mut active);

        assert_eq!(
            host.calls,
            vec![
                "submenu:Git Bra&nch",
                "item:main",
                "item:feature/menu",
                "checked",
                "end_submenu",
            ]
        );
        assert_eq!(active.len(), 2);
        assert_eq!(active[1].action, "checkout");
        assert_eq!(active[1].argv, vec!["feature/menu".to_string()]);
    }

    #[test]
    fn test_branch_submenu_stops_on_item_failure() {
        let entry = MENU
            .iter()
            .find(|e| e.kind == EntryKind::BranchSubmenu)
            .unwrap();
        let branches = vec![
            Branch {
                name: "main".to_string(),
                current: true,
            },
            Branch {
                name: "wip".to_string(),
                current: false,
            },
        ];
        let mut host = RecordingHost {
            fail_items_after: Some(1),
            ..Default::default()
        };
        let mut next_id = 0;
        let mut active = Vec::new();
        fill_branch_submenu(entry, &branches, &mut host, &mut next_id, &mut active);

        // The submenu is still closed after the failed item.
        assert_eq!(active.len(), 1);
        assert_eq!(host.calls.last().unwrap(), "end_submenu");
    }

    #[test]
    fn test_run_action_unknown_name() {
        let mut host = RecordingHost::default();
        let err = run_action(&ctx(), "rebase", Vec::new(), &mut host).unwrap_err();
        assert!(matches!(err, GitMenuError::UnknownAction(_)));
    }

    #[test]
    fn test_table_actions_are_registered() {
        for entry in MENU {
            if entry.kind == EntryKind::Separator {
                continue;
            }
            assert!(
                gitmenu_actions::get_action(entry.action).is_some(),
                "unregistered action {}",
                entry.action
            );
        }
    }
}
