use crate::config::Config;
use gitmenu_actions::MenuHost;

/// Terminal-backed host: collects the menu as indented text lines, shows
/// message boxes on stderr, and sources argument overrides from the config
/// file. Stands in for the proprietary shell so the menu is exercisable
/// from a terminal.
pub struct TermHost {
    config: Config,
    wd: String,
    lines: Vec<String>,
    depth: usize,
}

impl TermHost {
    pub fn new(config: Config, wd: impl Into<String>) -> Self {
        TermHost {
            config,
            wd: wd.into(),
            lines: Vec::new(),
            depth: 0,
        }
    }

    pub fn render(&self) -> String {
        self.lines.join("\n")
    }

    fn indent(&self) -> String {
        "  ".repeat(self.depth)
    }
}

impl MenuHost for TermHost {
    fn reset(&mut self) {
        self.lines.clear();
        self.depth = 0;
    }

    fn add_separator(&mut self) {
        self.lines.push(format!("{}--------", self.indent()));
    }

    fn add_item(&mut self, id: usize, label: &str, _help: &str) -> bool {
        // Accelerator markers mean nothing in a terminal listing.
        let label = label.replace('&', "");
        self.lines.push(format!("{}[{id}] {label}", self.indent()));
        true
    }

    fn begin_submenu(&mut self, _id: usize, label: &str, _help: &str) -> bool {
        let label = label.replace('&', "");
        self.lines.push(format!("{}{label} >", self.indent()));
        self.depth += 1;
        true
    }

    fn end_submenu(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    fn check_item(&mut self, checked: bool) {
        if checked {
            if let Some(last) = self.lines.last_mut() {
                last.push_str(" *");
            }
        }
    }

    fn message_box(&mut self, text: &str) {
        eprintln!("{text}");
    }

    fn platform_argv(&self, action: &str, extra: Option<&str>) -> Option<Vec<String>> {
        let extra = extra.unwrap_or("");
        self.config.argv_for(
            action,
            &[("wd", self.wd.as_str()), ("name", extra), ("branch", extra)],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn host() -> TermHost {
        let config: Config = toml::from_str(
            r#"
            [overrides]
            shell = ["bash", "-c", "cd {wd} && exec bash"]
            "#,
        )
        .unwrap();
        TermHost::new(config, "/work")
    }

    #[test]
    fn test_renders_nested_menu() {
        let mut h = host();
        h.add_separator();
        h.add_item(0, "Git &Gui", "");
        h.begin_submenu(1, "Git Bra&nch", "");
        h.add_item(2, "main", "main");
        h.check_item(true);
        h.end_submenu();
        h.add_item(3, "Git Ba&sh", "");

        assert_eq!(
            h.render(),
            "--------\n[0] Git Gui\nGit Branch >\n  [2] main *\n[3] Git Bash"
        );
    }

    #[test]
    fn test_reset_clears_state() {
        let mut h = host();
        h.add_item(0, "Git &Gui", "");
        h.reset();
        assert_eq!(h.render(), "");
    }

    #[test]
    fn test_platform_argv_expands_wd() {
        let h = host();
        let argv = h.platform_argv("shell", Some("/work")).unwrap();
        assert_eq!(argv, vec!["bash", "-c", "cd /work && exec bash"]);
        assert!(h.platform_argv("gui", None).is_none());
    }
}
