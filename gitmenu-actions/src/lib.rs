use gitmenu_types::{Context, ExitStatus};
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::sync::Mutex;

pub mod exec;
pub mod workdir;

#[cfg(test)]
pub(crate) mod testutil;

// Menu action modules
mod addall;
mod blame;
pub mod checkout;
mod citool;
mod gui;
mod history;
mod init;
mod shell;

/// Trait that provides an interface for menu actions to interact with the
/// host shell. The host owns the menu widgets and the user-facing dialogs;
/// actions talk to it through this seam so they stay decoupled from any
/// concrete menu framework.
pub trait MenuHost {
    /// Drops any menu state left over from a previous menu-open event.
    fn reset(&mut self);

    /// Adds a separator line to the menu.
    fn add_separator(&mut self);

    /// Adds a plain menu item. Returns false when the host failed to create
    /// the widget.
    fn add_item(&mut self, id: usize, label: &str, help: &str) -> bool;

    /// Opens a submenu under an item. Returns false when the host failed to
    /// create the widget; `end_submenu` must not be called in that case.
    fn begin_submenu(&mut self, id: usize, label: &str, help: &str) -> bool;

    /// Closes the submenu opened by the last successful `begin_submenu`.
    fn end_submenu(&mut self);

    /// Marks the most recently added item with a check mark.
    fn check_item(&mut self, checked: bool);

    /// Shows a message dialog to the user.
    fn message_box(&mut self, text: &str);

    /// Platform-specific argument vector override for an action, or None to
    /// use the generic fallback. `extra` carries the action's variable part
    /// (file name, branch name).
    fn platform_argv(&self, action: &str, extra: Option<&str>) -> Option<Vec<String>>;
}

/// Type alias for menu action function signature.
/// `argv` carries the variable part of the invocation, e.g. the branch name
/// for checkout; most actions ignore it.
pub type MenuAction = fn(ctx: &Context, argv: Vec<String>, host: &mut dyn MenuHost) -> ExitStatus;

/// Global registry of all menu actions, keyed by action name.
pub static MENU_ACTION: Lazy<Mutex<HashMap<&str, MenuAction>>> = Lazy::new(|| {
    let mut actions = HashMap::new();

    // Repository-level actions
    actions.insert("addall", addall::command as MenuAction);
    actions.insert("citool", citool::command as MenuAction);
    actions.insert("gui", gui::command as MenuAction);
    actions.insert("init", init::command as MenuAction);

    // Selection-scoped actions
    actions.insert("history", history::command as MenuAction);
    actions.insert("blame", blame::command as MenuAction);

    // Branch handling
    actions.insert("checkout", checkout::command as MenuAction);

    // Shell launch
    actions.insert("shell", shell::command as MenuAction);

    Mutex::new(actions)
});

/// Retrieves a menu action function by name.
/// Returns None if the action is not registered.
pub fn get_action(name: &str) -> Option<MenuAction> {
    if let Ok(actions) = MENU_ACTION.lock() {
        actions.get(name).copied()
    } else {
        None
    }
}

/// Action names with their descriptions, for help output.
pub fn descriptions() -> Vec<(&'static str, &'static str)> {
    vec![
        ("addall", addall::description()),
        ("citool", citool::description()),
        ("history", history::description()),
        ("blame", blame::description()),
        ("gui", gui::description()),
        ("checkout", checkout::description()),
        ("init", init::description()),
        ("shell", shell::description()),
    ]
}
