use super::MenuHost;
use std::cell::RefCell;
use std::collections::HashMap;

/// Minimal host for action tests: hands out configured overrides and
/// records message boxes and override queries.
#[derive(Default)]
pub struct RecordingHost {
    pub overrides: HashMap<String, Vec<String>>,
    pub messages: Vec<String>,
    pub argv_queries: RefCell<Vec<String>>,
}

impl MenuHost for RecordingHost {
    fn reset(&mut self) {}

    fn add_separator(&mut self) {}

    fn add_item(&mut self, _id: usize, _label: &str, _help: &str) -> bool {
        true
    }

    fn begin_submenu(&mut self, _id: usize, _label: &str, _help: &str) -> bool {
        true
    }

    fn end_submenu(&mut self) {}

    fn check_item(&mut self, _checked: bool) {}

    fn message_box(&mut self, text: &str) {
        self.messages.push(text.to_string());
    }

    fn platform_argv(&self, action: &str, _extra: Option<&str>) -> Option<Vec<String>> {
        self.argv_queries.borrow_mut().push(action.to_string());
        self.overrides.get(action).cloned()
    }
}
