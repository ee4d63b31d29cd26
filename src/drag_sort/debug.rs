use itertools::Itertools as _;

use super::DragSort;

impl DragSort {
    pub(super) fn debug_log_event(&mut self, message: impl Into<String>) {
        if !self.options.debug_event_log {
            return;
        }
        let cap = self.options.debug_event_log_capacity.clamp(1, 10_000);
        while self.debug_log.len() >= cap {
            self.debug_log.pop_front();
        }
        self.debug_log
            .push_back(format!("[tick {}] {}", self.tick, message.into()));
    }

    /// Lines recorded while [`super::DragSortOptions::debug_event_log`] is on, oldest first.
    pub fn debug_log(&self) -> impl Iterator<Item = &str> + '_ {
        self.debug_log.iter().map(String::as_str)
    }

    pub fn debug_log_text(&self) -> String {
        self.debug_log.iter().join("\n")
    }

    pub fn clear_debug_log(&mut self) {
        self.debug_log.clear();
    }
}
