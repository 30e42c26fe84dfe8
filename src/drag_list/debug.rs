use itertools::Itertools as _;

use super::{DragNDropList, OverlayManager};

impl<R, O: OverlayManager> DragNDropList<R, O> {
    pub(super) fn debug_log_event(&mut self, message: impl Into<String>) {
        self.debug_event_counter = self.debug_event_counter.wrapping_add(1);
        if !self.options.debug_event_log {
            return;
        }
        self.push_debug_log_line(message.into());
    }

    fn push_debug_log_line(&mut self, message: String) {
        let cap = self.options.debug_event_log_capacity.clamp(1, 10_000);
        while self.debug_log.len() >= cap {
            self.debug_log.pop_front();
        }
        self.debug_log
            .push_back(format!("[event {}] {}", self.debug_event_counter, message));
    }

    /// Lines recorded while [`super::DragNDropOptions::debug_event_log`] is on, oldest first.
    pub fn debug_log_lines(&self) -> impl Iterator<Item = &str> + '_ {
        self.debug_log.iter().map(String::as_str)
    }

    /// The debug log as one newline-separated string, handy for copy-paste.
    pub fn debug_log_text(&self) -> String {
        self.debug_log.iter().join("\n")
    }

    pub fn debug_log_clear(&mut self) {
        self.debug_log.clear();
    }
}
