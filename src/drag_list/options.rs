use std::time::Duration;

/// Options for [`super::DragNDropList`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DragNDropOptions {
    /// Height of the top and bottom auto-scroll bands, as a fraction of the viewport height.
    pub auto_scroll_band_fraction: f32,

    /// Scroll distance (in points) requested per move event when the pointer is at the
    /// outer edge of a band. The distance ramps linearly down to zero at the band's inner edge.
    pub auto_scroll_max_distance: f32,

    /// Duration of each auto-scroll request.
    ///
    /// Auto-scroll is driven by move events, so this should be short: a stalled
    /// pointer stops scrolling once the last request finishes.
    pub auto_scroll_duration_ms: u64,

    /// If true, a pointer-cancel resolves a drop index from its position, exactly like a
    /// pointer-up. If false, a cancel always returns the row to where it started.
    pub commit_on_cancel: bool,

    /// If true, record drag transitions in a small ring buffer
    /// (see [`super::DragNDropList::debug_log_text`]).
    pub debug_event_log: bool,

    /// Max number of lines kept by the debug event log.
    pub debug_event_log_capacity: usize,
}

impl Default for DragNDropOptions {
    fn default() -> Self {
        Self {
            auto_scroll_band_fraction: 1.0 / 3.0,
            auto_scroll_max_distance: 100.0,
            auto_scroll_duration_ms: 7,
            commit_on_cancel: true,
            debug_event_log: false,
            debug_event_log_capacity: 256,
        }
    }
}

impl DragNDropOptions {
    pub fn auto_scroll_duration(&self) -> Duration {
        Duration::from_millis(self.auto_scroll_duration_ms)
    }
}
