use egui::{Pos2, Rect};

use super::{DragNDropList, DragNDropOptions, ListViewport, OverlayManager, RowView};

/// Auto-scroll request for a pointer at `pointer_y` while dragging.
///
/// The top and bottom bands are each `auto_scroll_band_fraction` of the viewport's
/// height. Inside a band the distance ramps linearly from zero at the band's inner
/// edge to `auto_scroll_max_distance` at the viewport's edge, and stays at the
/// maximum beyond it. Negative is up. Returns `None` when no scroll should be issued.
pub fn auto_scroll_distance(
    viewport: Rect,
    pointer_y: f32,
    options: &DragNDropOptions,
) -> Option<f32> {
    let band = viewport.height() * options.auto_scroll_band_fraction;
    if band <= 0.0 {
        return None;
    }

    let (depth, direction) = if pointer_y < viewport.top() + band {
        (viewport.top() + band - pointer_y, -1.0)
    } else if pointer_y > viewport.bottom() - band {
        (pointer_y - (viewport.bottom() - band), 1.0)
    } else {
        return None;
    };

    let distance = (depth.min(band) * options.auto_scroll_max_distance / band).trunc();
    (distance > 0.0).then_some(direction * distance)
}

impl<R: RowView + Clone, O: OverlayManager> DragNDropList<R, O> {
    /// Move the overlay to follow the pointer and auto-scroll near the edges.
    pub(super) fn track_move<V>(&mut self, viewport: &mut V, x: f32, y: f32)
    where
        V: ListViewport<Row = R>,
    {
        let Some(lifted) = self.session.lifted.as_mut() else {
            return;
        };

        self.overlays
            .move_overlay(&mut lifted.overlay, Pos2::new(x, y - lifted.pointer_offset));

        if let Some(distance) = auto_scroll_distance(viewport.viewport_rect(), y, &self.options) {
            log::trace!("auto-scroll by {distance} at y={y:.1}");
            viewport.scroll_by(distance, self.options.auto_scroll_duration());
        }
    }
}
