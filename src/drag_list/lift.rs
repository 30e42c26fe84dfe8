use egui::Pos2;

use super::session::LiftedRow;
use super::surface::image_size;
use super::{
    DragNDropError, DragNDropList, ListViewport, OverlayManager, OverlayParams, RowView,
};

impl<R: RowView + Clone, O: OverlayManager> DragNDropList<R, O> {
    /// Lift `row` (showing item `start_index`) into a floating overlay.
    ///
    /// `pointer_y` is the viewport-space y of the press.
    pub(super) fn start_drag<V>(
        &mut self,
        viewport: &mut V,
        mut row: R,
        start_index: usize,
        pointer_offset: f32,
        pointer_y: f32,
    ) -> Result<(), DragNDropError>
    where
        V: ListViewport<Row = R>,
    {
        let Some(adapter) = self.adapter.as_mut() else {
            log::warn!("drag of item {start_index} refused: no drag-n-drop adapter attached");
            self.session.active = false;
            self.debug_log_event(format!("start refused index={start_index} (no adapter)"));
            return Err(DragNDropError::AdapterMissing {
                hook: "on_item_drag",
            });
        };

        let item_id = viewport.item_id_at(start_index);

        if let Some(listener) = self.listener.as_mut() {
            listener.on_item_drag(&row, start_index, item_id);
        }
        adapter.on_item_drag(&row, start_index, item_id);

        let snapshot = row.snapshot();
        let params = OverlayParams::drag_snapshot(
            Pos2::new(0.0, pointer_y - pointer_offset),
            image_size(&snapshot),
        );
        let overlay = self.overlays.add_overlay(snapshot, &params);

        row.set_visible(false);
        row.invalidate();

        self.session.lift(LiftedRow {
            start_index,
            item_id,
            row,
            overlay,
            pointer_offset,
        });

        log::debug!("drag start: index={start_index} id={item_id:?} offset={pointer_offset:.1}");
        self.debug_log_event(format!(
            "start index={start_index} id={item_id:?} overlay=({:.1},{:.1}) size=({:.0},{:.0})",
            params.pos.x, params.pos.y, params.size.x, params.size.y
        ));

        viewport.force_redraw_all();
        Ok(())
    }
}
