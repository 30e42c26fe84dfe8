use super::{DragNDropError, DragNDropList, ListViewport, OverlayManager, RowView};

impl<R: RowView + Clone, O: OverlayManager> DragNDropList<R, O> {
    /// Drop the lifted row at `end_index`, or put it back where it was if `end_index` is `None`.
    ///
    /// Does nothing if no row is lifted. The overlay is always destroyed and the row
    /// revealed, even when the drop hook can't be delivered.
    pub(super) fn stop_drag<V>(
        &mut self,
        viewport: &mut V,
        end_index: Option<usize>,
    ) -> Result<(), DragNDropError>
    where
        V: ListViewport<Row = R>,
    {
        let Some(lifted) = self.session.take_lifted() else {
            return Ok(());
        };
        let start_index = lifted.start_index;
        let item_id = lifted.item_id;
        let mut row = lifted.row;
        let mut overlay = lifted.overlay;

        let mut result = Ok(());
        match end_index {
            Some(end_index) => {
                if let Some(adapter) = self.adapter.as_mut() {
                    if let Some(listener) = self.listener.as_mut() {
                        listener.on_item_drop(&row, start_index, end_index, item_id);
                    }
                    adapter.on_item_drop(&row, start_index, end_index, item_id);

                    log::debug!("drop: {start_index} -> {end_index} id={item_id:?}");
                    self.debug_log_event(format!(
                        "drop start={start_index} end={end_index} id={item_id:?}"
                    ));
                } else {
                    log::warn!(
                        "drop of item {start_index} at {end_index} lost: no drag-n-drop adapter attached"
                    );
                    self.debug_log_event(format!(
                        "drop lost start={start_index} end={end_index} (no adapter)"
                    ));
                    result = Err(DragNDropError::AdapterMissing {
                        hook: "on_item_drop",
                    });
                }
            }
            None => {
                log::debug!("drag cancelled: item {start_index} returns to its slot");
                self.debug_log_event(format!("cancel start={start_index}"));
            }
        }

        self.overlays.set_overlay_visible(&mut overlay, false);
        self.overlays.remove_overlay(overlay);

        row.clear_snapshot();
        row.set_visible(true);

        viewport.force_redraw_all();
        result
    }
}
