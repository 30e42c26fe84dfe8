use super::hit_test::visible_row;
use super::{
    DragNDropError, DragNDropList, ListViewport, OverlayManager, PointerAction, PointerEvent,
    RowView,
};

impl<R: RowView + Clone, O: OverlayManager> DragNDropList<R, O> {
    /// Process one pointer event of the list.
    ///
    /// Events outside a drag are forwarded to [`ListViewport::default_pointer_event`]
    /// and its answer is returned. Once a pointer-down lands on a handle, every event
    /// up to and including the release is consumed (`Ok(true)`), so the list never
    /// sees the gesture as a tap or a scroll.
    ///
    /// # Errors
    /// [`DragNDropError::AdapterMissing`] if a drag starts or drops while no adapter
    /// is attached. A failed drop still tears the drag down completely.
    pub fn on_pointer_event<V>(
        &mut self,
        viewport: &mut V,
        event: &PointerEvent,
    ) -> Result<bool, DragNDropError>
    where
        V: ListViewport<Row = R>,
    {
        if event.action == PointerAction::Down
            && !self.session.active
            && self.session.enabled
            && self.is_drag_gesture(viewport, event.pos)
        {
            self.session.active = true;
        }

        if !self.session.active {
            return Ok(viewport.default_pointer_event(event));
        }

        match event.action {
            PointerAction::Down => self.on_armed_pointer_down(viewport, event)?,
            PointerAction::Move => self.track_move(viewport, 0.0, event.pos.y),
            PointerAction::Up | PointerAction::Cancel => {
                self.session.active = false;

                if self.session.is_lifted() {
                    let end_index = if event.action == PointerAction::Cancel
                        && !self.options.commit_on_cancel
                    {
                        None
                    } else {
                        drop_index_at(viewport, event)
                    };
                    self.stop_drag(viewport, end_index)?;
                }
            }
        }

        Ok(true)
    }

    fn on_armed_pointer_down<V>(
        &mut self,
        viewport: &mut V,
        event: &PointerEvent,
    ) -> Result<(), DragNDropError>
    where
        V: ListViewport<Row = R>,
    {
        if self.session.is_lifted() {
            // A second press while a row is already in the air.
            return Ok(());
        }

        // A press that resolves to no realized row leaves the session armed but inert.
        let Some(start_index) = viewport.point_to_index(event.pos) else {
            return Ok(());
        };
        let Some(row) = visible_row(viewport, start_index) else {
            self.debug_log_event(format!("start skipped index={start_index} (row not realized)"));
            return Ok(());
        };

        let pointer_offset = (event.pos.y - row.rect().top()) - event.screen_offset_y();

        self.start_drag(viewport, row, start_index, pointer_offset, event.pos.y)?;
        self.track_move(viewport, 0.0, event.pos.y);
        Ok(())
    }
}

/// The drop index under the release point, or `None` if it falls on a footer or on no item.
fn drop_index_at<V: ListViewport>(viewport: &V, event: &PointerEvent) -> Option<usize> {
    let index = viewport.point_to_index(event.pos)?;
    let real_items = viewport
        .item_count()
        .saturating_sub(viewport.footer_count());
    (index < real_items).then_some(index)
}
