use std::time::Duration;

use egui::{ColorImage, Pos2, Rect};

use super::types::{DragHandle, ItemId, PointerEvent, RegionId};

/// The virtualized list widget a [`super::DragNDropList`] drives.
///
/// Indices are adapter positions, including header and footer rows.
pub trait ListViewport {
    /// Handle to a realized row. Cloning must yield a handle to the same row.
    type Row: RowView + Clone;

    /// The item under `pos`, or `None` if the point hits no item.
    fn point_to_index(&self, pos: Pos2) -> Option<usize>;

    /// The realized row at `relative` positions below the first visible one.
    fn visible_child_at(&self, relative: usize) -> Option<Self::Row>;

    fn first_visible_index(&self) -> usize;

    /// Total item count, headers and footers included.
    fn item_count(&self) -> usize;

    /// Number of trailing footer rows that are not real items.
    fn footer_count(&self) -> usize;

    fn item_id_at(&self, index: usize) -> ItemId;

    /// The visible area of the list, in the coordinate space of [`PointerEvent::pos`].
    fn viewport_rect(&self) -> Rect;

    /// Scroll by `amount` points (negative is up), animated over `duration`.
    fn scroll_by(&mut self, amount: f32, duration: Duration);

    /// Rebuild every visible row from the adapter data.
    fn force_redraw_all(&mut self);

    /// Normal tap/scroll handling for events the drag controller doesn't claim.
    ///
    /// Returns `true` if the event was consumed.
    fn default_pointer_event(&mut self, event: &PointerEvent) -> bool;
}

/// A realized row of a [`ListViewport`].
pub trait RowView {
    /// Bounds of the row in viewport space.
    fn rect(&self) -> Rect;

    /// Bounds of a sub-region, relative to the row's top-left corner.
    fn find_region(&self, region: RegionId) -> Option<Rect>;

    /// Hide or reveal the row. A hidden row keeps its layout slot.
    fn set_visible(&mut self, visible: bool);

    /// Render the row's current contents into a bitmap.
    ///
    /// The returned image must be an independent copy: the row may be recycled
    /// while the drag is in flight.
    fn snapshot(&mut self) -> ColorImage;

    /// Drop any rendering cache kept alive by [`Self::snapshot`].
    fn clear_snapshot(&mut self);

    /// Request a repaint of just this row.
    fn invalidate(&mut self) {}
}

/// The row-data adapter. It owns the ordered data and performs the actual reorder.
pub trait DragNDropAdapter<R> {
    fn drag_handle(&self) -> DragHandle;

    /// A drag of the item at `position` has started.
    fn on_item_drag(&mut self, view: &R, position: usize, id: ItemId);

    /// The item dragged from `start_position` was dropped at `end_position`.
    ///
    /// The backing data must be reordered before this returns: the hidden row is
    /// revealed and the list redrawn right after.
    fn on_item_drop(&mut self, view: &R, start_position: usize, end_position: usize, id: ItemId);
}

/// Passive observer of drag start and drop.
pub trait DragNDropListener<R> {
    fn on_item_drag(&mut self, view: &R, position: usize, id: ItemId);

    fn on_item_drop(&mut self, view: &R, start_position: usize, end_position: usize, id: ItemId);
}

/// An adapter decorated with header and footer rows.
///
/// The drag hooks go straight to the wrapped adapter; header and footer rows
/// only exist on the viewport side.
#[derive(Debug)]
pub struct HeaderFooterAdapter<A> {
    inner: A,
    headers: usize,
    footers: usize,
}

impl<A> HeaderFooterAdapter<A> {
    pub fn new(inner: A, headers: usize, footers: usize) -> Self {
        Self {
            inner,
            headers,
            footers,
        }
    }

    pub fn header_count(&self) -> usize {
        self.headers
    }

    pub fn footer_count(&self) -> usize {
        self.footers
    }

    /// The innermost drag-capable adapter.
    pub fn inner(&self) -> &A {
        &self.inner
    }

    pub fn inner_mut(&mut self) -> &mut A {
        &mut self.inner
    }

    pub fn into_inner(self) -> A {
        self.inner
    }
}

impl<R, A: DragNDropAdapter<R>> DragNDropAdapter<R> for HeaderFooterAdapter<A> {
    fn drag_handle(&self) -> DragHandle {
        self.inner.drag_handle()
    }

    fn on_item_drag(&mut self, view: &R, position: usize, id: ItemId) {
        self.inner.on_item_drag(view, position, id);
    }

    fn on_item_drop(&mut self, view: &R, start_position: usize, end_position: usize, id: ItemId) {
        self.inner
            .on_item_drop(view, start_position, end_position, id);
    }
}
