use std::collections::VecDeque;

mod contract;
mod debug;
mod dispatch;
mod egui_host;
mod error;
mod lift;
mod options;
mod release;
mod session;
mod surface;
mod track;
mod types;

#[cfg(test)]
mod test_support;

pub use contract::{DragNDropAdapter, DragNDropListener, HeaderFooterAdapter, ListViewport, RowView};
pub use egui_host::{EguiOverlayHandle, EguiOverlays, EguiPointerTranslator};
pub use error::DragNDropError;
pub use options::DragNDropOptions;
pub use surface::{OverlayManager, OverlayParams};
pub use track::auto_scroll_distance;
pub use types::{DragHandle, ItemId, PointerAction, PointerEvent, RegionId};

use session::Session;

/// Drag-to-reorder controller for a vertically scrolling list.
///
/// Feed every pointer event of the list through [`Self::on_pointer_event`].
/// A press on a row's drag handle lifts that row into a floating overlay that
/// follows the pointer, the list auto-scrolls while the pointer is near its top
/// or bottom edge, and on release the adapter is asked to move the item.
///
/// `R` is the viewport's row handle ([`ListViewport::Row`]).
pub struct DragNDropList<R, O: OverlayManager> {
    pub options: DragNDropOptions,

    overlays: O,
    adapter: Option<Box<dyn DragNDropAdapter<R>>>,
    listener: Option<Box<dyn DragNDropListener<R>>>,
    session: Session<R, O::Surface>,

    debug_log: VecDeque<String>,
    debug_event_counter: u64,
}

impl<R, O> std::fmt::Debug for DragNDropList<R, O>
where
    R: std::fmt::Debug,
    O: OverlayManager + std::fmt::Debug,
    O::Surface: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DragNDropList")
            .field("options", &self.options)
            .field("overlays", &self.overlays)
            .field("has_adapter", &self.adapter.is_some())
            .field("has_listener", &self.listener.is_some())
            .field("session", &self.session)
            .finish_non_exhaustive()
    }
}

impl<R, O: OverlayManager> DragNDropList<R, O> {
    pub fn new(overlays: O) -> Self {
        Self::with_options(overlays, DragNDropOptions::default())
    }

    pub fn with_options(overlays: O, options: DragNDropOptions) -> Self {
        Self {
            options,
            overlays,
            adapter: None,
            listener: None,
            session: Session::default(),
            debug_log: VecDeque::new(),
            debug_event_counter: 0,
        }
    }

    /// Attach the row-data adapter and adopt its drag handle.
    pub fn set_adapter(&mut self, adapter: impl DragNDropAdapter<R> + 'static) {
        self.session.handle = Some(adapter.drag_handle());
        self.adapter = Some(Box::new(adapter));
    }

    /// Detach the adapter.
    ///
    /// The handle stays configured, so a later drag fails with
    /// [`DragNDropError::AdapterMissing`] until a new adapter is attached.
    pub fn take_adapter(&mut self) -> Option<Box<dyn DragNDropAdapter<R>>> {
        self.adapter.take()
    }

    pub fn set_listener(&mut self, listener: impl DragNDropListener<R> + 'static) {
        self.listener = Some(Box::new(listener));
    }

    pub fn clear_listener(&mut self) {
        self.listener = None;
    }

    /// Enable or disable dragging.
    ///
    /// Disabling only affects gestures that start afterwards: a drag already in
    /// progress still runs until release.
    pub fn set_dragging_enabled(&mut self, enabled: bool) {
        self.session.enabled = enabled;
    }

    pub fn is_dragging_enabled(&self) -> bool {
        self.session.enabled
    }

    /// True from a pointer-down on a handle until the matching release.
    pub fn is_dragging(&self) -> bool {
        self.session.active
    }

    /// Index of the row currently lifted, if any.
    pub fn dragged_index(&self) -> Option<usize> {
        self.session.start_index()
    }

    pub fn drag_handle(&self) -> Option<DragHandle> {
        self.session.handle
    }

    pub fn overlays(&self) -> &O {
        &self.overlays
    }

    pub fn overlays_mut(&mut self) -> &mut O {
        &mut self.overlays
    }
}
