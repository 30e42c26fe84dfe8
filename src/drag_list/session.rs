use super::types::{DragHandle, ItemId};

/// State of the row currently lifted into the overlay.
///
/// These fields are created together at drag start and torn down together at drop.
#[derive(Debug)]
pub(super) struct LiftedRow<R, S> {
    pub(super) start_index: usize,
    pub(super) item_id: ItemId,
    pub(super) row: R,
    pub(super) overlay: S,

    /// Distance from the pointer to the row's top edge, corrected by the
    /// viewport-to-screen offset so that `pointer_y - pointer_offset` is the
    /// overlay's screen position.
    pub(super) pointer_offset: f32,
}

#[derive(Debug)]
pub(super) struct Session<R, S> {
    /// Drag mode: a pointer-down hit a handle and the gesture belongs to us until release.
    pub(super) active: bool,
    pub(super) enabled: bool,

    /// `None` while no adapter is attached.
    pub(super) handle: Option<DragHandle>,

    pub(super) lifted: Option<LiftedRow<R, S>>,
}

impl<R, S> Default for Session<R, S> {
    fn default() -> Self {
        Self {
            active: false,
            enabled: true,
            handle: None,
            lifted: None,
        }
    }
}

impl<R, S> Session<R, S> {
    pub(super) fn start_index(&self) -> Option<usize> {
        self.lifted.as_ref().map(|lifted| lifted.start_index)
    }

    pub(super) fn is_lifted(&self) -> bool {
        self.lifted.is_some()
    }

    pub(super) fn lift(&mut self, lifted: LiftedRow<R, S>) {
        debug_assert!(self.lifted.is_none(), "only one row can be lifted at a time");
        self.lifted = Some(lifted);
    }

    pub(super) fn take_lifted(&mut self) -> Option<LiftedRow<R, S>> {
        self.lifted.take()
    }
}
