//! Recording test doubles for the viewport, rows, adapter, listener and overlays.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use egui::{ColorImage, Pos2, Rect, Vec2};

use super::{
    DragHandle, DragNDropAdapter, DragNDropList, DragNDropListener, ItemId, ListViewport,
    OverlayManager, OverlayParams, PointerAction, PointerEvent, RegionId, RowView,
};

pub(super) const ROW_HEIGHT: f32 = 50.0;
pub(super) const LIST_WIDTH: f32 = 200.0;
pub(super) const LIST_HEIGHT: f32 = 300.0;
pub(super) const HANDLE_REGION: RegionId = RegionId(7);

/// Handle bounds relative to the row: x 150..=190, y 10..=40.
pub(super) fn handle_local_rect() -> Rect {
    Rect::from_min_max(Pos2::new(150.0, 10.0), Pos2::new(190.0, 40.0))
}

/// A point inside the handle of the row at visible slot `relative`.
pub(super) fn handle_point(relative: usize) -> Pos2 {
    Pos2::new(170.0, relative as f32 * ROW_HEIGHT + 25.0)
}

pub(super) fn down(pos: Pos2) -> PointerEvent {
    PointerEvent::new(PointerAction::Down, pos)
}

pub(super) fn moved(pos: Pos2) -> PointerEvent {
    PointerEvent::new(PointerAction::Move, pos)
}

pub(super) fn up(pos: Pos2) -> PointerEvent {
    PointerEvent::new(PointerAction::Up, pos)
}

pub(super) fn cancel(pos: Pos2) -> PointerEvent {
    PointerEvent::new(PointerAction::Cancel, pos)
}

#[derive(Debug)]
pub(super) struct RowState {
    pub(super) rect: Rect,
    pub(super) region: Option<(RegionId, Rect)>,
    pub(super) visible: bool,
    pub(super) snapshots: usize,
    pub(super) snapshot_cleared: usize,
    pub(super) invalidations: usize,
}

#[derive(Clone, Debug)]
pub(super) struct MockRow(pub(super) Rc<RefCell<RowState>>);

impl MockRow {
    fn new(rect: Rect) -> Self {
        Self(Rc::new(RefCell::new(RowState {
            rect,
            region: Some((HANDLE_REGION, handle_local_rect())),
            visible: true,
            snapshots: 0,
            snapshot_cleared: 0,
            invalidations: 0,
        })))
    }

    pub(super) fn is_visible(&self) -> bool {
        self.0.borrow().visible
    }

    pub(super) fn state(&self) -> std::cell::Ref<'_, RowState> {
        self.0.borrow()
    }
}

impl RowView for MockRow {
    fn rect(&self) -> Rect {
        self.0.borrow().rect
    }

    fn find_region(&self, region: RegionId) -> Option<Rect> {
        self.0
            .borrow()
            .region
            .filter(|(id, _)| *id == region)
            .map(|(_, rect)| rect)
    }

    fn set_visible(&mut self, visible: bool) {
        self.0.borrow_mut().visible = visible;
    }

    fn snapshot(&mut self) -> ColorImage {
        let mut state = self.0.borrow_mut();
        state.snapshots += 1;
        let width = state.rect.width() as usize;
        let height = state.rect.height() as usize;
        ColorImage::from_rgba_unmultiplied([width, height], &vec![200; width * height * 4])
    }

    fn clear_snapshot(&mut self) {
        self.0.borrow_mut().snapshot_cleared += 1;
    }

    fn invalidate(&mut self) {
        self.0.borrow_mut().invalidations += 1;
    }
}

/// A list of fixed-height rows whose visible window starts at `first_visible`.
#[derive(Debug)]
pub(super) struct MockViewport {
    pub(super) rows: Vec<MockRow>,
    pub(super) first_visible: usize,
    pub(super) item_count: usize,
    pub(super) footer_count: usize,
    pub(super) scrolls: Vec<(f32, Duration)>,
    pub(super) redraws: usize,
    pub(super) forwarded: Vec<PointerEvent>,
    pub(super) default_consumes: bool,
    /// A visible slot whose row view has been recycled away.
    pub(super) unrealized: Option<usize>,
}

impl MockViewport {
    pub(super) fn new(item_count: usize, footer_count: usize) -> Self {
        Self::scrolled_to(item_count, footer_count, 0)
    }

    pub(super) fn scrolled_to(item_count: usize, footer_count: usize, first_visible: usize) -> Self {
        let slots = (LIST_HEIGHT / ROW_HEIGHT) as usize;
        let realized = item_count.saturating_sub(first_visible).min(slots);
        let rows = (0..realized)
            .map(|relative| {
                MockRow::new(Rect::from_min_size(
                    Pos2::new(0.0, relative as f32 * ROW_HEIGHT),
                    Vec2::new(LIST_WIDTH, ROW_HEIGHT),
                ))
            })
            .collect();
        Self {
            rows,
            first_visible,
            item_count,
            footer_count,
            scrolls: Vec::new(),
            redraws: 0,
            forwarded: Vec::new(),
            default_consumes: false,
            unrealized: None,
        }
    }

    /// The realized row showing item `index`.
    pub(super) fn row(&self, index: usize) -> &MockRow {
        &self.rows[index - self.first_visible]
    }
}

impl ListViewport for MockViewport {
    type Row = MockRow;

    fn point_to_index(&self, pos: Pos2) -> Option<usize> {
        if !self.viewport_rect().contains(pos) {
            return None;
        }
        let relative = (pos.y / ROW_HEIGHT).floor() as usize;
        let index = self.first_visible + relative;
        (relative < self.rows.len() && index < self.item_count).then_some(index)
    }

    fn visible_child_at(&self, relative: usize) -> Option<MockRow> {
        if self.unrealized == Some(relative) {
            return None;
        }
        self.rows.get(relative).cloned()
    }

    fn first_visible_index(&self) -> usize {
        self.first_visible
    }

    fn item_count(&self) -> usize {
        self.item_count
    }

    fn footer_count(&self) -> usize {
        self.footer_count
    }

    fn item_id_at(&self, index: usize) -> ItemId {
        ItemId(1000 + index as u64)
    }

    fn viewport_rect(&self) -> Rect {
        Rect::from_min_size(Pos2::ZERO, Vec2::new(LIST_WIDTH, LIST_HEIGHT))
    }

    fn scroll_by(&mut self, amount: f32, duration: Duration) {
        self.scrolls.push((amount, duration));
    }

    fn force_redraw_all(&mut self) {
        self.redraws += 1;
    }

    fn default_pointer_event(&mut self, event: &PointerEvent) -> bool {
        self.forwarded.push(*event);
        self.default_consumes
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum Call {
    ListenerDrag { position: usize, id: ItemId },
    ListenerDrop { start: usize, end: usize, id: ItemId },
    AdapterDrag { position: usize, id: ItemId },
    AdapterDrop { start: usize, end: usize, id: ItemId },
}

pub(super) type CallLog = Rc<RefCell<Vec<Call>>>;

pub(super) struct RecordingAdapter {
    pub(super) handle: DragHandle,
    pub(super) log: CallLog,
}

impl DragNDropAdapter<MockRow> for RecordingAdapter {
    fn drag_handle(&self) -> DragHandle {
        self.handle
    }

    fn on_item_drag(&mut self, _view: &MockRow, position: usize, id: ItemId) {
        self.log.borrow_mut().push(Call::AdapterDrag { position, id });
    }

    fn on_item_drop(&mut self, _view: &MockRow, start: usize, end: usize, id: ItemId) {
        self.log.borrow_mut().push(Call::AdapterDrop { start, end, id });
    }
}

pub(super) struct RecordingListener {
    pub(super) log: CallLog,
}

impl DragNDropListener<MockRow> for RecordingListener {
    fn on_item_drag(&mut self, _view: &MockRow, position: usize, id: ItemId) {
        self.log.borrow_mut().push(Call::ListenerDrag { position, id });
    }

    fn on_item_drop(&mut self, _view: &MockRow, start: usize, end: usize, id: ItemId) {
        self.log
            .borrow_mut()
            .push(Call::ListenerDrop { start, end, id });
    }
}

#[derive(Debug)]
pub(super) struct MockSurface(u64);

#[derive(Debug, Default)]
pub(super) struct MockOverlays {
    next_id: u64,
    pub(super) live: Vec<u64>,
    pub(super) created: Vec<OverlayParams>,
    pub(super) moves: Vec<Pos2>,
    pub(super) hidden: Vec<u64>,
    pub(super) removed: Vec<u64>,
}

impl OverlayManager for MockOverlays {
    type Surface = MockSurface;

    fn add_overlay(&mut self, _image: ColorImage, params: &OverlayParams) -> MockSurface {
        self.next_id += 1;
        self.live.push(self.next_id);
        self.created.push(*params);
        MockSurface(self.next_id)
    }

    fn move_overlay(&mut self, _surface: &mut MockSurface, pos: Pos2) {
        self.moves.push(pos);
    }

    fn set_overlay_visible(&mut self, surface: &mut MockSurface, visible: bool) {
        if !visible {
            self.hidden.push(surface.0);
        }
    }

    fn remove_overlay(&mut self, surface: MockSurface) {
        assert!(
            self.hidden.contains(&surface.0),
            "overlay must be hidden before it is removed"
        );
        self.live.retain(|&id| id != surface.0);
        self.removed.push(surface.0);
    }
}

pub(super) type TestList = DragNDropList<MockRow, MockOverlays>;

/// A controller with a recording adapter and listener sharing one call log.
pub(super) fn new_list(handle: DragHandle) -> (TestList, CallLog) {
    let log = CallLog::default();
    let mut list = TestList::new(MockOverlays::default());
    list.set_adapter(RecordingAdapter {
        handle,
        log: log.clone(),
    });
    list.set_listener(RecordingListener { log: log.clone() });
    (list, log)
}

pub(super) fn region_handle() -> DragHandle {
    DragHandle::Region(HANDLE_REGION)
}
