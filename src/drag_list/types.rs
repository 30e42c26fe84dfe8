use egui::Pos2;

/// Identifier of a handle sub-region inside a row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct RegionId(pub u32);

/// Stable identity of an item, as reported by [`super::ListViewport::item_id_at`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct ItemId(pub u64);

/// Which part of a row starts a drag when pressed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum DragHandle {
    /// The whole row is the handle.
    WholeRow,

    /// Only the sub-region with this id is the handle.
    /// Rows that lack the region can't be dragged.
    Region(RegionId),
}

impl DragHandle {
    /// Maps the classic integer handle id, where `0` means "whole row".
    pub fn from_raw(id: u32) -> Self {
        if id == 0 {
            Self::WholeRow
        } else {
            Self::Region(RegionId(id))
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum PointerAction {
    Down,
    Move,
    Up,
    Cancel,
}

/// A single pointer event delivered to [`super::DragNDropList::on_pointer_event`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct PointerEvent {
    pub action: PointerAction,

    /// Position in viewport space (same space as [`super::ListViewport::viewport_rect`]).
    pub pos: Pos2,

    /// Position in screen space, which is where overlays live.
    pub screen_pos: Pos2,
}

impl PointerEvent {
    /// An event whose viewport and screen coordinates coincide.
    pub fn new(action: PointerAction, pos: Pos2) -> Self {
        Self {
            action,
            pos,
            screen_pos: pos,
        }
    }

    pub fn with_screen_pos(mut self, screen_pos: Pos2) -> Self {
        self.screen_pos = screen_pos;
        self
    }

    /// Vertical distance between screen space and viewport space.
    pub(super) fn screen_offset_y(&self) -> f32 {
        self.screen_pos.y - self.pos.y
    }
}
