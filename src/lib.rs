//! Drag-to-reorder for vertically scrolling lists.
//!
//! [`DragNDropList`] is a pointer-driven state machine: a press on a row's drag
//! handle lifts the row into a floating snapshot overlay, the overlay follows the
//! pointer while the list auto-scrolls near its edges, and the release asks the
//! row-data adapter to move the item.
//!
//! The list widget, the row adapter and the overlay surface are collaborators
//! behind the [`ListViewport`], [`DragNDropAdapter`] and [`OverlayManager`] traits.
//! [`EguiOverlays`] and [`EguiPointerTranslator`] plug the controller into egui.

#![forbid(unsafe_code)]

pub mod drag_list;

pub use drag_list::{
    DragHandle, DragNDropAdapter, DragNDropError, DragNDropList, DragNDropListener,
    DragNDropOptions, EguiOverlayHandle, EguiOverlays, EguiPointerTranslator,
    HeaderFooterAdapter, ItemId, ListViewport, OverlayManager, OverlayParams, PointerAction,
    PointerEvent, RegionId, RowView, auto_scroll_distance,
};
