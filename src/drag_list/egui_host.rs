use egui::{ColorImage, Context, Event, Order, Pos2, Rect, TextureHandle, TextureOptions};
use itertools::Itertools as _;

use super::{OverlayManager, OverlayParams, PointerAction, PointerEvent};

/// A drag overlay owned by [`EguiOverlays`].
///
/// Deliberately not `Clone`: it is handed back to [`OverlayManager::remove_overlay`] once.
#[derive(Debug, PartialEq, Eq)]
pub struct EguiOverlayHandle {
    id: u64,
}

struct EguiOverlay {
    texture: TextureHandle,
    rect: Rect,
    params: OverlayParams,
    visible: bool,
}

/// [`OverlayManager`] that paints each overlay as a texture in its own [`egui::Area`].
///
/// Call [`Self::show`] once per frame, after the list itself has been drawn.
/// Overlay positions are in the window's point space.
pub struct EguiOverlays {
    ctx: Context,
    id_salt: egui::Id,
    next_id: u64,
    overlays: ahash::HashMap<u64, EguiOverlay>,
}

impl std::fmt::Debug for EguiOverlays {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EguiOverlays")
            .field("id_salt", &self.id_salt)
            .field("next_id", &self.next_id)
            .field("live", &self.overlays.keys().sorted().collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}

impl EguiOverlays {
    pub fn new(ctx: Context) -> Self {
        Self {
            ctx,
            id_salt: egui::Id::new("egui_dragndrop_overlay"),
            next_id: 1,
            overlays: Default::default(),
        }
    }

    /// Use a distinct salt when several lists share one [`Context`].
    pub fn with_id_salt(mut self, salt: impl std::hash::Hash) -> Self {
        self.id_salt = egui::Id::new(("egui_dragndrop_overlay", salt));
        self
    }

    /// Number of live overlays, visible or not.
    pub fn len(&self) -> usize {
        self.overlays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.overlays.is_empty()
    }

    /// Current bounds of a live overlay.
    pub fn rect(&self, handle: &EguiOverlayHandle) -> Option<Rect> {
        self.overlays.get(&handle.id).map(|overlay| overlay.rect)
    }

    /// Bounds of every live overlay, oldest first.
    pub fn rects(&self) -> Vec<Rect> {
        self.overlays
            .iter()
            .sorted_by_key(|(id, _)| **id)
            .map(|(_, overlay)| overlay.rect)
            .collect()
    }

    pub fn is_visible(&self, handle: &EguiOverlayHandle) -> bool {
        self.overlays
            .get(&handle.id)
            .is_some_and(|overlay| overlay.visible)
    }

    /// Paint every visible overlay, oldest first.
    pub fn show(&self, ctx: &Context) {
        for (id, overlay) in self
            .overlays
            .iter()
            .filter(|(_, overlay)| overlay.visible)
            .sorted_by_key(|(id, _)| **id)
        {
            let order = if overlay.params.always_on_top {
                Order::Tooltip
            } else {
                Order::Foreground
            };

            egui::Area::new(self.id_salt.with(*id))
                .order(order)
                .fixed_pos(overlay.rect.min)
                .interactable(overlay.params.interactable)
                .constrain(!overlay.params.unclamped)
                .show(ctx, |ui| {
                    ui.image((overlay.texture.id(), overlay.rect.size()));
                });
        }

        if !self.overlays.is_empty() {
            ctx.request_repaint();
        }
    }
}

impl OverlayManager for EguiOverlays {
    type Surface = EguiOverlayHandle;

    fn add_overlay(&mut self, image: ColorImage, params: &OverlayParams) -> EguiOverlayHandle {
        let id = self.next_id;
        self.next_id += 1;

        // egui has no notion of keeping the display awake; `keep_screen_on` is left to the host.
        let texture = self.ctx.load_texture(
            format!("egui_dragndrop_overlay_{id}"),
            image,
            TextureOptions::LINEAR,
        );
        self.overlays.insert(
            id,
            EguiOverlay {
                texture,
                rect: Rect::from_min_size(params.pos, params.size),
                params: *params,
                visible: true,
            },
        );
        self.ctx.request_repaint();

        EguiOverlayHandle { id }
    }

    fn move_overlay(&mut self, surface: &mut EguiOverlayHandle, pos: Pos2) {
        if let Some(overlay) = self.overlays.get_mut(&surface.id) {
            overlay.rect = Rect::from_min_size(pos, overlay.rect.size());
            self.ctx.request_repaint();
        }
    }

    fn set_overlay_visible(&mut self, surface: &mut EguiOverlayHandle, visible: bool) {
        if let Some(overlay) = self.overlays.get_mut(&surface.id) {
            overlay.visible = visible;
        }
    }

    fn remove_overlay(&mut self, surface: EguiOverlayHandle) {
        // Dropping the last `TextureHandle` frees the texture.
        self.overlays.remove(&surface.id);
        self.ctx.request_repaint();
    }
}

/// Turns egui input events into [`PointerEvent`]s for one list.
///
/// Only the primary button drives drags. `PointerGone` and loss of window focus
/// become [`PointerAction::Cancel`] at the last known pointer position.
#[derive(Clone, Copy, Debug, Default)]
pub struct EguiPointerTranslator {
    last_pos: Option<Pos2>,
    pressed: bool,
}

impl EguiPointerTranslator {
    /// `list_origin` is the top-left of the list in window points. `window_origin` is
    /// added to every `screen_pos`, the space overlays are placed in.
    ///
    /// [`EguiOverlays`] paints in window points, so pair it with [`Pos2::ZERO`] here.
    /// A non-zero origin only makes sense for an [`OverlayManager`] that places
    /// overlays in desktop coordinates.
    pub fn translate(
        &mut self,
        events: &[Event],
        list_origin: Pos2,
        window_origin: Pos2,
    ) -> Vec<PointerEvent> {
        let to_pointer_event = |action: PointerAction, pos: Pos2| PointerEvent {
            action,
            pos: pos - list_origin.to_vec2(),
            screen_pos: pos + window_origin.to_vec2(),
        };

        let mut out = Vec::new();
        for event in events {
            match event {
                Event::PointerMoved(pos) => {
                    self.last_pos = Some(*pos);
                    out.push(to_pointer_event(PointerAction::Move, *pos));
                }
                Event::PointerButton {
                    pos,
                    button: egui::PointerButton::Primary,
                    pressed,
                    ..
                } => {
                    self.last_pos = Some(*pos);
                    self.pressed = *pressed;
                    let action = if *pressed {
                        PointerAction::Down
                    } else {
                        PointerAction::Up
                    };
                    out.push(to_pointer_event(action, *pos));
                }
                Event::PointerGone | Event::WindowFocused(false) => {
                    if self.pressed {
                        self.pressed = false;
                        if let Some(pos) = self.last_pos {
                            out.push(to_pointer_event(PointerAction::Cancel, pos));
                        }
                    }
                }
                _ => {}
            }
        }
        out
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }
}

