use egui::{ColorImage, Pos2, Vec2};

/// How a floating snapshot overlay is created.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OverlayParams {
    /// Top-left corner, in screen space.
    pub pos: Pos2,
    pub size: Vec2,

    /// Whether the overlay takes pointer input. A drag overlay never does, so
    /// the list keeps receiving the gesture underneath it.
    pub interactable: bool,

    /// Paint above everything else, including popups.
    pub always_on_top: bool,

    /// Allow the overlay to extend past the screen/window bounds.
    pub unclamped: bool,

    /// Keep the display awake while the overlay exists.
    pub keep_screen_on: bool,
}

impl OverlayParams {
    /// Parameters of the snapshot that follows the pointer during a drag.
    pub fn drag_snapshot(pos: Pos2, size: Vec2) -> Self {
        Self {
            pos,
            size,
            interactable: false,
            always_on_top: true,
            unclamped: true,
            keep_screen_on: true,
        }
    }
}

/// Creates and manages floating overlay surfaces.
///
/// On platforms without real floating windows an absolutely positioned layer
/// above the list is enough (see [`crate::EguiOverlays`]).
pub trait OverlayManager {
    /// An exclusively owned overlay. It is handed back to [`Self::remove_overlay`]
    /// exactly once.
    type Surface;

    fn add_overlay(&mut self, image: ColorImage, params: &OverlayParams) -> Self::Surface;

    /// Move the overlay's top-left corner to `pos` (screen space).
    fn move_overlay(&mut self, surface: &mut Self::Surface, pos: Pos2);

    fn set_overlay_visible(&mut self, surface: &mut Self::Surface, visible: bool);

    /// Destroy the overlay and release its bitmap.
    fn remove_overlay(&mut self, surface: Self::Surface);
}

/// Size of an image in points, one point per pixel.
pub(super) fn image_size(image: &ColorImage) -> Vec2 {
    let [width, height] = image.size;
    Vec2::new(width as f32, height as f32)
}
