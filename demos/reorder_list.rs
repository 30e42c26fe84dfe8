#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use eframe::egui;
use egui::{Color32, ColorImage, Pos2, Rect, Vec2};
use egui_dragndrop::{
    DragHandle, DragNDropAdapter, DragNDropList, DragNDropListener, EguiOverlays,
    EguiPointerTranslator, ItemId, ListViewport, PointerEvent, RegionId, RowView,
};

const ROW_HEIGHT: f32 = 40.0;
const GRIP: RegionId = RegionId(1);
const GRIP_WIDTH: f32 = 36.0;

type Items = Rc<RefCell<Vec<String>>>;

#[derive(Debug)]
struct RowState {
    rect: Rect,
    visible: bool,
    /// The slot currently shows the footer, which has no grip.
    footer: bool,
}

/// A row slot. Slots are recycled as the list scrolls, like any virtualized list.
#[derive(Clone, Debug)]
struct DemoRow(Rc<RefCell<RowState>>);

impl RowView for DemoRow {
    fn rect(&self) -> Rect {
        self.0.borrow().rect
    }

    fn find_region(&self, region: RegionId) -> Option<Rect> {
        let state = self.0.borrow();
        if state.footer {
            return None;
        }
        let width = state.rect.width();
        (region == GRIP).then(|| {
            Rect::from_min_size(
                Pos2::new(width - GRIP_WIDTH, 0.0),
                Vec2::new(GRIP_WIDTH, ROW_HEIGHT),
            )
        })
    }

    fn set_visible(&mut self, visible: bool) {
        self.0.borrow_mut().visible = visible;
    }

    fn snapshot(&mut self) -> ColorImage {
        let size = self.0.borrow().rect.size();
        let (width, height) = (size.x as usize, size.y as usize);
        let mut rgba = Vec::with_capacity(width * height * 4);
        for y in 0..height {
            for x in 0..width {
                let border = x < 2 || y < 2 || x + 2 >= width || y + 2 >= height;
                let color: [u8; 4] = if border {
                    [255, 200, 80, 255]
                } else {
                    [90, 110, 160, 220]
                };
                rgba.extend_from_slice(&color);
            }
        }
        ColorImage::from_rgba_unmultiplied([width, height], &rgba)
    }

    fn clear_snapshot(&mut self) {}
}

struct DemoViewport {
    items: Items,
    size: Vec2,
    scroll: f32,
    slots: Vec<DemoRow>,
    selected: Option<usize>,
}

impl DemoViewport {
    /// Number of items including the trailing footer row.
    fn total(&self) -> usize {
        self.items.borrow().len() + 1
    }

    fn max_scroll(&self) -> f32 {
        (self.total() as f32 * ROW_HEIGHT - self.size.y).max(0.0)
    }

    fn layout(&mut self, size: Vec2) {
        self.size = size;
        self.scroll = self.scroll.clamp(0.0, self.max_scroll());

        let first = self.first_visible_index();
        let offset = self.scroll - first as f32 * ROW_HEIGHT;
        let count = ((size.y + offset) / ROW_HEIGHT).ceil() as usize;
        let count = count.min(self.total() - first);

        while self.slots.len() < count {
            self.slots.push(DemoRow(Rc::new(RefCell::new(RowState {
                rect: Rect::NOTHING,
                visible: true,
                footer: false,
            }))));
        }
        self.slots.truncate(count);

        let real_items = self.items.borrow().len();
        for (relative, slot) in self.slots.iter().enumerate() {
            let mut state = slot.0.borrow_mut();
            state.rect = Rect::from_min_size(
                Pos2::new(0.0, relative as f32 * ROW_HEIGHT - offset),
                Vec2::new(size.x, ROW_HEIGHT),
            );
            state.footer = first + relative >= real_items;
        }
    }

    fn paint(&self, painter: &egui::Painter, origin: Pos2) {
        let items = self.items.borrow();
        let first = self.first_visible_index();
        for (relative, slot) in self.slots.iter().enumerate() {
            let state = slot.0.borrow();
            if !state.visible {
                continue;
            }
            let index = first + relative;
            let rect = state.rect.translate(origin.to_vec2());
            let (label, fill) = match items.get(index) {
                Some(label) if self.selected == Some(index) => (label.as_str(), Color32::from_gray(70)),
                Some(label) => (label.as_str(), Color32::from_gray(45)),
                None => ("(footer: not a drop target)", Color32::from_gray(25)),
            };
            painter.rect_filled(rect.shrink(1.0), 4.0, fill);
            painter.text(
                rect.left_center() + Vec2::new(12.0, 0.0),
                egui::Align2::LEFT_CENTER,
                label,
                egui::FontId::proportional(16.0),
                Color32::WHITE,
            );
            if index < items.len() {
                painter.text(
                    Pos2::new(rect.right() - GRIP_WIDTH / 2.0, rect.center().y),
                    egui::Align2::CENTER_CENTER,
                    "☰",
                    egui::FontId::proportional(18.0),
                    Color32::LIGHT_GRAY,
                );
            }
        }
    }
}

impl ListViewport for DemoViewport {
    type Row = DemoRow;

    fn point_to_index(&self, pos: Pos2) -> Option<usize> {
        if !self.viewport_rect().contains(pos) {
            return None;
        }
        let index = ((pos.y + self.scroll) / ROW_HEIGHT).floor() as usize;
        (index < self.total()).then_some(index)
    }

    fn visible_child_at(&self, relative: usize) -> Option<DemoRow> {
        self.slots.get(relative).cloned()
    }

    fn first_visible_index(&self) -> usize {
        (self.scroll / ROW_HEIGHT).floor() as usize
    }

    fn item_count(&self) -> usize {
        self.total()
    }

    fn footer_count(&self) -> usize {
        1
    }

    fn item_id_at(&self, index: usize) -> ItemId {
        ItemId(index as u64)
    }

    fn viewport_rect(&self) -> Rect {
        Rect::from_min_size(Pos2::ZERO, self.size)
    }

    fn scroll_by(&mut self, amount: f32, _duration: Duration) {
        self.scroll = (self.scroll + amount).clamp(0.0, self.max_scroll());
        let size = self.size;
        self.layout(size);
    }

    fn force_redraw_all(&mut self) {
        let size = self.size;
        self.layout(size);
    }

    fn default_pointer_event(&mut self, event: &PointerEvent) -> bool {
        if event.action == egui_dragndrop::PointerAction::Down {
            self.selected = self
                .point_to_index(event.pos)
                .filter(|&index| index < self.items.borrow().len());
            return true;
        }
        false
    }
}

struct DemoAdapter {
    items: Items,
}

impl DragNDropAdapter<DemoRow> for DemoAdapter {
    fn drag_handle(&self) -> DragHandle {
        DragHandle::Region(GRIP)
    }

    fn on_item_drag(&mut self, _view: &DemoRow, position: usize, _id: ItemId) {
        log::info!("picked up {:?}", self.items.borrow().get(position));
    }

    fn on_item_drop(&mut self, _view: &DemoRow, start: usize, end: usize, _id: ItemId) {
        let mut items = self.items.borrow_mut();
        if start >= items.len() || end >= items.len() {
            log::warn!("ignoring drop {start} -> {end} outside {} items", items.len());
            return;
        }
        let item = items.remove(start);
        items.insert(end, item);
    }
}

struct LogListener;

impl DragNDropListener<DemoRow> for LogListener {
    fn on_item_drag(&mut self, _view: &DemoRow, position: usize, id: ItemId) {
        log::info!("drag started at {position} ({id:?})");
    }

    fn on_item_drop(&mut self, _view: &DemoRow, start: usize, end: usize, id: ItemId) {
        log::info!("dropped {id:?}: {start} -> {end}");
    }
}

struct App {
    viewport: DemoViewport,
    list: DragNDropList<DemoRow, EguiOverlays>,
    translator: EguiPointerTranslator,
}

impl App {
    fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let items: Items = Rc::new(RefCell::new(
            (1..=40).map(|i| format!("Item {i}")).collect(),
        ));

        let mut list = DragNDropList::new(EguiOverlays::new(cc.egui_ctx.clone()));
        list.options.debug_event_log = true;
        list.set_adapter(DemoAdapter {
            items: items.clone(),
        });
        list.set_listener(LogListener);

        Self {
            viewport: DemoViewport {
                items,
                size: Vec2::ZERO,
                scroll: 0.0,
                slots: Vec::new(),
                selected: None,
            },
            list,
            translator: EguiPointerTranslator::default(),
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::right("controls").show(ctx, |ui| {
            let mut enabled = self.list.is_dragging_enabled();
            if ui.checkbox(&mut enabled, "Dragging enabled").changed() {
                self.list.set_dragging_enabled(enabled);
            }
            ui.label(format!("dragging: {}", self.list.is_dragging()));
            ui.separator();
            ui.label("Debug log");
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.monospace(self.list.debug_log_text());
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let (list_rect, _response) =
                ui.allocate_exact_size(ui.available_size(), egui::Sense::hover());
            self.viewport.layout(list_rect.size());

            if !self.list.is_dragging() && ui.rect_contains_pointer(list_rect) {
                let wheel = ui.input(|i| i.smooth_scroll_delta.y);
                if wheel != 0.0 {
                    self.viewport.scroll_by(-wheel, Duration::ZERO);
                }
            }

            let events = ui.input(|i| i.events.clone());
            for event in self.translator.translate(&events, list_rect.min, Pos2::ZERO) {
                if let Err(err) = self.list.on_pointer_event(&mut self.viewport, &event) {
                    log::error!("{err}");
                }
            }

            let painter = ui.painter_at(list_rect);
            self.viewport.paint(&painter, list_rect.min);
        });

        self.list.overlays().show(ctx);
    }
}

fn main() -> eframe::Result {
    env_logger::init(); // Use `RUST_LOG=debug` to see drag transitions.

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([640.0, 480.0]),
        ..Default::default()
    };
    eframe::run_native(
        "egui_dragndrop demo",
        options,
        Box::new(|cc| Ok(Box::new(App::new(cc)))),
    )
}
