//! Panel UI Controller.
//!
//! Tracks whether the panel is open, where it sits and which layout applies to
//! the current viewport. Desktop panels can be dragged by their header; mobile
//! panels stay pinned to the bottom-right corner.

use crate::types::config::WidgetConfig;
use crate::types::panel::{Layout, Position, Viewport};

/// Trait defining the panel management interface.
pub trait PanelManagerTrait {
    fn is_open(&self) -> bool;
    fn open(&mut self);
    fn close(&mut self);
    fn toggle(&mut self) -> bool;
    fn set_viewport(&mut self, viewport: Viewport);
    fn begin_drag(&mut self, pointer: Position) -> bool;
    fn drag_to(&mut self, pointer: Position) -> Option<Position>;
    fn end_drag(&mut self);
    fn is_dragging(&self) -> bool;
    fn position(&self) -> Position;
    fn layout(&self) -> Layout;
    fn viewport(&self) -> Viewport;
}

/// Geometry the panel is laid out with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelGeometry {
    pub width: f64,
    pub height: f64,
    pub margin: f64,
    pub mobile_breakpoint: f64,
}

impl PanelGeometry {
    pub fn from_config(config: &WidgetConfig) -> Self {
        Self {
            width: config.panel_width_px,
            height: config.panel_height_px,
            margin: config.viewport_margin_px,
            mobile_breakpoint: config.mobile_breakpoint_px,
        }
    }
}

pub struct PanelManager {
    open: bool,
    geometry: PanelGeometry,
    viewport: Viewport,
    layout: Layout,
    position: Position,
    /// Pointer offset from the panel's top-left corner while dragging.
    drag_offset: Option<Position>,
}

impl PanelManager {
    pub fn new(geometry: PanelGeometry, viewport: Viewport) -> Self {
        let mut manager = Self {
            open: false,
            geometry,
            viewport,
            layout: Layout::Desktop,
            position: Position::default(),
            drag_offset: None,
        };
        manager.layout = manager.layout_for(viewport);
        manager.position = manager.corner_position();
        manager
    }

    fn layout_for(&self, viewport: Viewport) -> Layout {
        if viewport.width < self.geometry.mobile_breakpoint {
            Layout::Mobile
        } else {
            Layout::Desktop
        }
    }

    /// Bottom-right corner, inset by the margin.
    fn corner_position(&self) -> Position {
        self.clamp(Position {
            x: self.viewport.width - self.geometry.width - self.geometry.margin,
            y: self.viewport.height - self.geometry.height - self.geometry.margin,
        })
    }

    /// Keeps the top-left corner within `[margin, viewport - panel - margin]`.
    pub fn clamp(&self, position: Position) -> Position {
        let margin = self.geometry.margin;
        let max_x = (self.viewport.width - self.geometry.width - margin).max(margin);
        let max_y = (self.viewport.height - self.geometry.height - margin).max(margin);
        Position {
            x: position.x.clamp(margin, max_x),
            y: position.y.clamp(margin, max_y),
        }
    }

    /// Inline style for the panel element. Independent of the page-wide
    /// accessibility classes.
    pub fn inline_style(&self) -> String {
        let visibility = if self.open { "block" } else { "none" };
        format!(
            "display:{};position:fixed;left:{}px;top:{}px;width:{}px;max-height:{}px;\
             z-index:2147483647;background:#ffffff;color:#1a1a1a;border:2px solid #1a1a1a;\
             border-radius:8px;font:16px/1.4 sans-serif;overflow:auto;",
            visibility, self.position.x, self.position.y, self.geometry.width, self.geometry.height
        )
    }
}

impl PanelManagerTrait for PanelManager {
    fn is_open(&self) -> bool {
        self.open
    }

    fn open(&mut self) {
        self.open = true;
    }

    fn close(&mut self) {
        self.open = false;
        self.drag_offset = None;
    }

    fn toggle(&mut self) -> bool {
        if self.open {
            self.close();
        } else {
            self.open();
        }
        log::debug!("panel {}", if self.open { "opened" } else { "closed" });
        self.open
    }

    /// Re-evaluates the layout and keeps the panel inside the new viewport.
    fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        let layout = self.layout_for(viewport);
        if layout != self.layout {
            log::debug!("panel layout {:?} -> {:?}", self.layout, layout);
            self.layout = layout;
            self.drag_offset = None;
        }
        self.position = match self.layout {
            Layout::Mobile => self.corner_position(),
            Layout::Desktop => self.clamp(self.position),
        };
    }

    /// Starts a drag. Ignored on mobile or while the panel is closed.
    fn begin_drag(&mut self, pointer: Position) -> bool {
        if self.layout == Layout::Mobile || !self.open {
            return false;
        }
        self.drag_offset = Some(Position {
            x: pointer.x - self.position.x,
            y: pointer.y - self.position.y,
        });
        true
    }

    fn drag_to(&mut self, pointer: Position) -> Option<Position> {
        let offset = self.drag_offset?;
        self.position = self.clamp(Position {
            x: pointer.x - offset.x,
            y: pointer.y - offset.y,
        });
        Some(self.position)
    }

    fn end_drag(&mut self) {
        self.drag_offset = None;
    }

    fn is_dragging(&self) -> bool {
        self.drag_offset.is_some()
    }

    fn position(&self) -> Position {
        self.position
    }

    fn layout(&self) -> Layout {
        self.layout
    }

    fn viewport(&self) -> Viewport {
        self.viewport
    }
}
