//! # Shape Browser
//!
//! The controller a host UI binds to: it owns the viewport, the shape
//! catalog and the palette, tracks the selected shape/color/side, and
//! keeps the zoom-slider value in sync with the camera.
//!
//! Everything here is synchronous and runs on whichever thread owns the
//! browser; a UI host is expected to call in from its main thread only.

use log::warn;

use crate::camera::framing::{self, AutoFrameResult};
use crate::error::PreviewError;
use crate::palette::Palette;
use crate::shapes::{
    single_shape, CurrentCategory, ShapeCatalog, ShapeKind, ValueItem,
};
use crate::viewport::Viewport;

const DEFAULT_COLOR_NAME: &str = "Gold";
const DEFAULT_SIDE: f32 = 1.0;

/// Browser state for the shape-preview window.
pub struct ShapeBrowser {
    viewport: Viewport,
    catalog: ShapeCatalog,
    palette: Palette,
    current_category: Option<CurrentCategory>,
    selected_shape: Option<ShapeKind>,
    color_name: String,
    color: [f32; 3],
    side: f32,
    zoom: f32,
}

impl ShapeBrowser {
    /// Create a browser with the standard catalog and built-in palette
    pub fn new(aspect: f32) -> Self {
        let viewport = Viewport::new(aspect);
        let palette = Palette::builtin();
        let color = palette
            .color(DEFAULT_COLOR_NAME)
            .unwrap_or([1.0, 1.0, 1.0]);
        let zoom = viewport.zoom_value();

        Self {
            viewport,
            catalog: ShapeCatalog::standard(),
            palette,
            current_category: None,
            selected_shape: None,
            color_name: DEFAULT_COLOR_NAME.to_string(),
            color,
            side: DEFAULT_SIDE,
            zoom,
        }
    }

    /// The viewport the host renders
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Mutable viewport access, e.g. for resize
    pub fn viewport_mut(&mut self) -> &mut Viewport {
        &mut self.viewport
    }

    /// The shape catalog backing the outline view
    pub fn catalog(&self) -> &ShapeCatalog {
        &self.catalog
    }

    /// The color palette backing the swatch view
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Mutable palette access, e.g. to register custom colors
    pub fn palette_mut(&mut self) -> &mut Palette {
        &mut self.palette
    }

    /// The currently selected shape, if any
    pub fn selected_shape(&self) -> Option<ShapeKind> {
        self.selected_shape
    }

    /// The expanded category and selection cursor, if a shape is selected
    pub fn current_category(&self) -> Option<&CurrentCategory> {
        self.current_category.as_ref()
    }

    /// Name of the current tint color
    pub fn color_name(&self) -> &str {
        &self.color_name
    }

    /// Current side length
    pub fn side(&self) -> f32 {
        self.side
    }

    /// The value the host's zoom slider should show
    pub fn zoom_value(&self) -> f32 {
        self.zoom
    }

    /// Select a shape: generate it, swap it in as the current shape, and
    /// auto-frame the camera.
    ///
    /// On a successful frame the zoom value follows the framed distance.
    /// If the shape cannot be framed the camera and zoom value stay as
    /// they were; the shape is still installed in the scene.
    pub fn select_shape(&mut self, kind: ShapeKind) -> Result<AutoFrameResult, PreviewError> {
        let node = single_shape(kind, self.color, self.side)?;
        let id = self.viewport.set_current_shape(node)?;

        self.selected_shape = Some(kind);
        self.current_category = self.catalog.current_for(kind);

        let result = framing::auto_frame(&mut self.viewport, id);
        match result {
            AutoFrameResult::Framed(distance) => self.zoom = distance,
            AutoFrameResult::NotFramed => {
                warn!("{} at side {} does not fit into view", kind, self.side);
            }
        }

        Ok(result)
    }

    /// Change the tint color by palette name and regenerate the current
    /// shape, if one is selected.
    pub fn select_color(&mut self, name: &str) -> Result<(), PreviewError> {
        let rgb = self
            .palette
            .color(name)
            .ok_or_else(|| PreviewError::UnknownColor(name.to_string()))?;

        self.color_name = name.to_string();
        self.color = rgb;

        if let Some(kind) = self.selected_shape {
            self.select_shape(kind)?;
        }
        Ok(())
    }

    /// Change the side length and regenerate the current shape, if one is
    /// selected.
    pub fn set_side(&mut self, side: f32) -> Result<(), PreviewError> {
        if !(side > 0.0) {
            return Err(PreviewError::InvalidSideLength(side));
        }
        self.side = side;

        if let Some(kind) = self.selected_shape {
            self.select_shape(kind)?;
        }
        Ok(())
    }

    /// Manual zoom path: move the camera depth directly, no containment
    /// check.
    pub fn set_zoom(&mut self, value: f32) {
        framing::set_distance(&mut self.viewport, value);
        self.zoom = value;
    }

    /// Parameter rows for the list under the preview
    pub fn parameter_items(&self) -> Vec<ValueItem> {
        vec![
            ValueItem::new(
                "Shape",
                self.selected_shape
                    .map(|k| k.display_name().to_string())
                    .unwrap_or_else(|| "None".to_string()),
            ),
            ValueItem::new("Color", self.color_name.clone()),
            ValueItem::new("Side", format!("{:.2}", self.side)),
            ValueItem::new("Zoom", format!("{:.1}", self.zoom)),
        ]
    }
}
