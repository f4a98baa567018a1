use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

use thiserror::Error;

/// Drawing half of the shape/renderer bridge.
///
/// Implementations are stateless and freely shared between shapes. Each
/// method returns the formatted draw line; the shape decides when to emit it.
/// The two built-in renderers differ only in the text they produce.
pub trait Renderer {
    fn render_circle(&self, radius_x: f32, radius_y: f32) -> String;
    fn render_rect(&self, side_x: f32, side_y: f32) -> String;
}

pub struct VectorRenderer;

impl Renderer for VectorRenderer {
    fn render_circle(&self, radius_x: f32, radius_y: f32) -> String {
        format!(
            "Drawing a *vector* circle of radius X {} and radius Y {}",
            radius_x, radius_y
        )
    }

    fn render_rect(&self, side_x: f32, side_y: f32) -> String {
        format!(
            "Drawing a *vector* rectangle of side X {} and side Y {}",
            side_x, side_y
        )
    }
}

pub struct RasterRenderer;

impl Renderer for RasterRenderer {
    fn render_circle(&self, radius_x: f32, radius_y: f32) -> String {
        format!(
            "Drawing a *raster* circle of radius X {} and radius Y {}",
            radius_x, radius_y
        )
    }

    fn render_rect(&self, side_x: f32, side_y: f32) -> String {
        format!(
            "Drawing a *raster* rectangle of side X {} and side Y {}",
            side_x, side_y
        )
    }
}

/// Closed set of renderer styles, used to pick a renderer from the command
/// line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RendererKind {
    Vector,
    Raster,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown renderer style '{0}', expected 'vector' or 'raster'")]
pub struct UnknownStyle(String);

impl RendererKind {
    /// Builds the renderer for this style, ready to be shared between shapes.
    pub fn create(self) -> Rc<dyn Renderer> {
        match self {
            RendererKind::Vector => Rc::new(VectorRenderer),
            RendererKind::Raster => Rc::new(RasterRenderer),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            RendererKind::Vector => "vector",
            RendererKind::Raster => "raster",
        }
    }
}

impl fmt::Display for RendererKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RendererKind {
    type Err = UnknownStyle;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "vector" => Ok(RendererKind::Vector),
            "raster" => Ok(RendererKind::Raster),
            _ => Err(UnknownStyle(s.to_string())),
        }
    }
}
