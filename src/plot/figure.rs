use geo::{LineString, Point, Rect};
use plotters::style::RGBColor;

/// Styled content on an [Axes], replayed in insertion order when the
/// figure is rendered.
#[derive(Debug, Clone, PartialEq)]
pub enum Layer {
    Polyline {
        line: LineString,
        color: RGBColor,
        width: u32,
        alpha: f64,
    },
    Markers {
        points: Vec<Point>,
        color: RGBColor,
        size: i32,
    },
}

/// Data-coordinate plane of a [Figure]: an extent and the layers drawn
/// onto it.
#[derive(Debug, Clone, PartialEq)]
pub struct Axes {
    pub(crate) extent: Rect,
    pub(crate) layers: Vec<Layer>,
}

impl Axes {
    pub fn new(extent: Rect) -> Self {
        Axes {
            extent,
            layers: Vec::new(),
        }
    }

    pub fn extent(&self) -> Rect {
        self.extent
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn polyline(&mut self, line: LineString, color: RGBColor, width: u32, alpha: f64) {
        self.layers.push(Layer::Polyline {
            line,
            color,
            width,
            alpha,
        });
    }

    pub fn markers(&mut self, points: Vec<Point>, color: RGBColor, size: i32) {
        self.layers.push(Layer::Markers {
            points,
            color,
            size,
        });
    }

    pub(crate) fn clear(&mut self) {
        self.layers.clear();
    }
}

/// Owned drawing surface holding its [Axes].
///
/// Rendering is retained-mode: drawing appends layers, and
/// [save_and_show](crate::plot::save_and_show) replays them through a
/// plotters backend when a file is requested. Passing an existing figure
/// back into [plot_graph_route](crate::plot::plot_graph_route) reuses its
/// axes without re-rendering the base graph.
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    pub(crate) figsize: (f64, f64),
    pub(crate) dpi: u32,
    pub(crate) bgcolor: RGBColor,
    pub(crate) axes: Axes,
}

impl Figure {
    /// A blank figure of `figsize` inches over the given data extent.
    pub fn new(figsize: (f64, f64), dpi: u32, bgcolor: RGBColor, extent: Rect) -> Self {
        Figure {
            figsize,
            dpi,
            bgcolor,
            axes: Axes::new(extent),
        }
    }

    pub fn axes(&self) -> &Axes {
        &self.axes
    }

    pub fn axes_mut(&mut self) -> &mut Axes {
        &mut self.axes
    }

    /// Pixel dimensions at this figure's resolution.
    pub fn pixel_size(&self) -> (u32, u32) {
        (
            (self.figsize.0 * self.dpi as f64).round() as u32,
            (self.figsize.1 * self.dpi as f64).round() as u32,
        )
    }
}
