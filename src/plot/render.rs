use crate::plot::figure::{Figure, Layer};
use crate::plot::options::{FileFormat, PlotOptions};
use crate::plot::PlotError;

use log::{debug, info};
use plotters::coord::Shift;
use plotters::prelude::*;

/// Applies the output options to a finished figure.
///
/// - `save`: replay the figure's layers through a plotters backend into
///   `filepath`, at `dpi` resolution and in the configured [FileFormat].
/// - `show`: accepted for parity with the upstream plotting interface;
///   there is no interactive backend, so the retained figure stands in.
/// - `close`: clear the figure's layers before returning it.
pub fn save_and_show(mut figure: Figure, options: &PlotOptions) -> Result<Figure, PlotError> {
    if options.save {
        figure.dpi = options.dpi;
        let dimensions = figure.pixel_size();

        match options.file_format {
            FileFormat::Png => {
                let area = BitMapBackend::new(&options.filepath, dimensions).into_drawing_area();
                replay(&area, &figure)?;
            }
            FileFormat::Svg => {
                let area = SVGBackend::new(&options.filepath, dimensions).into_drawing_area();
                replay(&area, &figure)?;
            }
        }

        info!("Saved figure to {}", options.filepath.display());
    }

    if options.show {
        debug!("Show requested; no interactive backend is available");
    }

    if options.close {
        figure.axes_mut().clear();
    }

    Ok(figure)
}

/// Replays the retained layers onto a drawing area, in insertion order.
fn replay<DB>(area: &DrawingArea<DB, Shift>, figure: &Figure) -> Result<(), PlotError>
where
    DB: DrawingBackend,
{
    area.fill(&figure.bgcolor)
        .map_err(|e| PlotError::Backend(e.to_string()))?;

    let extent = figure.axes().extent();
    let mut chart = ChartBuilder::on(area)
        .build_cartesian_2d(extent.min().x..extent.max().x, extent.min().y..extent.max().y)
        .map_err(|e| PlotError::Backend(e.to_string()))?;

    for layer in figure.axes().layers() {
        match layer {
            Layer::Polyline {
                line,
                color,
                width,
                alpha,
            } => {
                let style = ShapeStyle {
                    color: color.mix(*alpha),
                    filled: false,
                    stroke_width: *width,
                };

                chart
                    .draw_series(std::iter::once(PathElement::new(
                        line.coords().map(|coord| (coord.x, coord.y)).collect::<Vec<_>>(),
                        style,
                    )))
                    .map_err(|e| PlotError::Backend(e.to_string()))?;
            }
            Layer::Markers {
                points,
                color,
                size,
            } => {
                chart
                    .draw_series(
                        points
                            .iter()
                            .map(|point| Circle::new((point.x(), point.y()), *size, color.filled())),
                    )
                    .map_err(|e| PlotError::Backend(e.to_string()))?;
            }
        }
    }

    area.present()
        .map_err(|e| PlotError::Backend(e.to_string()))?;

    Ok(())
}
