//! SVG rendering for birth charts
//!
//! This module is organized into submodules:
//! - `theme`: Colors and stroke widths
//! - `svg`: SVG generation from a `DrawSpec`

pub mod svg;
pub mod theme;

pub use self::svg::render_svg;
pub use theme::Theme;

use crate::houses::{HouseMap, build_houses};
use crate::layout::layout;
use crate::log::warn;
use crate::payload::ChartData;
use crate::types::ChartSize;

/// Options for rendering a chart
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    pub size: ChartSize,
    pub theme: Theme,
}

/// Render a chart from house data
pub fn render_houses(houses: &HouseMap, options: &RenderOptions) -> String {
    if houses.is_degraded() {
        warn!(
            ascendant = houses.ascendant.sign.name(),
            fallback = houses.ascendant.is_fallback(),
            dropped = houses.dropped,
            "rendering chart from incomplete data"
        );
    }
    let spec = layout(&houses.houses, options.size.size(), options.size.margin());
    render_svg(&spec, &options.theme)
}

/// Render a chart from the upstream payload: houses, layout, SVG
pub fn render_chart(data: &ChartData, options: &RenderOptions) -> String {
    render_houses(&build_houses(&data.planets), options)
}
