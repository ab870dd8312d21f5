//! Vedic birth charts in the North Indian diamond style.
//!
//! A chart payload is a flat list of planet placements, each with a sign.
//! [`build_houses`] anchors twelve whole-sign houses on the Ascendant and
//! drops every planet into its house; [`layout`] turns those houses into the
//! fixed diamond geometry with label anchors; [`render_svg`] draws it.
//!
//! ```
//! use kundali::{Planet, build_houses, layout};
//!
//! let map = build_houses(&[
//!     Planet::new("Sun", "Leo", false),
//!     Planet::new("Ascendant", "Virgo", false),
//! ]);
//! assert_eq!(map.house(12).unwrap().occupants, vec!["Su"]);
//!
//! let spec = layout(&map.houses, 300.0, 2.0);
//! assert_eq!(spec.regions[0].labels.sign.text, "Vir*");
//! ```

pub mod bodies;
pub mod errors;
pub mod houses;
pub mod layout;
pub mod log;
pub mod payload;
pub mod render;
pub mod summary;
pub mod types;
pub mod zodiac;

pub use errors::ChartError;
pub use houses::{AscendantAnchor, AscendantSource, House, HouseMap, build_houses, resolve_ascendant};
pub use layout::{DrawSpec, layout};
pub use payload::{Aspect, BirthChart, ChartData, Planet, Transits};
pub use render::{RenderOptions, Theme, render_chart, render_svg};
pub use types::ChartSize;
pub use zodiac::Sign;

/// Render a chart payload (JSON text of a `ChartData`) to SVG.
///
/// Returns an error only when the payload cannot be parsed; missing or
/// unrecognized chart data still produces a drawing.
pub fn chart_svg(json: &str, options: &RenderOptions) -> Result<String, ChartError> {
    let data = ChartData::from_json(json)?;
    Ok(render_chart(&data, options))
}
