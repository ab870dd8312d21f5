//! Chart geometry for the North Indian diamond layout
//!
//! This module is organized into submodules:
//! - `defaults`: Default sizes and label metrics
//! - `geometry`: Construction points and the fixed region table
//! - `labels`: Label text, font sizes and placement

pub mod defaults;
pub mod geometry;
pub mod labels;

pub use geometry::{Anchor, Frame, RegionShape};
pub use labels::{FontSizes, HouseLabels, Label, LabelRole};

use glam::DVec2;

use crate::houses::House;
use crate::log::debug;

/// A straight line between two points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub from: DVec2,
    pub to: DVec2,
}

/// The drawable region of one house
#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    /// House number (1-12) drawn in this region
    pub house: u8,
    pub shape: RegionShape,
    /// Construction points the polygon is made of, in drawing order
    pub anchors: &'static [Anchor],
    /// `anchors` resolved to pixels
    pub points: Vec<DVec2>,
    pub centroid: DVec2,
    pub labels: HouseLabels,
}

/// Everything needed to draw a chart, in pixels
#[derive(Debug, Clone, PartialEq)]
pub struct DrawSpec {
    pub size: f64,
    pub margin: f64,
    pub frame: Frame,
    pub fonts: FontSizes,
    /// House regions in house order
    pub regions: Vec<Region>,
    pub outer_square: [DVec2; 4],
    pub inner_diamond: [DVec2; 4],
    pub diagonals: [Segment; 2],
}

impl DrawSpec {
    /// All labels, house by house
    pub fn labels(&self) -> impl Iterator<Item = &Label> {
        self.regions.iter().flat_map(|r| r.labels.iter())
    }
}

/// Lay out a chart for a square drawing of side `size`.
///
/// The structure is fixed; only the label text depends on `houses`. House 1
/// is always the top kite and the rest follow clockwise. A non-positive
/// `size` yields degenerate but well-formed output.
pub fn layout(houses: &[House; 12], size: f64, margin: f64) -> DrawSpec {
    let frame = Frame::new(size, margin);
    let fonts = FontSizes::for_size(size);

    let regions = geometry::REGIONS
        .iter()
        .zip(houses)
        .map(|(def, house)| {
            let points = frame.resolve(def.anchors);
            let centroid = geometry::centroid(&points);
            Region {
                house: house.number,
                shape: def.shape,
                anchors: def.anchors,
                labels: labels::place_labels(house, centroid, &fonts),
                points,
                centroid,
            }
        })
        .collect::<Vec<_>>();

    debug!(size, margin, regions = regions.len(), "chart layout");

    DrawSpec {
        size,
        margin,
        frame,
        fonts,
        regions,
        outer_square: geometry::OUTER_SQUARE.map(|a| frame.point(a)),
        inner_diamond: geometry::INNER_DIAMOND.map(|a| frame.point(a)),
        diagonals: geometry::DIAGONALS.map(|(from, to)| Segment {
            from: frame.point(from),
            to: frame.point(to),
        }),
    }
}
