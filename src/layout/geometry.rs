//! Construction points and the fixed region table of the North Indian chart.
//!
//! Geometry for a drawing of side `s` with margin `m` (SVG coordinates, Y down):
//!   Corners:   A(m,m) B(s-m,m) C(s-m,s-m) D(m,s-m)
//!   Midpoints: E(s/2,m) F(s-m,s/2) G(s/2,s-m) H(m,s/2)
//!   Center:    O(s/2,s/2)
//!   Inner:     P1(s/4,s/4) P2(3s/4,s/4) P3(3s/4,3s/4) P4(s/4,3s/4)
//!
//! The square ABCD, the diamond EFGH and the diagonals AC, BD cut the square
//! into four kites (one per side, meeting at O) and eight corner triangles.

use glam::{DVec2, dvec2};

/// One of the 13 construction points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Anchor {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    O,
    P1,
    P2,
    P3,
    P4,
}

impl Anchor {
    pub const ALL: [Anchor; 13] = [
        Anchor::A,
        Anchor::B,
        Anchor::C,
        Anchor::D,
        Anchor::E,
        Anchor::F,
        Anchor::G,
        Anchor::H,
        Anchor::O,
        Anchor::P1,
        Anchor::P2,
        Anchor::P3,
        Anchor::P4,
    ];

    #[inline]
    fn slot(self) -> usize {
        self as usize
    }
}

/// The construction points resolved for one drawing size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    points: [DVec2; 13],
}

impl Frame {
    pub fn new(size: f64, margin: f64) -> Self {
        let s = size;
        let m = margin;
        let half = s / 2.0;
        let quarter = s / 4.0;
        let three_quarters = 3.0 * s / 4.0;

        Frame {
            points: [
                dvec2(m, m),                           // A
                dvec2(s - m, m),                       // B
                dvec2(s - m, s - m),                   // C
                dvec2(m, s - m),                       // D
                dvec2(half, m),                        // E
                dvec2(s - m, half),                    // F
                dvec2(half, s - m),                    // G
                dvec2(m, half),                        // H
                dvec2(half, half),                     // O
                dvec2(quarter, quarter),               // P1
                dvec2(three_quarters, quarter),        // P2
                dvec2(three_quarters, three_quarters), // P3
                dvec2(quarter, three_quarters),        // P4
            ],
        }
    }

    #[inline]
    pub fn point(&self, anchor: Anchor) -> DVec2 {
        self.points[anchor.slot()]
    }

    /// Resolve a sequence of anchors to points
    pub fn resolve(&self, anchors: &[Anchor]) -> Vec<DVec2> {
        anchors.iter().map(|&a| self.point(a)).collect()
    }

    /// All 13 construction points, in `Anchor::ALL` order
    pub fn points(&self) -> &[DVec2; 13] {
        &self.points
    }
}

/// Shape of a house region
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionShape {
    /// Four-sided region at a cardinal side (houses 1, 4, 7, 10)
    Kite,
    /// Corner triangle flanking a kite
    Triangle,
}

/// A house region as a fixed combination of anchors
#[derive(Debug, Clone, Copy)]
pub struct RegionDef {
    pub shape: RegionShape,
    pub anchors: &'static [Anchor],
}

use Anchor::*;

/// Regions in house order, starting from the top kite and running clockwise.
pub const REGIONS: [RegionDef; 12] = [
    RegionDef { shape: RegionShape::Kite, anchors: &[E, P2, O, P1] }, // 1: top
    RegionDef { shape: RegionShape::Triangle, anchors: &[B, E, P2] }, // 2: top right, upper
    RegionDef { shape: RegionShape::Triangle, anchors: &[B, P2, F] }, // 3: top right, lower
    RegionDef { shape: RegionShape::Kite, anchors: &[P2, F, P3, O] }, // 4: right
    RegionDef { shape: RegionShape::Triangle, anchors: &[F, C, P3] }, // 5: bottom right, upper
    RegionDef { shape: RegionShape::Triangle, anchors: &[C, G, P3] }, // 6: bottom right, lower
    RegionDef { shape: RegionShape::Kite, anchors: &[G, P3, O, P4] }, // 7: bottom
    RegionDef { shape: RegionShape::Triangle, anchors: &[D, G, P4] }, // 8: bottom left, lower
    RegionDef { shape: RegionShape::Triangle, anchors: &[D, P4, H] }, // 9: bottom left, upper
    RegionDef { shape: RegionShape::Kite, anchors: &[P4, H, P1, O] }, // 10: left
    RegionDef { shape: RegionShape::Triangle, anchors: &[A, P1, H] }, // 11: top left, lower
    RegionDef { shape: RegionShape::Triangle, anchors: &[A, E, P1] }, // 12: top left, upper
];

/// Outer square, clockwise from top-left
pub const OUTER_SQUARE: [Anchor; 4] = [A, B, C, D];
/// Diamond through the edge midpoints
pub const INNER_DIAMOND: [Anchor; 4] = [E, F, G, H];
/// Corner-to-corner diagonals
pub const DIAGONALS: [(Anchor, Anchor); 2] = [(A, C), (B, D)];

/// Mean of the vertices
pub fn centroid(points: &[DVec2]) -> DVec2 {
    if points.is_empty() {
        return DVec2::ZERO;
    }
    points.iter().copied().sum::<DVec2>() / points.len() as f64
}
