//! House assignment: place each planet in one of twelve houses counted from
//! the Ascendant sign (whole-sign houses).

use std::fmt;

use crate::bodies;
use crate::log::{debug, warn};
use crate::payload::Planet;
use crate::zodiac::Sign;

/// Sign used for house 1 when the payload gives no usable anchor.
pub const FALLBACK_ASCENDANT: Sign = Sign::Aries;

/// Where the house 1 sign came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AscendantSource {
    /// A placement named "Ascendant" or "Lagna"; holds its position in the input.
    Explicit { index: usize },
    /// No Ascendant placement; the first placement's sign stands in for it.
    FirstPlacement,
    /// Nothing usable in the payload. The chart is drawn but is not astrologically meaningful.
    Fallback,
}

/// The sign anchoring house 1 and how it was chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AscendantAnchor {
    pub sign: Sign,
    pub source: AscendantSource,
}

impl AscendantAnchor {
    pub fn is_fallback(&self) -> bool {
        self.source == AscendantSource::Fallback
    }
}

/// Pick the Ascendant sign for a set of placements.
///
/// The first placement named "Ascendant" or "Lagna" wins; without one, the
/// first placement stands in. If the chosen placement's sign is not a
/// canonical sign, or there are no placements, house 1 falls back to Aries.
pub fn resolve_ascendant(placements: &[Planet]) -> AscendantAnchor {
    let candidate = match placements.iter().position(|p| bodies::is_ascendant(&p.name)) {
        Some(index) => Some((&placements[index], AscendantSource::Explicit { index })),
        None => placements.first().map(|p| (p, AscendantSource::FirstPlacement)),
    };

    if let Some((placement, source)) = candidate {
        if let Some(sign) = placement.zodiac_sign() {
            return AscendantAnchor { sign, source };
        }
        warn!(
            name = placement.name.as_str(),
            sign = placement.sign.as_str(),
            "ascendant candidate has an unrecognized sign"
        );
    }

    warn!(
        placements = placements.len(),
        fallback = FALLBACK_ASCENDANT.name(),
        "no usable ascendant, using fallback sign"
    );
    AscendantAnchor {
        sign: FALLBACK_ASCENDANT,
        source: AscendantSource::Fallback,
    }
}

/// One of the twelve houses
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct House {
    /// 1 through 12
    pub number: u8,
    pub sign: Sign,
    /// Occupant codes in input order, e.g. `["Su", "SaR"]`
    pub occupants: Vec<String>,
}

impl House {
    /// Occupant codes joined with single spaces
    pub fn occupant_text(&self) -> String {
        self.occupants.join(" ")
    }
}

/// House number (1-12) of a sign, counted from the Ascendant sign.
#[inline]
pub fn house_of(sign: Sign, ascendant: Sign) -> u8 {
    ((sign.index() + 12 - ascendant.index()) % 12) as u8 + 1
}

/// All twelve houses of a chart
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HouseMap {
    pub houses: [House; 12],
    pub ascendant: AscendantAnchor,
    /// Placements skipped because their sign was not recognized
    pub dropped: usize,
}

impl HouseMap {
    /// House by number (1-12)
    pub fn house(&self, number: u8) -> Option<&House> {
        match number {
            1..=12 => Some(&self.houses[number as usize - 1]),
            _ => None,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &House> {
        self.houses.iter()
    }

    /// Total occupants across all houses
    pub fn occupant_count(&self) -> usize {
        self.houses.iter().map(|h| h.occupants.len()).sum()
    }

    /// True when the chart was built from incomplete data: a fallback
    /// Ascendant or at least one dropped placement.
    pub fn is_degraded(&self) -> bool {
        self.ascendant.is_fallback() || self.dropped > 0
    }
}

/// Build the twelve houses for a set of placements.
///
/// House `i` holds the sign `i - 1` steps after the Ascendant sign. Every
/// placement other than the Ascendant itself is appended to the house of its
/// sign, in input order; placements whose sign is not a canonical sign are
/// skipped and counted in `dropped`.
pub fn build_houses(placements: &[Planet]) -> HouseMap {
    let ascendant = resolve_ascendant(placements);
    let mut houses: [House; 12] = std::array::from_fn(|i| House {
        number: i as u8 + 1,
        sign: ascendant.sign.offset(i),
        occupants: Vec::new(),
    });

    let mut dropped = 0;
    for placement in placements {
        if bodies::is_ascendant(&placement.name) {
            continue;
        }
        let Some(sign) = placement.zodiac_sign() else {
            debug!(
                name = placement.name.as_str(),
                sign = placement.sign.as_str(),
                "dropping placement with unrecognized sign"
            );
            dropped += 1;
            continue;
        };
        let number = house_of(sign, ascendant.sign);
        houses[number as usize - 1]
            .occupants
            .push(bodies::occupant_label(&placement.name, placement.retrograde));
    }

    if dropped > 0 {
        warn!(dropped, "placements dropped for unrecognized signs");
    }
    debug!(
        ascendant = ascendant.sign.name(),
        placements = placements.len(),
        dropped,
        "built houses"
    );

    HouseMap {
        houses,
        ascendant,
        dropped,
    }
}

impl fmt::Display for AscendantSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AscendantSource::Explicit { .. } => f.write_str("explicit"),
            AscendantSource::FirstPlacement => f.write_str("first placement"),
            AscendantSource::Fallback => f.write_str("fallback"),
        }
    }
}

/// One line per house: number, sign code, occupants.
impl fmt::Display for HouseMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "ascendant: {} ({})", self.ascendant.sign, self.ascendant.source)?;
        writeln!(f, "dropped: {}", self.dropped)?;
        for house in &self.houses {
            let line = format!("{:>2} {} {}", house.number, house.sign.abbr(), house.occupant_text());
            writeln!(f, "{}", line.trim_end())?;
        }
        Ok(())
    }
}
