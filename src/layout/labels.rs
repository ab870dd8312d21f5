//! Label text and placement inside each house region

use glam::{DVec2, dvec2};

use super::defaults;
use crate::houses::House;

/// Font sizes for one drawing size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontSizes {
    /// Sign labels; also the unit for label offsets
    pub base: f64,
    pub house_number: f64,
    pub occupants: f64,
}

impl FontSizes {
    /// Fonts scale linearly with the drawing, with a floor for small charts.
    pub fn for_size(size: f64) -> Self {
        let base = (size / defaults::FONT_DIVISOR).max(defaults::FONT_FLOOR);
        FontSizes {
            base,
            house_number: base * defaults::HOUSE_NUMBER_SCALE,
            occupants: (size / defaults::OCCUPANT_FONT_DIVISOR).max(defaults::OCCUPANT_FONT_FLOOR),
        }
    }
}

/// What a label shows; the renderer picks color and weight from this
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelRole {
    HouseNumber,
    Sign,
    /// Sign label of house 1
    AscendantSign,
    Occupants,
}

/// A single line of text, horizontally centered on `at.x` with its baseline at `at.y`
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub text: String,
    pub at: DVec2,
    pub font_size: f64,
    pub role: LabelRole,
}

/// The three stacked lines drawn in a house
#[derive(Debug, Clone, PartialEq)]
pub struct HouseLabels {
    pub number: Label,
    pub sign: Label,
    /// Absent when the house is empty
    pub occupants: Option<Label>,
}

impl HouseLabels {
    /// Labels in drawing order
    pub fn iter(&self) -> impl Iterator<Item = &Label> {
        [&self.number, &self.sign].into_iter().chain(self.occupants.as_ref())
    }
}

/// Stack the house number, sign and occupants around the region centroid.
pub fn place_labels(house: &House, centroid: DVec2, fonts: &FontSizes) -> HouseLabels {
    let line = |offset: f64| dvec2(centroid.x, centroid.y + fonts.base * offset);

    let is_ascendant = house.number == 1;
    let (sign_text, sign_role) = if is_ascendant {
        (format!("{}{}", house.sign.abbr(), defaults::ASCENDANT_MARK), LabelRole::AscendantSign)
    } else {
        (house.sign.abbr().to_string(), LabelRole::Sign)
    };

    let occupant_text = house.occupant_text();
    let occupants = (!occupant_text.is_empty()).then(|| Label {
        text: occupant_text,
        at: line(defaults::OCCUPANT_OFFSET),
        font_size: fonts.occupants,
        role: LabelRole::Occupants,
    });

    HouseLabels {
        number: Label {
            text: house.number.to_string(),
            at: line(defaults::HOUSE_NUMBER_OFFSET),
            font_size: fonts.house_number,
            role: LabelRole::HouseNumber,
        },
        sign: Label {
            text: sign_text,
            at: line(defaults::SIGN_OFFSET),
            font_size: fonts.base,
            role: sign_role,
        },
        occupants,
    }
}
