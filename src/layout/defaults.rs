//! Default sizes and label metrics (all in pixels)

/// Side length of the chart when the caller does not choose one
pub const SIZE: f64 = 300.0;
/// Inset from each edge of the drawing to the outer square
pub const MARGIN: f64 = 2.0;

/// Sign labels are `size / FONT_DIVISOR`, never below `FONT_FLOOR`
pub const FONT_DIVISOR: f64 = 30.0;
pub const FONT_FLOOR: f64 = 8.0;
/// Occupant labels are `size / OCCUPANT_FONT_DIVISOR`, never below `OCCUPANT_FONT_FLOOR`
pub const OCCUPANT_FONT_DIVISOR: f64 = 35.0;
pub const OCCUPANT_FONT_FLOOR: f64 = 7.0;
/// House numbers relative to the sign font
pub const HOUSE_NUMBER_SCALE: f64 = 0.75;

/// Baseline offsets from the region centroid, in multiples of the sign font
pub const HOUSE_NUMBER_OFFSET: f64 = -0.8;
pub const SIGN_OFFSET: f64 = 0.3;
pub const OCCUPANT_OFFSET: f64 = 1.4;

/// Suffix on the house 1 sign label
pub const ASCENDANT_MARK: char = '*';
