//! Colors and stroke widths for the rendered chart

/// Palette and line weights. `Default` is the dark app palette.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    /// Region outlines and diagonals
    pub border: String,
    /// Outer square and inner diamond
    pub frame: String,
    /// Sign labels
    pub text: String,
    /// House numbers
    pub text_muted: String,
    /// Ascendant sign and occupant labels
    pub accent: String,
    pub region_stroke_width: f64,
    pub outer_stroke_width: f64,
    pub diamond_stroke_width: f64,
    pub diagonal_stroke_width: f64,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            border: "#2D2248".to_string(),
            frame: "#A78BFA".to_string(),
            text: "#F5F3FF".to_string(),
            text_muted: "#A8A0B8".to_string(),
            accent: "#F59E0B".to_string(),
            region_stroke_width: 1.2,
            outer_stroke_width: 2.0,
            diamond_stroke_width: 1.5,
            diagonal_stroke_width: 1.0,
        }
    }
}

impl Theme {
    /// Black lines and text on a transparent background, for print
    pub fn monochrome() -> Self {
        Self {
            border: "#000000".to_string(),
            frame: "#000000".to_string(),
            text: "#000000".to_string(),
            text_muted: "#555555".to_string(),
            accent: "#000000".to_string(),
            ..Self::default()
        }
    }
}
