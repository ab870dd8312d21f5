//! Planet names as they appear in chart payloads, and the short codes drawn
//! inside house regions.

/// Names that mark the Ascendant placement rather than a planet.
pub const ASCENDANT_NAMES: [&str; 2] = ["Ascendant", "Lagna"];

/// Appended to an occupant code when the planet is retrograde.
pub const RETROGRADE_MARK: char = 'R';

/// Two-letter codes for the bodies a chart normally carries.
const PLANET_ABBR: [(&str, &str); 12] = [
    ("Sun", "Su"),
    ("Moon", "Mo"),
    ("Mars", "Ma"),
    ("Mercury", "Me"),
    ("Jupiter", "Ju"),
    ("Venus", "Ve"),
    ("Saturn", "Sa"),
    ("Rahu", "Ra"),
    ("Ketu", "Ke"),
    ("Uranus", "Ur"),
    ("Neptune", "Ne"),
    ("Pluto", "Pl"),
];

/// Whether `name` denotes the Ascendant (exact match on "Ascendant" or "Lagna").
pub fn is_ascendant(name: &str) -> bool {
    ASCENDANT_NAMES.contains(&name)
}

/// Short code for a body.
///
/// Known bodies use their fixed code; anything else uses its first two
/// characters, titlecased.
pub fn abbreviate(name: &str) -> String {
    if let Some((_, abbr)) = PLANET_ABBR.iter().find(|(planet, _)| *planet == name) {
        return (*abbr).to_string();
    }

    let mut chars = name.chars();
    let mut code = String::with_capacity(4);
    if let Some(first) = chars.next() {
        code.extend(first.to_uppercase());
    }
    if let Some(second) = chars.next() {
        code.extend(second.to_lowercase());
    }
    code
}

/// Occupant text for one placement: its code, suffixed with `R` when retrograde.
pub fn occupant_label(name: &str, retrograde: bool) -> String {
    let mut label = abbreviate(name);
    if retrograde {
        label.push(RETROGRADE_MARK);
    }
    label
}
