//! Text views of a chart payload shown alongside the diagram.

use crate::payload::{Aspect, Planet};

/// Sun and Moon signs, as sent upstream
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeySigns {
    pub sun: Option<String>,
    pub moon: Option<String>,
}

/// Look up the Sun and Moon signs. The first placement with each name wins.
pub fn key_signs(planets: &[Planet]) -> KeySigns {
    let sign_of = |name: &str| planets.iter().find(|p| p.name == name).map(|p| p.sign.clone());
    KeySigns {
        sun: sign_of("Sun"),
        moon: sign_of("Moon"),
    }
}

/// One row of the planetary positions table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionRow {
    /// Planet name, with ` (R)` when retrograde
    pub planet: String,
    /// Sign and degree, e.g. `Leo 11.0°`
    pub position: String,
}

pub fn position_rows(planets: &[Planet]) -> Vec<PositionRow> {
    planets
        .iter()
        .map(|p| PositionRow {
            planet: if p.retrograde {
                format!("{} (R)", p.name)
            } else {
                p.name.clone()
            },
            position: format!("{} {:.1}°", p.sign, p.degree_in_sign),
        })
        .collect()
}

/// `Sun Trine Moon, orb 2.5°`, one line per aspect in input order
pub fn aspect_lines(aspects: &[Aspect]) -> Vec<String> {
    aspects
        .iter()
        .map(|a| format!("{} {} {}, orb {}°", a.planet1, a.aspect, a.planet2, a.orb))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_signs_found_and_missing() {
        let planets = [Planet::new("Sun", "Leo", false), Planet::new("Mars", "Aries", false)];
        let keys = key_signs(&planets);
        assert_eq!(keys.sun.as_deref(), Some("Leo"));
        assert_eq!(keys.moon, None);
    }

    #[test]
    fn position_rows_tag_retrograde_and_round_degree() {
        let mut saturn = Planet::new("Saturn", "Aquarius", true);
        saturn.degree_in_sign = 17.46;
        let rows = position_rows(&[saturn]);
        assert_eq!(rows[0].planet, "Saturn (R)");
        assert_eq!(rows[0].position, "Aquarius 17.5°");
    }

    #[test]
    fn aspect_lines_keep_order() {
        let aspects = [
            Aspect {
                planet1: "Sun".into(),
                planet2: "Moon".into(),
                aspect: "Trine".into(),
                angle: 120.0,
                orb: 2.5,
            },
            Aspect {
                planet1: "Mars".into(),
                planet2: "Saturn".into(),
                aspect: "Square".into(),
                angle: 90.0,
                orb: 1.0,
            },
        ];
        assert_eq!(
            aspect_lines(&aspects),
            vec!["Sun Trine Moon, orb 2.5°", "Mars Square Saturn, orb 1°"]
        );
    }
}
