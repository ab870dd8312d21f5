//! Chart payload as returned by the upstream API.
//!
//! Planet longitudes and aspects are carried through untouched; only the
//! sign and retrograde flag of each planet feed house assignment.

use serde::{Deserialize, Serialize};

use crate::errors::ChartError;
use crate::zodiac::Sign;

/// One planet placement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Planet {
    pub name: String,
    #[serde(default)]
    pub longitude: f64,
    /// Sign name as sent upstream; not guaranteed to be a canonical sign.
    pub sign: String,
    #[serde(default)]
    pub degree_in_sign: f64,
    #[serde(default)]
    pub retrograde: bool,
}

impl Planet {
    /// Convenience constructor for a placement with only the fields house
    /// assignment reads.
    pub fn new(name: impl Into<String>, sign: impl Into<String>, retrograde: bool) -> Self {
        Self {
            name: name.into(),
            longitude: 0.0,
            sign: sign.into(),
            degree_in_sign: 0.0,
            retrograde,
        }
    }

    /// The canonical sign, if the payload's sign string names one.
    pub fn zodiac_sign(&self) -> Option<Sign> {
        Sign::from_name(&self.sign)
    }
}

/// An aspect between two planets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Aspect {
    pub planet1: String,
    pub planet2: String,
    pub aspect: String,
    pub angle: f64,
    pub orb: f64,
}

/// The computed chart: placements plus aspects
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ChartData {
    #[serde(default)]
    pub planets: Vec<Planet>,
    #[serde(default)]
    pub aspects: Vec<Aspect>,
    #[serde(default)]
    pub ayanamsa: Option<String>,
    #[serde(default)]
    pub julian_day: Option<f64>,
}

impl ChartData {
    pub fn from_json(json: &str) -> Result<Self, ChartError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// A stored birth chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BirthChart {
    pub id: String,
    pub chart_data: ChartData,
    #[serde(default)]
    pub ayanamsa: Option<String>,
}

impl BirthChart {
    pub fn from_json(json: &str) -> Result<Self, ChartError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Current planetary positions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transits {
    pub timestamp: String,
    #[serde(default)]
    pub planets: Vec<Planet>,
}

impl Transits {
    pub fn from_json(json: &str) -> Result<Self, ChartError> {
        Ok(serde_json::from_str(json)?)
    }
}
