//! Celestial bodies that produce activations
//!
//! Thirteen bodies are requested from the ephemeris; Earth and the South
//! Node are always derived as the opposite points of the Sun and the North
//! Node. Chiron and Black Moon Lilith are decoded and reported but never
//! contribute gates to the bodygraph.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A named celestial position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Body {
    Sun,
    Earth,
    Moon,
    #[serde(alias = "North Node")]
    NorthNode,
    #[serde(alias = "South Node")]
    SouthNode,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
    Chiron,
    #[serde(alias = "Black Moon Lilith", alias = "Lilith")]
    BlackMoonLilith,
}

impl Body {
    /// Bodies whose longitudes are requested from the ephemeris.
    pub const EPHEMERIS: [Body; 13] = [
        Body::Sun,
        Body::Moon,
        Body::NorthNode,
        Body::Mercury,
        Body::Venus,
        Body::Mars,
        Body::Jupiter,
        Body::Saturn,
        Body::Uranus,
        Body::Neptune,
        Body::Pluto,
        Body::Chiron,
        Body::BlackMoonLilith,
    ];

    /// Display order used by reports.
    pub const REPORT_ORDER: [Body; 15] = [
        Body::Sun,
        Body::Earth,
        Body::Moon,
        Body::Mercury,
        Body::Venus,
        Body::Mars,
        Body::Jupiter,
        Body::Saturn,
        Body::Uranus,
        Body::Neptune,
        Body::Pluto,
        Body::NorthNode,
        Body::SouthNode,
        Body::Chiron,
        Body::BlackMoonLilith,
    ];

    /// The bodies considered for the destiny map, in precedence order.
    pub const DESTINY_ORDER: [Body; 13] = [
        Body::Sun,
        Body::Earth,
        Body::NorthNode,
        Body::SouthNode,
        Body::Moon,
        Body::Mercury,
        Body::Venus,
        Body::Mars,
        Body::Jupiter,
        Body::Saturn,
        Body::Uranus,
        Body::Neptune,
        Body::Pluto,
    ];

    /// Human-readable name.
    pub fn label(&self) -> &'static str {
        match self {
            Body::Sun => "Sun",
            Body::Earth => "Earth",
            Body::Moon => "Moon",
            Body::NorthNode => "North Node",
            Body::SouthNode => "South Node",
            Body::Mercury => "Mercury",
            Body::Venus => "Venus",
            Body::Mars => "Mars",
            Body::Jupiter => "Jupiter",
            Body::Saturn => "Saturn",
            Body::Uranus => "Uranus",
            Body::Neptune => "Neptune",
            Body::Pluto => "Pluto",
            Body::Chiron => "Chiron",
            Body::BlackMoonLilith => "Black Moon Lilith",
        }
    }

    /// Whether this body's gate counts toward channels and centers.
    pub fn contributes_to_bodygraph(&self) -> bool {
        !matches!(self, Body::Chiron | Body::BlackMoonLilith)
    }

    /// The body this one is derived from, with its opposite point.
    pub fn derived_from(&self) -> Option<Body> {
        match self {
            Body::Earth => Some(Body::Sun),
            Body::SouthNode => Some(Body::NorthNode),
            _ => None,
        }
    }
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Which of the two instants of a chart an activation map belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartSide {
    /// The birth instant (conscious side)
    Personality,
    /// The instant ~88 solar degrees before birth (unconscious side)
    Design,
}

impl fmt::Display for ChartSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChartSide::Personality => f.write_str("personality"),
            ChartSide::Design => f.write_str("design"),
        }
    }
}

/// The point directly across the zodiac, in [0, 360).
pub fn opposite_point(longitude: f64) -> f64 {
    (longitude + 180.0).rem_euclid(360.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ephemeris_bodies_exclude_derived_points() {
        assert!(!Body::EPHEMERIS.contains(&Body::Earth));
        assert!(!Body::EPHEMERIS.contains(&Body::SouthNode));
        assert!(Body::EPHEMERIS.contains(&Body::NorthNode));
    }

    #[test]
    fn test_cosmetic_bodies_do_not_contribute() {
        assert!(!Body::Chiron.contributes_to_bodygraph());
        assert!(!Body::BlackMoonLilith.contributes_to_bodygraph());
        assert!(Body::Earth.contributes_to_bodygraph());
        assert!(Body::SouthNode.contributes_to_bodygraph());
    }

    #[test]
    fn test_opposite_point_wraps() {
        assert_eq!(opposite_point(10.0), 190.0);
        assert_eq!(opposite_point(200.0), 20.0);
        assert_eq!(opposite_point(180.0), 0.0);
    }

    #[test]
    fn test_body_serde_aliases() {
        let node: Body = serde_json::from_str("\"North Node\"").unwrap();
        assert_eq!(node, Body::NorthNode);
        let lilith: Body = serde_json::from_str("\"Black Moon Lilith\"").unwrap();
        assert_eq!(lilith, Body::BlackMoonLilith);
        assert_eq!(serde_json::to_string(&Body::SouthNode).unwrap(), "\"SouthNode\"");
    }

    #[test]
    fn test_derived_from() {
        assert_eq!(Body::Earth.derived_from(), Some(Body::Sun));
        assert_eq!(Body::SouthNode.derived_from(), Some(Body::NorthNode));
        assert_eq!(Body::Moon.derived_from(), None);
    }
}
