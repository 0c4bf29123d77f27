//! Transit charts
//!
//! A transit is the sky of one instant read as a chart of its own. It has
//! no design side, so the Sun and North Node of the instant stand in for
//! it; every gate and channel comes from the transit positions alone. A
//! transit laid over a natal chart goes through the composite classifier.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::bodies::{Body, ChartSide};
use super::chart::{build_chart, ActivationMap, ChartResult};
use super::composite::{classify, CompositeAnalysis};
use super::ephemeris::{snapshot_at, Ephemeris};
use super::error::{ChartError, Result, ResultExt};
use super::snapshot::{GeoLocation, Snapshot};
use super::zodiac::{sign_index, ZodiacSign};

/// Bodies counted toward a stellium.
pub const STELLIUM_BODIES: [Body; 10] = [
    Body::Sun,
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

/// Fewest bodies sharing a sign that make a stellium.
pub const STELLIUM_MIN_BODIES: usize = 3;

/// Three or more of the classical bodies in one sign.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stellium {
    pub sign: ZodiacSign,
    /// In [`STELLIUM_BODIES`] order
    pub bodies: Vec<Body>,
}

/// Stelliums of one activation map, in zodiac order.
pub fn stelliums(map: &ActivationMap) -> Vec<Stellium> {
    let mut by_sign: [Vec<Body>; 12] = Default::default();
    for body in STELLIUM_BODIES {
        if let Some(activation) = map.get(&body) {
            by_sign[sign_index(activation.longitude)].push(body);
        }
    }

    ZodiacSign::ALL
        .into_iter()
        .zip(by_sign)
        .filter(|(_, bodies)| bodies.len() >= STELLIUM_MIN_BODIES)
        .map(|(sign, bodies)| Stellium { sign, bodies })
        .collect()
}

/// Chart of a single instant.
///
/// The design side is a copy of the instant's Sun and North Node, so the
/// profile and variables read the same activation twice.
pub fn transit_chart(snapshot: &Snapshot) -> Result<ChartResult> {
    let personality = snapshot.decode(ChartSide::Personality)?;
    let design: ActivationMap = [Body::Sun, Body::NorthNode]
        .into_iter()
        .filter_map(|body| personality.get(&body).map(|activation| (body, *activation)))
        .collect();
    build_chart(personality, design)
}

/// A natal chart and a transit classified together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitComposite {
    /// `"Transit Composite (<code>)"`
    pub definition: String,
    pub analysis: CompositeAnalysis,
}

/// Classify a transit against a natal chart; the natal chart is person A.
pub fn transit_composite(natal: &ChartResult, transit: &ChartResult) -> TransitComposite {
    let analysis = classify(natal, transit);
    let definition = format!("Transit Composite ({})", analysis.centers.code);
    debug!(
        channels = analysis.channels.len(),
        code = %analysis.centers.code,
        "classified transit"
    );
    TransitComposite {
        definition,
        analysis,
    }
}

/// Transit computed from an ephemeris.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculatedTransit {
    pub at: DateTime<Utc>,
    pub snapshot: Snapshot,
    pub chart: ChartResult,
}

pub fn compute_transit<E: Ephemeris + ?Sized>(
    ephemeris: &E,
    at: DateTime<Utc>,
    location: Option<&GeoLocation>,
) -> Result<CalculatedTransit> {
    let snapshot = snapshot_at(ephemeris, at, location)?;
    let chart = transit_chart(&snapshot).context(format!("transit at {}", at.to_rfc3339()))?;
    Ok(CalculatedTransit {
        at,
        snapshot,
        chart,
    })
}

/// A transit input document: one snapshot plus metadata.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TransitInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<GeoLocation>,
    pub transit: Snapshot,
}

impl TransitInput {
    pub fn new(transit: Snapshot) -> Self {
        Self {
            transit,
            ..Self::default()
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            ChartError::from(e).with_context(format!("reading {}", path.display()))
        })?;
        Self::from_json(&content).context(format!("parsing {}", path.display()))
    }

    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn display_name<'a>(&'a self, default: &'a str) -> &'a str {
        self.name.as_deref().unwrap_or(default)
    }

    pub fn build(&self) -> Result<ChartResult> {
        transit_chart(&self.transit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::chart::ChartType;
    use crate::core::composite::{ConnectionKind, Origin};
    use crate::core::ephemeris::MockEphemeris;
    use crate::core::tables::Center;
    use chrono::TimeZone;

    /// Sun, Mercury and Venus in Aries; Venus and Mars close 3-60.
    fn sky() -> Snapshot {
        Snapshot::new()
            .with_position(Body::Sun, 10.0)
            .with_position(Body::Mercury, 15.0)
            .with_position(Body::Venus, 26.875)
            .with_position(Body::Moon, 59.0)
            .with_position(Body::NorthNode, 120.0)
            .with_position(Body::Mars, 300.0)
            .with_position(Body::Jupiter, 285.625)
    }

    #[test]
    fn test_transit_chart_reads_one_side() {
        let chart = transit_chart(&sky()).unwrap();
        assert_eq!(chart.design.len(), 2);
        assert_eq!(chart.design[&Body::Sun], chart.personality[&Body::Sun]);
        assert_eq!(chart.design[&Body::NorthNode], chart.personality[&Body::NorthNode]);
        assert_eq!(chart.active_channels, vec!["3-60"]);
        assert_eq!(chart.chart_type, ChartType::Generator);
        assert_eq!(chart.modality, "Cardinal");
    }

    #[test]
    fn test_transit_chart_needs_sun() {
        let snapshot = Snapshot::new().with_position(Body::NorthNode, 120.0);
        assert!(matches!(
            transit_chart(&snapshot),
            Err(ChartError::MissingActivation {
                body: Body::Sun,
                chart: ChartSide::Personality
            })
        ));
    }

    #[test]
    fn test_stellium_in_aries() {
        let chart = transit_chart(&sky()).unwrap();
        let found = stelliums(&chart.personality);
        assert_eq!(
            found,
            vec![Stellium {
                sign: ZodiacSign::Aries,
                bodies: vec![Body::Sun, Body::Mercury, Body::Venus],
            }]
        );
    }

    #[test]
    fn test_stellium_ignores_points() {
        // Earth, nodes, Chiron and Lilith never count
        let map = Snapshot::new()
            .with_position(Body::Sun, 100.0)
            .with_position(Body::NorthNode, 101.0)
            .with_position(Body::Chiron, 102.0)
            .with_position(Body::BlackMoonLilith, 103.0)
            .with_position(Body::Moon, 104.0)
            .decode(ChartSide::Personality)
            .unwrap();
        assert!(stelliums(&map).is_empty());
    }

    #[test]
    fn test_several_stelliums_in_zodiac_order() {
        let mut snapshot = Snapshot::new();
        for (body, longitude) in STELLIUM_BODIES.iter().zip([
            200.0, 201.0, 202.0, 203.0, 5.0, 6.0, 7.0, 8.0, 300.0, 301.0,
        ]) {
            snapshot = snapshot.with_position(*body, longitude);
        }
        let signs: Vec<ZodiacSign> = stelliums(&snapshot.decode(ChartSide::Personality).unwrap())
            .into_iter()
            .map(|s| s.sign)
            .collect();
        assert_eq!(signs, vec![ZodiacSign::Aries, ZodiacSign::Libra]);
    }

    #[test]
    fn test_transit_composite_definition_label() {
        let transit = transit_chart(&sky()).unwrap();
        let natal = Snapshot::new()
            .with_position(Body::Sun, 285.0)
            .with_position(Body::NorthNode, 200.0);
        let natal = transit_chart(&natal).unwrap();

        let composite = transit_composite(&natal, &transit);
        assert_eq!(
            composite.definition,
            format!("Transit Composite ({})", composite.analysis.centers.code)
        );
        let channel = composite.analysis.find("3-60").unwrap();
        assert_eq!(channel.kind, ConnectionKind::Dominance);
        assert_eq!(channel.origin, Origin::B);
        assert_eq!(
            composite.analysis.centers.origin_of(Center::Sacral),
            Some(Origin::B)
        );
    }

    #[test]
    fn test_compute_transit_uses_one_snapshot() {
        let at = Utc.with_ymd_and_hms(2024, 3, 20, 3, 6, 0).unwrap();
        let mut mock = MockEphemeris::new();
        mock.expect_longitude()
            .withf(move |_, when| *when == at)
            .times(13)
            .returning(|body, _| Ok(if body == Body::Sun { 10.0 } else { 120.0 }));
        mock.expect_angles().never();

        let transit = compute_transit(&mock, at, None).unwrap();
        assert_eq!(transit.at, at);
        assert_eq!(transit.snapshot.positions.len(), 13);
        assert_eq!(transit.chart.personality[&Body::Sun].gate, 21);
    }

    #[test]
    fn test_transit_input_from_json() {
        let json = r#"{
            "at": "2024-03-20T03:06:00Z",
            "transit": { "positions": { "Sun": 10.0, "North Node": 120.0 } }
        }"#;
        let input = TransitInput::from_json(json).unwrap();
        assert_eq!(input.display_name("Transit"), "Transit");
        assert!(input.at.is_some());
        assert_eq!(input.build().unwrap().personality[&Body::Sun].gate, 21);
    }

    #[test]
    fn test_empty_transit_is_invalid_input() {
        let err = TransitInput::new(Snapshot::new()).build().unwrap_err();
        assert!(err.is_invalid_input());
    }
}
