//! Position snapshots
//!
//! A snapshot is the raw material of one side of a chart: ecliptic
//! longitudes per body and, when the birth place is known, the chart angles.
//! Decoding a snapshot derives the opposite points (Earth, South Node),
//! decodes every longitude and attaches whole-sign houses.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::activation::decode;
use super::bodies::{opposite_point, Body, ChartSide};
use super::chart::{build_chart, ActivationMap, ChartResult};
use super::error::{ChartError, Result, ResultExt};
use super::zodiac::whole_sign_house;

/// Geographic position of an event.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    pub latitude: f64,
    pub longitude: f64,
}

/// Ascendant, midheaven and optional vertex, in ecliptic degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartAngles {
    pub ascendant: f64,
    pub midheaven: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vertex: Option<f64>,
}

impl ChartAngles {
    pub fn new(ascendant: f64, midheaven: f64) -> Self {
        Self {
            ascendant,
            midheaven,
            vertex: None,
        }
    }

    pub fn with_vertex(mut self, vertex: f64) -> Self {
        self.vertex = Some(vertex);
        self
    }

    pub fn descendant(&self) -> f64 {
        opposite_point(self.ascendant)
    }

    pub fn imum_coeli(&self) -> f64 {
        opposite_point(self.midheaven)
    }
}

/// Longitudes of one instant.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Snapshot {
    pub positions: BTreeMap<Body, f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub angles: Option<ChartAngles>,
}

impl Snapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_position(mut self, body: Body, longitude: f64) -> Self {
        self.positions.insert(body, longitude);
        self
    }

    pub fn with_angles(mut self, angles: ChartAngles) -> Self {
        self.angles = Some(angles);
        self
    }

    pub fn longitude(&self, body: Body) -> Option<f64> {
        self.positions.get(&body).copied()
    }

    /// Positions plus the derived opposite points that were not given explicitly.
    pub fn with_derived_points(&self) -> BTreeMap<Body, f64> {
        let mut longitudes = self.positions.clone();
        for derived in [Body::Earth, Body::SouthNode] {
            if longitudes.contains_key(&derived) {
                continue;
            }
            if let Some(source) = derived.derived_from().and_then(|b| self.longitude(b)) {
                longitudes.insert(derived, opposite_point(source));
            }
        }
        longitudes
    }

    /// Decode every position into an activation map.
    pub fn decode(&self, side: ChartSide) -> Result<ActivationMap> {
        if self.positions.is_empty() {
            return Err(ChartError::invalid_input(format!(
                "{} snapshot has no positions",
                side
            )));
        }
        let ascendant = match self.angles {
            Some(angles) if !angles.ascendant.is_finite() => {
                return Err(ChartError::InvalidLongitude {
                    value: angles.ascendant,
                }
                .with_context(format!("{} ascendant", side)));
            }
            Some(angles) => Some(angles.ascendant),
            None => None,
        };

        self.with_derived_points()
            .into_iter()
            .map(|(body, longitude)| {
                let activation = decode(longitude).context(format!("{} {}", side, body))?;
                let activation = match ascendant {
                    Some(asc) => activation.with_house(whole_sign_house(longitude, asc)),
                    None => activation,
                };
                Ok((body, activation))
            })
            .collect()
    }
}

/// A chart input document: the two snapshots of one subject plus metadata.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ChartInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birth: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub design_instant: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<GeoLocation>,
    pub personality: Snapshot,
    pub design: Snapshot,
}

impl ChartInput {
    pub fn new(personality: Snapshot, design: Snapshot) -> Self {
        Self {
            personality,
            design,
            ..Self::default()
        }
    }

    /// Read a JSON input document.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            ChartError::from(e).with_context(format!("reading {}", path.display()))
        })?;
        Self::from_json(&content).context(format!("parsing {}", path.display()))
    }

    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Display name, falling back to `default`.
    pub fn display_name<'a>(&'a self, default: &'a str) -> &'a str {
        self.name.as_deref().unwrap_or(default)
    }

    /// Decode both snapshots and build the chart.
    pub fn build(&self) -> Result<ChartResult> {
        let personality = self.personality.decode(ChartSide::Personality)?;
        let design = self.design.decode(ChartSide::Design)?;
        build_chart(personality, design)
    }
}
