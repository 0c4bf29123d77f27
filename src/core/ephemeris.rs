//! Ephemeris seam and the design-instant solver
//!
//! The engine never computes astronomy itself. An [`Ephemeris`]
//! implementation supplies longitudes and chart angles; this module turns
//! those into snapshots, finds the design instant and runs the full chart
//! pipeline.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::bodies::{Body, ChartSide};
use super::chart::{build_chart, ChartResult};
use super::config::ChartConfig;
use super::error::{ChartError, Result, ResultExt};
use super::snapshot::{ChartAngles, GeoLocation, Snapshot};

#[cfg(test)]
use mockall::automock;

const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Source of celestial positions.
#[cfg_attr(test, automock)]
pub trait Ephemeris {
    /// Geocentric ecliptic longitude of `body` at `at`, in degrees.
    fn longitude(&self, body: Body, at: DateTime<Utc>) -> Result<f64>;

    /// Chart angles for an instant and place, when they can be computed.
    fn angles(&self, at: DateTime<Utc>, location: &GeoLocation) -> Option<ChartAngles>;
}

/// Longitudes of every ephemeris body at `at`, plus angles when a location is given.
pub fn snapshot_at<E: Ephemeris + ?Sized>(
    ephemeris: &E,
    at: DateTime<Utc>,
    location: Option<&GeoLocation>,
) -> Result<Snapshot> {
    let mut snapshot = Snapshot::new();
    for body in Body::EPHEMERIS {
        let longitude = ephemeris
            .longitude(body, at)
            .context(format!("{} at {}", body, at.to_rfc3339()))?;
        snapshot.positions.insert(body, longitude);
    }
    snapshot.angles = location.and_then(|loc| ephemeris.angles(at, loc));
    Ok(snapshot)
}

/// Signed shortest difference `to - from`, in (-180, 180].
fn signed_difference(from: f64, to: f64) -> f64 {
    let diff = (to - from).rem_euclid(360.0);
    if diff > 180.0 {
        diff - 360.0
    } else {
        diff
    }
}

/// Largest step the solver takes, about a thousand years.
const MAX_STEP_DAYS: f64 = 366_000.0;

fn days(amount: f64) -> Result<Duration> {
    if !amount.is_finite() || amount.abs() > MAX_STEP_DAYS {
        return Err(ChartError::invalid_input(format!(
            "solver step of {} days is out of range",
            amount
        )));
    }
    Ok(Duration::milliseconds((amount * MILLIS_PER_DAY).round() as i64))
}

fn shift(instant: DateTime<Utc>, amount: f64) -> Result<DateTime<Utc>> {
    instant
        .checked_add_signed(days(amount)?)
        .ok_or_else(|| {
            ChartError::invalid_input(format!(
                "{} shifted by {} days is outside the supported date range",
                instant.to_rfc3339(),
                amount
            ))
        })
}

/// Find the instant when the Sun stood `design_arc_degrees` before its birth position.
///
/// Starts one day per degree before birth and steps by the remaining solar
/// arc read as days, which converges because the Sun moves about a degree a
/// day. Returns the last estimate when the iteration limit is hit.
pub fn design_instant<E: Ephemeris + ?Sized>(
    ephemeris: &E,
    birth: DateTime<Utc>,
    birth_sun: f64,
    config: &ChartConfig,
) -> Result<DateTime<Utc>> {
    if !birth_sun.is_finite() {
        return Err(ChartError::InvalidLongitude { value: birth_sun });
    }
    config.validate()?;

    let target = (birth_sun - config.design_arc_degrees).rem_euclid(360.0);
    let mut instant = shift(birth, -config.design_arc_degrees)?;

    for iteration in 0..config.solver_iterations {
        let sun = ephemeris
            .longitude(Body::Sun, instant)
            .context("solving design instant")?;
        let diff = signed_difference(sun, target);
        if diff.abs() < config.solver_tolerance {
            debug!(iteration, residual = diff, "design instant converged");
            return Ok(instant);
        }
        instant = shift(instant, diff)?;
    }

    debug!(
        iterations = config.solver_iterations,
        "design instant iteration limit reached"
    );
    Ok(instant)
}

/// Output of the full pipeline for one subject.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculatedChart {
    pub birth: DateTime<Utc>,
    pub design_instant: DateTime<Utc>,
    pub personality: Snapshot,
    pub design: Snapshot,
    pub chart: ChartResult,
}

/// Personality snapshot, design instant, design snapshot, chart.
pub fn compute_chart<E: Ephemeris + ?Sized>(
    ephemeris: &E,
    birth: DateTime<Utc>,
    location: Option<&GeoLocation>,
    config: &ChartConfig,
) -> Result<CalculatedChart> {
    let personality = snapshot_at(ephemeris, birth, location)?;
    let birth_sun = personality
        .longitude(Body::Sun)
        .ok_or(ChartError::MissingActivation {
            body: Body::Sun,
            chart: ChartSide::Personality,
        })?;

    let design_at = design_instant(ephemeris, birth, birth_sun, config)?;
    let design = snapshot_at(ephemeris, design_at, location)?;

    let chart = build_chart(
        personality.decode(ChartSide::Personality)?,
        design.decode(ChartSide::Design)?,
    )?;

    Ok(CalculatedChart {
        birth,
        design_instant: design_at,
        personality,
        design,
        chart,
    })
}
