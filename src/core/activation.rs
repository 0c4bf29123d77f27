//! Activation decoding
//!
//! Maps an ecliptic longitude onto the wheel and splits it into the five
//! nested levels gate → line → color → tone → base. Each level is the floor
//! of the remainder of the previous level divided by a fixed arc, so a
//! longitude exactly on a boundary always belongs to the lower division.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::{ChartError, Result};
use super::tables::{Gate, GATE_COUNT, WHEEL};

/// Offset between 0° Aries and the lower edge of the first wheel gate.
pub const WHEEL_OFFSET: f64 = 3.875;
/// Arc of one gate.
pub const DEGREES_PER_GATE: f64 = 5.625;
/// Arc of one line.
pub const DEGREES_PER_LINE: f64 = 0.9375;
/// Arc of one color.
pub const DEGREES_PER_COLOR: f64 = 0.15625;
/// Arc of one tone.
pub const DEGREES_PER_TONE: f64 = DEGREES_PER_COLOR / 6.0;
/// Arc of one base.
pub const DEGREES_PER_BASE: f64 = DEGREES_PER_TONE / 5.0;

const FULL_CIRCLE: f64 = 360.0;

/// A decoded position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Activation {
    /// Gate, 1..=64
    pub gate: Gate,
    /// Line, 1..=6
    pub line: u8,
    /// Color, 1..=6
    pub color: u8,
    /// Tone, 1..=6
    pub tone: u8,
    /// Base, 1..=5
    pub base: u8,
    /// The longitude that was decoded, as given
    pub longitude: f64,
    /// Whole-sign house, when an ascendant was known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub house: Option<u8>,
}

impl Activation {
    /// Build an activation from already-known levels.
    pub fn new(gate: Gate, line: u8, color: u8, tone: u8, base: u8, longitude: f64) -> Self {
        Self {
            gate,
            line,
            color,
            tone,
            base,
            longitude,
            house: None,
        }
    }

    /// Attach a whole-sign house number.
    pub fn with_house(mut self, house: u8) -> Self {
        self.house = Some(house);
        self
    }

    /// Left for tones 1-3, Right for tones 4-6.
    pub fn orientation(&self) -> Orientation {
        Orientation::from_tone(self.tone)
    }
}

impl fmt::Display for Activation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.gate, self.line)
    }
}

/// Orientation of a variable arrow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    Left,
    Right,
}

impl Orientation {
    pub fn from_tone(tone: u8) -> Self {
        if tone <= 3 {
            Orientation::Left
        } else {
            Orientation::Right
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::Left => f.write_str("Left"),
            Orientation::Right => f.write_str("Right"),
        }
    }
}

/// Index into the next finer level: floor of remainder / arc, 1-based,
/// clamped so float noise at the top of a division cannot overflow it.
fn level(remainder: f64, arc: f64, max: u8) -> u8 {
    let index = (remainder / arc).floor() as u8 + 1;
    index.min(max)
}

/// Decode a longitude in degrees into its activation.
///
/// Any finite value is accepted; it is wrapped onto the circle first.
pub fn decode(longitude: f64) -> Result<Activation> {
    if !longitude.is_finite() {
        return Err(ChartError::InvalidLongitude { value: longitude });
    }

    let mut adjusted = (longitude - WHEEL_OFFSET).rem_euclid(FULL_CIRCLE);
    // rem_euclid rounds tiny negative inputs up to exactly 360.0
    if adjusted >= FULL_CIRCLE {
        adjusted -= FULL_CIRCLE;
    }

    let index = ((adjusted / DEGREES_PER_GATE).floor() as usize).min(GATE_COUNT - 1);
    let gate = WHEEL[index];

    let line_remainder = adjusted % DEGREES_PER_GATE;
    let line = level(line_remainder, DEGREES_PER_LINE, 6);

    let color_remainder = line_remainder % DEGREES_PER_LINE;
    let color = level(color_remainder, DEGREES_PER_COLOR, 6);

    let tone_remainder = color_remainder % DEGREES_PER_COLOR;
    let tone = level(tone_remainder, DEGREES_PER_TONE, 6);

    let base_remainder = tone_remainder % DEGREES_PER_TONE;
    let base = level(base_remainder, DEGREES_PER_BASE, 5);

    Ok(Activation::new(gate, line, color, tone, base, longitude))
}

/// The arc a gate occupies on the wheel, as `(start, end)` longitudes in
/// [0, 360). `start` is inclusive; `end` is exclusive and may be smaller
/// than `start` for the gate that straddles 0° Aries.
pub fn gate_arc(gate: Gate) -> Option<(f64, f64)> {
    let index = WHEEL.iter().position(|&g| g == gate)?;
    let start = (WHEEL_OFFSET + index as f64 * DEGREES_PER_GATE).rem_euclid(FULL_CIRCLE);
    let end = (start + DEGREES_PER_GATE).rem_euclid(FULL_CIRCLE);
    Some((start, end))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_first_wheel_gate() {
        let a = decode(WHEEL_OFFSET).unwrap();
        assert_eq!(a.gate, 17);
        assert_eq!((a.line, a.color, a.tone, a.base), (1, 1, 1, 1));
        assert_eq!(a.longitude, WHEEL_OFFSET);
        assert_eq!(a.house, None);
    }

    #[test]
    fn test_decode_zero_aries() {
        // 0° Aries sits 1.75° into gate 25
        let a = decode(0.0).unwrap();
        assert_eq!(a.gate, 25);
        assert_eq!(a.line, 2);
        assert_eq!(a.color, 6);
    }

    #[test]
    fn test_decode_line_boundary_uses_floor() {
        let a = decode(WHEEL_OFFSET + DEGREES_PER_LINE).unwrap();
        assert_eq!(a.gate, 17);
        assert_eq!(a.line, 2);
        assert_eq!(a.color, 1);
    }

    #[test]
    fn test_decode_wraps_large_and_negative() {
        let base = decode(100.0).unwrap();
        let wrapped = decode(460.0).unwrap();
        let negative = decode(-260.0).unwrap();
        assert_eq!(base.gate, wrapped.gate);
        assert_eq!(base.line, wrapped.line);
        assert_eq!(base.gate, negative.gate);
        assert_eq!(base.line, negative.line);
        assert_eq!(wrapped.longitude, 460.0);
    }

    #[test]
    fn test_decode_last_sliver_before_offset() {
        let a = decode(WHEEL_OFFSET - 1e-9).unwrap();
        assert_eq!(a.gate, 25);
        assert_eq!(a.line, 6);
    }

    #[test]
    fn test_decode_rejects_non_finite() {
        assert!(matches!(
            decode(f64::NAN),
            Err(ChartError::InvalidLongitude { .. })
        ));
        assert!(decode(f64::INFINITY).is_err());
        assert!(decode(f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn test_orientation_from_tone() {
        assert_eq!(Orientation::from_tone(1), Orientation::Left);
        assert_eq!(Orientation::from_tone(3), Orientation::Left);
        assert_eq!(Orientation::from_tone(4), Orientation::Right);
        assert_eq!(Orientation::from_tone(6), Orientation::Right);
    }

    #[test]
    fn test_gate_arc() {
        assert_eq!(gate_arc(17), Some((3.875, 9.5)));
        let (start, end) = gate_arc(25).unwrap();
        assert_eq!(start, 358.25);
        assert_eq!(end, 3.875);
        assert_eq!(gate_arc(0), None);
    }

    #[test]
    fn test_activation_display() {
        let a = Activation::new(10, 4, 1, 1, 1, 0.0);
        assert_eq!(a.to_string(), "10.4");
    }
}
