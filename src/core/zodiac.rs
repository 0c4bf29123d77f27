//! Zodiac signs, modalities, whole-sign houses and degree formatting

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

impl ZodiacSign {
    pub const ALL: [ZodiacSign; 12] = [
        ZodiacSign::Aries,
        ZodiacSign::Taurus,
        ZodiacSign::Gemini,
        ZodiacSign::Cancer,
        ZodiacSign::Leo,
        ZodiacSign::Virgo,
        ZodiacSign::Libra,
        ZodiacSign::Scorpio,
        ZodiacSign::Sagittarius,
        ZodiacSign::Capricorn,
        ZodiacSign::Aquarius,
        ZodiacSign::Pisces,
    ];

    /// The sign containing `longitude`; any finite value is wrapped first.
    pub fn of(longitude: f64) -> Self {
        Self::ALL[sign_index(longitude)]
    }

    pub fn name(&self) -> &'static str {
        match self {
            ZodiacSign::Aries => "Aries",
            ZodiacSign::Taurus => "Taurus",
            ZodiacSign::Gemini => "Gemini",
            ZodiacSign::Cancer => "Cancer",
            ZodiacSign::Leo => "Leo",
            ZodiacSign::Virgo => "Virgo",
            ZodiacSign::Libra => "Libra",
            ZodiacSign::Scorpio => "Scorpio",
            ZodiacSign::Sagittarius => "Sagittarius",
            ZodiacSign::Capricorn => "Capricorn",
            ZodiacSign::Aquarius => "Aquarius",
            ZodiacSign::Pisces => "Pisces",
        }
    }
}

impl fmt::Display for ZodiacSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Sign index 0..12 of a longitude.
pub fn sign_index(longitude: f64) -> usize {
    ((longitude.rem_euclid(360.0) / 30.0).floor() as usize) % 12
}

/// Cardinal, fixed or mutable quality of a sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Modality {
    Cardinal,
    Fixed,
    Mutable,
}

impl Modality {
    /// `floor(longitude / 30) mod 3`: Aries is cardinal, Taurus fixed, Gemini mutable.
    pub fn of(longitude: f64) -> Self {
        match sign_index(longitude) % 3 {
            0 => Modality::Cardinal,
            1 => Modality::Fixed,
            _ => Modality::Mutable,
        }
    }
}

impl fmt::Display for Modality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Modality::Cardinal => f.write_str("Cardinal"),
            Modality::Fixed => f.write_str("Fixed"),
            Modality::Mutable => f.write_str("Mutable"),
        }
    }
}

/// Whole-sign house 1..=12 of `longitude` counted from the ascendant's sign.
pub fn whole_sign_house(longitude: f64, ascendant: f64) -> u8 {
    let planet = sign_index(longitude);
    let asc = sign_index(ascendant);
    (((planet + 12 - asc) % 12) + 1) as u8
}

/// In-sign position as `D°MM'SS"`, carrying rounded seconds and minutes.
pub fn format_degrees(longitude: f64) -> String {
    let in_sign = longitude.rem_euclid(30.0);
    let mut degrees = in_sign.floor() as u32;
    let total_minutes = (in_sign - degrees as f64) * 60.0;
    let mut minutes = total_minutes.floor() as u32;
    let mut seconds = ((total_minutes - minutes as f64) * 60.0).round() as u32;

    if seconds == 60 {
        seconds = 0;
        minutes += 1;
    }
    if minutes == 60 {
        minutes = 0;
        degrees += 1;
    }

    format!("{}°{:02}'{:02}\"", degrees, minutes, seconds)
}
