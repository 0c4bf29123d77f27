//! bodygraph - Human Design chart engine
//!
//! This library turns ecliptic longitudes into Human Design charts. It is
//! designed to be consumed by:
//! - The CLI binary (src/bin/bg.rs)
//! - Any host that can supply longitudes through the [`Ephemeris`] trait
//!
//! # Architecture
//!
//! This crate follows the "Library-First" pattern:
//! - **lib.rs** (this file): Entry points re-exported from `core`
//! - **core/**: Pure, synchronous engine over immutable tables
//! - **bin/bg.rs**: Thin wrapper that reads inputs and prints reports
//!
//! # Example
//!
//! ```
//! use bodygraph::{build_chart, decode, ActivationMap, Body, ChartType};
//!
//! let mut personality = ActivationMap::new();
//! personality.insert(Body::Sun, decode(10.0).unwrap());
//! personality.insert(Body::NorthNode, decode(200.0).unwrap());
//!
//! let mut design = ActivationMap::new();
//! design.insert(Body::Sun, decode(282.0).unwrap());
//! design.insert(Body::NorthNode, decode(201.0).unwrap());
//!
//! let chart = build_chart(personality, design).unwrap();
//! assert_eq!(chart.chart_type, ChartType::Reflector);
//! ```

pub mod core;

pub use crate::core::{
    build_chart, classify, compute_chart, decode, transit_chart, transit_composite, Activation,
    ActivationMap, Authority, Body, Center, ChartConfig, ChartError, ChartInput, ChartResult,
    ChartSide, ChartType, CompositeAnalysis, ConnectionKind, Definition, Ephemeris, Gate, Profile,
    Result, Snapshot, TransitInput,
};

/// Returns the version of the bodygraph library
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert_eq!(version(), env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn test_root_entry_points() {
        let activation = decode(3.875).unwrap();
        assert_eq!(activation.gate, 17);
        assert!(decode(f64::NAN).is_err());
    }
}
