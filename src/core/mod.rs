//! Core module for the bodygraph engine
//!
//! # Architecture
//!
//! - `tables`: Static domain model (wheel, centers, channels, profiles, crosses)
//! - `activation`: Longitude to gate/line/color/tone/base decoding
//! - `bodies`: Celestial bodies and derived opposite points
//! - `zodiac`: Signs, modality, whole-sign houses
//! - `chart`: Chart properties engine (center graph, type, authority, definition)
//! - `composite`: Two-chart composite classifier
//! - `snapshot`: Raw longitude snapshots and chart input documents
//! - `ephemeris`: Ephemeris seam and design-instant solver
//! - `transit`: Single-instant transit charts, stelliums, natal-vs-transit composites
//! - `report`: Plain-text reports
//! - `config`: Configuration loading
//! - `error`: Error types using thiserror

pub mod activation;
pub mod bodies;
pub mod chart;
pub mod composite;
pub mod config;
pub mod ephemeris;
pub mod error;
pub mod report;
pub mod snapshot;
pub mod tables;
pub mod transit;
pub mod zodiac;

// Re-export commonly used types
pub use activation::{decode, gate_arc, Activation, Orientation};
pub use bodies::{opposite_point, Body, ChartSide};
pub use chart::{
    build_chart, ActivationMap, Authority, CenterGraph, ChartResult, ChartType, Definition,
    Variable, Variables,
};
pub use composite::{
    classify, ClassifiedChannel, CompositeAnalysis, CompositeCentersSummary, ConnectionKind,
    GateOwnership, Origin,
};
pub use config::{ChartConfig, OutputFormat};
pub use ephemeris::{compute_chart, design_instant, snapshot_at, CalculatedChart, Ephemeris};
pub use error::{ChartError, Result, ResultExt};
pub use report::{composite_report, highest_activation, transit_composite_report, ChartReport};
pub use snapshot::{ChartAngles, ChartInput, GeoLocation, Snapshot};
pub use tables::{
    center_of, channel_by_id, channels_of_gate, gates_of, incarnation_cross, lookup_profile,
    Angle, Center, Channel, Gate, Profile, CHANNELS,
};
pub use transit::{
    compute_transit, stelliums, transit_chart, transit_composite, CalculatedTransit, Stellium,
    TransitComposite, TransitInput,
};
pub use zodiac::{format_degrees, whole_sign_house, Modality, ZodiacSign};
