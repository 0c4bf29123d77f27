//! Integration tests for the chart properties engine
//!
//! Charts are assembled from decoded longitudes placed inside chosen gates,
//! so every scenario runs through the same path real input takes.

use bodygraph::core::{gate_arc, Center, Orientation, Snapshot};
use bodygraph::{
    build_chart, decode, ActivationMap, Authority, Body, ChartError, ChartSide, ChartType,
    Definition, Gate, Profile,
};

const SLOTS: [Body; 11] = [
    Body::Sun,
    Body::NorthNode,
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

/// A longitude inside `line` of `gate`.
fn longitude_in(gate: Gate, line: u8) -> f64 {
    let (start, _) = gate_arc(gate).unwrap();
    start + (line - 1) as f64 * 0.9375 + 0.1
}

/// Personality bodies take `gates` in order; both Suns and Nodes sit in the first gate.
fn chart_with_lines(gates: &[Gate], personality_line: u8, design_line: u8) -> bodygraph::ChartResult {
    let mut personality = ActivationMap::new();
    for (i, body) in SLOTS.iter().enumerate() {
        let gate = gates.get(i).copied().unwrap_or(gates[0]);
        let line = if *body == Body::Sun { personality_line } else { 1 };
        personality.insert(*body, decode(longitude_in(gate, line)).unwrap());
    }
    let mut design = ActivationMap::new();
    design.insert(Body::Sun, decode(longitude_in(gates[0], design_line)).unwrap());
    design.insert(Body::NorthNode, decode(longitude_in(gates[0], 1)).unwrap());
    build_chart(personality, design).unwrap()
}

fn chart_with(gates: &[Gate]) -> bodygraph::ChartResult {
    chart_with_lines(gates, 1, 3)
}

// ============================================================================
// Type, authority, definition
// ============================================================================

#[test]
fn test_no_channels_is_reflector() {
    let chart = chart_with(&[1, 2, 3, 4]);
    assert!(chart.active_channels.is_empty());
    assert!(chart.defined_centers.is_empty());
    assert_eq!(chart.chart_type, ChartType::Reflector);
    assert_eq!(chart.authority, Authority::Outer);
    assert_eq!(chart.definition, Definition::NoDefinition);
    assert_eq!(chart.definition.label(), "No Definition");
    assert_eq!(chart.open_centers().len(), 9);
}

#[test]
fn test_generator() {
    let chart = chart_with(&[3, 60]);
    assert_eq!(chart.active_channels, vec!["3-60".to_string()]);
    assert_eq!(chart.chart_type, ChartType::Generator);
    assert_eq!(chart.authority, Authority::Sacral);
    assert_eq!(chart.definition, Definition::Single);
}

#[test]
fn test_manifesting_generator() {
    let chart = chart_with(&[20, 34]);
    assert_eq!(chart.chart_type, ChartType::ManifestingGenerator);
    assert_eq!(chart.chart_type.strategy(), "To Respond");
}

#[test]
fn test_ego_manifestor() {
    let chart = chart_with(&[21, 45]);
    assert_eq!(chart.chart_type, ChartType::Manifestor);
    assert_eq!(chart.authority, Authority::Ego);
    assert_eq!(chart.authority.label(), "Ego Projected");
}

#[test]
fn test_emotional_manifestor() {
    let chart = chart_with(&[12, 22]);
    assert_eq!(chart.chart_type, ChartType::Manifestor);
    assert_eq!(chart.authority, Authority::Emotional);
}

#[test]
fn test_self_projected_projector() {
    let chart = chart_with(&[1, 8]);
    assert_eq!(chart.chart_type, ChartType::Projector);
    assert_eq!(chart.authority, Authority::SelfProjected);
}

#[test]
fn test_splenic_projector() {
    let chart = chart_with(&[10, 57]);
    assert_eq!(chart.chart_type, ChartType::Projector);
    assert_eq!(chart.authority, Authority::Splenic);
}

#[test]
fn test_mental_projector() {
    let chart = chart_with(&[47, 64]);
    assert_eq!(chart.chart_type, ChartType::Projector);
    assert_eq!(chart.authority, Authority::Mental);
    assert!(chart.is_defined(Center::Crown));
    assert!(chart.is_defined(Center::Mind));
}

#[test]
fn test_split_definition() {
    let chart = chart_with(&[47, 64, 3, 60]);
    assert_eq!(chart.definition, Definition::Split);
    assert_eq!(chart.chart_type, ChartType::Generator);
}

#[test]
fn test_triple_split() {
    let chart = chart_with(&[47, 64, 3, 60, 21, 45]);
    assert_eq!(chart.definition, Definition::TripleSplit);
    assert_eq!(chart.definition.label(), "Triple Split");
    // Ego reaches the throat, sacral is defined
    assert_eq!(chart.chart_type, ChartType::ManifestingGenerator);
    assert_eq!(chart.authority, Authority::Sacral);
}

#[test]
fn test_quadruple_split() {
    let chart = chart_with(&[47, 64, 3, 60, 21, 45, 10, 57]);
    assert_eq!(chart.definition, Definition::QuadrupleSplit);
    assert_eq!(chart.defined_centers.len(), 8);
}

#[test]
fn test_active_channels_follow_table_order() {
    let chart = chart_with(&[20, 34, 10, 57]);
    assert_eq!(
        chart.active_channels,
        vec!["10-20", "10-34", "10-57", "20-34", "20-57", "34-57"]
    );
    assert_eq!(chart.definition, Definition::Single);
}

// ============================================================================
// Cosmetic bodies
// ============================================================================

#[test]
fn test_chiron_and_lilith_never_complete_channels() {
    let mut personality = ActivationMap::new();
    personality.insert(Body::Sun, decode(longitude_in(3, 1)).unwrap());
    personality.insert(Body::NorthNode, decode(longitude_in(3, 1)).unwrap());
    personality.insert(Body::Chiron, decode(longitude_in(60, 1)).unwrap());
    personality.insert(Body::BlackMoonLilith, decode(longitude_in(60, 2)).unwrap());
    let mut design = ActivationMap::new();
    design.insert(Body::Sun, decode(longitude_in(3, 3)).unwrap());
    design.insert(Body::NorthNode, decode(longitude_in(3, 1)).unwrap());

    let chart = build_chart(personality, design).unwrap();
    assert!(!chart.has_gate(60));
    assert_eq!(chart.chart_type, ChartType::Reflector);
}

// ============================================================================
// Profile, cross, variables, modality
// ============================================================================

#[test]
fn test_profile_and_right_angle_cross() {
    let chart = chart_with_lines(&[1], 1, 3);
    assert_eq!(chart.profile, Profile::InvestigatorMartyr);
    assert_eq!(chart.incarnation_cross, "The Right Angle Cross of The Sphinx 4");
}

#[test]
fn test_juxtaposition_cross() {
    let chart = chart_with_lines(&[1], 4, 1);
    assert_eq!(chart.profile.key(), "4/1");
    assert_eq!(chart.incarnation_cross, "Juxtaposition Cross of Self Expression");
}

#[test]
fn test_left_angle_cross() {
    let chart = chart_with_lines(&[1], 5, 1);
    assert_eq!(chart.profile.label(), "5 / 1");
    assert_eq!(chart.incarnation_cross, "Left Angle Cross of Defiance 2");
}

#[test]
fn test_unknown_profile_falls_back() {
    let chart = chart_with_lines(&[1], 1, 1);
    assert_eq!(chart.profile, Profile::InvestigatorMartyr);
}

#[test]
fn test_variables_orientation() {
    let chart = chart_with(&[3, 60]);
    // Every fixture longitude sits 0.1 degree into a line: color 1, tone 4
    assert_eq!(chart.variables.digestion.color, 1);
    assert_eq!(chart.variables.digestion.tone, 4);
    assert_eq!(chart.variables.digestion.orientation, Orientation::Right);
}

#[test]
fn test_modality_single_and_mixed() {
    // Gate 1 lies in Scorpio, gate 47 in Virgo
    assert_eq!(chart_with(&[1]).modality, "Fixed");

    let mut personality = ActivationMap::new();
    personality.insert(Body::Sun, decode(longitude_in(1, 1)).unwrap());
    personality.insert(Body::NorthNode, decode(longitude_in(1, 1)).unwrap());
    let mut design = ActivationMap::new();
    design.insert(Body::Sun, decode(longitude_in(47, 3)).unwrap());
    design.insert(Body::NorthNode, decode(longitude_in(47, 1)).unwrap());
    let chart = build_chart(personality, design).unwrap();
    assert_eq!(chart.modality, "Fixed/Mutable");
}

// ============================================================================
// Errors and serialization
// ============================================================================

#[test]
fn test_missing_design_sun() {
    let personality = Snapshot::new()
        .with_position(Body::Sun, 10.0)
        .with_position(Body::NorthNode, 200.0)
        .decode(ChartSide::Personality)
        .unwrap();
    let err = build_chart(personality, ActivationMap::new()).unwrap_err();
    assert!(matches!(
        err,
        ChartError::MissingActivation {
            body: Body::Sun,
            chart: ChartSide::Design
        }
    ));
    assert!(err.to_string().contains("design"));
}

#[test]
fn test_chart_result_serializes_classifications() {
    let chart = chart_with(&[20, 34]);
    let json = serde_json::to_string(&chart).unwrap();
    assert!(json.contains("\"ManifestingGenerator\""));
    let parsed: bodygraph::ChartResult = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.chart_type, chart.chart_type);
    assert_eq!(parsed.active_channels, chart.active_channels);
    assert_eq!(parsed.defined_centers, chart.defined_centers);
    assert_eq!(parsed.personality.len(), chart.personality.len());
}
