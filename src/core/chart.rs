//! Chart properties
//!
//! Derives everything a single-subject chart shows from its two activation
//! maps: the active gates and channels, the graph of defined centers, and
//! the classifications read off that graph (type, authority, definition)
//! and off the Sun and Node activations (profile, variables, cross,
//! modality).
//!
//! The center graph is a local value built per call on petgraph's
//! `UnGraphMap`; nodes exist only for defined centers, so graph membership
//! and definition are the same thing.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use petgraph::algo::connected_components;
use petgraph::graphmap::UnGraphMap;
use petgraph::visit::Bfs;
use serde::{Deserialize, Serialize};
use tracing::{trace, warn};

use super::activation::{Activation, Orientation};
use super::bodies::{Body, ChartSide};
use super::error::{ChartError, Result};
use super::tables::{incarnation_cross, lookup_profile, Center, Channel, Gate, Profile, CHANNELS};
use super::zodiac::Modality;

/// Activations of one instant, keyed by body.
pub type ActivationMap = BTreeMap<Body, Activation>;

// =============================================================================
// Classifications
// =============================================================================

/// Energy type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChartType {
    Generator,
    ManifestingGenerator,
    Projector,
    Manifestor,
    Reflector,
}

impl ChartType {
    pub fn label(&self) -> &'static str {
        match self {
            ChartType::Generator => "Generator",
            ChartType::ManifestingGenerator => "Manifesting Generator",
            ChartType::Projector => "Projector",
            ChartType::Manifestor => "Manifestor",
            ChartType::Reflector => "Reflector",
        }
    }

    /// The strategy that goes with the type.
    pub fn strategy(&self) -> &'static str {
        match self {
            ChartType::Generator | ChartType::ManifestingGenerator => "To Respond",
            ChartType::Projector => "Wait for the Invitation",
            ChartType::Manifestor => "To Inform",
            ChartType::Reflector => "Wait a Lunar Cycle",
        }
    }
}

impl fmt::Display for ChartType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Inner authority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Authority {
    Emotional,
    Sacral,
    Splenic,
    Ego,
    SelfProjected,
    Mental,
    /// No inner authority
    Outer,
}

impl Authority {
    pub fn label(&self) -> &'static str {
        match self {
            Authority::Emotional => "Emotional",
            Authority::Sacral => "Sacral",
            Authority::Splenic => "Splenic",
            Authority::Ego => "Ego Projected",
            Authority::SelfProjected => "Self Projected",
            Authority::Mental => "Mental",
            Authority::Outer => "Outer (None/Lunar)",
        }
    }
}

impl fmt::Display for Authority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// First defined center in this list decides the authority.
const AUTHORITY_PRIORITY: [(Center, Authority); 7] = [
    (Center::Emotions, Authority::Emotional),
    (Center::Sacral, Authority::Sacral),
    (Center::Spleen, Authority::Splenic),
    (Center::Ego, Authority::Ego),
    (Center::Identity, Authority::SelfProjected),
    (Center::Mind, Authority::Mental),
    (Center::Crown, Authority::Mental),
];

/// How many separate groups the defined centers fall into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Definition {
    NoDefinition,
    Single,
    Split,
    TripleSplit,
    QuadrupleSplit,
}

impl Definition {
    pub fn from_components(components: usize) -> Self {
        match components {
            0 => Definition::NoDefinition,
            1 => Definition::Single,
            2 => Definition::Split,
            3 => Definition::TripleSplit,
            _ => Definition::QuadrupleSplit,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Definition::NoDefinition => "No Definition",
            Definition::Single => "Single",
            Definition::Split => "Split",
            Definition::TripleSplit => "Triple Split",
            Definition::QuadrupleSplit => "Quadruple Split",
        }
    }
}

impl fmt::Display for Definition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One of the four variable arrows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variable {
    pub orientation: Orientation,
    pub color: u8,
    pub tone: u8,
    pub base: u8,
}

impl From<&Activation> for Variable {
    fn from(activation: &Activation) -> Self {
        Self {
            orientation: activation.orientation(),
            color: activation.color,
            tone: activation.tone,
            base: activation.base,
        }
    }
}

/// The four variables, each read from one Sun or Node activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variables {
    /// Design Sun
    pub digestion: Variable,
    /// Design North Node
    pub environment: Variable,
    /// Personality Sun
    pub perspective: Variable,
    /// Personality North Node
    pub awareness: Variable,
}

// =============================================================================
// Center graph
// =============================================================================

/// Undirected graph of defined centers, one edge per active channel.
#[derive(Debug, Clone, Default)]
pub struct CenterGraph {
    graph: UnGraphMap<Center, ()>,
}

impl CenterGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a set of active channels.
    pub fn from_channels<'a>(channels: impl IntoIterator<Item = &'a Channel>) -> Self {
        let mut graph = Self::new();
        for channel in channels {
            match channel.centers() {
                Some((a, b)) => graph.connect(a, b),
                None => warn!(channel = %channel.id(), "channel gate has no center, skipped"),
            }
        }
        graph
    }

    /// Add an edge; both ends become defined. `a == b` is a no-op beyond
    /// defining the center.
    pub fn connect(&mut self, a: Center, b: Center) {
        self.graph.add_edge(a, b, ());
    }

    pub fn is_defined(&self, center: Center) -> bool {
        self.graph.contains_node(center)
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    pub fn defined_centers(&self) -> BTreeSet<Center> {
        self.graph.nodes().collect()
    }

    /// True when both centers are defined and joined by a path of active channels.
    pub fn connected(&self, from: Center, to: Center) -> bool {
        if !self.is_defined(from) || !self.is_defined(to) {
            return false;
        }
        if from == to {
            return true;
        }
        let mut bfs = Bfs::new(&self.graph, from);
        while let Some(center) = bfs.next(&self.graph) {
            if center == to {
                return true;
            }
        }
        false
    }

    /// Number of connected groups of defined centers.
    pub fn component_count(&self) -> usize {
        connected_components(&self.graph)
    }
}

// =============================================================================
// Chart result
// =============================================================================

/// Everything derived for one subject.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartResult {
    pub personality: ActivationMap,
    pub design: ActivationMap,
    pub active_gates: BTreeSet<Gate>,
    /// Channel ids in channel-table order
    pub active_channels: Vec<String>,
    pub defined_centers: BTreeSet<Center>,
    pub chart_type: ChartType,
    pub authority: Authority,
    pub profile: Profile,
    pub definition: Definition,
    pub variables: Variables,
    pub incarnation_cross: String,
    pub modality: String,
}

impl ChartResult {
    pub fn has_gate(&self, gate: Gate) -> bool {
        self.active_gates.contains(&gate)
    }

    pub fn has_channel(&self, id: &str) -> bool {
        self.active_channels.iter().any(|c| c == id)
    }

    pub fn is_defined(&self, center: Center) -> bool {
        self.defined_centers.contains(&center)
    }

    /// Centers not touched by any active channel, in report order.
    pub fn open_centers(&self) -> Vec<Center> {
        Center::ALL
            .iter()
            .copied()
            .filter(|c| !self.defined_centers.contains(c))
            .collect()
    }
}

fn require(map: &ActivationMap, body: Body, chart: ChartSide) -> Result<Activation> {
    map.get(&body)
        .copied()
        .ok_or(ChartError::MissingActivation { body, chart })
}

/// Union of gates over both maps, skipping bodies that never define centers.
pub fn active_gates(personality: &ActivationMap, design: &ActivationMap) -> BTreeSet<Gate> {
    personality
        .iter()
        .chain(design.iter())
        .filter(|(body, _)| body.contributes_to_bodygraph())
        .map(|(_, activation)| activation.gate)
        .collect()
}

/// Channels whose two gates are both active, in table order.
pub fn active_channels(gates: &BTreeSet<Gate>) -> Vec<&'static Channel> {
    CHANNELS
        .iter()
        .filter(|c| gates.contains(&c.low) && gates.contains(&c.high))
        .collect()
}

/// Type from the defined-center graph.
pub fn determine_type(graph: &CenterGraph) -> ChartType {
    if graph.is_empty() {
        return ChartType::Reflector;
    }

    let motor_to_throat = graph
        .defined_centers()
        .into_iter()
        .filter(|center| center.is_motor())
        .any(|motor| graph.connected(motor, Center::Throat));

    match (graph.is_defined(Center::Sacral), motor_to_throat) {
        (true, true) => ChartType::ManifestingGenerator,
        (true, false) => ChartType::Generator,
        (false, true) => ChartType::Manifestor,
        (false, false) => ChartType::Projector,
    }
}

/// Authority from which centers are defined; presence only, no connectivity.
pub fn determine_authority(defined: &BTreeSet<Center>) -> Authority {
    AUTHORITY_PRIORITY
        .iter()
        .find(|(center, _)| defined.contains(center))
        .map(|(_, authority)| *authority)
        .unwrap_or(Authority::Outer)
}

/// Modality of the personality Sun, or `"personality/design"` when they differ.
pub fn modality_label(personality_sun: f64, design_sun: f64) -> String {
    let personality = Modality::of(personality_sun);
    let design = Modality::of(design_sun);
    if personality == design {
        personality.to_string()
    } else {
        format!("{}/{}", personality, design)
    }
}

/// Build a chart from the personality and design activation maps.
///
/// Both maps must contain the Sun and the North Node.
pub fn build_chart(personality: ActivationMap, design: ActivationMap) -> Result<ChartResult> {
    let personality_sun = require(&personality, Body::Sun, ChartSide::Personality)?;
    let personality_node = require(&personality, Body::NorthNode, ChartSide::Personality)?;
    let design_sun = require(&design, Body::Sun, ChartSide::Design)?;
    let design_node = require(&design, Body::NorthNode, ChartSide::Design)?;

    let gates = active_gates(&personality, &design);
    let channels = active_channels(&gates);
    let graph = CenterGraph::from_channels(channels.iter().copied());

    let defined_centers = graph.defined_centers();
    let chart_type = determine_type(&graph);
    let authority = determine_authority(&defined_centers);
    let definition = Definition::from_components(graph.component_count());
    let profile = lookup_profile(personality_sun.line, design_sun.line);
    let incarnation_cross = incarnation_cross(profile.angle(), personality_sun.gate);
    let modality = modality_label(personality_sun.longitude, design_sun.longitude);

    let variables = Variables {
        digestion: Variable::from(&design_sun),
        environment: Variable::from(&design_node),
        perspective: Variable::from(&personality_sun),
        awareness: Variable::from(&personality_node),
    };

    trace!(
        gates = gates.len(),
        channels = channels.len(),
        %chart_type,
        %authority,
        %definition,
        "built chart"
    );

    Ok(ChartResult {
        personality,
        design,
        active_gates: gates,
        active_channels: channels.iter().map(|c| c.id()).collect(),
        defined_centers,
        chart_type,
        authority,
        profile,
        definition,
        variables,
        incarnation_cross,
        modality,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::tables::channel_by_id;

    fn graph_of(ids: &[&str]) -> CenterGraph {
        CenterGraph::from_channels(ids.iter().filter_map(|id| channel_by_id(id)))
    }

    fn minimal_map(sun_gate: Gate, node_gate: Gate) -> ActivationMap {
        let mut map = ActivationMap::new();
        map.insert(Body::Sun, Activation::new(sun_gate, 1, 1, 1, 1, 10.0));
        map.insert(Body::NorthNode, Activation::new(node_gate, 3, 2, 5, 4, 200.0));
        map
    }

    #[test]
    fn test_empty_graph() {
        let graph = CenterGraph::new();
        assert!(graph.is_empty());
        assert_eq!(graph.component_count(), 0);
        assert!(!graph.connected(Center::Root, Center::Root));
        assert_eq!(determine_type(&graph), ChartType::Reflector);
    }

    #[test]
    fn test_connected_requires_definition() {
        let graph = graph_of(&["3-60"]);
        assert!(graph.connected(Center::Sacral, Center::Root));
        assert!(graph.connected(Center::Sacral, Center::Sacral));
        assert!(!graph.connected(Center::Sacral, Center::Throat));
        assert!(!graph.connected(Center::Throat, Center::Throat));
    }

    #[test]
    fn test_connected_across_several_channels() {
        // Root -> Sacral -> Throat
        let graph = graph_of(&["3-60", "20-34"]);
        assert!(graph.connected(Center::Root, Center::Throat));
        assert_eq!(graph.component_count(), 1);
    }

    #[test]
    fn test_component_count_per_island() {
        // Sacral-Root, Mind-Throat, Spleen-Identity
        let graph = graph_of(&["3-60", "17-62", "10-57"]);
        assert_eq!(graph.component_count(), 3);
        let joined = graph_of(&["3-60", "17-62", "10-57", "20-34", "10-20"]);
        assert_eq!(joined.component_count(), 1);
    }

    #[test]
    fn test_motor_off_the_throat_path_is_ignored() {
        // Root is a motor but only reaches Sacral; Mind reaches Throat but is no motor
        let graph = graph_of(&["3-60", "17-62"]);
        assert_eq!(determine_type(&graph), ChartType::Generator);
    }

    #[test]
    fn test_self_edge_defines_without_joining() {
        let mut graph = CenterGraph::new();
        graph.connect(Center::Mind, Center::Mind);
        graph.connect(Center::Root, Center::Sacral);
        assert!(graph.is_defined(Center::Mind));
        assert_eq!(graph.component_count(), 2);
        assert!(!graph.connected(Center::Mind, Center::Root));
    }

    #[test]
    fn test_type_variants() {
        assert_eq!(determine_type(&graph_of(&["3-60"])), ChartType::Generator);
        assert_eq!(
            determine_type(&graph_of(&["20-34"])),
            ChartType::ManifestingGenerator
        );
        assert_eq!(determine_type(&graph_of(&["21-45"])), ChartType::Manifestor);
        assert_eq!(determine_type(&graph_of(&["1-8"])), ChartType::Projector);
        assert_eq!(determine_type(&graph_of(&["47-64"])), ChartType::Projector);
    }

    #[test]
    fn test_motor_must_reach_throat_through_defined_path() {
        // Sacral defined, Throat defined via G center, but no motor path to it
        let graph = graph_of(&["3-60", "1-8"]);
        assert_eq!(determine_type(&graph), ChartType::Generator);
    }

    #[test]
    fn test_authority_priority() {
        let all: BTreeSet<Center> = Center::ALL.iter().copied().collect();
        assert_eq!(determine_authority(&all), Authority::Emotional);

        let without_emotions: BTreeSet<Center> =
            all.iter().copied().filter(|c| *c != Center::Emotions).collect();
        assert_eq!(determine_authority(&without_emotions), Authority::Sacral);

        let ego_and_g: BTreeSet<Center> = [Center::Ego, Center::Identity].into_iter().collect();
        assert_eq!(determine_authority(&ego_and_g), Authority::Ego);

        let crown: BTreeSet<Center> = [Center::Crown].into_iter().collect();
        assert_eq!(determine_authority(&crown), Authority::Mental);

        let throat: BTreeSet<Center> = [Center::Throat].into_iter().collect();
        assert_eq!(determine_authority(&throat), Authority::Outer);
        assert_eq!(determine_authority(&BTreeSet::new()), Authority::Outer);
    }

    #[test]
    fn test_definition_labels() {
        assert_eq!(Definition::from_components(0).label(), "No Definition");
        assert_eq!(Definition::from_components(1).label(), "Single");
        assert_eq!(Definition::from_components(2).label(), "Split");
        assert_eq!(Definition::from_components(3).label(), "Triple Split");
        assert_eq!(Definition::from_components(4).label(), "Quadruple Split");
        assert_eq!(Definition::from_components(7).label(), "Quadruple Split");
    }

    #[test]
    fn test_modality_label() {
        assert_eq!(modality_label(10.0, 100.0), "Cardinal");
        assert_eq!(modality_label(10.0, 40.0), "Cardinal/Fixed");
    }

    #[test]
    fn test_active_gates_skip_cosmetic_bodies() {
        let mut personality = minimal_map(1, 2);
        personality.insert(Body::Chiron, Activation::new(8, 1, 1, 1, 1, 0.0));
        let design = minimal_map(3, 4);
        let gates = active_gates(&personality, &design);
        assert_eq!(gates.into_iter().collect::<Vec<_>>(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_build_chart_requires_sun_and_node() {
        let mut personality = minimal_map(1, 2);
        personality.remove(&Body::NorthNode);
        let err = build_chart(personality, minimal_map(3, 4)).unwrap_err();
        assert!(matches!(
            err,
            ChartError::MissingActivation {
                body: Body::NorthNode,
                chart: ChartSide::Personality
            }
        ));

        let mut design = minimal_map(3, 4);
        design.remove(&Body::Sun);
        let err = build_chart(minimal_map(1, 2), design).unwrap_err();
        assert!(matches!(
            err,
            ChartError::MissingActivation {
                body: Body::Sun,
                chart: ChartSide::Design
            }
        ));
    }

    #[test]
    fn test_variables_sources() {
        let chart = build_chart(minimal_map(1, 2), minimal_map(3, 4)).unwrap();
        assert_eq!(chart.variables.digestion.tone, 1);
        assert_eq!(chart.variables.digestion.orientation, Orientation::Left);
        assert_eq!(chart.variables.environment.tone, 5);
        assert_eq!(chart.variables.environment.orientation, Orientation::Right);
        assert_eq!(chart.variables.awareness.base, 4);
        assert_eq!(chart.variables.perspective.color, 1);
    }
}
