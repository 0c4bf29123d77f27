//! Two-chart composite classification
//!
//! Merges the active gates of two charts, finds every channel the pair
//! completes together, and labels each one by how the two subjects
//! contribute to it. The composite center summary records, for every center
//! the merged channels define, which subject (if any) already defined it.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::chart::{ChartResult, CenterGraph};
use super::tables::{Center, Channel, Gate, CHANNELS};

/// Relationship category of a composite channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConnectionKind {
    /// Each subject holds one end; neither holds the channel alone
    Electromagnetic,
    /// One holds the channel, the other one of its gates
    Compromise,
    /// Both hold the channel
    Companion,
    /// One holds the channel, the other neither gate
    Dominance,
}

impl ConnectionKind {
    pub fn label(&self) -> &'static str {
        match self {
            ConnectionKind::Electromagnetic => "Electromagnetic",
            ConnectionKind::Compromise => "Compromise",
            ConnectionKind::Companion => "Companion",
            ConnectionKind::Dominance => "Dominance",
        }
    }
}

impl fmt::Display for ConnectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Which gates of a channel one subject holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GateOwnership {
    None,
    Gate1,
    Gate2,
    Both,
}

impl GateOwnership {
    pub fn from_presence(has_gate1: bool, has_gate2: bool) -> Self {
        match (has_gate1, has_gate2) {
            (true, true) => GateOwnership::Both,
            (true, false) => GateOwnership::Gate1,
            (false, true) => GateOwnership::Gate2,
            (false, false) => GateOwnership::None,
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, GateOwnership::None)
    }

    /// Exactly one of the two gates.
    pub fn is_single(&self) -> bool {
        matches!(self, GateOwnership::Gate1 | GateOwnership::Gate2)
    }
}

/// Whose contribution a classified channel is attributed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Origin {
    A,
    B,
    Both,
    Composite,
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Origin::A => f.write_str("A"),
            Origin::B => f.write_str("B"),
            Origin::Both => f.write_str("both"),
            Origin::Composite => f.write_str("composite"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedChannel {
    pub id: String,
    pub kind: ConnectionKind,
    pub origin: Origin,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub gate1: Gate,
    pub gate2: Gate,
    pub owner_a: GateOwnership,
    pub owner_b: GateOwnership,
    /// Set on channels that matched no exact rule and were filed as electromagnetic
    #[serde(default)]
    pub approximate: bool,
}

/// Which centers the composite defines and who brought them.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CompositeCentersSummary {
    pub defined: BTreeSet<Center>,
    pub open: BTreeSet<Center>,
    pub defined_by_a_only: BTreeSet<Center>,
    pub defined_by_b_only: BTreeSet<Center>,
    pub defined_by_both: BTreeSet<Center>,
    /// Defined only by the merged channels
    pub defined_by_composite: BTreeSet<Center>,
    /// `"<defined>-<open>"`
    pub code: String,
}

impl CompositeCentersSummary {
    /// Who defined `center`, or `None` when it stays open.
    pub fn origin_of(&self, center: Center) -> Option<Origin> {
        if self.defined_by_both.contains(&center) {
            Some(Origin::Both)
        } else if self.defined_by_a_only.contains(&center) {
            Some(Origin::A)
        } else if self.defined_by_b_only.contains(&center) {
            Some(Origin::B)
        } else if self.defined_by_composite.contains(&center) {
            Some(Origin::Composite)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompositeAnalysis {
    pub gates: BTreeSet<Gate>,
    /// Channel ids complete in the composite, in channel-table order
    pub channels: Vec<String>,
    pub electromagnetic: Vec<ClassifiedChannel>,
    pub compromise: Vec<ClassifiedChannel>,
    pub companion: Vec<ClassifiedChannel>,
    pub dominance: Vec<ClassifiedChannel>,
    pub centers: CompositeCentersSummary,
}

impl CompositeAnalysis {
    /// All classified channels in category order.
    pub fn classified(&self) -> impl Iterator<Item = &ClassifiedChannel> {
        self.electromagnetic
            .iter()
            .chain(self.compromise.iter())
            .chain(self.companion.iter())
            .chain(self.dominance.iter())
    }

    pub fn find(&self, id: &str) -> Option<&ClassifiedChannel> {
        self.classified().find(|c| c.id == id)
    }
}

fn classify_channel(channel: &Channel, a: &ChartResult, b: &ChartResult) -> ClassifiedChannel {
    let owner_a = GateOwnership::from_presence(a.has_gate(channel.low), a.has_gate(channel.high));
    let owner_b = GateOwnership::from_presence(b.has_gate(channel.low), b.has_gate(channel.high));
    let id = channel.id();
    let a_has = a.has_channel(&id);
    let b_has = b.has_channel(&id);

    let (kind, origin, description, approximate) = if a_has && b_has {
        (ConnectionKind::Companion, Origin::Both, None, false)
    } else if !a_has && !b_has && owner_a.is_single() && owner_b.is_single() && owner_a != owner_b
    {
        (ConnectionKind::Electromagnetic, Origin::Composite, None, false)
    } else if a_has && owner_b.is_single() {
        (
            ConnectionKind::Compromise,
            Origin::A,
            Some("Person A holds the full channel, Person B doubles a gate."),
            false,
        )
    } else if b_has && owner_a.is_single() {
        (
            ConnectionKind::Compromise,
            Origin::B,
            Some("Person B holds the full channel, Person A doubles a gate."),
            false,
        )
    } else if a_has && owner_b.is_none() {
        (
            ConnectionKind::Dominance,
            Origin::A,
            Some("Only Person A has this channel."),
            false,
        )
    } else if b_has && owner_a.is_none() {
        (
            ConnectionKind::Dominance,
            Origin::B,
            Some("Only Person B has this channel."),
            false,
        )
    } else {
        debug!(channel = %id, ?owner_a, ?owner_b, "overlapping contributions filed as electromagnetic");
        (ConnectionKind::Electromagnetic, Origin::Composite, None, true)
    };

    ClassifiedChannel {
        id,
        kind,
        origin,
        description: description.map(str::to_string),
        gate1: channel.low,
        gate2: channel.high,
        owner_a,
        owner_b,
        approximate,
    }
}

fn summarize_centers(
    a: &ChartResult,
    b: &ChartResult,
    channels: &[&Channel],
) -> CompositeCentersSummary {
    let graph = CenterGraph::from_channels(channels.iter().copied());
    let mut summary = CompositeCentersSummary::default();

    for center in Center::ALL {
        if !graph.is_defined(center) {
            summary.open.insert(center);
            continue;
        }
        summary.defined.insert(center);
        match (a.is_defined(center), b.is_defined(center)) {
            (true, true) => summary.defined_by_both.insert(center),
            (true, false) => summary.defined_by_a_only.insert(center),
            (false, true) => summary.defined_by_b_only.insert(center),
            (false, false) => summary.defined_by_composite.insert(center),
        };
    }

    summary.code = format!("{}-{}", summary.defined.len(), summary.open.len());
    summary
}

/// Classify how two charts combine. Infallible.
pub fn classify(a: &ChartResult, b: &ChartResult) -> CompositeAnalysis {
    let gates: BTreeSet<Gate> = a.active_gates.union(&b.active_gates).copied().collect();

    let complete: Vec<&Channel> = CHANNELS
        .iter()
        .filter(|c| gates.contains(&c.low) && gates.contains(&c.high))
        .collect();

    let mut analysis = CompositeAnalysis {
        gates,
        channels: complete.iter().map(|c| c.id()).collect(),
        electromagnetic: Vec::new(),
        compromise: Vec::new(),
        companion: Vec::new(),
        dominance: Vec::new(),
        centers: summarize_centers(a, b, &complete),
    };

    for channel in &complete {
        let classified = classify_channel(channel, a, b);
        match classified.kind {
            ConnectionKind::Electromagnetic => analysis.electromagnetic.push(classified),
            ConnectionKind::Compromise => analysis.compromise.push(classified),
            ConnectionKind::Companion => analysis.companion.push(classified),
            ConnectionKind::Dominance => analysis.dominance.push(classified),
        }
    }

    debug!(
        channels = analysis.channels.len(),
        code = %analysis.centers.code,
        "classified composite"
    );

    analysis
}
