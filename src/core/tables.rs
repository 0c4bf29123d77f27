//! Static domain tables
//!
//! Everything in this module is fixed data: the order in which gates are
//! laid out around the wheel, the partition of the 64 gates into the nine
//! centers, the channel table, the profile table and the incarnation-cross
//! names. Lookups that are not simple array scans are built once behind
//! `lazy_static` and never mutated.

use std::collections::HashMap;
use std::fmt;

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// A gate number, 1 through 64.
pub type Gate = u8;

/// Number of gates on the wheel.
pub const GATE_COUNT: usize = 64;

/// Gate order around the wheel, starting at the gate whose lower edge sits
/// at the wheel offset and proceeding in increasing longitude.
pub const WHEEL: [Gate; GATE_COUNT] = [
    17, 21, 51, 42, 3, 27, 24, 2, 23, 8, //
    20, 16, 35, 45, 12, 15, 52, 39, 53, 62, //
    56, 31, 33, 7, 4, 29, 59, 40, 64, 47, //
    6, 46, 18, 48, 57, 32, 50, 28, 44, 1, //
    43, 14, 34, 9, 5, 26, 11, 10, 58, 38, //
    54, 61, 60, 41, 19, 13, 49, 30, 55, 37, //
    63, 22, 36, 25,
];

// =============================================================================
// Centers
// =============================================================================

/// One of the nine centers of the bodygraph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Center {
    Root,
    Sacral,
    /// Solar plexus, the emotional awareness center
    Emotions,
    /// The intuitive awareness center
    Spleen,
    /// Heart / willpower
    Ego,
    /// The G center
    Identity,
    /// The center of expression
    Throat,
    /// Ajna
    Mind,
    /// Head
    Crown,
}

impl Center {
    /// All centers in report order.
    pub const ALL: [Center; 9] = [
        Center::Root,
        Center::Sacral,
        Center::Emotions,
        Center::Spleen,
        Center::Ego,
        Center::Identity,
        Center::Throat,
        Center::Mind,
        Center::Crown,
    ];

    /// Centers that can power the throat.
    pub const MOTORS: [Center; 4] = [Center::Sacral, Center::Ego, Center::Emotions, Center::Root];

    pub fn label(&self) -> &'static str {
        match self {
            Center::Root => "Root",
            Center::Sacral => "Sacral",
            Center::Emotions => "Emotions",
            Center::Spleen => "Spleen",
            Center::Ego => "Ego/Willpower",
            Center::Identity => "G-Center/Heart",
            Center::Throat => "Throat",
            Center::Mind => "Mind",
            Center::Crown => "Crown",
        }
    }

    pub fn is_motor(&self) -> bool {
        Self::MOTORS.contains(self)
    }
}

impl fmt::Display for Center {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The gates owned by each center. Together they cover 1..=64 exactly once.
pub const CENTER_GATES: [(Center, &[Gate]); 9] = [
    (Center::Root, &[58, 38, 54, 53, 60, 52, 19, 39, 41]),
    (Center::Sacral, &[27, 34, 5, 14, 29, 59, 9, 3, 42]),
    (Center::Emotions, &[6, 37, 22, 36, 30, 55, 49]),
    (Center::Spleen, &[18, 28, 32, 50, 44, 57, 48]),
    (Center::Ego, &[21, 40, 26, 51]),
    (Center::Identity, &[1, 13, 25, 46, 2, 15, 10, 7]),
    (Center::Throat, &[20, 16, 62, 23, 56, 35, 12, 45, 33, 8, 31]),
    (Center::Mind, &[43, 17, 47, 24, 4, 11]),
    (Center::Crown, &[64, 61, 63]),
];

lazy_static! {
    /// Reverse lookup, indexed by gate number (index 0 unused).
    static ref GATE_CENTERS: [Option<Center>; GATE_COUNT + 1] = {
        let mut table = [None; GATE_COUNT + 1];
        for (center, gates) in CENTER_GATES.iter() {
            for &gate in gates.iter() {
                table[gate as usize] = Some(*center);
            }
        }
        table
    };
}

/// The center that owns `gate`, or `None` outside 1..=64.
pub fn center_of(gate: Gate) -> Option<Center> {
    GATE_CENTERS.get(gate as usize).copied().flatten()
}

/// The gates owned by `center`.
pub fn gates_of(center: Center) -> &'static [Gate] {
    CENTER_GATES
        .iter()
        .find(|(c, _)| *c == center)
        .map(|(_, gates)| *gates)
        .unwrap_or(&[])
}

// =============================================================================
// Channels
// =============================================================================

/// A fixed pairing of two gates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Channel {
    pub low: Gate,
    pub high: Gate,
    pub name: &'static str,
}

impl Channel {
    const fn new(low: Gate, high: Gate, name: &'static str) -> Self {
        Self { low, high, name }
    }

    /// Stable identifier, `"{low}-{high}"`.
    pub fn id(&self) -> String {
        format!("{}-{}", self.low, self.high)
    }

    /// The centers at each end of the channel, `None` if a gate is unmapped.
    pub fn centers(&self) -> Option<(Center, Center)> {
        Some((center_of(self.low)?, center_of(self.high)?))
    }

    pub fn has_gate(&self, gate: Gate) -> bool {
        self.low == gate || self.high == gate
    }
}

/// The channel table, in canonical order.
pub const CHANNELS: [Channel; 36] = [
    Channel::new(1, 8, "Inspiration"),
    Channel::new(2, 14, "The Beat"),
    Channel::new(3, 60, "Mutation"),
    Channel::new(4, 63, "Logic"),
    Channel::new(5, 15, "Rhythm"),
    Channel::new(6, 59, "Mating"),
    Channel::new(7, 31, "The Alpha"),
    Channel::new(9, 52, "Concentration"),
    Channel::new(10, 20, "Awakening"),
    Channel::new(10, 34, "Exploration"),
    Channel::new(10, 57, "Perfected Form"),
    Channel::new(11, 56, "Curiosity"),
    Channel::new(12, 22, "Openness"),
    Channel::new(13, 33, "The Prodigal"),
    Channel::new(16, 48, "The Wavelength"),
    Channel::new(17, 62, "Acceptance"),
    Channel::new(18, 58, "Judgment"),
    Channel::new(19, 49, "Synthesis"),
    Channel::new(20, 34, "Charisma"),
    Channel::new(20, 57, "The Brain Wave"),
    Channel::new(21, 45, "The Money Line"),
    Channel::new(23, 43, "Structuring"),
    Channel::new(24, 61, "Awareness"),
    Channel::new(25, 51, "Initiation"),
    Channel::new(26, 44, "Surrender"),
    Channel::new(27, 50, "Preservation"),
    Channel::new(28, 38, "Struggle"),
    Channel::new(29, 46, "Discovery"),
    Channel::new(30, 41, "Recognition"),
    Channel::new(32, 54, "Transformation"),
    Channel::new(34, 57, "Power"),
    Channel::new(35, 36, "Transitoriness"),
    Channel::new(37, 40, "Community"),
    Channel::new(39, 55, "Emoting"),
    Channel::new(42, 53, "Maturation"),
    Channel::new(47, 64, "Abstraction"),
];

/// Look up a channel by its `"{low}-{high}"` identifier.
pub fn channel_by_id(id: &str) -> Option<&'static Channel> {
    CHANNELS.iter().find(|c| c.id() == id)
}

/// All channels that include `gate`.
pub fn channels_of_gate(gate: Gate) -> impl Iterator<Item = &'static Channel> {
    CHANNELS.iter().filter(move |c| c.has_gate(gate))
}

// =============================================================================
// Profiles
// =============================================================================

/// The twelve valid profiles, keyed by personality and design Sun lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Profile {
    InvestigatorMartyr,
    InvestigatorOpportunist,
    HermitOpportunist,
    HermitHeretic,
    MartyrHeretic,
    MartyrRoleModel,
    OpportunistRoleModel,
    OpportunistInvestigator,
    HereticInvestigator,
    HereticHermit,
    RoleModelHermit,
    RoleModelMartyr,
}

/// Profile table: `"{personality}/{design}"` key to profile.
const PROFILES: [(&str, Profile); 12] = [
    ("1/3", Profile::InvestigatorMartyr),
    ("1/4", Profile::InvestigatorOpportunist),
    ("2/4", Profile::HermitOpportunist),
    ("2/5", Profile::HermitHeretic),
    ("3/5", Profile::MartyrHeretic),
    ("3/6", Profile::MartyrRoleModel),
    ("4/6", Profile::OpportunistRoleModel),
    ("4/1", Profile::OpportunistInvestigator),
    ("5/1", Profile::HereticInvestigator),
    ("5/2", Profile::HereticHermit),
    ("6/2", Profile::RoleModelHermit),
    ("6/3", Profile::RoleModelMartyr),
];

impl Profile {
    /// The table key, e.g. `"4/1"`.
    pub fn key(&self) -> &'static str {
        PROFILES
            .iter()
            .find(|(_, p)| p == self)
            .map(|(k, _)| *k)
            .unwrap_or("1/3")
    }

    /// Display label, e.g. `"4 / 1"`.
    pub fn label(&self) -> String {
        self.key().replace('/', " / ")
    }

    /// The pair of line archetypes, e.g. `"Opportunist / Investigator"`.
    pub fn archetypes(&self) -> &'static str {
        match self {
            Profile::InvestigatorMartyr => "Investigator / Martyr",
            Profile::InvestigatorOpportunist => "Investigator / Opportunist",
            Profile::HermitOpportunist => "Hermit / Opportunist",
            Profile::HermitHeretic => "Hermit / Heretic",
            Profile::MartyrHeretic => "Martyr / Heretic",
            Profile::MartyrRoleModel => "Martyr / Role Model",
            Profile::OpportunistRoleModel => "Opportunist / Role Model",
            Profile::OpportunistInvestigator => "Opportunist / Investigator",
            Profile::HereticInvestigator => "Heretic / Investigator",
            Profile::HereticHermit => "Heretic / Hermit",
            Profile::RoleModelHermit => "Role Model / Hermit",
            Profile::RoleModelMartyr => "Role Model / Martyr",
        }
    }

    /// Exact table lookup without fallback.
    pub fn from_lines(personality_line: u8, design_line: u8) -> Option<Profile> {
        let key = format!("{}/{}", personality_line, design_line);
        PROFILES.iter().find(|(k, _)| *k == key).map(|(_, p)| *p)
    }

    /// The cross angle implied by this profile.
    pub fn angle(&self) -> Angle {
        match self {
            Profile::OpportunistInvestigator => Angle::Juxtaposition,
            Profile::HereticInvestigator
            | Profile::HereticHermit
            | Profile::RoleModelHermit
            | Profile::RoleModelMartyr => Angle::Left,
            _ => Angle::Right,
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// Profile lookup, falling back to 1/3 for line pairs outside the table.
///
/// Only twelve of the 36 possible Sun line pairs are profiles; a miss is
/// logged at warn level.
pub fn lookup_profile(personality_line: u8, design_line: u8) -> Profile {
    match Profile::from_lines(personality_line, design_line) {
        Some(profile) => profile,
        None => {
            warn!(
                personality_line,
                design_line, "unrecognized profile line pair, falling back to 1/3"
            );
            Profile::InvestigatorMartyr
        }
    }
}

// =============================================================================
// Incarnation crosses
// =============================================================================

/// The angle of an incarnation cross.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Angle {
    Right,
    Left,
    Juxtaposition,
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Angle::Right => f.write_str("Right"),
            Angle::Left => f.write_str("Left"),
            Angle::Juxtaposition => f.write_str("Juxtaposition"),
        }
    }
}

// (personality Sun gate, theme, quarter variant)
const RIGHT_ANGLE_CROSSES: [(Gate, &str, u8); 64] = [
    (1, "The Sphinx", 4),
    (2, "The Sphinx", 2),
    (3, "Laws", 1),
    (4, "Explanation", 3),
    (5, "Consciousness", 4),
    (6, "Eden", 3),
    (7, "The Sphinx", 3),
    (8, "Contagion", 2),
    (9, "Planning", 4),
    (10, "Vessel Of Love", 4),
    (11, "Eden", 4),
    (12, "Eden", 2),
    (13, "The Sphinx", 1),
    (14, "Contagion", 4),
    (15, "The Vessel Of Love", 2),
    (16, "Planning", 2),
    (17, "Service", 1),
    (18, "Service", 3),
    (19, "The Four Ways", 4),
    (20, "The Sleeping Phoenix", 2),
    (21, "Tension", 1),
    (22, "Rulership", 1),
    (23, "Explanation", 2),
    (24, "The Four Ways", 1),
    (25, "The Vessel Of Love", 1),
    (26, "Rulership", 4),
    (27, "The Unexpected", 1),
    (28, "The Unexpected", 3),
    (29, "Contagion", 3),
    (30, "Contagion", 1),
    (31, "The Unexpected", 2),
    (32, "Maya", 3),
    (33, "The Four Ways", 2),
    (34, "The Sleeping Phoenix", 4),
    (35, "Consciousness", 2),
    (36, "The Eden", 1),
    (37, "Planning", 1),
    (38, "Tension", 4),
    (39, "Tension", 2),
    (40, "Planning", 3),
    (41, "The Unexpected", 4),
    (42, "Maya", 1),
    (43, "Explanation", 4),
    (44, "The Four Ways", 3),
    (45, "Rulership", 2),
    (46, "The Vessel Of Love", 3),
    (47, "Rulership", 3),
    (48, "Tension", 3),
    (49, "Explanation", 1),
    (50, "Laws", 3),
    (51, "Penetration", 1),
    (52, "Service", 2),
    (53, "Penetration", 2),
    (54, "Penetration", 4),
    (55, "The Sleeping Phoenix", 1),
    (56, "Laws", 2),
    (57, "Penetration", 3),
    (58, "Service", 4),
    (59, "The Sleeping Phoenix", 3),
    (60, "Laws", 4),
    (61, "Maya", 4),
    (62, "Maya", 2),
    (63, "Consciousness", 1),
    (64, "Consciousness", 3),
];

const LEFT_ANGLE_CROSSES: [(Gate, &str, u8); 64] = [
    (1, "Defiance", 2),
    (2, "Defiance", 1),
    (3, "Wishes", 1),
    (4, "Revolution", 2),
    (5, "Separation", 2),
    (6, "The Plane", 2),
    (7, "Masks", 2),
    (8, "Uncertainty", 1),
    (9, "Identification", 2),
    (10, "Prevention", 2),
    (11, "Education", 2),
    (12, "Education", 1),
    (13, "Masks", 1),
    (14, "Uncertainty", 2),
    (15, "Prevention", 1),
    (16, "Identification", 1),
    (17, "Upheaval", 1),
    (18, "Upheaval", 2),
    (19, "Refinement", 2),
    (20, "Duality", 1),
    (21, "Endeavour", 1),
    (22, "Informing", 1),
    (23, "Dedication", 1),
    (24, "Incarnation", 1),
    (25, "Healing", 1),
    (26, "Confrontation", 2),
    (27, "Alignment", 1),
    (28, "Alignment", 2),
    (29, "Industry", 2),
    (30, "Industry", 1),
    (31, "The Alpha", 1),
    (32, "Limitation", 2),
    (33, "Refinement", 1),
    (34, "Duality", 2),
    (35, "Separation", 1),
    (36, "The Plane", 1),
    (37, "Migration", 1),
    (38, "Individualism", 2),
    (39, "Individualism", 1),
    (40, "Migration", 2),
    (41, "The Alpha", 2),
    (42, "Limitation", 1),
    (43, "Dedication", 2),
    (44, "Incarnation", 2),
    (45, "Confrontation", 1),
    (46, "Healing", 2),
    (47, "Informing", 2),
    (48, "Endeavour", 2),
    (49, "Revolution", 1),
    (50, "Wishes", 2),
    (51, "The Clarion", 1),
    (52, "Demands", 1),
    (53, "Cycles", 1),
    (54, "Cycles", 2),
    (55, "Spirit", 1),
    (56, "Distraction", 1),
    (57, "The Clarion", 2),
    (58, "Demands", 2),
    (59, "Spirit", 2),
    (60, "Distraction", 2),
    (61, "Obscuration", 2),
    (62, "Obscuration", 1),
    (63, "Dominion", 1),
    (64, "Dominion", 2),
];

const JUXTAPOSITION_CROSSES: [(Gate, &str, u8); 64] = [
    (1, "Self Expression", 1),
    (2, "The Driver", 1),
    (3, "Mutation", 1),
    (4, "Formulization", 1),
    (5, "Habits", 1),
    (6, "Conflict", 1),
    (7, "Interaction", 1),
    (8, "Contribution", 1),
    (9, "Focus", 1),
    (10, "Behavior", 1),
    (11, "Ideas", 1),
    (12, "Articulation", 1),
    (13, "Listening", 1),
    (14, "Empowering", 1),
    (15, "Extremes", 1),
    (16, "Experimentation", 1),
    (17, "Opinions", 1),
    (18, "Correction", 1),
    (19, "Need", 1),
    (20, "The Now", 1),
    (21, "Control", 1),
    (22, "Grace", 1),
    (23, "Assimilation", 1),
    (24, "Rationalization", 1),
    (25, "Innocence", 1),
    (26, "The Trickster", 1),
    (27, "Caring", 1),
    (28, "Risks", 1),
    (29, "Commitment", 1),
    (30, "Fates", 1),
    (31, "Influence", 1),
    (32, "Conservation", 1),
    (33, "Retreat", 1),
    (34, "Power", 1),
    (35, "Experience", 1),
    (36, "Crisis", 1),
    (37, "Bargains", 1),
    (38, "Opposition", 1),
    (39, "Provocation", 1),
    (40, "Denial", 1),
    (41, "Fantasy", 1),
    (42, "Completion", 1),
    (43, "Insight", 1),
    (44, "Alertness", 1),
    (45, "Possession", 1),
    (46, "Serendipity", 1),
    (47, "Oppression", 1),
    (48, "Depth", 1),
    (49, "Principles", 1),
    (50, "Values", 1),
    (51, "Shock", 1),
    (52, "Stillness", 1),
    (53, "Beginnings", 1),
    (54, "Ambition", 1),
    (55, "Moods", 1),
    (56, "Stimulation", 1),
    (57, "Intuition", 1),
    (58, "Vitality", 1),
    (59, "Strategy", 1),
    (60, "Limitation", 1),
    (61, "Thinking", 1),
    (62, "Detail", 1),
    (63, "Doubts", 1),
    (64, "Confusion", 1),
];

fn cross_name(angle: Angle, theme: &str, variant: u8) -> String {
    let mut name = match angle {
        Angle::Right => format!("The Right Angle Cross of {}", theme),
        Angle::Left => format!("Left Angle Cross of {}", theme),
        Angle::Juxtaposition => format!("Juxtaposition Cross of {}", theme),
    };
    if variant > 1 {
        name.push_str(&format!(" {}", variant));
    }
    name
}

lazy_static! {
    static ref INCARNATION_CROSSES: HashMap<(Angle, Gate), String> = {
        let mut table = HashMap::new();
        let sources: [(Angle, &[(Gate, &str, u8)]); 3] = [
            (Angle::Right, &RIGHT_ANGLE_CROSSES),
            (Angle::Left, &LEFT_ANGLE_CROSSES),
            (Angle::Juxtaposition, &JUXTAPOSITION_CROSSES),
        ];
        for (angle, entries) in sources.iter() {
            for &(gate, theme, variant) in entries.iter() {
                table.insert((*angle, gate), cross_name(*angle, theme, variant));
            }
        }
        table
    };
}

/// Exact incarnation-cross lookup without fallback.
pub fn find_incarnation_cross(angle: Angle, gate: Gate) -> Option<&'static str> {
    INCARNATION_CROSSES.get(&(angle, gate)).map(|s| s.as_str())
}

/// Incarnation-cross name for the personality Sun gate, with a generic
/// fallback for pairs the table does not name.
pub fn incarnation_cross(angle: Angle, gate: Gate) -> String {
    match find_incarnation_cross(angle, gate) {
        Some(name) => name.to_string(),
        None => {
            warn!(%angle, gate, "no incarnation cross for angle and gate, using generic label");
            format!("{} Angle Cross of Gate {}", angle, gate)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_wheel_is_a_permutation() {
        let mut gates: Vec<Gate> = WHEEL.to_vec();
        gates.sort_unstable();
        assert_eq!(gates, (1..=64).collect::<Vec<Gate>>());
    }

    #[test]
    fn test_center_partition_is_total_and_disjoint() {
        let mut seen = HashSet::new();
        for (_, gates) in CENTER_GATES.iter() {
            for gate in gates.iter() {
                assert!(seen.insert(*gate), "gate {} appears twice", gate);
            }
        }
        assert_eq!(seen.len(), 64);
        for gate in 1..=64u8 {
            assert!(center_of(gate).is_some(), "gate {} unmapped", gate);
        }
    }

    #[test]
    fn test_center_of_out_of_range() {
        assert_eq!(center_of(0), None);
        assert_eq!(center_of(65), None);
        assert_eq!(center_of(21), Some(Center::Ego));
        assert_eq!(center_of(22), Some(Center::Emotions));
    }

    #[test]
    fn test_channel_ids_are_canonical_and_unique() {
        let mut ids = HashSet::new();
        for channel in CHANNELS.iter() {
            assert!(channel.low < channel.high);
            assert!(ids.insert(channel.id()));
        }
        assert_eq!(channel_by_id("10-20").map(|c| c.name), Some("Awakening"));
        assert!(channel_by_id("20-10").is_none());
    }

    #[test]
    fn test_no_channel_is_intra_center() {
        for channel in CHANNELS.iter() {
            let (a, b) = channel
                .centers()
                .unwrap_or_else(|| panic!("channel {} has an unmapped gate", channel.id()));
            assert_ne!(a, b, "channel {} stays inside {}", channel.id(), a);
        }
    }

    #[test]
    fn test_channel_with_unmapped_gate_has_no_centers() {
        let stray = Channel::new(10, 65, "Stray");
        assert_eq!(stray.centers(), None);
        assert_eq!(
            channel_by_id("3-60").and_then(Channel::centers),
            Some((Center::Sacral, Center::Root))
        );
    }

    #[test]
    fn test_channels_of_gate() {
        let ids: Vec<String> = channels_of_gate(10).map(|c| c.id()).collect();
        assert_eq!(ids, vec!["10-20", "10-34", "10-57"]);
        assert_eq!(channels_of_gate(41).count(), 1);
    }

    #[test]
    fn test_gates_of() {
        assert_eq!(gates_of(Center::Crown), &[64, 61, 63]);
        let total: usize = Center::ALL.iter().map(|c| gates_of(*c).len()).sum();
        assert_eq!(total, 64);
    }

    #[test]
    fn test_profile_lookup() {
        assert_eq!(Profile::from_lines(4, 1), Some(Profile::OpportunistInvestigator));
        assert_eq!(Profile::from_lines(1, 1), None);
        assert_eq!(lookup_profile(1, 1), Profile::InvestigatorMartyr);
        assert_eq!(Profile::HereticHermit.key(), "5/2");
        assert_eq!(Profile::HereticHermit.label(), "5 / 2");
    }

    #[test]
    fn test_profile_angles() {
        assert_eq!(Profile::OpportunistInvestigator.angle(), Angle::Juxtaposition);
        assert_eq!(Profile::RoleModelMartyr.angle(), Angle::Left);
        assert_eq!(Profile::OpportunistRoleModel.angle(), Angle::Right);
        assert_eq!(Profile::InvestigatorMartyr.angle(), Angle::Right);
    }

    #[test]
    fn test_cross_tables_are_indexed_by_gate() {
        for table in [&RIGHT_ANGLE_CROSSES, &LEFT_ANGLE_CROSSES, &JUXTAPOSITION_CROSSES] {
            for (index, (gate, _, _)) in table.iter().enumerate() {
                assert_eq!(*gate as usize, index + 1);
            }
        }
    }

    #[test]
    fn test_incarnation_cross_names() {
        assert_eq!(
            incarnation_cross(Angle::Right, 1),
            "The Right Angle Cross of The Sphinx 4"
        );
        assert_eq!(
            incarnation_cross(Angle::Right, 63),
            "The Right Angle Cross of Consciousness"
        );
        assert_eq!(incarnation_cross(Angle::Left, 1), "Left Angle Cross of Defiance 2");
        assert_eq!(
            incarnation_cross(Angle::Juxtaposition, 1),
            "Juxtaposition Cross of Self Expression"
        );
    }

    #[test]
    fn test_incarnation_cross_fallback() {
        assert_eq!(find_incarnation_cross(Angle::Left, 0), None);
        assert_eq!(incarnation_cross(Angle::Left, 0), "Left Angle Cross of Gate 0");
    }
}
