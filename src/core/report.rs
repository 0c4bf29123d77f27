//! Plain-text reports for charts and composites

use chrono::{DateTime, Utc};

use super::activation::{decode, Activation};
use super::bodies::{Body, ChartSide};
use super::chart::{ActivationMap, ChartResult, Variable};
use super::composite::{ClassifiedChannel, CompositeAnalysis, Origin};
use super::config::ChartConfig;
use super::snapshot::ChartAngles;
use super::tables::{channel_by_id, Center};
use super::transit::{stelliums, TransitComposite};
use super::zodiac::{format_degrees, whole_sign_house, Modality, ZodiacSign};

const RULE: &str = "-------------------------------";

/// Body with the highest in-sign degree among the destiny bodies.
///
/// Ties keep the body that comes first in [`Body::DESTINY_ORDER`].
pub fn highest_activation(map: &ActivationMap) -> Option<(Body, &Activation)> {
    let mut best: Option<(Body, &Activation)> = None;
    for body in Body::DESTINY_ORDER {
        let Some(activation) = map.get(&body) else {
            continue;
        };
        let in_sign = activation.longitude.rem_euclid(30.0);
        let better = match best {
            Some((_, current)) => in_sign > current.longitude.rem_euclid(30.0),
            None => true,
        };
        if better {
            best = Some((body, activation));
        }
    }
    best
}

fn placement(activation: &Activation) -> String {
    format!(
        "{}.{}, {} {}",
        activation.gate,
        activation.line,
        ZodiacSign::of(activation.longitude),
        format_degrees(activation.longitude)
    )
}

fn variable_line(name: &str, variable: &Variable) -> String {
    format!(
        "{}: {}, Color {}-Tone {}\n",
        name, variable.orientation, variable.color, variable.tone
    )
}

/// Text report for one chart.
#[derive(Debug, Clone)]
pub struct ChartReport<'a> {
    chart: &'a ChartResult,
    name: Option<&'a str>,
    birth: Option<DateTime<Utc>>,
    design_instant: Option<DateTime<Utc>>,
    personality_angles: Option<ChartAngles>,
    design_angles: Option<ChartAngles>,
}

impl<'a> ChartReport<'a> {
    pub fn new(chart: &'a ChartResult) -> Self {
        Self {
            chart,
            name: None,
            birth: None,
            design_instant: None,
            personality_angles: None,
            design_angles: None,
        }
    }

    pub fn with_name(mut self, name: &'a str) -> Self {
        self.name = Some(name);
        self
    }

    pub fn with_instants(
        mut self,
        birth: Option<DateTime<Utc>>,
        design_instant: Option<DateTime<Utc>>,
    ) -> Self {
        self.birth = birth;
        self.design_instant = design_instant;
        self
    }

    pub fn with_angles(mut self, side: ChartSide, angles: Option<ChartAngles>) -> Self {
        match side {
            ChartSide::Personality => self.personality_angles = angles,
            ChartSide::Design => self.design_angles = angles,
        }
        self
    }

    pub fn render(&self, config: &ChartConfig) -> String {
        let chart = self.chart;
        let mut out = String::new();

        out.push_str("Human Design Chart\n");
        out.push_str(RULE);
        out.push('\n');
        if let Some(name) = self.name {
            out.push_str(&format!("Name: {}\n", name));
        }
        if let Some(birth) = self.birth {
            out.push_str(&format!("Birth (UTC): {}\n", birth.format("%Y-%m-%d %H:%M:%S")));
        }
        if let Some(design) = self.design_instant {
            out.push_str(&format!("Design (UTC): {}\n", design.format("%Y-%m-%d %H:%M:%S")));
        }

        for (side, map, angles) in [
            (ChartSide::Personality, &chart.personality, self.personality_angles),
            (ChartSide::Design, &chart.design, self.design_angles),
        ] {
            let title = match side {
                ChartSide::Personality => "Personality",
                ChartSide::Design => "Design",
            };
            out.push_str(&format!("\n{} Positions:\n", title));
            render_positions(&mut out, map, config);
            if config.show_cross_points {
                out.push_str(&format!("\n{} Cross Points:\n", title));
                render_cross_points(&mut out, angles);
            }
        }

        out.push_str("\nCore Information:\n");
        out.push_str(&format!("Type: {}\n", chart.chart_type));
        out.push_str(&format!("Strategy: {}\n", chart.chart_type.strategy()));
        out.push_str(&format!("Authority: {}\n", chart.authority));
        out.push_str(&format!("Definition: {}\n", chart.definition));
        out.push_str(&format!(
            "Profile: {} ({})\n",
            chart.profile,
            chart.profile.archetypes()
        ));
        out.push_str(&format!("Incarnation Cross: {}\n", chart.incarnation_cross));
        out.push_str(&format!("Modality: {}\n", chart.modality));

        out.push_str("\nCenters:\n");
        render_center_status(&mut out, chart);

        out.push_str("\nVariables:\n");
        let variables = &chart.variables;
        out.push_str(&variable_line("Digestion", &variables.digestion));
        out.push_str(&variable_line("Environment", &variables.environment));
        out.push_str(&variable_line("Awareness", &variables.awareness));
        out.push_str(&variable_line("Perspective", &variables.perspective));

        out.push_str("\nDestiny Map:\n");
        if let Some((body, activation)) = highest_activation(&chart.personality) {
            out.push_str(&format!("Life Purpose ({}): {}\n", body, placement(activation)));
        }
        if let Some((body, activation)) = highest_activation(&chart.design) {
            out.push_str(&format!("Soul Purpose ({}): {}\n", body, placement(activation)));
        }

        out.push_str("\nActive Channels:\n");
        render_active_channels(&mut out, chart);

        out
    }

    /// Transit report: the personality side only, with stelliums and the
    /// Sun's modality. The instant comes from [`ChartReport::with_instants`].
    pub fn render_transit(&self, config: &ChartConfig) -> String {
        let chart = self.chart;
        let mut out = String::new();

        out.push_str("Human Design Transit Analysis\n");
        out.push_str(RULE);
        out.push('\n');
        if let Some(name) = self.name {
            out.push_str(&format!("Name: {}\n", name));
        }
        if let Some(at) = self.birth {
            out.push_str(&format!("Date/Time (UTC): {}\n", at.format("%Y-%m-%d %H:%M:%S")));
        }

        out.push_str("\nTransit Planetary Positions:\n");
        render_positions(&mut out, &chart.personality, config);

        let found = stelliums(&chart.personality);
        if !found.is_empty() {
            out.push_str("\nTransit Stelliums:\n");
            for stellium in &found {
                let bodies: Vec<String> = stellium.bodies.iter().map(|b| b.to_string()).collect();
                out.push_str(&format!(
                    "Stellium in {} ({})\n",
                    stellium.sign,
                    bodies.join(", ")
                ));
            }
        }

        if let Some(sun) = chart.personality.get(&Body::Sun) {
            out.push_str(&format!(
                "\nTransit Modality (Sun): {}\n",
                Modality::of(sun.longitude)
            ));
        }

        out.push_str("\nTransit Active Channels:\n");
        render_active_channels(&mut out, chart);

        out.push_str("\nTransit Defined Centers:\n");
        render_center_status(&mut out, chart);

        if config.show_cross_points {
            out.push_str("\nTransit Cross Points:\n");
            render_cross_points(&mut out, self.personality_angles);
        }

        out
    }
}

fn render_positions(out: &mut String, map: &ActivationMap, config: &ChartConfig) {
    for body in Body::REPORT_ORDER {
        let Some(activation) = map.get(&body) else {
            continue;
        };
        out.push_str(&format!("{}: {}", body, placement(activation)));
        if config.show_houses {
            if let Some(house) = activation.house {
                out.push_str(&format!(", House {}", house));
            }
        }
        out.push('\n');
    }
}

fn render_center_status(out: &mut String, chart: &ChartResult) {
    for center in Center::ALL {
        let status = if chart.is_defined(center) {
            "Defined"
        } else {
            "Undefined"
        };
        out.push_str(&format!("{}: {}\n", center, status));
    }
}

fn render_active_channels(out: &mut String, chart: &ChartResult) {
    if chart.active_channels.is_empty() {
        out.push_str("None\n");
    }
    for id in &chart.active_channels {
        match channel_by_id(id) {
            Some(channel) => out.push_str(&format!("Channel {} ({})\n", id, channel.name)),
            None => out.push_str(&format!("Channel {}\n", id)),
        }
    }
}

fn render_cross_points(out: &mut String, angles: Option<ChartAngles>) {
    let Some(angles) = angles else {
        out.push_str("Cross points unavailable.\n");
        return;
    };

    let mut points = vec![
        ("Ascendant", angles.ascendant),
        ("Midheaven", angles.midheaven),
        ("Imum Coeli", angles.imum_coeli()),
        ("Descendant", angles.descendant()),
    ];
    if let Some(vertex) = angles.vertex {
        points.push(("Vertex", vertex));
    }

    for (name, longitude) in points {
        match decode(longitude) {
            Ok(activation) => out.push_str(&format!(
                "{}: {}, House {}\n",
                name,
                placement(&activation),
                whole_sign_house(longitude, angles.ascendant)
            )),
            Err(_) => out.push_str(&format!("{}: unavailable\n", name)),
        }
    }
}

fn origin_label(origin: Origin, name_a: &str, name_b: &str) -> String {
    match origin {
        Origin::A => name_a.to_string(),
        Origin::B => name_b.to_string(),
        Origin::Both => "both".to_string(),
        Origin::Composite => "composite only".to_string(),
    }
}

fn render_channel_list(out: &mut String, title: &str, channels: &[ClassifiedChannel]) {
    out.push_str(&format!("\n{} ({}):\n", title, channels.len()));
    if channels.is_empty() {
        out.push_str("None\n");
    }
    for channel in channels {
        let name = channel_by_id(&channel.id).map(|c| c.name).unwrap_or("");
        out.push_str(&format!("Channel {} {}", channel.id, name));
        if let Some(description) = &channel.description {
            out.push_str(&format!(" - {}", description));
        }
        if channel.approximate {
            out.push_str(" [approximate]");
        }
        out.push('\n');
    }
}

/// Text report for a two-chart composite.
pub fn composite_report(analysis: &CompositeAnalysis, name_a: &str, name_b: &str) -> String {
    render_composite(analysis, name_a, name_b, None)
}

/// Text report for a natal chart under a transit.
pub fn transit_composite_report(composite: &TransitComposite, natal_name: &str) -> String {
    render_composite(
        &composite.analysis,
        natal_name,
        "Transit",
        Some(&composite.definition),
    )
}

fn render_composite(
    analysis: &CompositeAnalysis,
    name_a: &str,
    name_b: &str,
    definition: Option<&str>,
) -> String {
    let mut out = String::new();

    out.push_str(&format!("Composite Chart: {} & {}\n", name_a, name_b));
    out.push_str(RULE);
    out.push('\n');
    out.push_str(&format!("Composite Code: {}\n", analysis.centers.code));
    if let Some(definition) = definition {
        out.push_str(&format!("Definition: {}\n", definition));
    }

    out.push_str("\nCenters:\n");
    for center in Center::ALL {
        match analysis.centers.origin_of(center) {
            Some(origin) => out.push_str(&format!(
                "{}: Defined ({})\n",
                center,
                origin_label(origin, name_a, name_b)
            )),
            None => out.push_str(&format!("{}: Open\n", center)),
        }
    }

    render_channel_list(&mut out, "Electromagnetic", &analysis.electromagnetic);
    render_channel_list(&mut out, "Compromise", &analysis.compromise);
    render_channel_list(&mut out, "Companion", &analysis.companion);
    render_channel_list(&mut out, "Dominance", &analysis.dominance);

    out
}
