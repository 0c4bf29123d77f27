//! bg - Human Design charts from the command line
//!
//! Decodes longitudes, builds charts from JSON input documents, classifies
//! two-chart composites and reads transits, alone or over a natal chart.

// Exclude from coverage - CLI binary tested via integration tests
#![cfg_attr(tarpaulin, ignore)]

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use bodygraph::core::{
    composite_report, format_degrees, stelliums, transit_composite_report, ChartReport,
    ChartSide, OutputFormat, Stellium, TransitComposite, ZodiacSign,
};
use bodygraph::{
    classify, decode, transit_composite, ChartConfig, ChartInput, ChartResult,
    CompositeAnalysis, TransitInput,
};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Human Design chart engine
#[derive(Parser, Debug)]
#[command(name = "bg")]
#[command(version)]
#[command(about = "Decode longitudes and build Human Design charts")]
#[command(after_help = "EXAMPLES:
  # Decode a few longitudes
  bg decode 3.875 125.5 -10

  # Build a chart from an input document
  bg chart subject.json

  # Compare two subjects as JSON
  bg composite ann.json ben.json --format json -o composite.json

  # Read a transit, then lay it over a natal chart
  bg transit sky.json
  bg transit sky.json --natal ann.json
")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Output format [text, json] (default: from config)
    #[arg(long = "format", value_enum, global = true, help_heading = "OUTPUT")]
    format: Option<FormatArg>,

    /// Output file path (default: stdout)
    #[arg(short = 'o', long = "output", value_name = "FILE", global = true, help_heading = "OUTPUT")]
    output: Option<PathBuf>,

    /// Config file path
    #[arg(short = 'c', long = "config", value_name = "FILE", global = true, help_heading = "SETTINGS")]
    config: Option<PathBuf>,

    /// Log engine decisions to stderr
    #[arg(short = 'v', long = "verbose", global = true, help_heading = "SETTINGS")]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Decode ecliptic longitudes into gate.line and finer levels
    Decode {
        /// Longitudes in degrees; values outside 0-360 are wrapped
        #[arg(value_name = "LONGITUDE", required = true, allow_negative_numbers = true)]
        longitudes: Vec<f64>,
    },
    /// Build a chart from a JSON input document
    Chart {
        /// Chart input document
        #[arg(value_name = "INPUT")]
        input: PathBuf,
    },
    /// Build two charts and classify their composite
    Composite {
        /// First subject's input document
        #[arg(value_name = "INPUT_A")]
        input_a: PathBuf,
        /// Second subject's input document
        #[arg(value_name = "INPUT_B")]
        input_b: PathBuf,
    },
    /// Build a transit chart, optionally classified against a natal chart
    Transit {
        /// Transit input document
        #[arg(value_name = "INPUT")]
        input: PathBuf,
        /// Natal chart input document to compare with
        #[arg(long = "natal", value_name = "FILE")]
        natal: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatArg {
    #[value(alias = "txt")]
    Text,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

#[derive(Serialize)]
struct CompositeOutput<'a> {
    a: &'a ChartResult,
    b: &'a ChartResult,
    composite: &'a CompositeAnalysis,
}

#[derive(Serialize)]
struct TransitOutput<'a> {
    transit: &'a ChartResult,
    stelliums: Vec<Stellium>,
}

#[derive(Serialize)]
struct TransitCompositeOutput<'a> {
    natal: &'a ChartResult,
    transit: &'a ChartResult,
    composite: &'a TransitComposite,
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn write_output(path: Option<&Path>, content: &str) -> Result<()> {
    match path {
        Some(path) => fs::write(path, content)
            .with_context(|| format!("writing {}", path.display())),
        None => {
            print!("{}", content);
            Ok(())
        }
    }
}

fn load_input(path: &Path) -> Result<ChartInput> {
    Ok(ChartInput::from_file(path)?)
}

fn decode_command(longitudes: &[f64], format: OutputFormat) -> Result<String> {
    let activations = longitudes
        .iter()
        .map(|&longitude| decode(longitude))
        .collect::<bodygraph::Result<Vec<_>>>()?;

    if format == OutputFormat::Json {
        return Ok(serde_json::to_string_pretty(&activations)? + "\n");
    }

    let mut out = String::new();
    for activation in &activations {
        out.push_str(&format!(
            "{:>10.4}  {:>5}  color {} tone {} base {}  {} {}\n",
            activation.longitude,
            activation.to_string(),
            activation.color,
            activation.tone,
            activation.base,
            ZodiacSign::of(activation.longitude),
            format_degrees(activation.longitude)
        ));
    }
    Ok(out)
}

fn chart_command(input: &Path, config: &ChartConfig) -> Result<String> {
    let document = load_input(input)?;
    let chart = document
        .build()
        .with_context(|| format!("building chart from {}", input.display()))?;
    debug!(chart_type = %chart.chart_type, "chart ready");

    if config.format == OutputFormat::Json {
        return Ok(serde_json::to_string_pretty(&chart)? + "\n");
    }

    let mut report = ChartReport::new(&chart)
        .with_instants(document.birth, document.design_instant)
        .with_angles(ChartSide::Personality, document.personality.angles)
        .with_angles(ChartSide::Design, document.design.angles);
    if let Some(name) = document.name.as_deref() {
        report = report.with_name(name);
    }
    Ok(report.render(config))
}

fn composite_command(input_a: &Path, input_b: &Path, config: &ChartConfig) -> Result<String> {
    let document_a = load_input(input_a)?;
    let document_b = load_input(input_b)?;
    let a = document_a
        .build()
        .with_context(|| format!("building chart from {}", input_a.display()))?;
    let b = document_b
        .build()
        .with_context(|| format!("building chart from {}", input_b.display()))?;
    let analysis = classify(&a, &b);

    if config.format == OutputFormat::Json {
        let output = CompositeOutput {
            a: &a,
            b: &b,
            composite: &analysis,
        };
        return Ok(serde_json::to_string_pretty(&output)? + "\n");
    }

    Ok(composite_report(
        &analysis,
        document_a.display_name("Person A"),
        document_b.display_name("Person B"),
    ))
}

fn transit_command(input: &Path, natal: Option<&Path>, config: &ChartConfig) -> Result<String> {
    let document = TransitInput::from_file(input)?;
    let transit = document
        .build()
        .with_context(|| format!("building transit from {}", input.display()))?;

    let Some(natal_path) = natal else {
        if config.format == OutputFormat::Json {
            let output = TransitOutput {
                transit: &transit,
                stelliums: stelliums(&transit.personality),
            };
            return Ok(serde_json::to_string_pretty(&output)? + "\n");
        }
        let mut report = ChartReport::new(&transit)
            .with_instants(document.at, None)
            .with_angles(ChartSide::Personality, document.transit.angles);
        if let Some(name) = document.name.as_deref() {
            report = report.with_name(name);
        }
        return Ok(report.render_transit(config));
    };

    let natal_document = load_input(natal_path)?;
    let natal = natal_document
        .build()
        .with_context(|| format!("building chart from {}", natal_path.display()))?;
    let composite = transit_composite(&natal, &transit);
    debug!(definition = %composite.definition, "transit composite ready");

    if config.format == OutputFormat::Json {
        let output = TransitCompositeOutput {
            natal: &natal,
            transit: &transit,
            composite: &composite,
        };
        return Ok(serde_json::to_string_pretty(&output)? + "\n");
    }

    Ok(transit_composite_report(
        &composite,
        natal_document.display_name("Natal"),
    ))
}

fn run(cli: Cli) -> Result<()> {
    let working_dir = std::env::current_dir().context("reading current directory")?;
    let mut config = ChartConfig::load(cli.config.as_deref(), &working_dir)?;
    if let Some(format) = cli.format {
        config = config.with_format(format.into());
    }

    let content = match &cli.command {
        Command::Decode { longitudes } => decode_command(longitudes, config.format)?,
        Command::Chart { input } => chart_command(input, &config)?,
        Command::Composite { input_a, input_b } => composite_command(input_a, input_b, &config)?,
        Command::Transit { input, natal } => transit_command(input, natal.as_deref(), &config)?,
    };

    write_output(cli.output.as_deref(), &content)
}

fn main() {
    // Reset SIGPIPE to default behavior (terminate quietly when piped to head)
    #[cfg(unix)]
    {
        unsafe {
            libc::signal(libc::SIGPIPE, libc::SIG_DFL);
        }
    }

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
