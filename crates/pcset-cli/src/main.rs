//! pcset: recognize chords and replay cadences from the command line

mod config;

use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use pcset_core::{
    dissonance_level, from_cadence, interval_vector, normal_form, prime_form, recognize,
    to_cadence, transpose_cadence, zero_form, Chord, IntervalVector, NoteName, PitchClass, Spelling,
};
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "pcset", version, about = "Pitch-class set analysis and chord naming")]
struct Cli {
    /// Config file (defaults to <config dir>/pcset/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Prefer flat spellings for computed pitches
    #[arg(long, global = true, conflicts_with = "sharp")]
    flat: bool,

    /// Prefer sharp spellings for computed pitches
    #[arg(long, global = true)]
    sharp: bool,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Name the chord formed by a fundamental and its upper tones
    Recognize {
        /// Note names (C, F#, Bb) or integers, fundamental first
        #[arg(required = true)]
        tones: Vec<String>,
    },
    /// Show the canonical forms, interval vector and dissonance of a set
    Analyze {
        #[arg(required = true)]
        tones: Vec<String>,
    },
    /// Derive the cadence between two chords and replay it at another root
    Cadence {
        /// Origin chord, comma separated
        #[arg(long, value_delimiter = ',', required = true)]
        from: Vec<String>,
        /// Destination chord, comma separated
        #[arg(long, value_delimiter = ',', required = true)]
        to: Vec<String>,
        /// Root to replay the cadence from
        #[arg(long)]
        at: String,
        /// Place the destination at `--at` instead of moving from it
        #[arg(long)]
        fixed: bool,
    },
}

#[derive(Serialize)]
struct Analysis {
    tones: Vec<PitchClass>,
    zero_form: Vec<PitchClass>,
    normal_form: Vec<PitchClass>,
    prime_form: Vec<PitchClass>,
    interval_vector: IntervalVector,
    dissonance: i32,
}

#[derive(Serialize)]
struct CadenceReport<'a> {
    from: &'a Chord,
    to: &'a Chord,
    cadence: &'a pcset_core::Cadence,
    replayed: &'a Chord,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let (mut config, config_warning) = match &cli.config {
        Some(path) => (config::load_config_from(path)?, None),
        None => config::load_default_config(),
    };
    if cli.flat {
        config.spelling = Spelling::Flat;
    }
    if cli.sharp {
        config.spelling = Spelling::Sharp;
    }
    config.json |= cli.json;

    // Initialize logging
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::new(format!("pcset={0},pcset_core={0}", config.log_level))
    });
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    if let Some(warning) = config_warning {
        tracing::warn!("{:#}", warning);
    }
    tracing::debug!(?config, "Loaded configuration");

    match cli.command {
        Command::Recognize { tones } => {
            let chord = recognize(config.spelling, &parse_tones(&tones)?)?;
            if config.json {
                println!("{}", serde_json::to_string_pretty(&chord)?);
            } else {
                println!("{}", chord);
            }
        }
        Command::Analyze { tones } => {
            let pcs = parse_tones(&tones)?;
            let analysis = Analysis {
                zero_form: zero_form(&pcs),
                normal_form: normal_form(&pcs),
                prime_form: prime_form(&pcs),
                interval_vector: interval_vector(&pcs),
                dissonance: dissonance_level(&pcs).score,
                tones: pcs,
            };
            if config.json {
                println!("{}", serde_json::to_string_pretty(&analysis)?);
            } else {
                print_analysis(&analysis);
            }
        }
        Command::Cadence { from, to, at, fixed } => {
            let origin = recognize(config.spelling, &parse_tones(&from)?)?;
            let target = recognize(config.spelling, &parse_tones(&to)?)?;
            let cadence = to_cadence(&origin, &target);
            let root = parse_tone(&at)?;
            let replayed = if fixed {
                transpose_cadence(config.spelling, root, &cadence)?
            } else {
                from_cadence(config.spelling, root, &cadence)?
            };
            tracing::info!("Replayed {} -> {} at {}", origin, target, at);

            if config.json {
                let report = CadenceReport { from: &origin, to: &target, cadence: &cadence, replayed: &replayed };
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("{} -> {}  ({:?})", origin, target, cadence.movement);
                println!("{}", replayed);
            }
        }
    }

    Ok(())
}

/// A note name or an integer pitch (reduced mod 12)
fn parse_tone(token: &str) -> anyhow::Result<PitchClass> {
    if let Ok(value) = token.trim().parse::<i64>() {
        return Ok(PitchClass::new(value));
    }
    let name: NoteName = token.parse().with_context(|| format!("Cannot read tone {token:?}"))?;
    Ok(name.pitch_class())
}

fn parse_tones(tokens: &[String]) -> anyhow::Result<Vec<PitchClass>> {
    let tones = tokens.iter().map(|t| parse_tone(t)).collect::<anyhow::Result<Vec<_>>>()?;
    if tones.is_empty() {
        bail!("No tones given");
    }
    Ok(tones)
}

fn join(pcs: &[PitchClass]) -> String {
    pcs.iter().map(|pc| pc.to_string()).collect::<Vec<_>>().join(" ")
}

fn print_analysis(analysis: &Analysis) {
    println!("tones:           {}", join(&analysis.tones));
    println!("zero form:       {}", join(&analysis.zero_form));
    println!("normal form:     {}", join(&analysis.normal_form));
    println!("prime form:      {}", join(&analysis.prime_form));
    println!("interval vector: {:?}", analysis.interval_vector);
    println!("dissonance:      {}", analysis.dissonance);
}
