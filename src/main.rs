//! PetAge: Main Entry Point
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                   Adapters (outer ring)                  │
//! │                                                          │
//! │  LogEventSink    JsonFileConfig    Text/JsonSchedule     │
//! │  (EventSink)     (ConfigPort)      Writer (ExportSink)   │
//! │                                                          │
//! │  ────────────── Port Trait Boundary ────────────────     │
//! │                                                          │
//! │  ┌────────────────────────────────────────────────────┐  │
//! │  │            AppService (pure logic)                 │  │
//! │  │  Wizard · Conversion · Life stage · Care           │  │
//! │  └────────────────────────────────────────────────────┘  │
//! │                                                          │
//! │  Front end: interactive prompts or one-shot flags        │
//! └──────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

use std::fs::File;
use std::io::{self, BufRead, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::{debug, info};
use tracing_subscriber::EnvFilter;

use petage::adapters::json_config::JsonFileConfig;
use petage::adapters::log_sink::LogEventSink;
use petage::adapters::schedule_writer::{JsonScheduleWriter, TextScheduleWriter};
use petage::age::describe_age;
use petage::app::commands::AppCommand;
use petage::app::ports::{ConfigPort, ExportSink};
use petage::app::service::AppService;
use petage::care::CareLookup;
use petage::config::{CalculatorConfig, ExportFormat};
use petage::conversion::format_human_age;
use petage::export::schedule_file_name;
use petage::species::Species;
use petage::wizard::StepId;

// ── Command line ──────────────────────────────────────────────

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatArg {
    Text,
    Json,
}

impl From<FormatArg> for ExportFormat {
    fn from(f: FormatArg) -> Self {
        match f {
            FormatArg::Text => Self::Text,
            FormatArg::Json => Self::Json,
        }
    }
}

/// Convert a pet's age to human years and show care guidance for its life stage.
///
/// With no answers given, runs an interactive wizard.
#[derive(Debug, Parser)]
#[command(name = "petage", version, about)]
struct Cli {
    /// Pet type: dog, cat, rabbit or fish
    #[arg(long)]
    species: Option<String>,

    /// Breed, exactly as listed for the species
    #[arg(long)]
    breed: Option<String>,

    /// Age in years, decimals allowed (1.5 = 18 months)
    #[arg(long)]
    age: Option<String>,

    /// Optional pet name (letters and spaces)
    #[arg(long)]
    name: Option<String>,

    /// Write the care schedule in this format
    #[arg(long, value_enum)]
    export: Option<FormatArg>,

    /// Care schedule destination (`-` for stdout)
    #[arg(long, requires = "export")]
    output: Option<PathBuf>,

    /// Print the pet-vs-human age comparison series
    #[arg(long)]
    chart: bool,

    /// JSON config file; missing means defaults
    #[arg(long, default_value = "petage.json")]
    config: PathBuf,

    /// Debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn is_one_shot(&self) -> bool {
        self.species.is_some() || self.breed.is_some() || self.age.is_some()
    }
}

// ── Entry point ───────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config_port = JsonFileConfig::new(&cli.config);
    let mut config = config_port
        .load()
        .with_context(|| format!("loading {}", config_port.path().display()))?;
    if let Some(format) = cli.export {
        config.export_format = format.into();
    }
    debug!("config: {config:?}");

    let mut svc = AppService::new(config);
    let mut sink = LogEventSink::new();
    svc.start(&mut sink);

    if cli.is_one_shot() {
        run_one_shot(&cli, &mut svc, &mut sink)?;
    } else if !run_interactive(&mut svc, &mut sink)? {
        return Ok(());
    }

    {
        let mut stdout = io::stdout().lock();
        print_result(&svc, &mut stdout)?;
        if cli.chart {
            print_chart(&svc, &mut stdout)?;
        }
    }
    if cli.export.is_some() {
        export_schedule(&svc, cli.output.as_ref())?;
    }
    Ok(())
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("petage=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

// ── Front ends ────────────────────────────────────────────────

fn run_one_shot(cli: &Cli, svc: &mut AppService, sink: &mut LogEventSink) -> Result<()> {
    let answers = [
        AppCommand::SelectSpecies(cli.species.clone().unwrap_or_default()),
        AppCommand::SelectBreed(cli.breed.clone().unwrap_or_default()),
        AppCommand::SetAge(cli.age.clone().unwrap_or_default()),
        AppCommand::SetName(cli.name.clone().unwrap_or_default()),
    ];
    for answer in answers {
        svc.handle_command(answer, sink)?;
        svc.handle_command(AppCommand::Next, sink)?;
    }
    info!("one-shot run complete");
    Ok(())
}

/// Prompt until the result step.  `Ok(false)` means the user quit.
fn run_interactive(svc: &mut AppService, sink: &mut LogEventSink) -> Result<bool> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut out = io::stdout();

    println!("Pet Age Calculator. Type 'back', 'restart' or 'quit' at any prompt.");
    while svc.step() != StepId::Result {
        print_prompt(svc, &mut out)?;
        let Some(line) = lines.next() else {
            return Ok(false);
        };
        let line = line.context("reading answer")?;
        let input = line.trim();

        let command = match input {
            "quit" | "exit" => return Ok(false),
            "back" => AppCommand::Back,
            "restart" => AppCommand::StartOver,
            _ => {
                svc.handle_command(answer_for(svc, input), sink)?;
                AppCommand::Next
            }
        };
        if let Err(e) = svc.handle_command(command, sink) {
            println!("  ! {}", e.message());
        }
    }
    Ok(true)
}

/// Turn the typed answer into the field command for the current step.
fn answer_for(svc: &AppService, input: &str) -> AppCommand {
    match svc.step() {
        StepId::Species => AppCommand::SelectSpecies(input.to_lowercase()),
        StepId::Breed => {
            let breeds = svc.available_breeds();
            let picked = input
                .parse::<usize>()
                .ok()
                .and_then(|n| n.checked_sub(1))
                .and_then(|i| breeds.get(i));
            AppCommand::SelectBreed(picked.map_or(input, |b| *b).to_string())
        }
        StepId::Age => match years_and_months(input) {
            Some((years, months)) => AppCommand::SetAgeYearsMonths { years, months },
            None => AppCommand::SetAge(input.to_string()),
        },
        StepId::Name | StepId::Result => AppCommand::SetName(input.to_string()),
    }
}

/// "2 6" as two years six months.
fn years_and_months(input: &str) -> Option<(u32, u32)> {
    let mut parts = input.split_whitespace();
    let years = parts.next()?.parse().ok()?;
    let months = parts.next()?.parse().ok()?;
    if parts.next().is_some() || months > 12 {
        return None;
    }
    Some((years, months))
}

fn print_prompt(svc: &AppService, out: &mut impl Write) -> io::Result<()> {
    let step = svc.step();
    writeln!(out)?;
    writeln!(out, "Step {}/{}: {}", step.number(), StepId::COUNT, step)?;
    match step {
        StepId::Species => {
            let keys: Vec<_> = Species::SUPPORTED.iter().map(|s| s.key()).collect();
            write!(out, "Pet type ({})", keys.join(", "))?;
        }
        StepId::Breed => {
            for (i, breed) in svc.available_breeds().iter().enumerate() {
                writeln!(out, "  {:>2}. {breed}", i + 1)?;
            }
            write!(out, "Breed (number or name)")?;
        }
        StepId::Age => write!(out, "Age in years (e.g. 1.5, or '2 6' for 2 years 6 months)")?,
        StepId::Name => write!(out, "Pet name (optional, Enter to skip)")?,
        StepId::Result => {}
    }
    write!(out, ": ")?;
    out.flush()
}

// ── Output ────────────────────────────────────────────────────

fn print_result(svc: &AppService, out: &mut impl Write) -> Result<()> {
    let result = svc
        .result()
        .context("wizard finished without a result")?;
    let stage = result.stage_info();

    writeln!(out)?;
    writeln!(out, "{}", result.headline())?;
    writeln!(
        out,
        "{} {}, {} old ({} human years)",
        result.breed,
        result.species.label(),
        describe_age(result.chronological_age),
        format_human_age(result.equivalent_age)
    )?;
    writeln!(out, "{}", result.rationale)?;
    writeln!(out)?;
    writeln!(out, "{}: {}", stage.title, stage.description)?;

    match svc.care() {
        Some(CareLookup::Found(profile)) => {
            writeln!(out)?;
            writeln!(out, "{}", profile.overview)?;
            for category in &profile.categories {
                writeln!(out)?;
                writeln!(out, "[{}]", category.name)?;
                for rec in &category.recommendations {
                    writeln!(out, "  * {} ({})", rec.title, rec.importance.key())?;
                    writeln!(out, "    {}", rec.description)?;
                    if let Some(freq) = &rec.frequency {
                        writeln!(out, "    Frequency: {freq}")?;
                    }
                }
            }
        }
        Some(CareLookup::NotFound) | None => {
            writeln!(out, "No care recommendations available for this pet and life stage.")?;
        }
    }
    Ok(())
}

fn print_chart(svc: &AppService, out: &mut impl Write) -> Result<()> {
    let series = svc.chart().context("no result to chart")?;
    let result = svc.result().context("no result to chart")?;
    let marked = series.nearest(result.chronological_age).map(|p| p.pet_age);
    let who = result.name.as_deref().unwrap_or("your pet");

    writeln!(out)?;
    writeln!(out, "{:>8}  {:>10}  stage", "pet age", "human age")?;
    for p in &series.points {
        write!(
            out,
            "{:>8}  {:>10}  {}",
            p.pet_age,
            format_human_age(p.human_age),
            p.stage
        )?;
        if marked == Some(p.pet_age) {
            write!(out, "  <- {who}")?;
        }
        writeln!(out)?;
    }
    Ok(())
}

fn export_schedule(svc: &AppService, output: Option<&PathBuf>) -> Result<()> {
    let config: &CalculatorConfig = svc.config();
    let format = config.export_format;

    if output.is_some_and(|p| p.as_os_str() == "-") {
        let stdout = io::stdout().lock();
        return write_with(svc, format, stdout);
    }

    let path = match output {
        Some(p) => p.clone(),
        None => {
            let name = svc.result().and_then(|r| r.name.as_deref());
            config.export_dir.join(schedule_file_name(name, format))
        }
    };
    let file = File::create(&path).with_context(|| format!("creating {}", path.display()))?;
    write_with(svc, format, BufWriter::new(file))
        .with_context(|| format!("writing {}", path.display()))?;
    println!("Care schedule saved to {}", path.display());
    Ok(())
}

fn write_with(svc: &AppService, format: ExportFormat, out: impl Write) -> Result<()> {
    match format {
        ExportFormat::Text => export_to(svc, &mut TextScheduleWriter::new(out)),
        ExportFormat::Json => export_to(svc, &mut JsonScheduleWriter::new(out)),
    }
}

fn export_to(svc: &AppService, sink: &mut impl ExportSink) -> Result<()> {
    svc.export(sink)?;
    Ok(())
}
