//! Command line front end for the Game of Life frame generator

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use life_frames::{
    config::{CliOverrides, OutputFormat, Settings},
    game_of_life::create_example_seeds,
    utils::{ColorOutput, FrameFormatter},
    Pattern, RunAnalysis,
};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "life_frames")]
#[command(about = "Conway's Game of Life frame generator")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Args)]
struct SeedArgs {
    /// Configuration file path
    #[arg(short, long, default_value = "config/default.yaml")]
    config: PathBuf,

    /// Built-in seed pattern (overrides config)
    #[arg(short, long, value_enum, conflicts_with = "seed")]
    pattern: Option<Pattern>,

    /// Seed grid file of 0/1 rows (overrides config)
    #[arg(short, long)]
    seed: Option<PathBuf>,

    /// Number of frames to produce (overrides config)
    #[arg(short, long)]
    frames: Option<usize>,
}

#[derive(Subcommand)]
enum Commands {
    /// Simulate and write frames
    Run {
        #[command(flatten)]
        seed: SeedArgs,

        /// Output format (overrides config)
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,

        /// Output directory (overrides config)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print every frame to the console
        #[arg(long)]
        print: bool,
    },

    /// Simulate and classify the run
    Analyze {
        #[command(flatten)]
        seed: SeedArgs,

        /// Print the analysis as JSON
        #[arg(long)]
        json: bool,
    },

    /// Create a default configuration and example seed files
    Setup {
        /// Directory to create files in
        #[arg(short, long, default_value = ".")]
        directory: PathBuf,

        /// Force overwrite existing files
        #[arg(long)]
        force: bool,
    },
}

/// `info` unless the directives select something else
fn log_filter(directives: &str) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .parse_lossy(directives)
}

fn main() -> ExitCode {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).unwrap_or_default();
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(log_filter(&directives))
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run {
            seed,
            format,
            output,
            print,
        } => run_command(seed, format, output, print),
        Commands::Analyze { seed, json } => analyze_command(seed, json),
        Commands::Setup { directory, force } => setup_command(&directory, force),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", ColorOutput::error(&format!("Error: {err:#}")));
            ExitCode::FAILURE
        }
    }
}

/// Load the config file if present, then apply overrides and validate
fn load_settings(args: &SeedArgs, overrides: CliOverrides) -> Result<Settings> {
    let mut settings = if args.config.exists() {
        Settings::from_file(&args.config)
            .with_context(|| format!("Failed to load config from {}", args.config.display()))?
    } else {
        tracing::warn!("Config file {} not found, using defaults", args.config.display());
        Settings::default()
    };

    settings.merge_with_cli(&CliOverrides {
        frames: args.frames,
        pattern: args.pattern,
        seed_file: args.seed.clone(),
        ..overrides
    });
    settings
        .validate()
        .context("Configuration validation failed")?;
    Ok(settings)
}

fn run_command(
    args: SeedArgs,
    format: Option<OutputFormat>,
    output: Option<PathBuf>,
    print: bool,
) -> Result<()> {
    let settings = load_settings(
        &args,
        CliOverrides {
            format,
            output_dir: output,
            print_frames: print,
            ..Default::default()
        },
    )?;

    let start_time = Instant::now();
    let frames = life_frames::generate_frames(&settings).context("Failed to simulate")?;
    let elapsed = start_time.elapsed();

    if settings.output.print_frames {
        println!("{}", FrameFormatter::format_run(&frames, 0));
    }

    let written = FrameFormatter::save_frames(
        &frames,
        0,
        &settings.output.directory,
        settings.output.format,
    )
    .context("Failed to save frames")?;

    println!(
        "{}",
        ColorOutput::success(&format!(
            "Generated {} frame(s) in {:.3}s, wrote {} file(s) to {}",
            frames.len(),
            elapsed.as_secs_f64(),
            written.len(),
            settings.output.directory.display()
        ))
    );

    Ok(())
}

fn analyze_command(args: SeedArgs, json: bool) -> Result<()> {
    let settings = load_settings(&args, CliOverrides::default())?;
    println!("{}", analysis_report(&settings, json)?);
    Ok(())
}

fn analysis_report(settings: &Settings, json: bool) -> Result<String> {
    let frames = life_frames::generate_frames(settings).context("Failed to simulate")?;
    let analysis = RunAnalysis::analyze(&frames);
    if json {
        return analysis.to_json().context("Failed to serialize analysis");
    }

    let mut report = match &settings.simulation.seed_file {
        Some(path) => format!("Seed file: {}\n", path.display()),
        None => {
            let pattern = settings.simulation.pattern;
            format!("Pattern: {} ({})\n", pattern, pattern.description())
        }
    };
    if let Some(first) = frames.first() {
        report.push_str(&format!("Seed ({}x{}):\n", first.width(), first.height()));
        report.push_str(&FrameFormatter::format_grid_with_coords(first));
        report.push_str(&format!("\nSeed density: {:.1}%\n\n", first.density() * 100.0));
    }
    report.push_str(&analysis.to_string());
    Ok(report)
}

fn setup_command(directory: &Path, force: bool) -> Result<()> {
    let config_path = directory.join("config/default.yaml");
    let seeds_dir = directory.join("input/seeds");

    if !config_path.exists() || force {
        let mut settings = Settings::default();
        settings.output.directory = directory.join("output/frames");
        settings
            .to_file(&config_path)
            .context("Failed to create default configuration")?;
        println!("Created: {}", config_path.display());
    } else {
        println!(
            "{}",
            ColorOutput::warning(&format!("Skipped: {} (already exists)", config_path.display()))
        );
    }

    let seeds = create_example_seeds(&seeds_dir).context("Failed to create example seeds")?;
    println!("Created {} example seeds in: {}", seeds.len(), seeds_dir.display());

    println!("\n{}", ColorOutput::success("Setup complete!"));
    println!(
        "Next: life_frames run --config {} --seed {}",
        config_path.display(),
        seeds_dir.join("blinker.txt").display()
    );

    Ok(())
}
