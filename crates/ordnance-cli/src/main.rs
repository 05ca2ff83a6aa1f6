use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use tracing::warn;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use ordnance_core::equipment::Catalog;
use ordnance_core::location::Location;
use ordnance_core::vehicle::Vehicle;
use ordnance_data::{LoadOptions, LoaderConfig, load_catalog, load_vehicle_file};

#[derive(Parser, Debug)]
#[command(author, version, about = "Support vehicle data file utilities")]
struct Cli {
    /// Directory holding an `ordnance.{ron,toml,json}` configuration.
    #[arg(long, default_value = ".")]
    config: PathBuf,

    /// Equipment catalog file. Overrides the configured catalog.
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Fail on equipment missing from the catalog.
    #[arg(long)]
    strict: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build a vehicle from a data file and print it.
    Inspect {
        file: PathBuf,
        /// Print the vehicle as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Check that each data file builds a valid vehicle.
    Validate {
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let config = LoaderConfig::discover(&cli.config).with_context(|| {
        format!(
            "failed to read loader configuration in {}",
            cli.config.display()
        )
    })?;
    let catalog = resolve_catalog(cli.catalog.as_deref().or(config.catalog.as_deref()))?;
    let mut options = config.load_options();
    if cli.strict {
        options.strict_equipment = true;
    }

    match cli.command {
        Command::Inspect { file, json } => handle_inspect(&file, &catalog, &options, json),
        Command::Validate { files } => handle_validate(&files, &catalog, &options),
    }
}

fn resolve_catalog(path: Option<&Path>) -> Result<Catalog> {
    match path {
        Some(path) => load_catalog(path)
            .with_context(|| format!("failed to load equipment catalog {}", path.display())),
        None => {
            warn!("no equipment catalog configured; all equipment will be recorded as failed");
            Ok(Catalog::new())
        }
    }
}

fn handle_inspect(path: &Path, catalog: &Catalog, options: &LoadOptions, json: bool) -> Result<()> {
    let vehicle = load_vehicle_file(path, catalog, options)
        .with_context(|| format!("failed to load vehicle from {}", path.display()))?;

    if json {
        let text =
            serde_json::to_string_pretty(&vehicle).context("failed to serialize vehicle")?;
        println!("{text}");
    } else {
        print_summary(&vehicle);
    }
    Ok(())
}

fn handle_validate(files: &[PathBuf], catalog: &Catalog, options: &LoadOptions) -> Result<()> {
    let mut failures = 0usize;
    for path in files {
        match load_vehicle_file(path, catalog, options) {
            Ok(vehicle) => println!("OK   {} ({} {})", path.display(), vehicle.chassis, vehicle.model),
            Err(err) => {
                failures += 1;
                println!("FAIL {err}");
            }
        }
    }
    if failures > 0 {
        bail!("{failures} of {} files failed validation", files.len());
    }
    Ok(())
}

fn print_summary(v: &Vehicle) {
    println!("{} {}", v.chassis, v.model);
    if let Some(source) = &v.source {
        println!("  Source:    {source}");
    }
    println!("  Tonnage:   {}", v.tonnage);
    println!("  Movement:  {} ({} MP)", v.movement_mode, v.original_walk_mp);
    println!(
        "  Engine:    {} {} (suspension {})",
        v.engine.engine_type.name(),
        v.engine.rating,
        v.suspension_factor()
    );
    println!(
        "  Tech:      structure {} / armor {} / engine {}",
        v.structural_tech_rating,
        v.armor_tech_rating(),
        v.engine_tech_rating()
    );
    if v.patchwork_armor {
        println!("  Armor:     patchwork, {} t", v.armor_tonnage);
    } else {
        println!("  Armor:     {}, {} t", v.armor_type.name(), v.armor_tonnage);
    }
    for location in Location::ALL.into_iter().take(v.locations()) {
        if let Some(slot) = v.slot(location) {
            let internal = slot.internal.map_or("-".to_string(), |i| i.to_string());
            let bar = slot.bar_rating.map_or("-".to_string(), |b| b.to_string());
            println!(
                "    {:<7} armor {:>3}  internal {:>2}  BAR {}",
                location.name(),
                slot.armor,
                internal,
                bar
            );
        }
    }

    println!("  Equipment: {}", v.equipment_count());
    for location in Location::ALL {
        for mounted in v.equipment_at(location) {
            let mut line = format!("    {:<7} {}", location.name(), mounted.equipment.name);
            if let Some(size) = mounted.size {
                line.push_str(&format!(" [{size}]"));
            }
            if mounted.rear_mounted {
                line.push_str(" (R)");
            }
            if mounted.omni_pod {
                line.push_str(" (OMNI)");
            }
            println!("{line}");
        }
    }
    if !v.failed_equipment.is_empty() {
        println!("  Unresolved equipment: {}", v.failed_equipment.join(", "));
    }
    for bay in &v.transports {
        println!("  Transport: {} {} ({} doors)", bay.kind.key(), bay.capacity, bay.doors);
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
