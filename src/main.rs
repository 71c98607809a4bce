use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use gamecat::backend::export;
use gamecat::backend::settings::Settings;
use gamecat::Catalog;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the games CSV file
    #[arg(short, long, global = true)]
    file: Option<PathBuf>,

    /// Ignore the saved configuration and use built-in defaults
    #[arg(long, global = true)]
    no_config: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every genre, sorted
    Genres,
    /// List games of a genre by release year
    ByGenre {
        /// Genre to filter on (defaults to the configured genre)
        genre: Option<String>,
    },
    /// List simulator games by release year
    Simulators,
    /// List publishers by number of games
    Publishers,
    /// Write the genre, genre-games and publisher reports
    Export {
        /// Directory for the report files
        #[arg(short, long, default_value = ".")]
        out_dir: PathBuf,
        /// Genre for the genre-games report
        #[arg(short, long)]
        genre: Option<String>,
        /// Also write the full catalog as JSON to this path
        #[arg(long)]
        json: Option<PathBuf>,
    },
    /// Show or change saved settings
    #[command(subcommand)]
    Config(ConfigCommand),
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Print the effective settings
    Show,
    /// Save the genre used when none is given
    SetGenre { genre: String },
    /// Delete the saved settings
    Reset,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let settings = if args.no_config {
        Settings::default()
    } else {
        Settings::load()
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if let Command::Config(cmd) = &args.command {
        return run_config(cmd, settings, &mut out);
    }

    let path = args
        .file
        .as_deref()
        .context("--file is required for this command")?;
    let catalog = load(path)?;

    match args.command {
        Command::Genres => {
            for genre in catalog.all_genres() {
                writeln!(out, "{genre}")?;
            }
        }
        Command::ByGenre { genre } => {
            let genre = genre.unwrap_or(settings.default_genre);
            export::write_genre_games(&catalog, &genre, &mut out)
                .with_context(|| format!("Failed to list genre {genre}"))?;
        }
        Command::Simulators => {
            export::write_release_rows(&catalog.simulator_games(), &mut out)
                .context("Failed to list simulator games")?;
        }
        Command::Publishers => {
            export::write_publisher_counts(&catalog, &mut out)
                .context("Failed to list publishers")?;
        }
        Command::Export {
            out_dir,
            genre,
            json,
        } => {
            let genre = genre.unwrap_or_else(|| settings.default_genre.clone());
            let written = export::export_all(&catalog, &settings, &genre, &out_dir)
                .with_context(|| format!("Failed to export reports to {:?}", out_dir))?;
            for path in written {
                writeln!(out, "Wrote {}", path.display())?;
            }

            if let Some(path) = json {
                let file = File::create(&path)
                    .with_context(|| format!("Failed to create {:?}", path))?;
                export::write_json(&catalog, file)
                    .with_context(|| format!("Failed to write JSON to {:?}", path))?;
                writeln!(out, "Wrote {}", path.display())?;
            }
        }
        Command::Config(_) => {}
    }

    Ok(())
}

fn load(path: &Path) -> Result<Catalog> {
    let catalog =
        Catalog::load_path(path).with_context(|| format!("Failed to load catalog: {:?}", path))?;
    log::info!("{} records loaded from {:?}", catalog.len(), path);
    Ok(catalog)
}

fn run_config(cmd: &ConfigCommand, mut settings: Settings, out: &mut impl Write) -> Result<()> {
    match cmd {
        ConfigCommand::Show => {
            if let Some(path) = Settings::config_path() {
                writeln!(out, "# {}", path.display())?;
            }
            writeln!(out, "{}", serde_json::to_string_pretty(&settings)?)?;
        }
        ConfigCommand::SetGenre { genre } => {
            settings.default_genre = genre.clone();
            settings.save();
            writeln!(out, "Default genre set to {genre}")?;
        }
        ConfigCommand::Reset => {
            Settings::reset();
            writeln!(out, "Settings reset to defaults")?;
        }
    }
    Ok(())
}
