use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use itemforge::config::Config;
use itemforge::export::{self, DISABLED_HINT, ExportOutcome, SystemClipboard};
use itemforge::import::{self, FileFormat};
use itemforge::models::{ItemRecord, Target};
use itemforge::presets::Preset;
use itemforge::{Session, Shell, generator, lua};
use std::path::{Path, PathBuf};

// cargo run -- generate items/water_bottle.yaml --target qb
// cargo run -- shell items/sprunk.yaml

#[derive(Debug, Parser)]
#[command(name = "itemforge", version, about = "Generate ox_inventory and qb-inventory item definitions")]
struct Cli {
    /// TOML config file (defaults and env overrides apply when omitted)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Cmd,
}

#[derive(Debug, Subcommand)]
enum Cmd {
    /// Print the snippet for an item file
    Generate {
        file: PathBuf,
        #[arg(long, value_enum)]
        target: Option<Target>,
    },
    /// Write `<name>_<target>_inventory.lua`
    Export {
        file: PathBuf,
        #[arg(long, value_enum)]
        target: Option<Target>,
        /// Overrides the configured output directory
        #[arg(long)]
        out_dir: Option<PathBuf>,
    },
    /// Copy the snippet to the clipboard
    Copy {
        file: PathBuf,
        #[arg(long, value_enum)]
        target: Option<Target>,
    },
    /// Compile the snippet with the Lua VM (both targets when none is given)
    Check {
        file: PathBuf,
        #[arg(long, value_enum)]
        target: Option<Target>,
    },
    /// Print an item (blank or from a file) with a preset applied, as YAML
    Preset {
        #[arg(value_enum)]
        preset: Preset,
        file: Option<PathBuf>,
    },
    /// Interactive editor
    Shell { file: Option<PathBuf> },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cfg = Config::resolve(cli.config.as_deref())?;
    init_tracing(&cfg.log_filter)?;

    match cli.command {
        Cmd::Generate { file, target } => {
            let item = load(&file)?;
            println!("{}", generator::generate(&item, target.unwrap_or(cfg.default_target)));
        }
        Cmd::Export { file, target, out_dir } => {
            let item = load(&file)?;
            let target = target.unwrap_or(cfg.default_target);
            let out_dir = out_dir.unwrap_or_else(|| cfg.output_dir.clone());
            match export::download(&item, target, &out_dir, cfg.check_lua)? {
                ExportOutcome::Written(path) => {
                    println!("✅ Wrote {}\n", path.display());
                    println!("{}", generator::render_instructions(target));
                }
                _ => bail!(DISABLED_HINT),
            }
        }
        Cmd::Copy { file, target } => {
            let item = load(&file)?;
            let target = target.unwrap_or(cfg.default_target);
            let mut clipboard = SystemClipboard::new();
            match export::copy_to_clipboard(&item, target, &mut clipboard)? {
                ExportOutcome::Copied { bytes } => {
                    println!("✅ Copied {} bytes of {} code\n", bytes, target.label());
                    println!("{}", generator::render_instructions(target));
                }
                _ => bail!(DISABLED_HINT),
            }
        }
        Cmd::Check { file, target } => {
            let item = load(&file)?;
            let targets = match target {
                Some(t) => vec![t],
                None => Target::ALL.to_vec(),
            };
            for target in targets {
                lua::check_snippet(target, &generator::generate(&item, target))
                    .with_context(|| format!("{} snippet for {}", target.label(), file.display()))?;
                println!("✅ {} snippet compiles", target.label());
            }
        }
        Cmd::Preset { preset, file } => {
            let item = match file {
                Some(path) => load(&path)?,
                None => ItemRecord::default(),
            };
            print!("{}", import::render_item(&preset.apply(&item), FileFormat::Yaml)?);
        }
        Cmd::Shell { file } => {
            let item = match file {
                Some(path) => load(&path)?,
                None => ItemRecord::default(),
            };
            let session = Session::with_record(item, cfg.default_target);
            let mut shell = Shell::new(session, cfg.output_dir.clone(), Box::new(SystemClipboard::new()), cfg.check_lua);

            tracing::info!(default_target = %cfg.default_target, out_dir = %cfg.output_dir.display(), "starting shell");
            let stdin = std::io::stdin();
            shell.run(stdin.lock(), std::io::stdout())?;
        }
    }

    Ok(())
}

fn load(path: &Path) -> anyhow::Result<ItemRecord> {
    import::load_item(path).with_context(|| format!("loading {}", path.display()))
}

fn init_tracing(default_filter: &str) -> anyhow::Result<()> {
    use tracing_subscriber::{EnvFilter, prelude::*};

    color_eyre::install().map_err(|e| anyhow::anyhow!("{e}"))?;

    let filter = match EnvFilter::try_from_default_env() {
        Ok(f) => f,
        Err(_) => EnvFilter::try_new(default_filter)?,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(tracing_error::ErrorLayer::default())
        .try_init()?;

    Ok(())
}
