use anyhow::Context;
use clap::Parser;
use itemforge::config::Config;
use itemforge::export::{self, ExportOutcome};
use itemforge::import;
use itemforge::models::Target;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

// cargo run --bin batch-export -- ./items --target ox --out-dir ./out

#[derive(Debug, Parser)]
#[command(name = "batch-export", version, about = "Export every item file in a directory")]
struct Args {
    /// Directory holding .yaml/.yml/.json/.toml item files
    dir: PathBuf,

    /// Only export for this target (both when omitted)
    #[arg(long, value_enum)]
    target: Option<Target>,

    /// Override the output directory (if omitted, use env/config)
    #[arg(long)]
    out_dir: Option<PathBuf>,

    /// TOML config file
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let cfg = Config::resolve(args.config.as_deref())?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cfg.log_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let out_dir = args.out_dir.unwrap_or_else(|| cfg.output_dir.clone());
    let targets = match args.target {
        Some(t) => vec![t],
        None => Target::ALL.to_vec(),
    };

    let loaded = import::load_dir(&args.dir).with_context(|| format!("reading {}", args.dir.display()))?;

    let mut written = 0usize;
    let mut skipped = 0usize;
    let mut failed = 0usize;

    for (path, item) in loaded {
        let item = match item {
            Ok(item) => item,
            Err(e) => {
                tracing::error!(path = %path.display(), error = %e, "cannot load item file");
                failed += 1;
                continue;
            }
        };

        for &target in &targets {
            match export::download(&item, target, &out_dir, cfg.check_lua) {
                Ok(ExportOutcome::Written(_)) => written += 1,
                Ok(_) => {
                    tracing::warn!(path = %path.display(), "skipping item without name or label");
                    skipped += 1;
                    break;
                }
                Err(e) => {
                    tracing::error!(path = %path.display(), %target, error = %e, "export failed");
                    failed += 1;
                }
            }
        }
    }

    println!(
        "✅ Batch export complete:\n  written: {}\n  skipped: {}\n  failed: {}\n  out_dir: {}",
        written,
        skipped,
        failed,
        out_dir.display()
    );

    if failed > 0 {
        anyhow::bail!("{} export(s) failed", failed);
    }
    Ok(())
}
