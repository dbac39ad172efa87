// SPDX-License-Identifier: MPL-2.0
use folio::app::AppContext;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "\
Usage: folio [--config-dir DIR] [--assets-root DIR] <content.toml>

Warms every image referenced by the site content and prints a summary.

Options:
  --config-dir DIR    Directory holding settings.toml
  --assets-root DIR   Base directory for relative asset addresses
  -h, --help          Print this help
";

struct Flags {
    config_dir: Option<PathBuf>,
    assets_root: Option<PathBuf>,
    content_path: PathBuf,
}

fn parse_flags() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let config_dir = args.opt_value_from_str("--config-dir")?;
    let assets_root = args.opt_value_from_str("--assets-root")?;
    let content_path = args.free_from_str()?;
    Ok(Some(Flags {
        config_dir,
        assets_root,
        content_path,
    }))
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("folio=info")),
        )
        .init();

    let flags = match parse_flags() {
        Ok(Some(flags)) => flags,
        Ok(None) => {
            print!("{USAGE}");
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("error: {err}\n\n{USAGE}");
            return ExitCode::from(2);
        }
    };

    let loaded = AppContext::load(flags.config_dir, flags.assets_root, &flags.content_path);
    let (ctx, warning) = match loaded {
        Ok(loaded) => loaded,
        Err(err) => {
            tracing::error!(error = %err, "failed to load site");
            return ExitCode::FAILURE;
        }
    };
    if let Some(warning) = warning {
        eprintln!("warning: {warning}");
    }

    match ctx.warm_site_assets() {
        Some(handle) => {
            if let Err(err) = handle.await {
                tracing::error!(error = %err, "warm-up task failed");
                return ExitCode::FAILURE;
            }
        }
        None => println!("preload disabled"),
    }

    let stats = ctx.cache().stats();
    println!(
        "requested: {}  failed: {}  retained: {} bytes",
        stats.requests_issued,
        stats.failed,
        ctx.cache().retained_bytes()
    );
    ExitCode::SUCCESS
}
