//! uxcompare - Visual UI/UX comparison CLI
//!
//! Main entry point for the CLI application.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use uxcompare::capture::BrowserSession;
use uxcompare::cli::print_run;
use uxcompare::{ClipEngine, ComparisonRunner, Config, GeminiClient};

/// uxcompare - Visual UI/UX comparison of competing websites
#[derive(Parser, Debug)]
#[command(name = "uxcompare")]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Capture and score all configured sites
    Compare {
        /// Product category override (defaults to config)
        #[arg(long, short = 'c')]
        category: Option<String>,

        /// Run with a visible browser window
        #[arg(long)]
        headed: bool,

        /// Emit the full run as JSON instead of a console summary
        #[arg(long)]
        json: bool,
    },

    /// Ask Gemini to narrate a UI/UX comparison of two full-page screenshots
    Narrate {
        /// First screenshot (defaults to the first configured site's full page)
        #[arg(long)]
        first: Option<PathBuf>,

        /// Second screenshot (defaults to the second configured site's full page)
        #[arg(long)]
        second: Option<PathBuf>,
    },

    /// Show or initialize the configuration file
    Config {
        /// Write the default config to the config directory
        #[arg(long)]
        init: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let mut config = Config::load();

    match args.command {
        Command::Compare {
            category,
            headed,
            json,
        } => {
            if let Some(category) = category {
                config.comparison.category = category;
            }
            if headed {
                config.browser.headed = true;
            }
            config.validate()?;

            if !BrowserSession::is_available() {
                anyhow::bail!("No Chrome/Chromium executable found. Install one and retry.");
            }

            println!("🔍 Loading CLIP model...");
            let engine = ClipEngine::new(&config.scoring)?;

            let run = ComparisonRunner::new(config).run(&engine)?;
            print_run(&run, json)?;
        }

        Command::Narrate { first, second } => {
            config.validate()?;
            let (first, second) = narrate_paths(&config, first, second)?;

            let client = GeminiClient::from_config(&config)?;
            let narrative = client
                .compare_screens(&first, &second, &config.comparison.category)
                .await?;
            println!("{}", narrative);
        }

        Command::Config { init } => {
            if init {
                let path = config.save_and_get_path()?;
                println!("✔️ Config written to {}", path.display());
            } else {
                print!("{}", Config::default_config_toml());
                if Config::config_exists() {
                    eprintln!("# active config: {}", Config::config_file().display());
                }
            }
        }
    }

    Ok(())
}

/// Resolve the two narrate inputs, defaulting to the configured sites'
/// full-page screenshots from a prior compare run
fn narrate_paths(
    config: &Config,
    first: Option<PathBuf>,
    second: Option<PathBuf>,
) -> anyhow::Result<(PathBuf, PathBuf)> {
    let site_full = |index: usize| -> anyhow::Result<PathBuf> {
        let site = config
            .comparison
            .sites
            .get(index)
            .ok_or_else(|| anyhow::anyhow!("Need two configured sites or explicit --first/--second"))?;
        Ok(config.full_page_path(&site.name))
    };

    let first = match first {
        Some(path) => path,
        None => site_full(0)?,
    };
    let second = match second {
        Some(path) => path,
        None => site_full(1)?,
    };

    for path in [&first, &second] {
        if !path.exists() {
            anyhow::bail!(
                "Screenshot {} not found. Run `uxcompare compare` first or pass explicit paths.",
                path.display()
            );
        }
    }

    Ok((first, second))
}
