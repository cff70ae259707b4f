use clap::{Parser, Subcommand};
use chakana_rebelde::types::Snapshot;
use chakana_rebelde::{client, config, generate, output};
use std::path::{Path, PathBuf};

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup — trivial, called exactly once
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "chakana-rebelde")]
#[command(about = "Static site builder for the Chakana Rebelde photo reportage")]
#[command(long_about = "\
Static site builder for the Chakana Rebelde photo reportage

The content repository is the data source. One composite query fetches the
project record and every published photo item in a single round trip; the
result is assembled into a display set and rendered as a static page.

Pipeline:

  fetch      content API  ->  snapshot.json   (remote documents -> structured data)
  generate   snapshot     ->  dist/index.html (assembled gallery -> final HTML)

The page has exactly three outcomes: the gallery, the explicit
under-construction placeholder when no photo is displayable, and the
error page with a reload affordance when the fetch fails.

Connection settings live in config.toml ([content] section) and can be
overridden per deployment via CHAKANA_PROJECT_ID, CHAKANA_DATASET,
CHAKANA_API_VERSION and CHAKANA_ENV. Production reads go through the
content service's edge cache; any other environment bypasses it.

Run 'chakana-rebelde gen-config' to generate a documented config.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Site config file
    #[arg(long, default_value = "config.toml", global = true)]
    config: PathBuf,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    /// Directory for intermediate files (snapshot)
    #[arg(long, default_value = ".chakana-temp", global = true)]
    temp_dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Query the content repository into a snapshot
    Fetch,
    /// Produce the final HTML page from the snapshot
    Generate,
    /// Run the full pipeline: fetch → generate
    Build,
    /// Validate content connectivity without building
    Check,
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Fetch => {
            let config = config::load_config(&cli.config)?;
            let snapshot = fetch_snapshot(config)?;
            write_snapshot(&cli.temp_dir, &snapshot)?;
            output::print_fetch_output(&snapshot);
        }
        Command::Generate => {
            let snapshot_path = cli.temp_dir.join("snapshot.json");
            let report = generate::generate(&snapshot_path, &cli.output)?;
            output::print_generate_output(&report, &cli.output);
        }
        Command::Build => {
            let config = config::load_config(&cli.config)?;
            println!(
                "==> Stage 1: Fetching {}",
                client::query_endpoint(&config.content)
            );

            // The render boundary: a fetch failure becomes the error
            // page, never an unhandled fault. `check` is the strict
            // variant for CI.
            match fetch_snapshot(config.clone()) {
                Ok(snapshot) => {
                    write_snapshot(&cli.temp_dir, &snapshot)?;
                    output::print_fetch_output(&snapshot);

                    println!("==> Stage 2: Generating HTML → {}", cli.output.display());
                    let snapshot_path = cli.temp_dir.join("snapshot.json");
                    let report = generate::generate(&snapshot_path, &cli.output)?;
                    output::print_generate_output(&report, &cli.output);

                    println!("==> Build complete: {}", cli.output.display());
                }
                Err(err) => {
                    eprintln!("Fetch failed: {err}");
                    let report = generate::write_error_page(&config, &cli.output)?;
                    output::print_generate_output(&report, &cli.output);
                }
            }
        }
        Command::Check => {
            let config = config::load_config(&cli.config)?;
            println!(
                "==> Checking {}",
                client::query_endpoint(&config.content)
            );
            let snapshot = fetch_snapshot(config)?;
            output::print_fetch_output(&snapshot);
            println!("==> Content is reachable and valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Run the gallery query and bundle the result with the resolved config.
fn fetch_snapshot(config: config::SiteConfig) -> Result<Snapshot, client::FetchError> {
    let client = client::ContentClient::new(&config.content)?;
    let raw = client.fetch_gallery()?;
    Ok(Snapshot {
        project: raw.project,
        photos: raw.photos,
        config,
    })
}

/// Persist the snapshot for the generate stage.
fn write_snapshot(temp_dir: &Path, snapshot: &Snapshot) -> Result<(), Box<dyn std::error::Error>> {
    std::fs::create_dir_all(temp_dir)?;
    let json = serde_json::to_string_pretty(snapshot)?;
    std::fs::write(temp_dir.join("snapshot.json"), json)?;
    Ok(())
}
