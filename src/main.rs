use clap::{Parser, Subcommand};
use epigen::{config, generate, output, scan, splice, watch};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "epigen")]
#[command(version)]
#[command(about = "Episode page generator")]
#[command(long_about = "\
Episode page generator

Your filesystem is the data source. Each folder under the asset directory is
one episode; its description file carries the episode's fields as line-prefix
tags. One pass renders every episode into an HTML fragment and splices the
list into the container region of the host page, preserving everything
outside that region byte for byte.

Content structure:

  ./
  ├── config.toml                # Optional — every key has a default
  ├── index.html                 # Host page with <div class=\"container\">
  └── asset/
      ├── ep01/
      │   ├── description.txt    # Title: / Description: / Designer: / Link:
      │   └── poster.jpg         # Optional media
      └── ep02/
          └── description.txt    # No media → embed or placeholder

Description file grammar (labels configurable via [tags]):

  Title: First Episode
  Description: Multi-line text; blank lines inside the
  section are kept as paragraph breaks.
  Designer: Kim
  Link: https://www.youtube.com/watch?v=ABC123

Run 'epigen gen-config' to print a documented config.toml.")]
struct Cli {
    /// Project root containing config.toml, the asset directory, and the host page
    #[arg(long, default_value = ".", global = true)]
    root: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Parse description files and print the records as JSON
    Scan,
    /// Run one generation pass: scan, render, splice the host page
    Build,
    /// Validate content and host page markers without writing
    Check,
    /// Watch description files and rebuild on change
    Watch {
        /// Poll interval in milliseconds
        #[arg(long, default_value_t = 500)]
        interval_ms: u64,
    },
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = config::load_config(&cli.root)?;

    match cli.command {
        Command::Scan => {
            let records = scan::scan(&cli.root, &config)?;
            println!("{}", serde_json::to_string_pretty(&records)?);
        }
        Command::Build => {
            let summary = generate::generate(&cli.root, &config)?;
            output::print_generate_output(&summary, &config.page);
        }
        Command::Check => {
            let records = scan::scan(&cli.root, &config)?;
            let doc = std::fs::read_to_string(cli.root.join(&config.page))?;
            splice::locate_container(&doc, &config.container_marker())?;
            output::print_check_output(&records, &config.page);
        }
        Command::Watch { interval_ms } => {
            watch::watch(&cli.root, &config, Duration::from_millis(interval_ms));
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
