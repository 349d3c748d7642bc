use clap::{Parser, Subcommand};
use shopfront::{config, generate, logging, output, site};
use std::path::PathBuf;

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup, called exactly once
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "shopfront")]
#[command(about = "Static marketing pages for small businesses")]
#[command(long_about = "\
Static marketing pages for small businesses

One TOML file describes the business and its page. Every section falls back
to built-in placeholder copy, so a site.toml with only a business name
already renders a complete page.

Content structure:

  content/
  ├── site.toml        # Business details, section order, section content
  ├── config.toml      # Theme colours and build options (optional)
  └── assets/          # Images, favicon, fonts → copied to dist/assets/

Run 'shopfront gen-site' for a starter site.toml and 'shopfront gen-config'
for a documented config.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Content directory
    #[arg(long, default_value = "content", global = true)]
    source: PathBuf,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    /// Log diagnostics to stderr (RUST_LOG overrides)
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render the page into the output directory
    Build,
    /// Validate content without writing anything
    Check {
        /// Print the resolved site, defaults included, as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print a stock config.toml with all options documented
    GenConfig,
    /// Print a commented starter site.toml
    GenSite,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    logging::init_cli_logger(cli.verbose);

    match cli.command {
        Command::Build => {
            println!("==> Building {}", cli.source.display());
            let report = generate::generate(&cli.source, &cli.output)?;
            output::print_build_output(&report);
            println!("==> Build complete: {}", report.business);
        }
        Command::Check { json } => {
            let resolved = generate::check(&cli.source)?;
            if json {
                println!("{}", resolved.to_json()?);
            } else {
                println!("==> Checking {}", cli.source.display());
                output::print_check_output(&resolved.site, &cli.source);
                println!("==> Content is valid");
            }
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
        Command::GenSite => {
            print!("{}", site::stock_site_toml());
        }
    }

    Ok(())
}
