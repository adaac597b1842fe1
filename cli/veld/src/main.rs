//! Veld CLI: bundle a universal app source tree per platform target.

mod commands;
mod manifest;

use std::path::Path;
use std::process;

use clap::{Parser, Subcommand};

use manifest::VeldManifest;

#[derive(Parser)]
#[command(name = "veld", version, about = "Platform-exclusive bundler for universal apps")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new Veld project
    Init {
        /// Project name
        name: String,
    },
    /// Bundle the app for one or more platform targets
    Build {
        /// Raw platform name (e.g. web, macos); normalized to a canonical tag
        #[arg(long)]
        target: Option<String>,
        /// Bundle every target listed in veld.toml
        #[arg(long)]
        all_targets: bool,
        /// Report format (human, json)
        #[arg(long)]
        report: Option<String>,
    },
    /// Inspect the platform tag domain
    Platform {
        #[command(subcommand)]
        action: PlatformAction,
    },
    /// Remove the output directory
    Clean,
}

#[derive(Subcommand)]
enum PlatformAction {
    /// List every canonical platform tag
    List,
    /// Normalize a raw platform name to its canonical tag
    Normalize {
        /// Raw platform name
        name: String,
        /// Output format (human, json)
        #[arg(long)]
        format: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let cwd = std::env::current_dir()?;

    match cli.command {
        Commands::Init { name } => commands::init::run(&name),

        Commands::Build {
            target,
            all_targets,
            report,
        } => {
            let (manifest, project_dir) = VeldManifest::find_and_load(&cwd)?.ok_or_else(|| {
                anyhow::anyhow!("no veld.toml found (run 'veld init <name>' to create a project)")
            })?;
            commands::build::run(
                &project_dir,
                &manifest,
                target.as_deref(),
                all_targets,
                report.as_deref(),
            )
        }

        Commands::Platform { action } => match action {
            PlatformAction::List => commands::platform::list(),
            PlatformAction::Normalize { name, format } => {
                commands::platform::normalize(&name, format.as_deref())
            }
        },

        Commands::Clean => match VeldManifest::find_and_load(&cwd)? {
            Some((manifest, project_dir)) => {
                commands::clean::run(&manifest.out_dir(&project_dir))
            }
            None => commands::clean::run(&cwd.join(Path::new(manifest::DEFAULT_OUT_DIR))),
        },
    }
}
