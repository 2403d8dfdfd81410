use anyhow::Result;
use clap::{Parser, Subcommand};
use gitmenu::config::Config;
use gitmenu::term_host::TermHost;
use gitmenu::{mask, menu};
use gitmenu_actions::workdir::wd_from_context;
use gitmenu_types::Context;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Use this config file instead of the default location
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build and print the context menu for a path
    Show { path: PathBuf },
    /// Print the eligibility classification for a path
    Mask { path: PathBuf },
    /// Run a single menu action for a path
    Run {
        action: String,
        path: PathBuf,
        /// Branch name, for the checkout action
        #[arg(short, long)]
        branch: Option<String>,
    },
    /// List the registered menu actions
    Actions,
}

fn main() -> ExitCode {
    init_tracing();
    match run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("gitmenu: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<ExitCode> {
    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    match cli.command {
        Commands::Show { path } => {
            let ctx = Context::new(path);
            let wd = wd_from_context(&ctx);
            let mut host = TermHost::new(config, wd.to_string_lossy());
            let active = menu::build_menu(&ctx, &mut host);
            debug!("{} active items", active.len());
            println!("{}", host.render());
            Ok(ExitCode::SUCCESS)
        }
        Commands::Mask { path } => {
            let ctx = Context::new(path);
            println!("{}", mask::describe(mask::menu_mask(&ctx)));
            Ok(ExitCode::SUCCESS)
        }
        Commands::Run {
            action,
            path,
            branch,
        } => {
            let ctx = Context::new(path);
            let wd = wd_from_context(&ctx);
            let mut host = TermHost::new(config, wd.to_string_lossy());
            let argv: Vec<String> = branch.into_iter().collect();
            let status = menu::run_action(&ctx, &action, argv, &mut host)?;
            debug!("action {action} finished: {status:?}");
            Ok(ExitCode::from(status.code().clamp(0, 255) as u8))
        }
        Commands::Actions => {
            for (name, description) in gitmenu_actions::descriptions() {
                println!("{name:<10} {description}");
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}
