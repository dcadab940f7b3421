// proj - store and retrieve project locations
//
// This is the main entry point. Parses CLI args and dispatches to handlers.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use proj_lib::{core::format_table, Backend, Config, ProjError, ProjectStore};
use std::env;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "proj", version, about = "store and retrieve project locations")]
struct Cli {
    /// Store file (defaults to ~/.projects or ~/.projects.db)
    #[arg(long, global = true, env = "PROJ_STORE")]
    store: Option<PathBuf>,

    /// Storage backend
    #[arg(long, global = true, env = "PROJ_BACKEND", value_enum, default_value_t = Backend::Json)]
    backend: Backend,

    /// Log store activity to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// add a project
    #[command(visible_alias = "a")]
    Add { name: Option<String> },
    /// get a project's directory by name
    #[command(visible_alias = "g")]
    Get { name: Option<String> },
    /// delete a project
    #[command(visible_alias = "d")]
    Del { name: Option<String> },
    /// lists all projects
    #[command(visible_alias = "l")]
    List,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", report(&e));
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = Config::resolve(cli.backend, cli.store)?;
    tracing::debug!(backend = %config.backend, path = %config.store_path.display(), "using store");
    let store = ProjectStore::open(&config);

    match cli.command {
        Command::Add { name } => handle_add(&store, name).await,
        Command::Get { name } => handle_get(&store, name).await,
        Command::Del { name } => handle_del(&store, name).await,
        Command::List => handle_list(&store).await,
    }
}

async fn handle_add(store: &ProjectStore, name: Option<String>) -> Result<()> {
    let name = name.ok_or(ProjError::MissingArgument)?;

    let cwd = env::current_dir().context("could not read the current directory")?;
    let dir = cwd
        .to_str()
        .with_context(|| format!("{} is not valid UTF-8", cwd.display()))?;

    store.add(&name, dir).await?;
    Ok(())
}

async fn handle_get(store: &ProjectStore, name: Option<String>) -> Result<()> {
    let name = name.ok_or(ProjError::MissingArgument)?;
    println!("{}", store.get(&name).await?);
    Ok(())
}

async fn handle_del(store: &ProjectStore, name: Option<String>) -> Result<()> {
    let name = name.ok_or(ProjError::MissingArgument)?;
    if !store.delete(&name).await? {
        tracing::info!(name = %name, "no such project, nothing deleted");
    }
    Ok(())
}

async fn handle_list(store: &ProjectStore) -> Result<()> {
    let projects = store.list().await?;
    print!("{}", format_table(&projects));
    Ok(())
}

// Store errors get their friendly message; anything else prints its chain.
fn report(err: &anyhow::Error) -> String {
    match err.downcast_ref::<ProjError>() {
        Some(e) => e.user_message(),
        None => format!("{:#}", err),
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = if verbose {
        EnvFilter::new(default_level)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .try_init();
}
