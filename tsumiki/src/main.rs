mod app;
mod bindings;
mod config;
mod core;
mod effect;
mod layout;
mod platform;

use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use argh::FromArgs;
use tracing_subscriber::EnvFilter;

use config::{Config, ConfigFile};
use platform::StdioManipulator;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Tsumiki - policy core of a dynamic tiling window manager
#[derive(FromArgs)]
struct Cli {
    #[argh(subcommand)]
    command: Option<SubCommand>,
}

#[derive(FromArgs)]
#[argh(subcommand)]
enum SubCommand {
    Start(StartCmd),
    CheckConfig(CheckConfigCmd),
    PrintConfig(PrintConfigCmd),
    ListBindings(ListBindingsCmd),
    Version(VersionCmd),
}

/// Run the core, reading host events on stdin and writing requests on stdout
#[derive(FromArgs)]
#[argh(subcommand, name = "start")]
struct StartCmd {
    /// config file (default: $XDG_CONFIG_HOME/tsumiki/config.json)
    #[argh(option)]
    config: Option<PathBuf>,
}

/// Validate a config file and exit
#[derive(FromArgs)]
#[argh(subcommand, name = "check-config")]
struct CheckConfigCmd {
    /// config file to check
    #[argh(option)]
    config: Option<PathBuf>,
}

/// Print the effective config file as JSON
#[derive(FromArgs)]
#[argh(subcommand, name = "print-config")]
struct PrintConfigCmd {
    /// config file to print instead of the built-in one
    #[argh(option)]
    config: Option<PathBuf>,
}

/// List key and button bindings
#[derive(FromArgs)]
#[argh(subcommand, name = "list-bindings")]
struct ListBindingsCmd {
    /// config file to read bindings from
    #[argh(option)]
    config: Option<PathBuf>,
}

/// Show version information
#[derive(FromArgs)]
#[argh(subcommand, name = "version")]
struct VersionCmd {}

fn main() -> Result<()> {
    let cli: Cli = argh::from_env();

    // stdout carries the host protocol
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    match cli.command {
        None => {
            // No subcommand - show help (simulate --help)
            let args: Vec<&str> = vec!["tsumiki", "--help"];
            if let Err(e) = Cli::from_args(&args[..1], &args[1..]) {
                println!("{}", e.output);
            }
            Ok(())
        }
        Some(SubCommand::Start(cmd)) => start(cmd.config.as_deref()),
        Some(SubCommand::CheckConfig(cmd)) => {
            Config::load_or_default(cmd.config.as_deref())?;
            println!("Config OK");
            Ok(())
        }
        Some(SubCommand::PrintConfig(cmd)) => print_config(cmd.config.as_deref()),
        Some(SubCommand::ListBindings(cmd)) => {
            let config = Config::load_or_default(cmd.config.as_deref())?;
            for (binding, command) in config.bindings.list_bindings() {
                println!("{} -> {}", binding, command);
            }
            Ok(())
        }
        Some(SubCommand::Version(_)) => {
            println!("tsumiki {}", VERSION);
            Ok(())
        }
    }
}

fn start(config_path: Option<&Path>) -> Result<()> {
    let config = Config::load_or_default(config_path)?;
    tracing::info!("tsumiki {} starting", VERSION);

    let stdin = io::stdin();
    let manipulator = StdioManipulator::new(BufWriter::new(io::stdout()));
    let mut app = app::App::new(config, manipulator);
    let restart = app.run(stdin.lock())?;

    if restart {
        restart_self()?;
    }
    tracing::info!("tsumiki exiting");
    Ok(())
}

/// Replaces the process with a fresh copy of itself on the same stdio.
#[cfg(unix)]
fn restart_self() -> Result<()> {
    use std::os::unix::process::CommandExt;

    let exe = std::env::current_exe().context("Failed to locate own executable")?;
    tracing::info!("Restarting {}", exe.display());
    let err = std::process::Command::new(&exe)
        .args(std::env::args_os().skip(1))
        .exec();
    Err(err).with_context(|| format!("Failed to restart {}", exe.display()))
}

#[cfg(not(unix))]
fn restart_self() -> Result<()> {
    anyhow::bail!("Restart is only supported on unix")
}

fn print_config(path: Option<&Path>) -> Result<()> {
    let path = path
        .map(Path::to_path_buf)
        .or_else(|| Config::default_path().filter(|p| p.exists()));
    let file = match path {
        Some(path) => ConfigFile::read(&path)?,
        None => ConfigFile::default(),
    };
    Config::from_file(file.clone())?;
    let json = serde_json::to_string_pretty(&file).context("Failed to encode config")?;
    println!("{}", json);
    Ok(())
}
