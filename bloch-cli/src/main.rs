//! Bloch - terminal viewer for a single qubit
//!
//! Applies the fixed gate set to a qubit starting at |0⟩ and draws the
//! resulting Bloch vector.
//!
//! ## Environment Variables
//! - `RUST_LOG`: log filter (default: `bloch=info,bloch_quantum=warn`)
//! - `BLOCH_COLOR`: colored output (default: true)
//! - `BLOCH_JSON`: JSON output (default: false)

mod config;
mod session;

use anyhow::{Context, Result};
use bloch_quantum::{BasisLabel, list_gates};
use clap::{Parser, Subcommand};
use colored::*;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use config::Config;
use session::{Command, Session, Snapshot};

#[derive(Parser)]
#[command(name = "bloch")]
#[command(author)]
#[command(version = "2026.1.16")]
#[command(about = "Bloch sphere viewer for single-qubit gates", long_about = None)]
struct Cli {
    /// Config file (default: ./bloch.toml if present)
    #[arg(short, long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the available gates
    Gates,

    /// Start at |0⟩ and apply gates in order
    Apply {
        /// Gate keys (I, X, Y, Z, H, S, T)
        #[arg(value_name = "GATES", required = true)]
        gates: Vec<String>,
    },

    /// Interactive session
    Repl,

    /// Show the six labelled points of the sphere
    Describe,
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bloch=info,bloch_quantum=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{} {:#}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = Config::load(cli.config.as_deref()).context("loading configuration")?;
    if cli.json {
        config.display.json = true;
    }
    if cli.no_color {
        config.display.color = false;
    }
    if !config.display.color {
        colored::control::set_override(false);
    }
    tracing::debug!(?config, "configuration resolved");

    match cli.command {
        Commands::Gates => gates_command(&config),
        Commands::Apply { gates } => apply_command(&config, &gates),
        Commands::Repl => repl_command(&config),
        Commands::Describe => describe_command(&config),
    }
}

// ============================================================================
// Commands
// ============================================================================

fn gates_command(config: &Config) -> Result<()> {
    let gates: Vec<_> = list_gates().collect();

    if config.display.json {
        println!("{}", serde_json::to_string_pretty(&gates)?);
        return Ok(());
    }

    println!("{}", "Gates:".bold());
    for gate in gates {
        println!("  {}  {:<10} {}", gate.key.cyan().bold(), gate.name, gate.color.dimmed());
    }
    Ok(())
}

fn apply_command(config: &Config, gates: &[String]) -> Result<()> {
    let mut session = Session::new();
    session
        .apply_all(gates)
        .with_context(|| format!("applying {}", gates.join(" ")))?;

    print_snapshot(config, &session.snapshot())
}

fn describe_command(config: &Config) -> Result<()> {
    if config.display.json {
        let points: Vec<_> = BasisLabel::ALL
            .into_iter()
            .map(|label| {
                serde_json::json!({
                    "label": label.symbol(),
                    "state": label.state(),
                    "coordinates": label.point(),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&points)?);
        return Ok(());
    }

    println!("{}", "Axis convention:".bold());
    println!("  x = 2·Re(conj(a)·b)   y = 2·Im(conj(a)·b)   z = |a|² − |b|²");
    println!();
    for label in BasisLabel::ALL {
        let state = label.state();
        println!(
            "  {:<5} {:<26} {}",
            label.symbol().cyan().bold(),
            label.point().to_string(),
            state.to_string().dimmed()
        );
    }
    Ok(())
}

fn repl_command(config: &Config) -> Result<()> {
    let mut session = Session::new();
    let stdin = io::stdin();

    if !config.display.json {
        println!("{}", "Bloch sphere session".bold());
        println!("Type gate keys (e.g. {}), {} or {}.", "H S".cyan(), "reset".cyan(), "quit".cyan());
        println!();
    }
    print_snapshot(config, &session.snapshot())?;

    loop {
        write_prompt(config, &mut io::stdout(), &mut io::stderr())?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line).context("reading input")? == 0 {
            break;
        }

        match Command::parse(&line) {
            Command::Empty => {}
            Command::Quit => break,
            Command::Help => print_help(),
            Command::Gates => gates_command(config)?,
            Command::State => print_snapshot(config, &session.snapshot())?,
            Command::Reset => {
                session.reset();
                print_snapshot(config, &session.snapshot())?;
            }
            Command::Apply(keys) => {
                let applied = match keys.as_slice() {
                    [key] => session.apply(key),
                    keys => session.apply_all(keys),
                };
                match applied {
                    Ok(_) => print_snapshot(config, &session.snapshot())?,
                    // The session keeps its state; report and keep reading
                    Err(e) => eprintln!("{} {}", "error:".red().bold(), e),
                }
            }
        }
    }
    Ok(())
}

// ============================================================================
// Output
// ============================================================================

/// In JSON mode stdout carries one snapshot per line, so the prompt goes to
/// stderr.
fn write_prompt(config: &Config, out: &mut impl Write, err: &mut impl Write) -> io::Result<()> {
    let target: &mut dyn Write = if config.display.json { err } else { out };
    write!(target, "{}", config.session.prompt)?;
    target.flush()
}

fn print_snapshot(config: &Config, snap: &Snapshot) -> Result<()> {
    if config.display.json {
        println!("{}", serde_json::to_string(snap)?);
        return Ok(());
    }

    let applied = if snap.applied.is_empty() {
        "(none)".to_string()
    } else {
        snap.applied
            .iter()
            .map(|g| g.key())
            .collect::<Vec<_>>()
            .join(" ")
    };

    println!("{} {}", "Applied:".bold(), applied);
    println!("  a = {}", snap.state.a.to_string().green());
    println!("  b = {}", snap.state.b.to_string().green());
    println!(
        "  P(|0⟩) = {:.4}   P(|1⟩) = {:.4}",
        snap.probabilities.0, snap.probabilities.1
    );
    println!("  Bloch vector: {}", snap.coordinates.to_string().yellow());
    println!(
        "  θ = {:.4}   φ = {:.4}   nearest: {}",
        snap.angles.theta,
        snap.angles.phi,
        snap.nearest.symbol().cyan()
    );
    if config.display.ascii {
        println!();
        print!("{}", snap.coordinates.normalized().render_ascii(config.display.radius));
    }
    println!();
    Ok(())
}

fn print_help() {
    println!("{}", "Commands:".bold());
    println!("  <GATE> [GATE...]   apply gates in order (I X Y Z H S T)");
    println!("  reset              back to |0⟩");
    println!("  state              show the current state");
    println!("  gates              list gates");
    println!("  quit               leave the session");
}
