mod render;
mod session;

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use council_core::{CouncilConfig, ElectionResults, ElectionStatus, ElectionView, Screen, StartGate};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use session::{Command, ConsoleHandler, Session, Step};

#[derive(Parser)]
#[command(name = "council")]
#[command(about = "Council election view for the terminal", long_about = None)]
struct Cli {
    /// Config file (JSON)
    #[arg(long, global = true, env = "COUNCIL_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the election view once
    Render {
        /// Election status reported by the service (pending, running, completed)
        #[arg(short, long)]
        status: String,

        /// Results JSON published by the election service
        #[arg(short, long)]
        results: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Drive the election view interactively
    Session,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("council_cli=info,council_core=info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = CouncilConfig::load_or_default(cli.config.as_deref())
        .context("Failed to load council config")?;

    match cli.command {
        Some(Commands::Render {
            status,
            results,
            format,
        }) => cmd_render(&config, &status, results.as_deref(), format)?,
        Some(Commands::Session) | None => run_interactive(config)?,
    }

    Ok(())
}

fn cmd_render(
    config: &CouncilConfig,
    status: &str,
    results: Option<&Path>,
    format: OutputFormat,
) -> Result<()> {
    let results = results
        .map(|path| {
            ElectionResults::from_path(path)
                .with_context(|| format!("Failed to read results from {}", path.display()))
        })
        .transpose()?;

    let view = if config.results.strict {
        let status: ElectionStatus = status.parse()?;
        config.build_view(status, results)?
    } else {
        let view = ElectionView::from_wire(status, results.map(|r| config.prepare_results(r)));
        if view.is_empty() {
            warn!("Nothing to render for status {:?}", status);
        }
        view
    };

    let screen = Screen::build(&view, &StartGate::new());
    match format {
        OutputFormat::Text => {
            let text = render::to_text(&screen, &config.display);
            if !text.is_empty() {
                println!("{}", text);
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&screen)?),
    }

    Ok(())
}

fn run_interactive(config: CouncilConfig) -> Result<()> {
    display_welcome();

    let mut session = Session::new(ConsoleHandler::default(), config);
    println!("{}", session.render());
    println!();

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }

        let command = match Command::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                println!("{}", e);
                continue;
            }
        };

        match session.execute(command) {
            Ok(Step::Print(text)) => {
                println!("{}", text);
                println!();
            }
            Ok(Step::Quit) => {
                println!("  Goodbye!");
                break;
            }
            Err(e) => println!("Error: {}", e),
        }
    }

    let handler = session.widget().handler();
    info!(
        starts = handler.starts,
        proceeds = handler.proceeds,
        "Session ended"
    );
    Ok(())
}

fn display_welcome() {
    println!();
    println!("  Council Election");
    println!();
    println!("  You are the election service: set the status, load results,");
    println!("  then press the view's controls with `start` and `proceed`.");
    println!("  Type `help` for all commands.");
    println!();
}
