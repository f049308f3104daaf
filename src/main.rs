//! Lightquest CLI
//!
//! Usage:
//!   lightquest                      # Interactive play in the terminal
//!   lightquest --serve              # HTTP API server
//!   lightquest --stages --json      # Dump the stage catalog

use clap::Parser;
use colored::Colorize;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::{self, BufRead, Write};
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use lightquest::config::{Config, LogFormat};
use lightquest::core::animation;
use lightquest::core::{parse_command, run_server, Command, SessionStore, StageController, HELP};
use lightquest::types::{Expected, StageDefinition};
use lightquest::VERSION;

#[derive(Parser, Debug)]
#[command(
    name = "lightquest",
    version = VERSION,
    about = "追尋智械之光 - history-of-computing quiz engine",
    long_about = "Lightquest runs the seven quiz stages of the history-of-computing game.\n\n\
                  Modes:\n  \
                  (default)      Interactive play in the terminal\n  \
                  --serve        HTTP API server\n  \
                  --stages       Print the stage catalog\n\n\
                  Stages:\n  \
                  0 intro        Why an ox cart?\n  \
                  1 gears        Timed gear drag\n  \
                  2 punch_card   Punch card filter\n  \
                  3 vacuum_tubes Tube simulation + binary drill\n  \
                  4 transistors  Mark IC defects\n  \
                  5 assembly     Assemble a PC\n  \
                  6 chatbot      Ask the AI"
)]
struct Args {
    /// Interactive mode - read commands from stdin
    #[arg(short, long)]
    interactive: bool,

    /// Run as HTTP API server
    #[arg(short, long)]
    serve: bool,

    /// Print the stage catalog and exit
    #[arg(long)]
    stages: bool,

    /// Server address (overrides LIGHTQUEST_ADDR)
    #[arg(long)]
    addr: Option<String>,

    /// Seed for the tube burn selection (overrides LIGHTQUEST_BURN_SEED)
    #[arg(long)]
    seed: Option<u64>,

    /// Skip the decorative animation fetch
    #[arg(long)]
    no_animation: bool,

    /// Output as JSON
    #[arg(long)]
    json: bool,

    /// Disable colors in output
    #[arg(long)]
    no_color: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = Config::from_env()?;
    if let Some(addr) = &args.addr {
        config.addr = addr.clone();
    }
    if args.seed.is_some() {
        config.burn_seed = args.seed;
    }
    if args.no_animation {
        config.animation_url = None;
    }

    init_logging(&config);
    if args.no_color {
        colored::control::set_override(false);
    }

    info!(version = VERSION, "Lightquest starting");

    if args.stages {
        print_stages(args.json)?;
    } else if args.serve {
        print_banner();
        if let Err(e) = run_server(&config).await {
            error!(error = %e, "Server error");
            return Err(e.into());
        }
    } else if args.interactive {
        run_interactive(&config, &args).await;
    } else {
        // Default to interactive if no mode specified
        run_interactive(&config, &args).await;
    }
    Ok(())
}

/// Initialize tracing/logging
fn init_logging(config: &Config) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format {
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().json().with_writer(io::stderr))
                .init();
        }
        LogFormat::Pretty => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().with_writer(io::stderr))
                .init();
        }
    }
}

/// Run interactive mode: one session, one command per line
async fn run_interactive(config: &Config, args: &Args) {
    let decoration =
        animation::load_optional(config.animation_url.as_deref(), config.fetch_timeout_ms).await;

    let controller = StageController::default();
    let mut store = SessionStore::new();
    store.initialize();
    let mut rng = match config.burn_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    print_header(!decoration.as_object().map(|m| m.is_empty()).unwrap_or(true));
    println!("{}", HELP);
    println!();

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut actions = 0u64;

    loop {
        print!("{}", format!("[{} actions] > ", actions).bold());
        if stdout.flush().is_err() {
            break;
        }

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(_) => break,
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let command = match parse_command(line, controller.catalog()) {
            Ok(c) => c,
            Err(e) => {
                println!("{}", format!("⚠ {}", e).yellow());
                continue;
            }
        };

        match command {
            Command::Quit => {
                println!("\nSession ended. Actions: {}", actions);
                break;
            }
            Command::Help => println!("{}", HELP),
            Command::Stages => {
                for stage in controller.catalog().stages() {
                    print_stage(stage);
                }
            }
            Command::Status => {
                let snap = store.snapshot();
                if args.json {
                    print_json(&snap);
                } else {
                    println!("目前狀態：{:?} (= {})", snap.tube_status, snap.tube_value);
                    println!("計時中：{}", if snap.timer_running { "是" } else { "否" });
                    for entry in &snap.chat_history {
                        let who = if entry.is_user() { "🙋" } else { "🤖" };
                        println!("  {} {}", who, entry.text);
                    }
                }
            }
            Command::Act(action) => {
                let verdict = controller.handle(&mut store, &mut rng, action);
                actions += 1;
                if args.json {
                    print_json(&verdict);
                } else if args.no_color {
                    println!("{}", verdict.to_parseable_string());
                } else {
                    println!("{}", verdict.to_terminal_string());
                }
            }
        }
    }
}

fn print_json<T: serde::Serialize>(value: &T) {
    match serde_json::to_string(value) {
        Ok(json) => println!("{}", json),
        Err(e) => error!(error = %e, "Could not serialize output"),
    }
}

/// Print the catalog (stage list) and exit
fn print_stages(json: bool) -> anyhow::Result<()> {
    let stages = lightquest::core::standard_catalog().stages();
    if json {
        println!("{}", serde_json::to_string_pretty(stages)?);
    } else {
        for stage in stages {
            print_stage(stage);
        }
    }
    Ok(())
}

fn print_stage(stage: &StageDefinition) {
    println!("{} {}", format!("[{}]", stage.id.number()).bold(), stage.header.bold());
    println!("    {}", stage.prompt);
    match &stage.expected {
        Expected::Choice(choice) => {
            for (i, option) in choice.options.iter().enumerate() {
                println!("      {}. {}", i + 1, option);
            }
        }
        Expected::Sequence(seq) => println!("      零件：{}", seq.decorated.join("  ")),
        Expected::Simulation { drill, .. } => {
            println!("      二進位練習：用真空管表示 {}", drill.target)
        }
        _ => {}
    }
    if !stage.note.is_empty() {
        println!("    {}", stage.note.dimmed());
    }
}

fn print_header(decorated: bool) {
    let sparkle = if decorated { "✨ " } else { "" };
    println!();
    println!("{}", format!("{}🌌 追尋智械之光：電腦發展史闖關遊戲 v{}", sparkle, VERSION).bold());
    println!("> 幫助先驅者收集五大「智慧之核」，重建被遺忘的電腦神殿！");
    println!();
}

fn print_banner() {
    println!();
    println!("{}", "╔══════════════════════════════════════════╗".bold());
    println!("{}", "║  🌌 Lightquest API Server                ║".bold());
    println!("{}", format!("║  Version: {:<31}║", VERSION).bold());
    println!("{}", "╚══════════════════════════════════════════╝".bold());
    println!();
}
