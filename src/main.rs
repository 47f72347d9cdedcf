// Auth Academy - Main Entry Point
//
// You can run it via Cargo:
//
// ```console
// $ cargo build --release
// $ ./target/release/auth-academy
// ```
//
// Or replay a scripted lesson:
//
// ```console
// $ ./target/release/auth-academy --script demo.txt --instant --transcript-output run.jsonl
// ```

use auth_academy::session::{LoggingConfig, Session};
use auth_academy::types::config::CliArgs;
use auth_academy::types::{AppConfig, SimulatorKind};
use auth_academy::render::views;
use clap::Parser;
use std::fs;
use std::io::{self, BufRead, Write};
use std::process;
use tracing::{error, info};

fn main() {
    // Parse CLI arguments first to check for special flags
    let args = CliArgs::parse();

    // Handle special CLI flags that don't require full initialization
    if args.list_simulations {
        print_simulation_list();
        return;
    }

    if args.print_config {
        let default_config = AppConfig::default();
        match default_config.print_json() {
            Ok(json) => {
                println!("{}", json);
                return;
            }
            Err(e) => {
                eprintln!("Failed to serialize default configuration: {}", e);
                process::exit(1);
            }
        }
    }

    // Initialize logging based on CLI flags
    let logging_result = if args.debug {
        LoggingConfig::init_debug()
    } else if args.verbose {
        LoggingConfig::init_verbose()
    } else {
        // Default: minimal logging for normal users
        LoggingConfig::init_quiet()
    };

    if let Err(e) = logging_result {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    info!("Starting Auth Academy");

    let script = args.script.clone();
    let dry_run = args.dry_run;

    // Load configuration from CLI arguments and optional config file
    let config = match AppConfig::from_cli_args(args) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    // Validate configuration
    if let Err(e) = config.validate() {
        error!("Configuration validation failed: {}", e);
        process::exit(1);
    }

    info!("Configuration loaded and validated successfully");

    // Handle dry run mode
    if dry_run {
        eprintln!("Configuration validation successful!");
        eprintln!("Dry run mode - no session will be started.");
        print_configuration_summary(&config);
        return;
    }

    print_startup_banner(&config);

    // Run the session
    if let Err(e) = run_session(&config, script.as_deref()) {
        error!("Session failed: {}", e);
        process::exit(1);
    }

    info!("Auth Academy session completed successfully");
}

/// Drive one session from a script file or interactive stdin
fn run_session(
    config: &AppConfig,
    script: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = Session::new(config)?;

    println!("{}", session.render());

    match script {
        Some(path) => {
            let content = fs::read_to_string(path)
                .map_err(|e| format!("Failed to read script '{}': {}", path, e))?;
            for line in content.lines() {
                let feedback = session.handle_line(line)?;
                if !feedback.text.is_empty() {
                    println!("{}", feedback.text);
                }
                if feedback.quit {
                    break;
                }
            }
        }
        None => {
            let stdin = io::stdin();
            loop {
                print_prompt(session.active())?;
                let mut line = String::new();
                if stdin.lock().read_line(&mut line)? == 0 {
                    // EOF ends the session like 'quit'
                    break;
                }
                let feedback = session.handle_line(&line)?;
                if !feedback.text.is_empty() {
                    println!("{}", feedback.text);
                }
                if feedback.quit {
                    break;
                }
            }
        }
    }

    session.flush_transcript()?;
    Ok(())
}

/// Print the prompt showing which simulation is mounted
fn print_prompt(active: SimulatorKind) -> io::Result<()> {
    let mut stdout = io::stdout();
    write!(stdout, "[{}] > ", active.id())?;
    stdout.flush()
}

/// Print the navigation surface
fn print_simulation_list() {
    println!("{}", views::navigation_card(SimulatorKind::Analogy));
}

/// Print startup banner and configuration summary
fn print_startup_banner(config: &AppConfig) {
    eprintln!("Auth Academy");
    eprintln!("============");
    eprintln!("Interactive authentication & authorization simulations");
    eprintln!();

    print_configuration_summary(config);
}

/// Print configuration summary
fn print_configuration_summary(config: &AppConfig) {
    eprintln!("Configuration:");
    eprintln!("  Starting Simulation: {} ({})", config.simulation, config.simulation.label());
    eprintln!("  Verify Delay: {} ms", config.pacing.verify_delay_ms);
    eprintln!("  Upgrade Delay: {} ms", config.pacing.upgrade_delay_ms);
    eprintln!("  Shake Delay: {} ms", config.pacing.shake_delay_ms);
    eprintln!("  Quiz Advance Delay: {} ms", config.pacing.advance_delay_ms);
    if let Some(path) = &config.transcript_output {
        eprintln!("  Transcript Output: {}", path);
    }
    eprintln!();
    eprintln!("Type 'help' for the command reference, 'quit' to leave.");
    eprintln!();
}
