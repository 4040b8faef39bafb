use std::fs;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use health_assistant::about::about_lines;
use health_assistant::config::{load_config, Config, CONFIG_FILE};
use health_assistant::form::{run_script, FormSession};
use health_assistant::startup::{load_dispatchers, required_conditions, EXIT_USAGE};
use health_assistant::{open_session, AppError};

#[derive(Debug, Parser)]
#[command(
    name = "health-assistant",
    version,
    about = "Diabetes, heart disease and Parkinson's risk prediction from health metrics",
    long_about = "health-assistant collects numeric health metrics through a terminal form,\n\
        feeds them to pre-trained classification models and displays a risk label.\n\
        A sign up / login step guards the prediction pages.\n\n\
        EXAMPLES:\n\
        \n  health-assistant                           Start the interactive session\n\
        \n  health-assistant run --script answers.txt  Replay answers from a file\n\
        \n  health-assistant check-models              Verify the model files load",
    after_help = "Models are read from <model_dir>/{diabetes,heart_disease,parkinsons}_model.json"
)]
struct Cli {
    /// Increase verbosity level (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Configuration file (default: ./health_assistant.toml if present)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Directory holding the model files, overrides the config
    #[arg(long = "model-dir", global = true, value_name = "DIR")]
    model_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Start the form session (default)
    #[command(
        about = "Start the form session",
        long_about = "Start the Login / Sign Up form, then the prediction pages.\n\n\
            Commands at any prompt:\n\
            \n  :back   Leave the current form\n\
            \n  :quit   Exit (also :q, :exit)"
    )]
    Run(RunArgs),

    /// Load every configured model and report it
    CheckModels,

    /// Print the About page
    About,
}

#[derive(Debug, Args, Clone, Default)]
struct RunArgs {
    /// Read answers from FILE instead of the terminal, one per line
    #[arg(long, value_name = "FILE")]
    script: Option<PathBuf>,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn resolve_config(cli: &Cli) -> Result<Config, AppError> {
    let (path, required) = match &cli.config {
        Some(p) => (p.clone(), true),
        None => (PathBuf::from(CONFIG_FILE), false),
    };
    let mut config = load_config(&path, required)?;
    if let Some(dir) = &cli.model_dir {
        config.model_dir = dir.clone();
    }
    Ok(config)
}

fn fail(e: &AppError) -> i32 {
    eprintln!("error: {e}");
    e.exit_code()
}

fn run_repl(session: &mut FormSession) -> i32 {
    use rustyline::error::ReadlineError;
    use rustyline::Editor;
    let mut rl = match Editor::<(), rustyline::history::DefaultHistory>::new() {
        Ok(e) => e,
        Err(e) => {
            eprintln!("error: failed to initialize terminal: {e}");
            return EXIT_USAGE;
        }
    };

    for l in session.greeting() {
        println!("{l}");
    }
    loop {
        let prompt = session.prompt();
        match rl.readline(&prompt) {
            Ok(line) => {
                if !session.masks_input() && !line.trim().is_empty() {
                    let _ = rl.add_history_entry(line.trim());
                }
                let (out, exit) = session.handle_line(&line);
                for l in out {
                    println!("{l}");
                }
                if exit {
                    return 0;
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => return 0,
            Err(e) => {
                eprintln!("error: terminal failed: {e}");
                return EXIT_USAGE;
            }
        }
    }
}

fn run(config: &Config, args: &RunArgs) -> i32 {
    let mut session = match open_session(config) {
        Ok(s) => s,
        Err(e) => return fail(&e),
    };
    match &args.script {
        Some(path) => match fs::read_to_string(path) {
            Ok(script) => {
                for l in run_script(&mut session, &script) {
                    println!("{l}");
                }
                0
            }
            Err(e) => {
                eprintln!("error: cannot read script '{}': {e}", path.display());
                EXIT_USAGE
            }
        },
        None => run_repl(&mut session),
    }
}

fn check_models(config: &Config) -> i32 {
    match load_dispatchers(config) {
        Ok(set) => {
            for condition in required_conditions(config) {
                if let Some(d) = set.get(condition) {
                    println!(
                        "✓ {:<14} {} ({} features)",
                        condition.key(),
                        d.classifier().name(),
                        d.spec().arity()
                    );
                }
            }
            0
        }
        Err(e) => fail(&e),
    }
}

fn run_cli() -> i32 {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Some(Command::About) = cli.command {
        for l in about_lines() {
            println!("{l}");
        }
        return 0;
    }

    let config = match resolve_config(&cli) {
        Ok(c) => c,
        Err(e) => return fail(&e),
    };
    log::debug!("configuration: {config:?}");

    match cli.command {
        Some(Command::Run(ref args)) => run(&config, args),
        None => run(&config, &RunArgs::default()),
        Some(Command::CheckModels) => check_models(&config),
        Some(Command::About) => 0,
    }
}

fn main() {
    std::process::exit(run_cli());
}
