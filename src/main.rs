use anyhow::{Context, Result};
use clap::{Args, CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use std::io::{self, Read};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use typeahead::checker::offsets::utf16_len;
use typeahead::cli::output::{self, OutputFormat};
use typeahead::config::Overrides;
use typeahead::{dict, Config, SpellEngine};

#[derive(Parser, Debug)]
#[command(name = "typeahead")]
#[command(version, about = "Bilingual spell-check, auto-correction and predictive completion", long_about = None)]
struct Cli {
    /// Output format (text, json)
    #[arg(short = 'o', long, global = true, default_value = "text")]
    format: OutputFormat,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Exit with code 0 even if misspellings are found
    #[arg(long, global = true)]
    no_fail: bool,

    /// Directory holding .aff/.dic or .words dictionaries
    #[arg(long, global = true, env = "TYPEAHEAD_DICT_DIR", value_name = "DIR")]
    dict_dir: Option<PathBuf>,

    /// Primary locale (e.g., en_US)
    #[arg(long, global = true, value_name = "LOCALE")]
    primary: Option<String>,

    /// Secondary locale (e.g., es_ES)
    #[arg(long, global = true, value_name = "LOCALE", conflicts_with = "no_secondary")]
    secondary: Option<String>,

    /// Check against the primary locale only
    #[arg(long, global = true)]
    no_secondary: bool,

    /// Pattern to ignore (regex)
    #[arg(long, global = true)]
    ignore_pattern: Vec<String>,

    /// Log engine activity to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Generate shell completion script
    #[arg(long, value_name = "SHELL")]
    completion: Option<Shell>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Flag misspellings and show the completion at the caret
    Check(InputArgs),
    /// Show the completion offered at the caret
    Complete(InputArgs),
    /// Apply every correction plus the completion, as the Tab key does
    Tab(InputArgs),
    /// Correct the word just typed, as the space key does
    Space(InputArgs),
    /// Dictionary management
    Dict {
        #[command(subcommand)]
        action: DictCommands,
    },
}

#[derive(Subcommand, Debug)]
enum DictCommands {
    /// List installed dictionaries
    List,
    /// Show dictionary info
    Info {
        /// Locale code (e.g., en_US)
        locale: String,
    },
    /// Download a dictionary
    Download {
        /// Locale code (e.g., en_US, es_ES)
        locale: String,
    },
}

#[derive(Args, Debug)]
struct InputArgs {
    /// Text to process; read from stdin when omitted
    #[arg(short, long)]
    text: Option<String>,

    /// Caret position in UTF-16 code units; defaults to the end of the text
    #[arg(short, long)]
    caret: Option<usize>,
}

impl InputArgs {
    fn resolve(self) -> Result<(String, usize)> {
        let text = match self.text {
            Some(text) => text,
            None => {
                let mut buf = String::new();
                io::stdin()
                    .read_to_string(&mut buf)
                    .context("Failed to read text from stdin")?;
                if buf.ends_with('\n') {
                    buf.pop();
                }
                buf
            }
        };
        let caret = self.caret.unwrap_or_else(|| utf16_len(&text));
        Ok((text, caret))
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if cli.no_color {
        colored::control::set_override(false);
    }

    // Handle shell completion generation
    if let Some(shell) = cli.completion {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "typeahead", &mut io::stdout());
        return Ok(());
    }

    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let config = Config::load(Overrides {
        primary_locale: cli.primary,
        secondary_locale: cli.secondary,
        no_secondary: cli.no_secondary,
        dictionary_dir: cli.dict_dir,
        ignore_patterns: cli.ignore_pattern,
    })?;

    let colored_output = !cli.no_color;
    let found = handle_command(command, config, colored_output, cli.format)?;

    // Exit with appropriate code
    if found > 0 && !cli.no_fail {
        std::process::exit(1);
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "typeahead=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Run a subcommand; returns the number of misspellings that should fail the run.
fn handle_command(
    command: Commands,
    config: Config,
    colored_output: bool,
    format: OutputFormat,
) -> Result<usize> {
    match command {
        Commands::Dict { action } => {
            handle_dict(action, &config)?;
        }
        Commands::Check(input) => {
            let (text, caret) = input.resolve()?;
            let analysis = load_engine(config).analyze(&text, caret);
            output::print_analysis(&text, &analysis, colored_output, format);
            let typing = usize::from(analysis.current_word_correction.is_some());
            return Ok(analysis.misspelled.len() + typing);
        }
        Commands::Complete(input) => {
            let (text, caret) = input.resolve()?;
            let autocomplete = load_engine(config).autocomplete(&text, caret);
            output::print_completion(&text, autocomplete.as_ref(), colored_output, format);
        }
        Commands::Tab(input) => {
            let (text, caret) = input.resolve()?;
            let result = load_engine(config).apply_tab(&text, caret);
            output::print_tab(&result, colored_output, format);
        }
        Commands::Space(input) => {
            let (text, caret) = input.resolve()?;
            let correction = load_engine(config).auto_correct_on_space(&text, caret);
            output::print_space(&text, caret, correction.as_ref(), colored_output, format);
        }
    }

    Ok(0)
}

/// Engine with dictionaries loaded; a failed load leaves it usable but inert.
fn load_engine(config: Config) -> SpellEngine {
    let mut engine = SpellEngine::new(config);
    engine.ensure_loaded();
    if let Some(reason) = engine.error() {
        eprintln!("Warning: spell checking disabled: {}", reason);
    }
    engine
}

fn handle_dict(action: DictCommands, config: &Config) -> Result<()> {
    let dir = config
        .dictionary_dir()
        .context("Could not determine a dictionary directory; pass --dict-dir")?;

    match action {
        DictCommands::List => {
            dict::manager::list_dictionaries(&dir)?;
        }
        DictCommands::Info { locale } => {
            dict::manager::show_info(&dir, &locale)?;
        }
        DictCommands::Download { locale } => {
            dict::manager::download_dictionary(&dir, &locale)?;
        }
    }
    Ok(())
}
