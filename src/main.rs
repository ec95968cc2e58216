//! # Glossia CLI
//!
//! Command-line interface for managing translations and language resources.
//!
//! Licensed under the MIT License.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use log::debug;
use owo_colors::OwoColorize;

use glossia::{
    commands::{self, InitArgs},
    constants::{EXIT_FAILURE, VERSION},
    InitError,
};

const GLOBAL_HELP: &str = "\
Getting Started:
  glossia init                   Create ./glossia-project
  glossia init acme              Create ./acme
  glossia version                Print the CLI version

Coming Soon:
  glossia extract                Extract translation keys from source code
  glossia generate               Generate translation files

Learn more:
  glossia <COMMAND> --help       Show detailed help for a command";

#[derive(Parser)]
#[command(name = "glossia")]
#[command(about = "Glossia CLI - A modern language hub for your organization")]
#[command(
    long_about = "Glossia CLI is a command-line interface for managing translations and language \
resources in your organization. It provides tools for extracting, managing, and distributing \
translation files across your projects."
)]
#[command(disable_version_flag = true)]
#[command(after_help = GLOBAL_HELP)]
struct Cli {
    /// Print version
    #[arg(short = 'V', long)]
    version: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a new Glossia project
    #[command(
        long_about = "Initialize a new Glossia project with the basic configuration files \
and directory structure needed for managing translations.\n\n\
Directory structure created:\n  \
<project-name>/              Project directory\n  \
<project-name>/glossia.yaml  Project configuration\n  \
<project-name>/locales/      Output directory for translation files\n\n\
Running init again on an existing project rewrites glossia.yaml with the defaults.",
        after_help = "Examples:\n  \
glossia init              Initialize ./glossia-project\n  \
glossia init acme         Initialize ./acme\n\n\
Exit codes:\n  \
3  Invalid project name\n  \
4  Project directory could not be created\n  \
5  Configuration file could not be written\n  \
6  Output directory could not be created"
    )]
    Init {
        /// Name of the project directory to create
        #[arg(value_name = "PROJECT_NAME")]
        name: Option<String>,
    },

    /// Print the version number of Glossia CLI
    Version,

    /// Generate shell completions
    #[command(
        long_about = "Generate shell completion scripts and print them to stdout.",
        after_help = "Examples:\n  \
glossia completions bash > ~/.local/share/bash-completion/completions/glossia\n  \
glossia completions zsh > ~/.zfunc/_glossia\n  \
glossia completions fish > ~/.config/fish/completions/glossia.fish"
    )]
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();

    if let Err(err) = run() {
        eprintln!("{} {err:#}", "error:".red().bold());
        std::process::exit(exit_code(&err));
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    debug!("glossia {VERSION}");

    if cli.version {
        commands::version();
        return Ok(());
    }

    match cli.command {
        None => {
            commands::welcome();
            Ok(())
        }

        Some(Commands::Init { name }) => commands::init(&InitArgs { name }),

        Some(Commands::Version) => {
            commands::version();
            Ok(())
        }

        Some(Commands::Completions { shell }) => commands::completions(shell, &mut Cli::command()),
    }
}

/// Maps an error to the process exit status.
fn exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<InitError>()
        .map_or(EXIT_FAILURE, InitError::exit_code)
}
