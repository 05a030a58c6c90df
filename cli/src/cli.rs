// SPDX-FileCopyrightText: 2025-2026 Voyageur Developers <dev@voyageur.travel>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, ffi::OsString, path::PathBuf};

use clap::{ArgMatches, Command, ValueHint, arg, builder::styling, crate_version, value_parser};
use colored::Colorize;
use futures::{FutureExt, future::LocalBoxFuture};
use tracing_subscriber::EnvFilter;
use voyageur_core::{APP_NAME, Voyageur};

use crate::cmd_book::CmdBook;
use crate::cmd_concierge::CmdConcierge;
use crate::cmd_generate_completion::CmdGenerateCompletion;
use crate::cmd_listings::CmdListings;
use crate::cmd_quote::CmdQuote;
use crate::cmd_reserve::CmdReserve;
use crate::cmd_show::CmdShow;
use crate::config::{Config, parse_config};

/// Run the Voyageur command-line interface.
pub async fn run() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match Cli::parse() {
        Ok(cli) => {
            if let Err(e) = cli.run().await {
                println!("{} {}", "Error:".red(), e);
            }
        }
        Err(e) => println!("{} {}", "Error:".red(), e),
    };
    Ok(())
}

/// Command-line interface
#[derive(Debug)]
pub struct Cli {
    /// Path to the configuration file
    pub config: Option<PathBuf>,

    /// The command to execute
    pub command: Commands,
}

impl Cli {
    /// Create the command-line interface
    pub fn command() -> Command {
        const STYLES: styling::Styles = styling::Styles::styled()
            .header(styling::AnsiColor::Green.on_default().bold())
            .usage(styling::AnsiColor::Green.on_default().bold())
            .literal(styling::AnsiColor::Blue.on_default().bold())
            .placeholder(styling::AnsiColor::Cyan.on_default());

        Command::new(APP_NAME)
            .about("Browse stays, pick your dates and see what the trip costs.")
            .author("Voyageur Developers <dev@voyageur.travel>")
            .version(crate_version!())
            .styles(STYLES)
            .subcommand_required(false) // allow default to listings
            .arg_required_else_help(false)
            .arg(
                arg!(-c --config [CONFIG] "Path to the configuration file")
                    .long_help(
                        "\
Path to the configuration file. Defaults to $XDG_CONFIG_HOME/voyageur/config.toml on Linux and MacOS, \
%LOCALAPPDATA%/voyageur/config.toml on Windows.",
                    )
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::FilePath),
            )
            .subcommand(CmdListings::command())
            .subcommand(CmdShow::command())
            .subcommand(CmdQuote::command())
            .subcommand(CmdReserve::command())
            .subcommand(CmdBook::command())
            .subcommand(CmdConcierge::command())
            .subcommand(CmdGenerateCompletion::command())
    }

    /// Parse the command-line arguments
    pub fn parse() -> Result<Self, Box<dyn Error>> {
        let commands = Self::command();
        let matches = commands.get_matches();
        Self::from(matches)
    }

    /// Parse the specified arguments
    pub fn try_parse_from<I, T>(args: I) -> Result<Self, Box<dyn Error>>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let commands = Self::command();
        let matches = commands.try_get_matches_from(args)?;
        Self::from(matches)
    }

    /// Create a CLI instance from the `ArgMatches`
    pub fn from(matches: ArgMatches) -> Result<Self, Box<dyn Error>> {
        use Commands::*;
        let command = match matches.subcommand() {
            Some((CmdListings::NAME, matches)) => Listings(CmdListings::from(matches)),
            Some((CmdShow::NAME, matches)) => Show(CmdShow::from(matches)),
            Some((CmdQuote::NAME, matches)) => Quote(CmdQuote::from(matches)),
            Some((CmdReserve::NAME, matches)) => Reserve(CmdReserve::from(matches)),
            Some((CmdBook::NAME, matches)) => Book(CmdBook::from(matches)),
            Some((CmdConcierge::NAME, matches)) => Concierge(CmdConcierge::from(matches)),
            Some((CmdGenerateCompletion::NAME, matches)) => {
                GenerateCompletion(CmdGenerateCompletion::from(matches))
            }
            None => Listings(CmdListings::default()),
            Some((name, _)) => return Err(format!("Unknown command: {name}").into()),
        };

        let config = matches.get_one("config").cloned();
        Ok(Cli { config, command })
    }

    /// Run the command
    pub async fn run(self) -> Result<(), Box<dyn Error>> {
        self.command.run(self.config).await
    }
}

/// The commands available in the CLI
#[derive(Debug, Clone)]
pub enum Commands {
    /// List the stays of a category
    Listings(CmdListings),

    /// Show a property with its calendar
    Show(CmdShow),

    /// Price a stay
    Quote(CmdQuote),

    /// Start a reservation
    Reserve(CmdReserve),

    /// Pick dates in the interactive calendar
    Book(CmdBook),

    /// Ask the travel concierge
    Concierge(CmdConcierge),

    /// Generate shell completion
    GenerateCompletion(CmdGenerateCompletion),
}

impl Commands {
    /// Run the command with the given configuration
    #[rustfmt::skip]
    pub async fn run(self, config: Option<PathBuf>) -> Result<(), Box<dyn Error>> {
        use Commands::*;
        match self {
            Listings(a)  => Self::run_with(config, |x, _| a.run(x).boxed_local()).await,
            Show(a)      => Self::run_with(config, |x, y| a.run(x, y).boxed_local()).await,
            Quote(a)     => Self::run_with(config, |x, _| a.run(x).boxed_local()).await,
            Reserve(a)   => Self::run_with(config, |x, _| a.run(x).boxed_local()).await,
            Book(a)      => Self::run_with(config, |x, _| a.run(x).boxed_local()).await,
            Concierge(a) => Self::run_with(config, |x, y| a.run(x, y).boxed_local()).await,
            GenerateCompletion(a) => a.run(),
        }
    }

    async fn run_with<F>(config: Option<PathBuf>, f: F) -> Result<(), Box<dyn Error>>
    where
        F: for<'a> FnOnce(&'a Voyageur, &'a Config) -> LocalBoxFuture<'a, Result<(), Box<dyn Error>>>,
    {
        tracing::debug!("parsing configuration...");
        let (core_config, config) = parse_config(config).await?;
        let voyageur = Voyageur::new(core_config).await?;

        f(&voyageur, &config).await
    }
}
