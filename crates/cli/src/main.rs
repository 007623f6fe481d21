mod cmd;
mod completions;
mod logging;

use clap::{Args, CommandFactory, Parser, Subcommand};
use clap_complete::CompleteEnv;
use clap_complete::engine::ArgValueCompleter;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "favlink", version, about = "Add links to a static HTML favorites page")]
struct Cli {
    /// Config file (default: $XDG_CONFIG_HOME/favlink/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Add a link to a group, creating the group if needed
    Add(AddArgs),

    /// List the groups present in the page
    Groups(GroupsArgs),

    /// Validate configuration and print the resolved page
    Doctor,
}

#[derive(Debug, Args)]
pub struct AddArgs {
    /// The group the link should be added to
    #[arg(short = 'g', long, add = ArgValueCompleter::new(completions::complete_groups))]
    pub group: String,

    /// The name displayed for the link
    #[arg(short = 'n', long)]
    pub name: String,

    /// The full link to the page
    #[arg(short = 'a', long = "link")]
    pub link: String,

    /// List the groups already present before adding
    #[arg(short = 'l', long = "list")]
    pub list: bool,

    /// Edit this page from now on (created from the template if missing)
    #[arg(short = 'o', long)]
    pub output: Option<String>,
}

#[derive(Debug, Args)]
pub struct GroupsArgs {
    /// Read this page instead of the current one (not remembered)
    #[arg(short = 'o', long)]
    pub output: Option<String>,

    /// Print groups and their links as JSON
    #[arg(long)]
    pub json: bool,
}

fn main() {
    CompleteEnv::with_factory(Cli::command).complete();

    let cli = Cli::parse();

    match cli.command {
        Commands::Add(args) => cmd::add::run(cli.config.as_deref(), &args),
        Commands::Groups(args) => cmd::groups::run(cli.config.as_deref(), &args),
        Commands::Doctor => cmd::doctor::run(cli.config.as_deref()),
    }

    logging::shutdown();
}
