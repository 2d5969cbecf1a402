use anyhow::Result;
use clap::{ArgAction, CommandFactory, Parser, Subcommand};
use commet::Repository;
use commet::commands::porcelain::log::LogOptions;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "commet",
    version,
    disable_version_flag = true,
    about = "A simple local version-control tool",
    long_about = "Commet tracks whole-file snapshots: files are staged with `add` \
    and sealed into immutable, hash-addressed commits with `commit`. \
    There is a single linear history and no branching, diffing or merging.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
"
)]
struct Cli {
    #[arg(short = 'v', long = "version", action = ArgAction::Version, help = "Print version information")]
    version: (),

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "init",
        about = "Initialize a new repository",
        long_about = "This command creates the .commet control directory in the current directory or at the specified path."
    )]
    Init {
        #[arg(index = 1, help = "The path to the repository")]
        path: Option<PathBuf>,
    },
    #[command(
        name = "add",
        about = "Stage a file",
        long_about = "This command fingerprints one file and appends it to the staging area."
    )]
    Add {
        #[arg(index = 1, help = "The file to stage")]
        path: PathBuf,
    },
    #[command(
        name = "commit",
        about = "Commit staged changes",
        long_about = "This command seals every staged file into a new commit with the specified message \
        and empties the staging area."
    )]
    Commit {
        #[arg(
            index = 1,
            required_unless_present = "message_flag",
            conflicts_with = "message_flag",
            help = "The commit message"
        )]
        message: Option<String>,
        #[arg(short = 'm', long = "message", id = "message_flag", help = "The commit message")]
        message_flag: Option<String>,
    },
    #[command(name = "status", about = "Show the staged files")]
    Status,
    #[command(
        name = "log",
        about = "Show the commit history",
        long_about = "This command lists every commit, newest first."
    )]
    Log {
        #[arg(long, help = "Show each commit on a single line")]
        oneline: bool,
    },
    #[command(
        name = "show",
        about = "Show a commit and the files it recorded",
        long_about = "This command shows one commit. The hash may be abbreviated as long as it is unambiguous."
    )]
    Show {
        #[arg(index = 1, help = "The full or abbreviated commit hash")]
        hash: String,
    },
}

fn open_repository(path: &Path) -> Result<Repository> {
    Ok(Repository::new(path, Box::new(std::io::stdout()))?)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    commet::logging::init_logging();

    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let pwd = std::env::current_dir()?;

    match command {
        Commands::Init { path } => {
            let repository = open_repository(path.as_deref().unwrap_or(&pwd))?;
            repository.init()?;
        }
        Commands::Add { path } => {
            open_repository(&pwd)?.add(&path)?;
        }
        Commands::Commit {
            message,
            message_flag,
        } => {
            let message = message
                .or(message_flag)
                .ok_or_else(|| anyhow::anyhow!("a commit message is required"))?;
            open_repository(&pwd)?.commit(&message)?;
        }
        Commands::Status => {
            open_repository(&pwd)?.status()?;
        }
        Commands::Log { oneline } => {
            open_repository(&pwd)?.log(&LogOptions { oneline })?;
        }
        Commands::Show { hash } => {
            open_repository(&pwd)?.show(&hash)?;
        }
    }

    Ok(())
}
