use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "medialib", bin_name = "medialib", version)]
#[command(about = "Searchable catalog of media files and their metadata", long_about = None)]
pub struct Cli {
    /// Catalogs to load before the prompt starts
    #[arg(value_name = "FILES")]
    pub files: Vec<String>,

    /// Verbose output
    #[arg(short, long, help_heading = "Options")]
    pub verbose: bool,

    /// Directory holding config.json
    #[arg(short, long, value_name = "DIR", help_heading = "Options")]
    pub config: Option<PathBuf>,
}

/// One line typed at the prompt.
#[derive(Parser, Debug)]
#[command(
    name = "medialib",
    no_binary_name = true,
    disable_help_flag = true,
    disable_help_subcommand = true,
    disable_version_flag = true
)]
pub struct PromptLine {
    #[command(subcommand)]
    pub command: PromptCommand,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum PromptCommand {
    /// Load catalogs into the collection
    Load {
        #[arg(required = true, num_args = 1..)]
        paths: Vec<String>,
    },

    /// List all files, or files with any of the given values
    #[command(alias = "ls")]
    List {
        #[arg(allow_hyphen_values = true)]
        terms: Vec<String>,
    },

    /// Add metadata to a listed file
    Add {
        /// Position in the last listing
        index: String,

        /// keyword value [keyword value]...
        #[arg(required = true, num_args = 2.., allow_hyphen_values = true)]
        pairs: Vec<String>,
    },

    /// Replace metadata on a listed file
    Set {
        /// Position in the last listing
        index: String,

        /// keyword value [keyword value]...
        #[arg(required = true, num_args = 2.., allow_hyphen_values = true)]
        pairs: Vec<String>,
    },

    /// Delete metadata keywords from a listed file
    #[command(alias = "delete")]
    Del {
        /// Position in the last listing
        index: String,

        #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
        keywords: Vec<String>,
    },

    /// Save the whole collection
    Save { path: String },

    /// Save the files of the last listing
    SaveSearch { path: String },

    /// Show help for all commands or one of them
    Help { command: Option<String> },

    /// Leave the prompt
    #[command(alias = "exit")]
    Quit,
}

/// Command group definitions for help output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandGroup {
    Catalog,
    Metadata,
    Misc,
}

impl CommandGroup {
    pub fn heading(&self) -> &'static str {
        match self {
            CommandGroup::Catalog => "Catalog Commands:",
            CommandGroup::Metadata => "Metadata Commands:",
            CommandGroup::Misc => "Miscellaneous:",
        }
    }

    pub fn for_command(name: &str) -> Option<Self> {
        match name {
            "load" | "list" | "save" | "save-search" => Some(CommandGroup::Catalog),
            "add" | "set" | "del" => Some(CommandGroup::Metadata),
            "help" | "quit" => Some(CommandGroup::Misc),
            _ => None,
        }
    }

    pub fn all() -> &'static [CommandGroup] {
        &[
            CommandGroup::Catalog,
            CommandGroup::Metadata,
            CommandGroup::Misc,
        ]
    }
}

/// Help for every prompt command, grouped.
pub fn get_grouped_help() -> String {
    let cmd = PromptLine::command();
    let subcommands: Vec<_> = cmd.get_subcommands().collect();

    let mut output = String::new();
    output.push_str("Indexes refer to the last listing and start at 0.\n");

    for group in CommandGroup::all() {
        let group_cmds: Vec<_> = subcommands
            .iter()
            .filter(|sc| CommandGroup::for_command(sc.get_name()) == Some(*group))
            .collect();

        if !group_cmds.is_empty() {
            output.push('\n');
            output.push_str(&format!("{}\n", group.heading()));
            for sc in group_cmds {
                let about = sc.get_about().map(|s| s.to_string()).unwrap_or_default();
                output.push_str(&format!("  {:<12} {}\n", sc.get_name(), about));
            }
        }
    }

    output
}

/// Help for one prompt command, or `None` if there is no such command.
pub fn get_command_help(name: &str) -> Option<String> {
    let mut cmd = PromptLine::command();
    let help = cmd
        .get_subcommands_mut()
        .find(|sc| sc.get_name() == name || sc.get_all_aliases().any(|a| a == name))
        .map(|sc| sc.render_help().to_string());
    help
}
