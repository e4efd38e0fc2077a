//! Startup and the prompt loop.
//!
//! `run` wires process arguments, logging and configuration, loads the startup
//! catalogs, then hands stdin and stdout to [`repl`]. The loop itself is
//! generic over its input, output and codec so tests can drive it with byte
//! buffers and an in-memory codec.

use super::render::{render_error, render_files, render_messages};
use super::setup::{get_command_help, get_grouped_help, Cli, PromptCommand, PromptLine};
use clap::error::ErrorKind;
use clap::Parser;
use medialib::api::LibraryApi;
use medialib::codec::json::JsonCodec;
use medialib::codec::{FileExport, FileImport};
use medialib::commands::{CmdMessage, CmdResult};
use medialib::config::{config_dir, LibraryConfig};
use medialib::error::Result;
use std::io::{self, BufRead, Write};
use std::path::Path;
use tracing::debug;
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "MEDIALIB_LOG";

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = load_config(cli.config.as_deref())?;
    let codec = JsonCodec::new().with_pretty(config.pretty);
    let mut api = LibraryApi::new(codec);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let startup: Vec<&str> = config
        .autoload
        .iter()
        .chain(&cli.files)
        .map(String::as_str)
        .collect();
    if !startup.is_empty() {
        let result = api.load(&startup)?;
        out.write_all(render_result(&result).as_bytes())?;
    }

    repl(&mut api, &config.prompt, io::stdin().lock(), &mut out)
}

/// Installs the stderr subscriber. `-v` forces `debug`; otherwise
/// `MEDIALIB_LOG` decides, defaulting to `warn`.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

fn load_config(explicit: Option<&Path>) -> Result<LibraryConfig> {
    match config_dir(explicit) {
        Some(dir) => {
            debug!(dir = %dir.display(), "reading config");
            LibraryConfig::load(&dir)
        }
        None => Ok(LibraryConfig::default()),
    }
}

enum Outcome {
    Output(String),
    Quit,
}

/// Reads commands line by line until `quit` or end of input. The result set
/// of the last listing lives in `api` between lines.
pub(super) fn repl<C, R, W>(
    api: &mut LibraryApi<C>,
    prompt: &str,
    input: R,
    output: &mut W,
) -> Result<()>
where
    C: FileImport + FileExport,
    R: BufRead,
    W: Write,
{
    let mut lines = input.lines();
    loop {
        output.write_all(prompt.as_bytes())?;
        output.flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            None => break,
        };

        match handle_line(api, &line) {
            Outcome::Output(text) => output.write_all(text.as_bytes())?,
            Outcome::Quit => break,
        }
    }

    output.write_all(b"\n")?;
    output.flush()?;
    Ok(())
}

fn handle_line<C: FileImport + FileExport>(api: &mut LibraryApi<C>, line: &str) -> Outcome {
    let words: Vec<&str> = line.split_whitespace().collect();
    let name = match words.first() {
        Some(name) => *name,
        None => {
            return Outcome::Output(render_messages(&[CmdMessage::error(
                "No command given -- see \"help\" for details.",
            )]))
        }
    };

    let command = match PromptLine::try_parse_from(words.iter().copied()) {
        Ok(parsed) => parsed.command,
        Err(e) => return Outcome::Output(parse_failure(&e, name)),
    };

    let result = match command {
        PromptCommand::Quit => return Outcome::Quit,
        PromptCommand::Help { command } => return Outcome::Output(help(command.as_deref())),
        PromptCommand::Load { paths } => api.load(&paths),
        PromptCommand::List { terms } => api.list(&terms),
        PromptCommand::Add { index, pairs } => api.add_metadata(&index, &pairs),
        PromptCommand::Set { index, pairs } => api.set_metadata(&index, &pairs),
        PromptCommand::Del { index, keywords } => api.delete_metadata(&index, &keywords),
        PromptCommand::Save { path } => api.save(&path),
        PromptCommand::SaveSearch { path } => api.save_search(&path),
    };

    Outcome::Output(match result {
        Ok(result) => render_result(&result),
        Err(e) => render_error(&e),
    })
}

fn parse_failure(error: &clap::Error, name: &str) -> String {
    debug!(%error, "prompt line rejected");
    let content = match error.kind() {
        ErrorKind::DisplayHelp => return error.to_string(),
        ErrorKind::InvalidSubcommand => format!(
            "Command \"{}\" not found -- see \"help\" for details.",
            name
        ),
        _ => format!(
            "Invalid parameters for \"{}\" -- see \"help\" for details.",
            name
        ),
    };
    render_messages(&[CmdMessage::error(content)])
}

fn help(command: Option<&str>) -> String {
    match command {
        None => get_grouped_help(),
        Some(name) => get_command_help(name).unwrap_or_else(|| {
            render_messages(&[CmdMessage::error(format!(
                "Command \"{}\" not found -- see \"help\" for details.",
                name
            ))])
        }),
    }
}

fn render_result(result: &CmdResult) -> String {
    let mut output = render_messages(&result.messages);
    output.push_str(&render_files(&result.listed));
    output
}
