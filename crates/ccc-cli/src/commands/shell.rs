//! Line-oriented interactive session.
//!
//! Each input line is one interaction. After applying it the views it
//! invalidates are rendered to the output. Bad lines are reported on stderr
//! and the session continues.

use std::io::{BufRead, Write};

use anyhow::Context;
use ccc_core::enums::{CategoryFilter, MembershipFilter};
use ccc_core::render::{Interaction, RenderSet};
use ccc_store::KeyValueStore;

use crate::cli::{GlobalFlags, OutputFormat};
use crate::commands::shared::parse::parse_filter;
use crate::context::AppContext;
use crate::output::render_view;

const SHELL_HELP: &str = "\
commands:
  category <all|technical|cultural|sports|social>
  membership <all|joined|notJoined>
  search [text]      (no text clears the search)
  toggle <club-id>
  show               redraw every section
  help
  quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Interact(Interaction),
    Show,
    Help,
    Quit,
}

/// Parse one input line. Blank lines and `#` comments yield `None`.
pub fn parse_line(line: &str) -> anyhow::Result<Option<ShellCommand>> {
    let line = line.trim_start();
    if line.trim().is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let (word, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    let arg = rest.trim();

    let command = match word.to_ascii_lowercase().as_str() {
        "category" => {
            let category: CategoryFilter = parse_filter(arg, "category")?;
            ShellCommand::Interact(Interaction::CategorySelected(category))
        }
        "membership" => {
            let membership: MembershipFilter = parse_filter(arg, "membership")?;
            ShellCommand::Interact(Interaction::MembershipFilterSelected(membership))
        }
        // Verbatim; matching trims and lowercases.
        "search" => ShellCommand::Interact(Interaction::SearchChanged(rest.to_string())),
        "toggle" => {
            if arg.is_empty() {
                anyhow::bail!("toggle needs a club id");
            }
            ShellCommand::Interact(Interaction::ClubToggled(arg.to_string()))
        }
        "show" => ShellCommand::Show,
        "help" | "?" => ShellCommand::Help,
        "quit" | "exit" => ShellCommand::Quit,
        other => anyhow::bail!("unknown command '{other}' (try 'help')"),
    };
    Ok(Some(command))
}

pub fn handle<S: KeyValueStore>(ctx: &mut AppContext<S>, flags: &GlobalFlags) -> anyhow::Result<()> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    run(ctx, flags.format, stdin.lock(), &mut stdout.lock())
}

/// Render everything once, then process `input` until EOF or `quit`.
pub fn run<S, R, W>(
    ctx: &mut AppContext<S>,
    format: OutputFormat,
    input: R,
    out: &mut W,
) -> anyhow::Result<()>
where
    S: KeyValueStore,
    R: BufRead,
    W: Write,
{
    write_views(ctx, RenderSet::ALL, format, out)?;

    for line in input.lines() {
        let line = line.context("failed to read shell input")?;
        let command = match parse_line(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(error) => {
                eprintln!("ccc: {error:#}");
                continue;
            }
        };

        match command {
            ShellCommand::Quit => break,
            ShellCommand::Help => writeln!(out, "{SHELL_HELP}")?,
            ShellCommand::Show => write_views(ctx, RenderSet::ALL, format, out)?,
            ShellCommand::Interact(interaction) => match ctx.apply(&interaction) {
                Ok(set) => write_views(ctx, set, format, out)?,
                Err(error) => eprintln!("ccc: {error}"),
            },
        }
    }

    out.flush()?;
    Ok(())
}

fn write_views<S: KeyValueStore, W: Write>(
    ctx: &AppContext<S>,
    set: RenderSet,
    format: OutputFormat,
    out: &mut W,
) -> anyhow::Result<()> {
    if set.is_empty() {
        return Ok(());
    }
    let rendered = render_view(&ctx.render(set), format)?;
    writeln!(out, "{rendered}")?;
    if format == OutputFormat::Table {
        writeln!(out)?;
    }
    Ok(())
}
