//! The `marknote session` command.
//!
//! Reads one command per line and applies it to a single in-memory
//! [`Session`]. State lives until end of input.

use std::io::{BufRead, IsTerminal, Write};
use std::path::PathBuf;

use anyhow::Result;
use uuid::Uuid;

use marknote_core::catalog::load_catalog_or_empty;
use marknote_core::traits::Notifier;
use marknote_core::{Session, SubmitError};
use marknote_report::message::render_result_lines;
use marknote_report::MessageTemplate;

use crate::console::{ConsoleNotifier, FileClipboard};

const HELP: &str = "\
Commands:
  list [query]            show catalog tests (optionally filtered)
  toggle <title|n>        select or deselect a test
  only [title|n]          select exactly one test, or none
  clear                   clear the selection and entered marks
  selected                show the selection and entered marks
  mark <title> = <marks>  enter obtained marks for a selected test
  total <title> = <total> enter total marks for a test not in the catalog
  submit                  add the selected tests to the results
  results                 show added results
  remove <n|id>           remove a result
  message                 show the generated message
  copy <file>             copy the message into a file
  help                    show this help
  quit                    leave the session";

pub fn execute(catalog_path: Option<PathBuf>, config_path: Option<PathBuf>) -> Result<()> {
    let (config, catalog_path) = super::resolve(catalog_path, config_path)?;
    let mut session = Session::new(load_catalog_or_empty(&catalog_path));
    let template = MessageTemplate::from(&config.message);

    let stdin = std::io::stdin();
    let interactive = stdin.is_terminal();
    let mut stdout = std::io::stdout();

    if interactive {
        writeln!(
            stdout,
            "marknote session: {} tests loaded. Type 'help' for commands.",
            session.catalog().len()
        )?;
    }

    run(
        &mut session,
        &template,
        stdin.lock(),
        &mut stdout,
        &ConsoleNotifier,
        interactive,
    )
}

/// Process commands from `input` until it ends or `quit` is read.
pub fn run<R: BufRead, W: Write>(
    session: &mut Session,
    template: &MessageTemplate,
    input: R,
    out: &mut W,
    notifier: &dyn Notifier,
    prompt: bool,
) -> Result<()> {
    let mut lines = input.lines();
    loop {
        if prompt {
            write!(out, "> ")?;
            out.flush()?;
        }
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let (command, rest) = match line.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (line, ""),
        };

        match command {
            "quit" | "exit" => break,
            "help" => writeln!(out, "{HELP}")?,
            "list" => list(session, rest, out)?,
            "toggle" => {
                let Some(title) = resolve_title(session, rest) else {
                    writeln!(out, "Usage: toggle <title|n>")?;
                    continue;
                };
                if session.toggle(&title) {
                    writeln!(out, "Selected: {title}")?;
                } else {
                    writeln!(out, "Deselected: {title}")?;
                }
                writeln!(out, "{}", session.selection().label())?;
            }
            "only" => {
                let title = resolve_title(session, rest);
                session.select_only(title.as_deref());
                writeln!(out, "{}", session.selection().label())?;
            }
            "clear" => {
                session.clear_all();
                writeln!(out, "Selection cleared.")?;
            }
            "selected" => selected(session, out)?,
            "mark" | "total" => {
                let (title, value) = match super::parse_pair(rest) {
                    Ok(pair) => pair,
                    Err(e) => {
                        writeln!(out, "{e}")?;
                        continue;
                    }
                };
                if !session.selection().contains(&title) {
                    writeln!(out, "Not selected: {title}")?;
                    continue;
                }
                if command == "mark" {
                    session.set_obtained(&title, value);
                } else {
                    session.set_total(&title, value);
                }
            }
            "submit" => match session.submit(notifier) {
                Ok(added) => writeln!(out, "Added {} result(s).", added.len())?,
                Err(SubmitError::InvalidInput(fields)) => {
                    for f in &fields {
                        writeln!(out, "  [{}] {}", f.field, f.message)?;
                    }
                }
                // Already reported by the notifier
                Err(SubmitError::NoSelection) => {}
            },
            "results" => {
                if session.results().is_empty() {
                    writeln!(out, "No results added.")?;
                }
                for (i, (record, line)) in session
                    .results()
                    .iter()
                    .zip(render_result_lines(session.results().as_slice()))
                    .enumerate()
                {
                    writeln!(out, "{:>3}. {line}  ({})", i + 1, record.id)?;
                }
            }
            "remove" => match resolve_result(session, rest) {
                Some(id) => {
                    if let Some(removed) = session.remove(id) {
                        writeln!(out, "Removed: {}", removed.name)?;
                    }
                }
                None => writeln!(out, "No such result: {rest}")?,
            },
            "message" => writeln!(out, "{}", session.message(template))?,
            "copy" => {
                if rest.is_empty() {
                    writeln!(out, "Usage: copy <file>")?;
                    continue;
                }
                session.copy_message(template, &FileClipboard::new(PathBuf::from(rest)), notifier);
            }
            other => writeln!(out, "Unknown command: {other} (type 'help')")?,
        }
    }

    Ok(())
}

fn list<W: Write>(session: &Session, query: &str, out: &mut W) -> Result<()> {
    let catalog = session.catalog();
    if catalog.is_empty() {
        writeln!(out, "Catalog is empty.")?;
        return Ok(());
    }

    let mut shown = 0;
    for (i, test) in catalog.iter().enumerate() {
        if !test.matches(query) {
            continue;
        }
        let mark = if session.selection().contains(&test.title) {
            "x"
        } else {
            " "
        };
        writeln!(
            out,
            "{:>3}. [{mark}] {} ({}, {} marks)",
            i + 1,
            test.title,
            test.topic,
            test.total_questions
        )?;
        shown += 1;
    }

    if shown == 0 {
        writeln!(out, "No test found.")?;
    }
    Ok(())
}

fn selected<W: Write>(session: &Session, out: &mut W) -> Result<()> {
    writeln!(out, "{}", session.selection().label())?;
    for title in session.selection().titles() {
        let input = session.inputs().get(title);
        let obtained = input.map(|i| i.obtained.as_str()).unwrap_or("");
        let total = match session.catalog().find(title) {
            Some(test) => test.total_questions.to_string(),
            None => input
                .and_then(|i| i.total.clone())
                .unwrap_or_else(|| "?".to_string()),
        };
        writeln!(out, "  {title}: {obtained}/{total}")?;
    }
    Ok(())
}

/// An exact title, or a 1-based position in the catalog listing.
fn resolve_title(session: &Session, arg: &str) -> Option<String> {
    if arg.is_empty() {
        return None;
    }
    let catalog = session.catalog();
    if catalog.find(arg).is_some() {
        return Some(arg.to_string());
    }
    if let Ok(n) = arg.parse::<usize>() {
        if let Some(test) = n.checked_sub(1).and_then(|i| catalog.as_slice().get(i)) {
            return Some(test.title.clone());
        }
    }
    // Titles outside the catalog are allowed
    Some(arg.to_string())
}

/// A 1-based position in the results listing, or a full record id.
fn resolve_result(session: &Session, arg: &str) -> Option<Uuid> {
    let results = session.results();
    if let Ok(id) = arg.parse::<Uuid>() {
        return results.get(id).map(|r| r.id);
    }
    let n = arg.parse::<usize>().ok()?;
    results.as_slice().get(n.checked_sub(1)?).map(|r| r.id)
}
