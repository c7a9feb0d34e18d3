//! Shelfmark — an interactive bookmark shelf for the terminal.
//!
//! Prints the bookmark and archive lists after every command. Rows are addressed
//! by the number shown next to them.

use std::io::{self, BufRead, Write};

use shelfmark::app::{Action, App};
use shelfmark::services::logging;
use shelfmark::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use shelfmark::services::user_prompt::ConsolePrompt;
use shelfmark::types::bookmark::SortMode;
use shelfmark::types::errors::BookmarkError;
use shelfmark::types::view::View;

const HELP: &str = "\
commands:
  add <name> <url>     add a bookmark (url is the last word)
  star N               toggle important on bookmark N
  tag N                edit the tag of bookmark N
  archive N            move bookmark N to the archive
  restore N            move archive entry N back
  delete N             permanently delete archive entry N
  clear-archive        delete every archive entry
  toggle-archive       show or hide the archive
  sort <mode>          important | alphabetical-asc | alphabetical-desc | date-newest | date-oldest
  filter [text]        show only names/tags containing text (blank clears)
  list                 redraw
  quit";

fn print_view(out: &mut impl Write, view: &View) -> io::Result<()> {
    writeln!(out)?;
    write!(out, "Bookmarks (sort: {}", view.sort_mode)?;
    if !view.filter_text.is_empty() {
        write!(out, ", filter: \"{}\"", view.filter_text)?;
    }
    writeln!(out, ")")?;
    if view.bookmarks.is_empty() {
        writeln!(out, "  (none)")?;
    }
    for (i, row) in view.bookmarks.iter().enumerate() {
        let star = if row.important { '★' } else { '☆' };
        write!(out, "  {:>2}. {} {}  {}", i + 1, star, row.name, row.href)?;
        if let Some(tag) = &row.tag {
            write!(out, "  [{}]", tag)?;
        }
        writeln!(out)?;
    }

    if view.archive_visible {
        writeln!(out, "Archive")?;
        if view.archive.is_empty() {
            writeln!(out, "  (empty)")?;
        }
        for (i, row) in view.archive.iter().enumerate() {
            write!(out, "  {:>2}. {}  {}", i + 1, row.name, row.href)?;
            if let Some(tag) = &row.tag {
                write!(out, "  [{}]", tag)?;
            }
            writeln!(out)?;
        }
    } else {
        writeln!(
            out,
            "Archive: {} entries ({})",
            view.archive.len(),
            view.archive_toggle_label
        )?;
    }
    Ok(())
}

/// Parses a 1-based row number against a list of `len` rows.
fn row_index(arg: &str, len: usize) -> Result<usize, String> {
    match arg.trim().parse::<usize>() {
        Ok(n) if n >= 1 && n <= len => Ok(n - 1),
        _ => Err(format!("no row {}", arg.trim())),
    }
}

/// Turns one command line into an action, using `view` to resolve row numbers.
fn parse_command(line: &str, view: &View) -> Result<Option<Action>, String> {
    let line = line.trim();
    let (cmd, rest) = line.split_once(' ').unwrap_or((line, ""));
    let rest = rest.trim();

    let bookmark = |arg: &str| row_index(arg, view.bookmarks.len()).map(|i| &view.bookmarks[i]);
    let archived = |arg: &str| row_index(arg, view.archive.len()).map(|i| &view.archive[i]);

    let action = match cmd {
        "" | "list" => return Ok(None),
        "add" => {
            let (name, url) = rest.rsplit_once(' ').unwrap_or((rest, ""));
            Action::Add {
                name: name.to_string(),
                url: url.to_string(),
            }
        }
        "star" => {
            let row = bookmark(rest)?;
            Action::ToggleImportant {
                name: row.name.clone(),
                url: row.href.clone(),
            }
        }
        "tag" => {
            let row = bookmark(rest)?;
            Action::EditTag {
                name: row.name.clone(),
                url: row.href.clone(),
            }
        }
        "archive" => {
            let row = bookmark(rest)?;
            Action::Archive {
                name: row.name.clone(),
                url: row.href.clone(),
            }
        }
        "restore" => {
            let row = archived(rest)?;
            Action::Restore {
                name: row.name.clone(),
                url: row.href.clone(),
            }
        }
        "delete" => {
            let row = archived(rest)?;
            Action::Delete {
                name: row.name.clone(),
                url: row.href.clone(),
                tag: row.tag.clone().unwrap_or_default(),
            }
        }
        "clear-archive" => Action::ClearArchive,
        "toggle-archive" => Action::ToggleArchiveVisibility,
        "sort" => Action::SetSortMode(rest.parse::<SortMode>()?),
        "filter" => Action::SetFilter(rest.to_string()),
        other => return Err(format!("unknown command '{}', try 'help'", other)),
    };
    Ok(Some(action))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut settings_engine = SettingsEngine::new(std::env::args().nth(1));
    settings_engine.load()?;
    logging::init(&settings_engine.get_settings().logging);
    let mut app = App::open(settings_engine)?;

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();

    let mut view = app.view()?;
    print_view(&mut out, &view)?;

    loop {
        write!(out, "> ")?;
        out.flush()?;
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        match line.trim() {
            "quit" | "exit" => break,
            "help" => {
                writeln!(out, "{}", HELP)?;
                continue;
            }
            _ => {}
        }

        let action = match parse_command(&line, &view) {
            Ok(Some(action)) => action,
            Ok(None) => {
                view = app.view()?;
                print_view(&mut out, &view)?;
                continue;
            }
            Err(msg) => {
                writeln!(out, "{}", msg)?;
                continue;
            }
        };

        let mut prompt = ConsolePrompt::new(&mut input, io::stdout());
        match app.dispatch(action, &mut prompt) {
            Ok(next) => {
                view = next;
                print_view(&mut out, &view)?;
            }
            // Already shown to the user by the prompt.
            Err(BookmarkError::Validation(_)) => {}
            Err(e) => {
                tracing::error!(error = %e, "action failed");
                writeln!(out, "error: {}", e)?;
            }
        }
    }

    Ok(())
}
