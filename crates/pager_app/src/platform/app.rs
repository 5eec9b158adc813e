//! Terminal event loop: stdin commands in, pager lines out.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use pager_core::{update, Msg, DEFAULT_PAGE_SIZE_OPTIONS};
use pager_logging::{pager_info, pager_warn};

use super::effects::EffectRunner;
use super::logging::{self, LogDestination};
use super::persistence;
use super::source::ListingSource;
use super::ui;

/// Items served by the demo listing until `items <n>` reconfigures it.
const DEFAULT_TOTAL_ITEMS: u64 = 137;
const DEFAULT_PAGE_SIZE: u64 = 10;

pub fn run_app() -> io::Result<()> {
    logging::initialize(LogDestination::File);

    let prefs_dir = prefs_dir();
    let page_size = persistence::load_page_size(&prefs_dir)
        .filter(|size| DEFAULT_PAGE_SIZE_OPTIONS.contains(size))
        .unwrap_or(DEFAULT_PAGE_SIZE);

    let mut source = ListingSource::new(DEFAULT_TOTAL_ITEMS);
    let runner = EffectRunner::new(prefs_dir);
    let mut state = source.fetch(1, page_size);

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    print_lines(&mut stdout, &ui::render::render(&state.view()))?;

    loop {
        write!(stdout, "{}", ui::constants::PROMPT)?;
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        match parse_command(&line) {
            Command::Quit => break,
            Command::Help => print_lines(&mut stdout, &help_lines())?,
            Command::Items(total) => {
                source.set_total_items(total);
                // The old page may be past the new end; refetch re-clamps it.
                state = source.fetch(state.current_page(), state.page_size());
                pager_info!("Listing reconfigured total_items={}", total);
                print_lines(&mut stdout, &ui::render::render(&state.view()))?;
            }
            Command::Pager(msg) => {
                let (unchanged, effects) = update(state, msg);
                state = unchanged;
                if let Some(refreshed) = runner.apply(&source, &state, effects) {
                    state = refreshed;
                }
                print_lines(&mut stdout, &ui::render::render(&state.view()))?;
            }
            Command::Unknown => {
                pager_warn!("Unrecognized command: {}", line.trim());
                writeln!(stdout, "Unrecognized command; try `help`.")?;
            }
        }
    }

    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    /// A discrete pager interaction.
    Pager(Msg),
    /// Reconfigure the demo listing to hold this many items.
    Items(u64),
    Help,
    Quit,
    Unknown,
}

fn parse_command(line: &str) -> Command {
    let mut parts = line.split_whitespace();
    let Some(word) = parts.next() else {
        return Command::Pager(Msg::NoOp);
    };
    let arg = parts.next();

    match (word, arg) {
        ("first", None) => Command::Pager(Msg::FirstClicked),
        ("prev" | "p", None) => Command::Pager(Msg::PrevClicked),
        ("next" | "n", None) => Command::Pager(Msg::NextClicked),
        ("last", None) => Command::Pager(Msg::LastClicked),
        ("goto", Some(raw)) => match parse_one_based_page(raw) {
            Some(page) => Command::Pager(Msg::PageClicked(page)),
            None => Command::Unknown,
        },
        ("size", Some(raw)) => match raw.parse() {
            Ok(size) => Command::Pager(Msg::PageSizeSelected(size)),
            Err(_) => Command::Unknown,
        },
        ("items", Some(raw)) => match raw.parse() {
            Ok(total) => Command::Items(total),
            Err(_) => Command::Unknown,
        },
        ("help", None) => Command::Help,
        ("quit" | "q", None) => Command::Quit,
        _ => Command::Unknown,
    }
}

/// Parse a one-based page argument; zero is not a page.
fn parse_one_based_page(raw: &str) -> Option<u64> {
    raw.parse::<u64>().ok().filter(|page| *page >= 1)
}

fn help_lines() -> Vec<String> {
    vec![
        "first | prev | next | last   move between pages".to_string(),
        "goto <page>                  jump to a page number".to_string(),
        "size <n>                     pick a page size from the options".to_string(),
        "items <n>                    reconfigure the demo listing".to_string(),
        "quit                         exit".to_string(),
    ]
}

fn print_lines(out: &mut impl Write, lines: &[String]) -> io::Result<()> {
    for line in lines {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

fn prefs_dir() -> PathBuf {
    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}
