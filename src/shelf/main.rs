use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use shelf::api::ShelfApi;
use shelf::commands::{CmdMessage, CmdResult, MessageLevel};
use shelf::config::ShelfConfig;
use shelf::error::{Result, ShelfError};
use shelf::model::{Book, BookStatus};
use shelf::store::fs::JsonFileStore;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use unicode_width::UnicodeWidthStr;

mod args;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: ShelfApi<JsonFileStore>,
    config_dir: PathBuf,
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if let Some(Commands::Config { key, value }) = &cli.command {
        return handle_config(key.clone(), value.clone());
    }

    let mut ctx = init_context(&cli)?;

    if let Some(message) = ctx.api.load_report() {
        print_messages(&[message]);
    }

    match cli.command {
        Some(Commands::Add {
            title,
            author,
            year,
        }) => handle_add(&mut ctx, title, author, year),
        Some(Commands::Delete { id }) => handle_delete(&mut ctx, &id),
        Some(Commands::Search { term }) => handle_search(&ctx, &term),
        Some(Commands::List) => handle_list(&ctx),
        Some(Commands::Status { id, status }) => handle_status(&mut ctx, &id, &status),
        Some(Commands::Config { .. }) => unreachable!("handled above"),
        None => run_menu(&mut ctx),
    }
}

fn config_dir() -> Result<PathBuf> {
    let proj_dirs = ProjectDirs::from("com", "shelf", "shelf")
        .ok_or_else(|| ShelfError::Store("Could not determine config dir".to_string()))?;
    Ok(proj_dirs.config_dir().to_path_buf())
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let config_dir = config_dir()?;
    let config = ShelfConfig::load(&config_dir).unwrap_or_default();

    let data_path = if let Some(path) = &cli.data_file {
        path.clone()
    } else if cli.global {
        let proj_dirs = ProjectDirs::from("com", "shelf", "shelf")
            .ok_or_else(|| ShelfError::Store("Could not determine data dir".to_string()))?;
        proj_dirs.data_dir().join(&config.data_file)
    } else {
        PathBuf::from(&config.data_file)
    };

    let api = ShelfApi::open(JsonFileStore::new(data_path));
    Ok(AppContext { api, config_dir })
}

fn handle_add(ctx: &mut AppContext, title: String, author: String, year: String) -> Result<()> {
    let result = ctx.api.add_book(title, author, year)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, id: &str) -> Result<()> {
    let id = parse_id(id)?;
    let result = ctx.api.delete_book(id)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_search(ctx: &AppContext, term: &str) -> Result<()> {
    let result = ctx.api.search_books(term)?;
    print_books(&result.books);
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list_books()?;
    print_books(&result.books);
    print_messages(&result.messages);
    Ok(())
}

fn handle_status(ctx: &mut AppContext, id: &str, status: &str) -> Result<()> {
    let id = parse_id(id)?;
    let result = ctx.api.update_status(id, status)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(key: Option<String>, value: Option<String>) -> Result<()> {
    let dir = config_dir()?;
    let mut config = ShelfConfig::load(&dir).unwrap_or_default();

    match (key.as_deref(), value) {
        (None, _) | (Some("data-file"), None) => {
            println!("data-file = {}", config.data_file);
        }
        (Some("data-file"), Some(v)) => {
            config.data_file = v;
            config.save(&dir)?;
            println!("data-file = {}", config.data_file);
        }
        (Some(other), _) => {
            println!("Unknown config key: {}", other);
        }
    }
    Ok(())
}

// Malformed ids are caught here so the store is never invoked with them.
fn parse_id(s: &str) -> Result<u64> {
    s.trim()
        .parse()
        .map_err(|_| ShelfError::Api(format!("Id must be a number, got '{}'", s)))
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

fn print_books(books: &[Book]) {
    if books.is_empty() {
        return;
    }

    let id_width = books
        .iter()
        .map(|b| b.id.to_string().len())
        .max()
        .unwrap_or(2)
        .max("ID".len());
    let title_width = books
        .iter()
        .map(|b| b.title.width())
        .max()
        .unwrap_or(0)
        .max("TITLE".len());
    let author_width = books
        .iter()
        .map(|b| b.author.width())
        .max()
        .unwrap_or(0)
        .max("AUTHOR".len());
    let year_width = books
        .iter()
        .map(|b| b.year.width())
        .max()
        .unwrap_or(0)
        .max("YEAR".len());

    println!(
        "{}",
        format!(
            "{:<id_width$}  {:<title_width$}  {:<author_width$}  {:<year_width$}  STATUS",
            "ID", "TITLE", "AUTHOR", "YEAR"
        )
        .dimmed()
    );

    for book in books {
        let status = match book.status {
            BookStatus::InStock => book.status.to_string().green(),
            BookStatus::CheckedOut => book.status.to_string().yellow(),
        };
        // unicode-aware padding; format!'s {:<width$} counts chars, not
        // display columns
        println!(
            "{}{}  {}{}  {}{}  {}{}  {}",
            book.id,
            " ".repeat(id_width - book.id.to_string().len()),
            book.title,
            " ".repeat(title_width - book.title.width()),
            book.author,
            " ".repeat(author_width - book.author.width()),
            book.year,
            " ".repeat(year_width - book.year.width()),
            status
        );
    }
}

const MENU: &str = "\nMenu:\n  1. Add a book\n  2. Delete a book\n  3. Search books\n  4. List all books\n  5. Update book status\n  6. Exit";

fn run_menu(ctx: &mut AppContext) -> Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        println!("{}", MENU);
        let Some(choice) = prompt(&mut lines, "Choose an action: ")? else {
            break;
        };

        match choice.trim() {
            "1" => menu_add(ctx, &mut lines)?,
            "2" => menu_delete(ctx, &mut lines)?,
            "3" => menu_search(ctx, &mut lines)?,
            "4" => handle_list(ctx)?,
            "5" => menu_status(ctx, &mut lines)?,
            "6" => {
                println!("Bye.");
                break;
            }
            "" => continue,
            other => println!("{}", format!("Unknown choice '{}', try again.", other).red()),
        }
    }
    Ok(())
}

type StdinLines<'a> = io::Lines<io::StdinLock<'a>>;

/// Prompt for one line of input; `None` means stdin was closed.
fn prompt(lines: &mut StdinLines, label: &str) -> Result<Option<String>> {
    print!("{}", label);
    io::stdout().flush().map_err(ShelfError::Io)?;
    match lines.next() {
        Some(line) => Ok(Some(line.map_err(ShelfError::Io)?)),
        None => Ok(None),
    }
}

fn menu_add(ctx: &mut AppContext, lines: &mut StdinLines) -> Result<()> {
    let Some(title) = prompt(lines, "Title: ")? else {
        return Ok(());
    };
    let Some(author) = prompt(lines, "Author: ")? else {
        return Ok(());
    };
    let Some(year) = prompt(lines, "Year: ")? else {
        return Ok(());
    };
    report(ctx.api.add_book(title, author, year));
    Ok(())
}

fn menu_delete(ctx: &mut AppContext, lines: &mut StdinLines) -> Result<()> {
    let Some(id) = prompt(lines, "Id of the book to delete: ")? else {
        return Ok(());
    };
    match parse_id(&id) {
        Ok(id) => report(ctx.api.delete_book(id)),
        Err(e) => println!("{}", e.to_string().red()),
    }
    Ok(())
}

fn menu_search(ctx: &mut AppContext, lines: &mut StdinLines) -> Result<()> {
    let Some(term) = prompt(lines, "Title, author, or year to search for: ")? else {
        return Ok(());
    };
    match ctx.api.search_books(&term) {
        Ok(result) => {
            print_books(&result.books);
            print_messages(&result.messages);
        }
        Err(e) => println!("{}", e.to_string().red()),
    }
    Ok(())
}

fn menu_status(ctx: &mut AppContext, lines: &mut StdinLines) -> Result<()> {
    let Some(id) = prompt(lines, "Id of the book to update: ")? else {
        return Ok(());
    };
    let id = match parse_id(&id) {
        Ok(id) => id,
        Err(e) => {
            println!("{}", e.to_string().red());
            return Ok(());
        }
    };
    let Some(status) = prompt(lines, "New status (in stock/checked out): ")? else {
        return Ok(());
    };
    report(ctx.api.update_status(id, status.trim()));
    Ok(())
}

/// The menu never aborts on a failed operation: persistence errors are
/// shown and the loop goes on with the in-memory state.
fn report(outcome: Result<CmdResult>) {
    match outcome {
        Ok(result) => print_messages(&result.messages),
        Err(e) => println!("{}", e.to_string().red()),
    }
}
