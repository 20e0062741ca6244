// scopecheck: front end and scope inspector for a small C subset

mod analyzer;
mod parser;
mod ui;

use std::fs;
use std::io;
use std::path::Path;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use ui::{App, Session};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Vec<String> = std::env::args().collect();
    let program_name = args.first().map(|s| s.as_str()).unwrap_or("scopecheck");

    if args.len() < 2 {
        eprintln!("Error: No input file provided");
        eprintln!();
        eprintln!("Usage: {} <file.c>", program_name);
        std::process::exit(1);
    }

    let source_file = &args[1];

    if !Path::new(source_file).exists() {
        eprintln!("Error: File '{}' not found", source_file);
        eprintln!("Usage: {} <file.c>", program_name);
        std::process::exit(1);
    }

    // Read source code
    let source = fs::read_to_string(source_file)?;

    eprintln!("Parsing {}...", source_file);
    let session = match Session::analyze(source) {
        Ok(session) => session,
        Err(e) => {
            eprintln!("Parse error: {}", e);
            std::process::exit(1);
        }
    };

    eprintln!(
        "Parsed successfully. Found {} top-level declarations.",
        session.declaration_count()
    );

    match &session.error {
        None => {
            eprintln!("Semantic analysis successful.");
            eprintln!(
                "Global scope: {} symbols, {} function scopes.",
                session.analyzer.globals().len(),
                session.analyzer.closed_scopes().len()
            );
        }
        Some(e) => {
            eprintln!("Semantic error: {}", e);
            eprintln!("Entering inspector with partial scopes...");
        }
    }

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(session);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
