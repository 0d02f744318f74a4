// sortty: terminal sorting visualizer with resumable step execution

use std::io;

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use sortty::config::Config;
use sortty::driver::Driver;
use sortty::ui::App;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Vec<String> = std::env::args().collect();
    let program_name = args.get(0).map(|s| s.as_str()).unwrap_or("sortty");

    let config = match Config::from_args(&args[1..]) {
        Ok(config) => config,
        Err(message) => {
            eprintln!("Error: {}", message);
            print_usage(program_name);
            std::process::exit(1);
        }
    };

    // Generation validates the configuration before the terminal is touched
    let driver = match Driver::new(config) {
        Ok(driver) => driver,
        Err(e) => {
            eprintln!("Error: {}", e);
            print_usage(program_name);
            std::process::exit(1);
        }
    };

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(driver);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}

fn print_usage(program_name: &str) {
    eprintln!();
    eprintln!("Usage: {} [count] [lower] [upper] [fps]", program_name);
    eprintln!();
    eprintln!("  count   number of values to sort      (default 60)");
    eprintln!("  lower   smallest generated value      (default 1)");
    eprintln!("  upper   largest generated value       (default 100)");
    eprintln!("  fps     animation frames per second   (default 60)");
    eprintln!();
    eprintln!("Keys: 1-9 pick an algorithm, space runs/pauses, g (or a click)");
    eprintln!("regenerates the data, q quits.");
}
