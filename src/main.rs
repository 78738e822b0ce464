use clap::Parser;
use colored::Colorize;
use filesee::browser::{DirectoryBrowser, LoadStatus, Navigation, Selection};
use filesee::config::{BrowserConfig, DEFAULT_CONFIG_FILE, SystemHome};
use filesee::display::{self, Command};
use filesee::scanner::DirectoryLister;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Directory to start in (defaults to your home directory)
    start_dir: Option<String>,

    /// Do not read the start directory until the first listing
    #[arg(long)]
    lazy: bool,

    /// Print the listing of the start directory and exit
    #[arg(long, short = 'l')]
    list: bool,

    /// KEY=VALUE config file (START_DIR, LOAD_ON_START)
    #[arg(long, short = 'c', value_name = "FILE")]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let config = build_config(&args);
    let mut browser = DirectoryBrowser::from_config(&config, &SystemHome);

    if args.list {
        browser.list_entries();
        println!(
            "{}",
            display::render_listing(browser.current_path(), browser.entries())
        );
        return;
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    match run_interactive(&mut browser, stdin.lock(), stdout.lock()) {
        Ok(Some(selected)) => println!("{selected}"),
        Ok(None) => {}
        Err(e) => {
            eprintln!("Error: terminal I/O failed: {e}");
            std::process::exit(1);
        }
    }
}

/// Config file first, then command-line overrides.
fn build_config(args: &Args) -> BrowserConfig {
    let path = args
        .config
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));

    let mut config = match BrowserConfig::load_from(&path) {
        Some(cfg) => {
            log::debug!("Loaded config from {}", path.display());
            cfg
        }
        None => {
            if args.config.is_some() {
                log::warn!("Could not read config file {}, using defaults", path.display());
            }
            BrowserConfig::default()
        }
    };

    if let Some(dir) = &args.start_dir {
        config.start_path = Some(dir.clone());
    }
    if args.lazy {
        config.load_on_construct = false;
    }
    config
}

/// Runs the prompt loop until the user quits, input ends, or a file is picked.
/// Returns the absolute path of the picked file.
fn run_interactive<L, R, W>(
    browser: &mut DirectoryBrowser<L>,
    mut input: R,
    mut out: W,
) -> io::Result<Option<String>>
where
    L: DirectoryLister,
    R: BufRead,
    W: Write,
{
    let mut show_listing = true;
    let mut line = String::new();

    loop {
        if show_listing {
            browser.list_entries();
            if let LoadStatus::Unreadable(reason) = browser.load_status() {
                writeln!(out, "{} {reason}", "Warning:".yellow())?;
            }
            let listing = display::render_listing(browser.current_path(), browser.entries());
            writeln!(out, "{listing}")?;
        }
        write!(
            out,
            "Select [0-{}], .. for parent, Enter to refresh, q to quit: ",
            browser.entries().len()
        )?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            return Ok(None);
        }

        show_listing = true;
        match display::parse_command(&line) {
            Command::Quit => return Ok(None),
            Command::Refresh => {}
            Command::Up => {
                browser.navigate_up();
            }
            Command::Invalid => {
                writeln!(out, "{} not a number: {}", "Error:".red(), line.trim())?;
                show_listing = false;
            }
            Command::Select(n) => {
                let selection = Selection::from_display_number(n);
                match browser.navigate(selection) {
                    Ok(Navigation::Moved) => {}
                    Ok(Navigation::Stayed) => {
                        if let Selection::Entry(index) = selection
                            && let Ok(entry) = browser.get_entry(index)
                            && !entry.is_directory
                        {
                            return Ok(browser.resolve_selection_path(index).ok());
                        }
                    }
                    Err(e) => {
                        writeln!(out, "{} {e}", "Error:".red())?;
                        show_listing = false;
                    }
                }
            }
        }
    }
}
