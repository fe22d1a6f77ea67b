use std::fs::File;
use std::io::{self, BufReader};

use clap::Parser;
use color_eyre::Result;
use ratatui::crossterm::event::{
    DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture,
};
use ratatui::crossterm::execute;

use quicksearch::catalog::CatalogHost;
use quicksearch::cli::Args;
use quicksearch::config::{self, ConfigResult};
use quicksearch::logging;
use quicksearch::script::{self, ScriptOptions};
use quicksearch::search_input::ValueSource;
use quicksearch::tui::{self, App};

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;
    logging::init();

    let args = Args::parse();
    let ConfigResult { config, warning } = match &args.config {
        Some(path) => config::load_config_from(path),
        None => config::load_config(),
    };
    let options = args.input_options(&config);
    let catalog = args.load_catalog(&config)?;
    log::debug!("starting with {:?} and {} suggestions", options, catalog.len());

    if let Some(path) = &args.script {
        if let Some(warning) = &warning {
            eprintln!("{}", warning);
        }
        let options = ScriptOptions {
            input: options,
            catalog: Some(catalog),
        };
        let stdout = io::stdout().lock();
        if args.script_from_stdin() {
            script::run_script(io::stdin().lock(), stdout, options)?;
        } else {
            script::run_script(BufReader::new(File::open(path)?), stdout, options)?;
        }
        return Ok(());
    }

    let host = match &options.value {
        ValueSource::Controlled(value) => CatalogHost::controlled(catalog, value.clone()),
        ValueSource::Uncontrolled { .. } => CatalogHost::new(catalog),
    };
    let mut app = App::new(options, host);
    if let Some(warning) = warning {
        app.notification_mut().show_warning(warning);
    }

    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let mut terminal = ratatui::init();
    execute!(io::stdout(), EnableMouseCapture, EnableFocusChange)?;

    let result = tui::run(&mut terminal, &mut app);

    // Restore terminal (automatic cleanup)
    let _ = execute!(io::stdout(), DisableFocusChange, DisableMouseCapture);
    ratatui::restore();

    result
}
