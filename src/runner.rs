// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::{
    io::stdout,
    path::PathBuf,
    sync::{
        mpsc::{self, Receiver, Sender},
        Arc,
    },
    time::Duration,
};

use log::{debug, info};

use clap::Parser;

use crossterm::{
    event::{self, DisableBracketedPaste, EnableBracketedPaste, KeyEventKind},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};

use ratatui::{
    backend::Backend,
    prelude::{CrosstermBackend, Rect, Terminal},
    TerminalOptions, Viewport,
};

use crate::app::{App, FormConfig};
use crate::batch::predict_records;
use crate::errors::DnaFormError;
use crate::predict::{spawn_submission, Delivery, HttpPredictor, Predictor, DEFAULT_ENDPOINT};
use crate::seq::fasta::read_fasta_file;
use crate::ui::{
    key_handling::{handle_key_press, handle_paste},
    render::render_ui,
    UI,
};

const CONFIG_FILENAME: &str = ".dnaformconfig";

#[derive(Debug, Parser)]
#[command(version, about, long_about = None) ]
struct Cli {
    /// FastA file; the first record prefills the form
    fasta_fname: Option<String>,

    /// Prediction endpoint (overrides the config file)
    #[arg(short, long)]
    endpoint: Option<String>,

    /// Predict every record of the FastA file and print the results (no TUI)
    #[arg(short, long, requires = "fasta_fname")]
    print: bool,

    /// Check that the prediction service answers, and exit (no TUI)
    #[arg(long)]
    check: bool,

    /// Show key bindings and exit successfully
    #[arg(short = 'b', long = "show-bindings")]
    show_bindings: bool,

    /// Fixed terminal width (mostly used for testing/debugging)
    #[arg(short, long, requires = "height")]
    width: Option<u16>,

    /// Fixed terminal height ("tall" -- -h is already used)
    #[arg(short = 't', long, requires = "width")]
    height: Option<u16>,

    /// Disable color
    #[arg(short = 'C', long = "no-color")]
    no_color: bool,

    /// Poll wait time [ms]
    #[clap(long = "poll-wait-time", default_value_t = 50)]
    poll_wait_time: u64,

    /// Panic (for testing)
    #[clap(long = "panic")]
    panic: bool,
}

fn find_config() -> Option<PathBuf> {
    if let Ok(home) = std::env::var("HOME") {
        let path = PathBuf::from(home).join(CONFIG_FILENAME);
        if path.exists() {
            return Some(path);
        }
    }
    if let Ok(cwd) = std::env::current_dir() {
        let path = cwd.join(CONFIG_FILENAME);
        if path.exists() {
            return Some(path);
        }
    }
    None
}

pub fn run() -> Result<(), DnaFormError> {
    env_logger::init();
    info!("Starting log");

    let cli = Cli::parse();
    if cli.panic {
        panic!("User-requested panic");
    }

    if cli.show_bindings {
        println!("{}", crate::ui::USER_GUIDE);
        return Ok(());
    }

    // A broken config file should not prevent the form from working: report it in the form.
    let mut config_err: Option<String> = None;
    let mut config = FormConfig::default();
    if let Some(path) = find_config() {
        match FormConfig::from_file(&path) {
            Ok(cfg) => config = cfg,
            Err(e) => config_err = Some(format!("Error reading {}: {}", path.display(), e)),
        }
    }

    let endpoint = cli
        .endpoint
        .clone()
        .or(config.endpoint.clone())
        .unwrap_or_else(|| String::from(DEFAULT_ENDPOINT));
    info!("Using endpoint {}", endpoint);
    let predictor = HttpPredictor::new(endpoint.clone())?;

    if cli.check {
        let banner = predictor.check_service()?;
        println!("{}: {}", predictor.endpoint(), banner);
        return Ok(());
    }

    let records = match &cli.fasta_fname {
        Some(fname) => read_fasta_file(fname)?,
        None => Vec::new(),
    };

    if cli.print {
        if let Some(msg) = config_err {
            eprintln!("{}", msg);
        }
        for line in predict_records(&predictor, &records) {
            println!("{}", line);
        }
        return Ok(());
    }

    let mut app = App::new(endpoint);
    app.colors = config.colors;
    if let Some(first) = records.first() {
        app.prefill(&first.sequence, Some(first.header.clone()));
    }
    if let Some(msg) = config_err {
        app.set_error(msg);
    }

    stdout().execute(EnterAlternateScreen)?;
    stdout().execute(EnableBracketedPaste)?;
    enable_raw_mode()?;

    let backend = CrosstermBackend::new(stdout());
    // Fix viewport dimensions IFF supplied (mainly for tests)
    let viewport = match (cli.width, cli.height) {
        (Some(width), Some(height)) => Viewport::Fixed(Rect::new(0, 0, width, height)),
        _ => Viewport::Fullscreen,
    };
    let mut terminal = Terminal::with_options(backend, TerminalOptions { viewport })?;
    terminal.clear()?;

    let mut app_ui = UI::new(&mut app);
    if cli.no_color {
        app_ui.set_monochrome();
    }

    let predictor: Arc<dyn Predictor> = Arc::new(predictor);
    let loop_result = main_loop(
        &mut terminal,
        &mut app_ui,
        predictor,
        Duration::from_millis(cli.poll_wait_time),
    );

    disable_raw_mode()?;
    stdout().execute(DisableBracketedPaste)?;
    stdout().execute(LeaveAlternateScreen)?;

    loop_result
}

fn main_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app_ui: &mut UI,
    predictor: Arc<dyn Predictor>,
    poll_wait: Duration,
) -> Result<(), DnaFormError> {
    let (tx, rx): (Sender<Delivery>, Receiver<Delivery>) = mpsc::channel();
    terminal.draw(|f| render_ui(f, app_ui))?;

    loop {
        // Wait for an event (or timeout)
        if event::poll(poll_wait)? {
            match event::read()? {
                event::Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if handle_key_press(app_ui, key) {
                        break;
                    }
                }
                event::Event::Paste(text) => handle_paste(app_ui, &text),
                event::Event::Resize(_, _) => app_ui.mark_dirty(),
                _ => {}
            }
        }

        dispatch_and_collect(app_ui, &predictor, &tx, &rx);

        if app_ui.take_dirty() {
            terminal.draw(|f| render_ui(f, app_ui))?;
        }
    }

    Ok(())
}

/// Hands a queued submission (if any) to a worker, and applies whatever outcomes have arrived
/// since the last call. Never blocks.
pub fn dispatch_and_collect(
    app_ui: &mut UI,
    predictor: &Arc<dyn Predictor>,
    tx: &Sender<Delivery>,
    rx: &Receiver<Delivery>,
) {
    if let Some(submission) = app_ui.take_submission() {
        debug!("Dispatching request #{}", submission.generation);
        spawn_submission(Arc::clone(predictor), submission, tx.clone());
    }
    while let Ok(delivery) = rx.try_recv() {
        app_ui.apply(delivery);
    }
}
