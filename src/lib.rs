//! A small monitor that samples the host's outbound network throughput once a
//! second and draws the last minute of it as a line chart in the terminal.
//!
//! The pieces, roughly in the order data flows through them:
//!
//! - [`collection`] reads the cumulative bytes-sent counter and turns
//!   consecutive readings into [`collection::Sample`]s.
//! - [`lifecycle`] runs that sampling on a background thread and owns
//!   stopping it.
//! - [`event`] carries samples and terminal input to the UI thread.
//! - [`app`] keeps the sliding window of samples and hands it to a
//!   [`canvas::DisplaySurface`] to draw.

pub mod app;
pub mod canvas;
pub mod collection;
pub mod constants;
pub mod event;
pub mod lifecycle;
pub mod options;
pub mod utils {
    pub mod cancellation_token;
    pub mod data_units;
    pub mod error;
    pub mod logging;
}

use std::{
    io::{stdout, Stdout},
    panic::{self, PanicHookInfo},
    sync::{
        mpsc::{self, Receiver, Sender},
        Arc,
    },
    thread::{self, JoinHandle},
};

use anyhow::{Context, Result};
use crossterm::{
    event::{poll, read, Event, KeyEventKind},
    execute,
    style::Print,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use tui::{backend::CrosstermBackend, Terminal};

use crate::{
    app::Presenter,
    canvas::{DisplaySurface, Painter},
    collection::{network::SysinfoCounter, Sampler},
    constants::{DEFAULT_SAMPLE_INTERVAL, INPUT_POLL_RATE},
    event::{handle_event, NetgraphEvent},
    lifecycle::SamplingThread,
    utils::{cancellation_token::CancellationToken, error},
};

/// Sets up the terminal for drawing.
pub fn init_terminal() -> error::Result<Terminal<CrosstermBackend<Stdout>>> {
    let mut stdout_val = stdout();
    execute!(stdout_val, EnterAlternateScreen)?;
    enable_raw_mode()?;

    let mut terminal = Terminal::new(CrosstermBackend::new(stdout_val))?;
    terminal.clear()?;
    terminal.hide_cursor()?;

    Ok(terminal)
}

/// Puts the terminal back the way we found it.
pub fn cleanup_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> error::Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}

/// Based on https://github.com/Rigellute/spotify-tui/blob/master/src/main.rs
pub fn panic_hook(panic_info: &PanicHookInfo<'_>) {
    let mut stdout = stdout();

    let msg = match panic_info.payload().downcast_ref::<&'static str>() {
        Some(s) => *s,
        None => match panic_info.payload().downcast_ref::<String>() {
            Some(s) => &s[..],
            None => "Box<Any>",
        },
    };

    let stacktrace = format!("{:?}", backtrace::Backtrace::new());
    let location = panic_info
        .location()
        .map(|location| location.to_string())
        .unwrap_or_default();

    let _ = disable_raw_mode();
    let _ = execute!(stdout, LeaveAlternateScreen);

    // Print stack trace. Must be done after!
    let _ = execute!(
        stdout,
        Print(format!(
            "thread '<unnamed>' panicked at '{msg}', {location}\n\r{stacktrace}",
        )),
    );
}

/// Forwards terminal input to the UI thread until `cancellation_token` is cancelled.
pub fn create_input_thread(
    sender: Sender<NetgraphEvent>, cancellation_token: Arc<CancellationToken>,
) -> JoinHandle<()> {
    thread::spawn(move || {
        while !cancellation_token.is_cancelled() {
            match poll(INPUT_POLL_RATE) {
                Ok(true) => {}
                Ok(false) => continue,
                Err(err) => {
                    log::warn!("Stopped polling for terminal events: {err}");
                    break;
                }
            }

            let event = match read() {
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                    NetgraphEvent::KeyInput(key)
                }
                Ok(Event::Resize(_, _)) => NetgraphEvent::Resize,
                Ok(_) => continue,
                Err(err) => {
                    log::warn!("Failed to read a terminal event: {err}");
                    continue;
                }
            };

            if sender.send(event).is_err() {
                break;
            }
        }
    })
}

/// Sends [`NetgraphEvent::Terminate`] on ctrl-c or SIGTERM. Call this before
/// [`init_terminal`], since its error path does not restore the terminal.
pub fn set_termination_handler(sender: Sender<NetgraphEvent>) -> Result<()> {
    ctrlc::set_handler(move || {
        let _ = sender.send(NetgraphEvent::Terminate);
    })
    .context("Unable to set the termination handler.")
}

/// Runs the UI side: handles events until something asks to quit or every
/// sender goes away.
pub fn run_event_loop<D: DisplaySurface>(
    receiver: &Receiver<NetgraphEvent>, presenter: &mut Presenter<D>,
) -> Result<()> {
    while let Ok(event) = receiver.recv() {
        if handle_event(event, presenter)? {
            log::info!("Quit requested.");
            break;
        }
    }

    Ok(())
}

/// The main entry point for netgraph.
pub fn start_netgraph() -> Result<()> {
    let args = options::get_args();

    #[cfg(feature = "logging")]
    {
        if let Err(err) =
            utils::logging::init_logger(log::LevelFilter::Debug, std::ffi::OsStr::new("debug.log"))
        {
            println!("Issue initializing logger: {err}");
        }
    }

    let config = options::get_or_create_config(
        args.general_args.config_location.as_deref().map(std::path::Path::new),
        args.general_args.no_write,
    )
    .context("Unable to properly parse or create the config file.")?;

    let (app_config_fields, styles) = options::init_app(&args, &config)
        .context("Found an issue while trying to build the app settings.")?;

    // Seed before touching the terminal so a failure here prints normally.
    let sampler = Sampler::new(SysinfoCounter::new()?, DEFAULT_SAMPLE_INTERVAL)
        .context("Unable to read the initial network counters.")?;

    let (sender, receiver) = mpsc::channel();
    set_termination_handler(sender.clone())?;

    let terminal = init_terminal().context("Unable to set up the terminal.")?;
    panic::set_hook(Box::new(panic_hook));

    let input_cancellation_token = Arc::new(CancellationToken::default());
    let input_thread = create_input_thread(sender.clone(), input_cancellation_token.clone());
    let mut sampling = SamplingThread::spawn(sampler, sender);

    let mut presenter = Presenter::new(Painter::new(terminal, app_config_fields, styles));
    let loop_result = presenter
        .refresh()
        .and_then(|()| run_event_loop(&receiver, &mut presenter));

    // Stop sampling first so nothing else gets drawn, then restore the terminal.
    let shutdown_result = sampling.shutdown();
    input_cancellation_token.cancel();
    let _ = input_thread.join();
    cleanup_terminal(presenter.surface_mut().terminal_mut())?;

    loop_result?;
    shutdown_result
}
