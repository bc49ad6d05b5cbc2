//! Some code around handling events.

use anyhow::{Context, Result};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::{
    app::Presenter,
    canvas::DisplaySurface,
    collection::{error::CollectionError, Sample},
};

/// Events sent to the main thread.
#[derive(Debug)]
pub enum NetgraphEvent {
    Resize,
    KeyInput(KeyEvent),
    Update(Sample),
    CollectionFailed(CollectionError),
    Terminate,
}

/// Handle a [`KeyEvent`]. Returns `true` if the app should quit.
pub fn handle_key_event_or_break(event: KeyEvent) -> bool {
    if event.kind != KeyEventKind::Press {
        return false;
    }

    if event.modifiers.is_empty() {
        matches!(event.code, KeyCode::Char('q') | KeyCode::Esc)
    } else if event.modifiers == KeyModifiers::CONTROL {
        // Raw mode swallows the signal, so ctrl-c arrives as a key.
        matches!(event.code, KeyCode::Char('c'))
    } else if event.modifiers == KeyModifiers::SHIFT {
        matches!(event.code, KeyCode::Char('Q'))
    } else {
        false
    }
}

/// Handles a single event on the UI thread. Returns `true` if the app should quit.
pub fn handle_event<D: DisplaySurface>(
    event: NetgraphEvent, presenter: &mut Presenter<D>,
) -> Result<bool> {
    match event {
        NetgraphEvent::Resize => {
            presenter.refresh()?;
        }
        NetgraphEvent::KeyInput(event) => {
            if handle_key_event_or_break(event) {
                return Ok(true);
            }
        }
        NetgraphEvent::Update(sample) => {
            presenter.present(sample)?;
        }
        NetgraphEvent::CollectionFailed(err) => {
            log::error!("Network collection failed: {err}");
            return Err(err).context("Unable to read the network counters.");
        }
        NetgraphEvent::Terminate => {
            return Ok(true);
        }
    }

    Ok(false)
}
