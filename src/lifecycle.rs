//! Owning and stopping the background collection thread.

use std::{
    sync::{mpsc::Sender, Arc},
    thread::{self, JoinHandle},
};

use anyhow::{anyhow, Result};

use crate::{
    collection::{network::CounterSource, Sampler},
    event::NetgraphEvent,
    utils::cancellation_token::CancellationToken,
};

/// Where the collection thread is in its life.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LifecycleState {
    /// The thread is sampling.
    Running,
    /// A stop was requested but the thread may not have exited yet.
    Stopping,
    /// The thread has been joined. Nothing more will be sent.
    Stopped,
}

/// A handle to the background collection thread.
///
/// Dropping this without calling [`SamplingThread::shutdown`] still stops and
/// joins the thread.
pub struct SamplingThread {
    token: Arc<CancellationToken>,
    handle: Option<JoinHandle<()>>,
    state: LifecycleState,
}

impl SamplingThread {
    /// Spawns a thread that samples once per interval and sends each sample
    /// through `sender`.
    pub fn spawn<S>(sampler: Sampler<S>, sender: Sender<NetgraphEvent>) -> Self
    where
        S: CounterSource + Send + 'static,
    {
        let token = Arc::new(CancellationToken::default());
        let handle = create_collection_thread(sampler, sender, token.clone());

        Self {
            token,
            handle: Some(handle),
            state: LifecycleState::Running,
        }
    }

    pub fn state(&self) -> LifecycleState {
        self.state
    }

    /// Asks the thread to stop without waiting for it.
    pub fn request_stop(&mut self) {
        if self.state == LifecycleState::Running {
            log::debug!("Requesting the collection thread to stop.");
            self.state = LifecycleState::Stopping;
            self.token.cancel();
        }
    }

    /// Stops the thread and waits for it to exit.
    ///
    /// Once this returns the thread will not send anything else.
    pub fn shutdown(&mut self) -> Result<()> {
        self.request_stop();

        let joined = match self.handle.take() {
            Some(handle) => handle
                .join()
                .map_err(|_| anyhow!("the collection thread panicked")),
            None => Ok(()),
        };

        self.state = LifecycleState::Stopped;
        log::debug!("Collection thread stopped.");

        joined
    }
}

impl Drop for SamplingThread {
    fn drop(&mut self) {
        if self.state != LifecycleState::Stopped {
            let _ = self.shutdown();
        }
    }
}

/// The collection loop. Runs until cancelled or until a send or read fails.
fn create_collection_thread<S>(
    mut sampler: Sampler<S>, sender: Sender<NetgraphEvent>, token: Arc<CancellationToken>,
) -> JoinHandle<()>
where
    S: CounterSource + Send + 'static,
{
    let interval = sampler.interval();

    thread::spawn(move || {
        log::debug!("Collection thread started with an interval of {interval:?}.");

        loop {
            if token.sleep_with_cancellation(interval) {
                break;
            }

            let event = match sampler.sample() {
                Ok(sample) => NetgraphEvent::Update(sample),
                Err(err) => {
                    log::error!("Failed to sample network counters: {err}");
                    let _ = sender.send(NetgraphEvent::CollectionFailed(err));
                    break;
                }
            };

            if sender.send(event).is_err() {
                break;
            }
        }
    })
}
