//! Debounced signal: publishes a raw value only after it has been quiet for a delay.

use std::time::Duration;

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::{self, Instant};
use tracing::{debug, instrument};

/// Collapses bursts of raw values into a stable value.
///
/// Each [`push`](Debouncer::push) restarts the quiet timer. When the timer runs
/// out the latest raw value becomes the stable value. Dropping the debouncer
/// cancels any pending timer; nothing is published afterwards.
pub struct Debouncer<T> {
    input: mpsc::UnboundedSender<T>,
    output: watch::Receiver<T>,
    handle: JoinHandle<()>,
}

impl<T> Debouncer<T>
where
    T: Clone + PartialEq + Send + Sync + std::fmt::Debug + 'static,
{
    /// Starts the timer task. Must be called inside a tokio runtime.
    pub fn new(initial: T, delay: Duration) -> Self {
        let (input, receiver) = mpsc::unbounded_channel();
        let (sender, output) = watch::channel(initial);
        let handle = tokio::spawn(run(receiver, sender, delay));
        Self {
            input,
            output,
            handle,
        }
    }

    /// Feeds a new raw value, cancelling the pending timer.
    pub fn push(&self, value: T) {
        // Only fails once the task is gone, which means we are tearing down.
        let _ = self.input.send(value);
    }

    /// The latest stable value.
    pub fn current(&self) -> T {
        self.output.borrow().clone()
    }

    /// Receiver notified every time a new stable value is published.
    pub fn subscribe(&self) -> watch::Receiver<T> {
        self.output.clone()
    }
}

impl<T> Drop for Debouncer<T> {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[instrument(name = "debouncer", skip_all, fields(delay_ms = delay.as_millis() as u64))]
async fn run<T>(mut input: mpsc::UnboundedReceiver<T>, output: watch::Sender<T>, delay: Duration)
where
    T: PartialEq + std::fmt::Debug,
{
    let timer = time::sleep(delay);
    tokio::pin!(timer);
    let mut pending: Option<T> = None;

    loop {
        tokio::select! {
            received = input.recv() => match received {
                Some(value) => {
                    timer.as_mut().reset(Instant::now() + delay);
                    pending = Some(value);
                }
                None => {
                    debug!("Input closed, dropping pending value");
                    break;
                }
            },
            () = &mut timer, if pending.is_some() => {
                if let Some(value) = pending.take() {
                    debug!(value = ?value, "Publishing stable value");
                    output.send_if_modified(|current| {
                        if *current == value {
                            false
                        } else {
                            *current = value;
                            true
                        }
                    });
                }
            }
        }
    }
}
