//! Async driver around a [`SuggestController`].
//!
//! The runtime owns the controller and is the only place its methods are
//! called from, so controller logic never runs concurrently. Spawned tasks
//! only await remote resolutions and send the finished batch back over a
//! channel that the event loop drains alongside host input.
//!
//! A text change still waiting out the debounce period is applied before
//! any key or hover event, so keys always act on the latest typed text.

use crate::controller::SuggestController;
use crate::source::resolver::ResolvedBatch;
use sk_protocol::ipc::InputEvent;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{sleep_until, Instant};

pub struct SuggestRuntime {
    controller: SuggestController,
    debounce: Duration,
    batch_tx: mpsc::UnboundedSender<ResolvedBatch>,
    batch_rx: mpsc::UnboundedReceiver<ResolvedBatch>,
    /// Latest text change waiting out the debounce period.
    pending_text: Option<(String, Instant)>,
}

impl SuggestRuntime {
    pub fn new(controller: SuggestController) -> Self {
        let (batch_tx, batch_rx) = mpsc::unbounded_channel();
        Self {
            debounce: Duration::from_millis(controller.config().debounce_ms),
            controller,
            batch_tx,
            batch_rx,
            pending_text: None,
        }
    }

    pub fn controller(&self) -> &SuggestController {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut SuggestController {
        &mut self.controller
    }

    /// Run the event loop on a new task.
    ///
    /// Dropping the returned sender (or sending `Shutdown`) stops the loop;
    /// the join handle yields the disposed controller.
    pub fn spawn(self) -> (mpsc::UnboundedSender<InputEvent>, JoinHandle<SuggestController>) {
        let (input_tx, input_rx) = mpsc::unbounded_channel();
        let handle = tokio::spawn(self.run(input_rx));
        (input_tx, handle)
    }

    /// Process host input until the channel closes or `Shutdown` arrives,
    /// then dispose the controller and hand it back.
    pub async fn run(mut self, mut inputs: mpsc::UnboundedReceiver<InputEvent>) -> SuggestController {
        loop {
            let deadline = self.pending_text.as_ref().map(|(_, at)| *at);
            let debounce = async move {
                match deadline {
                    Some(at) => sleep_until(at).await,
                    None => std::future::pending::<()>().await,
                }
            };

            tokio::select! {
                event = inputs.recv() => match event {
                    None | Some(InputEvent::Shutdown) => break,
                    Some(event) => self.handle(event),
                },
                Some(batch) = self.batch_rx.recv() => {
                    self.controller.on_results_ready(batch);
                }
                _ = debounce => self.flush_text(),
            }
        }

        self.controller.dispose();
        self.controller
    }

    fn handle(&mut self, event: InputEvent) {
        match event {
            InputEvent::TextChanged { value } => {
                if self.debounce.is_zero() {
                    self.resolve_text(&value);
                } else {
                    self.pending_text = Some((value, Instant::now() + self.debounce));
                }
            }
            InputEvent::Key { key } => {
                self.flush_text();
                self.controller.on_key(key);
            }
            InputEvent::Hover { index } => {
                self.flush_text();
                self.controller.highlight(index);
            }
            InputEvent::Shutdown => {}
        }
    }

    fn flush_text(&mut self) {
        if let Some((text, _)) = self.pending_text.take() {
            self.resolve_text(&text);
        }
    }

    fn resolve_text(&mut self, text: &str) {
        if let Some(pending) = self.controller.on_text_changed(text) {
            let tx = self.batch_tx.clone();
            tokio::spawn(async move {
                let batch = pending.wait().await;
                // The loop has already stopped if this fails.
                let _ = tx.send(batch);
            });
        }
    }
}

/// Feed `text` to `controller` and wait for the resolution to be applied.
///
/// Returns `true` when a result list was displayed. Meant for one-shot
/// hosts that have no event loop.
pub async fn resolve_now(controller: &mut SuggestController, text: &str) -> bool {
    let before = controller.generation();
    match controller.on_text_changed(text) {
        Some(pending) => {
            let batch = pending.wait().await;
            controller.on_results_ready(batch)
        }
        None => controller.generation() != before && controller.is_shown(),
    }
}
