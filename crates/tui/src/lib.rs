//! # sk-tui
//!
//! Terminal front end for suggest-kit.
//!
//! The input line and the suggestion popup are backed by the shared
//! handles from `sk-core::display`; keystrokes go to a `SuggestRuntime`
//! as `InputEvent`s and controller `Signal`s come back to update the
//! status bar.

pub mod app;
pub mod event_handler;
pub mod tui;
pub mod widgets;

pub use app::App;
pub use tui::Tui;

use anyhow::Result;
use sk_core::config::models::AppConfig;
use sk_core::display::{SharedSurface, SharedText};
use sk_core::{SuggestController, SuggestRuntime};
use sk_protocol::ipc::InputEvent;

/// Run the interactive suggestion prompt until the user quits.
pub async fn run_app(config: AppConfig) -> Result<()> {
    let input = SharedText::default();
    let surface = SharedSurface::new();
    let mut controller =
        SuggestController::from_app_config(config, input.clone(), surface.clone())?;
    let signal_rx = controller.subscribe();

    let (input_tx, runtime) = SuggestRuntime::new(controller).spawn();
    let mut app = App::new(input, surface, input_tx.clone(), signal_rx);

    let mut tui = Tui::init()?;
    let result = app.run(&mut tui).await;
    tui.restore()?;

    // The loop may already be gone if it was the reason `run` returned.
    let _ = input_tx.send(InputEvent::Shutdown);
    drop(app);
    let controller = runtime.await?;
    tracing::info!(
        selections = controller.history().len(),
        "Suggestion session ended"
    );

    result
}
