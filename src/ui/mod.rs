pub mod events;
pub mod footer;
pub mod input;
pub mod layout;
pub mod markup;
pub mod mvi;
pub mod render;
pub mod runtime;
pub mod screen;
pub mod terminal_guard;
pub mod theme;

use std::io;
use std::time::Duration;

use thiserror::Error;

use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::InputAction;
use crate::ui::markup::Node;
use crate::ui::mvi::Update;
use crate::ui::render::TerminalRenderer;
use crate::ui::runtime::{Program, RenderError};
use crate::ui::terminal_guard::setup_terminal;

const POLL_INTERVAL: Duration = Duration::from_millis(250);

#[derive(Debug, Error)]
pub enum HostError {
    #[error("Terminal error: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Runs one program in the terminal until the user quits.
pub async fn run<U, V>(init: U::State, update: U, view: V) -> Result<(), HostError>
where
    U: Update,
    V: Fn(&U::State) -> Node<U::Intent> + Send + 'static,
{
    let (terminal, guard) = setup_terminal()?;
    let renderer = TerminalRenderer::new(terminal);
    let handle = Program::start(init, update, view, renderer.clone())?;
    let dispatcher = handle.dispatcher();
    let mut events = EventHandler::new(POLL_INTERVAL);
    tracing::info!("UI mounted");

    while let Some(event) = events.next().await {
        match event {
            AppEvent::Key(key) => match renderer.handle_key(key) {
                InputAction::None => {}
                InputAction::Redraw => renderer.redraw()?,
                InputAction::Dispatch(intent) => {
                    renderer.redraw()?;
                    if dispatcher.dispatch(intent).is_err() {
                        tracing::error!("Runtime loop stopped unexpectedly");
                        break;
                    }
                }
                InputAction::Quit => break,
            },
            AppEvent::Resize(..) => renderer.redraw()?,
        }
    }

    // Quit does not wait for an in-flight lookup.
    handle.abort();
    drop(guard);
    tracing::info!("UI closed");
    Ok(())
}
