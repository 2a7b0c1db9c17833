//! The dispatch loop: owns the current model and view of one program.
//!
//! Messages are queued on a single-consumer channel and handled one at a
//! time, so commits happen in submission order even when an update has to
//! wait on the network.

use thiserror::Error;
use tokio::sync::{mpsc, oneshot, watch};
use tokio::task::JoinHandle;
use tracing::Instrument;

use crate::ui::markup::Node;
use crate::ui::mvi::Update;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Failed to draw frame: {0}")]
    Draw(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DispatchError {
    #[error("Runtime loop has stopped")]
    Closed,
}

#[derive(Debug, Error)]
pub enum ProgramError {
    #[error("Runtime loop panicked or was aborted: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Reconciles the displayed UI with a new view tree.
pub trait Renderer<Msg>: Send + 'static {
    /// Attach the first tree. Called once, before any dispatch.
    fn mount(&mut self, tree: &Node<Msg>) -> Result<(), RenderError>;

    /// Bring the display from `prev` to `next`.
    fn patch(&mut self, prev: &Node<Msg>, next: &Node<Msg>) -> Result<(), RenderError>;
}

struct Envelope<S, M> {
    intent: M,
    ack: Option<oneshot::Sender<S>>,
}

/// Cloneable handle for submitting intents to a running [`Program`].
pub struct Dispatcher<S, M> {
    tx: mpsc::UnboundedSender<Envelope<S, M>>,
}

impl<S, M> Clone for Dispatcher<S, M> {
    fn clone(&self) -> Self {
        Self {
            tx: self.tx.clone(),
        }
    }
}

impl<S, M> Dispatcher<S, M> {
    /// Queue an intent. Returns once queued, not once handled.
    pub fn dispatch(&self, intent: M) -> Result<(), DispatchError> {
        self.tx
            .send(Envelope { intent, ack: None })
            .map_err(|_| DispatchError::Closed)
    }

    /// Queue an intent and wait for the model committed for it.
    pub async fn dispatch_settled(&self, intent: M) -> Result<S, DispatchError> {
        let (ack, committed) = oneshot::channel();
        self.tx
            .send(Envelope {
                intent,
                ack: Some(ack),
            })
            .map_err(|_| DispatchError::Closed)?;
        committed.await.map_err(|_| DispatchError::Closed)
    }
}

pub struct ProgramHandle<S, M> {
    dispatcher: Dispatcher<S, M>,
    committed: watch::Receiver<S>,
    task: JoinHandle<S>,
}

impl<S, M> ProgramHandle<S, M> {
    pub fn dispatcher(&self) -> Dispatcher<S, M> {
        self.dispatcher.clone()
    }

    /// Receives every committed model.
    pub fn subscribe(&self) -> watch::Receiver<S> {
        self.committed.clone()
    }

    /// Handles everything still queued and returns the final model.
    ///
    /// Resolves once every other [`Dispatcher`] clone has been dropped.
    pub async fn shutdown(self) -> Result<S, ProgramError> {
        drop(self.dispatcher);
        Ok(self.task.await?)
    }

    /// Stops the loop without draining the queue.
    pub fn abort(self) {
        self.task.abort();
    }
}

pub struct Program<U: Update, V, R> {
    update: U,
    view: V,
    renderer: R,
    model: U::State,
    current: Node<U::Intent>,
    queue: mpsc::UnboundedReceiver<Envelope<U::State, U::Intent>>,
    committed: watch::Sender<U::State>,
}

impl<U, V, R> Program<U, V, R>
where
    U: Update,
    V: Fn(&U::State) -> Node<U::Intent> + Send + 'static,
    R: Renderer<U::Intent>,
{
    /// Mount the initial view and spawn the loop on the current tokio runtime.
    pub fn start(
        init: U::State,
        update: U,
        view: V,
        mut renderer: R,
    ) -> Result<ProgramHandle<U::State, U::Intent>, RenderError> {
        let current = view(&init);
        renderer.mount(&current)?;

        let (tx, queue) = mpsc::unbounded_channel();
        let (committed, committed_rx) = watch::channel(init.clone());
        let program = Program {
            update,
            view,
            renderer,
            model: init,
            current,
            queue,
            committed,
        };
        let task = tokio::spawn(program.run());

        Ok(ProgramHandle {
            dispatcher: Dispatcher { tx },
            committed: committed_rx,
            task,
        })
    }

    async fn run(mut self) -> U::State {
        while let Some(envelope) = self.queue.recv().await {
            let span = tracing::debug_span!("dispatch", intent = ?envelope.intent);
            self.step(envelope).instrument(span).await;
        }
        tracing::debug!("Dispatch queue closed");
        self.model
    }

    async fn step(&mut self, envelope: Envelope<U::State, U::Intent>) {
        let Envelope { intent, ack } = envelope;
        let prev = std::mem::take(&mut self.model);
        let next = self.update.update(prev, intent).await;
        let next_view = (self.view)(&next);

        if let Err(err) = self.renderer.patch(&self.current, &next_view) {
            tracing::warn!("Render failed: {}", err);
        }

        self.current = next_view;
        self.model = next;
        self.committed.send_replace(self.model.clone());
        if let Some(ack) = ack {
            let _ = ack.send(self.model.clone());
        }
    }
}
