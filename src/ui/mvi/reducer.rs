//! Reducer traits for MVI architecture.

use async_trait::async_trait;

use super::intent::Intent;
use super::state::UiState;

/// Reducer transforms state based on intents.
///
/// The reducer is the only place where state transitions happen.
/// It must be a pure function: (State, Intent) -> State. Dependencies
/// such as id generators are injected into the reducer value itself.
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: UiState;

    /// The intent type this reducer handles.
    type Intent: Intent;

    /// Process an intent and return the new state.
    ///
    /// This should be a pure function with no side effects.
    fn reduce(&self, state: Self::State, intent: Self::Intent) -> Self::State;
}

/// Asynchronous state transition.
///
/// This is what the runtime loop drives. Every [`Reducer`] is an `Update`
/// that completes immediately; reducers that talk to the network implement
/// it directly.
#[async_trait]
pub trait Update: Send + Sync + 'static {
    type State: UiState;
    type Intent: Intent;

    async fn update(&self, state: Self::State, intent: Self::Intent) -> Self::State;
}

#[async_trait]
impl<R> Update for R
where
    R: Reducer + Send + Sync + 'static,
{
    type State = R::State;
    type Intent = R::Intent;

    async fn update(&self, state: Self::State, intent: Self::Intent) -> Self::State {
        self.reduce(state, intent)
    }
}
