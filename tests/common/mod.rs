//! Shared test utilities and test doubles.

#![allow(dead_code, unused_imports)]

pub mod mock_provider;

use async_trait::async_trait;
use elmish_demos::calories::CalorieReducer;
use elmish_demos::ids::Sequence;
use elmish_demos::ui::markup::Node;
use elmish_demos::ui::runtime::{RenderError, Renderer};
use elmish_demos::weather::{
    LocationQuery, Observation, WeatherError, WeatherProvider, WeatherReducer,
};
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;

// -- Reducers -----------------------------------------------------------------

pub fn calorie_reducer() -> CalorieReducer {
    CalorieReducer::new(Arc::new(Sequence::default()))
}

pub fn weather_reducer(provider: Arc<StubProvider>) -> WeatherReducer {
    WeatherReducer::new(provider, Arc::new(Sequence::default()))
}

// -- Renderers ----------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub enum RenderCall<Msg> {
    Mount(Node<Msg>),
    Patch { prev: Node<Msg>, next: Node<Msg> },
}

/// Renderer that records every tree it is handed.
pub struct RecordingRenderer<Msg> {
    calls: Arc<Mutex<Vec<RenderCall<Msg>>>>,
    fail_patches: bool,
}

impl<Msg> RecordingRenderer<Msg> {
    pub fn new() -> (Self, Arc<Mutex<Vec<RenderCall<Msg>>>>) {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let renderer = Self {
            calls: Arc::clone(&calls),
            fail_patches: false,
        };
        (renderer, calls)
    }

    /// Records calls but reports every patch as failed.
    pub fn failing() -> (Self, Arc<Mutex<Vec<RenderCall<Msg>>>>) {
        let (mut renderer, calls) = Self::new();
        renderer.fail_patches = true;
        (renderer, calls)
    }
}

impl<Msg: Clone + Send + 'static> Renderer<Msg> for RecordingRenderer<Msg> {
    fn mount(&mut self, tree: &Node<Msg>) -> Result<(), RenderError> {
        self.calls.lock().push(RenderCall::Mount(tree.clone()));
        Ok(())
    }

    fn patch(&mut self, prev: &Node<Msg>, next: &Node<Msg>) -> Result<(), RenderError> {
        self.calls.lock().push(RenderCall::Patch {
            prev: prev.clone(),
            next: next.clone(),
        });
        if self.fail_patches {
            return Err(RenderError::Draw("display went away".to_string()));
        }
        Ok(())
    }
}

// -- Weather provider ---------------------------------------------------------

pub fn observation(name: &str, temp: f64, temp_min: f64, temp_max: f64) -> Observation {
    Observation {
        name: name.to_string(),
        temp,
        temp_min,
        temp_max,
    }
}

/// Provider that answers from a queue and records what it was asked.
#[derive(Default)]
pub struct StubProvider {
    responses: Mutex<VecDeque<(Duration, Result<Observation, WeatherError>)>>,
    queries: Mutex<Vec<LocationQuery>>,
}

impl StubProvider {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn respond(&self, observation: Observation) {
        self.respond_after(Duration::ZERO, observation);
    }

    pub fn respond_after(&self, delay: Duration, observation: Observation) {
        self.responses.lock().push_back((delay, Ok(observation)));
    }

    pub fn fail(&self, err: WeatherError) {
        self.responses.lock().push_back((Duration::ZERO, Err(err)));
    }

    pub fn queries(&self) -> Vec<LocationQuery> {
        self.queries.lock().clone()
    }
}

#[async_trait]
impl WeatherProvider for StubProvider {
    async fn current(&self, query: &LocationQuery) -> Result<Observation, WeatherError> {
        self.queries.lock().push(query.clone());
        let next = self.responses.lock().pop_front();
        let (delay, result) = next.unwrap_or_else(|| {
            (
                Duration::ZERO,
                Err(WeatherError::Status {
                    status: 500,
                    message: "no stubbed response".to_string(),
                }),
            )
        });
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        result
    }
}
