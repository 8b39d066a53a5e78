use std::{
    future::Future,
    sync::{
        mpsc::{self, Receiver, Sender},
        Arc,
    },
};

use log::debug;
use tokio::runtime::Handle;

use crate::{
    api::{EvaluationReport, GridService, ServerStats, TrainReport},
    env::EnvDescriptor,
    error::ApiError,
    session::Ticket,
};

/// A finished service call, delivered to the UI thread
#[derive(Debug)]
pub enum Completion {
    Initialize(Result<EnvDescriptor, ApiError>),
    Train(Ticket, Result<TrainReport, ApiError>),
    Evaluate(Ticket, Result<EvaluationReport, ApiError>),
    Stats(Result<ServerStats, ApiError>),
}

/// Runs service calls in the background
///
/// Each call becomes a task on `runtime` that sends exactly one [`Completion`]
/// through the channel returned by [`Dispatcher::new`]. Completions arrive in
/// the order the responses do, not the order the calls were made.
pub struct Dispatcher<S> {
    service: Arc<S>,
    runtime: Handle,
    tx: Sender<Completion>,
}

impl<S: GridService> Dispatcher<S> {
    pub fn new(service: S, runtime: Handle) -> (Self, Receiver<Completion>) {
        let (tx, rx) = mpsc::channel();
        let dispatcher = Self {
            service: Arc::new(service),
            runtime,
            tx,
        };
        (dispatcher, rx)
    }

    pub fn initialize(&self, grid_size: usize) {
        debug!("requesting {grid_size}x{grid_size} environment");
        let service = Arc::clone(&self.service);
        self.spawn(async move { Completion::Initialize(service.initialize(grid_size).await) });
    }

    pub fn train(&self, ticket: Ticket, episodes: u32) {
        debug!("requesting {episodes} training episodes");
        let service = Arc::clone(&self.service);
        self.spawn(async move { Completion::Train(ticket, service.train(episodes).await) });
    }

    pub fn evaluate(&self, ticket: Ticket) {
        debug!("requesting evaluation run");
        let service = Arc::clone(&self.service);
        self.spawn(async move { Completion::Evaluate(ticket, service.evaluate().await) });
    }

    pub fn stats(&self) {
        debug!("requesting server statistics");
        let service = Arc::clone(&self.service);
        self.spawn(async move { Completion::Stats(service.stats().await) });
    }

    fn spawn<F>(&self, call: F)
    where
        F: Future<Output = Completion> + Send + 'static,
    {
        let tx = self.tx.clone();
        self.runtime.spawn(async move {
            if tx.send(call.await).is_err() {
                debug!("dashboard closed before the response arrived");
            }
        });
    }
}
