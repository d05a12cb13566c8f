use super::{GuideRegistry, Placeholder, Provider, parse_guide};
use crate::catalog::SubtopicId;
use anyhow::{Result, anyhow};
use crossbeam::channel::{self, Receiver, RecvTimeoutError, Sender};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

pub enum Resolution {
    Ready(Provider),
    Pending,
}

#[derive(Clone, Debug)]
pub struct LoadedContent {
    pub id: SubtopicId,
    pub provider: Provider,
}

struct LoadRequest {
    id: SubtopicId,
    source: &'static str,
}

struct LoadResponse {
    id: SubtopicId,
    result: Result<super::Guide>,
}

/// Maps subtopic ids to content providers, loading each guide at most once
/// on a background worker and caching the outcome for the session.
pub struct ContentResolver {
    registry: Arc<GuideRegistry>,
    cache: HashMap<SubtopicId, Provider>,
    in_flight: HashMap<SubtopicId, String>,
    failed: HashSet<SubtopicId>,
    request_tx: Option<Sender<LoadRequest>>,
    response_rx: Receiver<LoadResponse>,
    worker: Option<JoinHandle<()>>,
    loads_started: usize,
}

impl ContentResolver {
    pub fn new(registry: Arc<GuideRegistry>) -> Self {
        let (request_tx, request_rx) = channel::unbounded::<LoadRequest>();
        let (response_tx, response_rx) = channel::unbounded::<LoadResponse>();

        let worker = thread::spawn(move || {
            while let Ok(request) = request_rx.recv() {
                let result = parse_guide(request.id.clone(), request.source);
                if response_tx
                    .send(LoadResponse {
                        id: request.id,
                        result,
                    })
                    .is_err()
                {
                    break;
                }
            }
        });

        Self {
            registry,
            cache: HashMap::new(),
            in_flight: HashMap::new(),
            failed: HashSet::new(),
            request_tx: Some(request_tx),
            response_rx,
            worker: Some(worker),
            loads_started: 0,
        }
    }

    pub fn registry(&self) -> &GuideRegistry {
        &self.registry
    }

    /// Returns the provider right away when it is known, otherwise starts
    /// (or keeps waiting on) the background load. Unregistered ids resolve
    /// to a placeholder.
    pub fn resolve(&mut self, id: &SubtopicId, title: &str) -> Resolution {
        if let Some(provider) = self.cache.get(id) {
            return Resolution::Ready(provider.clone());
        }

        let Some(source) = self.registry.source(id) else {
            return Resolution::Ready(Provider::Placeholder(Placeholder::new(id.clone(), title)));
        };

        if self.in_flight.contains_key(id) {
            return Resolution::Pending;
        }

        let sent = self.request_tx.as_ref().is_some_and(|tx| {
            tx.send(LoadRequest {
                id: id.clone(),
                source,
            })
            .is_ok()
        });
        if !sent {
            tracing::warn!(subtopic = %id, "Content worker is gone, showing placeholder");
            let provider = Provider::Placeholder(Placeholder::new(id.clone(), title));
            self.cache.insert(id.clone(), provider.clone());
            return Resolution::Ready(provider);
        }

        tracing::debug!(subtopic = %id, "Started loading guide");
        self.in_flight.insert(id.clone(), title.to_string());
        self.loads_started += 1;
        Resolution::Pending
    }

    /// Collects loads that finished since the last call without blocking.
    pub fn poll(&mut self) -> Vec<LoadedContent> {
        let responses: Vec<LoadResponse> = self.response_rx.try_iter().collect();
        responses
            .into_iter()
            .map(|response| self.complete(response))
            .collect()
    }

    /// Blocks until the next load finishes or `timeout` passes.
    pub fn wait(&mut self, timeout: Duration) -> Option<LoadedContent> {
        match self.response_rx.recv_timeout(timeout) {
            Ok(response) => Some(self.complete(response)),
            Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => None,
        }
    }

    /// Resolves `id` and waits for its load if needed.
    pub fn resolve_blocking(
        &mut self,
        id: &SubtopicId,
        title: &str,
        timeout: Duration,
    ) -> Result<Provider> {
        if let Resolution::Ready(provider) = self.resolve(id, title) {
            return Ok(provider);
        }

        let deadline = Instant::now() + timeout;
        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            match self.wait(remaining) {
                Some(loaded) if &loaded.id == id => return Ok(loaded.provider),
                Some(_) => continue,
                None => return Err(anyhow!("Timed out loading content for {id}")),
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn is_pending(&self, id: &SubtopicId) -> bool {
        self.in_flight.contains_key(id)
    }

    /// Guides that failed to parse; they are served as placeholders.
    #[cfg(test)]
    pub(crate) fn has_failed(&self, id: &SubtopicId) -> bool {
        self.failed.contains(id)
    }

    pub fn loads_started(&self) -> usize {
        self.loads_started
    }

    fn complete(&mut self, response: LoadResponse) -> LoadedContent {
        let title = self.in_flight.remove(&response.id).unwrap_or_default();

        let provider = match response.result {
            Ok(guide) => {
                tracing::debug!(subtopic = %response.id, "Guide loaded");
                Provider::Guide(Arc::new(guide))
            }
            Err(e) => {
                tracing::warn!(subtopic = %response.id, error = %e, "Guide failed to load, showing placeholder");
                self.failed.insert(response.id.clone());
                Provider::Placeholder(Placeholder::new(response.id.clone(), title))
            }
        };

        self.cache.insert(response.id.clone(), provider.clone());
        LoadedContent {
            id: response.id,
            provider,
        }
    }
}

impl Drop for ContentResolver {
    fn drop(&mut self) {
        // Closing the request channel ends the worker loop.
        self.request_tx.take();
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}
