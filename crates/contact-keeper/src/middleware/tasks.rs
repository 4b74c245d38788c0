use std::future::Future;
use std::sync::Arc;
use tokio::runtime::{Builder, Handle, Runtime};
use tokio::task::JoinHandle;

/// Tokio runtime that middleware spawns requests and timers onto
///
/// Uses the caller's runtime when there is one. Otherwise the store gets its
/// own worker runtime, which lives as long as the last clone of this value.
#[derive(Debug, Clone)]
pub struct TaskRuntime {
    handle: Handle,
    owned: Option<Arc<OwnedRuntime>>,
}

impl TaskRuntime {
    /// Spawn onto the runtime behind `handle`
    pub fn from_handle(handle: Handle) -> Self {
        Self {
            handle,
            owned: None,
        }
    }

    /// Use the current runtime, or start a dedicated one outside of Tokio
    pub fn current_or_owned() -> std::io::Result<Self> {
        if let Ok(handle) = Handle::try_current() {
            return Ok(Self::from_handle(handle));
        }

        log::debug!("TaskRuntime: no ambient runtime, starting a worker runtime");
        let runtime = Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("contact-keeper-worker")
            .enable_all()
            .build()?;
        Ok(Self {
            handle: runtime.handle().clone(),
            owned: Some(Arc::new(OwnedRuntime(Some(runtime)))),
        })
    }

    /// `true` if this runtime was started by the store itself
    pub fn is_owned(&self) -> bool {
        self.owned.is_some()
    }

    pub(crate) fn spawn<F>(&self, future: F) -> JoinHandle<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.handle.spawn(future)
    }
}

/// Shuts the worker runtime down without blocking, so the store may be
/// dropped from any context
#[derive(Debug)]
struct OwnedRuntime(Option<Runtime>);

impl Drop for OwnedRuntime {
    fn drop(&mut self) {
        if let Some(runtime) = self.0.take() {
            runtime.shutdown_background();
        }
    }
}

/// Handles of the requests a middleware has spawned
#[derive(Debug)]
pub(crate) struct TaskSet {
    runtime: TaskRuntime,
    handles: Vec<JoinHandle<()>>,
}

impl TaskSet {
    pub(crate) fn new(runtime: TaskRuntime) -> Self {
        Self {
            runtime,
            handles: Vec::new(),
        }
    }

    pub(crate) fn spawn<F>(&mut self, future: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.handles.retain(|handle| !handle.is_finished());
        self.handles.push(self.runtime.spawn(future));
    }

    pub(crate) fn in_flight(&mut self) -> usize {
        self.handles.retain(|handle| !handle.is_finished());
        self.handles.len()
    }

    pub(crate) fn abort_all(&mut self) {
        for handle in self.handles.drain(..) {
            handle.abort();
        }
    }
}
