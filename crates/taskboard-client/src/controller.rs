//! Paginated Collection Controller
//!
//! Drives one list view: `Idle -> Loading -> {Loaded, Failed}`, back to
//! `Loading` on page changes and after every mutation. State is never patched
//! locally; a mutation always ends with a re-fetch of the current page.
//!
//! Each load carries a generation number so only the latest request may write
//! state, and a disposed controller (view unmounted) ignores late responses.

use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;

use crate::error::{ApiError, ApiResult};
use crate::gate::{GateOutcome, SessionGate};
use crate::paging::{is_valid_page, last_page, Page, PageControls};

pub const LOG_TARGET: &str = "taskboard_client::controller";

/// A backend collection that can be fetched one page at a time
#[async_trait(?Send)]
pub trait PagedResource: Send + Sync {
    type Item: Clone + Send + Sync + 'static;

    /// Short name for log lines ("projects", "tasks")
    fn name(&self) -> &'static str;

    /// Items on `page` plus the collection's total count
    async fn fetch_page(&self, token: &str, page: u32, page_size: u32)
        -> ApiResult<(Vec<Self::Item>, u64)>;
}

#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    Idle,
    Loading,
    Loaded(Page<T>),
    Failed(GateOutcome),
}

/// Snapshot handed to observers
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionState<T> {
    pub load: LoadState<T>,
    pub current_page: u32,
    pub page_size: u32,
    pub total: u64,
    pub mutating: bool,
}

impl<T> CollectionState<T> {
    pub fn new(page_size: u32) -> Self {
        Self {
            load: LoadState::Idle,
            current_page: 1,
            page_size,
            total: 0,
            mutating: false,
        }
    }

    /// Controls should be disabled while this is true.
    pub fn is_busy(&self) -> bool {
        self.mutating || matches!(self.load, LoadState::Loading)
    }

    pub fn page(&self) -> Option<&Page<T>> {
        match &self.load {
            LoadState::Loaded(page) => Some(page),
            _ => None,
        }
    }

    pub fn controls(&self) -> Option<PageControls> {
        self.page().and_then(PageControls::for_page)
    }

    pub fn last_page(&self) -> u32 {
        last_page(self.total, self.page_size)
    }
}

type Observer<T> = Box<dyn Fn(&CollectionState<T>) + Send + Sync>;

struct Inner<T> {
    state: CollectionState<T>,
    generation: u64,
    disposed: bool,
}

pub struct CollectionController<R: PagedResource> {
    resource: R,
    gate: SessionGate,
    inner: Mutex<Inner<R::Item>>,
    observer: Mutex<Option<Observer<R::Item>>>,
}

impl<R: PagedResource> CollectionController<R> {
    pub fn new(resource: R, gate: SessionGate, page_size: u32) -> Self {
        Self {
            resource,
            gate,
            inner: Mutex::new(Inner {
                state: CollectionState::new(page_size.max(1)),
                generation: 0,
                disposed: false,
            }),
            observer: Mutex::new(None),
        }
    }

    pub fn shared(resource: R, gate: SessionGate, page_size: u32) -> Arc<Self> {
        Arc::new(Self::new(resource, gate, page_size))
    }

    /// Called with a fresh snapshot after every transition.
    pub fn set_observer(&self, observer: impl Fn(&CollectionState<R::Item>) + Send + Sync + 'static) {
        *self.observer.lock().unwrap_or_else(PoisonError::into_inner) = Some(Box::new(observer));
    }

    pub fn snapshot(&self) -> CollectionState<R::Item> {
        self.lock().state.clone()
    }

    pub fn current_page(&self) -> u32 {
        self.lock().state.current_page
    }

    pub fn page_size(&self) -> u32 {
        self.lock().state.page_size
    }

    pub fn is_disposed(&self) -> bool {
        self.lock().disposed
    }

    /// Stop applying responses; call when the view unmounts.
    pub fn dispose(&self) {
        self.lock().disposed = true;
        self.observer.lock().unwrap_or_else(PoisonError::into_inner).take();
        log::debug!(target: LOG_TARGET, "{} controller disposed", self.resource.name());
    }

    /// Fetch `page` and publish the result.
    ///
    /// If the server reports that `page` is now past the end (the last row of
    /// the last page was deleted), the last existing page is loaded instead.
    pub async fn load(&self, page: u32) {
        let mut page = page.max(1);
        loop {
            let Some(generation) = self.begin_load() else {
                return;
            };

            let token = match self.gate.token() {
                Ok(token) => token,
                Err(err) => {
                    self.finish_load(generation, Err(err));
                    return;
                }
            };

            let page_size = self.page_size();
            log::debug!(
                target: LOG_TARGET,
                "Loading {} page {} (size {})",
                self.resource.name(),
                page,
                page_size
            );
            let result = self.resource.fetch_page(&token, page, page_size).await;

            if let Ok((_, total)) = &result {
                let last = last_page(*total, page_size).max(1);
                if page > last && self.is_current(generation) {
                    log::debug!(
                        target: LOG_TARGET,
                        "{} page {} is past the end; clamping to {}",
                        self.resource.name(),
                        page,
                        last
                    );
                    page = last;
                    continue;
                }
            }

            self.finish_load(generation, result.map(|(items, total)| Page {
                items,
                total,
                page_size,
                current_page: page,
            }));
            return;
        }
    }

    /// Re-fetch the current page.
    pub async fn refresh(&self) {
        let page = self.current_page();
        self.load(page).await;
    }

    /// Move to page `n`.
    ///
    /// Returns `false` without issuing a request when `n` is out of range or
    /// a request is already in flight.
    pub async fn go_to_page(&self, n: u32) -> bool {
        {
            let inner = self.lock();
            let state = &inner.state;
            if inner.disposed || state.is_busy() || !is_valid_page(n, state.total, state.page_size) {
                log::debug!(target: LOG_TARGET, "Ignoring go_to_page({})", n);
                return false;
            }
        }
        self.load(n).await;
        true
    }

    /// Run a create/update/delete call, then re-fetch the current page.
    ///
    /// The operation receives the session token. Failures go through the
    /// session gate; nothing is re-fetched after a failure.
    pub async fn mutate<F, Fut, O>(&self, op: F) -> Result<O, GateOutcome>
    where
        F: FnOnce(String) -> Fut,
        Fut: Future<Output = ApiResult<O>>,
    {
        {
            let mut inner = self.lock();
            if inner.disposed {
                return Err(GateOutcome::Local(ApiError::busy()));
            }
            if inner.state.is_busy() {
                log::debug!(target: LOG_TARGET, "Mutation ignored while busy");
                return Err(GateOutcome::Local(ApiError::busy()));
            }
            inner.state.mutating = true;
        }
        self.notify();

        let result = match self.gate.token() {
            Ok(token) => op(token).await,
            Err(err) => Err(err),
        };

        self.lock().state.mutating = false;

        match result {
            Ok(output) => {
                if !self.is_disposed() {
                    self.refresh().await;
                }
                Ok(output)
            }
            Err(err) => {
                log::warn!(target: LOG_TARGET, "{} mutation failed: {}", self.resource.name(), err);
                self.notify();
                Err(self.gate.intercept(err))
            }
        }
    }

    // ========================
    // Internal
    // ========================

    fn lock(&self) -> MutexGuard<'_, Inner<R::Item>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn is_current(&self, generation: u64) -> bool {
        let inner = self.lock();
        !inner.disposed && inner.generation == generation
    }

    fn begin_load(&self) -> Option<u64> {
        let generation = {
            let mut inner = self.lock();
            if inner.disposed {
                return None;
            }
            inner.generation += 1;
            inner.state.load = LoadState::Loading;
            inner.generation
        };
        self.notify();
        Some(generation)
    }

    fn finish_load(&self, generation: u64, result: ApiResult<Page<R::Item>>) {
        if !self.is_current(generation) {
            log::debug!(
                target: LOG_TARGET,
                "Dropping stale {} response (generation {})",
                self.resource.name(),
                generation
            );
            return;
        }

        let load = match result {
            Ok(page) => {
                let mut inner = self.lock();
                inner.state.current_page = page.current_page;
                inner.state.total = page.total;
                LoadState::Loaded(page)
            }
            Err(err) => {
                log::warn!(target: LOG_TARGET, "Loading {} failed: {}", self.resource.name(), err);
                LoadState::Failed(self.gate.intercept(err))
            }
        };

        {
            let mut inner = self.lock();
            if inner.disposed {
                return;
            }
            inner.state.load = load;
        }
        self.notify();
    }

    fn notify(&self) {
        let snapshot = {
            let inner = self.lock();
            if inner.disposed {
                return;
            }
            inner.state.clone()
        };
        if let Some(observer) = self.observer.lock().unwrap_or_else(PoisonError::into_inner).as_ref() {
            observer(&snapshot);
        }
    }
}
