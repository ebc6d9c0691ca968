//! Controller Bindings
//!
//! Glue between a [`CollectionController`] and a page: state mirrored into a
//! signal, disposal on unmount, and toasts for every failed request.

use std::future::Future;
use std::sync::Arc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use taskboard_client::{ApiResult, CollectionController, CollectionState, LoadState, PagedResource};

use crate::store::{store_push_toast, store_report, AppStore, ToastKind};

/// Mirror the controller into a signal for as long as the page is mounted.
pub fn mount_collection<R>(controller: &Arc<CollectionController<R>>) -> RwSignal<CollectionState<R::Item>>
where
    R: PagedResource + 'static,
{
    let state = RwSignal::new(controller.snapshot());
    controller.set_observer(move |snapshot| {
        // the signal is gone once the page unmounts
        let _ = state.try_set(snapshot.clone());
    });
    on_cleanup({
        let controller = controller.clone();
        move || controller.dispose()
    });
    state
}

/// A redirect already happened; tell the user why.
fn report_redirect<R>(controller: &CollectionController<R>, store: &AppStore)
where
    R: PagedResource,
{
    if let LoadState::Failed(outcome) = controller.snapshot().load {
        if outcome.is_redirect() {
            store_report(store, &outcome);
        }
    }
}

pub fn spawn_load<R>(controller: Arc<CollectionController<R>>, store: AppStore, page: u32)
where
    R: PagedResource + 'static,
{
    spawn_local(async move {
        controller.load(page).await;
        report_redirect(&controller, &store);
    });
}

pub fn spawn_go_to_page<R>(controller: Arc<CollectionController<R>>, store: AppStore, page: u32)
where
    R: PagedResource + 'static,
{
    spawn_local(async move {
        if controller.go_to_page(page).await {
            report_redirect(&controller, &store);
        }
    });
}

/// Run a mutation that yields the server's message; toast the outcome.
pub fn spawn_mutation<R, F, Fut>(
    controller: Arc<CollectionController<R>>,
    store: AppStore,
    op: F,
    on_success: impl FnOnce() + 'static,
) where
    R: PagedResource + 'static,
    F: FnOnce(String) -> Fut + 'static,
    Fut: Future<Output = ApiResult<String>> + 'static,
{
    spawn_local(async move {
        match controller.mutate(op).await {
            Ok(message) => {
                store_push_toast(&store, ToastKind::Success, message);
                on_success();
                report_redirect(&controller, &store);
            }
            Err(outcome) => store_report(&store, &outcome),
        }
    });
}
