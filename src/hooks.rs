//! Custom hooks: the generic data-fetching controller and API-client access.

use std::future::Future;
use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::ApiClient;
use crate::config::ApiConfig;
use crate::error::FetchError;
use crate::fetch::{RequestAction, RequestGeneration, RequestState};

/// Handle returned by [`use_data_fetching`]: a read view over the request
/// state plus `set_data` for caller-driven replacement.
pub struct DataFetching<T: Clone + 'static> {
    state: UseReducerHandle<RequestState<T>>,
}

impl<T: Clone + 'static> Clone for DataFetching<T> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
        }
    }
}

impl<T: Clone + 'static> DataFetching<T> {
    pub fn data(&self) -> &T {
        &self.state.data
    }

    pub fn loading(&self) -> bool {
        self.state.loading
    }

    pub fn error(&self) -> Option<&FetchError> {
        self.state.error.as_ref()
    }

    /// Replaces the data outside the fetch cycle, e.g. after a mutation.
    pub fn set_data(&self, data: T) {
        self.state.dispatch(RequestAction::Overwritten(data));
    }
}

/// Drives one fetchable resource through its request lifecycle.
///
/// `fetch_fn` runs once per activation: on mount and again whenever `deps`
/// changes by value. While a request is in flight the previous data stays
/// visible with `loading` set; a failure keeps the last good data and
/// surfaces the error message. Each activation takes a generation ticket,
/// so a slow response from a superseded activation is dropped instead of
/// overwriting newer data, and a response landing after unmount is dropped
/// by the cleanup retiring its ticket.
#[hook]
pub fn use_data_fetching<T, D, F, Fut>(initial_data: T, deps: D, fetch_fn: F) -> DataFetching<T>
where
    T: Clone + 'static,
    D: PartialEq + 'static,
    F: FnOnce() -> Fut + 'static,
    Fut: Future<Output = Result<T, FetchError>> + 'static,
{
    let state = use_reducer(|| RequestState::new(initial_data));
    let generation = use_mut_ref(RequestGeneration::default);

    {
        let state = state.clone();
        let generation = generation.clone();
        use_effect_with_deps(
            move |_| {
                let ticket = generation.borrow_mut().begin();
                state.dispatch(RequestAction::Started);

                {
                    let state = state.clone();
                    let generation = generation.clone();
                    spawn_local(async move {
                        let outcome = fetch_fn().await;
                        if !generation.borrow().is_current(ticket) {
                            return;
                        }
                        match outcome {
                            Ok(data) => state.dispatch(RequestAction::Resolved(data)),
                            Err(err) => state.dispatch(RequestAction::Rejected(err)),
                        }
                    });
                }

                move || generation.borrow_mut().retire(ticket)
            },
            deps,
        );
    }

    DataFetching { state }
}

/// The shared [`ApiClient`] from context; a standalone client with default
/// configuration if no provider is mounted (tests, isolated components).
#[hook]
pub fn use_api() -> Rc<ApiClient> {
    use_context::<Rc<ApiClient>>()
        .unwrap_or_else(|| Rc::new(ApiClient::new(ApiConfig::default())))
}
