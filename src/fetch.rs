//! Request lifecycle state shared by every data-fetching view.
//!
//! The `use_data_fetching` hook (see `hooks`) is thin glue over two pieces
//! kept framework-free so they can be tested natively: the `RequestState`
//! reducer, which owns every legal state transition, and `RequestGeneration`,
//! which decides whether a settling request is still allowed to commit.

use std::rc::Rc;

use yew::functional::Reducible;

use crate::error::FetchError;

/// The `{data, loading, error}` triple a view renders from.
///
/// `loading` is true only between dispatch and settlement. An error never
/// clears the last good `data`; the two are outcomes of the same request,
/// not a shared slot.
#[derive(Clone, Debug, PartialEq)]
pub struct RequestState<T> {
    pub data: T,
    pub loading: bool,
    pub error: Option<FetchError>,
}

impl<T> RequestState<T> {
    pub fn new(data: T) -> Self {
        Self {
            data,
            loading: false,
            error: None,
        }
    }
}

impl<T: Default> Default for RequestState<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

pub enum RequestAction<T> {
    /// A new activation began; previous data stays visible, no flicker.
    Started,
    Resolved(T),
    Rejected(FetchError),
    /// Caller-driven replacement outside the fetch cycle (the hook's
    /// `set_data`), e.g. optimistic updates after a mutation.
    Overwritten(T),
}

impl<T: Clone> Reducible for RequestState<T> {
    type Action = RequestAction<T>;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            RequestAction::Started => Rc::new(Self {
                data: self.data.clone(),
                loading: true,
                error: self.error.clone(),
            }),
            RequestAction::Resolved(data) => Rc::new(Self {
                data,
                loading: false,
                error: None,
            }),
            RequestAction::Rejected(error) => Rc::new(Self {
                data: self.data.clone(),
                loading: false,
                error: Some(error),
            }),
            RequestAction::Overwritten(data) => Rc::new(Self {
                data,
                loading: self.loading,
                error: self.error.clone(),
            }),
        }
    }
}

/// Monotonic ticket counter that serializes request activations.
///
/// Each activation takes a ticket via `begin`; only the holder of the
/// current ticket may commit its result. Re-activation implicitly retires
/// the previous ticket, unmount retires it explicitly. A stale request still
/// runs to completion on the network; its result is simply never applied.
#[derive(Debug, Default)]
pub struct RequestGeneration {
    current: u64,
}

impl RequestGeneration {
    pub fn begin(&mut self) -> u64 {
        self.current += 1;
        self.current
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.current == ticket
    }

    /// Invalidates `ticket` if it is still the live one. Retiring an already
    /// superseded ticket is a no-op so cleanup can't cancel a newer request.
    pub fn retire(&mut self, ticket: u64) {
        if self.current == ticket {
            self.current += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reduce<T: Clone>(state: RequestState<T>, action: RequestAction<T>) -> RequestState<T> {
        Rc::unwrap_or_clone(Rc::new(state).reduce(action))
    }

    #[test]
    fn initial_state_holds_initial_data() {
        let state = RequestState::new(vec![1, 2]);
        assert_eq!(state.data, vec![1, 2]);
        assert!(!state.loading);
        assert!(state.error.is_none());
    }

    #[test]
    fn started_keeps_previous_data_visible() {
        let state = reduce(RequestState::new(vec![7]), RequestAction::Started);
        assert_eq!(state.data, vec![7]);
        assert!(state.loading);
    }

    #[test]
    fn resolved_commits_data_and_clears_error() {
        let mut state = reduce(RequestState::new(0), RequestAction::Started);
        state = reduce(state, RequestAction::Rejected(FetchError::Connection));
        state = reduce(state, RequestAction::Started);
        state = reduce(state, RequestAction::Resolved(42));

        assert_eq!(state.data, 42);
        assert!(!state.loading);
        assert!(state.error.is_none());
    }

    #[test]
    fn rejected_surfaces_message_and_keeps_last_good_data() {
        let mut state = reduce(RequestState::new(0), RequestAction::Started);
        state = reduce(state, RequestAction::Resolved(42));
        state = reduce(state, RequestAction::Started);
        state = reduce(
            state,
            RequestAction::Rejected(FetchError::Server("Sin datos para 2023".into())),
        );

        assert_eq!(state.data, 42);
        assert!(!state.loading);
        assert_eq!(
            state.error.as_ref().map(ToString::to_string).as_deref(),
            Some("Sin datos para 2023")
        );
    }

    #[test]
    fn overwritten_replaces_data_without_touching_lifecycle() {
        let state = reduce(RequestState::new(1), RequestAction::Started);
        let state = reduce(state, RequestAction::Overwritten(9));
        assert_eq!(state.data, 9);
        assert!(state.loading);
    }

    #[test]
    fn newer_activation_supersedes_older_ticket() {
        let mut generation = RequestGeneration::default();
        let slow = generation.begin();
        let fast = generation.begin();

        // The fast second request settles first and commits.
        assert!(generation.is_current(fast));
        // The slow first request settles later and must be dropped.
        assert!(!generation.is_current(slow));
    }

    #[test]
    fn retire_invalidates_the_live_ticket() {
        let mut generation = RequestGeneration::default();
        let ticket = generation.begin();
        assert!(generation.is_current(ticket));

        generation.retire(ticket);
        assert!(!generation.is_current(ticket));
    }

    #[test]
    fn retiring_a_superseded_ticket_leaves_the_live_one_alone() {
        let mut generation = RequestGeneration::default();
        let old = generation.begin();
        let live = generation.begin();

        generation.retire(old);
        assert!(generation.is_current(live));
    }
}
