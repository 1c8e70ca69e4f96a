use std::future::Future;

use bank_shared::controllers::Outcome;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[derive(Clone, PartialEq)]
pub struct SubmissionState {
    /// A request is in flight; the submit control is disabled
    pub pending: bool,
    /// Inline error for the form
    pub error: Option<String>,
}

pub struct UseSubmissionResult {
    pub state: SubmissionState,
    pub actions: UseSubmissionActions,
}

#[derive(Clone)]
pub struct UseSubmissionActions {
    pending: UseStateHandle<bool>,
    error: UseStateHandle<Option<String>>,
}

impl UseSubmissionActions {
    /// Run a submit flow. The form is disabled until the flow finishes,
    /// whatever its outcome: `on_done` gets a success, a rejection is shown
    /// inline, and a transport failure raises `failure_notice`.
    pub fn run<T, F, D>(&self, flow: F, on_done: D, failure_notice: &'static str)
    where
        T: 'static,
        F: Future<Output = Outcome<T>> + 'static,
        D: FnOnce(T) + 'static,
    {
        if *self.pending {
            return;
        }

        let pending = self.pending.clone();
        let error = self.error.clone();
        pending.set(true);
        error.set(None);

        spawn_local(async move {
            match flow.await {
                Outcome::Done(value) => on_done(value),
                Outcome::Rejected(message) => error.set(Some(message)),
                Outcome::Failed(_) => gloo::dialogs::alert(failure_notice),
            }
            pending.set(false);
        });
    }
}

#[hook]
pub fn use_submission() -> UseSubmissionResult {
    let pending = use_state(|| false);
    let error = use_state(|| Option::<String>::None);

    UseSubmissionResult {
        state: SubmissionState {
            pending: *pending,
            error: (*error).clone(),
        },
        actions: UseSubmissionActions { pending, error },
    }
}
