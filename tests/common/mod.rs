#![allow(dead_code)]

use login_form::prelude::*;
use std::sync::{Arc, Mutex};
use tokio::sync::{Notify, watch};

/// Shared log of `(username, password)` pairs an authenticator was called with.
pub type Calls = Arc<Mutex<Vec<(String, String)>>>;

/// Authenticator that records calls and answers with `verdict`.
pub fn recording(verdict: Result<(), AuthError>) -> (impl Authenticator, Calls) {
    let calls: Calls = Arc::default();
    let log = calls.clone();
    let auth = from_fn(move |username, password| {
        log.lock().unwrap().push((username, password));
        let verdict = verdict.clone();
        async move { verdict }
    });
    (auth, calls)
}

/// Authenticator that records calls and only settles once `gate` is notified.
pub fn gated(
    verdict: Result<(), AuthError>,
) -> (impl Authenticator, Calls, Arc<Notify>) {
    let calls: Calls = Arc::default();
    let gate = Arc::new(Notify::new());
    let log = calls.clone();
    let wait = gate.clone();
    let auth = from_fn(move |username, password| {
        log.lock().unwrap().push((username, password));
        let verdict = verdict.clone();
        let wait = wait.clone();
        async move {
            wait.notified().await;
            verdict
        }
    });
    (auth, calls, gate)
}

/// Authenticator whose future never resolves.
pub fn never_settles() -> impl Authenticator {
    from_fn(|_, _| std::future::pending::<Result<(), AuthError>>())
}

pub fn fill<A: Authenticator + ?Sized>(
    controller: &mut FormController<A>,
    username: &str,
    password: &str,
) {
    controller.update_field(Field::Username, username).unwrap();
    controller.update_field(Field::Password, password).unwrap();
}

/// Waits until the published view reaches `status`.
pub async fn wait_for_status(views: &mut watch::Receiver<FormView>, status: SubmissionStatus) {
    views
        .wait_for(|view| view.status == status)
        .await
        .map(|_| ())
        .unwrap();
}
