//! In-memory contact form store.
//!
//! Submissions never leave the process: the store waits a fixed delay to
//! mimic a network round trip, then appends the form to its history.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub company: String,
    pub message: String,
}

struct ContactState {
    submissions: RwLock<Vec<ContactForm>>,
    in_flight: AtomicUsize,
    last_submission_success: AtomicBool,
    // Bumped on every success so an older reset timer cannot clear a newer flag.
    success_generation: AtomicU64,
}

/// Counts a submission as in flight until dropped, including when the
/// submitting future is dropped mid-delay.
struct InFlight<'a>(&'a AtomicUsize);

impl<'a> InFlight<'a> {
    fn enter(counter: &'a AtomicUsize) -> Self {
        counter.fetch_add(1, Ordering::SeqCst);
        Self(counter)
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

/// Cheap to clone; clones share the same history.
#[derive(Clone)]
pub struct ContactStore {
    state: Arc<ContactState>,
    submit_delay: Duration,
    success_reset: Duration,
}

impl ContactStore {
    pub fn new(submit_delay: Duration, success_reset: Duration) -> Self {
        Self {
            state: Arc::new(ContactState {
                submissions: RwLock::new(Vec::new()),
                in_flight: AtomicUsize::new(0),
                last_submission_success: AtomicBool::new(false),
                success_generation: AtomicU64::new(0),
            }),
            submit_delay,
            success_reset,
        }
    }

    /// Simulates submitting `form`: resolves once the copy is stored.
    pub async fn submit_form(&self, form: &ContactForm) {
        let submitting = InFlight::enter(&self.state.in_flight);

        tokio::time::sleep(self.submit_delay).await;

        self.state.submissions.write().await.push(form.clone());
        // Success is raised before the in-flight count drops so status readers
        // never see an idle store between the two.
        let generation = self.state.success_generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.state
            .last_submission_success
            .store(true, Ordering::SeqCst);
        drop(submitting);

        tracing::info!(
            name = %form.name,
            email = %form.email,
            company = %form.company,
            "Form submitted successfully"
        );

        let state = Arc::clone(&self.state);
        let reset_after = self.success_reset;
        tokio::spawn(async move {
            tokio::time::sleep(reset_after).await;
            if state.success_generation.load(Ordering::SeqCst) == generation {
                state.last_submission_success.store(false, Ordering::SeqCst);
            }
        });
    }

    /// Every stored submission, oldest first.
    pub async fn submissions(&self) -> Vec<ContactForm> {
        self.state.submissions.read().await.clone()
    }

    pub fn is_submitting(&self) -> bool {
        self.state.in_flight.load(Ordering::SeqCst) > 0
    }

    pub fn last_submission_success(&self) -> bool {
        self.state.last_submission_success.load(Ordering::SeqCst)
    }
}

impl Default for ContactStore {
    fn default() -> Self {
        Self::new(Duration::from_millis(500), Duration::from_secs(3))
    }
}
