/// Contact store tests on a paused clock
use site_support::contact::{ContactForm, ContactStore};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

fn form(name: &str) -> ContactForm {
    ContactForm {
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase()),
        company: "Acme".to_string(),
        message: "We need help with our CI".to_string(),
    }
}

fn store() -> ContactStore {
    ContactStore::new(Duration::from_millis(500), Duration::from_secs(3))
}

#[tokio::test(start_paused = true)]
async fn test_submit_appends_one_copy_per_call() {
    let store = store();

    store.submit_form(&form("Ana")).await;
    store.submit_form(&form("Ana")).await;
    store.submit_form(&form("Bruno")).await;

    let submissions = store.submissions().await;
    assert_eq!(submissions.len(), 3);
    assert_eq!(submissions[0], form("Ana"));
    assert_eq!(submissions[2].name, "Bruno");
}

#[tokio::test(start_paused = true)]
async fn test_submitting_only_during_delay_window() {
    let store = store();
    assert!(!store.is_submitting());

    let background = store.clone();
    let handle = tokio::spawn(async move { background.submit_form(&form("Ana")).await });

    tokio::time::sleep(Duration::from_millis(100)).await;
    assert!(store.is_submitting());
    assert!(store.submissions().await.is_empty());

    handle.await.unwrap();
    assert!(!store.is_submitting());
    assert_eq!(store.submissions().await.len(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_success_flag_clears_after_reset_delay() {
    let store = store();

    store.submit_form(&form("Ana")).await;
    assert!(store.last_submission_success());

    tokio::time::sleep(Duration::from_millis(2900)).await;
    assert!(store.last_submission_success());

    tokio::time::sleep(Duration::from_millis(200)).await;
    assert!(!store.last_submission_success());
}

#[tokio::test(start_paused = true)]
async fn test_newer_success_is_not_cleared_by_older_timer() {
    let store = store();

    store.submit_form(&form("Ana")).await;
    tokio::time::sleep(Duration::from_secs(2)).await;
    store.submit_form(&form("Bruno")).await;

    // First reset timer has fired by now; the second has not.
    tokio::time::sleep(Duration::from_millis(700)).await;
    assert!(store.last_submission_success());

    tokio::time::sleep(Duration::from_secs(3)).await;
    assert!(!store.last_submission_success());
}

#[tokio::test(start_paused = true)]
async fn test_dropped_submission_does_not_stick() {
    let store = store();

    let ana = form("Ana");
    let pending = store.submit_form(&ana);
    let _ = tokio::time::timeout(Duration::from_millis(100), pending).await;

    assert!(!store.is_submitting());
    assert!(store.submissions().await.is_empty());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_status_never_idle_between_submitting_and_success() {
    let store = ContactStore::new(Duration::from_millis(20), Duration::from_secs(30));
    let done = Arc::new(AtomicBool::new(false));

    let watcher = {
        let store = store.clone();
        let done = Arc::clone(&done);
        std::thread::spawn(move || {
            let mut seen_submitting = false;
            let mut idle_after_start = 0usize;
            while !done.load(Ordering::SeqCst) {
                let submitting = store.is_submitting();
                let success = store.last_submission_success();
                seen_submitting |= submitting;
                if seen_submitting && !submitting && !success {
                    idle_after_start += 1;
                }
            }
            (seen_submitting, idle_after_start)
        })
    };

    for name in ["Ana", "Bruno", "Carla"] {
        store.submit_form(&form(name)).await;
    }
    done.store(true, Ordering::SeqCst);

    let (seen_submitting, idle_after_start) = watcher.join().unwrap();
    assert!(seen_submitting);
    assert_eq!(idle_after_start, 0);
    assert!(!store.is_submitting());
    assert!(store.last_submission_success());
}
