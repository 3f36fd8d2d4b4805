use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use appointment_cell::services::debounce::Debouncer;

#[tokio::test]
async fn only_the_last_action_in_a_burst_runs() {
    let debouncer = Debouncer::new(Duration::from_millis(50));
    let runs = Arc::new(AtomicUsize::new(0));

    for _ in 0..4 {
        let runs = runs.clone();
        debouncer.debounce("search", move || async move {
            runs.fetch_add(1, Ordering::SeqCst);
        });
        tokio::time::sleep(Duration::from_millis(10)).await;
    }

    tokio::time::sleep(Duration::from_millis(200)).await;
    assert_eq!(runs.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn keys_debounce_independently() {
    let debouncer = Debouncer::new(Duration::from_millis(30));
    let runs = Arc::new(AtomicUsize::new(0));

    for key in ["search", "status-filter"] {
        let runs = runs.clone();
        debouncer.debounce(key, move || async move {
            runs.fetch_add(1, Ordering::SeqCst);
        });
    }

    tokio::time::sleep(Duration::from_millis(150)).await;
    assert_eq!(runs.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn cancelled_action_never_runs() {
    let debouncer = Debouncer::new(Duration::from_millis(30));
    let runs = Arc::new(AtomicUsize::new(0));

    {
        let runs = runs.clone();
        debouncer.debounce("search", move || async move {
            runs.fetch_add(1, Ordering::SeqCst);
        });
    }
    debouncer.cancel("search");

    tokio::time::sleep(Duration::from_millis(150)).await;
    assert_eq!(runs.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn teardown_cancels_everything_pending() {
    let runs = Arc::new(AtomicUsize::new(0));

    {
        let debouncer = Debouncer::default();
        for key in ["a", "b", "c"] {
            let runs = runs.clone();
            debouncer.debounce(key, move || async move {
                runs.fetch_add(1, Ordering::SeqCst);
            });
        }
        // Dropped before the quiet window elapses
    }

    tokio::time::sleep(Duration::from_millis(400)).await;
    assert_eq!(runs.load(Ordering::SeqCst), 0);
}
