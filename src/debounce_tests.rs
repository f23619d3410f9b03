use super::*;

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use tokio::time::sleep;

// All tests run with a paused clock; awaiting `sleep` lets pending timer
// tasks register their deadlines before time auto-advances.

fn counter_fire(count: &Arc<AtomicUsize>) -> impl FnOnce() + Send + 'static {
    let count = count.clone();
    move || {
        count.fetch_add(1, Ordering::SeqCst);
    }
}

#[tokio::test(start_paused = true)]
async fn test_fires_once_after_quiet_period() {
    let count = Arc::new(AtomicUsize::new(0));
    let mut debouncer = Debouncer::new(300);

    debouncer.schedule(counter_fire(&count));
    sleep(Duration::from_millis(299)).await;
    assert_eq!(count.load(Ordering::SeqCst), 0);

    sleep(Duration::from_millis(2)).await;
    assert_eq!(count.load(Ordering::SeqCst), 1);
}

#[tokio::test(start_paused = true)]
async fn test_burst_of_schedules_fires_exactly_once() {
    let count = Arc::new(AtomicUsize::new(0));
    let mut debouncer = Debouncer::new(300);

    // Keystrokes arriving faster than the quiet period
    for _ in 0..5 {
        debouncer.schedule(counter_fire(&count));
        sleep(Duration::from_millis(100)).await;
    }
    assert_eq!(count.load(Ordering::SeqCst), 0);

    sleep(Duration::from_millis(301)).await;
    assert_eq!(count.load(Ordering::SeqCst), 1);
}

#[tokio::test(start_paused = true)]
async fn test_reschedule_uses_latest_action() {
    let fired: Arc<std::sync::Mutex<Vec<&'static str>>> = Arc::default();
    let mut debouncer = Debouncer::new(300);

    let first = fired.clone();
    debouncer.schedule(move || first.lock().unwrap().push("first"));
    sleep(Duration::from_millis(100)).await;

    let second = fired.clone();
    debouncer.schedule(move || second.lock().unwrap().push("second"));
    sleep(Duration::from_millis(301)).await;

    assert_eq!(*fired.lock().unwrap(), vec!["second"]);
}

#[tokio::test(start_paused = true)]
async fn test_cancel_prevents_firing() {
    let count = Arc::new(AtomicUsize::new(0));
    let mut debouncer = Debouncer::new(300);

    debouncer.schedule(counter_fire(&count));
    sleep(Duration::from_millis(100)).await;
    debouncer.cancel();

    sleep(Duration::from_millis(500)).await;
    assert_eq!(count.load(Ordering::SeqCst), 0);
}

#[tokio::test(start_paused = true)]
async fn test_schedule_after_fire_fires_again() {
    let count = Arc::new(AtomicUsize::new(0));
    let mut debouncer = Debouncer::new(300);

    debouncer.schedule(counter_fire(&count));
    sleep(Duration::from_millis(301)).await;
    debouncer.schedule(counter_fire(&count));
    sleep(Duration::from_millis(301)).await;

    assert_eq!(count.load(Ordering::SeqCst), 2);
}

#[tokio::test(start_paused = true)]
async fn test_drop_cancels_pending_timer() {
    let count = Arc::new(AtomicUsize::new(0));
    {
        let mut debouncer = Debouncer::new(300);
        debouncer.schedule(counter_fire(&count));
    }
    sleep(Duration::from_millis(500)).await;
    assert_eq!(count.load(Ordering::SeqCst), 0);
}
