//! Toast Integration Tests
//!
//! End-to-end tests for the toast provider, queue timers and overlay working
//! together the way the app shell wires them.

use app_state::toast::{
    use_toast, DismissReason, NotificationInput, SequentialIds, ToastConfig, ToastError,
    ToastEvent, ToastProvider, ToastScope, ToastVariant,
};
use app_ui::toast::{StackLayout, SwipeThresholds, ToastOverlay, ToastPhase};
use std::time::Duration;
use tokio::sync::broadcast;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn drain(rx: &mut broadcast::Receiver<ToastEvent>) -> Vec<ToastEvent> {
    let mut events = Vec::new();
    while let Ok(event) = rx.try_recv() {
        events.push(event);
    }
    events
}

/// Active set is always the N most recent toasts
#[tokio::test(start_paused = true)]
async fn test_active_set_is_most_recent_n() {
    init_tracing();
    for capacity in 1..=4 {
        let provider = ToastProvider::mount(ToastConfig::new().with_max_toasts(capacity)).unwrap();
        let toasts = provider.handle();

        let mut enqueued = Vec::new();
        for i in 0..10 {
            enqueued.push(toasts.info(&format!("toast {i}"), None).unwrap());

            let active: Vec<_> = toasts.snapshot().unwrap().into_iter().map(|t| t.id).collect();
            let expected: Vec<_> = enqueued.iter().rev().take(capacity).cloned().collect();
            assert_eq!(active, expected, "capacity {capacity}, after {} toasts", i + 1);
        }
        assert_eq!(provider.queue().pending_timers(), capacity);
    }
}

/// Enqueue 4 with capacity 3: the oldest is evicted, never expired
#[tokio::test(start_paused = true)]
async fn test_fourth_toast_evicts_first() {
    init_tracing();
    let provider = ToastProvider::mount(ToastConfig::default()).unwrap();
    let toasts = provider.handle();
    let mut events = toasts.subscribe_events().unwrap();

    let ids: Vec<_> = (1..=4).map(|i| toasts.info(&format!("#{i}"), None).unwrap()).collect();
    let titles: Vec<_> = toasts
        .snapshot()
        .unwrap()
        .into_iter()
        .filter_map(|t| t.title)
        .collect();
    assert_eq!(titles, vec!["#4", "#3", "#2"]);

    tokio::time::sleep(Duration::from_secs(5)).await;
    let events = drain(&mut events);
    let touching_first: Vec<_> = events
        .iter()
        .filter(|e| match e {
            ToastEvent::Evicted(id) | ToastEvent::Enqueued(id) => id == &ids[0],
            ToastEvent::Dismissed { id, .. } => id == &ids[0],
            ToastEvent::Cleared => false,
        })
        .collect();
    assert_eq!(
        touching_first,
        vec![&ToastEvent::Enqueued(ids[0].clone()), &ToastEvent::Evicted(ids[0].clone())]
    );
}

/// Manual dismiss at t=1000 of a 4000ms toast: removed once, no later expiry
#[tokio::test(start_paused = true)]
async fn test_manual_dismiss_before_expiry() {
    init_tracing();
    let provider = ToastProvider::mount(ToastConfig::default()).unwrap();
    let toasts = provider.handle();
    let mut events = toasts.subscribe_events().unwrap();

    let id = toasts.toast(NotificationInput::new("Pending").duration_ms(4000)).unwrap();
    tokio::time::sleep(Duration::from_millis(1000)).await;
    assert!(toasts.dismiss(&id).unwrap());

    tokio::time::sleep(Duration::from_millis(3500)).await;
    let removals: Vec<_> = drain(&mut events)
        .into_iter()
        .filter(|e| !matches!(e, ToastEvent::Enqueued(_)))
        .collect();
    assert_eq!(removals, vec![ToastEvent::Dismissed { id, reason: DismissReason::Manual }]);
}

/// Default 4s auto-dismiss applies when no duration is given
#[tokio::test(start_paused = true)]
async fn test_default_duration_auto_dismiss() {
    init_tracing();
    let provider = ToastProvider::mount(ToastConfig::default()).unwrap();
    let toasts = provider.handle();

    let id = toasts.warning("Low balance", Some("Top up to keep trading")).unwrap();
    tokio::time::sleep(Duration::from_millis(3999)).await;
    assert!(provider.queue().contains(&id));
    tokio::time::sleep(Duration::from_millis(2)).await;
    assert!(!provider.queue().contains(&id));
}

/// Success sugar produces exactly one success toast
#[tokio::test(start_paused = true)]
async fn test_success_sugar() {
    let provider = ToastProvider::mount(ToastConfig::default()).unwrap();
    let toasts = use_toast(&provider.scope()).unwrap();

    toasts.success("Saved", Some("Changes saved")).unwrap();
    let snapshot = toasts.snapshot().unwrap();
    assert_eq!(snapshot.len(), 1);
    assert_eq!(snapshot[0].variant, ToastVariant::Success);
    assert_eq!(snapshot[0].title.as_deref(), Some("Saved"));
}

/// Dismiss-all empties the set and no timer fires afterwards
#[tokio::test(start_paused = true)]
async fn test_dismiss_all_silences_timers() {
    let provider = ToastProvider::mount(ToastConfig::default()).unwrap();
    let toasts = provider.handle();
    let mut events = toasts.subscribe_events().unwrap();

    for i in 0..3 {
        toasts.toast(NotificationInput::new(format!("t{i}")).duration_ms(100 * (i + 1))).unwrap();
    }
    toasts.dismiss_all().unwrap();
    assert!(toasts.snapshot().unwrap().is_empty());
    assert_eq!(provider.queue().pending_timers(), 0);

    tokio::time::sleep(Duration::from_secs(1)).await;
    let events = drain(&mut events);
    assert_eq!(events.last(), Some(&ToastEvent::Cleared));
    assert!(!events.iter().any(|e| matches!(e, ToastEvent::Dismissed { .. })));
}

/// A small, slow swipe leaves the toast where it was
#[tokio::test(start_paused = true)]
async fn test_sub_threshold_swipe_is_noop() {
    let provider = ToastProvider::mount(ToastConfig::default()).unwrap();
    let toasts = provider.handle();
    let mut overlay =
        ToastOverlay::new(toasts.clone(), 390.0, StackLayout::default(), SwipeThresholds::default())
            .unwrap();

    let id = toasts.info("Address copied", None).unwrap();
    let before = toasts.snapshot().unwrap();
    overlay.refresh();
    overlay.stack_mut().enter_finished(&id);

    overlay.drag(&id, 20.0);
    assert!(!overlay.release(&id, 200.0).unwrap().is_dismiss());
    assert_eq!(toasts.snapshot().unwrap(), before);
    assert_eq!(overlay.stack().get(&id).unwrap().presence.phase(), ToastPhase::Visible);
}

/// Expired toasts animate out in the overlay
#[tokio::test(start_paused = true)]
async fn test_overlay_follows_expiry() {
    let provider = ToastProvider::mount(ToastConfig::default().with_default_duration_ms(1000)).unwrap();
    let toasts = provider.handle();
    let mut overlay =
        ToastOverlay::new(toasts.clone(), 390.0, StackLayout::default(), SwipeThresholds::default())
            .unwrap();

    let id = toasts.info("Rate updated", None).unwrap();
    assert!(overlay.refresh());
    overlay.stack_mut().enter_finished(&id);

    tokio::time::sleep(Duration::from_millis(1001)).await;
    assert!(overlay.refresh());
    assert_eq!(overlay.stack().get(&id).unwrap().presence.phase(), ToastPhase::Exiting);
    assert!(overlay.stack_mut().exit_finished(&id));
}

/// Usage outside the provider lifecycle fails fast
#[tokio::test(start_paused = true)]
async fn test_usage_errors() {
    assert!(matches!(use_toast(&ToastScope::detached()), Err(ToastError::OutsideProvider)));

    let provider = ToastProvider::mount_with_ids(ToastConfig::default(), SequentialIds::new()).unwrap();
    let toasts = provider.handle();
    let id = toasts.info("first", None).unwrap();
    assert_eq!(id.as_str(), "1");

    provider.unmount();
    assert!(matches!(toasts.dismiss(&id), Err(ToastError::ProviderUnmounted)));
    assert!(matches!(toasts.snapshot(), Err(ToastError::ProviderUnmounted)));
}
