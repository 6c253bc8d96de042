//! End-to-end flow: producer publishes on the channel, a listener feeds the
//! sync indicator, and the top bar view reflects store and sync state.

use coldvault_core::models::Account;
use coldvault_core::top_bar::TopBarView;
use coldvault_core::{Action, DotColor, LifecycleMessage, MessageChannel, Store, SyncIndicator};

fn drain(subscription: &mut coldvault_core::Subscription, indicator: &mut SyncIndicator) {
    while let Some(message) = subscription.try_next() {
        indicator.apply(message);
    }
}

#[test]
fn progress_then_fail_with_accounts() {
    let store = Store::new(vec![Account::new("Main", "BTC")], false);
    let channel = MessageChannel::default();
    let mut subscription = channel.subscribe();
    let mut indicator = SyncIndicator::new();

    channel.publish_raw(r#"{"type":"accounts.sync.progress"}"#);
    drain(&mut subscription, &mut indicator);
    let view = TopBarView::from_store(&store, &indicator);
    assert_eq!(view.indicator, Some(DotColor::Blue));
    assert!(!indicator.flags().failed);

    channel.publish_raw(r#"{"type":"accounts.sync.fail"}"#);
    drain(&mut subscription, &mut indicator);
    let view = TopBarView::from_store(&store, &indicator);
    assert_eq!(view.indicator, Some(DotColor::Red));
    assert_eq!(indicator.flags().in_progress, None);
}

#[test]
fn unrecognized_message_keeps_previous_color() {
    let store = Store::new(vec![Account::new("Main", "BTC")], false);
    let channel = MessageChannel::default();
    let mut subscription = channel.subscribe();
    let mut indicator = SyncIndicator::new();

    channel.publish(LifecycleMessage::SyncFail);
    channel.publish_raw(r#"{"type":"accounts.sync.cancelled"}"#);
    drain(&mut subscription, &mut indicator);

    assert_eq!(
        TopBarView::from_store(&store, &indicator).indicator,
        Some(DotColor::Red)
    );
}

#[test]
fn no_indicator_without_accounts() {
    let store = Store::new(Vec::new(), true);
    let channel = MessageChannel::default();
    let mut subscription = channel.subscribe();
    let mut indicator = SyncIndicator::new();

    channel.publish(LifecycleMessage::SyncProgress);
    drain(&mut subscription, &mut indicator);

    assert_eq!(TopBarView::from_store(&store, &indicator).indicator, None);
}

#[test]
fn no_lock_control_without_password() {
    let mut store = Store::new(vec![Account::new("Main", "BTC")], false);
    let view = TopBarView::from_store(&store, &SyncIndicator::new());
    assert!(!view.show_lock);
    assert!(!store.dispatch(Action::Lock));
    assert!(!store.is_locked());
}

#[test]
fn released_listener_ignores_later_messages() {
    let channel = MessageChannel::default();
    let mut indicator = SyncIndicator::new();
    let mut subscription = channel.subscribe();
    channel.publish(LifecycleMessage::SyncSuccess);
    drain(&mut subscription, &mut indicator);
    drop(subscription);

    assert_eq!(channel.publish(LifecycleMessage::SyncFail), 0);
    assert_eq!(indicator.dot_color(), DotColor::Green);
    assert!(indicator.has_completed());
}
