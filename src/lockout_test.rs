use super::*;
use crate::scheduler::ManualScheduler;

#[derive(Debug)]
struct FakeButton {
    disabled: bool,
    content: String,
}

impl FakeButton {
    fn new(content: &str) -> Self {
        Self { disabled: false, content: content.to_owned() }
    }
}

impl SubmitControl for FakeButton {
    fn is_disabled(&self) -> bool {
        self.disabled
    }

    fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    fn content(&self) -> String {
        self.content.clone()
    }

    fn set_content(&mut self, markup: &str) {
        markup.clone_into(&mut self.content);
    }
}

fn fire_until(
    lockout: &mut SubmitLockout,
    button: &mut FakeButton,
    sched: &mut ManualScheduler<LockoutExpired>,
    until_ms: u64,
) -> Vec<bool> {
    std::iter::from_fn(|| sched.next_due(until_ms)).map(|t| lockout.on_timer(t, button)).collect()
}

#[test]
fn submit_disables_and_shows_spinner() {
    let mut lockout = SubmitLockout::new(&UiConfig::default());
    let mut sched = ManualScheduler::new();
    let mut button = FakeButton::new("Sign in");

    assert_eq!(lockout.on_submit(&mut button, &mut sched), SubmitOutcome::Locked);
    assert!(button.disabled);
    assert_eq!(button.content, LOADING_MARKUP);
    assert!(lockout.is_pending());
    assert_eq!(sched.pending_count(), 1);
}

#[test]
fn button_restores_after_timeout() {
    let mut lockout = SubmitLockout::new(&UiConfig::default());
    let mut sched = ManualScheduler::new();
    let mut button = FakeButton::new("Sign in");
    lockout.on_submit(&mut button, &mut sched);

    assert!(fire_until(&mut lockout, &mut button, &mut sched, 9999).is_empty());
    assert!(button.disabled);

    assert_eq!(fire_until(&mut lockout, &mut button, &mut sched, 10_000), vec![true]);
    assert!(!button.disabled);
    assert_eq!(button.content, "Sign in");
    assert!(!lockout.is_pending());
}

#[test]
fn second_submit_while_disabled_is_ignored() {
    let mut lockout = SubmitLockout::new(&UiConfig::default());
    let mut sched = ManualScheduler::new();
    let mut button = FakeButton::new("Register");
    lockout.on_submit(&mut button, &mut sched);
    assert_eq!(sched.next_due(3000), None);

    assert_eq!(lockout.on_submit(&mut button, &mut sched), SubmitOutcome::Ignored);
    assert_eq!(sched.pending_count(), 1);

    // Still restores on the original schedule, with the original content.
    assert_eq!(fire_until(&mut lockout, &mut button, &mut sched, 10_000), vec![true]);
    assert_eq!(sched.now_ms(), 10_000);
    assert_eq!(button.content, "Register");
}

#[test]
fn timer_leaves_externally_enabled_button_alone() {
    let mut lockout = SubmitLockout::new(&UiConfig::default());
    let mut sched = ManualScheduler::new();
    let mut button = FakeButton::new("Save");
    lockout.on_submit(&mut button, &mut sched);

    button.disabled = false;
    button.content = "Saved".to_owned();

    assert_eq!(fire_until(&mut lockout, &mut button, &mut sched, 20_000), vec![false]);
    assert_eq!(button.content, "Saved");
}

#[test]
fn resubmit_after_external_enable_replaces_stale_timer() {
    let mut lockout = SubmitLockout::new(&UiConfig::default());
    let mut sched = ManualScheduler::new();
    let mut button = FakeButton::new("Save");
    lockout.on_submit(&mut button, &mut sched);
    assert_eq!(sched.next_due(4000), None);

    button.disabled = false;
    button.content = "Save again".to_owned();
    assert_eq!(lockout.on_submit(&mut button, &mut sched), SubmitOutcome::Locked);
    assert_eq!(sched.pending_count(), 1);

    assert!(fire_until(&mut lockout, &mut button, &mut sched, 13_999).is_empty());
    assert_eq!(fire_until(&mut lockout, &mut button, &mut sched, 14_000), vec![true]);
    assert_eq!(button.content, "Save again");
}

#[test]
fn cancel_drops_timer_but_keeps_button_locked() {
    let mut lockout = SubmitLockout::new(&UiConfig::default());
    let mut sched = ManualScheduler::new();
    let mut button = FakeButton::new("Go");
    lockout.on_submit(&mut button, &mut sched);

    assert!(lockout.cancel(&mut sched));
    assert!(!lockout.cancel(&mut sched));
    assert_eq!(sched.pending_count(), 0);
    assert!(fire_until(&mut lockout, &mut button, &mut sched, 20_000).is_empty());
    assert!(button.disabled);
}

#[test]
fn stale_generation_is_ignored() {
    let mut lockout = SubmitLockout::new(&UiConfig::default());
    let mut sched = ManualScheduler::new();
    let mut button = FakeButton::new("Go");
    lockout.on_submit(&mut button, &mut sched);

    assert!(!lockout.on_timer(LockoutExpired(99), &mut button));
    assert!(lockout.is_pending());
    assert!(button.disabled);
}

#[test]
fn configured_timeout_is_used() {
    let config = UiConfig { lockout_ms: 250, ..UiConfig::default() };
    let mut lockout = SubmitLockout::new(&config);
    let mut sched = ManualScheduler::new();
    let mut button = FakeButton::new("Go");
    lockout.on_submit(&mut button, &mut sched);
    assert_eq!(fire_until(&mut lockout, &mut button, &mut sched, 250), vec![true]);
}

#[test]
fn release_after_cancel_restores_original_content() {
    let mut lockout = SubmitLockout::new(&UiConfig::default());
    let mut sched = ManualScheduler::new();
    let mut button = FakeButton::new("Sign in");
    lockout.on_submit(&mut button, &mut sched);
    lockout.cancel(&mut sched);

    assert!(lockout.release(&mut button, &mut sched));
    assert!(!button.disabled);
    assert_eq!(button.content, "Sign in");
    assert!(!lockout.release(&mut button, &mut sched));
}

#[test]
fn release_cancels_pending_timer() {
    let mut lockout = SubmitLockout::new(&UiConfig::default());
    let mut sched = ManualScheduler::new();
    let mut button = FakeButton::new("Sign in");
    lockout.on_submit(&mut button, &mut sched);

    assert!(lockout.release(&mut button, &mut sched));
    assert_eq!(sched.pending_count(), 0);
    assert!(!lockout.is_pending());
}

#[test]
fn release_without_lock_is_noop() {
    let mut lockout = SubmitLockout::new(&UiConfig::default());
    let mut sched = ManualScheduler::new();
    let mut button = FakeButton::new("Sign in");
    assert!(!lockout.release(&mut button, &mut sched));
    assert_eq!(button.content, "Sign in");
}
