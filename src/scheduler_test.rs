use super::*;

#[test]
fn tasks_fire_in_due_order() {
    let mut sched = ManualScheduler::new();
    sched.schedule(300, "late");
    sched.schedule(100, "early");
    sched.schedule(200, "middle");

    assert_eq!(sched.next_due(1000), Some("early"));
    assert_eq!(sched.now_ms(), 100);
    assert_eq!(sched.next_due(1000), Some("middle"));
    assert_eq!(sched.next_due(1000), Some("late"));
    assert_eq!(sched.now_ms(), 300);
    assert_eq!(sched.next_due(1000), None);
    assert_eq!(sched.now_ms(), 1000);
}

#[test]
fn same_instant_keeps_scheduling_order() {
    let mut sched = ManualScheduler::new();
    sched.schedule(50, 1);
    sched.schedule(50, 2);
    sched.schedule(50, 3);
    let fired: Vec<_> = std::iter::from_fn(|| sched.next_due(50)).collect();
    assert_eq!(fired, vec![1, 2, 3]);
}

#[test]
fn nothing_fires_before_due_time() {
    let mut sched = ManualScheduler::new();
    sched.schedule(500, ());
    assert_eq!(sched.next_due(499), None);
    assert_eq!(sched.now_ms(), 499);
    assert_eq!(sched.pending_count(), 1);
    assert_eq!(sched.next_due(500), Some(()));
}

#[test]
fn delays_are_relative_to_current_clock() {
    let mut sched = ManualScheduler::new();
    assert_eq!(sched.next_due(1000), None::<u8>);
    sched.schedule(10, 7);
    assert_eq!(sched.next_due(1009), None);
    assert_eq!(sched.next_due(1010), Some(7));
}

#[test]
fn cancel_removes_pending_task_once() {
    let mut sched = ManualScheduler::new();
    let id = sched.schedule(100, "x");
    assert!(sched.is_pending(id));
    assert!(sched.cancel(id));
    assert!(!sched.is_pending(id));
    assert!(!sched.cancel(id));
    assert_eq!(sched.next_due(1000), None);
}

#[test]
fn cancel_after_fire_reports_false() {
    let mut sched = ManualScheduler::new();
    let id = sched.schedule(1, ());
    assert_eq!(sched.next_due(1), Some(()));
    assert!(!sched.cancel(id));
}

#[test]
fn clock_never_moves_backwards() {
    let mut sched = ManualScheduler::<()>::new();
    assert_eq!(sched.next_due(200), None);
    assert_eq!(sched.next_due(100), None);
    assert_eq!(sched.now_ms(), 200);
}
