//! Virtual-clock timer queue.
//!
//! Every session owns one `TimerQueue`. Time only moves when the owner
//! advances it, so tests step through timers deterministically and the host
//! drives the same queue from a real clock. Because the queue lives inside
//! the session, dropping the session drops every pending timer with it.

use std::collections::{BTreeMap, HashMap};
use std::time::Duration;

/// Handle for cancelling a scheduled timer. Stable across re-arms of a
/// repeating timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

/// Deadline first, then scheduling order for timers due at the same instant.
type SlotKey = (Duration, u64);

#[derive(Debug)]
struct Timer<T> {
    id: TimerId,
    task: T,
    interval: Option<Duration>,
}

#[derive(Debug)]
pub struct TimerQueue<T> {
    now: Duration,
    next_seq: u64,
    slots: BTreeMap<SlotKey, Timer<T>>,
    index: HashMap<TimerId, SlotKey>,
}

impl<T> TimerQueue<T> {
    pub fn new() -> Self {
        Self {
            now: Duration::ZERO,
            next_seq: 0,
            slots: BTreeMap::new(),
            index: HashMap::new(),
        }
    }

    /// Current virtual time, measured from queue creation.
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Run `task` once, `delay` after the current time.
    pub fn schedule_once(&mut self, delay: Duration, task: T) -> TimerId {
        let id = TimerId(self.bump_seq());
        self.insert(self.now + delay, id, task, None);
        id
    }

    /// Run `task` every `interval`, first at `now + interval`.
    ///
    /// A zero interval is raised to one millisecond so a single advance
    /// cannot fire the timer forever.
    pub fn schedule_repeating(&mut self, interval: Duration, task: T) -> TimerId {
        let interval = interval.max(Duration::from_millis(1));
        let id = TimerId(self.bump_seq());
        self.insert(self.now + interval, id, task, Some(interval));
        id
    }

    /// Cancel a timer. Returns `false` if it already fired or was cancelled.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        match self.index.remove(&id) {
            Some(key) => self.slots.remove(&key).is_some(),
            None => false,
        }
    }

    pub fn is_scheduled(&self, id: TimerId) -> bool {
        self.index.contains_key(&id)
    }

    /// Cancel everything. Returns how many timers were pending.
    pub fn clear(&mut self) -> usize {
        let pending = self.slots.len();
        self.slots.clear();
        self.index.clear();
        pending
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn next_deadline(&self) -> Option<Duration> {
        self.slots.keys().next().map(|(deadline, _)| *deadline)
    }

    /// Move the clock forward to `until` without firing anything.
    /// The clock never moves backwards.
    pub fn set_now(&mut self, until: Duration) {
        self.now = self.now.max(until);
    }

    fn bump_seq(&mut self) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        seq
    }

    fn insert(&mut self, deadline: Duration, id: TimerId, task: T, interval: Option<Duration>) {
        let key = (deadline, self.bump_seq());
        self.index.insert(id, key);
        self.slots.insert(key, Timer { id, task, interval });
    }
}

impl<T: Clone> TimerQueue<T> {
    /// Pop the earliest timer due at or before `until`.
    ///
    /// The clock jumps to that timer's deadline, so work scheduled by the
    /// caller while handling it is relative to the moment it fired. Repeating
    /// timers are re-armed before they are returned.
    pub fn pop_due(&mut self, until: Duration) -> Option<(TimerId, T)> {
        let key = *self.slots.keys().next()?;
        if key.0 > until {
            return None;
        }
        let timer = self.slots.remove(&key)?;
        self.index.remove(&timer.id);
        self.now = self.now.max(key.0);

        match timer.interval {
            Some(interval) => {
                let task = timer.task.clone();
                self.insert(key.0 + interval, timer.id, timer.task, Some(interval));
                Some((timer.id, task))
            }
            None => Some((timer.id, timer.task)),
        }
    }
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn drain<T: Clone>(queue: &mut TimerQueue<T>, until: Duration) -> Vec<T> {
        let mut fired = Vec::new();
        while let Some((_, task)) = queue.pop_due(until) {
            fired.push(task);
        }
        queue.set_now(until);
        fired
    }

    #[test]
    fn once_timer_fires_at_deadline() {
        let mut queue = TimerQueue::new();
        queue.schedule_once(ms(1000), "reply");

        assert!(drain(&mut queue, ms(999)).is_empty());
        assert_eq!(drain(&mut queue, ms(1000)), vec!["reply"]);
        assert!(queue.is_empty());
        assert_eq!(queue.now(), ms(1000));
    }

    #[test]
    fn timers_fire_in_deadline_order() {
        let mut queue = TimerQueue::new();
        queue.schedule_once(ms(300), 3);
        queue.schedule_once(ms(100), 1);
        queue.schedule_once(ms(200), 2);

        assert_eq!(drain(&mut queue, ms(1000)), vec![1, 2, 3]);
    }

    #[test]
    fn equal_deadlines_fire_in_scheduling_order() {
        let mut queue = TimerQueue::new();
        queue.schedule_once(ms(100), "first");
        queue.schedule_once(ms(100), "second");
        queue.schedule_once(ms(100), "third");

        assert_eq!(
            drain(&mut queue, ms(100)),
            vec!["first", "second", "third"]
        );
    }

    #[test]
    fn cancelled_timer_never_fires() {
        let mut queue = TimerQueue::new();
        let id = queue.schedule_once(ms(100), "cancelled");
        queue.schedule_once(ms(100), "kept");

        assert!(queue.cancel(id));
        assert!(!queue.is_scheduled(id));
        assert_eq!(drain(&mut queue, ms(500)), vec!["kept"]);
    }

    #[test]
    fn cancel_twice_returns_false() {
        let mut queue = TimerQueue::new();
        let id = queue.schedule_once(ms(100), ());
        assert!(queue.cancel(id));
        assert!(!queue.cancel(id));
    }

    #[test]
    fn cancel_after_fire_returns_false() {
        let mut queue = TimerQueue::new();
        let id = queue.schedule_once(ms(10), ());
        drain(&mut queue, ms(10));
        assert!(!queue.cancel(id));
    }

    #[test]
    fn repeating_timer_fires_once_per_interval() {
        let mut queue = TimerQueue::new();
        queue.schedule_repeating(ms(100), "tick");

        assert_eq!(drain(&mut queue, ms(350)).len(), 3);
        assert_eq!(drain(&mut queue, ms(400)).len(), 1);
        assert_eq!(queue.next_deadline(), Some(ms(500)));
    }

    #[test]
    fn repeating_timer_keeps_its_id_and_can_be_cancelled() {
        let mut queue = TimerQueue::new();
        let id = queue.schedule_repeating(ms(100), "tick");

        let (fired_id, _) = queue.pop_due(ms(100)).unwrap();
        assert_eq!(fired_id, id);
        assert!(queue.is_scheduled(id));

        assert!(queue.cancel(id));
        assert!(drain(&mut queue, ms(1000)).is_empty());
    }

    #[test]
    fn zero_interval_is_clamped() {
        let mut queue = TimerQueue::new();
        queue.schedule_repeating(Duration::ZERO, ());
        assert_eq!(drain(&mut queue, ms(5)).len(), 5);
    }

    #[test]
    fn scheduling_is_relative_to_fire_time() {
        let mut queue = TimerQueue::new();
        queue.schedule_once(ms(100), "outer");

        let (_, task) = queue.pop_due(ms(1000)).unwrap();
        assert_eq!(task, "outer");
        assert_eq!(queue.now(), ms(100));

        queue.schedule_once(ms(50), "inner");
        assert_eq!(queue.next_deadline(), Some(ms(150)));
    }

    #[test]
    fn clear_reports_pending_count() {
        let mut queue = TimerQueue::new();
        queue.schedule_once(ms(1), ());
        queue.schedule_repeating(ms(1), ());
        assert_eq!(queue.clear(), 2);
        assert!(queue.is_empty());
        assert!(queue.pop_due(ms(1000)).is_none());
    }

    #[test]
    fn clock_never_moves_backwards() {
        let mut queue: TimerQueue<()> = TimerQueue::new();
        queue.set_now(ms(500));
        queue.set_now(ms(100));
        assert_eq!(queue.now(), ms(500));
    }
}
