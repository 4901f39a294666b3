//! Trailing-edge debounce of search input into a query parameter.
//!
//! [`DebouncedSearch`] owns at most one pending timer. Every keystroke cancels
//! that timer and arms a new one with the full delay; only a timer that fires
//! without being superseded commits. Timers come from a [`TimerDriver`] so the
//! state machine runs unchanged against browser timeouts or [`ManualTimers`].

use std::{
    cell::RefCell,
    rc::{Rc, Weak},
    time::Duration,
};

use leptos::logging;
use thiserror::Error;

use crate::config::SearchConfig;
use crate::query::QueryParamStore;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Failures arming a timer.
pub enum TimerError {
    /// The host refused to schedule the callback.
    #[error("timer scheduling failed: {0}")]
    Schedule(String),
}

/// Cancelable handle for one scheduled callback.
pub trait PendingTimer {
    /// Prevents the callback from running. Idempotent once the timer has fired.
    fn cancel(self: Box<Self>);
}

/// Source of one-shot deferred callbacks.
pub trait TimerDriver {
    /// Runs `task` once after `delay` unless the returned handle is cancelled.
    fn schedule(
        &self,
        delay: Duration,
        task: Box<dyn FnOnce()>,
    ) -> Result<Box<dyn PendingTimer>, TimerError>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Browser `setTimeout` driver.
pub struct BrowserTimers;

struct BrowserTimeout(leptos::leptos_dom::helpers::TimeoutHandle);

impl PendingTimer for BrowserTimeout {
    fn cancel(self: Box<Self>) {
        self.0.clear();
    }
}

impl TimerDriver for BrowserTimers {
    fn schedule(
        &self,
        delay: Duration,
        task: Box<dyn FnOnce()>,
    ) -> Result<Box<dyn PendingTimer>, TimerError> {
        leptos::set_timeout_with_handle(task, delay)
            .map(|handle| Box::new(BrowserTimeout(handle)) as Box<dyn PendingTimer>)
            .map_err(|err| TimerError::Schedule(format!("{err:?}")))
    }
}

struct ManualEntry {
    id: u64,
    due: Duration,
    task: Box<dyn FnOnce()>,
}

#[derive(Default)]
struct ManualQueue {
    now: Duration,
    next_id: u64,
    entries: Vec<ManualEntry>,
}

#[derive(Clone, Default)]
/// Deterministic driver whose clock only moves through [`ManualTimers::advance`].
pub struct ManualTimers {
    queue: Rc<RefCell<ManualQueue>>,
}

impl ManualTimers {
    /// Time elapsed on the manual clock.
    pub fn now(&self) -> Duration {
        self.queue.borrow().now
    }

    /// Number of scheduled, not yet fired, callbacks.
    pub fn pending(&self) -> usize {
        self.queue.borrow().entries.len()
    }

    /// Moves the clock forward, firing due callbacks in deadline order.
    ///
    /// Callbacks scheduled by a firing callback run in the same call if they
    /// fall due before the target time.
    pub fn advance(&self, by: Duration) {
        let target = self.now() + by;
        loop {
            let next = {
                let mut queue = self.queue.borrow_mut();
                let position = queue
                    .entries
                    .iter()
                    .enumerate()
                    .filter(|(_, entry)| entry.due <= target)
                    .min_by_key(|(_, entry)| (entry.due, entry.id))
                    .map(|(position, _)| position);
                position.map(|position| {
                    let entry = queue.entries.remove(position);
                    queue.now = entry.due;
                    entry.task
                })
            };
            match next {
                Some(task) => task(),
                None => break,
            }
        }
        self.queue.borrow_mut().now = target;
    }
}

struct ManualTimeout {
    id: u64,
    queue: Weak<RefCell<ManualQueue>>,
}

impl PendingTimer for ManualTimeout {
    fn cancel(self: Box<Self>) {
        if let Some(queue) = self.queue.upgrade() {
            queue.borrow_mut().entries.retain(|entry| entry.id != self.id);
        }
    }
}

impl TimerDriver for ManualTimers {
    fn schedule(
        &self,
        delay: Duration,
        task: Box<dyn FnOnce()>,
    ) -> Result<Box<dyn PendingTimer>, TimerError> {
        let mut queue = self.queue.borrow_mut();
        let id = queue.next_id;
        queue.next_id += 1;
        let due = queue.now + delay;
        queue.entries.push(ManualEntry { id, due, task });
        Ok(Box::new(ManualTimeout {
            id,
            queue: Rc::downgrade(&self.queue),
        }))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// Observable state of a search field.
pub struct SearchState {
    /// Text currently in the field; updated on every keystroke.
    pub raw_input: String,
    /// Last settled value, or the initial external value before any commit.
    pub committed_value: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Debounce phase.
pub enum DebouncePhase {
    /// No commit scheduled.
    Idle,
    /// A commit is scheduled.
    Pending,
}

type CommitObserver = Rc<dyn Fn(&str)>;

struct SearchCore {
    state: SearchState,
    config: SearchConfig,
    pending: Option<Box<dyn PendingTimer>>,
    generation: u64,
    disposed: bool,
    observers: Vec<CommitObserver>,
}

impl SearchCore {
    fn cancel_pending(&mut self) -> bool {
        self.generation += 1;
        match self.pending.take() {
            Some(timer) => {
                timer.cancel();
                true
            }
            None => false,
        }
    }
}

#[derive(Clone)]
/// Debounced search state machine; clones share one instance.
pub struct DebouncedSearch {
    core: Rc<RefCell<SearchCore>>,
    timers: Rc<dyn TimerDriver>,
    store: Rc<dyn QueryParamStore>,
}

impl DebouncedSearch {
    /// Mounts a search field, seeding it from the external parameter when
    /// committing to the query string.
    pub fn new(
        timers: Rc<dyn TimerDriver>,
        store: Rc<dyn QueryParamStore>,
        config: SearchConfig,
    ) -> Self {
        let committed_value = if config.add_to_param {
            store.get_param(&config.param_key)
        } else {
            None
        };
        let state = SearchState {
            raw_input: committed_value.clone().unwrap_or_default(),
            committed_value,
        };
        Self {
            core: Rc::new(RefCell::new(SearchCore {
                state,
                config,
                pending: None,
                generation: 0,
                disposed: false,
                observers: Vec::new(),
            })),
            timers,
            store,
        }
    }

    /// Registers a callback run after every commit with the committed value.
    pub fn on_commit(&self, observer: impl Fn(&str) + 'static) {
        self.core.borrow_mut().observers.push(Rc::new(observer));
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> SearchState {
        self.core.borrow().state.clone()
    }

    /// Current configuration.
    pub fn config(&self) -> SearchConfig {
        self.core.borrow().config.clone()
    }

    /// Whether a commit is scheduled.
    pub fn phase(&self) -> DebouncePhase {
        if self.core.borrow().pending.is_some() {
            DebouncePhase::Pending
        } else {
            DebouncePhase::Idle
        }
    }

    /// Records a keystroke and restarts the debounce window.
    pub fn input(&self, value: impl Into<String>) {
        {
            let mut core = self.core.borrow_mut();
            if core.disposed {
                return;
            }
            core.state.raw_input = value.into();
        }
        self.arm();
    }

    /// Applies new settings. A pending commit is cancelled and re-armed with
    /// the new settings; an idle field stays idle.
    pub fn reconfigure(&self, config: SearchConfig) {
        let rearm = {
            let mut core = self.core.borrow_mut();
            if core.disposed || core.config == config {
                return;
            }
            core.config = config;
            core.cancel_pending()
        };
        if rearm {
            self.arm();
        }
    }

    /// Tears the field down; a pending commit never fires.
    pub fn dispose(&self) {
        let mut core = self.core.borrow_mut();
        core.disposed = true;
        core.cancel_pending();
        core.observers.clear();
    }

    fn arm(&self) {
        let (generation, delay) = {
            let mut core = self.core.borrow_mut();
            core.cancel_pending();
            (core.generation, core.config.debounce_delay())
        };
        let core = Rc::downgrade(&self.core);
        let store = Rc::clone(&self.store);
        let task = Box::new(move || {
            if let Some(core) = core.upgrade() {
                commit(&core, store.as_ref(), generation);
            }
        });
        match self.timers.schedule(delay, task) {
            Ok(timer) => self.core.borrow_mut().pending = Some(timer),
            Err(err) => logging::warn!("search debounce schedule failed: {err}"),
        }
    }
}

fn commit(core: &RefCell<SearchCore>, store: &dyn QueryParamStore, generation: u64) {
    let (value, config, observers) = {
        let mut core = core.borrow_mut();
        if core.disposed || core.generation != generation {
            return;
        }
        core.pending = None;
        let value = core.state.raw_input.clone();
        core.state.committed_value = Some(value.clone());
        (value, core.config.clone(), core.observers.clone())
    };

    if config.add_to_param {
        if let Err(err) = store.set_param(&config.param_key, &value) {
            logging::warn!("search parameter `{}` write failed: {err}", config.param_key);
        }
    }
    for observer in observers {
        observer(&value);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::query::MemoryQueryParams;

    const DELAY: Duration = Duration::from_millis(500);

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    fn mount(config: SearchConfig) -> (DebouncedSearch, ManualTimers, MemoryQueryParams) {
        let timers = ManualTimers::default();
        let store = MemoryQueryParams::default();
        let search = DebouncedSearch::new(
            Rc::new(timers.clone()),
            Rc::new(store.clone()),
            config,
        );
        (search, timers, store)
    }

    fn committed(search: &DebouncedSearch) -> Rc<RefCell<Vec<String>>> {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        search.on_commit(move |value| sink.borrow_mut().push(value.to_string()));
        seen
    }

    fn writes(values: &[&str]) -> Vec<(String, String)> {
        values
            .iter()
            .map(|value| ("search".to_string(), value.to_string()))
            .collect()
    }

    #[test]
    fn burst_of_keystrokes_commits_once_with_the_last_value() {
        let (search, timers, store) = mount(SearchConfig::default());
        let seen = committed(&search);

        search.input("a");
        timers.advance(ms(200));
        search.input("ab");
        timers.advance(ms(200));
        search.input("abc");
        assert_eq!(search.phase(), DebouncePhase::Pending);
        assert_eq!(search.state().raw_input, "abc");
        assert_eq!(search.state().committed_value, None);

        timers.advance(ms(499));
        assert!(seen.borrow().is_empty());
        timers.advance(ms(1));

        assert_eq!(*seen.borrow(), vec!["abc".to_string()]);
        assert_eq!(store.writes(), writes(&["abc"]));
        assert_eq!(search.phase(), DebouncePhase::Idle);
        assert_eq!(search.state().committed_value, Some("abc".to_string()));
    }

    #[test]
    fn settled_keystrokes_commit_separately() {
        let (search, timers, store) = mount(SearchConfig::default());

        search.input("a");
        timers.advance(ms(600));
        search.input("ab");
        timers.advance(ms(600));

        assert_eq!(store.writes(), writes(&["a", "ab"]));
    }

    #[test]
    fn dispose_before_the_deadline_commits_nothing() {
        let (search, timers, store) = mount(SearchConfig::default());
        let seen = committed(&search);

        search.input("abc");
        search.dispose();
        timers.advance(ms(2_000));

        assert!(seen.borrow().is_empty());
        assert!(store.writes().is_empty());
        assert_eq!(timers.pending(), 0);

        search.input("ignored");
        assert_eq!(search.state().raw_input, "abc");
        assert_eq!(timers.pending(), 0);
    }

    #[test]
    fn dropping_every_handle_never_commits() {
        let (search, timers, store) = mount(SearchConfig::default());
        search.input("abc");
        drop(search);
        timers.advance(ms(1_000));
        assert!(store.writes().is_empty());
    }

    #[test]
    fn local_echo_never_touches_the_query_store() {
        let (search, timers, store) = mount(SearchConfig {
            add_to_param: false,
            ..SearchConfig::default()
        });
        let seen = committed(&search);

        search.input("abc");
        timers.advance(DELAY);

        assert_eq!(*seen.borrow(), vec!["abc".to_string()]);
        assert_eq!(search.state().committed_value, Some("abc".to_string()));
        assert!(store.writes().is_empty());
    }

    #[test]
    fn empty_input_commits_an_empty_parameter() {
        let (search, timers, store) = mount(SearchConfig::default());

        search.input("abc");
        timers.advance(DELAY);
        search.input("");
        timers.advance(DELAY);

        assert_eq!(store.writes(), writes(&["abc", ""]));
        assert_eq!(store.get_param("search"), Some(String::new()));
    }

    #[test]
    fn mount_seeds_from_the_external_parameter() {
        let timers = ManualTimers::default();
        let store = MemoryQueryParams::default().with_param("search", "shoes");
        let search = DebouncedSearch::new(
            Rc::new(timers),
            Rc::new(store),
            SearchConfig::default(),
        );

        assert_eq!(
            search.state(),
            SearchState {
                raw_input: "shoes".to_string(),
                committed_value: Some("shoes".to_string()),
            }
        );
        assert_eq!(search.phase(), DebouncePhase::Idle);
    }

    #[test]
    fn delay_change_mid_typing_restarts_with_the_new_window() {
        let (search, timers, store) = mount(SearchConfig::default());

        search.input("ab");
        timers.advance(ms(400));
        search.reconfigure(SearchConfig {
            debounce_delay_ms: 200,
            ..SearchConfig::default()
        });
        assert_eq!(timers.pending(), 1);

        timers.advance(ms(199));
        assert!(store.writes().is_empty());
        timers.advance(ms(1));
        assert_eq!(store.writes(), writes(&["ab"]));

        search.input("abc");
        timers.advance(ms(200));
        assert_eq!(store.writes(), writes(&["ab", "abc"]));
    }

    #[test]
    fn flipping_add_to_param_while_pending_uses_the_new_target() {
        let (search, timers, store) = mount(SearchConfig::default());
        let seen = committed(&search);

        search.input("abc");
        timers.advance(ms(300));
        search.reconfigure(SearchConfig {
            add_to_param: false,
            ..SearchConfig::default()
        });
        timers.advance(DELAY);

        assert_eq!(*seen.borrow(), vec!["abc".to_string()]);
        assert!(store.writes().is_empty());
    }

    #[test]
    fn reconfiguring_an_idle_field_schedules_nothing() {
        let (search, timers, _store) = mount(SearchConfig::default());
        search.reconfigure(SearchConfig {
            debounce_delay_ms: 50,
            ..SearchConfig::default()
        });
        assert_eq!(timers.pending(), 0);
        assert_eq!(search.config().debounce_delay_ms, 50);
    }

    #[test]
    fn manual_timers_fire_in_deadline_order() {
        let timers = ManualTimers::default();
        let order = Rc::new(RefCell::new(Vec::new()));
        for (label, delay) in [("late", 30), ("early", 10), ("middle", 20)] {
            let order = Rc::clone(&order);
            let _ = timers
                .schedule(ms(delay), Box::new(move || order.borrow_mut().push(label)))
                .expect("schedule");
        }
        timers.advance(ms(25));
        assert_eq!(*order.borrow(), vec!["early", "middle"]);
        assert_eq!(timers.now(), ms(25));
        assert_eq!(timers.pending(), 1);
    }
}
