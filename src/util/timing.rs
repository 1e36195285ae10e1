//! Debounce and throttle for noisy UI events (search boxes, scroll, resize).
//!
//! The gates hold the decision logic; the browser wrappers add the clock
//! and timers.

#[cfg(test)]
#[path = "timing_test.rs"]
mod timing_test;

use std::cell::RefCell;

/// Trailing-edge debounce bookkeeping: every arm supersedes the tickets
/// handed out before it, so only the last call in a burst fires.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DebounceGate {
    generation: u64,
}

impl DebounceGate {
    pub fn arm(&mut self) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.generation
    }

    pub fn should_fire(&self, ticket: u64) -> bool {
        ticket == self.generation
    }
}

/// Leading-edge throttle: admits a call, then rejects calls until
/// `limit_ms` has passed.
#[derive(Clone, Debug, PartialEq)]
pub struct ThrottleGate {
    limit_ms: f64,
    reopens_at: Option<f64>,
}

impl ThrottleGate {
    pub fn new(limit_ms: u32) -> Self {
        Self { limit_ms: f64::from(limit_ms), reopens_at: None }
    }

    pub fn admit(&mut self, now_ms: f64) -> bool {
        if self.reopens_at.is_some_and(|at| now_ms < at) {
            return false;
        }
        self.reopens_at = Some(now_ms + self.limit_ms);
        true
    }
}

/// Throttled invoker.
#[derive(Debug)]
pub struct Throttle {
    gate: RefCell<ThrottleGate>,
}

impl Throttle {
    pub fn new(limit_ms: u32) -> Self {
        Self { gate: RefCell::new(ThrottleGate::new(limit_ms)) }
    }

    /// Run `f` if the gate admits a call at `now_ms`. Returns whether it ran.
    pub fn call_at(&self, now_ms: f64, f: impl FnOnce()) -> bool {
        let admitted = self.gate.borrow_mut().admit(now_ms);
        if admitted {
            f();
        }
        admitted
    }

    /// Run `f` if the gate admits a call now.
    #[cfg(feature = "hydrate")]
    pub fn call(&self, f: impl FnOnce()) -> bool {
        self.call_at(js_sys::Date::now(), f)
    }
}

/// Debounced invoker: `call` schedules `f` after `wait_ms`, dropping any
/// call still waiting.
#[cfg(feature = "hydrate")]
#[derive(Debug)]
pub struct Debouncer {
    wait_ms: u32,
    gate: std::rc::Rc<RefCell<DebounceGate>>,
}

#[cfg(feature = "hydrate")]
impl Debouncer {
    pub fn new(wait_ms: u32) -> Self {
        Self { wait_ms, gate: std::rc::Rc::default() }
    }

    pub fn call(&self, f: impl FnOnce() + 'static) {
        let ticket = self.gate.borrow_mut().arm();
        let gate = std::rc::Rc::clone(&self.gate);
        gloo_timers::callback::Timeout::new(self.wait_ms, move || {
            if gate.borrow().should_fire(ticket) {
                f();
            }
        })
        .forget();
    }
}
