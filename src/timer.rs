use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;
use yew_hooks::use_unmount;

/// Holds at most one pending timer. Arming drops (and so cancels) whatever
/// was pending before.
pub struct TimerSlot<H> {
    pending: Option<H>,
}

impl<H> TimerSlot<H> {
    pub fn new() -> Self {
        Self { pending: None }
    }

    pub fn arm(&mut self, handle: H) {
        self.cancel();
        self.pending = Some(handle);
    }

    pub fn cancel(&mut self) {
        self.pending.take();
    }
}

impl<H> Default for TimerSlot<H> {
    fn default() -> Self {
        Self::new()
    }
}

/// Something that runs a callback later and can drop it before it fires.
pub trait Scheduler {
    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>);
    fn cancel(&self);
}

/// Component-owned deferred callback. Cleared when the owning component
/// unmounts, so a late timer never touches state that is gone.
#[derive(Clone)]
pub struct Deferred {
    slot: Rc<RefCell<TimerSlot<Timeout>>>,
}

impl Scheduler for Deferred {
    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) {
        let timeout = Timeout::new(delay_ms, callback);
        self.slot.borrow_mut().arm(timeout);
    }

    fn cancel(&self) {
        self.slot.borrow_mut().cancel();
    }
}

#[hook]
pub fn use_deferred() -> Deferred {
    let slot = use_mut_ref(TimerSlot::<Timeout>::new);
    {
        let slot = slot.clone();
        use_unmount(move || slot.borrow_mut().cancel());
    }
    Deferred { slot }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct FakeTimer<'a> {
        cancelled: &'a Cell<u32>,
    }

    impl Drop for FakeTimer<'_> {
        fn drop(&mut self) {
            self.cancelled.set(self.cancelled.get() + 1);
        }
    }

    #[test]
    fn arming_replaces_pending_timer() {
        let cancelled = Cell::new(0);
        let mut slot = TimerSlot::new();
        slot.arm(FakeTimer { cancelled: &cancelled });
        assert_eq!(cancelled.get(), 0);
        slot.arm(FakeTimer { cancelled: &cancelled });
        assert_eq!(cancelled.get(), 1);
        drop(slot);
        assert_eq!(cancelled.get(), 2);
    }

    #[test]
    fn cancel_clears_and_is_repeatable() {
        let cancelled = Cell::new(0);
        let mut slot = TimerSlot::new();
        slot.arm(FakeTimer { cancelled: &cancelled });
        slot.cancel();
        slot.cancel();
        assert_eq!(cancelled.get(), 1);
        drop(slot);
        assert_eq!(cancelled.get(), 1);
    }

    #[test]
    fn dropping_slot_cancels_pending() {
        let cancelled = Cell::new(0);
        {
            let mut slot = TimerSlot::new();
            slot.arm(FakeTimer { cancelled: &cancelled });
        }
        assert_eq!(cancelled.get(), 1);
    }
}
