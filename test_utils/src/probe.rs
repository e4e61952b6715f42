//! A minimal entity kind that records registry callbacks.

use std::cell::RefCell;
use std::rc::Rc;

use banana::{Behaviour, Body, CollisionResult, InvalidArgument};

/// Everything the registry did to one probe.
///
/// Shared through `Rc` so tests can inspect it after the probe is evicted.
#[derive(Debug, Default)]
pub struct ProbeLog {
    pub updates: u32,
    pub hits: Vec<CollisionResult>,
    pub finalised: u32,
}

/// Entity that integrates its body each tick and logs callbacks.
#[derive(Debug)]
pub struct Probe {
    pub body: Body,
    pub log: Rc<RefCell<ProbeLog>>,
    /// Marks the body done when it is hit.
    pub fragile: bool,
}

impl Probe {
    /// Wraps `body` in a probe and returns the shared log with it.
    ///
    /// # Examples
    /// ```
    /// use test_utils::{circle, Probe};
    /// let (probe, log) = Probe::new(circle((0.0, 0.0), 1.0));
    /// assert_eq!(log.borrow().updates, 0);
    /// drop(probe);
    /// ```
    pub fn new(body: Body) -> (Self, Rc<RefCell<ProbeLog>>) {
        let log = Rc::new(RefCell::new(ProbeLog::default()));
        (
            Self {
                body,
                log: Rc::clone(&log),
                fragile: false,
            },
            log,
        )
    }

    /// Same as [`Probe::new`] but the probe marks itself done when hit.
    pub fn fragile(body: Body) -> (Self, Rc<RefCell<ProbeLog>>) {
        let (mut probe, log) = Self::new(body);
        probe.fragile = true;
        (probe, log)
    }
}

impl Behaviour for Probe {
    fn body(&self) -> &Body {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    fn update(&mut self) -> Result<(), InvalidArgument> {
        self.log.borrow_mut().updates += 1;
        self.body.advance_one_tick();
        Ok(())
    }

    fn handle_collision(&mut self, _other: &Self, hit: &CollisionResult) {
        self.log.borrow_mut().hits.push(*hit);
        if self.fragile {
            self.body.mark_done();
        }
    }

    fn on_done(&mut self) {
        self.log.borrow_mut().finalised += 1;
    }
}
