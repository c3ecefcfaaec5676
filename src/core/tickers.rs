use std::cell::RefCell;
use std::rc::Rc;

/// A frame loop the page runtime can pause, restart and tear down.
pub trait FrameLoop {
    fn start(&self);
    fn stop(&self);
    fn dispose(&self);
}

/// Loops owned by the page runtime.
///
/// Continuous loops run for the life of the page. On-demand loops are started
/// by hover events and end on their own; resuming them after a hidden tab lets
/// a loop that was cut off mid-hover or mid-settle finish, while an idle one
/// stops again on its first frame.
pub struct LoopRegistry<L: FrameLoop> {
    continuous: RefCell<Vec<Rc<L>>>,
    on_demand: RefCell<Vec<Rc<L>>>,
}

impl<L: FrameLoop> Default for LoopRegistry<L> {
    fn default() -> Self {
        Self {
            continuous: RefCell::new(Vec::new()),
            on_demand: RefCell::new(Vec::new()),
        }
    }
}

impl<L: FrameLoop> LoopRegistry<L> {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn add_continuous(&self, ticker: Rc<L>) {
        self.continuous.borrow_mut().push(ticker);
    }

    pub fn add_on_demand(&self, ticker: Rc<L>) {
        self.on_demand.borrow_mut().push(ticker);
    }

    pub fn len(&self) -> usize {
        self.continuous.borrow().len() + self.on_demand.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn suspend(&self) {
        for t in self.continuous.borrow().iter() {
            t.stop();
        }
        for t in self.on_demand.borrow().iter() {
            t.stop();
        }
    }

    pub fn resume(&self) {
        for t in self.continuous.borrow().iter() {
            t.start();
        }
        for t in self.on_demand.borrow().iter() {
            t.start();
        }
    }

    /// Dispose every loop and forget it; returns how many were disposed.
    pub fn dispose_all(&self) -> usize {
        let continuous = std::mem::take(&mut *self.continuous.borrow_mut());
        let on_demand = std::mem::take(&mut *self.on_demand.borrow_mut());
        for t in continuous.iter().chain(on_demand.iter()) {
            t.dispose();
        }
        continuous.len() + on_demand.len()
    }
}
