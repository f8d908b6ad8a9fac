use std::cell::RefCell;
use std::rc::Rc;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::config::SHOWCASE_SIZE;
use crate::content::ContentRecord;

/// Chooses which items the home showcase features.
pub trait Selector {
    /// Up to `n` distinct items from `items`.
    fn pick<T: Clone>(&self, items: &[T], n: usize) -> Vec<T>;
}

/// Fresh, unseeded choice on every call.
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomSelector;

impl Selector for RandomSelector {
    fn pick<T: Clone>(&self, items: &[T], n: usize) -> Vec<T> {
        let mut rng = rand::thread_rng();
        items.choose_multiple(&mut rng, n).cloned().collect()
    }
}

/// Reproducible choice for a given seed.
pub struct SeededSelector {
    rng: RefCell<StdRng>,
}

impl SeededSelector {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: RefCell::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl Selector for SeededSelector {
    fn pick<T: Clone>(&self, items: &[T], n: usize) -> Vec<T> {
        let mut rng = self.rng.borrow_mut();
        items.choose_multiple(&mut *rng, n).cloned().collect()
    }
}

/// Projects featured on the home view.
pub fn featured<S: Selector>(selector: &S, projects: &[Rc<ContentRecord>]) -> Vec<Rc<ContentRecord>> {
    selector.pick(projects, SHOWCASE_SIZE)
}
