use std::cell::Cell;
use std::rc::Rc;

/// A test value that increments a shared counter when dropped, for checking exactly when
/// containers release their elements.
#[derive(Debug)]
pub struct DropCounter(Rc<Cell<usize>>);

impl DropCounter {
    pub fn counter() -> Rc<Cell<usize>> {
        Rc::new(Cell::new(0))
    }

    pub fn new(count: &Rc<Cell<usize>>) -> DropCounter {
        DropCounter(count.clone())
    }
}

impl Drop for DropCounter {
    fn drop(&mut self) {
        self.0.set(self.0.get() + 1);
    }
}
