//! Owning wrappers that release pooled objects on drop.
//!
//! A pool shared between owners lives behind `Rc<RefCell<_>>`; this keeps
//! the pool's lifetime explicit (it outlives every [`Pooled`] holding it)
//! and single-threaded, matching the pool's own exclusivity contract.

use std::cell::{Ref, RefCell, RefMut};
use std::fmt;
use std::rc::Rc;

use crate::handle::PoolHandle;
use crate::pool::ObjectPool;

/// An object pool shared by [`Pooled`] owners.
pub type SharedPool<T> = Rc<RefCell<ObjectPool<T>>>;

/// A pooled object with shared ownership; released when the last clone drops.
pub type SharedPooled<T> = Rc<Pooled<T>>;

/// Wraps a pool for shared use by [`Pooled`] owners.
#[must_use]
pub fn shared_pool<T>(pool: ObjectPool<T>) -> SharedPool<T> {
    Rc::new(RefCell::new(pool))
}

/// A pooled object with a single owner; its slot is released on drop.
///
/// Borrowing the object borrows the whole pool, so do not hold a
/// [`borrow_mut`](Self::borrow_mut) guard across another acquisition or drop
/// on the same pool.
pub struct Pooled<T> {
    pool: SharedPool<T>,
    handle: PoolHandle,
}

impl<T: Default> Pooled<T> {
    /// Acquires an object from `pool` with a single owner.
    #[must_use]
    pub fn acquire(pool: &SharedPool<T>) -> Self {
        let handle = pool.borrow_mut().acquire();
        Self {
            pool: Rc::clone(pool),
            handle,
        }
    }

    /// Acquires an object from `pool` with shared ownership.
    #[must_use]
    pub fn acquire_shared(pool: &SharedPool<T>) -> SharedPooled<T> {
        Rc::new(Self::acquire(pool))
    }
}

impl<T> Pooled<T> {
    /// Returns the handle of the owned object.
    #[must_use]
    pub fn handle(&self) -> PoolHandle {
        self.handle
    }

    /// Borrows the owned object.
    #[must_use]
    pub fn borrow(&self) -> Ref<'_, T> {
        let handle = self.handle;
        Ref::map(self.pool.borrow(), |pool| &pool[handle])
    }

    /// Borrows the owned object mutably.
    #[must_use]
    pub fn borrow_mut(&self) -> RefMut<'_, T> {
        let handle = self.handle;
        RefMut::map(self.pool.borrow_mut(), |pool| &mut pool[handle])
    }
}

impl<T> Drop for Pooled<T> {
    fn drop(&mut self) {
        let result = self.pool.borrow_mut().try_release(self.handle);
        if let Err(err) = result {
            // Panicking while already unwinding would abort.
            if !std::thread::panicking() {
                panic!("{err}");
            }
        }
    }
}

impl<T> fmt::Debug for Pooled<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Pooled").field(&self.handle).finish()
    }
}
