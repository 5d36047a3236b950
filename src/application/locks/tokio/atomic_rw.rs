use std::ops::Deref;
use std::ops::DerefMut;
use std::sync::Arc;

use tokio::sync::RwLock;
use tokio::sync::RwLockReadGuard;
use tokio::sync::RwLockWriteGuard;
use tracing::trace;

/// An `Arc<RwLock<T>>` wrapper to make data thread-safe and easy to work with.
///
/// # Examples
/// ```
/// # use elements_rpc::application::locks::tokio::AtomicRw;
/// struct Node {
///     port: u16,
/// };
/// # tokio_test::block_on(async {
/// let atomic_node = AtomicRw::from(Node { port: 16885 });
/// atomic_node.lock(|n| println!("port: {}", n.port)).await;
/// atomic_node.lock_mut(|n| n.port = 18884).await;
/// # })
/// ```
///
/// A name can be given at construction; acquisitions are then traced under
/// that name.
#[derive(Debug)]
pub struct AtomicRw<T> {
    inner: Arc<RwLock<T>>,
    name: Option<String>,
}

impl<T: Default> Default for AtomicRw<T> {
    fn default() -> Self {
        Self {
            inner: Default::default(),
            name: None,
        }
    }
}

impl<T> From<T> for AtomicRw<T> {
    #[inline]
    fn from(t: T) -> Self {
        Self {
            inner: Arc::new(RwLock::new(t)),
            name: None,
        }
    }
}

impl<T> From<(T, Option<&str>)> for AtomicRw<T> {
    /// Create from a value and an optional lock name.
    #[inline]
    fn from(v: (T, Option<&str>)) -> Self {
        Self {
            inner: Arc::new(RwLock::new(v.0)),
            name: v.1.map(|s| s.to_owned()),
        }
    }
}

impl<T> Clone for AtomicRw<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            name: self.name.clone(),
        }
    }
}

impl<T> AtomicRw<T> {
    /// Acquire read lock and return an `AtomicRwReadGuard`
    pub async fn lock_guard(&self) -> AtomicRwReadGuard<'_, T> {
        self.log_acquire("read");
        AtomicRwReadGuard {
            guard: self.inner.read().await,
        }
    }

    /// Acquire write lock and return an `AtomicRwWriteGuard`
    pub async fn lock_guard_mut(&self) -> AtomicRwWriteGuard<'_, T> {
        self.log_acquire("write");
        AtomicRwWriteGuard {
            guard: self.inner.write().await,
        }
    }

    /// Immutably access the data of type `T` in a closure and possibly return a result of type `R`
    ///
    /// The read lock is released when the closure returns.
    pub async fn lock<R, F>(&self, f: F) -> R
    where
        F: FnOnce(&T) -> R,
    {
        let guard = self.lock_guard().await;
        f(&guard)
    }

    /// Mutably access the data of type `T` in a closure and possibly return a result of type `R`
    pub async fn lock_mut<R, F>(&self, f: F) -> R
    where
        F: FnOnce(&mut T) -> R,
    {
        let mut guard = self.lock_guard_mut().await;
        f(&mut guard)
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn log_acquire(&self, acquisition: &str) {
        if let Some(name) = &self.name {
            trace!(lock = name.as_str(), acquisition, "acquiring lock");
        }
    }
}

/// A wrapper for [RwLockReadGuard](tokio::sync::RwLockReadGuard)
#[derive(Debug)]
pub struct AtomicRwReadGuard<'a, T> {
    guard: RwLockReadGuard<'a, T>,
}

impl<T> Deref for AtomicRwReadGuard<'_, T> {
    type Target = T;
    fn deref(&self) -> &Self::Target {
        &self.guard
    }
}

/// A wrapper for [RwLockWriteGuard](tokio::sync::RwLockWriteGuard)
#[derive(Debug)]
pub struct AtomicRwWriteGuard<'a, T> {
    guard: RwLockWriteGuard<'a, T>,
}

impl<T> Deref for AtomicRwWriteGuard<'_, T> {
    type Target = T;
    fn deref(&self) -> &Self::Target {
        &self.guard
    }
}

impl<T> DerefMut for AtomicRwWriteGuard<'_, T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.guard
    }
}
