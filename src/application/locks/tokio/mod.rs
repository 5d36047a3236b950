//! Provides simplified tokio lock types for sharing data between tasks

mod atomic_rw;

pub use atomic_rw::AtomicRw;
pub use atomic_rw::AtomicRwReadGuard;
pub use atomic_rw::AtomicRwWriteGuard;
