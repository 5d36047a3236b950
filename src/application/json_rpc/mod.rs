pub mod binding;
pub mod blocking;
pub mod core;
