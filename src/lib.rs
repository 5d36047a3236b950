// If code coverage tool `cargo-llvm-cov` is running with the nightly toolchain,
// enable the unstable “coverage” attribute. This allows using the annotation
// `#[coverage(off)]` to explicitly exclude certain parts of the code from
// being considered as “code under test.” Most prominently, the annotation
// should be added to every `#[cfg(test)]` module. Since the “coverage”
// feature is enable only conditionally, the annotation to use is:
// `#[cfg_attr(coverage_nightly, coverage(off))]`.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![deny(clippy::shadow_unrelated)]

//! Typed async client for the JSON-RPC interface of an Elements daemon.

pub mod application;
pub mod macros;
pub mod prelude;
pub mod units;
