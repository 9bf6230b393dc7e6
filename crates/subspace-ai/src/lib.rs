//! Adversary AI for SUBSPACE.
//!
//! Implements the pursuit-and-hold-range controller that steers
//! adversary craft, and the behavioural profile that tunes it.

pub mod profile;
pub mod pursuit;

pub use subspace_core as core;

#[cfg(test)]
mod tests;
