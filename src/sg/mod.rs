//! Shoot & Go (random-restart local search).
//!
//! Repeatedly shoots a uniformly random point into the domain, then
//! descends through distance-1 neighborhoods for as long as strict
//! improvement lasts. Restarting from fresh random points lets the
//! search leave the attraction basin of a local optimum it has already
//! exploited. With descent disabled the method degenerates to pure
//! Random Shooting.
//!
//! # References
//!
//! - Martí, Resende & Ribeiro (2013), "Multi-start methods for
//!   combinatorial optimization"
//! - Hoos & Stützle (2005), "Stochastic Local Search: Foundations and
//!   Applications"

mod config;
mod runner;

pub use config::{DescentRule, SgConfig};
pub use runner::SgRunner;
