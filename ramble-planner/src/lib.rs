//! Greedy walking-route planner for Ramble.
//!
//! This crate provides [`GreedyPlanner`], the default implementation of the
//! [`Planner`](ramble_core::Planner) trait. Starting from the requested
//! location it repeatedly walks to one more unvisited POI, chosen either by
//! proximity or by preference score, until the next step would overrun the
//! time budget. It then optionally closes the loop back to the start.
//!
//! Planning is deterministic: identical inputs always produce identical
//! routes, and ties are broken in favour of the earlier candidate.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod planner;

pub use planner::GreedyPlanner;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;
