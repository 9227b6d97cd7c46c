//! Shortest-route server for a network of places.
//!
//! Answers "how do I get from here to there?" over places joined by
//! weighted edges that can be switched on and off, starting either from a
//! known place or from the place nearest to the caller.

pub mod config;
pub mod domain;
pub mod graph;
pub mod locate;
pub mod logging;
pub mod planner;
pub mod storage;
pub mod web;
