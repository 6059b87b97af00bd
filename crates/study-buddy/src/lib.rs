//! Study Buddy: find classmates with overlapping weekly availability and
//! book study sessions with them.
//!
//! The [`roster`] module is the whole domain. [`cli`] and [`server`] are two
//! front ends over it.

pub mod cli;
pub mod config;
pub mod roster;
pub mod server;
pub mod types;
