//! Shift-aware attendance engine for HR self-service.
//!
//! This crate classifies a daily check-in/check-out against the active
//! shift (present, late or half-day), validates manual attendance marks,
//! merges approved leave into day sheets and exports them as CSV.

#![warn(missing_docs)]

pub mod api;
pub mod attendance;
pub mod config;
pub mod error;
pub mod models;
