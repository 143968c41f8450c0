//! Appointment scheduling and resource-availability engine for salons.
//!
//! This crate decides which appointments occupy a booking slot, which staff
//! members are bookable at a branch on a given day, and whether a loyalty
//! bonus redemption is allowed. The booking UI consumes it directly or
//! through the JSON API in [`api`].

#![warn(missing_docs)]

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod scheduling;
pub mod session;
