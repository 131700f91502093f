//! # Domain Models
//!
//! Plain data for the catalog: the content records ([`models::Engine`], [`models::Game`]),
//! the service configuration and a few shared constants.
//! Keep it lean: no I/O, networking, or heavy logic; just data and simple helpers.

pub mod config;
pub mod constants;
pub mod models;
