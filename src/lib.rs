//! Home Energy Tracker library
//!
//! This module exposes the appliance catalog, persistence, audit log and
//! tracker engine for use by the menu binary and in tests.

pub mod audit;
pub mod core;
pub mod store;
pub mod tracker;
