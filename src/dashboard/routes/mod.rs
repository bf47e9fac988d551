//! Dashboard Routes
//!
//! Route handlers organized by functionality.

pub mod data;
pub mod figure;
pub mod health;
pub mod page;
