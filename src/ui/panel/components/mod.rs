//! Panel component modules
//!
//! Contains all individual rendering components

pub mod cards;
pub mod chart;
pub mod confetti;
pub mod footer;
pub mod header;
pub mod logs;
pub mod modal;
