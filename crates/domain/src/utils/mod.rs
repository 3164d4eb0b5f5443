//! Domain utility functions

pub mod title;
