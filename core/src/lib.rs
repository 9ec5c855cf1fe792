//! Core of the keypad calculator.
//!
//! The pipeline is `sanitize -> parse -> evaluate -> format`, driven by
//! [`api::Engine`]. [`calculator::Calculator`] owns the display, the status
//! line and the [`history::History`], and turns key presses into engine calls.

pub mod api;
pub mod calculator;
pub mod evaluator;
pub mod format;
pub mod history;
pub mod parser;
pub mod sanitize;
