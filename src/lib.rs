//! Weather widget - tui-dispatch store driving a single weather card
//!
//! This library exposes the widget's modules for testing.

pub mod action;
pub mod api;
pub mod chart;
pub mod components;
pub mod effect;
pub mod error;
pub mod message;
pub mod reducer;
pub mod state;
pub mod theme;
