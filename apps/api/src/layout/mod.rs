//! Document layout engine: font metrics, word wrap, block classification,
//! page flow, and PDF serialization.

pub mod blocks;
pub mod font_metrics;
pub mod page;
pub mod pdf;
pub mod wrap;
