//! Document renderers: block producers on top of the layout engine, plus
//! their HTTP handlers.

pub mod bullets;
pub mod cover_letter;
pub mod handlers;
pub mod resume_markdown;
pub mod resume_structured;
