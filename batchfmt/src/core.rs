// src/core.rs
pub mod classify;
pub mod discovery;
pub mod exclude;
pub mod line_ending;
pub mod pipeline;
pub mod wildcard;
