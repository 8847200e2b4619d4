//! quizkit-core — Quiz engine, data model, and scoring.
//!
//! This crate defines the fundamental data model, the pure quiz engine
//! (random selection, answer evaluation, scoring), and question-document
//! parsing and validation that the rest of quizkit builds on.

pub mod catalog;
pub mod engine;
pub mod model;
pub mod sections;
