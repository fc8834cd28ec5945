//! Terminal formula editor: compose an expression from autocompleted tags,
//! number literals and operands, evaluated strictly left to right.

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod formula;
pub mod suggest;
pub mod ui;
