// Application layer for the draft board: configuration, roster retrieval,
// and the state that drives the core search and draft engines.

pub mod app;
pub mod config;
pub mod fetch;
pub mod protocol;
pub mod teams;
