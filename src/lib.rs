//! `A.I.O.` - Augmented Intelligence Operator
//!
//! Terminal dashboard demo of AI-assisted policing tools for Pakistan: patrol
//! map, simulated bodycam analysis, incident report assistant and ethics
//! safeguards.

pub mod app;
pub mod cli;
pub mod core;
pub mod fs;
pub mod tui;
