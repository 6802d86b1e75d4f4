//! Process-level plumbing shared by every mode

pub mod logging;
