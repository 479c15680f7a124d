//! Small helpers shared by the collectors and the formatter

pub mod file;
pub mod parsing;
