// Presentation layer: everything that turns engine results into text.

pub mod report;
pub mod sample;
pub mod shell;
