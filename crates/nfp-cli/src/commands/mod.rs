pub mod completions;
pub mod generate;
