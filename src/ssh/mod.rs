// ABOUTME: SSH config handling: splitting the file into Host blocks and rendering them back
// ABOUTME: Parsing is line-oriented and only understands simple `Host <pattern>` blocks

pub mod formatter;
pub mod parser;

pub use formatter::Sections;
pub use parser::parse_blocks;
