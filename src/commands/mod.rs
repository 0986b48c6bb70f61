pub mod parse;
pub mod rulesets;
pub mod screen;
