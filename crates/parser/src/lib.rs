// parser crate

pub mod schema;
pub mod workflow;
