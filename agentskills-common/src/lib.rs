#![doc = "Common abstractions used by the agentskills client crates."]
pub mod store;
