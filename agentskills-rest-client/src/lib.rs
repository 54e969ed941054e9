#![doc = "HttpClient implementations for the agentskills API."]
pub mod reqwest;

#[cfg(test)]
mod tests;
