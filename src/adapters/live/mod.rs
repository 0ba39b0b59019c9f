//! Live adapters for real network interactions.

pub mod github;
pub mod llm;

pub use github::LiveRepositoryHost;
pub use llm::LiveLlmClient;
