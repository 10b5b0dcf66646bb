// LLM abstraction layer

pub mod openrouter;
pub mod provider;

pub use provider::*;
