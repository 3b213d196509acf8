// Resume Analysis Engine
// Implements: analysis contract, prompt building, model invocation with heuristic fallback.
// All model calls go through llm_client via a ReasoningProvider; handlers only see Analyzer.

pub mod adapter;
pub mod contract;
pub mod extract;
pub mod handlers;
pub mod heuristic;
pub mod orchestrator;
pub mod prompts;
pub mod provider;

// Re-export the public API consumed by main and the router.
pub use adapter::ModelInvocationAdapter;
pub use orchestrator::Analyzer;
pub use provider::ClaudeProvider;
