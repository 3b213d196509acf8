// Shared prompt constants and prompt-building utilities.
// Each service that needs LLM calls defines its own prompts.rs alongside it.
// This file contains cross-cutting prompt fragments.

/// Instruction appended to every prompt answered through a forced tool call.
pub const STRUCTURED_OUTPUT_INSTRUCTION: &str = "\
    OUTPUT: Record your answer by calling the provided tool exactly once. \
    Every field in the tool schema is required: use an empty list rather than omitting a field. \
    Use only the exact enum values listed in the schema. \
    All scores are whole numbers from 0 to 100.";
