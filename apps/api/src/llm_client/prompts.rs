// Shared prompt constants.
// Each service that needs LLM calls defines its own prompts.rs alongside it.
// This file contains cross-cutting prompt fragments.

/// System prompt fragment that enforces JSON-only output.
pub const JSON_ONLY_SYSTEM: &str = "You are a precise, structured assistant. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Audience framing shared by every career prompt.
pub const AUDIENCE_INSTRUCTION: &str = "\
    The reader is a school or college student in India exploring career options. \
    Use simple, encouraging language. Quote salaries in Indian Rupees (₹) as yearly ranges.";
