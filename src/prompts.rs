// src/prompts.rs
//
// The prompt pair is a versioned contract with the model: the system prompt
// mandates the JSON schema that response extraction depends on. Any wording
// change here changes what the extractor sees.

pub const DIAGNOSIS_SYSTEM: &str = include_str!("../data/prompts/diagnosis_system.txt");
pub const DIAGNOSIS_USER: &str = include_str!("../data/prompts/diagnosis_user.txt");
