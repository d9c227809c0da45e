// src/services/extraction.rs
//
// The model replies with free-form text that is expected, but not guaranteed,
// to be pure JSON. Recovery is tolerant by construction: strict parse first,
// then the greedy brace-delimited substring, which picks JSON out of prose,
// markdown code fences and trailing commentary.

use serde_json::Value;

/// Recover a JSON value from a model reply.
///
/// On failure the last parse error is returned so the caller can log it;
/// the raw reply itself stays with the caller for diagnostics.
pub fn extract_json(reply: &str) -> Result<Value, serde_json::Error> {
    match serde_json::from_str(reply) {
        Ok(value) => Ok(value),
        Err(err) => match (reply.find('{'), reply.rfind('}')) {
            (Some(start), Some(end)) if start < end => {
                serde_json::from_str(&reply[start..=end])
            }
            _ => Err(err),
        },
    }
}
