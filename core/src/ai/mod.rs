pub mod client;
pub mod spec;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AiError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },
    #[error("Empty response from model")]
    EmptyResponse,
    #[error("Failed to parse model response: {0}")]
    Parse(String),
}

// ---------------------------------------------------------------------------
// Shared AI response parsing helpers
// ---------------------------------------------------------------------------

/// Extract the JSON substring from the model's reply, handling markdown
/// fences and other surrounding text. The request pins the response format
/// to a JSON object, but models still occasionally wrap it anyway.
pub(crate) fn extract_json_str(output: &str) -> Result<&str, AiError> {
    let trimmed = output.trim();

    if let Some(start) = trimmed.find("```json") {
        let after_marker = &trimmed[start + 7..];
        if let Some(end) = after_marker.find("```") {
            return Ok(after_marker[..end].trim());
        }
        return Ok(after_marker.trim());
    }

    if let Some(start) = trimmed.find("```") {
        let after_marker = &trimmed[start + 3..];
        let after_newline = after_marker
            .find('\n')
            .map_or(after_marker, |i| &after_marker[i + 1..]);
        if let Some(end) = after_newline.find("```") {
            return Ok(after_newline[..end].trim());
        }
        return Ok(after_newline.trim());
    }

    if trimmed.starts_with('{') {
        return Ok(trimmed);
    }

    if let Some(start) = trimmed.find('{') {
        if let Some(end) = trimmed.rfind('}') {
            return Ok(&trimmed[start..=end]);
        }
        return Err(AiError::Parse(
            "Could not find complete JSON object".to_owned(),
        ));
    }

    Err(AiError::Parse(format!(
        "No JSON found in output: {}",
        &trimmed[..trimmed.len().min(200)]
    )))
}

/// Parse a JSON string into a value, wrapping parse errors with context.
pub(crate) fn parse_json<T: serde::de::DeserializeOwned>(json_str: &str) -> Result<T, AiError> {
    serde_json::from_str(json_str).map_err(|e| {
        AiError::Parse(format!(
            "JSON parse error: {}. Input: {}",
            e,
            &json_str[..json_str.len().min(500)]
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_json_from_markdown_fence() {
        let output = r#"Here is the spec:

```json
{"dbSchema": "CREATE TABLE t(id int);"}
```

Done."#;

        let json = extract_json_str(output).unwrap();
        assert!(json.starts_with('{'));
        assert!(json.contains("dbSchema"));
    }

    #[test]
    fn test_extract_json_from_bare_fence() {
        let output = "```\n{\"userStories\": []}\n```";
        let json = extract_json_str(output).unwrap();
        assert_eq!(json, "{\"userStories\": []}");
    }

    #[test]
    fn test_extract_plain_json() {
        let output = r#"{"mermaidDiagram": "erDiagram"}"#;
        assert_eq!(extract_json_str(output).unwrap(), output);
    }

    #[test]
    fn test_extract_json_embedded_in_prose() {
        let output = "Sure! {\"a\": 1} Hope that helps.";
        assert_eq!(extract_json_str(output).unwrap(), "{\"a\": 1}");
    }

    #[test]
    fn test_extract_json_missing() {
        let output = "I could not produce a specification.";
        assert!(extract_json_str(output).is_err());
    }

    #[test]
    fn test_parse_json_error_carries_context() {
        let err = parse_json::<serde_json::Value>("{not json").unwrap_err();
        assert!(err.to_string().contains("JSON parse error"));
    }
}
