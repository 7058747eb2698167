use log::debug;

use super::prompt::{build_user_prompt, SYSTEM_PROMPT};
use super::GeneratedSpec;
use crate::ai::client::{ChatClient, ChatMessage, ChatRequest, ResponseFormat};
use crate::ai::{extract_json_str, parse_json, AiError};
use crate::error::AppError;

/// Generate a technical specification for the given product description.
///
/// An empty or whitespace-only prompt is rejected with
/// `AppError::Validation` before any outbound call is made. Everything the
/// upstream call can get wrong (network failure, missing content, a reply
/// that is not valid JSON or lacks one of the three fields) surfaces as
/// `AppError::Generation`. Each call is independent: no retry, no caching.
pub async fn generate_spec(
    client: &ChatClient,
    model: &str,
    prompt: &str,
) -> Result<GeneratedSpec, AppError> {
    let prompt = prompt.trim();
    if prompt.is_empty() {
        return Err(AppError::validation("Prompt is required"));
    }

    let request = ChatRequest {
        model: model.to_owned(),
        messages: vec![
            ChatMessage::system(SYSTEM_PROMPT),
            ChatMessage::user(build_user_prompt(prompt)),
        ],
        response_format: Some(ResponseFormat::json_object()),
        temperature: None,
    };

    let response = client.chat(&request).await?;

    let content = response
        .content()
        .filter(|c| !c.trim().is_empty())
        .ok_or(AiError::EmptyResponse)?;

    debug!("model replied with {} bytes", content.len());

    Ok(parse_spec_reply(content)?)
}

/// Parse the model's reply text into a `GeneratedSpec`.
///
/// All three fields must be present; their contents pass through unmodified.
pub(crate) fn parse_spec_reply(content: &str) -> Result<GeneratedSpec, AiError> {
    let json_str = extract_json_str(content)?;
    parse_json(json_str)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_well_formed_reply_passes_fields_through() {
        let reply = r#"{"dbSchema":"CREATE TABLE tasks(id int);","userStories":["As a user, I want to add tasks"],"mermaidDiagram":"erDiagram\n TASK"}"#;

        let spec = parse_spec_reply(reply).unwrap();
        assert_eq!(spec.db_schema, "CREATE TABLE tasks(id int);");
        assert_eq!(spec.user_stories, vec!["As a user, I want to add tasks"]);
        assert_eq!(spec.mermaid_diagram, "erDiagram\n TASK");
    }

    #[test]
    fn test_parse_reply_wrapped_in_fences() {
        let reply = "```json\n{\"dbSchema\": \"-- none\", \"userStories\": [], \"mermaidDiagram\": \"erDiagram\"}\n```";
        let spec = parse_spec_reply(reply).unwrap();
        assert_eq!(spec.db_schema, "-- none");
        assert!(spec.user_stories.is_empty());
    }

    #[test]
    fn test_parse_reply_missing_field_fails() {
        let reply = r#"{"dbSchema": "CREATE TABLE t(id int);", "userStories": []}"#;
        assert!(parse_spec_reply(reply).is_err());
    }

    #[test]
    fn test_parse_reply_not_json_fails() {
        assert!(parse_spec_reply("Sorry, I can't help with that.").is_err());
    }

    #[tokio::test]
    async fn test_empty_prompt_never_reaches_the_network() {
        // Unroutable base URL: if validation let the call through,
        // this test would fail with a Generation error instead.
        let client = ChatClient::with_base_url("test-key".to_owned(), "http://127.0.0.1:9".to_owned());

        for prompt in ["", "   ", "\n\t"] {
            let err = generate_spec(&client, "gpt-4o", prompt).await.unwrap_err();
            match err {
                AppError::Validation { message } => assert_eq!(message, "Prompt is required"),
                other => panic!("expected validation error, got {other}"),
            }
        }
    }
}
