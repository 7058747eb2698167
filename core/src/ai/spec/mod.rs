pub mod generate;
pub mod prompt;

pub use generate::generate_spec;

use serde::{Deserialize, Serialize};

/// The generated technical specification.
///
/// Constructed fresh per request from the model's reply and held in memory
/// only; all three fields are required and their contents are opaque to the
/// system (no reformatting).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedSpec {
    /// SQL schema text.
    pub db_schema: String,
    /// Gherkin-style user stories.
    pub user_stories: Vec<String>,
    /// Mermaid `erDiagram` markup visualizing the schema.
    pub mermaid_diagram: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_field_names_are_camel_case() {
        let spec = GeneratedSpec {
            db_schema: "CREATE TABLE tasks(id int);".to_owned(),
            user_stories: vec!["As a user, I want to add tasks".to_owned()],
            mermaid_diagram: "erDiagram\n TASK".to_owned(),
        };
        let json = serde_json::to_value(&spec).unwrap();
        assert!(json.get("dbSchema").is_some());
        assert!(json.get("userStories").is_some());
        assert!(json.get("mermaidDiagram").is_some());
    }

    #[test]
    fn test_all_three_fields_are_required() {
        let missing_diagram = r#"{"dbSchema": "x", "userStories": []}"#;
        assert!(serde_json::from_str::<GeneratedSpec>(missing_diagram).is_err());
    }
}
