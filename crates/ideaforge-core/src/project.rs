use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::reference::ResearchReference;

/// An unexpanded project suggestion from the first model call. Transient:
/// candidates are never persisted, only expanded into [`Project`]s or dropped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdeaCandidate {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub keywords: Vec<String>,
}

/// One entry of a roadmap's learning-resource list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LearningResource {
    pub title: String,
    #[serde(rename = "type")]
    pub resource_type: String,
    pub url: String,
}

/// The structured expansion of an idea produced by the second model call.
///
/// Every field defaults when absent. The model is asked for a strict JSON
/// shape but is not guaranteed to honor it, so a partially-specified roadmap
/// must never crash the caller.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Roadmap {
    pub overview: String,
    pub problem_statement: String,
    pub solution_approach: String,
    pub tools_and_technologies: Vec<String>,
    pub expected_challenges: Vec<String>,
    pub learning_resources: Vec<LearningResource>,
}

/// The terminal, externally visible entity. Constructed only once both the
/// reference lookup and the roadmap generation for its source idea succeed;
/// never partially populated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub roadmap: Roadmap,
    pub research_papers: Vec<ResearchReference>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idea_candidate_missing_keywords_defaults_to_empty() {
        let json = r#"{"title": "T", "description": "D"}"#;
        let idea: IdeaCandidate = serde_json::from_str(json).unwrap();
        assert!(idea.keywords.is_empty());
    }

    #[test]
    fn idea_candidate_missing_title_is_an_error() {
        let json = r#"{"description": "D"}"#;
        assert!(serde_json::from_str::<IdeaCandidate>(json).is_err());
    }

    #[test]
    fn roadmap_missing_arrays_default_to_empty() {
        let json = r#"{
            "overview": "An overview",
            "problemStatement": "A problem",
            "solutionApproach": "An approach"
        }"#;
        let roadmap: Roadmap = serde_json::from_str(json).unwrap();
        assert_eq!(roadmap.overview, "An overview");
        assert!(roadmap.tools_and_technologies.is_empty());
        assert!(roadmap.expected_challenges.is_empty());
        assert!(roadmap.learning_resources.is_empty());
    }

    #[test]
    fn roadmap_parses_full_shape() {
        let json = r#"{
            "overview": "O",
            "problemStatement": "P",
            "solutionApproach": "S",
            "toolsAndTechnologies": ["Rust", "Postgres"],
            "expectedChallenges": ["scope creep"],
            "learningResources": [
                {"title": "The Book", "type": "documentation", "url": "https://doc.rust-lang.org/book/"}
            ]
        }"#;
        let roadmap: Roadmap = serde_json::from_str(json).unwrap();
        assert_eq!(roadmap.tools_and_technologies.len(), 2);
        assert_eq!(roadmap.learning_resources[0].resource_type, "documentation");
    }

    #[test]
    fn learning_resource_type_wire_name() {
        let resource = LearningResource {
            title: "Axum docs".into(),
            resource_type: "documentation".into(),
            url: "https://docs.rs/axum".into(),
        };
        let json = serde_json::to_string(&resource).unwrap();
        assert!(json.contains(r#""type":"documentation""#));
    }

    #[test]
    fn project_serializes_camel_case() {
        let project = Project {
            id: Uuid::new_v4(),
            title: "T".into(),
            description: "D".into(),
            keywords: vec!["k".into()],
            roadmap: Roadmap::default(),
            research_papers: Vec::new(),
        };
        let json = serde_json::to_string(&project).unwrap();
        assert!(json.contains(r#""researchPapers""#));
        assert!(json.contains(r#""problemStatement""#));
    }
}
