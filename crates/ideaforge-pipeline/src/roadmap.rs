use std::sync::Arc;

use serde::Deserialize;

use ideaforge_core::completion::CompletionModel;
use ideaforge_core::error::{Error, Result};
use ideaforge_core::project::{IdeaCandidate, Roadmap};
use ideaforge_core::reference::ResearchReference;

/// Second-stage generator: expands one idea into a structured roadmap using
/// its related references as context.
pub struct RoadmapGenerator {
    model: Arc<dyn CompletionModel>,
}

#[derive(Debug, Deserialize)]
struct RoadmapEnvelope {
    roadmap: Roadmap,
}

impl RoadmapGenerator {
    pub fn new(model: Arc<dyn CompletionModel>) -> Self {
        Self { model }
    }

    /// Build the roadmap prompt from the idea and a short citation list.
    pub fn build_prompt(idea: &IdeaCandidate, references: &[ResearchReference]) -> String {
        let citations = references
            .iter()
            .map(|r| format!("- {} ({})", r.title, r.year))
            .collect::<Vec<_>>()
            .join("\n");

        format!(
            "Create a detailed project roadmap for:\n\
             Title: {title}\n\
             Description: {description}\n\
             Keywords: {keywords}\n\
             Related Research:\n\
             {citations}\n\
             \n\
             Provide a response in this exact JSON format:\n\
             {{\n\
               \"roadmap\": {{\n\
                 \"overview\": \"Project overview text\",\n\
                 \"problemStatement\": \"Problem statement text\",\n\
                 \"solutionApproach\": \"Solution approach text\",\n\
                 \"toolsAndTechnologies\": [\"tool1\", \"tool2\"],\n\
                 \"expectedChallenges\": [\"challenge1\", \"challenge2\"],\n\
                 \"learningResources\": [\n\
                   {{\n\
                     \"title\": \"Resource title\",\n\
                     \"type\": \"documentation|tutorial|course\",\n\
                     \"url\": \"https://example.com\"\n\
                   }}\n\
                 ]\n\
               }}\n\
             }}\n\
             Don't use placeholder links like 'example.com' etc. Strictly follow the output format mentioned above.",
            title = idea.title,
            description = idea.description,
            keywords = idea.keywords.join(", "),
        )
    }

    /// Generate a roadmap for one idea.
    ///
    /// The completion must contain a `roadmap` key or the call fails with
    /// `MalformedResponse`. Fields the model omits are coerced to their
    /// defaults by the `Roadmap` type, so a partially-specified roadmap
    /// never crashes the caller.
    pub async fn generate(
        &self,
        idea: &IdeaCandidate,
        references: &[ResearchReference],
    ) -> Result<Roadmap> {
        let value = self
            .model
            .complete(&Self::build_prompt(idea, references))
            .await?;
        let envelope: RoadmapEnvelope = serde_json::from_value(value)
            .map_err(|e| Error::MalformedResponse(format!("roadmap failed validation: {e}")))?;
        Ok(envelope.roadmap)
    }
}
