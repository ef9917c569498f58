use std::sync::Arc;

use serde::Deserialize;

use ideaforge_core::completion::CompletionModel;
use ideaforge_core::error::{Error, Result};
use ideaforge_core::profile::UserProfile;
use ideaforge_core::project::IdeaCandidate;

/// First-stage generator: turns a student profile into candidate ideas.
pub struct IdeaGenerator {
    model: Arc<dyn CompletionModel>,
}

#[derive(Debug, Deserialize)]
struct IdeasEnvelope {
    ideas: Vec<IdeaCandidate>,
}

impl IdeaGenerator {
    pub fn new(model: Arc<dyn CompletionModel>) -> Self {
        Self { model }
    }

    /// Build the natural-language prompt embedding every profile field.
    pub fn build_prompt(profile: &UserProfile) -> String {
        format!(
            "Analyze this student profile and generate 3 personalized project/thesis ideas \
             based on their preferences and field of study:\n\
             Name: {name}\n\
             Major: {major}\n\
             Semester: {semester}\n\
             Technical Skills: {skills}\n\
             Interests: {interests}\n\
             Problem Solving Style: {solving}\n\
             Work Style: {work}\n\
             Project Scope: {scope}\n\
             \n\
             Ensure the ideas are:\n\
             - Unique, with potential to solve a real-world problem or fill an existing market gap.\n\
             - Of medium difficulty to implement.\n\
             - Have the potential to make money or create value in a practical way.\n\
             - Not outdated or oversaturated with competition.\n\
             - Relevant to the student's specific major and interests.\n\
             - Not too broad or narrow; ensure they are feasible and aligned with the student's capabilities.\n\
             - If the student is in a field more focused on research (e.g., Humanities, Social Sciences), \
             suggest thesis ideas rather than projects. Ensure the ideas are research-driven and innovative.\n\
             \n\
             Generate a response in this exact JSON format:\n\
             {{\n\
               \"ideas\": [\n\
                 {{\n\
                   \"title\": \"Project/Thesis Title\",\n\
                   \"description\": \"Brief description of the project or thesis idea, highlighting its \
             uniqueness, potential impact, and how it addresses a real-world problem or market gap.\",\n\
                   \"keywords\": [\"keyword1\", \"keyword2\", \"keyword3\"]\n\
                 }}\n\
               ]\n\
             }}",
            name = profile.name,
            major = profile.major,
            semester = profile.semester,
            skills = profile.technical_skills,
            interests = profile.interests,
            solving = profile.problem_solving_style,
            work = profile.preferred_work_style,
            scope = profile.project_scope,
        )
    }

    /// Generate candidate ideas for a profile.
    ///
    /// The completion must contain an `ideas` array of well-formed items or
    /// the call fails with `MalformedResponse`. An empty array is a valid,
    /// degenerate result; idea quality is the model's responsibility.
    pub async fn generate(&self, profile: &UserProfile) -> Result<Vec<IdeaCandidate>> {
        let value = self.model.complete(&Self::build_prompt(profile)).await?;
        let envelope: IdeasEnvelope = serde_json::from_value(value)
            .map_err(|e| Error::MalformedResponse(format!("idea list failed validation: {e}")))?;
        Ok(envelope.ideas)
    }
}
