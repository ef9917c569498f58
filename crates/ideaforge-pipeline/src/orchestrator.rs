use std::sync::Arc;

use futures::future::join_all;
use uuid::Uuid;

use ideaforge_core::completion::CompletionModel;
use ideaforge_core::error::{Error, Result};
use ideaforge_core::profile::UserProfile;
use ideaforge_core::project::{IdeaCandidate, Project};
use ideaforge_core::search::ReferenceSearch;

use crate::ideas::IdeaGenerator;
use crate::roadmap::RoadmapGenerator;

/// Max references fetched per idea.
const REFERENCE_LIMIT: u32 = 3;
/// Restrict reference search to the last N years.
const REFERENCE_RECENCY_YEARS: i32 = 5;

/// Terminal state of one candidate idea after stage 2.
///
/// Per-idea failures are first-class values rather than a swallowed
/// `continue`, so the partition at the end of a run stays inspectable.
#[derive(Debug)]
pub enum IdeaOutcome {
    Succeeded(Project),
    Failed { title: String, reason: Error },
}

/// The two-stage idea-generation pipeline.
///
/// Stage 1 (idea generation) is an all-or-nothing precondition. Stage 2 runs
/// one task per idea, concurrently, with per-idea failure isolation: a failed
/// idea is logged and dropped, it never aborts its siblings.
pub struct Pipeline {
    ideas: IdeaGenerator,
    roadmaps: RoadmapGenerator,
    references: Arc<dyn ReferenceSearch>,
}

impl Pipeline {
    pub fn new(model: Arc<dyn CompletionModel>, references: Arc<dyn ReferenceSearch>) -> Self {
        Self {
            ideas: IdeaGenerator::new(model.clone()),
            roadmaps: RoadmapGenerator::new(model),
            references,
        }
    }

    /// Run the full pipeline for one profile.
    ///
    /// Returns the successfully expanded projects in the original idea
    /// order, or `NoProjectsGenerated` when no idea survived stage 2.
    pub async fn run(&self, profile: &UserProfile) -> Result<Vec<Project>> {
        let ideas = self.ideas.generate(profile).await?;
        tracing::info!(count = ideas.len(), "generated candidate ideas");

        let outcomes = join_all(ideas.into_iter().map(|idea| self.process_idea(idea))).await;

        let mut projects = Vec::new();
        for outcome in outcomes {
            match outcome {
                IdeaOutcome::Succeeded(project) => projects.push(project),
                IdeaOutcome::Failed { title, reason } => {
                    tracing::warn!(%title, error = %reason, "dropping failed idea");
                }
            }
        }

        if projects.is_empty() {
            return Err(Error::NoProjectsGenerated);
        }
        Ok(projects)
    }

    async fn process_idea(&self, idea: IdeaCandidate) -> IdeaOutcome {
        match self.expand_idea(&idea).await {
            Ok(project) => IdeaOutcome::Succeeded(project),
            Err(reason) => IdeaOutcome::Failed {
                title: idea.title,
                reason,
            },
        }
    }

    /// ReferencesFetched -> RoadmapBuilt -> Succeeded, or Failed at either
    /// step. No retries, no transitions back.
    async fn expand_idea(&self, idea: &IdeaCandidate) -> Result<Project> {
        let references = self
            .references
            .search(
                &idea.keywords,
                REFERENCE_LIMIT,
                Some(REFERENCE_RECENCY_YEARS),
            )
            .await?;
        let roadmap = self.roadmaps.generate(idea, &references).await?;

        Ok(Project {
            id: Uuid::new_v4(),
            title: idea.title.clone(),
            description: idea.description.clone(),
            keywords: idea.keywords.clone(),
            roadmap,
            research_papers: references,
        })
    }
}
