use serde::{Deserialize, Serialize};

use ideaforge_core::profile::UserProfile;
use ideaforge_core::project::Project;

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    pub data: UserProfile,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub projects: Vec<Project>,
}
