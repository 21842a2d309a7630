use serde::{Deserialize, Serialize};

/// The slice of `GET /repos/{owner}/{repo}` the projects panel displays.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositorySummary {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub html_url: String,
    #[serde(default)]
    pub stargazers_count: u64,
    #[serde(default)]
    pub forks_count: u64,
    #[serde(default)]
    pub watchers_count: u64,
}

impl RepositorySummary {
    pub fn display_name(&self) -> &str {
        &self.name
    }

    /// Blank descriptions count as missing.
    pub fn description(&self) -> Option<&str> {
        self.description
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
    }
}

/// State of the featured-projects fetch. One attempt moves from `Pending` to
/// exactly one of the other two variants.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum FetchStatus {
    #[default]
    Pending,
    Succeeded(Vec<RepositorySummary>),
    Failed(String),
}

impl FetchStatus {
    pub fn is_pending(&self) -> bool {
        matches!(self, FetchStatus::Pending)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, FetchStatus::Failed(_))
    }
}

impl<E: std::fmt::Display> From<Result<Vec<RepositorySummary>, E>> for FetchStatus {
    fn from(result: Result<Vec<RepositorySummary>, E>) -> Self {
        match result {
            Ok(repos) => FetchStatus::Succeeded(repos),
            Err(e) => FetchStatus::Failed(e.to_string()),
        }
    }
}
