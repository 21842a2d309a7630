use crate::error::FetchFailure;
use crate::github::client::GitHubClient;
use crate::github::types::{FetchStatus, RepositorySummary};
use futures::future::try_join_all;

/// Requests every repository at once and resolves when all have arrived or
/// the first one fails. Output order follows `names`, not completion order.
/// Futures still in flight when a sibling fails are dropped.
pub async fn try_fetch_featured(
    client: &GitHubClient,
    names: &[String],
) -> Result<Vec<RepositorySummary>, FetchFailure> {
    let requests = names.iter().map(|name| async move {
        tracing::debug!(owner = client.owner(), repo = %name, "requesting repository");
        client.fetch_repository(name).await.inspect_err(|e| {
            tracing::warn!(owner = client.owner(), repo = %name, "repository fetch failed: {e}");
        })
    });

    let repos = try_join_all(requests).await?;
    tracing::info!(count = repos.len(), "featured repositories loaded");
    Ok(repos)
}

pub async fn fetch_featured(client: &GitHubClient, names: &[String]) -> FetchStatus {
    try_fetch_featured(client, names).await.into()
}
