//! Server functions called from the hydrated page.

use leptos::prelude::*;

use crate::model::{Contributor, RepositorySummary};

/// All contributors with their totals, empty if the backend failed
#[server]
pub async fn get_contributors() -> Result<Vec<Contributor>, ServerFnError> {
    use crate::aggregate::load_contributors;
    use crate::client::ApiClients;

    let clients = use_context::<ApiClients>()
        .ok_or_else(|| ServerFnError::new("api clients not provided"))?;

    Ok(load_contributors(&clients.backend).await)
}

/// Public repositories of one GitHub user, empty if GitHub failed
#[server]
pub async fn get_repositories(handle: String) -> Result<Vec<RepositorySummary>, ServerFnError> {
    use crate::aggregate::load_repositories;
    use crate::client::ApiClients;

    let clients = use_context::<ApiClients>()
        .ok_or_else(|| ServerFnError::new("api clients not provided"))?;

    Ok(load_repositories(&clients.github, &handle).await)
}
