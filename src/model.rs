use serde::{Deserialize, Serialize};

/// A contributor merged with its contribution total, ready for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contributor {
    pub id: i64,
    pub name: String,
    pub github_username: String,
    pub avatar_url: String,
    pub role: String,
    pub contributions: u32,
}

impl Contributor {
    /// Merge a backend record with the total fetched for it
    #[must_use]
    pub fn from_record(record: ContributorRecord, contributions: u32) -> Self {
        Self {
            id: record.id,
            name: record.name,
            github_username: record.github_username,
            avatar_url: record.avatar_url,
            role: record.specialite,
            contributions,
        }
    }

    #[must_use]
    pub fn profile_url(&self) -> String {
        format!("https://github.com/{}", self.github_username)
    }
}

/// A public repository shown in a card's hover preview
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositorySummary {
    pub id: u64,
    pub name: String,
    pub html_url: String,
}

/// Contributor as returned by `GET /api/contributors/`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributorRecord {
    pub id: i64,
    pub name: String,
    pub github_username: String,
    pub avatar_url: String,
    #[serde(default)]
    pub specialite: String,
}

/// The contributor list, either bare or wrapped in a paginated envelope
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ContributorListing {
    Paginated { results: Vec<ContributorRecord> },
    Plain(Vec<ContributorRecord>),
}

impl ContributorListing {
    #[must_use]
    pub fn into_records(self) -> Vec<ContributorRecord> {
        match self {
            ContributorListing::Paginated { results } => results,
            ContributorListing::Plain(records) => records,
        }
    }
}

/// Body of `GET /api/contributor/{id}/total_contribution/`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct TotalContribution {
    pub total_contribution: u32,
}
