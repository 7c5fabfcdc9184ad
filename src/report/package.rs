//! Package metadata: repository statistics, owner, contributors and advisories

use super::null_as_default;
use crate::domain::Timestamp;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Origin value for packages resolved normally
pub const ORIGIN_OK: &str = "ok";
/// Repository visibility: public
pub const VISIBILITY_PUBLIC: &str = "public";
/// Repository visibility: private
pub const VISIBILITY_PRIVATE: &str = "private";

/// Data about the queried package and its source repository
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PackageData {
    #[serde(deserialize_with = "null_as_default")]
    pub archived: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub author: String,
    #[serde(deserialize_with = "null_as_default")]
    pub author_email: String,
    #[serde(deserialize_with = "null_as_default")]
    pub contributor_count: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub contributors: Vec<User>,

    #[serde(deserialize_with = "null_as_default")]
    pub default_branch: String,
    #[serde(deserialize_with = "null_as_default")]
    pub disabled: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub followers: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub following: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub forks_count: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub has_downloads: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub has_issues: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub has_projects: bool,
    pub home_page: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(rename = "is_deprecated", deserialize_with = "null_as_default")]
    pub deprecated: bool,
    pub last_update: Option<Timestamp>,
    /// Advisory details, only set when the package is flagged
    pub malicious: Option<MaliciousData>,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub open_issues_count: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub origin: String,
    #[serde(deserialize_with = "null_as_default")]
    pub owner: User,

    #[serde(deserialize_with = "null_as_default")]
    pub package_description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub public_gists: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub public_repos: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub repo_description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub repository_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub repository_name: String,
    // TODO: type once the API documents the per-package score layout
    #[serde(deserialize_with = "null_as_default")]
    pub scores: Map<String, Value>,
    #[serde(deserialize_with = "null_as_default")]
    pub stargazers_count: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub status: String,
    pub status_code: Option<String>,
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub package_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub version: String,
    pub version_date: Option<Timestamp>,
    #[serde(deserialize_with = "null_as_default")]
    pub visibility: String,
    #[serde(deserialize_with = "null_as_default")]
    pub watchers_count: i64,
}

impl PackageData {
    /// Returns true when the package carries an advisory
    pub fn is_malicious(&self) -> bool {
        self.malicious.is_some()
    }

    /// Returns true when the origin resolved normally
    pub fn origin_ok(&self) -> bool {
        self.origin == ORIGIN_OK
    }

    /// Returns true for public repositories
    pub fn is_public(&self) -> bool {
        self.visibility == VISIBILITY_PUBLIC
    }
}

/// A repository owner or contributor account
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    #[serde(deserialize_with = "null_as_default")]
    pub author: String,
    #[serde(deserialize_with = "null_as_default")]
    pub author_email: String,
    #[serde(deserialize_with = "null_as_default")]
    pub avatar_url: String,
    pub blog: Option<String>,
    pub company: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(deserialize_with = "null_as_default")]
    pub followers: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub following: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub gravatar_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub hireable: bool,
    pub html_url: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    pub location: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub login: String,
    pub public_gists: Option<i64>,
    #[serde(deserialize_with = "null_as_default")]
    pub public_repos: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub scores: Map<String, Value>,
    pub twitter_username: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,
}

impl User {
    /// Returns the best available display name
    pub fn display_name(&self) -> &str {
        if !self.login.is_empty() {
            &self.login
        } else {
            &self.author
        }
    }
}

/// Advisory details for a package flagged as malicious
///
/// `published` and `modified` arrive as RFC 3339 values such as
/// `2024-01-16T23:40:53Z`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MaliciousData {
    #[serde(deserialize_with = "null_as_default")]
    pub summary: String,
    #[serde(deserialize_with = "null_as_default")]
    pub details: String,
    pub published: Option<Timestamp>,
    pub modified: Option<Timestamp>,
    #[serde(deserialize_with = "null_as_default")]
    pub source: String,
}
