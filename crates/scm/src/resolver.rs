//! Repository name resolution from hosting URLs.

use std::fmt;

use url::Url;

use crate::error::Error;

/// Canonical `owner/repo` identifier addressing a repository within its
/// hosting provider.
///
/// Constructed only by [`resolve`]; immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepoName(String);

impl RepoName {
    /// The identifier as a `/`-joined string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RepoName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Extract the repository name from a hosting URL.
///
/// Takes a URL of the form `https://github.com/my-org/my-repo.git` and
/// determines the name of the repository, i.e. `my-org/my-repo`. A
/// trailing `.git` on the final path segment is stripped. Any remaining
/// `.` in a segment is rejected; this guards against credential or host
/// fragments leaking into the path and is a heuristic, not a full path
/// grammar.
///
/// # Errors
/// Returns [`Error::MalformedRepositoryUrl`] when the path has fewer
/// than two non-empty segments or a segment contains a `.`.
// TODO: this likely won't work for GitLab projects under nested groups;
// it assumes the path is always composed of two elements.
pub fn resolve(url: &Url) -> Result<RepoName, Error> {
    let mut segments: Vec<&str> = url.path().split('/').filter(|s| !s.is_empty()).collect();

    if segments.len() < 2 {
        return Err(Error::MalformedRepositoryUrl {
            url: url.to_string(),
        });
    }

    let last = segments.len() - 1;
    segments[last] = segments[last].strip_suffix(".git").unwrap_or(segments[last]);

    if segments.iter().any(|s| s.contains('.')) {
        return Err(Error::MalformedRepositoryUrl {
            url: url.to_string(),
        });
    }

    Ok(RepoName(segments.join("/")))
}
