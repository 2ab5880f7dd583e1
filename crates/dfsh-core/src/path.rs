//! Remote path handling.
//!
//! A `DfsPath` is an absolute, slash-delimited location in the remote
//! namespace. Paths are normalised at the boundary (duplicate and trailing
//! slashes collapse) so the rest of the crate can compare them as plain
//! strings.

use eyre::{bail, Result};
use serde::Serialize;
use std::fmt;

/// An absolute path in the remote filesystem's namespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct DfsPath(String);

impl DfsPath {
    /// Parse and normalise a user-supplied remote path.
    ///
    /// Rejects relative paths and `.`/`..` components; the namespace has no
    /// notion of a working directory and drivers rely on paths never
    /// escaping upward.
    pub fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            bail!("remote path cannot be empty");
        }
        if !trimmed.starts_with('/') {
            bail!("remote path must be absolute (got '{trimmed}')");
        }

        let mut components = Vec::new();
        for component in trimmed.split('/') {
            match component {
                "" => continue,
                "." | ".." => bail!("remote path may not contain '.' or '..' (got '{trimmed}')"),
                name => components.push(name),
            }
        }

        if components.is_empty() {
            return Ok(Self("/".to_string()));
        }
        Ok(Self(format!("/{}", components.join("/"))))
    }

    /// The root of the namespace.
    pub fn root() -> Self {
        Self("/".to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0 == "/"
    }

    /// Final component of the path; the root's name is `/`.
    pub fn name(&self) -> &str {
        if self.is_root() {
            "/"
        } else {
            self.0.rsplit('/').next().unwrap_or(&self.0)
        }
    }

    /// Containing directory, or `None` for the root itself.
    pub fn parent(&self) -> Option<Self> {
        if self.is_root() {
            return None;
        }
        match self.0.rfind('/') {
            Some(0) => Some(Self::root()),
            Some(idx) => Some(Self(self.0[..idx].to_string())),
            None => None,
        }
    }

    /// Append a single child name.
    pub fn child(&self, name: &str) -> Self {
        if self.is_root() {
            Self(format!("/{name}"))
        } else {
            Self(format!("{}/{name}", self.0))
        }
    }

    /// Path relative to the namespace root, for mapping into a driver's
    /// local representation. Empty for the root itself.
    pub fn relative(&self) -> &str {
        self.0.trim_start_matches('/')
    }
}

impl fmt::Display for DfsPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalises_duplicate_and_trailing_slashes() {
        let path = DfsPath::parse("//data///reports/").unwrap();
        assert_eq!(path.as_str(), "/data/reports");
    }

    #[test]
    fn root_parses_to_single_slash() {
        assert_eq!(DfsPath::parse("/").unwrap().as_str(), "/");
        assert!(DfsPath::parse("///").unwrap().is_root());
    }

    #[test]
    fn rejects_relative_and_dotted_paths() {
        assert!(DfsPath::parse("data/x").is_err());
        assert!(DfsPath::parse("/data/../x").is_err());
        assert!(DfsPath::parse("/data/./x").is_err());
        assert!(DfsPath::parse("   ").is_err());
    }

    #[test]
    fn name_and_parent() {
        let path = DfsPath::parse("/a/b/c.txt").unwrap();
        assert_eq!(path.name(), "c.txt");
        assert_eq!(path.parent().unwrap().as_str(), "/a/b");
        assert_eq!(DfsPath::parse("/a").unwrap().parent().unwrap().as_str(), "/");
        assert!(DfsPath::root().parent().is_none());
        assert_eq!(DfsPath::root().name(), "/");
    }

    #[test]
    fn child_joins_single_component() {
        assert_eq!(DfsPath::root().child("a").as_str(), "/a");
        let nested = DfsPath::parse("/a/b").unwrap().child("c");
        assert_eq!(nested.as_str(), "/a/b/c");
    }

    #[test]
    fn relative_strips_leading_slash() {
        assert_eq!(DfsPath::parse("/a/b").unwrap().relative(), "a/b");
        assert_eq!(DfsPath::root().relative(), "");
    }
}
