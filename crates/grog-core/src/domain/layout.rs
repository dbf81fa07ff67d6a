use std::path::{Path, PathBuf};

use serde::Serialize;

/// Placeholder comment in the composition root after which registrations go.
///
/// The marker is kept on every patch so later runs can find it again.
pub const REGISTRATION_MARKER: &str = "// Add services to the container.";

/// What to do when a patch anchor cannot be found in an existing file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AnchorPolicy {
    /// Leave the file untouched, record a skipped decision and log a warning.
    #[default]
    Warn,
    /// Abort the run with `ApplicationError::PatchAnchorMissing`.
    Fail,
}

/// Where artifacts live and how their files are named.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectLayout {
    root: PathBuf,
    extension: String,
    registration_file: String,
    anchor_policy: AnchorPolicy,
}

impl ProjectLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = root.into();
        self
    }

    /// File extension without the leading dot. Defaults to `cs`.
    pub fn with_extension(mut self, extension: impl AsRef<str>) -> Self {
        self.extension = extension.as_ref().trim_start_matches('.').to_string();
        self
    }

    /// Stem of the composition-root file. Defaults to `Program`.
    pub fn with_registration_file(mut self, stem: impl Into<String>) -> Self {
        self.registration_file = stem.into();
        self
    }

    pub fn with_anchor_policy(mut self, policy: AnchorPolicy) -> Self {
        self.anchor_policy = policy;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    pub fn registration_file(&self) -> &str {
        &self.registration_file
    }

    pub fn anchor_policy(&self) -> AnchorPolicy {
        self.anchor_policy
    }

    /// `<stem>.<ext>` under `dir`, relative to the project root.
    pub(crate) fn source_file(&self, dir: &str, stem: &str) -> PathBuf {
        let file = format!("{stem}.{}", self.extension);
        if dir.is_empty() {
            self.root.join(file)
        } else {
            self.root.join(dir).join(file)
        }
    }
}

impl Default for ProjectLayout {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            extension: "cs".into(),
            registration_file: "Program".into(),
            anchor_policy: AnchorPolicy::Warn,
        }
    }
}
