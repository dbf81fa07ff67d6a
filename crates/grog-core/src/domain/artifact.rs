use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

use crate::domain::{layout::ProjectLayout, request::GenerationRequest};

/// The six artifacts a run can touch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ArtifactKind {
    Controller,
    ServiceInterface,
    ServiceImpl,
    UseCaseInterface,
    UseCaseImpl,
    DiRegistration,
}

impl ArtifactKind {
    /// Decision order for one run.
    ///
    /// Interfaces come before the implementations that reference them, and
    /// the registration block comes last because it names both the service
    /// and the use case.
    pub const GENERATION_ORDER: [ArtifactKind; 6] = [
        Self::Controller,
        Self::UseCaseInterface,
        Self::UseCaseImpl,
        Self::ServiceInterface,
        Self::ServiceImpl,
        Self::DiRegistration,
    ];

    /// Kinds that only exist when a use case was requested.
    pub fn requires_use_case(self) -> bool {
        matches!(self, Self::UseCaseInterface | Self::UseCaseImpl)
    }

    /// Kinds that may be patched after creation.
    pub fn is_patchable(self) -> bool {
        matches!(
            self,
            Self::ServiceInterface | Self::ServiceImpl | Self::DiRegistration
        )
    }

    /// Target path for this kind, or `None` when the kind does not apply to
    /// the request (use-case kinds without a use case).
    pub fn path(self, request: &GenerationRequest, layout: &ProjectLayout) -> Option<PathBuf> {
        let entity = request.entity();
        let path = match self {
            Self::Controller => {
                layout.source_file("Infrastructure/Controllers", &format!("{entity}Controller"))
            }
            Self::ServiceInterface => {
                layout.source_file("Domain/Ports/Input", &request.service_interface())
            }
            Self::ServiceImpl => {
                layout.source_file("Application/Services", &request.service_class())
            }
            Self::UseCaseInterface => {
                layout.source_file("Domain/Ports/Input", &request.use_case_interface()?)
            }
            Self::UseCaseImpl => layout.source_file(
                "Application/UseCases",
                &format!("{}UseCase", request.use_case()?),
            ),
            Self::DiRegistration => layout.source_file("", layout.registration_file()),
        };
        Some(path)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Controller => "controller",
            Self::ServiceInterface => "service interface",
            Self::ServiceImpl => "service",
            Self::UseCaseInterface => "use case interface",
            Self::UseCaseImpl => "use case",
            Self::DiRegistration => "DI registration",
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// State of an artifact at decision time. Never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ArtifactState {
    Absent,
    PresentUnchanged,
    PresentNeedsPatch,
}

/// What a run does with one artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "kebab-case")]
pub enum Action {
    /// Write a freshly rendered file.
    Create {
        #[serde(skip_serializing)]
        content: String,
    },
    /// Overwrite an existing file with patched content.
    Patch {
        #[serde(skip_serializing)]
        content: String,
    },
    /// Already exists and already wired.
    Unchanged,
    /// Present but could not be patched.
    Skipped { reason: String },
    /// Registration statements handed to the operator because there is no
    /// composition root to patch.
    Emit { block: String },
}

impl Action {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Create { .. } => "create",
            Self::Patch { .. } => "patch",
            Self::Unchanged => "unchanged",
            Self::Skipped { .. } => "skipped",
            Self::Emit { .. } => "emit",
        }
    }
}

/// One artifact decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Decision {
    pub kind: ArtifactKind,
    pub path: PathBuf,
    #[serde(flatten)]
    pub action: Action,
}

impl Decision {
    pub fn new(kind: ArtifactKind, path: impl Into<PathBuf>, action: Action) -> Self {
        Self {
            kind,
            path: path.into(),
            action,
        }
    }

    /// State the artifact was in when the decision was taken.
    pub fn state(&self) -> ArtifactState {
        match self.action {
            Action::Create { .. } | Action::Emit { .. } => ArtifactState::Absent,
            Action::Patch { .. } | Action::Skipped { .. } => ArtifactState::PresentNeedsPatch,
            Action::Unchanged => ArtifactState::PresentUnchanged,
        }
    }

    /// Content to write, if the decision writes anything.
    pub fn content(&self) -> Option<&str> {
        match &self.action {
            Action::Create { content } | Action::Patch { content } => Some(content),
            _ => None,
        }
    }

    /// `true` for every decision the operator should be told about.
    pub fn is_notable(&self) -> bool {
        !matches!(self.action, Action::Unchanged)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn request(use_case: &str) -> GenerationRequest {
        GenerationRequest::new("Shop", "Order", use_case).unwrap()
    }

    #[test]
    fn paths_follow_layered_layout() {
        let layout = ProjectLayout::default();
        let req = request("GetOrder");

        let expect = [
            (ArtifactKind::Controller, "./Infrastructure/Controllers/OrderController.cs"),
            (ArtifactKind::ServiceInterface, "./Domain/Ports/Input/IOrderService.cs"),
            (ArtifactKind::ServiceImpl, "./Application/Services/OrderService.cs"),
            (ArtifactKind::UseCaseInterface, "./Domain/Ports/Input/IGetOrderUseCase.cs"),
            (ArtifactKind::UseCaseImpl, "./Application/UseCases/GetOrderUseCase.cs"),
            (ArtifactKind::DiRegistration, "./Program.cs"),
        ];

        for (kind, path) in expect {
            assert_eq!(kind.path(&req, &layout).unwrap(), Path::new(path), "{kind}");
        }
    }

    #[test]
    fn use_case_kinds_have_no_path_without_use_case() {
        let layout = ProjectLayout::default();
        let req = request("");
        assert!(ArtifactKind::UseCaseInterface.path(&req, &layout).is_none());
        assert!(ArtifactKind::UseCaseImpl.path(&req, &layout).is_none());
        assert!(ArtifactKind::Controller.path(&req, &layout).is_some());
    }

    #[test]
    fn only_use_case_kinds_require_a_use_case() {
        let required: Vec<_> = ArtifactKind::GENERATION_ORDER
            .into_iter()
            .filter(|k| k.requires_use_case())
            .collect();
        assert_eq!(
            required,
            [ArtifactKind::UseCaseInterface, ArtifactKind::UseCaseImpl]
        );
    }

    #[test]
    fn layout_overrides_extension_and_root() {
        let layout = ProjectLayout::new("/work/api")
            .with_extension(".txt")
            .with_registration_file("Startup");
        let req = request("");
        assert_eq!(
            ArtifactKind::DiRegistration.path(&req, &layout).unwrap(),
            Path::new("/work/api/Startup.txt")
        );
    }

    #[test]
    fn generation_order_puts_registration_last() {
        assert_eq!(
            ArtifactKind::GENERATION_ORDER.last(),
            Some(&ArtifactKind::DiRegistration)
        );
        assert_eq!(ArtifactKind::GENERATION_ORDER.len(), 6);
    }

    #[test]
    fn decision_state_mapping() {
        let create = Decision::new(
            ArtifactKind::Controller,
            "a",
            Action::Create {
                content: "x".into(),
            },
        );
        assert_eq!(create.state(), ArtifactState::Absent);
        assert_eq!(create.content(), Some("x"));

        let unchanged = Decision::new(ArtifactKind::Controller, "a", Action::Unchanged);
        assert_eq!(unchanged.state(), ArtifactState::PresentUnchanged);
        assert!(!unchanged.is_notable());
        assert_eq!(unchanged.content(), None);

        let patch = Decision::new(
            ArtifactKind::ServiceImpl,
            "a",
            Action::Patch {
                content: "y".into(),
            },
        );
        assert_eq!(patch.state(), ArtifactState::PresentNeedsPatch);
    }
}
