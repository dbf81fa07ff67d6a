//! C# template bodies for the six artifact kinds.
//!
//! Every function is a pure function of its name arguments. The layouts are
//! fixed: `MarkerPatcher` relies on the declaration and constructor shapes
//! produced here.

use grog_core::{
    application::ports::TemplateRenderer,
    domain::{
        ArtifactKind, DomainError, GenerationRequest,
        request::{use_case_field, use_case_interface, use_case_parameter},
    },
    error::{GrogError, GrogResult},
};
use tracing::instrument;

/// Renderer producing ASP.NET-style C# sources.
#[derive(Debug, Clone, Copy, Default)]
pub struct CSharpRenderer;

impl CSharpRenderer {
    /// Create a new C# renderer.
    pub fn new() -> Self {
        Self
    }
}

impl TemplateRenderer for CSharpRenderer {
    #[instrument(skip_all, fields(%kind))]
    fn render(&self, kind: ArtifactKind, request: &GenerationRequest) -> GrogResult<String> {
        let entity = request.entity();
        let namespace = request.namespace();
        let use_case = request.use_case();

        let require_use_case = || {
            use_case.ok_or_else(|| {
                GrogError::from(DomainError::UseCaseRequired {
                    kind: kind.to_string(),
                })
            })
        };

        let rendered = match kind {
            ArtifactKind::Controller => render_controller(entity, namespace),
            ArtifactKind::ServiceInterface => render_service_interface(entity, namespace, use_case),
            ArtifactKind::ServiceImpl => render_service_impl(entity, namespace, use_case),
            ArtifactKind::UseCaseInterface => {
                render_use_case_interface(require_use_case()?, namespace)
            }
            ArtifactKind::UseCaseImpl => render_use_case_impl(require_use_case()?, namespace),
            ArtifactKind::DiRegistration => render_registration_block(entity, use_case),
        };

        Ok(rendered)
    }
}

/// Controller exposing a single `Ping` health check.
pub fn render_controller(entity: &str, namespace: &str) -> String {
    format!(
        r#"using Microsoft.AspNetCore.Mvc;
using {namespace}.Domain.Ports.Input;

namespace {namespace}.Infrastructure.Controllers;

[ApiController]
[Route("api/[controller]")]
public class {entity}Controller : ControllerBase
{{
    private readonly ILogger<{entity}Controller> _logger;
    private readonly I{entity}Service _service;

    public {entity}Controller(ILogger<{entity}Controller> logger, I{entity}Service service)
    {{
        _logger = logger;
        _service = service;
    }}

    /// <summary>
    /// Health check.
    /// </summary>
    /// <returns>pong and the server time</returns>
    [HttpGet("")]
    public ActionResult<string> Ping()
    {{
        try
        {{
            _logger.LogInformation("Ping executed");
            return Ok($"pong {{DateTime.Now:yyyy-MM-dd HH:mm:ss}}");
        }}
        catch (Exception e)
        {{
            _logger.LogError(e, "Ping failed");
            return Problem(e.Message);
        }}
    }}
}}
"#
    )
}

/// `I<Entity>Service`, extending the use-case interface when one is given.
pub fn render_service_interface(entity: &str, namespace: &str, use_case: Option<&str>) -> String {
    let bases = use_case
        .map(|uc| format!(" : {}", use_case_interface(uc)))
        .unwrap_or_default();

    format!(
        r#"namespace {namespace}.Domain.Ports.Input;

public interface I{entity}Service{bases}
{{
}}
"#
    )
}

/// `<Entity>Service`, with the use case injected through the constructor.
pub fn render_service_impl(entity: &str, namespace: &str, use_case: Option<&str>) -> String {
    let (field, parameter, assignment) = match use_case {
        Some(uc) => {
            let ty = use_case_interface(uc);
            let field = use_case_field(uc);
            let param = use_case_parameter(uc);
            (
                format!("    private {ty} {field};\n"),
                format!("{ty} {param}"),
                format!("        {field} = {param};\n"),
            )
        }
        None => Default::default(),
    };

    format!(
        r#"using NLog;
using {namespace}.Domain.Ports.Input;

namespace {namespace}.Application.Services;

public class {entity}Service : I{entity}Service
{{
    private Logger _logger = LogManager.GetCurrentClassLogger();
{field}    public {entity}Service({parameter})
    {{
{assignment}    }}
}}
"#
    )
}

/// Empty `I<UseCase>UseCase`.
pub fn render_use_case_interface(use_case: &str, namespace: &str) -> String {
    format!(
        r#"namespace {namespace}.Domain.Ports.Input;

public interface I{use_case}UseCase
{{
}}
"#
    )
}

/// Empty `<UseCase>UseCase` implementing its interface.
pub fn render_use_case_impl(use_case: &str, namespace: &str) -> String {
    format!(
        r#"using NLog;
using {namespace}.Domain.Ports.Input;

namespace {namespace}.Application.UseCases;

public class {use_case}UseCase : I{use_case}UseCase
{{
    private Logger _logger = LogManager.GetCurrentClassLogger();
    public {use_case}UseCase()
    {{
    }}
}}
"#
    )
}

/// Scoped registrations for the composition root: use case first, then the
/// service that depends on it.
pub fn render_registration_block(entity: &str, use_case: Option<&str>) -> String {
    let mut lines = Vec::with_capacity(2);
    if let Some(uc) = use_case {
        lines.push(format!(
            "builder.Services.AddScoped<{}, {uc}UseCase>();",
            use_case_interface(uc)
        ));
    }
    lines.push(format!(
        "builder.Services.AddScoped<I{entity}Service, {entity}Service>();"
    ));
    lines.join("\n")
}
