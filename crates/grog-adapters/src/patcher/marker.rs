//! Literal-anchor patching of previously generated sources.
//!
//! No parsing: each patch finds a fixed substring (a marker comment, an
//! interface declaration prefix, a constructor opening) and edits around it.
//! This only holds for files with the shapes `CSharpRenderer` produces, or
//! hand edits that keep those anchor lines intact.
//!
//! Each patch checks for its own prior application first, so running the
//! same patch twice leaves the text unchanged. Every line keeps its own
//! ending; inserted lines take the ending of the line they are anchored to.

use grog_core::{
    application::ports::{PatchOutcome, SourcePatcher},
    domain::request::{use_case_field, use_case_interface, use_case_parameter},
};

const DEFAULT_INDENT: &str = "    ";

/// `SourcePatcher` backed by literal anchors.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkerPatcher;

impl MarkerPatcher {
    /// Create a new marker patcher.
    pub fn new() -> Self {
        Self
    }
}

impl SourcePatcher for MarkerPatcher {
    fn patch_registration(&self, content: &str, marker: &str, block: &str) -> PatchOutcome {
        patch_registration(content, marker, block)
    }

    fn patch_interface_base_list(
        &self,
        content: &str,
        entity: &str,
        use_case: &str,
    ) -> PatchOutcome {
        patch_interface_base_list(content, entity, use_case)
    }

    fn patch_constructor_injection(
        &self,
        content: &str,
        entity: &str,
        use_case: &str,
    ) -> PatchOutcome {
        patch_constructor_injection(content, entity, use_case)
    }
}

// ── Registration ──────────────────────────────────────────────────────────────

/// Insert the statements of `block` that `content` lacks after every line
/// containing `marker`, using that line's indentation.
///
/// A statement counts as present only when a line holds exactly that
/// statement, so a commented-out registration is still inserted.
pub fn patch_registration(content: &str, marker: &str, block: &str) -> PatchOutcome {
    if !content.contains(marker) {
        return PatchOutcome::AnchorMissing {
            anchor: marker.to_string(),
        };
    }

    let missing: Vec<&str> = block
        .lines()
        .map(str::trim)
        .filter(|stmt| !stmt.is_empty())
        .filter(|stmt| !content.lines().map(str::trim).any(|l| l == *stmt))
        .collect();

    if missing.is_empty() {
        return PatchOutcome::AlreadyApplied;
    }

    let text = SourceText::new(content);
    let mut out = Vec::with_capacity(text.lines.len() + missing.len());
    for (i, line) in text.lines.iter().enumerate() {
        let eol = text.eols[i];
        out.push(((*line).to_string(), eol));
        if line.contains(marker) {
            let indent = indentation(line);
            out.extend(missing.iter().map(|stmt| (format!("{indent}{stmt}"), eol)));
        }
    }

    PatchOutcome::Applied(text.join(out))
}

// ── Interface base list ───────────────────────────────────────────────────────

/// Prepend `I<use_case>UseCase` to the base list of every `I<entity>Service`
/// declaration.
///
/// The base list may sit on the declaration line or start the next non-blank
/// line. A declaration followed by anything else (generic parameters, a
/// `where` clause) has no safe insertion point and reports the anchor missing.
pub fn patch_interface_base_list(content: &str, entity: &str, use_case: &str) -> PatchOutcome {
    let anchor = format!("public interface I{entity}Service");
    let base = use_case_interface(use_case);

    let text = SourceText::new(content);
    let mut lines: Vec<String> = text.lines.iter().map(|l| (*l).to_string()).collect();
    let mut found = false;
    let mut changed = false;

    for (i, line) in text.lines.iter().enumerate() {
        let Some(end) = find_declaration(line, &anchor) else {
            continue;
        };
        found = true;

        let (head, rest) = line.split_at(end);
        let tail = rest.trim_start();
        let (target, head, list) = if tail.is_empty() {
            match next_code_line(&text.lines, i) {
                Some(j) if text.lines[j].trim_start().starts_with(':') => (j, "", text.lines[j]),
                _ => (i, head, rest),
            }
        } else if tail.starts_with(':') || tail.starts_with('{') {
            (i, head, rest)
        } else {
            return PatchOutcome::AnchorMissing {
                anchor: format!("{anchor} : ..."),
            };
        };

        if declared_bases(&continued_base_list(&text.lines, target, list)).any(|b| b == base) {
            continue;
        }

        lines[target] = format!("{head}{}", prepend_base(list, &base));
        changed = true;
    }

    match (found, changed) {
        (false, _) => PatchOutcome::AnchorMissing { anchor },
        (true, false) => PatchOutcome::AlreadyApplied,
        (true, true) => {
            let out = lines.into_iter().zip(text.eols.iter().copied()).collect();
            PatchOutcome::Applied(text.join(out))
        }
    }
}

/// Byte offset just past `anchor` in `line`, if it appears as a whole name.
fn find_declaration(line: &str, anchor: &str) -> Option<usize> {
    line.match_indices(anchor).find_map(|(start, _)| {
        let end = start + anchor.len();
        let before_ok = line[..start]
            .chars()
            .next_back()
            .is_none_or(|c| !is_ident_char(c));
        let after_ok = line[end..].chars().next().is_none_or(|c| !is_ident_char(c));
        (before_ok && after_ok).then_some(end)
    })
}

/// Index of the first non-blank line after `from`.
fn next_code_line(lines: &[&str], from: usize) -> Option<usize> {
    (from + 1..lines.len()).find(|&j| !lines[j].trim().is_empty())
}

/// `first` joined with the lines that continue it, for base lists written
/// as `: IA,` over several lines.
fn continued_base_list(lines: &[&str], target: usize, first: &str) -> String {
    let mut list = first.to_string();
    let mut next = target + 1;
    while list.trim_end().ends_with(',') && next < lines.len() {
        list.push(' ');
        list.push_str(lines[next]);
        next += 1;
    }
    list
}

/// Base names listed after `:` at the start of `rest`.
fn declared_bases(rest: &str) -> impl Iterator<Item = &str> {
    rest.trim_start()
        .strip_prefix(':')
        .map(|list| list.split('{').next().unwrap_or(""))
        .into_iter()
        .flat_map(|list| list.split(','))
        .map(str::trim)
}

/// `text` with `base` at the front of the base list it starts with, or with a
/// new `: base` clause when it has none.
fn prepend_base(text: &str, base: &str) -> String {
    let lead = text.len() - text.trim_start().len();
    match text[lead..].strip_prefix(':') {
        // `: IA, IB` -> `: I<UC>UseCase, IA, IB`
        Some(existing) => format!("{}: {base},{existing}", &text[..lead]),
        // `` or ` {` -> ` : I<UC>UseCase {`
        None => format!(" : {base}{text}"),
    }
}

fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

// ── Constructor injection ─────────────────────────────────────────────────────

/// Inject `I<use_case>UseCase` into the `<entity>Service` constructor.
///
/// Adds the backing field above the constructor, the parameter at the front
/// of its list, and the assignment as the first statement of its body. The
/// body's opening brace is located by scanning forward from the constructor
/// line (same line, or the next line that is not blank or an initializer).
pub fn patch_constructor_injection(content: &str, entity: &str, use_case: &str) -> PatchOutcome {
    let anchor = format!("public {entity}Service(");
    let ty = use_case_interface(use_case);
    let field = use_case_field(use_case);
    let param = use_case_parameter(use_case);

    let text = SourceText::new(content);
    let Some(ctor) = text
        .lines
        .iter()
        .position(|line| line.trim_start().starts_with(&anchor))
    else {
        return PatchOutcome::AnchorMissing { anchor };
    };
    let ctor_line = text.lines[ctor];

    if content.contains(&format!("{ty} {field};")) || has_parameter(ctor_line, &anchor, &ty) {
        return PatchOutcome::AlreadyApplied;
    }

    let Some(brace) = find_body_brace(&text.lines, ctor) else {
        return PatchOutcome::AnchorMissing {
            anchor: format!("{anchor}...) {{"),
        };
    };

    let unit = indent_unit(content);
    let indent = indentation(ctor_line);
    let body_indent = format!("{}{unit}", indentation(text.lines[brace]));

    let after = ctor_line.find(&anchor).map_or(0, |i| i + anchor.len());
    let (open, params) = ctor_line.split_at(after);
    let rewritten = if params.trim_start().starts_with(')') {
        format!("{open}{ty} {param}{params}")
    } else {
        format!("{open}{ty} {param}, {params}")
    };

    let mut out = Vec::with_capacity(text.lines.len() + 2);
    for (i, line) in text.lines.iter().enumerate() {
        let eol = text.eols[i];
        if i == ctor {
            out.push((format!("{indent}private {ty} {field};"), eol));
            out.push((rewritten.clone(), eol));
        } else {
            out.push(((*line).to_string(), eol));
        }
        if i == brace {
            out.push((format!("{body_indent}{field} = {param};"), eol));
        }
    }

    PatchOutcome::Applied(text.join(out))
}

/// `true` if the single-line parameter list already takes a `ty`.
fn has_parameter(ctor_line: &str, anchor: &str, ty: &str) -> bool {
    let Some(start) = ctor_line.find(anchor) else {
        return false;
    };
    let params = &ctor_line[start + anchor.len()..];
    let params = params.split(')').next().unwrap_or("");
    params
        .split(',')
        .any(|p| p.split_whitespace().next() == Some(ty))
}

/// Index of the line holding the constructor body's `{`.
///
/// Returns `None` for a one-line body (`{ }`) since there is no line to
/// insert after.
fn find_body_brace(lines: &[&str], ctor: usize) -> Option<usize> {
    let ctor_line = lines[ctor].trim_end();
    if ctor_line.ends_with('{') {
        return Some(ctor);
    }
    if ctor_line.contains('{') {
        return None;
    }

    for (offset, line) in lines[ctor + 1..].iter().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with(':') {
            continue;
        }
        return (trimmed == "{").then_some(ctor + 1 + offset);
    }
    None
}

// ── Shared helpers ────────────────────────────────────────────────────────────

/// A source file split into lines, each remembering its own line ending.
///
/// The last line has an empty ending when the file does not end in a newline.
struct SourceText<'a> {
    lines: Vec<&'a str>,
    eols: Vec<&'static str>,
    /// First ending seen in the file, used when an unterminated last line
    /// stops being last.
    fallback: &'static str,
}

impl<'a> SourceText<'a> {
    fn new(content: &'a str) -> Self {
        let (lines, eols): (Vec<_>, Vec<_>) = content
            .split_inclusive('\n')
            .map(|raw| match raw.strip_suffix("\r\n") {
                Some(line) => (line, "\r\n"),
                None => match raw.strip_suffix('\n') {
                    Some(line) => (line, "\n"),
                    None => (raw, ""),
                },
            })
            .unzip();
        let fallback = eols.iter().copied().find(|e| !e.is_empty()).unwrap_or("\n");
        Self {
            lines,
            eols,
            fallback,
        }
    }

    fn join(&self, lines: Vec<(String, &'static str)>) -> String {
        let last = lines.len().saturating_sub(1);
        let mut out = String::new();
        for (i, (line, eol)) in lines.into_iter().enumerate() {
            out.push_str(&line);
            out.push_str(if eol.is_empty() && i < last {
                self.fallback
            } else {
                eol
            });
        }
        out
    }
}

fn indentation(line: &str) -> &str {
    &line[..line.len() - line.trim_start().len()]
}

/// One indentation level as used by the file: a tab if any line starts with
/// one, otherwise four spaces.
fn indent_unit(content: &str) -> &'static str {
    if content.lines().any(|l| l.starts_with('\t')) {
        "\t"
    } else {
        DEFAULT_INDENT
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::csharp::{render_registration_block, render_service_impl, render_service_interface};
    use grog_core::domain::REGISTRATION_MARKER;

    fn applied(outcome: PatchOutcome) -> String {
        match outcome {
            PatchOutcome::Applied(s) => s,
            other => panic!("expected Applied, got {other:?}"),
        }
    }

    const PROGRAM: &str = "var builder = WebApplication.CreateBuilder(args);\n\
                           \n\
                           // Add services to the container.\n\
                           builder.Services.AddControllers();\n\
                           \n\
                           var app = builder.Build();\n";

    // ── registration ──────────────────────────────────────────────────────

    #[test]
    fn registration_goes_after_marker_and_keeps_it() {
        let block = render_registration_block("Order", Some("Ship"));
        let out = applied(patch_registration(PROGRAM, REGISTRATION_MARKER, &block));

        assert!(out.contains(
            "// Add services to the container.\n\
             builder.Services.AddScoped<IShipUseCase, ShipUseCase>();\n\
             builder.Services.AddScoped<IOrderService, OrderService>();\n\
             builder.Services.AddControllers();"
        ));
        assert!(out.ends_with("var app = builder.Build();\n"));
    }

    #[test]
    fn registration_only_adds_missing_statements() {
        let first = applied(patch_registration(
            PROGRAM,
            REGISTRATION_MARKER,
            &render_registration_block("Order", None),
        ));
        let second = applied(patch_registration(
            &first,
            REGISTRATION_MARKER,
            &render_registration_block("Order", Some("Ship")),
        ));

        assert_eq!(second.matches("AddScoped<IOrderService, OrderService>").count(), 1);
        assert_eq!(second.matches("AddScoped<IShipUseCase, ShipUseCase>").count(), 1);
    }

    #[test]
    fn registration_twice_is_already_applied() {
        let block = render_registration_block("Order", Some("Ship"));
        let once = applied(patch_registration(PROGRAM, REGISTRATION_MARKER, &block));
        assert_eq!(
            patch_registration(&once, REGISTRATION_MARKER, &block),
            PatchOutcome::AlreadyApplied
        );
    }

    #[test]
    fn registration_without_marker_reports_anchor() {
        let outcome = patch_registration("var app = 1;\n", REGISTRATION_MARKER, "x();");
        assert_eq!(
            outcome,
            PatchOutcome::AnchorMissing {
                anchor: REGISTRATION_MARKER.into()
            }
        );
    }

    #[test]
    fn registration_follows_marker_indentation_and_crlf() {
        let program = "void Configure()\r\n{\r\n    // Add services to the container.\r\n}\r\n";
        let out = applied(patch_registration(program, REGISTRATION_MARKER, "a();\nb();"));
        assert_eq!(
            out,
            "void Configure()\r\n{\r\n    // Add services to the container.\r\n    a();\r\n    b();\r\n}\r\n"
        );
    }

    #[test]
    fn registration_ignores_commented_out_statement() {
        let program = "// Add services to the container.\n\
                       // builder.Services.AddScoped<IOrderService, OrderService>();\n";
        let block = render_registration_block("Order", None);
        let out = applied(patch_registration(program, REGISTRATION_MARKER, &block));
        assert_eq!(
            out,
            "// Add services to the container.\n\
             builder.Services.AddScoped<IOrderService, OrderService>();\n\
             // builder.Services.AddScoped<IOrderService, OrderService>();\n"
        );
    }

    #[test]
    fn registration_inserts_after_every_marker() {
        let program = "// Add services to the container.\n\
                       if (dev)\n\
                       {\n    \
                       // Add services to the container.\n\
                       }\n";
        let out = applied(patch_registration(program, REGISTRATION_MARKER, "a();"));
        assert_eq!(
            out,
            "// Add services to the container.\n\
             a();\n\
             if (dev)\n\
             {\n    \
             // Add services to the container.\n    \
             a();\n\
             }\n"
        );
    }

    #[test]
    fn registration_keeps_each_line_ending() {
        let program = "var b = 1;\r\n// Add services to the container.\nvar app = 2;\r\n";
        let out = applied(patch_registration(program, REGISTRATION_MARKER, "a();"));
        assert_eq!(
            out,
            "var b = 1;\r\n// Add services to the container.\na();\nvar app = 2;\r\n"
        );
    }

    #[test]
    fn registration_after_unterminated_last_line() {
        let out = applied(patch_registration(
            "x;\r\n// Add services to the container.",
            REGISTRATION_MARKER,
            "a();",
        ));
        assert_eq!(out, "x;\r\n// Add services to the container.\r\na();");
    }

    // ── interface base list ───────────────────────────────────────────────

    #[test]
    fn base_list_added_when_absent() {
        let src = render_service_interface("Order", "Shop", None);
        let out = applied(patch_interface_base_list(&src, "Order", "Ship"));
        assert_eq!(out, render_service_interface("Order", "Shop", Some("Ship")));
    }

    #[test]
    fn base_list_prepends_to_existing_bases() {
        let src = render_service_interface("Order", "Shop", Some("GetOrder"));
        let out = applied(patch_interface_base_list(&src, "Order", "Ship"));
        assert!(out.contains("public interface IOrderService : IShipUseCase, IGetOrderUseCase\n"));
    }

    #[test]
    fn base_list_keeps_brace_on_same_line() {
        let src = "public interface IOrderService {\n}\n";
        let out = applied(patch_interface_base_list(src, "Order", "Ship"));
        assert_eq!(out, "public interface IOrderService : IShipUseCase {\n}\n");
    }

    #[test]
    fn base_list_is_idempotent() {
        let src = render_service_interface("Order", "Shop", Some("Ship"));
        assert_eq!(
            patch_interface_base_list(&src, "Order", "Ship"),
            PatchOutcome::AlreadyApplied
        );
    }

    #[test]
    fn base_list_ignores_longer_names() {
        let src = "public interface IOrderServiceFactory\n{\n}\n";
        assert!(matches!(
            patch_interface_base_list(src, "Order", "Ship"),
            PatchOutcome::AnchorMissing { .. }
        ));
    }

    #[test]
    fn base_list_on_next_line_is_extended() {
        let src = "public interface IOrderService\n    : IGetOrderUseCase\n{\n}\n";
        let out = applied(patch_interface_base_list(src, "Order", "Ship"));
        assert_eq!(
            out,
            "public interface IOrderService\n    : IShipUseCase, IGetOrderUseCase\n{\n}\n"
        );
    }

    #[test]
    fn base_list_on_next_line_already_applied() {
        let src = "public interface IOrderService\n\n    : IShipUseCase\n{\n}\n";
        assert_eq!(
            patch_interface_base_list(src, "Order", "Ship"),
            PatchOutcome::AlreadyApplied
        );
    }

    #[test]
    fn base_list_spanning_lines_already_applied() {
        let src = "public interface IOrderService : IGetOrderUseCase,\n    IShipUseCase\n{\n}\n";
        assert_eq!(
            patch_interface_base_list(src, "Order", "Ship"),
            PatchOutcome::AlreadyApplied
        );
    }

    #[test]
    fn generic_interface_is_anchor_missing() {
        let src = "public interface IOrderService<T> : IA\n{\n}\n";
        assert!(matches!(
            patch_interface_base_list(src, "Order", "Ship"),
            PatchOutcome::AnchorMissing { .. }
        ));
    }

    #[test]
    fn base_list_patches_every_declaration() {
        let src = "#if LEGACY\n\
                   public interface IOrderService\n\
                   #else\n\
                   public interface IOrderService : IGetOrderUseCase\n\
                   #endif\n\
                   {\n\
                   }\n";
        let out = applied(patch_interface_base_list(src, "Order", "Ship"));
        assert_eq!(
            out,
            "#if LEGACY\n\
             public interface IOrderService : IShipUseCase\n\
             #else\n\
             public interface IOrderService : IShipUseCase, IGetOrderUseCase\n\
             #endif\n\
             {\n\
             }\n"
        );
    }

    // ── constructor injection ─────────────────────────────────────────────

    #[test]
    fn constructor_patch_matches_rendered_wiring() {
        let src = render_service_impl("Order", "Shop", None);
        let out = applied(patch_constructor_injection(&src, "Order", "Ship"));
        assert_eq!(out, render_service_impl("Order", "Shop", Some("Ship")));
    }

    #[test]
    fn constructor_patch_prepends_parameter() {
        let src = render_service_impl("Order", "Shop", Some("GetOrder"));
        let out = applied(patch_constructor_injection(&src, "Order", "Ship"));

        assert!(out.contains(
            "    public OrderService(IShipUseCase shipUseCase, IGetOrderUseCase getOrderUseCase)\n"
        ));
        assert!(out.contains(
            "    {\n        _shipUseCase = shipUseCase;\n        _getOrderUseCase = getOrderUseCase;\n    }"
        ));
        assert_eq!(out.matches("private IShipUseCase _shipUseCase;").count(), 1);
        assert_eq!(out.matches("private IGetOrderUseCase _getOrderUseCase;").count(), 1);
    }

    #[test]
    fn constructor_patch_twice_does_not_duplicate() {
        let src = render_service_impl("Order", "Shop", None);
        let once = applied(patch_constructor_injection(&src, "Order", "Ship"));
        assert_eq!(
            patch_constructor_injection(&once, "Order", "Ship"),
            PatchOutcome::AlreadyApplied
        );
        assert_eq!(once.matches("_shipUseCase = shipUseCase;").count(), 1);
    }

    #[test]
    fn constructor_patch_scans_past_blank_and_initializer_lines() {
        let src = "class OrderService\n{\n\tpublic OrderService()\n\t\t: base()\n\n\t{\n\t\tInit();\n\t}\n}\n";
        let out = applied(patch_constructor_injection(src, "Order", "Ship"));
        assert_eq!(
            out,
            "class OrderService\n{\n\tprivate IShipUseCase _shipUseCase;\n\tpublic OrderService(IShipUseCase shipUseCase)\n\t\t: base()\n\n\t{\n\t\t_shipUseCase = shipUseCase;\n\t\tInit();\n\t}\n}\n"
        );
    }

    #[test]
    fn constructor_patch_handles_brace_on_same_line() {
        let src = "    public OrderService() {\n    }\n";
        let out = applied(patch_constructor_injection(src, "Order", "Ship"));
        assert_eq!(
            out,
            "    private IShipUseCase _shipUseCase;\n    public OrderService(IShipUseCase shipUseCase) {\n        _shipUseCase = shipUseCase;\n    }\n"
        );
    }

    #[test]
    fn constructor_without_body_brace_is_anchor_missing() {
        let src = "    public OrderService() { }\n";
        assert!(matches!(
            patch_constructor_injection(src, "Order", "Ship"),
            PatchOutcome::AnchorMissing { .. }
        ));

        let src = "    public OrderService()\n    => Init();\n";
        assert!(matches!(
            patch_constructor_injection(src, "Order", "Ship"),
            PatchOutcome::AnchorMissing { .. }
        ));
    }

    #[test]
    fn missing_constructor_is_anchor_missing() {
        let outcome = patch_constructor_injection("public class OrderService {}\n", "Order", "Ship");
        assert_eq!(
            outcome,
            PatchOutcome::AnchorMissing {
                anchor: "public OrderService(".into()
            }
        );
    }
}
