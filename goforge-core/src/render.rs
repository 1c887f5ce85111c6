//! Placeholder substitution.
//!
//! The template language has exactly one construct: `{{name}}` (inner
//! whitespace allowed), replaced by the matching [`TemplateContext`] value.
//! There is no escaping, no conditionals and no loops.

use crate::context::TemplateContext;
use crate::error::ScaffoldError;

/// Render `body` against `ctx`.
///
/// `template` names the template in error messages only. Unknown names and
/// unterminated `{{` are [`ScaffoldError::UnresolvedPlaceholder`]; nothing is
/// ever substituted with an empty string by default.
pub fn render(template: &str, body: &str, ctx: &TemplateContext) -> Result<String, ScaffoldError> {
    let mut output = String::with_capacity(body.len());
    let mut rest = body;

    while let Some(start) = rest.find("{{") {
        output.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let end = after.find("}}").ok_or_else(|| ScaffoldError::UnresolvedPlaceholder {
            template: template.to_string(),
            placeholder: truncate(&rest[start..]),
        })?;
        let name = after[..end].trim();
        let value = ctx
            .lookup(name)
            .ok_or_else(|| ScaffoldError::UnresolvedPlaceholder {
                template: template.to_string(),
                placeholder: name.to_string(),
            })?;
        output.push_str(value);
        rest = &after[end + 2..];
    }
    output.push_str(rest);

    Ok(output)
}

fn truncate(s: &str) -> String {
    let line = s.lines().next().unwrap_or(s);
    line.chars().take(40).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::Database;

    fn ctx() -> TemplateContext {
        TemplateContext::new("demo", "example.com/demo", Database::Postgres).unwrap()
    }

    #[test]
    fn substitutes_known_placeholders() {
        let out = render("t", "module {{module_path}}\n// {{ project_name }}", &ctx()).unwrap();
        assert_eq!(out, "module example.com/demo\n// demo");
    }

    #[test]
    fn repeated_placeholder() {
        assert_eq!(
            render("t", "{{project_name}}-{{project_name}}", &ctx()).unwrap(),
            "demo-demo"
        );
    }

    #[test]
    fn unknown_placeholder_is_an_error() {
        let err = render("t", "Hello {{unknown}}", &ctx()).unwrap_err();
        match err {
            ScaffoldError::UnresolvedPlaceholder { placeholder, .. } => {
                assert_eq!(placeholder, "unknown")
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn unterminated_placeholder_is_an_error() {
        assert!(matches!(
            render("t", "Hello {{project_name", &ctx()),
            Err(ScaffoldError::UnresolvedPlaceholder { .. })
        ));
    }

    #[test]
    fn empty_placeholder_is_an_error() {
        assert!(render("t", "{{}}", &ctx()).is_err());
    }

    #[test]
    fn single_braces_pass_through() {
        let body = "func main() { fmt.Println(\"{}\") }";
        assert_eq!(render("t", body, &ctx()).unwrap(), body);
    }
}
