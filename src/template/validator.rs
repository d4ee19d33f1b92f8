//! Structural template validation.
//!
//! Checks run in a fixed order and the first failure is reported:
//! 1. the template document exists
//! 2. `title` is non-empty
//! 3. `config` is non-empty
//! 4. `steps` has at least one entry

use crate::error::{Result, TplspecError};
use crate::template::schema::Template;

fn invalid(template_id: &str, field: &str, reason: &str) -> TplspecError {
    TplspecError::Validation {
        template: template_id.to_string(),
        field: field.to_string(),
        reason: reason.to_string(),
    }
}

/// Validate a decoded template before merging.
///
/// # Errors
///
/// Returns `Validation` naming the first field that fails.
pub fn validate(template_id: &str, template: Option<&Template>) -> Result<()> {
    let template = template.ok_or_else(|| invalid(template_id, "template", "is empty"))?;

    if template.title.is_empty() {
        return Err(invalid(template_id, "title", "must not be empty"));
    }

    if template.config.is_empty() {
        return Err(invalid(template_id, "config", "must not be empty"));
    }

    if template.steps.is_empty() {
        return Err(invalid(template_id, "steps", "must list at least one step"));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> Template {
        let mut tpl = Template {
            title: "Title".into(),
            config: "workflows: {}".into(),
            ..Default::default()
        };
        tpl.steps.insert("script".into(), None);
        tpl
    }

    fn failing_field(result: Result<()>) -> String {
        match result {
            Err(TplspecError::Validation { field, .. }) => field,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn accepts_valid_template() {
        assert!(validate("t", Some(&valid())).is_ok());
    }

    #[test]
    fn rejects_missing_template() {
        assert_eq!(failing_field(validate("t", None)), "template");
    }

    #[test]
    fn rejects_empty_title() {
        let tpl = Template {
            title: String::new(),
            ..valid()
        };
        assert_eq!(failing_field(validate("t", Some(&tpl))), "title");
    }

    #[test]
    fn rejects_empty_config() {
        let tpl = Template {
            config: String::new(),
            ..valid()
        };
        assert_eq!(failing_field(validate("t", Some(&tpl))), "config");
    }

    #[test]
    fn rejects_empty_steps() {
        let mut tpl = valid();
        tpl.steps.clear();
        assert_eq!(failing_field(validate("t", Some(&tpl))), "steps");
    }

    #[test]
    fn title_is_checked_before_config_and_steps() {
        let tpl = Template::default();
        assert_eq!(failing_field(validate("t", Some(&tpl))), "title");
    }

    #[test]
    fn config_is_checked_before_steps() {
        let tpl = Template {
            title: "T".into(),
            ..Default::default()
        };
        assert_eq!(failing_field(validate("t", Some(&tpl))), "config");
    }

    #[test]
    fn error_names_template() {
        let err = validate("android", None).unwrap_err();
        assert!(err.to_string().contains("android"));
    }
}
