//! Merging resolved step metadata into templates.

use crate::error::Result;
use crate::registry::RegistrySnapshot;
use crate::template::schema::{Template, TemplateStepEntry};

/// Resolve every step reference of a template and attach the metadata.
///
/// All references are resolved before the template is touched, so on error
/// the template is left exactly as it was.
///
/// # Errors
///
/// Returns the first `UnknownStepId` or `UnknownStepVersion` encountered.
pub fn merge(template: &mut Template, snapshot: &RegistrySnapshot) -> Result<()> {
    let mut resolved = Vec::with_capacity(template.steps.len());
    for token in template.steps.keys() {
        let info = snapshot.resolve_raw(token)?;
        resolved.push((token.clone(), info.clone()));
    }

    for (token, info) in resolved {
        let entry = template
            .steps
            .entry(token)
            .or_default()
            .get_or_insert_with(TemplateStepEntry::default);
        entry.info = Some(info);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TplspecError;
    use crate::registry::{StepMetadata, StepVersionEntry};
    use serde_json::json;
    use std::collections::BTreeMap;

    fn meta(tag: &str) -> StepMetadata {
        StepMetadata::new(json!({ "title": tag }))
    }

    fn snapshot() -> RegistrySnapshot {
        let mut snapshot = RegistrySnapshot::new();
        snapshot.insert(
            "s1",
            StepVersionEntry {
                latest_version: "2.0".into(),
                versions: BTreeMap::from([("1.0".into(), meta("v1")), ("2.0".into(), meta("v2"))]),
            },
        );
        snapshot
    }

    fn template(tokens: &[&str]) -> Template {
        let mut tpl = Template {
            title: "T".into(),
            config: "c".into(),
            ..Default::default()
        };
        for token in tokens {
            tpl.steps.insert((*token).to_string(), None);
        }
        tpl
    }

    #[test]
    fn fills_missing_entries() {
        let mut tpl = template(&["s1", "s1@1.0"]);
        merge(&mut tpl, &snapshot()).unwrap();

        let latest = tpl.steps["s1"].as_ref().unwrap();
        assert_eq!(latest.description, "");
        assert_eq!(latest.info, Some(meta("v2")));
        assert_eq!(tpl.steps["s1@1.0"].as_ref().unwrap().info, Some(meta("v1")));
        assert!(tpl.is_fully_resolved());
    }

    #[test]
    fn keeps_existing_description() {
        let mut tpl = template(&[]);
        tpl.steps.insert(
            "s1".into(),
            Some(TemplateStepEntry {
                description: "Runs the script".into(),
                info: None,
            }),
        );
        merge(&mut tpl, &snapshot()).unwrap();

        let entry = tpl.steps["s1"].as_ref().unwrap();
        assert_eq!(entry.description, "Runs the script");
        assert_eq!(entry.info, Some(meta("v2")));
    }

    #[test]
    fn overwrites_authored_step_info() {
        let mut tpl = template(&[]);
        tpl.steps.insert(
            "s1@1.0".into(),
            Some(TemplateStepEntry {
                description: String::new(),
                info: Some(meta("stale")),
            }),
        );
        merge(&mut tpl, &snapshot()).unwrap();
        assert_eq!(tpl.steps["s1@1.0"].as_ref().unwrap().info, Some(meta("v1")));
    }

    #[test]
    fn failure_leaves_template_untouched() {
        let mut tpl = template(&["s1", "s1@9.9"]);
        let before = tpl.clone();

        let err = merge(&mut tpl, &snapshot()).unwrap_err();

        assert!(matches!(err, TplspecError::UnknownStepVersion { .. }));
        assert_eq!(tpl, before);
    }

    #[test]
    fn unknown_id_propagates() {
        let mut tpl = template(&["missing@9.9"]);
        let err = merge(&mut tpl, &snapshot()).unwrap_err();
        assert!(matches!(err, TplspecError::UnknownStepId { ref id } if id == "missing"));
    }
}
