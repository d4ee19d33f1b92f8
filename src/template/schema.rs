//! Template document definitions.
//!
//! A template is a catalog entry authored as YAML:
//!
//! ```yaml
//! title: Android build
//! lead: Build and test an Android app
//! summary: ...
//! description: ...
//! image: android.png
//! config: |
//!   workflows: ...
//! steps:
//!   git-clone:
//!   gradle-runner@2.1:
//!     description: Runs the build
//! ```
//!
//! Step keys are raw reference tokens. The same step may appear at two
//! versions because the full token, not the step ID, is the key.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::registry::StepMetadata;

/// A step listed by a template.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TemplateStepEntry {
    /// Template-specific description of how the step is used.
    #[serde(default)]
    pub description: String,

    /// Resolved registry metadata, filled in by the merger.
    #[serde(rename = "step_info", default)]
    pub info: Option<StepMetadata>,
}

/// A catalog template.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Template {
    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub lead: String,

    #[serde(default)]
    pub summary: String,

    #[serde(default)]
    pub description: String,

    /// Image file name shown on the catalog page.
    #[serde(default)]
    pub image: String,

    /// The CI configuration this template provides.
    #[serde(default, alias = "yaml")]
    pub config: String,

    /// Step entries keyed by raw reference token. A token listed without a
    /// body is `None` until merged.
    #[serde(default)]
    pub steps: BTreeMap<String, Option<TemplateStepEntry>>,
}

impl Template {
    /// Parse a template from YAML. An empty document yields `None`.
    pub fn from_yaml(content: &str) -> Result<Option<Self>, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }

    /// Whether every listed step carries resolved metadata.
    pub fn is_fully_resolved(&self) -> bool {
        self.steps
            .values()
            .all(|entry| entry.as_ref().is_some_and(|e| e.info.is_some()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_template() {
        let yaml = r#"
title: Android
lead: Build it
summary: Summary
description: Long text
image: android.png
config: "workflows: {}"
steps:
  git-clone:
  gradle-runner@2.1:
    description: Runs gradle
"#;
        let tpl = Template::from_yaml(yaml).unwrap().unwrap();
        assert_eq!(tpl.title, "Android");
        assert_eq!(tpl.image, "android.png");
        assert_eq!(tpl.config, "workflows: {}");
        assert_eq!(tpl.steps.len(), 2);
        assert_eq!(tpl.steps["git-clone"], None);
        assert_eq!(
            tpl.steps["gradle-runner@2.1"].as_ref().unwrap().description,
            "Runs gradle"
        );
    }

    #[test]
    fn accepts_legacy_yaml_key_for_config() {
        let tpl = Template::from_yaml("title: T\nyaml: abc\n").unwrap().unwrap();
        assert_eq!(tpl.config, "abc");
    }

    #[test]
    fn missing_fields_default_to_empty() {
        let tpl = Template::from_yaml("title: only\n").unwrap().unwrap();
        assert!(tpl.config.is_empty());
        assert!(tpl.steps.is_empty());
    }

    #[test]
    fn empty_document_is_none() {
        assert_eq!(Template::from_yaml("").unwrap(), None);
        assert_eq!(Template::from_yaml("~\n").unwrap(), None);
    }

    #[test]
    fn same_step_at_two_versions_coexists() {
        let tpl = Template::from_yaml("steps:\n  script@1.0:\n  script@2.0:\n")
            .unwrap()
            .unwrap();
        assert!(tpl.steps.contains_key("script@1.0"));
        assert!(tpl.steps.contains_key("script@2.0"));
    }

    #[test]
    fn serializes_step_info_key() {
        let mut tpl = Template::default();
        tpl.steps.insert(
            "s1".into(),
            Some(TemplateStepEntry {
                description: String::new(),
                info: Some(StepMetadata::new(serde_json::json!({"title": "S"}))),
            }),
        );
        let json = serde_json::to_value(&tpl).unwrap();
        assert_eq!(json["steps"]["s1"]["step_info"]["title"], "S");
        assert!(json.get("config").is_some());
    }

    #[test]
    fn fully_resolved_requires_info_everywhere() {
        let mut tpl = Template::default();
        tpl.steps.insert("a".into(), None);
        assert!(!tpl.is_fully_resolved());
        tpl.steps.insert(
            "a".into(),
            Some(TemplateStepEntry {
                description: String::new(),
                info: Some(StepMetadata::default()),
            }),
        );
        assert!(tpl.is_fully_resolved());
    }
}
