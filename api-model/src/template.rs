use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::{PageResponse, Paging};

/// Rendering engine a template version is written for.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "client", non_exhaustive)]
#[serde(rename_all = "snake_case")]
pub enum TemplateEngine {
    #[default]
    Handlebars,
    Go,
}

impl std::fmt::Display for TemplateEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", serde_variant::to_variant_name(self).unwrap())
    }
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Template {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub created_at: Option<DateTime<Utc>>,
}

/// Sparse update; unset fields are left unchanged by the server.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateTemplate {
    pub description: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TemplateVersion {
    pub tag: String,
    /// Template body in the `engine`'s syntax.
    #[serde(default)]
    pub template: String,
    #[serde(default)]
    pub engine: TemplateEngine,
    #[serde(default)]
    pub comment: String,
    /// At most one version of a template is active; activating one
    /// deactivates the rest server-side.
    #[serde(default)]
    pub active: bool,
    pub created_at: Option<DateTime<Utc>>,
}

/// Sparse update; unset fields are left unchanged by the server.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateTemplateVersion {
    pub template: Option<String>,
    pub comment: Option<String>,
    pub active: Option<bool>,
}

/// Listing envelope for template versions. Versions arrive nested under
/// the owning template rather than in a top-level items list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TemplateVersionsPage {
    pub template: TemplateWithVersions,
    #[serde(default)]
    pub paging: Paging,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TemplateWithVersions {
    #[serde(flatten)]
    pub template: Template,
    #[serde(default)]
    pub versions: Vec<TemplateVersion>,
}

impl PageResponse for TemplateVersionsPage {
    type Item = TemplateVersion;

    fn paging(&self) -> &Paging {
        &self.paging
    }

    fn into_items(self) -> Vec<TemplateVersion> {
        self.template.versions
    }
}

#[cfg(test)]
mod tests {
    use anyhow::Result;

    use super::*;

    #[test]
    fn versions_page_unnests_items() -> Result<()> {
        let page: TemplateVersionsPage = serde_json::from_str(
            r#"{
                "template": {
                    "name": "welcome",
                    "description": "Signup greeting",
                    "versions": [
                        {"tag": "v1", "engine": "go", "active": false},
                        {"tag": "v2", "engine": "handlebars", "active": true}
                    ]
                },
                "paging": {"next": "https://api.mailroom.dev/page/2"}
            }"#,
        )?;

        assert_eq!(page.template.template.name, "welcome");
        assert_eq!(page.paging().next_link(), Some("https://api.mailroom.dev/page/2"));

        let versions = page.into_items();
        assert_eq!(versions.len(), 2);
        assert_eq!(versions[0].tag, "v1");
        assert_eq!(versions[0].engine, TemplateEngine::Go);
        assert!(versions[1].active);
        Ok(())
    }
}
