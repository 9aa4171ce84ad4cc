//! Display records passed to the widgets as props.

use serde::{Deserialize, Serialize};

use crate::error::ContentError;

/// A portfolio project card.
///
/// The gallery reads `year`, `tags` and `image`; the device preview reads
/// `url` and `description`. Nothing mutates a project after load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub category: String,
    #[serde(default)]
    pub year: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub image: Option<String>,
}

/// A navigation link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    pub href: String,
    pub label: String,
}

impl NavLink {
    pub fn new(href: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            label: label.into(),
        }
    }
}

/// Everything the page renders, loaded from one JSON document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Showcase {
    #[serde(default)]
    pub gallery: Vec<Project>,
    #[serde(default)]
    pub previews: Vec<Project>,
    #[serde(default)]
    pub nav_links: Vec<NavLink>,
    #[serde(default = "default_cta")]
    pub cta: NavLink,
}

fn default_cta() -> NavLink {
    NavLink::new("/contact", "Get Started")
}

impl Default for Showcase {
    fn default() -> Self {
        Self {
            gallery: Vec::new(),
            previews: Vec::new(),
            nav_links: Vec::new(),
            cta: default_cta(),
        }
    }
}

impl Showcase {
    /// Parse and validate a showcase document.
    ///
    /// Every preview entry must carry a `url`, since the frame has nothing
    /// to embed otherwise.
    pub fn from_json(json: &str) -> Result<Self, ContentError> {
        let showcase: Showcase =
            serde_json::from_str(json).map_err(|e| ContentError::Parse(e.to_string()))?;

        if let Some(project) = showcase.previews.iter().find(|p| p.url.is_none()) {
            return Err(ContentError::MissingUrl(project.title.clone()));
        }

        tracing::debug!(
            gallery = showcase.gallery.len(),
            previews = showcase.previews.len(),
            nav_links = showcase.nav_links.len(),
            "showcase parsed"
        );
        Ok(showcase)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optional_fields_default() {
        let json = r#"{
            "gallery": [{ "title": "Atlas", "category": "Branding" }],
            "nav_links": [{ "href": "/work", "label": "Work" }]
        }"#;
        let showcase = Showcase::from_json(json).unwrap();

        let atlas = &showcase.gallery[0];
        assert_eq!(atlas.year, None);
        assert!(atlas.tags.is_empty());
        assert!(showcase.previews.is_empty());
        assert_eq!(showcase.cta, NavLink::new("/contact", "Get Started"));
    }

    #[test]
    fn test_preview_without_url_rejected() {
        let json = r#"{ "previews": [{ "title": "Nova", "category": "Web" }] }"#;
        assert_eq!(
            Showcase::from_json(json),
            Err(ContentError::MissingUrl("Nova".to_string()))
        );
    }

    #[test]
    fn test_malformed_document() {
        let err = Showcase::from_json("{ \"gallery\": 3 }").unwrap_err();
        assert!(matches!(err, ContentError::Parse(_)));
    }
}
