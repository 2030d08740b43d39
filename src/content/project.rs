use serde::Deserialize;

use crate::error::{Error, Result};

/// 创建或更新项目时提交的请求体
#[derive(Debug, Deserialize)]
pub struct ProjectInput {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub technologies: String,
    #[serde(default)]
    pub thumbnail_url: String,
    #[serde(default)]
    pub github_url: Option<String>,
    #[serde(default)]
    pub live_url: Option<String>,
}

/// 校验后的项目字段
///
/// 空白的 `github_url` / `live_url` 视为未提供。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectFields {
    pub title: String,
    pub description: String,
    pub category: String,
    pub technologies: String,
    pub thumbnail_url: String,
    pub github_url: Option<String>,
    pub live_url: Option<String>,
}

impl TryFrom<ProjectInput> for ProjectFields {
    type Error = Error;

    fn try_from(input: ProjectInput) -> Result<Self> {
        if input.title.trim().is_empty() {
            return Err(Error::BadRequest("title must not be empty".into()));
        }

        fn non_blank(url: Option<String>) -> Option<String> {
            url.filter(|u| !u.trim().is_empty())
        }

        Ok(Self {
            title: input.title,
            description: input.description,
            category: input.category,
            technologies: input.technologies,
            thumbnail_url: input.thumbnail_url,
            github_url: non_blank(input.github_url),
            live_url: non_blank(input.live_url),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optional_urls() {
        let input: ProjectInput = serde_json::from_value(serde_json::json!({
            "title": "folio",
            "technologies": "rust, axum",
            "github_url": "https://github.com/example/folio",
            "live_url": ""
        }))
        .unwrap();

        let fields = ProjectFields::try_from(input).unwrap();
        assert_eq!(
            fields.github_url.as_deref(),
            Some("https://github.com/example/folio")
        );
        assert_eq!(fields.live_url, None);
        assert_eq!(fields.technologies, "rust, axum");
    }

    #[test]
    fn test_blank_title_rejected() {
        let input: ProjectInput =
            serde_json::from_value(serde_json::json!({ "description": "no title" })).unwrap();
        assert!(matches!(
            ProjectFields::try_from(input),
            Err(Error::BadRequest(_))
        ));
    }
}
