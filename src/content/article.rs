use serde::Deserialize;

use super::slugify;
use crate::error::{Error, Result};

/// 未指定时的默认内容格式
pub const DEFAULT_CONTENT_TYPE: &str = "markdown";

/// 创建或更新文章时提交的请求体
///
/// 缺省字段按空字符串处理，`content_type` 缺省或为空时使用 [`DEFAULT_CONTENT_TYPE`]。
#[derive(Debug, Deserialize)]
pub struct ArticleInput {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub content_type: Option<String>,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub tags: String,
}

/// 校验后的文章字段
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleFields {
    pub title: String,
    pub content: String,
    pub content_type: String,
    pub category: String,
    pub tags: String,
}

impl TryFrom<ArticleInput> for ArticleFields {
    type Error = Error;

    fn try_from(input: ArticleInput) -> Result<Self> {
        if input.title.trim().is_empty() {
            return Err(Error::BadRequest("title must not be empty".into()));
        }

        let content_type = input
            .content_type
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| DEFAULT_CONTENT_TYPE.to_string());

        Ok(Self {
            title: input.title,
            content: input.content,
            content_type,
            category: input.category,
            tags: input.tags,
        })
    }
}

/// 待插入的新文章，slug 在此时由标题生成且之后不再变化
#[derive(Debug, Clone)]
pub struct NewArticle {
    pub slug: String,
    pub fields: ArticleFields,
}

impl From<ArticleFields> for NewArticle {
    fn from(fields: ArticleFields) -> Self {
        Self {
            slug: slugify(&fields.title),
            fields,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(json: serde_json::Value) -> ArticleInput {
        serde_json::from_value(json).expect("反序列化失败")
    }

    #[test]
    fn test_content_type_defaults_to_markdown() {
        let fields = ArticleFields::try_from(input(serde_json::json!({
            "title": "Hello",
            "content": "# hi",
            "category": "rust",
            "tags": "a,b"
        })))
        .unwrap();
        assert_eq!(fields.content_type, "markdown");

        let fields = ArticleFields::try_from(input(serde_json::json!({
            "title": "Hello",
            "content_type": ""
        })))
        .unwrap();
        assert_eq!(fields.content_type, "markdown");
    }

    #[test]
    fn test_explicit_content_type_kept() {
        let fields = ArticleFields::try_from(input(serde_json::json!({
            "title": "Hello",
            "content_type": "html"
        })))
        .unwrap();
        assert_eq!(fields.content_type, "html");
        assert_eq!(fields.category, "");
        assert_eq!(fields.tags, "");
    }

    #[test]
    fn test_blank_title_rejected() {
        let result = ArticleFields::try_from(input(serde_json::json!({ "title": "   " })));
        assert!(matches!(result, Err(Error::BadRequest(_))));

        let result = ArticleFields::try_from(input(serde_json::json!({ "content": "x" })));
        assert!(matches!(result, Err(Error::BadRequest(_))));
    }

    #[test]
    fn test_new_article_derives_slug() {
        let fields = ArticleFields::try_from(input(serde_json::json!({
            "title": "Getting Started, Part 1!"
        })))
        .unwrap();
        let article = NewArticle::from(fields);
        assert_eq!(article.slug, "getting-started-part-1");
        assert_eq!(article.fields.title, "Getting Started, Part 1!");
    }
}
