mod article;
mod project;
mod slug;

pub use self::{
    article::{ArticleFields, ArticleInput, DEFAULT_CONTENT_TYPE, NewArticle},
    project::{ProjectFields, ProjectInput},
    slug::slugify,
};
