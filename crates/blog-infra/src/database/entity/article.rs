//! Article entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "articles")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub slug: String,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub headline: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub author_login: String,
    pub added_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::AuthorLogin",
        to = "super::user::Column::Login",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    User,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to Domain Article.
impl From<Model> for blog_core::domain::Article {
    fn from(model: Model) -> Self {
        Self {
            slug: model.slug,
            title: model.title,
            headline: model.headline,
            content: model.content,
            author_login: model.author_login,
            added_at: model.added_at.into(),
        }
    }
}

/// Conversion from Domain Article to SeaORM ActiveModel.
impl From<blog_core::domain::Article> for ActiveModel {
    fn from(article: blog_core::domain::Article) -> Self {
        Self {
            slug: Set(article.slug),
            title: Set(article.title),
            headline: Set(article.headline),
            content: Set(article.content),
            author_login: Set(article.author_login),
            added_at: Set(article.added_at.into()),
        }
    }
}
