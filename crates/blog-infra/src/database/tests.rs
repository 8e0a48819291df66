use chrono::{Duration, TimeZone, Utc};
use sea_orm::{DatabaseBackend, MockDatabase};

use blog_core::domain::{Article, User};
use blog_core::ports::{ArticleRepository, BaseRepository};

use crate::database::entity::{article, user};
use crate::database::postgres_repo::{PostgresArticleRepository, PostgresUserRepository};

fn article_model(slug: &str, age_days: i64) -> article::Model {
    let added_at = Utc.with_ymd_and_hms(2017, 9, 28, 12, 0, 0).unwrap() - Duration::days(age_days);
    article::Model {
        slug: slug.to_owned(),
        title: format!("Title of {slug}"),
        headline: "Dear Spring community ...".to_owned(),
        content: "Lorem ipsum".to_owned(),
        author_login: "springjuergen".to_owned(),
        added_at: added_at.into(),
    }
}

fn juergen_model() -> user::Model {
    user::Model {
        login: "springjuergen".to_owned(),
        firstname: "Juergen".to_owned(),
        lastname: "Hoeller".to_owned(),
        description: None,
    }
}

#[tokio::test]
async fn test_find_article_by_id() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![article_model("spring-5-ga", 0)]])
        .into_connection();

    let repo = PostgresArticleRepository::new(db);

    let result: Option<Article> = repo.find_by_id("spring-5-ga").await.unwrap();

    let article = result.unwrap();
    assert_eq!(article.slug, "spring-5-ga");
    assert_eq!(article.author_login, "springjuergen");
    assert_eq!(article.added_at, Utc.with_ymd_and_hms(2017, 9, 28, 12, 0, 0).unwrap());
}

#[tokio::test]
async fn test_find_user_by_id_missing() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![Vec::<user::Model>::new()])
        .into_connection();

    let repo = PostgresUserRepository::new(db);

    let result: Option<User> = repo.find_by_id("nobody").await.unwrap();
    assert!(result.is_none());
}

#[tokio::test]
async fn test_find_all_articles_sorted_newest_first() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![
            article_model("spring-4.3-ga", 400),
            article_model("spring-5-ga", 0),
            article_model("spring-4.2-ga", 500),
        ]])
        .into_connection();

    let repo = PostgresArticleRepository::new(db);

    let articles = repo.find_all_by_order_by_added_at_desc().await.unwrap();

    let slugs: Vec<&str> = articles.iter().map(|a| a.slug.as_str()).collect();
    assert_eq!(slugs, vec!["spring-5-ga", "spring-4.3-ga", "spring-4.2-ga"]);
}

#[tokio::test]
async fn test_save_new_user_inserts() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        // existence check, then the row returned by INSERT ... RETURNING
        .append_query_results(vec![Vec::<user::Model>::new()])
        .append_query_results(vec![vec![juergen_model()]])
        .into_connection();

    let repo = PostgresUserRepository::new(db);

    let saved = repo
        .save(User::new("springjuergen", "Juergen", "Hoeller"))
        .await
        .unwrap();

    assert_eq!(saved, User::new("springjuergen", "Juergen", "Hoeller"));
}

#[tokio::test]
async fn test_save_existing_user_updates() {
    let described = user::Model {
        description: Some("Spring Framework lead".to_owned()),
        ..juergen_model()
    };
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        // existence check finds the row, then UPDATE ... RETURNING
        .append_query_results(vec![vec![juergen_model()]])
        .append_query_results(vec![vec![described.clone()]])
        .into_connection();

    let repo = PostgresUserRepository::new(db);

    let updated = User::new("springjuergen", "Juergen", "Hoeller")
        .with_description("Spring Framework lead");
    let saved = repo.save(updated.clone()).await.unwrap();

    assert_eq!(saved, updated);

    let log = repo.db.into_transaction_log();
    assert_eq!(log.len(), 2);
    assert!(format!("{:?}", log[1]).contains("UPDATE"));
}

#[tokio::test]
async fn test_saved_article_reads_back_equal() {
    let precise = Utc.with_ymd_and_hms(2017, 9, 28, 12, 0, 12).unwrap()
        + Duration::nanoseconds(123_456_789);
    let article = Article::new(
        "spring-5-ga",
        "Spring Framework 5.0 goes GA",
        "Dear Spring community ...",
        "Lorem ipsum",
        "springjuergen",
    )
    .with_added_at(precise);

    // timestamptz keeps microseconds
    let stored = article::Model {
        slug: article.slug.clone(),
        title: article.title.clone(),
        headline: article.headline.clone(),
        content: article.content.clone(),
        author_login: article.author_login.clone(),
        added_at: Utc
            .timestamp_micros(precise.timestamp_micros())
            .unwrap()
            .into(),
    };
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![Vec::<article::Model>::new()])
        .append_query_results(vec![vec![stored.clone()]])
        .append_query_results(vec![vec![stored]])
        .into_connection();

    let repo = PostgresArticleRepository::new(db);

    let saved = repo.save(article.clone()).await.unwrap();
    let found: Option<Article> = repo.find_by_id("spring-5-ga").await.unwrap();

    assert_eq!(saved, article);
    assert_eq!(found, Some(article));
}
