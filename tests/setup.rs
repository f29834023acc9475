use chrono::Utc;
use entity::sea_orm_active_enums::ApiStatus;
use mockito::{Server, ServerGuard};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, Database, DatabaseConnection, DbBackend,
    DbErr, Schema,
};

use earlyjob::model::source::greenhouse::GreenhouseFeed;
use earlyjob::service::ingest::IngestService;
use earlyjob::service::source::SourceConfig;

pub struct TestSetup {
    pub server: ServerGuard,
    pub db: DatabaseConnection,
    pub ingest: IngestService,
}

/// Builds the full pipeline against a mock upstream server and an
/// in-memory store with every table created.
pub async fn test_setup() -> Result<TestSetup, DbErr> {
    let server = Server::new_async().await;
    let server_url = server.url();

    let db = Database::connect("sqlite::memory:").await?;
    create_tables(&db).await?;

    let sources = SourceConfig {
        adzuna_base_url: server_url.clone(),
        adzuna_app_id: "test_app_id".to_string(),
        adzuna_app_key: "test_app_key".to_string(),
        remotive_base_url: server_url.clone(),
        greenhouse_feeds: vec![GreenhouseFeed {
            company: "Acme".to_string(),
            url: format!("{}/feeds/acme", server_url),
        }],
    };

    let ingest = IngestService::new(db.clone(), reqwest::Client::new(), sources);

    Ok(TestSetup { server, db, ingest })
}

async fn create_tables(db: &DatabaseConnection) -> Result<(), DbErr> {
    let schema = Schema::new(DbBackend::Sqlite);

    let stmts = vec![
        schema.create_table_from_entity(entity::prelude::Profile),
        schema.create_table_from_entity(entity::prelude::Company),
        schema.create_table_from_entity(entity::prelude::JobPosting),
        schema.create_table_from_entity(entity::prelude::ApiRotationState),
        schema.create_table_from_entity(entity::prelude::UserPreference),
        schema.create_table_from_entity(entity::prelude::UserCompanyTrack),
        schema.create_table_from_entity(entity::prelude::Alert),
        schema.create_table_from_entity(entity::prelude::HiringSignal),
    ];

    for stmt in stmts {
        db.execute(&stmt).await?;
    }

    Ok(())
}

/// Seeds a rotation-state row with explicit usage numbers
pub async fn insert_rotation_state(
    db: &DatabaseConnection,
    api_name: &str,
    requests_used: i32,
    monthly_limit: i32,
) -> Result<entity::api_rotation_state::Model, DbErr> {
    let now = Utc::now().naive_utc();

    entity::api_rotation_state::ActiveModel {
        api_name: ActiveValue::Set(api_name.to_string()),
        last_used_at: ActiveValue::Set(None),
        requests_used: ActiveValue::Set(requests_used),
        monthly_limit: ActiveValue::Set(monthly_limit),
        status: ActiveValue::Set(ApiStatus::Active),
        error_count: ActiveValue::Set(0),
        last_error: ActiveValue::Set(None),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Inserts a user profile
pub async fn create_profile(
    db: &DatabaseConnection,
    email: &str,
) -> Result<entity::profile::Model, DbErr> {
    let now = Utc::now().naive_utc();

    entity::profile::ActiveModel {
        email: ActiveValue::Set(email.to_string()),
        full_name: ActiveValue::Set(None),
        subscription_tier: ActiveValue::Set("free".to_string()),
        subscription_status: ActiveValue::Set("active".to_string()),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Inserts a saved search preference for a profile
pub async fn create_preference(
    db: &DatabaseConnection,
    profile_id: i32,
    keywords: &[&str],
) -> Result<entity::user_preference::Model, DbErr> {
    let now = Utc::now().naive_utc();

    entity::user_preference::ActiveModel {
        profile_id: ActiveValue::Set(profile_id),
        keywords: ActiveValue::Set(Some(serde_json::json!(keywords))),
        remote_only: ActiveValue::Set(false),
        min_salary: ActiveValue::Set(None),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Marks a profile as tracking a company
pub async fn track_company(
    db: &DatabaseConnection,
    profile_id: i32,
    company_id: i32,
) -> Result<entity::user_company_track::Model, DbErr> {
    entity::user_company_track::ActiveModel {
        profile_id: ActiveValue::Set(profile_id),
        company_id: ActiveValue::Set(company_id),
        created_at: ActiveValue::Set(Utc::now().naive_utc()),
        ..Default::default()
    }
    .insert(db)
    .await
}
