use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

use crate::model::job::JobDraft;

pub struct JobRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> JobRepository<'a> {
    /// Creates a new instance of [`JobRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds an existing posting matching either the provider-native id or
    /// the content fingerprint.
    pub async fn find_by_external_id_or_hash(
        &self,
        external_id: Option<&str>,
        dedup_hash: &str,
    ) -> Result<Option<entity::job_posting::Model>, DbErr> {
        let mut condition =
            Condition::any().add(entity::job_posting::Column::DedupHash.eq(dedup_hash));

        if let Some(external_id) = external_id {
            condition = condition.add(entity::job_posting::Column::ExternalId.eq(external_id));
        }

        entity::prelude::JobPosting::find()
            .filter(condition)
            .one(self.db)
            .await
    }

    /// Persists a draft as a new active posting.
    pub async fn create(
        &self,
        draft: &JobDraft,
        company_id: Option<i32>,
    ) -> Result<entity::job_posting::Model, DbErr> {
        let tech_stack = draft
            .tech_stack
            .as_ref()
            .map(|stack| serde_json::json!(stack));

        let job = entity::job_posting::ActiveModel {
            company_id: ActiveValue::Set(company_id),
            title: ActiveValue::Set(draft.title.clone()),
            description: ActiveValue::Set(draft.description.clone()),
            department: ActiveValue::Set(draft.department.clone()),
            seniority_level: ActiveValue::Set(draft.seniority_level.clone()),
            location: ActiveValue::Set(draft.location.clone()),
            country: ActiveValue::Set(draft.country.clone()),
            is_remote: ActiveValue::Set(draft.is_remote),
            remote_type: ActiveValue::Set(draft.remote_type.clone()),
            salary_min: ActiveValue::Set(draft.salary_min),
            salary_max: ActiveValue::Set(draft.salary_max),
            salary_currency: ActiveValue::Set(draft.salary_currency.clone()),
            job_type: ActiveValue::Set(draft.job_type.clone()),
            source_type: ActiveValue::Set(draft.source_type.to_string()),
            source_url: ActiveValue::Set(draft.source_url.clone()),
            external_id: ActiveValue::Set(draft.external_id.clone()),
            posted_date: ActiveValue::Set(draft.posted_date),
            is_active: ActiveValue::Set(true),
            tech_stack: ActiveValue::Set(tech_stack),
            dedup_hash: ActiveValue::Set(draft.dedup_hash.clone()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        job.insert(self.db).await
    }

    /// Loads postings by id, for the preference matcher.
    pub async fn find_by_ids(
        &self,
        ids: &[i32],
    ) -> Result<Vec<entity::job_posting::Model>, DbErr> {
        entity::prelude::JobPosting::find()
            .filter(entity::job_posting::Column::Id.is_in(ids.iter().copied()))
            .all(self.db)
            .await
    }
}
