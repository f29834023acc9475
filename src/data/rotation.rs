use chrono::Utc;
use entity::sea_orm_active_enums::ApiStatus;
use sea_orm::sea_query::NullOrdering;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, Order,
    QueryFilter, QueryOrder, QuerySelect,
};

pub struct RotationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RotationRepository<'a> {
    /// Creates a new instance of [`RotationRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_by_name(
        &self,
        api_name: &str,
    ) -> Result<Option<entity::api_rotation_state::Model>, DbErr> {
        entity::prelude::ApiRotationState::find()
            .filter(entity::api_rotation_state::Column::ApiName.eq(api_name))
            .one(self.db)
            .await
    }

    /// Active providers, least recently used first.
    ///
    /// Providers that have never been used sort ahead of everything else so
    /// a freshly seeded provider gets its first request promptly.
    pub async fn get_active_least_recently_used(
        &self,
        limit: u64,
    ) -> Result<Vec<entity::api_rotation_state::Model>, DbErr> {
        entity::prelude::ApiRotationState::find()
            .filter(entity::api_rotation_state::Column::Status.eq(ApiStatus::Active))
            .order_by_with_nulls(
                entity::api_rotation_state::Column::LastUsedAt,
                Order::Asc,
                NullOrdering::First,
            )
            .limit(limit)
            .all(self.db)
            .await
    }

    /// Seeds quota state for a provider.
    pub async fn create(
        &self,
        api_name: &str,
        monthly_limit: i32,
    ) -> Result<entity::api_rotation_state::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let state = entity::api_rotation_state::ActiveModel {
            api_name: ActiveValue::Set(api_name.to_string()),
            last_used_at: ActiveValue::Set(None),
            requests_used: ActiveValue::Set(0),
            monthly_limit: ActiveValue::Set(monthly_limit),
            status: ActiveValue::Set(ApiStatus::Active),
            error_count: ActiveValue::Set(0),
            last_error: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        state.insert(self.db).await
    }

    /// Records one fetch attempt against a provider's quota state.
    ///
    /// Usage and recency always advance; a failure additionally bumps the
    /// error count, stores the message, and moves the provider to `error`
    /// status (rate_limited/disabled transitions are administrative).
    pub async fn record_attempt(
        &self,
        state: entity::api_rotation_state::Model,
        error: Option<String>,
    ) -> Result<entity::api_rotation_state::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let mut active: entity::api_rotation_state::ActiveModel = state.clone().into();
        active.requests_used = ActiveValue::Set(state.requests_used + 1);
        active.last_used_at = ActiveValue::Set(Some(now));
        active.updated_at = ActiveValue::Set(now);

        if let Some(message) = error {
            active.error_count = ActiveValue::Set(state.error_count + 1);
            active.last_error = ActiveValue::Set(Some(message));
            active.status = ActiveValue::Set(ApiStatus::Error);
        }

        active.update(self.db).await
    }
}
