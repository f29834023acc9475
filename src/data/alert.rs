use chrono::Utc;
use entity::sea_orm_active_enums::AlertType;
use sea_orm::{ActiveValue, DatabaseConnection, DbErr, EntityTrait};

/// An alert awaiting batch insertion.
#[derive(Debug, Clone)]
pub struct NewAlert {
    pub profile_id: i32,
    pub company_id: Option<i32>,
    pub alert_type: AlertType,
    pub title: String,
    pub message: String,
    pub data: Option<serde_json::Value>,
}

pub struct AlertRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AlertRepository<'a> {
    /// Creates a new instance of [`AlertRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a batch of alerts in one statement.
    ///
    /// Returns the number inserted; an empty batch is a no-op.
    pub async fn insert_many(&self, alerts: Vec<NewAlert>) -> Result<usize, DbErr> {
        if alerts.is_empty() {
            return Ok(0);
        }

        let count = alerts.len();
        let now = Utc::now().naive_utc();

        let models = alerts.into_iter().map(|alert| entity::alert::ActiveModel {
            profile_id: ActiveValue::Set(alert.profile_id),
            company_id: ActiveValue::Set(alert.company_id),
            alert_type: ActiveValue::Set(alert.alert_type),
            title: ActiveValue::Set(alert.title),
            message: ActiveValue::Set(alert.message),
            data: ActiveValue::Set(alert.data),
            sent_at: ActiveValue::Set(now),
            ..Default::default()
        });

        entity::prelude::Alert::insert_many(models).exec(self.db).await?;

        Ok(count)
    }
}
