use sea_orm::{ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait, QueryFilter};

pub struct PreferenceRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PreferenceRepository<'a> {
    /// Creates a new instance of [`PreferenceRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Loads preference records with at least one non-empty matching criterion.
    ///
    /// Profiles that never filled in a preference contribute nothing to
    /// matching, so they are excluded up front rather than evaluated per job.
    pub async fn find_with_criteria(
        &self,
    ) -> Result<Vec<entity::user_preference::Model>, DbErr> {
        entity::prelude::UserPreference::find()
            .filter(
                Condition::any()
                    .add(
                        Condition::all()
                            .add(entity::user_preference::Column::Keywords.is_not_null())
                            .add(
                                entity::user_preference::Column::Keywords
                                    .ne(serde_json::json!([])),
                            ),
                    )
                    .add(entity::user_preference::Column::RemoteOnly.eq(true))
                    .add(entity::user_preference::Column::MinSalary.is_not_null()),
            )
            .all(self.db)
            .await
    }
}
