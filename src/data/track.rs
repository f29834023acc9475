use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QuerySelect};

pub struct TrackRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TrackRepository<'a> {
    /// Creates a new instance of [`TrackRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Profile ids currently tracking a company, for signal fanout.
    pub async fn get_profile_ids_tracking_company(
        &self,
        company_id: i32,
    ) -> Result<Vec<i32>, DbErr> {
        entity::prelude::UserCompanyTrack::find()
            .select_only()
            .column(entity::user_company_track::Column::ProfileId)
            .filter(entity::user_company_track::Column::CompanyId.eq(company_id))
            .into_tuple::<i32>()
            .all(self.db)
            .await
    }
}
