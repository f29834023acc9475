use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "company")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    pub website: Option<String>,
    pub industry: Option<String>,
    pub size_category: Option<String>,
    pub logo_url: Option<String>,
    pub careers_page_url: Option<String>,
    pub linkedin_url: Option<String>,
    pub employee_count: Option<i32>,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::hiring_signal::Entity")]
    HiringSignal,
    #[sea_orm(has_many = "super::job_posting::Entity")]
    JobPosting,
    #[sea_orm(has_many = "super::user_company_track::Entity")]
    UserCompanyTrack,
}

impl Related<super::hiring_signal::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::HiringSignal.def()
    }
}

impl Related<super::job_posting::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::JobPosting.def()
    }
}

impl Related<super::user_company_track::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserCompanyTrack.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
