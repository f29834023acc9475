use sea_orm::entity::prelude::*;

use crate::sea_orm_active_enums::RemoteType;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "job_posting")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub company_id: Option<i32>,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub department: Option<String>,
    pub seniority_level: Option<String>,
    pub location: String,
    pub country: Option<String>,
    pub is_remote: bool,
    pub remote_type: Option<RemoteType>,
    pub salary_min: Option<f64>,
    pub salary_max: Option<f64>,
    pub salary_currency: Option<String>,
    pub job_type: Option<String>,
    pub source_type: String,
    pub source_url: String,
    pub external_id: Option<String>,
    pub posted_date: Option<DateTime>,
    pub is_active: bool,
    pub tech_stack: Option<Json>,
    #[sea_orm(unique)]
    pub dedup_hash: String,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::company::Entity",
        from = "Column::CompanyId",
        to = "super::company::Column::Id"
    )]
    Company,
}

impl Related<super::company::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Company.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
