use sea_orm::entity::prelude::*;

/// Remote classification of a job posting. Onsite postings store `NULL`.
#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum RemoteType {
    #[sea_orm(string_value = "fully_remote")]
    FullyRemote,
    #[sea_orm(string_value = "hybrid")]
    Hybrid,
}

#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum ApiStatus {
    #[sea_orm(string_value = "active")]
    Active,
    #[sea_orm(string_value = "rate_limited")]
    RateLimited,
    #[sea_orm(string_value = "error")]
    Error,
    #[sea_orm(string_value = "disabled")]
    Disabled,
}

#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(24))")]
pub enum AlertType {
    #[sea_orm(string_value = "hiring_signal")]
    HiringSignal,
    #[sea_orm(string_value = "job_opportunity")]
    JobOpportunity,
    #[sea_orm(string_value = "networking_tip")]
    NetworkingTip,
}

#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(24))")]
pub enum SignalType {
    #[sea_orm(string_value = "funding")]
    Funding,
    #[sea_orm(string_value = "team_expansion")]
    TeamExpansion,
    #[sea_orm(string_value = "product_launch")]
    ProductLaunch,
    #[sea_orm(string_value = "office_opening")]
    OfficeOpening,
    #[sea_orm(string_value = "leadership_change")]
    LeadershipChange,
    #[sea_orm(string_value = "job_posting")]
    JobPosting,
}
