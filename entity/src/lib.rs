pub mod prelude;

pub mod alert;
pub mod api_rotation_state;
pub mod company;
pub mod hiring_signal;
pub mod job_posting;
pub mod profile;
pub mod sea_orm_active_enums;
pub mod user_company_track;
pub mod user_preference;
