pub use super::alert::Entity as Alert;
pub use super::api_rotation_state::Entity as ApiRotationState;
pub use super::company::Entity as Company;
pub use super::hiring_signal::Entity as HiringSignal;
pub use super::job_posting::Entity as JobPosting;
pub use super::profile::Entity as Profile;
pub use super::user_company_track::Entity as UserCompanyTrack;
pub use super::user_preference::Entity as UserPreference;
