pub mod freelancer;
pub mod skill;

pub use freelancer::FreelancerProfile;
pub use skill::{validate_limit, SearchQuery, SearchResult, SkillRecord};
