//! Browser-side access to the backend through the same-origin proxies.

pub mod affiliate;
pub mod auth;
pub mod browser;
pub mod helper;
pub mod member;
pub mod plan;

pub use affiliate::AffiliateService;
pub use member::MemberService;
pub use plan::PlanService;

#[cfg(test)]
pub(crate) mod test;
