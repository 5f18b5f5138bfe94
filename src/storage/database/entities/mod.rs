/// Capability catalog entity module
pub mod capability;
/// Organization member entity module
pub mod organization_member;
/// Capability override entity module
pub mod org_role_capability;
/// Subscription entity module
pub mod subscription;
/// Subscription tier entity module
pub mod subscription_tier;
/// User session entity module
pub mod user_session;

pub use capability::Entity as Capability;
pub use org_role_capability::Entity as OrgRoleCapability;
pub use organization_member::Entity as OrganizationMember;
pub use subscription::Entity as Subscription;
pub use subscription_tier::Entity as SubscriptionTier;
pub use user_session::Entity as UserSession;
