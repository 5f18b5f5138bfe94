//! Organization fixtures
//!
//! Builds an organization with an owner, a subscription and optional members
//! directly in the test database.

use super::TestDatabase;
use tenant_rbac::{ActorClaims, Role};
use uuid::Uuid;

/// One organization and its owner
pub struct OrgFixture {
    pub org_id: Uuid,
    pub owner: ActorClaims,
}

impl OrgFixture {
    /// Organization on a tier that allows customization
    pub async fn business(db: &TestDatabase) -> Self {
        Self::on_tier(db, Some(("Business", true))).await
    }

    /// Organization on a tier without the entitlement
    pub async fn free(db: &TestDatabase) -> Self {
        Self::on_tier(db, Some(("Free", false))).await
    }

    /// Organization without any subscription
    pub async fn unsubscribed(db: &TestDatabase) -> Self {
        Self::on_tier(db, None).await
    }

    async fn on_tier(db: &TestDatabase, tier: Option<(&str, bool)>) -> Self {
        let org_id = Uuid::new_v4();
        let owner_id = Uuid::new_v4();

        if let Some((name, allows)) = tier {
            let tier = db
                .db()
                .upsert_tier(name, allows)
                .await
                .expect("Failed to create tier");
            db.db()
                .set_subscription(org_id, tier.id, "active")
                .await
                .expect("Failed to create subscription");
        }
        db.db()
            .add_member(org_id, owner_id, Role::Owner)
            .await
            .expect("Failed to add owner");

        Self {
            org_id,
            owner: ActorClaims::new(owner_id, "owner@example.com", org_id, Role::Owner),
        }
    }

    /// Add a member with `role` and open one session for them
    pub async fn member_with_session(&self, db: &TestDatabase, role: Role) -> (Uuid, String) {
        let user_id = Uuid::new_v4();
        db.db()
            .add_member(self.org_id, user_id, role)
            .await
            .expect("Failed to add member");
        let session = db
            .db()
            .open_session(user_id, chrono::Duration::hours(1))
            .await
            .expect("Failed to open session");
        (user_id, session)
    }
}
