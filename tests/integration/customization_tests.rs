//! Capability customization against the SeaORM backend
//!
//! Covers tier gating, atomic batch writes and selective session
//! invalidation end to end.

#[cfg(test)]
mod tests {
    use crate::common::{OrgFixture, TestDatabase};
    use tenant_rbac::core::traits::{CapabilityStore, OverrideStore};
    use tenant_rbac::{CapabilityChange, ErrorKind, Role};

    #[tokio::test]
    async fn test_business_org_batch_applies_and_logs_out_role() {
        let db = TestDatabase::new().await;
        let org = OrgFixture::business(&db).await;
        let (_, member_session) = org.member_with_session(&db, Role::Member).await;
        let (_, admin_session) = org.member_with_session(&db, Role::Admin).await;
        let rbac = db.system();

        let changes = vec![
            CapabilityChange::grant("projects.delete"),
            CapabilityChange::revoke("projects.create"),
            CapabilityChange::grant("members.invite"),
        ];
        let result = rbac
            .apply_changes(Some(&org.owner), org.org_id, Role::Member, &changes)
            .await;

        assert!(result.success, "{}", result.message);
        let outcome = result.data.unwrap();
        assert_eq!(outcome.applied_count, 3);
        assert_eq!(outcome.affected_session_count, 1);
        assert_eq!(result.message, "Updated 3 capabilities for the member role");

        assert!(!db.db().is_session_active(&member_session).await.unwrap());
        assert!(db.db().is_session_active(&admin_session).await.unwrap());

        let effective = rbac
            .effective_capabilities(org.org_id, Role::Member)
            .await
            .unwrap();
        assert!(effective.contains("projects.delete"));
        assert!(effective.contains("members.invite"));
        assert!(!effective.contains("projects.create"));
        assert!(effective.contains("projects.view"));
    }

    #[tokio::test]
    async fn test_revoke_then_grant_member_delete() {
        let db = TestDatabase::new().await;
        let org = OrgFixture::business(&db).await;
        let (_, session) = org.member_with_session(&db, Role::Member).await;
        let rbac = db.system();
        let capability = db
            .db()
            .find_capability_by_key("projects.delete")
            .await
            .unwrap()
            .unwrap();

        let revoked = rbac
            .revoke(Some(&org.owner), org.org_id, Role::Member, "projects.delete")
            .await;
        assert!(revoked.success, "{}", revoked.message);
        assert_eq!(revoked.data.unwrap().applied_count, 1);
        assert!(
            !rbac
                .get_effective_state(org.org_id, Role::Member, "projects.delete")
                .await
                .unwrap()
        );
        let stored = db
            .db()
            .find_override(org.org_id, Role::Member, capability.id)
            .await
            .unwrap();
        assert_eq!(stored.map(|o| o.granted), Some(false));

        let granted = rbac
            .grant(Some(&org.owner), org.org_id, Role::Member, "projects.delete")
            .await;
        assert!(granted.success, "{}", granted.message);
        assert_eq!(granted.data.unwrap().applied_count, 1);
        assert!(
            rbac.get_effective_state(org.org_id, Role::Member, "projects.delete")
                .await
                .unwrap()
        );
        assert_eq!(
            db.db()
                .list_overrides(org.org_id, Role::Member)
                .await
                .unwrap()
                .len(),
            1
        );
        assert!(!db.db().is_session_active(&session).await.unwrap());
    }

    #[tokio::test]
    async fn test_owner_role_is_denied_before_tier_check() {
        let db = TestDatabase::new().await;
        let org = OrgFixture::free(&db).await;

        let result = db
            .system()
            .revoke(Some(&org.owner), org.org_id, Role::Owner, "billing.manage")
            .await;

        assert_eq!(result.error, Some(ErrorKind::AuthorizationDenied));
    }

    #[tokio::test]
    async fn test_free_org_is_blocked_before_any_write() {
        let db = TestDatabase::new().await;
        let org = OrgFixture::free(&db).await;
        let (_, session) = org.member_with_session(&db, Role::Member).await;
        let rbac = db.system();

        let result = rbac
            .grant(Some(&org.owner), org.org_id, Role::Member, "projects.delete")
            .await;

        assert!(!result.success);
        assert_eq!(result.error, Some(ErrorKind::TierNotEligible));
        assert!(result.message.contains("Upgrade to Business tier"));
        assert!(
            db.db()
                .list_overrides(org.org_id, Role::Member)
                .await
                .unwrap()
                .is_empty()
        );
        assert!(db.db().is_session_active(&session).await.unwrap());
    }

    #[tokio::test]
    async fn test_unsubscribed_org_reports_free_tier() {
        let db = TestDatabase::new().await;
        let org = OrgFixture::unsubscribed(&db).await;

        let eligibility = db.system().can_customize(org.org_id).await.unwrap();
        assert!(!eligibility.allowed);
        assert_eq!(eligibility.tier_name, "free");
    }

    #[tokio::test]
    async fn test_unknown_keys_write_nothing() {
        let db = TestDatabase::new().await;
        let org = OrgFixture::business(&db).await;
        let rbac = db.system();

        let result = rbac
            .apply_changes(
                Some(&org.owner),
                org.org_id,
                Role::Admin,
                &[CapabilityChange::grant("nothing.here")],
            )
            .await;

        assert_eq!(result.error, Some(ErrorKind::ValidationFailed));
        assert_eq!(result.message, "No valid changes to apply");
        assert!(
            db.db()
                .list_overrides(org.org_id, Role::Admin)
                .await
                .unwrap()
                .is_empty()
        );
    }

    #[tokio::test]
    async fn test_repeated_batch_does_not_log_out_again() {
        let db = TestDatabase::new().await;
        let org = OrgFixture::business(&db).await;
        let rbac = db.system();
        let changes = vec![CapabilityChange::grant("billing.view")];

        let first = rbac
            .apply_changes(Some(&org.owner), org.org_id, Role::Admin, &changes)
            .await;
        assert_eq!(first.data.unwrap().applied_count, 1);

        let (_, session) = org.member_with_session(&db, Role::Admin).await;
        let second = rbac
            .apply_changes(Some(&org.owner), org.org_id, Role::Admin, &changes)
            .await;

        let outcome = second.data.unwrap();
        assert_eq!(outcome.applied_count, 0);
        assert_eq!(outcome.unchanged_count, 1);
        assert!(db.db().is_session_active(&session).await.unwrap());
    }

    #[tokio::test]
    async fn test_reset_restores_defaults_and_is_idempotent() {
        let db = TestDatabase::new().await;
        let org = OrgFixture::business(&db).await;
        let rbac = db.system();
        rbac.revoke(Some(&org.owner), org.org_id, Role::ViewOnly, "projects.view")
            .await;
        assert!(
            !rbac
                .get_effective_state(org.org_id, Role::ViewOnly, "projects.view")
                .await
                .unwrap()
        );

        let (_, session) = org.member_with_session(&db, Role::ViewOnly).await;
        let first = rbac.reset_role(Some(&org.owner), org.org_id, Role::ViewOnly).await;
        assert!(first.success);
        let outcome = first.data.unwrap();
        assert_eq!(outcome.removed_count, 1);
        assert_eq!(outcome.affected_session_count, 1);
        assert!(!db.db().is_session_active(&session).await.unwrap());

        let second = rbac.reset_role(Some(&org.owner), org.org_id, Role::ViewOnly).await;
        assert!(second.success);
        assert_eq!(second.data.unwrap().removed_count, 0);

        assert!(
            rbac.get_effective_state(org.org_id, Role::ViewOnly, "projects.view")
                .await
                .unwrap()
        );
    }

    #[tokio::test]
    async fn test_overrides_are_isolated_between_orgs() {
        let db = TestDatabase::new().await;
        let first = OrgFixture::business(&db).await;
        let second = OrgFixture::business(&db).await;
        let rbac = db.system();

        rbac.grant(Some(&first.owner), first.org_id, Role::Member, "settings.view")
            .await;

        assert!(
            rbac.get_effective_state(first.org_id, Role::Member, "settings.view")
                .await
                .unwrap()
        );
        assert!(
            !rbac
                .get_effective_state(second.org_id, Role::Member, "settings.view")
                .await
                .unwrap()
        );

        // An owner cannot reach into another organization
        let result = rbac
            .grant(Some(&first.owner), second.org_id, Role::Member, "settings.view")
            .await;
        assert_eq!(result.error, Some(ErrorKind::AuthorizationDenied));
    }
}
