//! Database integration tests
//!
//! Exercises the SeaORM store implementations on in-memory SQLite.

#[cfg(test)]
mod tests {
    use crate::common::TestDatabase;
    use crate::{assert_err, assert_ok};
    use tenant_rbac::config::DatabaseConfig;
    use tenant_rbac::core::default_catalog;
    use tenant_rbac::core::traits::{
        CapabilityStore, OverrideStore, SessionInvalidator, SubscriptionStore,
    };
    use tenant_rbac::storage::database::{Database, DatabaseBackendType};
    use tenant_rbac::{CapabilityOverride, Role};
    use uuid::Uuid;

    fn statuses() -> Vec<String> {
        vec!["active".to_string(), "trialing".to_string()]
    }

    #[tokio::test]
    async fn test_database_health_check() {
        let db = TestDatabase::empty().await;
        assert_eq!(db.db().backend_type(), DatabaseBackendType::SQLite);
        assert_ok!(db.db().health_check().await);
    }

    #[tokio::test]
    async fn test_connection_failure_is_reported() {
        let config = DatabaseConfig {
            url: "sqlite:///nonexistent-dir/for/sure/rbac.db".to_string(),
            max_connections: 1,
            connection_timeout: 1,
        };
        assert_err!(Database::new(&config).await);
    }

    #[tokio::test]
    async fn test_seed_catalog_is_idempotent() {
        let db = TestDatabase::empty().await;

        let first = assert_ok!(db.db().seed_catalog().await);
        assert_eq!(first.inserted, default_catalog().len());
        assert_eq!(first.existing, 0);

        let second = assert_ok!(db.db().seed_catalog().await);
        assert_eq!(second.inserted, 0);
        assert_eq!(second.existing, default_catalog().len());

        let catalog = assert_ok!(db.db().list_capabilities().await);
        assert_eq!(catalog.len(), default_catalog().len());
    }

    #[tokio::test]
    async fn test_capability_lookup_preserves_minimum_role() {
        let db = TestDatabase::new().await;

        let delete = assert_ok!(db.db().find_capability_by_key("projects.delete").await).unwrap();
        assert_eq!(delete.min_role_required, Some(Role::Admin));

        let manage = assert_ok!(db.db().find_capability_by_key("billing.manage").await).unwrap();
        assert_eq!(manage.min_role_required, None);

        assert!(assert_ok!(db.db().find_capability_by_key("no.such").await).is_none());

        let keys = vec![
            "projects.view".to_string(),
            "no.such".to_string(),
            "members.invite".to_string(),
        ];
        let found = assert_ok!(db.db().find_capabilities_by_keys(&keys).await);
        assert_eq!(found.len(), 2);
        assert!(assert_ok!(db.db().find_capabilities_by_keys(&[]).await).is_empty());
    }

    #[tokio::test]
    async fn test_upsert_overrides_updates_in_place() {
        let db = TestDatabase::new().await;
        let org_id = Uuid::new_v4();
        let owner = Uuid::new_v4();
        let capability = assert_ok!(db.db().find_capability_by_key("projects.delete").await).unwrap();

        let row = CapabilityOverride::new(org_id, Role::Member, capability.id, true, owner);
        assert_eq!(assert_ok!(db.db().upsert_overrides(&[row.clone()]).await), 1);
        // Same value again leaves the row alone
        assert_eq!(assert_ok!(db.db().upsert_overrides(&[row]).await), 0);

        let other_owner = Uuid::new_v4();
        let row = CapabilityOverride::new(org_id, Role::Member, capability.id, false, other_owner);
        assert_eq!(assert_ok!(db.db().upsert_overrides(&[row]).await), 1);

        let stored = assert_ok!(db.db().list_overrides(org_id, Role::Member).await);
        assert_eq!(stored.len(), 1);
        assert!(!stored[0].granted);
        assert_eq!(stored[0].updated_by, other_owner);

        let found = assert_ok!(
            db.db()
                .find_override(org_id, Role::Member, capability.id)
                .await
        );
        assert_eq!(found.map(|o| o.granted), Some(false));

        assert_eq!(assert_ok!(db.db().upsert_overrides(&[]).await), 0);
    }

    #[tokio::test]
    async fn test_upsert_overrides_counts_only_changed_rows() {
        let db = TestDatabase::new().await;
        let org_id = Uuid::new_v4();
        let owner = Uuid::new_v4();
        let delete = assert_ok!(db.db().find_capability_by_key("projects.delete").await).unwrap();
        let invite = assert_ok!(db.db().find_capability_by_key("members.invite").await).unwrap();

        let first = vec![
            CapabilityOverride::new(org_id, Role::Member, delete.id, true, owner),
            CapabilityOverride::new(org_id, Role::Member, invite.id, false, owner),
        ];
        assert_eq!(assert_ok!(db.db().upsert_overrides(&first).await), 2);

        let second = vec![
            CapabilityOverride::new(org_id, Role::Member, delete.id, true, owner),
            CapabilityOverride::new(org_id, Role::Member, invite.id, true, owner),
        ];
        assert_eq!(assert_ok!(db.db().upsert_overrides(&second).await), 1);

        let stored = assert_ok!(db.db().list_overrides(org_id, Role::Member).await);
        assert_eq!(stored.len(), 2);
        assert!(stored.iter().all(|o| o.granted));
    }

    #[tokio::test]
    async fn test_member_role_lookup() {
        let db = TestDatabase::new().await;
        let org_id = Uuid::new_v4();
        let user = Uuid::new_v4();

        assert_eq!(assert_ok!(db.db().member_role(org_id, user).await), None);

        assert_ok!(db.db().add_member(org_id, user, Role::Admin).await);
        assert_eq!(
            assert_ok!(db.db().member_role(org_id, user).await),
            Some(Role::Admin)
        );
        assert_eq!(
            assert_ok!(db.db().member_role(Uuid::new_v4(), user).await),
            None
        );

        assert_ok!(db.db().add_member(org_id, user, Role::Owner).await);
        assert_eq!(
            assert_ok!(db.db().member_role(org_id, user).await),
            Some(Role::Owner)
        );
    }

    #[tokio::test]
    async fn test_delete_overrides_is_scoped_to_org_and_role() {
        let db = TestDatabase::new().await;
        let org_id = Uuid::new_v4();
        let other_org = Uuid::new_v4();
        let owner = Uuid::new_v4();
        let capability = assert_ok!(db.db().find_capability_by_key("settings.edit").await).unwrap();

        let rows = vec![
            CapabilityOverride::new(org_id, Role::Admin, capability.id, true, owner),
            CapabilityOverride::new(org_id, Role::Member, capability.id, true, owner),
            CapabilityOverride::new(other_org, Role::Admin, capability.id, true, owner),
        ];
        assert_eq!(assert_ok!(db.db().upsert_overrides(&rows).await), 3);

        assert_eq!(assert_ok!(db.db().delete_overrides(org_id, Role::Admin).await), 1);
        assert_eq!(assert_ok!(db.db().delete_overrides(org_id, Role::Admin).await), 0);
        assert_eq!(
            assert_ok!(db.db().list_overrides(org_id, Role::Member).await).len(),
            1
        );
        assert_eq!(
            assert_ok!(db.db().list_overrides(other_org, Role::Admin).await).len(),
            1
        );
    }

    #[tokio::test]
    async fn test_find_active_tier_respects_status() {
        let db = TestDatabase::new().await;
        let org_id = Uuid::new_v4();
        let tier = assert_ok!(db.db().upsert_tier("Business", true).await);

        assert!(assert_ok!(db.db().find_active_tier(org_id, &statuses()).await).is_none());

        assert_ok!(db.db().set_subscription(org_id, tier.id, "trialing").await);
        let found = assert_ok!(db.db().find_active_tier(org_id, &statuses()).await).unwrap();
        assert_eq!(found.name, "Business");
        assert!(found.allows_custom_permissions);

        assert_ok!(db.db().set_subscription(org_id, tier.id, "canceled").await);
        assert!(assert_ok!(db.db().find_active_tier(org_id, &statuses()).await).is_none());
    }

    #[tokio::test]
    async fn test_upsert_tier_updates_flag() {
        let db = TestDatabase::new().await;
        let first = assert_ok!(db.db().upsert_tier("Pro", false).await);
        let second = assert_ok!(db.db().upsert_tier("Pro", true).await);
        assert_eq!(first.id, second.id);
        assert!(second.allows_custom_permissions);
    }

    #[tokio::test]
    async fn test_force_logout_only_touches_role_holders() {
        let db = TestDatabase::new().await;
        let org_id = Uuid::new_v4();
        let other_org = Uuid::new_v4();
        let member = Uuid::new_v4();
        let admin = Uuid::new_v4();
        let outsider = Uuid::new_v4();

        assert_ok!(db.db().add_member(org_id, member, Role::Member).await);
        assert_ok!(db.db().add_member(org_id, admin, Role::Admin).await);
        assert_ok!(db.db().add_member(other_org, outsider, Role::Member).await);

        let ttl = chrono::Duration::hours(1);
        let member_a = assert_ok!(db.db().open_session(member, ttl).await);
        let member_b = assert_ok!(db.db().open_session(member, ttl).await);
        let admin_session = assert_ok!(db.db().open_session(admin, ttl).await);
        let outsider_session = assert_ok!(db.db().open_session(outsider, ttl).await);

        let affected = assert_ok!(db.db().force_logout_users_by_role(org_id, Role::Member).await);
        assert_eq!(affected, 2);

        assert!(!assert_ok!(db.db().is_session_active(&member_a).await));
        assert!(!assert_ok!(db.db().is_session_active(&member_b).await));
        assert!(assert_ok!(db.db().is_session_active(&admin_session).await));
        assert!(assert_ok!(db.db().is_session_active(&outsider_session).await));

        // Already inactive sessions are not counted again
        let again = assert_ok!(db.db().force_logout_users_by_role(org_id, Role::Member).await);
        assert_eq!(again, 0);

        let nobody = assert_ok!(
            db.db()
                .force_logout_users_by_role(org_id, Role::SuperAdmin)
                .await
        );
        assert_eq!(nobody, 0);
    }
}
