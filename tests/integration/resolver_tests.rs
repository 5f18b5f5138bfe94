//! Effective capability resolution against the SeaORM backend

#[cfg(test)]
mod tests {
    use crate::common::{OrgFixture, TestDatabase};
    use tenant_rbac::core::models::ROLE_HIERARCHY;
    use tenant_rbac::{ActorClaims, ErrorKind, Role};
    use uuid::Uuid;

    #[tokio::test]
    async fn test_defaults_follow_hierarchy() {
        let db = TestDatabase::new().await;
        let org = OrgFixture::business(&db).await;
        let rbac = db.system();

        let expected = [
            (Role::ViewOnly, false),
            (Role::Member, false),
            (Role::Admin, true),
            (Role::SuperAdmin, true),
            (Role::Owner, true),
        ];
        for (role, granted) in expected {
            let state = rbac
                .get_effective_state(org.org_id, role, "projects.delete")
                .await
                .unwrap();
            assert_eq!(state, granted, "{}", role);
        }
    }

    #[tokio::test]
    async fn test_owner_only_capability() {
        let db = TestDatabase::new().await;
        let org = OrgFixture::business(&db).await;
        let rbac = db.system();

        for role in ROLE_HIERARCHY {
            let state = rbac
                .get_effective_state(org.org_id, role, "billing.manage")
                .await
                .unwrap();
            assert_eq!(state, role == Role::Owner);
        }
    }

    #[tokio::test]
    async fn test_unknown_capability_is_not_found() {
        let db = TestDatabase::new().await;
        let rbac = db.system();

        let err = rbac
            .get_effective_state(Uuid::new_v4(), Role::Admin, "ghost.capability")
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);

        let claims = ActorClaims::new(Uuid::new_v4(), "a@example.com", Uuid::new_v4(), Role::Owner);
        assert!(!rbac.is_allowed(&claims, "ghost.capability").await);
    }

    #[tokio::test]
    async fn test_preview_reflects_overrides() {
        let db = TestDatabase::new().await;
        let org = OrgFixture::business(&db).await;
        let rbac = db.system();

        rbac.grant(Some(&org.owner), org.org_id, Role::Member, "settings.view")
            .await;

        let preview = rbac.preview_role(org.org_id, Role::Member).await.unwrap();
        assert_eq!(preview.customized_count(), 1);
        let state = preview.get("settings.view").unwrap();
        assert!(!state.default_granted);
        assert!(state.effective);

        let groups = preview.by_category();
        assert!(groups.contains_key("settings"));
        assert!(groups.contains_key("projects"));
    }
}
