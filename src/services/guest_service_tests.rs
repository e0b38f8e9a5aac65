// src/services/guest_service_tests.rs
//
// UNIT TESTS: Guest mutation orchestration against a mocked remote service

mod service_tests {
    use std::sync::Arc;

    use mockall::predicate::eq;

    use crate::api::MockGuestApi;
    use crate::domain::{Guest, NewGuest};
    use crate::error::AppError;
    use crate::services::GuestService;

    fn sample_record(id: i64) -> Guest {
        Guest {
            id,
            name: "Alice".to_string(),
            contact: "555-0100".to_string(),
            email: "alice@example.com".to_string(),
            organization: "Org".to_string(),
            location: "Loc".to_string(),
            guest_level: None,
            nationality: "ZZ".to_string(),
            passport: "P1".to_string(),
        }
    }

    fn sample_body() -> NewGuest {
        NewGuest::from(sample_record(0))
    }

    #[tokio::test]
    async fn test_create_returns_server_assigned_record() {
        let mut api = MockGuestApi::new();
        api.expect_create_guest()
            .returning(|body| Ok(sample_record(42).clone_with(body)));

        let service = GuestService::new(Arc::new(api));
        let created = service.create_guest(&sample_body()).await.unwrap();
        assert_eq!(created.id, 42);
        assert_eq!(created.email, "alice@example.com");
    }

    #[tokio::test]
    async fn test_update_addresses_the_given_identifier() {
        let mut api = MockGuestApi::new();
        api.expect_update_guest()
            .with(eq(7), eq(sample_body()))
            .returning(|id, body| Ok(sample_record(id).clone_with(body)));

        let service = GuestService::new(Arc::new(api));
        let updated = service.update_guest(7, &sample_body()).await.unwrap();
        assert_eq!(updated.id, 7);
    }

    #[tokio::test]
    async fn test_delete_of_missing_record_propagates_not_found() {
        let mut api = MockGuestApi::new();
        api.expect_delete_guest()
            .with(eq(99))
            .returning(|_| Err(AppError::NotFound));

        let service = GuestService::new(Arc::new(api));
        let err = service.delete_guest(99).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound));
    }

    #[tokio::test]
    async fn test_get_guest_fetches_a_single_record() {
        let mut api = MockGuestApi::new();
        api.expect_get_guest()
            .with(eq(5))
            .returning(|id| Ok(sample_record(id)));

        let service = GuestService::new(Arc::new(api));
        let guest = service.get_guest(5).await.unwrap();
        assert_eq!(guest.id, 5);
    }

    #[tokio::test]
    async fn test_list_passes_records_through_untouched() {
        let mut api = MockGuestApi::new();
        api.expect_list_guests()
            .returning(|| Ok(vec![sample_record(1), sample_record(2)]));

        let service = GuestService::new(Arc::new(api));
        let guests = service.list_guests().await.unwrap();
        assert_eq!(guests.len(), 2);
        assert_eq!(guests[0].id, 1);
    }

    impl Guest {
        /// Overlay a request body on a record, keeping the identifier
        fn clone_with(mut self, body: &NewGuest) -> Guest {
            self.name = body.name.clone();
            self.contact = body.contact.clone();
            self.email = body.email.clone();
            self.organization = body.organization.clone();
            self.location = body.location.clone();
            self.guest_level = body.guest_level;
            self.nationality = body.nationality.clone();
            self.passport = body.passport.clone();
            self
        }
    }
}
