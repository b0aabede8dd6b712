//! Client operations: validate input, call the store, shape the output.

use crate::domain::client::{NewClient, UpdateClient};
use crate::dto::client::ClientView;
use crate::forms::client::ClientCreateRequest;
use crate::repository::{ClientReader, ClientWriter};
use crate::services::errors::{NULL_ID_MESSAGE, UNKNOWN_ID_MESSAGE};
use crate::services::{ServiceError, ServiceResult};

/// Validates the request and persists a new client.
///
/// Validation runs before any store call. A duplicate id or mobile number is
/// reported as [`ServiceError::InvalidField`].
pub fn create_client<R>(repo: &R, request: &ClientCreateRequest) -> ServiceResult<ClientView>
where
    R: ClientWriter + ?Sized,
{
    let new_client = NewClient::try_from(request)?;

    let client = repo.create_client(&new_client).map_err(ServiceError::from)?;

    log::info!("Created client {}", client.id);
    Ok(client.into())
}

/// Returns every stored client.
pub fn get_all_clients<R>(repo: &R) -> ServiceResult<Vec<ClientView>>
where
    R: ClientReader + ?Sized,
{
    let clients = repo.list_clients().map_err(ServiceError::from)?;
    Ok(clients.into_iter().map(Into::into).collect())
}

/// Fetches one client; `None` models an id that was never supplied.
pub fn get_client_by_id<R>(repo: &R, id: Option<i32>) -> ServiceResult<ClientView>
where
    R: ClientReader + ?Sized,
{
    let id = id.ok_or_else(|| ServiceError::InvalidField(NULL_ID_MESSAGE.to_string()))?;

    match repo.get_client_by_id(id).map_err(ServiceError::from)? {
        Some(client) => Ok(client.into()),
        None => Err(ServiceError::NotFound(UNKNOWN_ID_MESSAGE.to_string())),
    }
}

/// Runs the key through the store search as-is; no validation or wildcard wrapping.
pub fn search_for_client_by_key<R>(repo: &R, key: &str) -> ServiceResult<Vec<ClientView>>
where
    R: ClientReader + ?Sized,
{
    let clients = repo.search_clients(key).map_err(ServiceError::from)?;
    Ok(clients.into_iter().map(Into::into).collect())
}

/// Overwrites all mutable fields of an existing client.
///
/// The record must exist and the request must pass the same checks as
/// [`create_client`]; nothing is written otherwise.
pub fn edit_client<R>(
    repo: &R,
    id: Option<i32>,
    request: &ClientCreateRequest,
) -> ServiceResult<ClientView>
where
    R: ClientReader + ClientWriter + ?Sized,
{
    let id = id.ok_or_else(|| ServiceError::InvalidField(NULL_ID_MESSAGE.to_string()))?;

    if repo.get_client_by_id(id).map_err(ServiceError::from)?.is_none() {
        return Err(ServiceError::NotFound(UNKNOWN_ID_MESSAGE.to_string()));
    }

    let updates = UpdateClient::try_from(request)?;

    let client = repo.update_client(id, &updates).map_err(ServiceError::from)?;

    log::info!("Updated client {}", client.id);
    Ok(client.into())
}

#[cfg(all(test, feature = "test-mocks"))]
mod tests {
    use super::*;
    use crate::domain::client::Client;
    use crate::repository::errors::RepositoryError;
    use crate::repository::mock::MockRepository;
    use crate::services::errors::{DATABASE_FAILURE_MESSAGE, DUPLICATE_CLIENT_MESSAGE};

    fn john_snow_request() -> ClientCreateRequest {
        ClientCreateRequest {
            first_name: Some("John".to_string()),
            last_name: Some("Snow".to_string()),
            id_number: Some("1111111111111".to_string()),
            mobile_number: Some("000000".to_string()),
            physical_address: Some("Home".to_string()),
        }
    }

    fn stored_client(id: i32) -> Client {
        Client {
            id,
            first_name: "John".to_string(),
            last_name: "Snow".to_string(),
            id_number: "1111111111111".to_string(),
            mobile_number: "000000".to_string(),
            physical_address: Some("Home".to_string()),
        }
    }

    fn invalid(message: &str) -> ServiceResult<ClientView> {
        Err(ServiceError::InvalidField(message.to_string()))
    }

    #[test]
    fn create_returns_assigned_id_and_fields() {
        let mut repo = MockRepository::new();
        repo.expect_create_client()
            .withf(|c| {
                c.first_name.as_str() == "John"
                    && c.last_name.as_str() == "Snow"
                    && c.id_number.as_str() == "1111111111111"
                    && c.mobile_number.as_str() == "000000"
                    && c.physical_address.as_deref() == Some("Home")
            })
            .times(1)
            .returning(|_| Ok(stored_client(1)));

        let view = create_client(&repo, &john_snow_request()).expect("should create");

        assert_eq!(view.client_id, 1);
        assert_eq!(view.first_name, "John");
        assert_eq!(view.physical_address.as_deref(), Some("Home"));
        assert!(view.links.is_empty());
    }

    #[test]
    fn create_with_missing_first_name_never_writes() {
        for first_name in [None, Some(String::new()), Some("   ".to_string())] {
            let mut repo = MockRepository::new();
            repo.expect_create_client().times(0);
            let request = ClientCreateRequest {
                first_name,
                ..john_snow_request()
            };

            assert_eq!(
                create_client(&repo, &request),
                invalid("Firstname cannot be null or empty")
            );
        }
    }

    #[test]
    fn create_rejects_short_id_number() {
        let mut repo = MockRepository::new();
        repo.expect_create_client().times(0);
        let request = ClientCreateRequest {
            id_number: Some("111111111111".to_string()),
            ..john_snow_request()
        };

        assert_eq!(
            create_client(&repo, &request),
            invalid("ID Number length should be 13")
        );
    }

    #[test]
    fn create_maps_unique_violation_to_invalid_field() {
        let mut repo = MockRepository::new();
        repo.expect_create_client().times(1).returning(|_| {
            Err(RepositoryError::ConstraintViolation(
                "UNIQUE constraint failed: clients.mobile_number".to_string(),
            ))
        });

        assert_eq!(
            create_client(&repo, &john_snow_request()),
            invalid(DUPLICATE_CLIENT_MESSAGE)
        );
    }

    #[test]
    fn create_maps_other_store_failures_to_database_error() {
        let mut repo = MockRepository::new();
        repo.expect_create_client()
            .times(1)
            .returning(|_| Err(RepositoryError::DatabaseError("disk I/O error".to_string())));

        assert_eq!(
            create_client(&repo, &john_snow_request()),
            Err(ServiceError::Database(DATABASE_FAILURE_MESSAGE.to_string()))
        );
    }

    #[test]
    fn get_all_maps_every_record() {
        let mut repo = MockRepository::new();
        repo.expect_list_clients()
            .times(1)
            .returning(|| Ok(vec![stored_client(1), stored_client(2)]));

        let views = get_all_clients(&repo).expect("should list");

        assert_eq!(
            views.iter().map(|v| v.client_id).collect::<Vec<_>>(),
            vec![1, 2]
        );
    }

    #[test]
    fn get_by_id_requires_an_id() {
        let mut repo = MockRepository::new();
        repo.expect_get_client_by_id().times(0);

        assert_eq!(get_client_by_id(&repo, None), invalid("Id cannot be null"));
    }

    #[test]
    fn get_by_unknown_id_is_not_found() {
        let mut repo = MockRepository::new();
        repo.expect_get_client_by_id()
            .withf(|id| *id == 9999)
            .times(1)
            .returning(|_| Ok(None));

        assert_eq!(
            get_client_by_id(&repo, Some(9999)),
            Err(ServiceError::NotFound(
                "Provided id does not exist".to_string()
            ))
        );
    }

    #[test]
    fn search_passes_key_through_verbatim() {
        let mut repo = MockRepository::new();
        repo.expect_search_clients()
            .withf(|key| key == "Jo%")
            .times(1)
            .returning(|_| Ok(vec![stored_client(3)]));

        let views = search_for_client_by_key(&repo, "Jo%").expect("should search");

        assert_eq!(views.len(), 1);
        assert_eq!(views[0].client_id, 3);
    }

    #[test]
    fn edit_with_blank_last_name_leaves_record_untouched() {
        let mut repo = MockRepository::new();
        repo.expect_get_client_by_id()
            .times(1)
            .returning(|id| Ok(Some(stored_client(id))));
        repo.expect_update_client().times(0);
        let request = ClientCreateRequest {
            last_name: Some(" ".to_string()),
            ..john_snow_request()
        };

        assert_eq!(
            edit_client(&repo, Some(5), &request),
            invalid("Lastname cannot be null or empty")
        );
    }

    #[test]
    fn edit_unknown_id_is_not_found_before_validation() {
        let mut repo = MockRepository::new();
        repo.expect_get_client_by_id()
            .times(1)
            .returning(|_| Ok(None));
        repo.expect_update_client().times(0);

        assert_eq!(
            edit_client(&repo, Some(42), &ClientCreateRequest::default()),
            Err(ServiceError::NotFound(
                "Provided id does not exist".to_string()
            ))
        );
    }

    #[test]
    fn edit_overwrites_all_fields() {
        let mut repo = MockRepository::new();
        repo.expect_get_client_by_id()
            .times(1)
            .returning(|id| Ok(Some(stored_client(id))));
        repo.expect_update_client()
            .withf(|id, u| {
                *id == 5
                    && u.first_name.as_str() == "Arya"
                    && u.last_name.as_str() == "Stark"
                    && u.physical_address.is_none()
            })
            .times(1)
            .returning(|id, u| {
                Ok(Client {
                    id,
                    first_name: u.first_name.to_string(),
                    last_name: u.last_name.to_string(),
                    id_number: u.id_number.to_string(),
                    mobile_number: u.mobile_number.to_string(),
                    physical_address: u.physical_address.clone(),
                })
            });
        let request = ClientCreateRequest {
            first_name: Some("Arya".to_string()),
            last_name: Some("Stark".to_string()),
            physical_address: None,
            ..john_snow_request()
        };

        let view = edit_client(&repo, Some(5), &request).expect("should edit");

        assert_eq!(view.client_id, 5);
        assert_eq!(view.first_name, "Arya");
        assert_eq!(view.physical_address, None);
    }

    #[test]
    fn edit_maps_unique_violation_to_invalid_field() {
        let mut repo = MockRepository::new();
        repo.expect_get_client_by_id()
            .returning(|id| Ok(Some(stored_client(id))));
        repo.expect_update_client().times(1).returning(|_, _| {
            Err(RepositoryError::ConstraintViolation(
                "UNIQUE constraint failed: clients.id_number".to_string(),
            ))
        });

        assert_eq!(
            edit_client(&repo, Some(5), &john_snow_request()),
            invalid(DUPLICATE_CLIENT_MESSAGE)
        );
    }
}
