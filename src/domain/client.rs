use serde::{Deserialize, Serialize};

use crate::domain::types::{FirstName, IdNumber, LastName, MobileNumber};

/// Client record as persisted by the store.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Client {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub id_number: String,
    pub mobile_number: String,
    pub physical_address: Option<String>,
}

/// Validated payload for inserting a client. The store assigns the id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewClient {
    pub first_name: FirstName,
    pub last_name: LastName,
    pub id_number: IdNumber,
    pub mobile_number: MobileNumber,
    pub physical_address: Option<String>,
}

impl NewClient {
    #[must_use]
    pub fn new(
        first_name: FirstName,
        last_name: LastName,
        id_number: IdNumber,
        mobile_number: MobileNumber,
        physical_address: Option<String>,
    ) -> Self {
        Self {
            first_name,
            last_name,
            id_number,
            mobile_number,
            physical_address,
        }
    }
}

/// Validated replacement values for every mutable field of a client.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UpdateClient {
    pub first_name: FirstName,
    pub last_name: LastName,
    pub id_number: IdNumber,
    pub mobile_number: MobileNumber,
    pub physical_address: Option<String>,
}

impl UpdateClient {
    #[must_use]
    pub fn new(
        first_name: FirstName,
        last_name: LastName,
        id_number: IdNumber,
        mobile_number: MobileNumber,
        physical_address: Option<String>,
    ) -> Self {
        Self {
            first_name,
            last_name,
            id_number,
            mobile_number,
            physical_address,
        }
    }
}
