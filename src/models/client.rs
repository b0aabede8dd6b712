use diesel::prelude::*;

use crate::domain::client::{
    Client as DomainClient, NewClient as DomainNewClient, UpdateClient as DomainUpdateClient,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::clients)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
/// Diesel model for [`crate::domain::client::Client`].
pub struct Client {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub id_number: String,
    pub mobile_number: String,
    pub physical_address: Option<String>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::clients)]
/// Insertable form of [`Client`].
pub struct NewClient<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub id_number: &'a str,
    pub mobile_number: &'a str,
    pub physical_address: Option<&'a str>,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::clients)]
#[diesel(treat_none_as_null = true)]
/// Data used when overwriting a [`Client`] record. A missing address clears the column.
pub struct UpdateClient<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub id_number: &'a str,
    pub mobile_number: &'a str,
    pub physical_address: Option<&'a str>,
}

impl From<Client> for DomainClient {
    fn from(client: Client) -> Self {
        Self {
            id: client.id,
            first_name: client.first_name,
            last_name: client.last_name,
            id_number: client.id_number,
            mobile_number: client.mobile_number,
            physical_address: client.physical_address,
        }
    }
}

impl<'a> From<&'a DomainNewClient> for NewClient<'a> {
    fn from(client: &'a DomainNewClient) -> Self {
        Self {
            first_name: client.first_name.as_str(),
            last_name: client.last_name.as_str(),
            id_number: client.id_number.as_str(),
            mobile_number: client.mobile_number.as_str(),
            physical_address: client.physical_address.as_deref(),
        }
    }
}

impl<'a> From<&'a DomainUpdateClient> for UpdateClient<'a> {
    fn from(client: &'a DomainUpdateClient) -> Self {
        Self {
            first_name: client.first_name.as_str(),
            last_name: client.last_name.as_str(),
            id_number: client.id_number.as_str(),
            mobile_number: client.mobile_number.as_str(),
            physical_address: client.physical_address.as_deref(),
        }
    }
}
