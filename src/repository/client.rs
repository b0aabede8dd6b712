use diesel::prelude::*;

use crate::db::get_connection;
use crate::domain::client::{Client, NewClient, UpdateClient};
use crate::models::client::{
    Client as DbClient, NewClient as DbNewClient, UpdateClient as DbUpdateClient,
};
use crate::repository::errors::RepositoryResult;
use crate::repository::{ClientReader, ClientWriter, DieselRepository};
use crate::schema::clients;

impl ClientReader for DieselRepository {
    fn get_client_by_id(&self, id: i32) -> RepositoryResult<Option<Client>> {
        let mut conn = get_connection(self.pool())?;
        let client = clients::table
            .find(id)
            .select(DbClient::as_select())
            .first::<DbClient>(&mut conn)
            .optional()?;

        Ok(client.map(Into::into))
    }

    fn list_clients(&self) -> RepositoryResult<Vec<Client>> {
        let mut conn = get_connection(self.pool())?;
        let items = clients::table
            .order(clients::id.asc())
            .select(DbClient::as_select())
            .load::<DbClient>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect();

        Ok(items)
    }

    fn search_clients(&self, key: &str) -> RepositoryResult<Vec<Client>> {
        let mut conn = get_connection(self.pool())?;
        let items = clients::table
            .filter(
                clients::first_name
                    .like(key)
                    .or(clients::mobile_number.like(key))
                    .or(clients::id_number.like(key)),
            )
            .order(clients::id.asc())
            .select(DbClient::as_select())
            .load::<DbClient>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect();

        Ok(items)
    }
}

impl ClientWriter for DieselRepository {
    fn create_client(&self, new_client: &NewClient) -> RepositoryResult<Client> {
        let mut conn = get_connection(self.pool())?;
        let insertable: DbNewClient = new_client.into();
        let created = diesel::insert_into(clients::table)
            .values(&insertable)
            .returning(DbClient::as_returning())
            .get_result::<DbClient>(&mut conn)?;

        Ok(created.into())
    }

    fn update_client(&self, client_id: i32, updates: &UpdateClient) -> RepositoryResult<Client> {
        let mut conn = get_connection(self.pool())?;
        let changes: DbUpdateClient = updates.into();
        let updated = diesel::update(clients::table.find(client_id))
            .set(&changes)
            .returning(DbClient::as_returning())
            .get_result::<DbClient>(&mut conn)?;

        Ok(updated.into())
    }
}
