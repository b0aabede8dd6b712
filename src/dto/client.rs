//! View shape for client records.

use serde::Serialize;

use crate::domain::client::Client;

/// Navigational link attached to a view.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct Link {
    pub rel: String,
    pub href: String,
}

impl Link {
    pub fn self_link(href: impl Into<String>) -> Self {
        Self {
            rel: "self".to_string(),
            href: href.into(),
        }
    }
}

/// Client as returned to API callers.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ClientView {
    pub client_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub id_number: String,
    pub mobile_number: String,
    pub physical_address: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<Link>,
}

impl ClientView {
    /// Appends a self-link pointing at `{collection_url}/{client_id}`.
    pub fn with_self_link(mut self, collection_url: &str) -> Self {
        let href = format!("{}/{}", collection_url.trim_end_matches('/'), self.client_id);
        self.links.push(Link::self_link(href));
        self
    }
}

impl From<Client> for ClientView {
    fn from(client: Client) -> Self {
        Self {
            client_id: client.id,
            first_name: client.first_name,
            last_name: client.last_name,
            id_number: client.id_number,
            mobile_number: client.mobile_number,
            physical_address: client.physical_address,
            links: Vec::new(),
        }
    }
}
