//! Address verification API.

use super::types::{
    Address, AddressList, CreateAddressParams, CreateAddressResponse, ListAddressesParams,
    UpdateAddressParams, UpdateAddressResponse, require,
};
use crate::{client::PlivoClient, constants::MAX_LIST_LIMIT, error::PlivoError};
use reqwest::Url;

/// Handle to the address verification resources of an account.
///
/// Obtained from [`PlivoClient::addresses`].
#[derive(Debug, Clone, Copy)]
pub struct Addresses<'a> {
    client: &'a PlivoClient,
}

impl<'a> Addresses<'a> {
    /// Creates a new handle.
    pub(crate) fn new(client: &'a PlivoClient) -> Self {
        Self { client }
    }

    /// Builds the resource URL, optionally scoped to a single address.
    fn url(&self, address_id: Option<&str>) -> Url {
        match address_id {
            Some(id) => self.client.resource_url(&["Verification", "Address", id]),
            None => self.client.resource_url(&["Verification", "Address"]),
        }
    }

    /// Fetches a single address.
    pub async fn get(&self, address_id: &str) -> Result<Address, PlivoError> {
        require("address_id", address_id)?;
        self.client.get_json(self.url(Some(address_id)), &[]).await
    }

    /// Lists addresses matching the given filters.
    pub async fn list(&self, params: &ListAddressesParams) -> Result<AddressList, PlivoError> {
        let query = params.to_query()?;
        self.client.get_json(self.url(None), &query).await
    }

    /// Lists all addresses, walking pages until the result set is exhausted.
    pub async fn list_all(&self) -> Result<Vec<Address>, PlivoError> {
        let mut addresses = Vec::new();
        let mut offset = 0;

        loop {
            let params = ListAddressesParams { offset: Some(offset), ..Default::default() };
            let page = self.list(&params).await?;
            let full_page = page.objects.len() as u64 == MAX_LIST_LIMIT;
            addresses.extend(page.objects);

            if !full_page {
                return Ok(addresses);
            }
            offset += MAX_LIST_LIMIT;
        }
    }

    /// Creates a new address.
    pub async fn create(
        &self,
        params: CreateAddressParams,
    ) -> Result<CreateAddressResponse, PlivoError> {
        let form = params.into_form().await?;
        self.client.post_form(self.url(None), form).await
    }

    /// Updates an address.
    pub async fn update(
        &self,
        address_id: &str,
        params: UpdateAddressParams,
    ) -> Result<UpdateAddressResponse, PlivoError> {
        require("address_id", address_id)?;
        let form = params.into_form().await?;
        self.client.post_form(self.url(Some(address_id)), form).await
    }

    /// Deletes an address.
    pub async fn delete(&self, address_id: &str) -> Result<(), PlivoError> {
        require("address_id", address_id)?;
        self.client.delete(self.url(Some(address_id))).await
    }
}
