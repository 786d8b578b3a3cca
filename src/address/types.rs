//! Address verification API types.

use crate::{constants::MAX_LIST_LIMIT, error::PlivoError, upload::UploadFile};
use reqwest::multipart::Form;
use serde::Deserialize;

/// A remote address verification record.
///
/// The record is created, mutated and destroyed server-side; this is a
/// read-through projection of the remote state.
#[derive(Debug, Clone, Deserialize)]
pub struct Address {
    /// The address identifier.
    pub id: String,
    /// The API request identifier.
    #[serde(default)]
    pub api_id: Option<String>,
    /// The account the address belongs to.
    #[serde(default)]
    pub account: Option<String>,
    /// The subaccount the address belongs to, if any.
    #[serde(default)]
    pub subaccount: Option<String>,
    /// Salutation of the user the address was created for.
    pub salutation: Salutation,
    /// First name of the user the address was created for.
    pub first_name: String,
    /// Last name of the user the address was created for.
    pub last_name: String,
    /// Country ISO 2 code.
    pub country_iso: String,
    /// Building name/number.
    pub address_line1: String,
    /// The street name/number of the address.
    pub address_line2: String,
    /// The city of the address.
    pub city: String,
    /// The region of the address.
    pub region: String,
    /// The postal code of the address.
    pub postal_code: String,
    /// Friendly name of the address.
    #[serde(default)]
    pub alias: Option<String>,
    /// Fiscal identification code, present for Spanish business addresses.
    #[serde(default)]
    pub fiscal_identification_code: Option<String>,
    /// Street code, present for Danish addresses.
    #[serde(default)]
    pub street_code: Option<String>,
    /// Municipal code, present for Danish addresses.
    #[serde(default)]
    pub municipal_code: Option<String>,
    /// The validation status of the address.
    #[serde(default)]
    pub validation_status: Option<DocumentStatus>,
    /// The verification status of the address.
    #[serde(default)]
    pub verification_status: Option<DocumentStatus>,
    /// Provider-defined details of the uploaded proof document.
    #[serde(default)]
    pub document_details: Option<serde_json::Value>,
    /// The canonical URL of this resource.
    #[serde(default)]
    pub url: Option<String>,
}

/// Salutation of the user an address is created for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum Salutation {
    /// Mr.
    Mr,
    /// Ms.
    Ms,
}

impl Salutation {
    /// Returns the wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mr => "Mr",
            Self::Ms => "Ms",
        }
    }
}

/// The type of proof document backing an address.
///
/// See <https://www.plivo.com/docs/account/api/address/> for more details.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum AddressProofType {
    /// A national ID card.
    #[serde(rename = "national_id")]
    NationalId,
    /// A passport.
    #[serde(rename = "passport")]
    Passport,
    /// A business registration.
    #[serde(rename = "business_id")]
    BusinessId,
    /// A Spanish fiscal identification number.
    #[serde(rename = "NIF")]
    Nif,
    /// A Spanish foreigner identification number.
    #[serde(rename = "NIE")]
    Nie,
    /// A Spanish national identity document.
    #[serde(rename = "DNI")]
    Dni,
    /// Any other proof document.
    #[serde(rename = "others")]
    Others,
}

impl AddressProofType {
    /// Returns the wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NationalId => "national_id",
            Self::Passport => "passport",
            Self::BusinessId => "business_id",
            Self::Nif => "NIF",
            Self::Nie => "NIE",
            Self::Dni => "DNI",
            Self::Others => "others",
        }
    }
}

/// Validation and verification status of an address.
///
/// Both status fields are nullable on the wire, so they appear as
/// `Option<DocumentStatus>` on [`Address`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentStatus {
    /// The document has not been reviewed yet.
    Pending,
    /// The document was accepted.
    Accepted,
    /// The document was rejected.
    Rejected,
}

impl DocumentStatus {
    /// Returns the wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Accepted => "accepted",
            Self::Rejected => "rejected",
        }
    }
}

/// Pagination metadata of a list response.
#[derive(Debug, Clone, Deserialize)]
pub struct ListMeta {
    /// The page size that was applied.
    pub limit: u64,
    /// The offset the page starts at.
    pub offset: u64,
    /// Total number of matching objects.
    #[serde(default)]
    pub total_count: Option<u64>,
    /// URL of the next page, if any.
    #[serde(default)]
    pub next: Option<String>,
    /// URL of the previous page, if any.
    #[serde(default)]
    pub previous: Option<String>,
}

/// A page of address records.
#[derive(Debug, Clone, Deserialize)]
pub struct AddressList {
    /// The API request identifier.
    #[serde(default)]
    pub api_id: Option<String>,
    /// Pagination metadata.
    pub meta: ListMeta,
    /// The address records on this page.
    pub objects: Vec<Address>,
}

/// Acknowledgement returned when an address is created.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAddressResponse {
    /// The API request identifier.
    pub api_id: String,
    /// Human-readable confirmation message.
    pub message: String,
    /// The identifier of the created address, if returned.
    #[serde(default)]
    pub id: Option<String>,
}

/// Acknowledgement returned when an address is updated.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateAddressResponse {
    /// The API request identifier.
    pub api_id: String,
    /// Human-readable confirmation message.
    pub message: String,
}

/// Filters for listing addresses.
#[derive(Debug, Clone, Default)]
pub struct ListAddressesParams {
    /// Filter by country ISO 2 code.
    pub country_iso: Option<String>,
    /// Filter by the name of the customer or business mentioned in the
    /// address.
    pub customer_name: Option<String>,
    /// Filter by the friendly name of the proof.
    pub alias: Option<String>,
    /// Filter by verification status.
    pub verification_status: Option<DocumentStatus>,
    /// Filter by validation status.
    pub validation_status: Option<DocumentStatus>,
    /// Offset into the result set.
    pub offset: Option<u64>,
    /// Page size, between 1 and 20.
    pub limit: Option<u64>,
}

impl ListAddressesParams {
    /// Validates the filters and shapes them into a query string.
    pub(crate) fn to_query(&self) -> Result<Vec<(&'static str, String)>, PlivoError> {
        if let Some(limit) = self.limit {
            validate_limit(limit)?;
        }

        let mut query = Vec::new();
        if let Some(country_iso) = &self.country_iso {
            query.push(("country_iso", country_iso.clone()));
        }
        if let Some(customer_name) = &self.customer_name {
            query.push(("customer_name", customer_name.clone()));
        }
        if let Some(alias) = &self.alias {
            query.push(("alias", alias.clone()));
        }
        if let Some(status) = self.verification_status {
            query.push(("verification_status", status.as_str().to_owned()));
        }
        if let Some(status) = self.validation_status {
            query.push(("validation_status", status.as_str().to_owned()));
        }
        if let Some(offset) = self.offset {
            query.push(("offset", offset.to_string()));
        }
        if let Some(limit) = self.limit {
            query.push(("limit", limit.to_string()));
        }
        Ok(query)
    }
}

/// Parameters for creating an address.
#[derive(Debug, Clone)]
pub struct CreateAddressParams {
    /// Country ISO 2 code.
    pub country_iso: String,
    /// Salutation of the user the address is created for.
    pub salutation: Salutation,
    /// First name of the user the address is created for.
    pub first_name: String,
    /// Last name of the user the address is created for.
    pub last_name: String,
    /// Building name/number.
    pub address_line1: String,
    /// The street name/number of the address.
    pub address_line2: String,
    /// The city of the address.
    pub city: String,
    /// The region of the address.
    pub region: String,
    /// The postal code of the address.
    pub postal_code: String,
    /// The type of the proof document.
    pub address_proof_type: AddressProofType,
    /// Friendly name of the address.
    pub alias: Option<String>,
    /// Fiscal identification code. Required when the country is `ES`; the
    /// code is valid for businesses alone.
    pub fiscal_identification_code: Option<String>,
    /// Street code of the address. Required when the country is `DK`.
    pub street_code: Option<String>,
    /// Municipal code of the address. Required when the country is `DK`.
    pub municipal_code: Option<String>,
    /// URL the result of the address creation is POSTed to.
    pub callback_url: Option<String>,
    /// Whether the system may auto-correct the address if necessary. Must be
    /// set to `false` explicitly to opt out.
    pub auto_correct_address: Option<bool>,
    /// The proof document to upload.
    pub file: Option<UploadFile>,
}

impl CreateAddressParams {
    /// Creates parameters from the required fields.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        country_iso: impl Into<String>,
        salutation: Salutation,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        address_line1: impl Into<String>,
        address_line2: impl Into<String>,
        city: impl Into<String>,
        region: impl Into<String>,
        postal_code: impl Into<String>,
        address_proof_type: AddressProofType,
    ) -> Self {
        Self {
            country_iso: country_iso.into(),
            salutation,
            first_name: first_name.into(),
            last_name: last_name.into(),
            address_line1: address_line1.into(),
            address_line2: address_line2.into(),
            city: city.into(),
            region: region.into(),
            postal_code: postal_code.into(),
            address_proof_type,
            alias: None,
            fiscal_identification_code: None,
            street_code: None,
            municipal_code: None,
            callback_url: None,
            auto_correct_address: None,
            file: None,
        }
    }

    /// Validates the parameters, normalizing the country code.
    pub(crate) fn validate(&mut self) -> Result<(), PlivoError> {
        require("first_name", &self.first_name)?;
        require("last_name", &self.last_name)?;
        require("address_line1", &self.address_line1)?;
        require("address_line2", &self.address_line2)?;
        require("city", &self.city)?;
        require("region", &self.region)?;
        require("postal_code", &self.postal_code)?;
        self.country_iso = validate_country_iso(&self.country_iso)?;

        match self.country_iso.as_str() {
            "ES" => {
                if self.fiscal_identification_code.as_deref().is_none_or(str::is_empty) {
                    return Err(PlivoError::invalid_request(
                        "fiscal_identification_code is required for ES addresses",
                    ));
                }
            }
            "DK" => {
                if self.street_code.as_deref().is_none_or(str::is_empty) {
                    return Err(PlivoError::invalid_request(
                        "street_code is required for DK addresses",
                    ));
                }
                if self.municipal_code.as_deref().is_none_or(str::is_empty) {
                    return Err(PlivoError::invalid_request(
                        "municipal_code is required for DK addresses",
                    ));
                }
            }
            _ => {}
        }

        Ok(())
    }

    /// Validates the parameters and shapes them into a multipart form.
    pub(crate) async fn into_form(mut self) -> Result<Form, PlivoError> {
        self.validate()?;

        let mut form = Form::new()
            .text("country_iso", self.country_iso)
            .text("salutation", self.salutation.as_str())
            .text("first_name", self.first_name)
            .text("last_name", self.last_name)
            .text("address_line1", self.address_line1)
            .text("address_line2", self.address_line2)
            .text("city", self.city)
            .text("region", self.region)
            .text("postal_code", self.postal_code)
            .text("address_proof_type", self.address_proof_type.as_str());

        if let Some(alias) = self.alias {
            form = form.text("alias", alias);
        }
        if let Some(code) = self.fiscal_identification_code {
            form = form.text("fiscal_identification_code", code);
        }
        if let Some(code) = self.street_code {
            form = form.text("street_code", code);
        }
        if let Some(code) = self.municipal_code {
            form = form.text("municipal_code", code);
        }
        if let Some(callback_url) = self.callback_url {
            form = form.text("callback_url", callback_url);
        }
        if let Some(auto_correct) = self.auto_correct_address {
            form = form.text("auto_correct_address", auto_correct.to_string());
        }
        if let Some(file) = self.file {
            form = form.part("file", file.into_part().await?);
        }

        Ok(form)
    }
}

/// Parameters for updating an address.
///
/// All fields are optional; only the provided ones are sent.
#[derive(Debug, Clone, Default)]
pub struct UpdateAddressParams {
    /// Salutation of the user the address is created for.
    pub salutation: Option<Salutation>,
    /// First name of the user the address is created for.
    pub first_name: Option<String>,
    /// Last name of the user the address is created for.
    pub last_name: Option<String>,
    /// Country ISO 2 code.
    pub country_iso: Option<String>,
    /// Building name/number.
    pub address_line1: Option<String>,
    /// The street name/number of the address.
    pub address_line2: Option<String>,
    /// The city of the address.
    pub city: Option<String>,
    /// The region of the address.
    pub region: Option<String>,
    /// The postal code of the address.
    pub postal_code: Option<String>,
    /// Friendly name of the address.
    pub alias: Option<String>,
    /// URL the result of the address update is POSTed to.
    pub callback_url: Option<String>,
    /// Whether the system may auto-correct the address if necessary.
    pub auto_correct_address: Option<bool>,
    /// A new proof document to upload.
    pub file: Option<UploadFile>,
}

impl UpdateAddressParams {
    /// Validates the parameters and shapes them into a multipart form.
    pub(crate) async fn into_form(mut self) -> Result<Form, PlivoError> {
        if let Some(country_iso) = &self.country_iso {
            self.country_iso = Some(validate_country_iso(country_iso)?);
        }

        let mut form = Form::new();
        if let Some(salutation) = self.salutation {
            form = form.text("salutation", salutation.as_str());
        }
        if let Some(first_name) = self.first_name {
            form = form.text("first_name", first_name);
        }
        if let Some(last_name) = self.last_name {
            form = form.text("last_name", last_name);
        }
        if let Some(country_iso) = self.country_iso {
            form = form.text("country_iso", country_iso);
        }
        if let Some(address_line1) = self.address_line1 {
            form = form.text("address_line1", address_line1);
        }
        if let Some(address_line2) = self.address_line2 {
            form = form.text("address_line2", address_line2);
        }
        if let Some(city) = self.city {
            form = form.text("city", city);
        }
        if let Some(region) = self.region {
            form = form.text("region", region);
        }
        if let Some(postal_code) = self.postal_code {
            form = form.text("postal_code", postal_code);
        }
        if let Some(alias) = self.alias {
            form = form.text("alias", alias);
        }
        if let Some(callback_url) = self.callback_url {
            form = form.text("callback_url", callback_url);
        }
        if let Some(auto_correct) = self.auto_correct_address {
            form = form.text("auto_correct_address", auto_correct.to_string());
        }
        if let Some(file) = self.file {
            form = form.part("file", file.into_part().await?);
        }

        Ok(form)
    }
}

/// Rejects empty required string fields.
pub(crate) fn require(field: &'static str, value: &str) -> Result<(), PlivoError> {
    if value.trim().is_empty() {
        return Err(PlivoError::invalid_request(format!("{field} must not be empty")));
    }
    Ok(())
}

/// Validates a country ISO 2 code and normalizes it to uppercase.
pub(crate) fn validate_country_iso(code: &str) -> Result<String, PlivoError> {
    if code.len() != 2 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(PlivoError::invalid_request(format!(
            "{code} is not a valid country ISO 2 code"
        )));
    }
    Ok(code.to_ascii_uppercase())
}

/// Validates a list page size.
pub(crate) fn validate_limit(limit: u64) -> Result<(), PlivoError> {
    if !(1..=MAX_LIST_LIMIT).contains(&limit) {
        return Err(PlivoError::invalid_request(format!(
            "the maximum number of results that can be fetched is {MAX_LIST_LIMIT}. \
             limit can't be more than {MAX_LIST_LIMIT} or less than 1"
        )));
    }
    Ok(())
}
