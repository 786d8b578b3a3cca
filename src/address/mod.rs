//! Address verification resources.

mod api;
mod types;

pub use api::Addresses;
pub use types::{
    Address, AddressList, AddressProofType, CreateAddressParams, CreateAddressResponse,
    DocumentStatus, ListAddressesParams, ListMeta, Salutation, UpdateAddressParams,
    UpdateAddressResponse,
};
