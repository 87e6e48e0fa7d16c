//! Customer types.

use serde::{Deserialize, Serialize};
use serviceworks_client::serde_helpers::null_default;

/// First name the platform puts on its placeholder record when a search
/// matches nobody.
pub const NO_CUSTOMER_FOUND: &str = "No Customer Found";

/// Address type for a service location.
const SERVICE_ADDRESS_TYPE: i64 = 2;

/// Customer type code for a residential customer.
const RESIDENTIAL_CUSTOMER: &str = "0";

/// A customer record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Customer {
    #[serde(alias = "FirstName", deserialize_with = "null_default")]
    pub first_name: String,
    #[serde(alias = "LastName", deserialize_with = "null_default")]
    pub last_name: String,
    #[serde(alias = "CompanyName", deserialize_with = "null_default")]
    pub company_name: String,
    #[serde(alias = "Email", deserialize_with = "null_default")]
    pub email: String,
    #[serde(alias = "PrimaryPhone", deserialize_with = "null_default")]
    pub primary_phone: String,
    #[serde(alias = "CustomerId", deserialize_with = "null_default")]
    pub customer_id: i64,
    #[serde(alias = "IsActive", deserialize_with = "null_default")]
    pub is_active: bool,
    #[serde(alias = "Addresses", deserialize_with = "null_default")]
    pub addresses: Vec<Address>,
}

impl Customer {
    pub(crate) fn is_placeholder(&self) -> bool {
        self.first_name.eq_ignore_ascii_case(NO_CUSTOMER_FOUND)
    }
}

/// A customer address.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Address {
    #[serde(alias = "AddressId", deserialize_with = "null_default")]
    pub address_id: i64,
    #[serde(rename = "type", alias = "Type", deserialize_with = "null_default")]
    pub address_type: i64,
    #[serde(alias = "AddressLine1", deserialize_with = "null_default")]
    pub address_line1: String,
    #[serde(alias = "AddressLine2", deserialize_with = "null_default")]
    pub address_line2: String,
    #[serde(alias = "Zip", deserialize_with = "null_default")]
    pub zip: String,
    #[serde(alias = "City", deserialize_with = "null_default")]
    pub city: String,
    #[serde(alias = "State", deserialize_with = "null_default")]
    pub state: String,
    #[serde(alias = "Lat", deserialize_with = "null_default")]
    pub lat: String,
    #[serde(alias = "Long", deserialize_with = "null_default")]
    pub long: String,
    #[serde(alias = "FirstName", deserialize_with = "null_default")]
    pub first_name: String,
    #[serde(alias = "LastName", deserialize_with = "null_default")]
    pub last_name: String,
    #[serde(alias = "PrimaryPhone", deserialize_with = "null_default")]
    pub primary_phone: String,
    #[serde(alias = "Email", deserialize_with = "null_default")]
    pub email: String,
    #[serde(alias = "NotifyEmail", deserialize_with = "null_default")]
    pub notify_email: bool,
    #[serde(alias = "NotifyPrimaryPhone", deserialize_with = "null_default")]
    pub notify_primary_phone: bool,
}

/// Input for [`create_customer`](crate::ServiceWorksRestClient::create_customer).
///
/// Email and phone are optional; leaving one empty also turns off that
/// notification channel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewCustomer {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address_line1: String,
    pub address_line2: String,
    pub zip: String,
    pub city: String,
    pub state: String,
}

impl NewCustomer {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            ..Default::default()
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = phone.into();
        self
    }

    pub fn with_address(
        mut self,
        line1: impl Into<String>,
        line2: impl Into<String>,
        city: impl Into<String>,
        state: impl Into<String>,
        zip: impl Into<String>,
    ) -> Self {
        self.address_line1 = line1.into();
        self.address_line2 = line2.into();
        self.city = city.into();
        self.state = state.into();
        self.zip = zip.into();
        self
    }
}

/// `Job/AddEditCustomerDetail` payload.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct CustomerRequest<'a> {
    first_name: &'a str,
    last_name: &'a str,
    customer_type: &'static str,
    email: &'a str,
    primary_phone: &'a str,
    customer_id: i64,
    is_send_email: bool,
    is_send_sms: bool,
    #[serde(rename = "address")]
    address: AddressRequest<'a>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
struct AddressRequest<'a> {
    address_line1: &'a str,
    address_line2: &'a str,
    zip: &'a str,
    city: &'a str,
    state: &'a str,
    #[serde(rename = "Type")]
    address_type: i64,
    first_name: &'a str,
    last_name: &'a str,
    primary_phone: &'a str,
    email: &'a str,
    notify_email: bool,
    notify_primary_phone: bool,
}

impl<'a> From<&'a NewCustomer> for CustomerRequest<'a> {
    fn from(c: &'a NewCustomer) -> Self {
        let send_email = !c.email.is_empty();
        let send_sms = !c.phone.is_empty();

        Self {
            first_name: &c.first_name,
            last_name: &c.last_name,
            customer_type: RESIDENTIAL_CUSTOMER,
            email: &c.email,
            primary_phone: &c.phone,
            customer_id: 0,
            is_send_email: send_email,
            is_send_sms: send_sms,
            address: AddressRequest {
                address_line1: &c.address_line1,
                address_line2: &c.address_line2,
                zip: &c.zip,
                city: &c.city,
                state: &c.state,
                address_type: SERVICE_ADDRESS_TYPE,
                first_name: &c.first_name,
                last_name: &c.last_name,
                primary_phone: &c.phone,
                email: &c.email,
                notify_email: send_email,
                notify_primary_phone: send_sms,
            },
        }
    }
}

/// `data` of the customer endpoints.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CustomerList {
    #[serde(default, alias = "Customers", deserialize_with = "null_default")]
    pub customers: Vec<Customer>,
}
