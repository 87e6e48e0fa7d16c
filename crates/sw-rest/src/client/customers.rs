use tracing::{debug, instrument};

use serviceworks_client::{CallContext, Error, ErrorKind, RequestBuilder, Result};

use crate::customers::{Customer, CustomerList, CustomerRequest, NewCustomer};
use crate::envelope::Enveloped;

impl super::ServiceWorksRestClient {
    /// Search customers by name.
    ///
    /// No match is an empty list, not an error.
    #[instrument(skip(self, ctx, token))]
    pub async fn search_customers(
        &self,
        ctx: &CallContext,
        token: &str,
        name: &str,
    ) -> Result<Vec<Customer>> {
        let request = RequestBuilder::get("Job/GetCustomerSearch")
            .token(token)
            .query("CustomerName", name);

        let response: Enveloped<CustomerList> = self.client.send(ctx, request).await?;
        response.api_status.check()?;

        let customers = response.data.customers;
        if customers.len() == 1 && customers[0].is_placeholder() {
            debug!("No customer matched");
            return Ok(Vec::new());
        }
        Ok(customers)
    }

    /// Create a customer with a single service address.
    #[instrument(skip(self, ctx, token, customer), fields(last_name = %customer.last_name))]
    pub async fn create_customer(
        &self,
        ctx: &CallContext,
        token: &str,
        customer: &NewCustomer,
    ) -> Result<Customer> {
        let request = RequestBuilder::post("Job/AddEditCustomerDetail")
            .token(token)
            .json(&CustomerRequest::from(customer))?;

        let response: Enveloped<CustomerList> = self.client.send(ctx, request).await?;
        response.api_status.check()?;

        response.data.customers.into_iter().next().ok_or_else(|| {
            Error::new(ErrorKind::UnexpectedResponse(
                "New customer was not created".to_string(),
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::super::ServiceWorksRestClient;
    use crate::NewCustomer;
    use serde_json::json;
    use serviceworks_client::{CallContext, ErrorClass, ErrorKind};
    use wiremock::matchers::{body_partial_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn ok_status() -> serde_json::Value {
        json!({"status": 1, "message": "Success", "errors": null})
    }

    #[tokio::test]
    async fn test_search_customers_wiremock() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/Job/GetCustomerSearch"))
            .and(query_param("CustomerName", "nate dogg"))
            .and(header("Token", "test-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "apiStatus": ok_status(),
                "data": {"customers": [
                    {"firstName": "Nate", "lastName": "Dogg", "customerId": 20144, "isActive": true},
                    {"firstName": "Nathan", "lastName": "Dogg", "customerId": 20145, "isActive": true}
                ]}
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = ServiceWorksRestClient::with_base_url(mock_server.uri()).unwrap();
        let customers = client
            .search_customers(&CallContext::background(), "test-token", "nate dogg")
            .await
            .expect("search_customers should succeed");

        assert_eq!(customers.len(), 2);
        assert_eq!(customers[0].customer_id, 20144);
    }

    #[tokio::test]
    async fn test_search_customers_no_match() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/Job/GetCustomerSearch"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "apiStatus": ok_status(),
                "data": {"customers": [{"firstName": "No Customer Found", "customerId": 0}]}
            })))
            .mount(&mock_server)
            .await;

        let client = ServiceWorksRestClient::with_base_url(mock_server.uri()).unwrap();
        let customers = client
            .search_customers(&CallContext::background(), "test-token", "zzz")
            .await
            .unwrap();

        assert!(customers.is_empty());
    }

    #[tokio::test]
    async fn test_search_customers_bad_token() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/Job/GetCustomerSearch"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "apiStatus": {"status": 2, "message": "Invalid Token", "errors": null},
                "data": null
            })))
            .mount(&mock_server)
            .await;

        let client = ServiceWorksRestClient::with_base_url(mock_server.uri()).unwrap();
        let err = client
            .search_customers(&CallContext::background(), "bad-token", "nate")
            .await
            .unwrap_err();

        assert_eq!(err.class(), Some(ErrorClass::InvalidCode));
    }

    #[tokio::test]
    async fn test_create_customer_wiremock() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/Job/AddEditCustomerDetail"))
            .and(header("Token", "test-token"))
            .and(body_partial_json(json!({
                "FirstName": "Nate",
                "CustomerType": "0",
                "IsSendEmail": false,
                "IsSendSms": true,
                "address": {"Type": 2, "City": "Long Beach", "NotifyPrimaryPhone": true}
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "apiStatus": ok_status(),
                "data": {"customers": [{
                    "firstName": "Nate",
                    "lastName": "Dogg",
                    "customerId": 30001,
                    "addresses": [{"addressId": 77, "type": 2, "city": "Long Beach"}]
                }]}
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let new = NewCustomer::new("Nate", "Dogg")
            .with_phone("5551234567")
            .with_address("1 Main St", "", "Long Beach", "CA", "90802");

        let client = ServiceWorksRestClient::with_base_url(mock_server.uri()).unwrap();
        let customer = client
            .create_customer(&CallContext::background(), "test-token", &new)
            .await
            .expect("create_customer should succeed");

        assert_eq!(customer.customer_id, 30001);
        assert_eq!(customer.addresses[0].address_type, 2);
    }

    #[tokio::test]
    async fn test_create_customer_empty_result() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/Job/AddEditCustomerDetail"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "apiStatus": ok_status(),
                "data": {"customers": []}
            })))
            .mount(&mock_server)
            .await;

        let client = ServiceWorksRestClient::with_base_url(mock_server.uri()).unwrap();
        let err = client
            .create_customer(
                &CallContext::background(),
                "test-token",
                &NewCustomer::new("Nate", "Dogg"),
            )
            .await
            .unwrap_err();

        assert!(matches!(err.kind, ErrorKind::UnexpectedResponse(_)));
        assert!(err.to_string().contains("New customer was not created"));
    }
}
