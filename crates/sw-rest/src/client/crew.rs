use tracing::instrument;

use serviceworks_client::{CallContext, RequestBuilder, Result};

use crate::crew::{Employee, UserLists};
use crate::envelope::Enveloped;

impl super::ServiceWorksRestClient {
    /// List the company's employees.
    #[instrument(skip(self, ctx, token))]
    pub async fn crew_list(&self, ctx: &CallContext, token: &str) -> Result<Vec<Employee>> {
        let request = RequestBuilder::get("Configuration/GetUserLists").token(token);

        let response: Enveloped<UserLists> = self.client.send(ctx, request).await?;
        response.api_status.check()?;

        Ok(response.data.employee_list)
    }
}
