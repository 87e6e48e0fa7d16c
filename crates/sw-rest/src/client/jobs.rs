use chrono::NaiveDate;
use tracing::{debug, instrument};

use serviceworks_client::{CallContext, Error, ErrorKind, RequestBuilder, Result};

use crate::envelope::{Enveloped, StatusOnly};
use crate::jobs::{
    query_date, CreateJobRequest, Job, JobList, NewJob, SaveScheduleRequest, ScheduleUpdate,
    TimeRange,
};

impl super::ServiceWorksRestClient {
    /// List the bookable arrival windows.
    #[instrument(skip(self, ctx, token))]
    pub async fn time_ranges(&self, ctx: &CallContext, token: &str) -> Result<Vec<TimeRange>> {
        let request = RequestBuilder::get("Job/GetTimeRange").token(token);

        let response: Enveloped<Vec<TimeRange>> = self.client.send(ctx, request).await?;
        response
            .api_status
            .check()
            .map_err(|e| e.with_exchange(None::<&()>, &response))?;

        Ok(response.data)
    }

    /// Create a job and schedule its first trip to `job.employee_ids`.
    ///
    /// Two calls: `Job/CreateNewJob`, then [`update_job`](Self::update_job) on
    /// the first assignment the platform created. A failed scheduling call
    /// fails the whole operation even though the job already exists; the
    /// error then names the created ticket and carries its record, so a
    /// caller can reschedule it instead of creating another.
    #[instrument(skip(self, ctx, token, job), fields(customer_id = job.customer_id))]
    pub async fn create_job(&self, ctx: &CallContext, token: &str, job: &NewJob) -> Result<Job> {
        let payload = CreateJobRequest::from(job);
        let request = RequestBuilder::post("Job/CreateNewJob")
            .token(token)
            .json(&payload)?;

        let response: JobList = self.client.send(ctx, request).await?;
        let exchange = |e: Error| e.with_exchange(Some(&payload), &response);

        response.api_status.check().map_err(exchange)?;

        let created = response.jobs.first().ok_or_else(|| {
            exchange(Error::new(ErrorKind::UnexpectedResponse(
                "Didn't get any jobs back".to_string(),
            )))
        })?;
        let assignment = created.assignments.first().ok_or_else(|| {
            exchange(Error::new(ErrorKind::UnexpectedResponse(
                "Didn't get any job assignments back".to_string(),
            )))
        })?;

        debug!(
            ticket_id = created.ticket_id,
            trip_assignment_id = assignment.trip_assignment_id,
            "Job created, scheduling"
        );

        let update = ScheduleUpdate {
            ticket_id: created.ticket_id,
            trip_assignment_id: assignment.trip_assignment_id,
            trip_no: assignment.trip_no,
            issue_description: job.issue_description.clone(),
            duration: job.duration,
            time_range_id: job.time_range_id,
            target: job.target,
            employee_ids: job.employee_ids.clone(),
        };
        self.update_job(ctx, token, &update).await.map_err(|e| {
            e.with_exchange(None::<&()>, created).context(format!(
                "job {} created but not scheduled",
                created.ticket_id
            ))
        })?;

        Ok(created.clone())
    }

    /// Assign technicians and an arrival window to an existing trip.
    ///
    /// The first employee becomes the supervisor.
    #[instrument(skip(self, ctx, token, update), fields(ticket_id = update.ticket_id))]
    pub async fn update_job(
        &self,
        ctx: &CallContext,
        token: &str,
        update: &ScheduleUpdate,
    ) -> Result<()> {
        let payload = SaveScheduleRequest::from(update);
        let request = RequestBuilder::post("Job/SaveSchedule")
            .token(token)
            .json(&payload)?;

        let response: StatusOnly = self.client.send(ctx, request).await?;
        response
            .api_status
            .check()
            .map_err(|e| e.with_exchange(Some(&payload), &response))
    }

    /// List jobs scheduled between two dates, inclusive.
    ///
    /// A range with no jobs is an empty list, not an error.
    #[instrument(skip(self, ctx, token))]
    pub async fn list_jobs(
        &self,
        ctx: &CallContext,
        token: &str,
        start: NaiveDate,
        finish: NaiveDate,
    ) -> Result<Vec<Job>> {
        let request = RequestBuilder::get("Job/GetJob")
            .token(token)
            .query("fromdate", query_date(start))
            .query("todate", query_date(finish));

        let response: JobList = self.client.send(ctx, request).await?;
        response
            .api_status
            .check()
            .map_err(|e| e.with_exchange(None::<&()>, &response))?;

        Ok(response.jobs)
    }
}
