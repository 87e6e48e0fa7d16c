//! Job and scheduling types.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use serviceworks_client::serde_helpers::{null_default, string_or_number};
use serviceworks_client::ApiStatus;

use crate::customers::Customer;

/// `AssignTime` value selecting a time-range booking.
pub const ASSIGN_TIME_RANGE: &str = "TimeRange";

/// Query date format, `MM/DD/YYYY`.
pub(crate) const QUERY_DATE_FORMAT: &str = "%m/%d/%Y";

/// Assignment timestamp format. Seconds are always sent as `00`.
pub(crate) const ASSIGN_DATE_TIME_FORMAT: &str = "%m/%d/%Y %H:%M:00";

const COMPLETION_TIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%m/%d/%Y %H:%M:%S"];

pub(crate) fn query_date(date: NaiveDate) -> String {
    date.format(QUERY_DATE_FORMAT).to_string()
}

pub(crate) fn assign_date_time(at: NaiveDateTime) -> String {
    at.format(ASSIGN_DATE_TIME_FORMAT).to_string()
}

/// Lifecycle status code of a job ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JobStatus {
    Unassigned,
    Scheduled,
    Unscheduled,
    Confirmed,
}

impl JobStatus {
    /// Numeric code used on the wire.
    pub fn code(self) -> i64 {
        match self {
            JobStatus::Unassigned => 1,
            JobStatus::Scheduled => 2,
            JobStatus::Unscheduled => 7,
            JobStatus::Confirmed => 13,
        }
    }

    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            1 => Some(JobStatus::Unassigned),
            2 => Some(JobStatus::Scheduled),
            7 => Some(JobStatus::Unscheduled),
            13 => Some(JobStatus::Confirmed),
            _ => None,
        }
    }

    fn name(self) -> &'static str {
        match self {
            JobStatus::Unassigned => "Unassigned",
            JobStatus::Scheduled => "Scheduled",
            JobStatus::Unscheduled => "Unscheduled",
            JobStatus::Confirmed => "Confirmed",
        }
    }
}

impl std::fmt::Display for JobStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for JobStatus {
    type Err = String;

    /// Accepts either the numeric code or the status name, any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(code) = s.parse::<i64>() {
            return JobStatus::from_code(code).ok_or_else(|| format!("unknown job status {code}"));
        }
        [
            JobStatus::Unassigned,
            JobStatus::Scheduled,
            JobStatus::Unscheduled,
            JobStatus::Confirmed,
        ]
        .into_iter()
        .find(|status| status.name().eq_ignore_ascii_case(s))
        .ok_or_else(|| format!("unknown job status {s:?}"))
    }
}

/// A bookable arrival window.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TimeRange {
    #[serde(alias = "Id", deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(alias = "Text", deserialize_with = "null_default")]
    pub text: String,
}

impl TimeRange {
    /// The id as the number job creation expects.
    pub fn id_number(&self) -> Option<i64> {
        self.id.trim().parse().ok()
    }
}

/// A job ticket.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Job {
    #[serde(alias = "TicketId", deserialize_with = "null_default")]
    pub ticket_id: i64,
    #[serde(alias = "IssueDescription", deserialize_with = "null_default")]
    pub issue_description: String,
    #[serde(alias = "TicketStatus", deserialize_with = "string_or_number")]
    pub ticket_status: String,
    #[serde(alias = "IsActive", deserialize_with = "null_default")]
    pub is_active: bool,
    #[serde(alias = "Customer", deserialize_with = "null_default")]
    pub customer: Customer,
    #[serde(alias = "Assignments", deserialize_with = "null_default")]
    pub assignments: Vec<Assignment>,
}

impl Job {
    /// Parsed ticket status, if the platform sent a known one.
    pub fn status(&self) -> Option<JobStatus> {
        self.ticket_status.parse().ok()
    }
}

/// One scheduled visit (trip) of a job.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Assignment {
    #[serde(alias = "TripAssignmentId", deserialize_with = "null_default")]
    pub trip_assignment_id: i64,
    #[serde(alias = "TripNo", deserialize_with = "null_default")]
    pub trip_no: i64,
    #[serde(alias = "Duration", deserialize_with = "null_default")]
    pub duration: i64,
    #[serde(alias = "TimeRangeId", deserialize_with = "null_default")]
    pub time_range_id: i64,
    #[serde(alias = "AssignDateTime", deserialize_with = "null_default")]
    pub assign_date_time: String,
    #[serde(alias = "TimeRange", deserialize_with = "null_default")]
    pub time_range: String,
    #[serde(alias = "AssignmentDetails", deserialize_with = "null_default")]
    pub assignment_details: Vec<AssignmentDetail>,
    #[serde(alias = "TripList", deserialize_with = "null_default")]
    pub trip_list: Vec<Trip>,
}

/// A technician assigned to a trip.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AssignmentDetail {
    #[serde(alias = "TripDetailsId", deserialize_with = "null_default")]
    pub trip_details_id: i64,
    #[serde(alias = "EmployeeId", deserialize_with = "null_default")]
    pub employee_id: i64,
    #[serde(alias = "EmployeeName", deserialize_with = "null_default")]
    pub employee_name: String,
}

/// Completion record of a trip.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Trip {
    #[serde(alias = "TripDetailsId", deserialize_with = "null_default")]
    pub trip_details_id: i64,
    #[serde(alias = "EmployeeId", deserialize_with = "null_default")]
    pub employee_id: i64,
    /// Raw timestamp as sent; see [`Trip::completed_at`].
    #[serde(alias = "CompletionTime", deserialize_with = "null_default")]
    pub completion_time: String,
}

impl Trip {
    /// Completion time in the company's local time, if set and parseable.
    pub fn completed_at(&self) -> Option<NaiveDateTime> {
        let raw = self.completion_time.trim();
        if let Ok(at) = chrono::DateTime::parse_from_rfc3339(raw) {
            return Some(at.naive_local());
        }
        COMPLETION_TIME_FORMATS
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
    }
}

/// Input for [`create_job`](crate::ServiceWorksRestClient::create_job).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewJob {
    pub customer_id: i64,
    pub issue_description: String,
    /// Duration in minutes.
    pub duration: i64,
    pub time_range_id: i64,
    /// Target arrival, in the company's local time.
    pub target: NaiveDateTime,
    /// Technicians to schedule; the first one supervises.
    pub employee_ids: Vec<i64>,
}

/// Input for [`update_job`](crate::ServiceWorksRestClient::update_job).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScheduleUpdate {
    pub ticket_id: i64,
    pub trip_assignment_id: i64,
    pub trip_no: i64,
    pub issue_description: String,
    /// Duration in minutes.
    pub duration: i64,
    pub time_range_id: i64,
    pub target: NaiveDateTime,
    /// Technicians to schedule; the first one supervises.
    pub employee_ids: Vec<i64>,
}

/// `Job/CreateNewJob` payload.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct CreateJobRequest<'a> {
    customer_id: i64,
    duration: i64,
    time_range_id: i64,
    issue_description: &'a str,
    assign_date_time: String,
    assign_time: &'static str,
}

impl<'a> From<&'a NewJob> for CreateJobRequest<'a> {
    fn from(job: &'a NewJob) -> Self {
        Self {
            customer_id: job.customer_id,
            duration: job.duration,
            time_range_id: job.time_range_id,
            issue_description: &job.issue_description,
            assign_date_time: assign_date_time(job.target),
            assign_time: ASSIGN_TIME_RANGE,
        }
    }
}

/// `Job/SaveSchedule` payload.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct SaveScheduleRequest<'a> {
    ticket_id: i64,
    trip_assignment_id: i64,
    duration: i64,
    time_range_id: i64,
    trip_no: i64,
    issue_description: &'a str,
    assign_date_time: String,
    assign_time: &'static str,
    technicians: Vec<Technician>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct Technician {
    employee_id: i64,
    is_supervisor: bool,
}

impl<'a> From<&'a ScheduleUpdate> for SaveScheduleRequest<'a> {
    fn from(update: &'a ScheduleUpdate) -> Self {
        let technicians = update
            .employee_ids
            .iter()
            .enumerate()
            .map(|(i, &employee_id)| Technician {
                employee_id,
                is_supervisor: i == 0,
            })
            .collect();

        Self {
            ticket_id: update.ticket_id,
            trip_assignment_id: update.trip_assignment_id,
            duration: update.duration,
            time_range_id: update.time_range_id,
            trip_no: update.trip_no,
            issue_description: &update.issue_description,
            assign_date_time: assign_date_time(update.target),
            assign_time: ASSIGN_TIME_RANGE,
            technicians,
        }
    }
}

/// `{apiStatus, jobs}`, the job endpoints' envelope.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct JobList {
    #[serde(default, alias = "ApiStatus")]
    pub api_status: ApiStatus,
    #[serde(default, alias = "Jobs", deserialize_with = "null_default")]
    pub jobs: Vec<Job>,
}
