//! # sw-rest
//!
//! ServiceWorks resource endpoints.
//!
//! ## Features
//!
//! - **Customers** - search by name, create with a service address
//! - **Jobs** - list by date range, create, schedule technicians, time ranges
//! - **Crew** - list employees
//!
//! Every call takes the session token from `serviceworks-auth`; the client
//! itself holds none, so one instance can serve many sessions.
//!
//! ## Example
//!
//! ```rust,ignore
//! use chrono::NaiveDate;
//! use serviceworks_client::CallContext;
//! use serviceworks_rest::ServiceWorksRestClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), serviceworks_rest::Error> {
//!     let client = ServiceWorksRestClient::new()?;
//!     let ctx = CallContext::background();
//!
//!     let crew = client.crew_list(&ctx, &session.token).await?;
//!
//!     let day = NaiveDate::from_ymd_opt(2023, 11, 30).unwrap();
//!     let jobs = client.list_jobs(&ctx, &session.token, day, day.succ_opt().unwrap()).await?;
//!
//!     Ok(())
//! }
//! ```

mod client;
mod crew;
mod customers;
mod envelope;
mod jobs;

pub use client::ServiceWorksRestClient;
pub use crew::Employee;
pub use customers::{Address, Customer, NewCustomer, NO_CUSTOMER_FOUND};
pub use jobs::{
    Assignment, AssignmentDetail, Job, JobStatus, NewJob, ScheduleUpdate, TimeRange, Trip,
    ASSIGN_TIME_RANGE,
};

pub use serviceworks_client::{Error, ErrorKind, Result};
