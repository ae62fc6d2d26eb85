#![forbid(unsafe_code)]

pub mod app_services;
pub mod error;
pub mod progress_service;
pub mod trial_loop;

pub use quest_core::Clock;

pub use app_services::AppServices;
pub use error::{AppServicesError, ProgressServiceError, TrialLoopError};
pub use progress_service::ProgressService;
pub use trial_loop::TrialLoopService;
