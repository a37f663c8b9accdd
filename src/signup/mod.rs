pub mod form;
pub mod submitter;

pub use crate::signup::form::{ConsoleForm, MessageKind, SignupForm};
pub use crate::signup::submitter::{SignupSubmitter, SubmissionState, SUCCESS_MESSAGE};
