use super::http_response::{astros, iss_now};

pub mod astros_get;
pub mod iss_now_get;
pub(crate) mod request_common;
