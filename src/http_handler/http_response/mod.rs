pub(crate) mod response_common;
pub mod astros;
pub mod iss_now;

#[cfg(test)]
mod tests;
