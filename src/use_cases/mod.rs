// Use cases layer: access and session workflows.

pub mod event_details;
pub mod health;
pub mod logout;
pub mod sweep_sessions;
pub mod verify_code;
pub mod verify_token;

#[cfg(test)]
pub(crate) mod test_support;
