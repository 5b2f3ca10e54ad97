// Interface adapters: HTTP handlers, wire protocol and store adapters.

pub mod handlers;
pub mod presentation;
pub mod protocol;
pub mod routes;
pub mod state;
