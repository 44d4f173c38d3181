// Composition root for the activities bounded context.
//
// Responsibilities:
// - Read config from environment.
// - Seed the in memory registry from the built-in catalog or an override file.
// - Wire the registry into the HTTP router and serve it.

pub mod config;
pub mod http;
pub mod state;
