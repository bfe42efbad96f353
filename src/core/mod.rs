/*
* Core server plumbing: logging setup, router construction, listener and shutdown.
*/

pub mod logging;
pub mod server;
