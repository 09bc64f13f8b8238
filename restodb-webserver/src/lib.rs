#![allow(proc_macro_derive_resolution_fallback)]
#![recursion_limit = "128"]

#[macro_use]
extern crate log;

use restodb_db_sqlite::Connections;

mod adapters;
mod core;
mod web;

pub async fn run(connections: Connections, enable_cors: bool, version: &'static str) {
    web::run(connections.into(), enable_cors, version).await;
}
