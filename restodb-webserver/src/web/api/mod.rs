use std::{fmt::Display, result};

use restodb_boundary::Error as JsonErrorResponse;
use rocket::serde::json::Json;
use rocket::{
    self, get,
    http::Status,
    response::{self, Responder},
    routes, Route, State,
};

use super::guards::*;
use crate::{
    adapters::json,
    core::{prelude::*, usecases},
    web::sqlite,
};

mod error;
mod restaurants;
mod util;

pub use self::error::Error as ApiError;

#[cfg(test)]
pub mod tests;

type Result<T> = result::Result<Json<T>, ApiError>;

pub fn routes() -> Vec<Route> {
    routes![
        // ---   restaurants   --- //
        restaurants::get_restaurants,
        restaurants::get_restaurant,
        // ---   server   --- //
        util::get_version,
    ]
}

fn json_error_response<'r, 'o: 'r, E: Display>(
    req: &'r rocket::Request<'_>,
    err: &E,
    status: Status,
) -> response::Result<'o> {
    let message = err.to_string();
    let boundary_error = JsonErrorResponse {
        http_status: status.code,
        message,
    };
    Json(boundary_error).respond_to(req).map(|mut res| {
        res.set_status(status);
        res
    })
}
