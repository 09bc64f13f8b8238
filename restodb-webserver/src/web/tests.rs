use rocket::{config::Config as RocketCfg, local::blocking::Client, Route};

use crate::{
    core::{prelude::*, usecases},
    web::sqlite,
};

pub mod prelude {

    pub const DUMMY_VERSION: &str = "3.2.1";

    pub use rocket::{
        http::{ContentType, Cookie, Status},
        local::blocking::{Client, LocalResponse},
    };

    pub use super::{create_restaurant, login, register_user, rocket_test_setup};

    pub use crate::core::{prelude::*, usecases};
}

pub fn rocket_test_setup(mounts: Vec<(&'static str, Vec<Route>)>) -> (Client, sqlite::Connections) {
    let connections = restodb_db_sqlite::Connections::init(":memory:", 1).unwrap();
    restodb_db_sqlite::run_embedded_database_migrations(connections.exclusive().unwrap()).unwrap();
    let db = sqlite::Connections::from(connections);
    let options = super::InstanceOptions {
        mounts,
        rocket_cfg: Some(RocketCfg::debug_default()),
        version: prelude::DUMMY_VERSION,
    };
    let rocket = super::rocket_instance(options, db.clone());
    let client = Client::tracked(rocket).unwrap();
    (client, db)
}

pub fn register_user(pool: &sqlite::Connections, email: &str, pw: &str, is_global_admin: bool) -> Id {
    let db = pool.exclusive().unwrap();
    usecases::create_new_user(
        &db,
        usecases::UserRegistration {
            email: email.to_string(),
            password: pw.to_string(),
            is_global_admin,
            ..Default::default()
        },
    )
    .unwrap()
}

pub fn create_restaurant(pool: &sqlite::Connections, name: &str) -> Id {
    let new_restaurant = NewRestaurant::build()
        .name(name)
        .address("1 Main St")
        .pos(40.7128, -74.006)
        .contact_info("123-456-7890")
        .menu_text("Tacos")
        .finish();
    pool.exclusive()
        .unwrap()
        .transaction(|conn| {
            let id = usecases::create_restaurant(conn, new_restaurant)?;
            usecases::ensure_authorization_group(conn, id)?;
            Ok::<_, usecases::Error>(id)
        })
        .unwrap()
}

/// Logs in via the frontend and keeps the session cookie in the client.
pub fn login(client: &Client, email: &str, pw: &str) {
    let res = client
        .post("/login")
        .header(rocket::http::ContentType::Form)
        .body(format!("email={email}&password={pw}"))
        .dispatch();
    assert_eq!(res.status(), rocket::http::Status::Found);
}
