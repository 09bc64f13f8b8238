use rocket::{config::Config as RocketCfg, Rocket, Route};
use restodb_core::repositories::RestaurantRepo as _;

pub mod api;
#[cfg(feature = "frontend")]
mod frontend;
mod guards;
mod sqlite;

#[cfg(test)]
pub mod tests;

pub(crate) struct InstanceOptions {
    mounts: Vec<(&'static str, Vec<Route>)>,
    rocket_cfg: Option<RocketCfg>,
    version: &'static str,
}

pub(crate) fn rocket_instance(
    options: InstanceOptions,
    db: sqlite::Connections,
) -> Rocket<rocket::Build> {
    let InstanceOptions {
        mounts,
        rocket_cfg,
        version,
    } = options;

    match db.shared().map(|db| db.count_restaurants()) {
        Ok(Ok(count)) => info!("Serving {count} restaurant(s)"),
        Ok(Err(err)) => warn!("Failed to count restaurants: {err}"),
        Err(err) => warn!("Failed to access the database: {err}"),
    }

    let r = match rocket_cfg {
        Some(cfg) => rocket::custom(cfg),
        None => rocket::build(),
    };

    let version = guards::Version(version);

    let mut instance = r.manage(db).manage(version);

    for (m, r) in mounts {
        instance = instance.mount(m, r);
    }
    instance
}

#[cfg(not(feature = "frontend"))]
fn mounts() -> Vec<(&'static str, Vec<Route>)> {
    vec![("/api", api::routes())]
}

#[cfg(feature = "frontend")]
fn mounts() -> Vec<(&'static str, Vec<Route>)> {
    vec![("/api", api::routes()), ("/", frontend::routes())]
}

pub async fn run(db: sqlite::Connections, enable_cors: bool, version: &'static str) {
    let options = InstanceOptions {
        mounts: mounts(),
        rocket_cfg: None,
        version,
    };

    let instance = rocket_instance(options, db);
    let server_task = if enable_cors {
        match rocket_cors::CorsOptions::default().to_cors() {
            Ok(cors) => instance.attach(cors).launch(),
            Err(err) => {
                error!("Invalid CORS configuration: {err}");
                return;
            }
        }
    } else {
        instance.launch()
    };
    if let Err(err) = server_task.await {
        error!("Unable to run web server: {err}");
    }
}
