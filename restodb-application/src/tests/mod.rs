pub mod prelude {
    pub use restodb_core::{
        db::*,
        entities::*,
        repositories::{Error as RepoError, *},
        usecases,
    };
    pub use restodb_entities::builders::*;

    pub mod sqlite {
        pub use super::super::super::sqlite::*;
    }

    pub use crate::{error::AppError, prelude as flows};

    pub const DEFAULT_PASSWORD: &str = "secret";

    pub struct BackendFixture {
        pub db_connections: sqlite::Connections,
    }

    impl BackendFixture {
        pub fn new() -> Self {
            let _ = env_logger::builder().is_test(true).try_init();
            let db_connections = sqlite::Connections::init(":memory:", 1).unwrap();
            restodb_db_sqlite::run_embedded_database_migrations(
                db_connections.exclusive().unwrap(),
            )
            .unwrap();
            Self { db_connections }
        }

        pub fn create_user(&self, email: &str, is_global_admin: bool) -> Id {
            flows::create_user(
                &self.db_connections,
                usecases::UserRegistration {
                    email: email.into(),
                    password: DEFAULT_PASSWORD.into(),
                    is_global_admin,
                    ..Default::default()
                },
            )
            .unwrap()
        }

        pub fn create_restaurant(&self, name: &str) -> Id {
            let new_restaurant = NewRestaurant::build()
                .name(name)
                .address("1 Main St")
                .pos(40.7128, -74.006)
                .contact_info("123-456-7890")
                .finish();
            self.db_connections
                .exclusive()
                .unwrap()
                .transaction(|conn| {
                    let id = usecases::create_restaurant(conn, new_restaurant)?;
                    usecases::ensure_authorization_group(conn, id)?;
                    Ok::<_, usecases::Error>(id)
                })
                .unwrap()
        }

        pub fn add_to_restaurant_admins(&self, user_id: Id, restaurant_id: Id) {
            let db = self.db_connections.exclusive().unwrap();
            let group_name = restaurant_admin_group_name(restaurant_id);
            let (group, _) = db.get_or_create_group(&group_name).unwrap();
            db.add_user_to_group(user_id, group.id).unwrap();
        }

        pub fn create_message(&self, recipient: Id) -> Id {
            self.db_connections
                .exclusive()
                .unwrap()
                .create_rejection_message(&NewRejectionMessage {
                    recipient,
                    for_what: "Tacos".into(),
                    message: usecases::DEFAULT_REJECTION_MESSAGE.into(),
                })
                .unwrap()
        }

        pub fn get_request(&self, id: Id) -> RestaurantRequest {
            self.db_connections
                .shared()
                .unwrap()
                .get_restaurant_request(id)
                .unwrap()
        }

        pub fn count_requests(&self) -> usize {
            self.db_connections
                .shared()
                .unwrap()
                .list_restaurant_requests(RestaurantRequestFilter::All)
                .unwrap()
                .len()
        }
    }
}
