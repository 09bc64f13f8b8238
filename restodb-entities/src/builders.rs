pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::{restaurant_builder::*, user_builder::*};

pub mod restaurant_builder {

    use super::*;
    use crate::{geo::*, id::*, restaurant::*};

    #[derive(Debug)]
    pub struct RestaurantBuild {
        restaurant: Restaurant,
    }

    impl RestaurantBuild {
        pub fn id(mut self, id: i64) -> Self {
            self.restaurant.id = id.into();
            self
        }
        pub fn name(mut self, name: &str) -> Self {
            self.restaurant.name = name.into();
            self
        }
        pub fn address(mut self, address: &str) -> Self {
            self.restaurant.address = address.into();
            self
        }
        pub fn pos(mut self, lat: f64, lon: f64) -> Self {
            self.restaurant.pos = MapPoint::new_unchecked(lat, lon);
            self
        }
        pub fn contact_info(mut self, contact_info: &str) -> Self {
            self.restaurant.contact_info = contact_info.into();
            self
        }
        pub fn menu_text(mut self, menu_text: &str) -> Self {
            self.restaurant.menu_text = menu_text.into();
            self
        }
        pub fn admin_group(mut self, group_id: Option<i64>) -> Self {
            self.restaurant.admin_group = group_id.map(Id::from);
            self
        }
        pub fn finish(self) -> Restaurant {
            self.restaurant
        }
    }

    impl Builder for Restaurant {
        type Build = RestaurantBuild;
        fn build() -> Self::Build {
            Self::Build {
                restaurant: Restaurant {
                    id: Id::new(1),
                    name: "".into(),
                    address: "".into(),
                    pos: MapPoint::default(),
                    contact_info: "".into(),
                    menu_text: "".into(),
                    admin_group: None,
                },
            }
        }
    }

    #[derive(Debug)]
    pub struct NewRestaurantBuild {
        new_restaurant: NewRestaurant,
    }

    impl NewRestaurantBuild {
        pub fn name(mut self, name: &str) -> Self {
            self.new_restaurant.name = name.into();
            self
        }
        pub fn address(mut self, address: &str) -> Self {
            self.new_restaurant.address = address.into();
            self
        }
        pub fn pos(mut self, lat: f64, lon: f64) -> Self {
            self.new_restaurant.pos = MapPoint::new_unchecked(lat, lon);
            self
        }
        pub fn contact_info(mut self, contact_info: &str) -> Self {
            self.new_restaurant.contact_info = contact_info.into();
            self
        }
        pub fn menu_text(mut self, menu_text: &str) -> Self {
            self.new_restaurant.menu_text = menu_text.into();
            self
        }
        pub fn finish(self) -> NewRestaurant {
            self.new_restaurant
        }
    }

    impl Builder for NewRestaurant {
        type Build = NewRestaurantBuild;
        fn build() -> Self::Build {
            Self::Build {
                new_restaurant: NewRestaurant {
                    name: "Test Restaurant".into(),
                    address: "123 Test St".into(),
                    pos: MapPoint::new_unchecked(40.7128, -74.006),
                    contact_info: "123-456-7890".into(),
                    menu_text: "".into(),
                },
            }
        }
    }
}

pub mod user_builder {

    use super::*;
    use crate::{email::*, id::*, password::*, time::*, user::*};

    #[derive(Debug)]
    pub struct UserBuild {
        user: User,
    }

    impl UserBuild {
        pub fn id(mut self, id: i64) -> Self {
            self.user.id = id.into();
            self
        }
        pub fn email(mut self, email: &str) -> Self {
            self.user.email = EmailAddress::new_unchecked(email.into());
            self
        }
        pub fn name(mut self, name: &str) -> Self {
            self.user.name = name.into();
            self
        }
        /// Stores the given string as password hash without hashing it.
        pub fn password_hash(mut self, hash: &str) -> Self {
            self.user.password = Password::from(hash.to_owned());
            self
        }
        pub fn active(mut self, is_active: bool) -> Self {
            self.user.is_active = is_active;
            self
        }
        pub fn staff(mut self, is_staff: bool) -> Self {
            self.user.is_staff = is_staff;
            self
        }
        pub fn finish(self) -> User {
            self.user
        }
    }

    impl Builder for User {
        type Build = UserBuild;
        fn build() -> Self::Build {
            Self::Build {
                user: User {
                    id: Id::new(1),
                    email: EmailAddress::new_unchecked("user@example.com".into()),
                    name: "".into(),
                    password: Password::from(String::new()),
                    is_active: true,
                    is_staff: false,
                    is_superuser: false,
                    date_joined: Timestamp::from_millis(0),
                    last_login: None,
                },
            }
        }
    }
}
