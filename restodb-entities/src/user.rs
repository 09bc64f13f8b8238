use crate::{email::*, id::*, password::Password, time::*};

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id           : Id,
    pub email        : EmailAddress,
    pub name         : String,
    pub password     : Password,
    pub is_active    : bool,
    pub is_staff     : bool,
    pub is_superuser : bool,
    pub date_joined  : Timestamp,
    pub last_login   : Option<Timestamp>,
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub email        : EmailAddress,
    pub name         : String,
    pub password     : Password,
    pub is_staff     : bool,
    pub is_superuser : bool,
}

impl User {
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            self.email.as_str()
        } else {
            &self.name
        }
    }
}
