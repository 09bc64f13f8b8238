use crate::{geo::MapPoint, id::*};

pub const NAME_MAX_LEN: usize = 100;
pub const ADDRESS_MAX_LEN: usize = 200;
pub const CONTACT_INFO_MAX_LEN: usize = 200;
pub const MENU_TEXT_MAX_LEN: usize = 500;

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct Restaurant {
    pub id           : Id,
    pub name         : String,
    pub address      : String,
    pub pos          : MapPoint,
    pub contact_info : String,
    pub menu_text    : String,
    /// Members of this group are entitled to edit the restaurant.
    pub admin_group  : Option<Id>,
}

/// A restaurant that has not been stored yet.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct NewRestaurant {
    pub name         : String,
    pub address      : String,
    pub pos          : MapPoint,
    pub contact_info : String,
    pub menu_text    : String,
}

impl NewRestaurant {
    pub fn into_restaurant(self, id: Id) -> Restaurant {
        let Self {
            name,
            address,
            pos,
            contact_info,
            menu_text,
        } = self;
        Restaurant {
            id,
            name,
            address,
            pos,
            contact_info,
            menu_text,
            admin_group: None,
        }
    }
}
