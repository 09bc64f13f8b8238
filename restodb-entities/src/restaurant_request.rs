use crate::{geo::MapPoint, id::*, restaurant::*};

/// A proposal to add a new restaurant or to edit an existing one.
///
/// Without a corresponding restaurant the request proposes a new
/// restaurant. All fields have already been back-filled from the
/// corresponding restaurant when the request was stored.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct RestaurantRequest {
    pub id                       : Id,
    pub corresponding_restaurant : Option<Id>,
    pub requester                : Option<Id>,
    pub name                     : String,
    pub address                  : String,
    pub pos                      : MapPoint,
    pub contact_info             : String,
    pub menu_text                : String,
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct NewRestaurantRequest {
    pub corresponding_restaurant : Option<Id>,
    pub requester                : Option<Id>,
    pub name                     : String,
    pub address                  : String,
    pub pos                      : MapPoint,
    pub contact_info             : String,
    pub menu_text                : String,
}

impl RestaurantRequest {
    pub const fn is_new_restaurant(&self) -> bool {
        self.corresponding_restaurant.is_none()
    }

    /// Overwrites all editable fields of the restaurant.
    pub fn apply_to(&self, restaurant: &mut Restaurant) {
        restaurant.name = self.name.clone();
        restaurant.address = self.address.clone();
        restaurant.pos = self.pos;
        restaurant.contact_info = self.contact_info.clone();
        restaurant.menu_text = self.menu_text.clone();
    }

    pub fn to_new_restaurant(&self) -> NewRestaurant {
        NewRestaurant {
            name: self.name.clone(),
            address: self.address.clone(),
            pos: self.pos,
            contact_info: self.contact_info.clone(),
            menu_text: self.menu_text.clone(),
        }
    }
}
