use super::prelude::*;
use crate::util::validate::Validate;

/// A proposal as submitted by a user.
///
/// Missing or empty fields are back-filled before the
/// request is stored.
#[rustfmt::skip]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestSubmission {
    pub corresponding_restaurant : Option<Id>,
    pub requester                : Option<Id>,
    pub name                     : Option<String>,
    pub address                  : Option<String>,
    pub latitude                 : Option<f64>,
    pub longitude                : Option<f64>,
    pub contact_info             : Option<String>,
    pub menu_text                : Option<String>,
}

impl RequestSubmission {
    /// Pre-fills all fields with the current values of the restaurant.
    pub fn from_restaurant(restaurant: &Restaurant) -> Self {
        Self {
            corresponding_restaurant: Some(restaurant.id),
            requester: None,
            name: Some(restaurant.name.clone()),
            address: Some(restaurant.address.clone()),
            latitude: Some(restaurant.pos.lat()),
            longitude: Some(restaurant.pos.lon()),
            contact_info: Some(restaurant.contact_info.clone()),
            menu_text: Some(restaurant.menu_text.clone()),
        }
    }
}

fn text_or(submitted: Option<String>, current: &str) -> String {
    submitted
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| current.to_owned())
}

/// Replaces all missing fields of the submission.
///
/// Without a corresponding restaurant missing coordinates
/// default to 0 and missing texts stay empty. Otherwise each
/// missing field is taken from the corresponding restaurant.
pub fn back_fill_restaurant_request(
    submission: RequestSubmission,
    target: Option<&Restaurant>,
) -> NewRestaurantRequest {
    let RequestSubmission {
        corresponding_restaurant,
        requester,
        name,
        address,
        latitude,
        longitude,
        contact_info,
        menu_text,
    } = submission;
    debug_assert_eq!(corresponding_restaurant, target.map(|r| r.id));
    match target {
        Some(target) => NewRestaurantRequest {
            corresponding_restaurant: Some(target.id),
            requester,
            name: text_or(name, &target.name),
            address: text_or(address, &target.address),
            pos: MapPoint::new_unchecked(
                latitude.unwrap_or_else(|| target.pos.lat()),
                longitude.unwrap_or_else(|| target.pos.lon()),
            ),
            contact_info: text_or(contact_info, &target.contact_info),
            menu_text: text_or(menu_text, &target.menu_text),
        },
        None => NewRestaurantRequest {
            corresponding_restaurant: None,
            requester,
            name: name.unwrap_or_default(),
            address: address.unwrap_or_default(),
            pos: MapPoint::new_unchecked(latitude.unwrap_or(0.0), longitude.unwrap_or(0.0)),
            contact_info: contact_info.unwrap_or_default(),
            menu_text: menu_text.unwrap_or_default(),
        },
    }
}

pub fn create_restaurant_request<R>(repo: &R, submission: RequestSubmission) -> Result<Id>
where
    R: RestaurantRepo + RestaurantRequestRepo,
{
    let target = submission
        .corresponding_restaurant
        .map(|id| repo.get_restaurant(id))
        .transpose()?;
    let new_request = back_fill_restaurant_request(submission, target.as_ref());
    new_request.validate()?;
    let id = repo.create_restaurant_request(&new_request)?;
    match new_request.corresponding_restaurant {
        Some(restaurant_id) => {
            log::info!("New request {id} to edit restaurant {restaurant_id}");
        }
        None => {
            log::info!("New request {id} to add restaurant '{}'", new_request.name);
        }
    }
    Ok(id)
}
