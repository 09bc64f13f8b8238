use restodb_entities::{
    geo::{is_valid_lat_deg, is_valid_lon_deg, MapPoint},
    rejection_message::*,
    restaurant::*,
    restaurant_request::*,
};
use thiserror::Error;

pub use fast_chemail::is_valid_email;

pub trait Validate {
    type Error;
    fn validate(&self) -> Result<(), Self::Error>;
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RestaurantInvalidation {
    #[error("Latitude must be between -90 and 90")]
    Latitude,
    #[error("Longitude must be between -180 and 180")]
    Longitude,
    #[error("The {0} must not exceed {1} characters")]
    TextTooLong(&'static str, usize),
}

pub fn validate_pos(pos: MapPoint) -> Result<(), RestaurantInvalidation> {
    if !is_valid_lat_deg(pos.lat()) {
        return Err(RestaurantInvalidation::Latitude);
    }
    if !is_valid_lon_deg(pos.lon()) {
        return Err(RestaurantInvalidation::Longitude);
    }
    Ok(())
}

pub fn validate_text_len(
    field: &'static str,
    text: &str,
    max_len: usize,
) -> Result<(), RestaurantInvalidation> {
    if text.chars().count() > max_len {
        return Err(RestaurantInvalidation::TextTooLong(field, max_len));
    }
    Ok(())
}

fn validate_restaurant_fields(
    name: &str,
    address: &str,
    pos: MapPoint,
    contact_info: &str,
    menu_text: &str,
) -> Result<(), RestaurantInvalidation> {
    validate_pos(pos)?;
    validate_text_len("name", name, NAME_MAX_LEN)?;
    validate_text_len("address", address, ADDRESS_MAX_LEN)?;
    validate_text_len("contact info", contact_info, CONTACT_INFO_MAX_LEN)?;
    validate_text_len("menu", menu_text, MENU_TEXT_MAX_LEN)?;
    Ok(())
}

impl Validate for NewRestaurant {
    type Error = RestaurantInvalidation;
    fn validate(&self) -> Result<(), Self::Error> {
        validate_restaurant_fields(
            &self.name,
            &self.address,
            self.pos,
            &self.contact_info,
            &self.menu_text,
        )
    }
}

impl Validate for Restaurant {
    type Error = RestaurantInvalidation;
    fn validate(&self) -> Result<(), Self::Error> {
        validate_restaurant_fields(
            &self.name,
            &self.address,
            self.pos,
            &self.contact_info,
            &self.menu_text,
        )
    }
}

impl Validate for NewRestaurantRequest {
    type Error = RestaurantInvalidation;
    fn validate(&self) -> Result<(), Self::Error> {
        validate_restaurant_fields(
            &self.name,
            &self.address,
            self.pos,
            &self.contact_info,
            &self.menu_text,
        )?;
        // The name becomes the subject of a rejection message
        debug_assert!(NAME_MAX_LEN <= FOR_WHAT_MAX_LEN);
        Ok(())
    }
}
