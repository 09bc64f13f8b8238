use rocket::FromForm;

use crate::core::{prelude::*, usecases};
use restodb_core::usecases::Error as ParameterError;

/// Coordinates are kept as submitted text, so that malformed
/// numbers can be told apart from blank fields.
#[derive(FromForm, Debug, Default, Clone)]
pub struct RequestForm {
    pub corresponding_restaurant: Option<i64>,
    pub name: Option<String>,
    pub address: Option<String>,
    pub latitude: Option<String>,
    pub longitude: Option<String>,
    pub contact_info: Option<String>,
    pub menu_text: Option<String>,
}

const INVALID_NUMBER: &str = "Enter a number.";

/// Missing or blank input is `None`, anything else must be a finite number.
fn parse_coordinate(
    field: &'static str,
    value: Option<&str>,
    errors: &mut Vec<FieldError>,
) -> Option<f64> {
    let value = value.map(str::trim).filter(|v| !v.is_empty())?;
    match value.parse::<f64>() {
        Ok(v) if v.is_finite() => Some(v),
        _ => {
            errors.push(FieldError::new(field, INVALID_NUMBER));
            None
        }
    }
}

impl RequestForm {
    pub fn to_submission(
        &self,
        requester: Option<Id>,
    ) -> std::result::Result<usecases::RequestSubmission, Vec<FieldError>> {
        let mut errors = vec![];
        let latitude = parse_coordinate("latitude", self.latitude.as_deref(), &mut errors);
        let longitude = parse_coordinate("longitude", self.longitude.as_deref(), &mut errors);
        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(usecases::RequestSubmission {
            corresponding_restaurant: self.corresponding_restaurant.map(Id::new),
            requester,
            name: self.name.clone(),
            address: self.address.clone(),
            latitude,
            longitude,
            contact_info: self.contact_info.clone(),
            menu_text: self.menu_text.clone(),
        })
    }
}

impl From<usecases::RequestSubmission> for RequestForm {
    fn from(from: usecases::RequestSubmission) -> Self {
        Self {
            corresponding_restaurant: from.corresponding_restaurant.map(Id::to_i64),
            name: from.name,
            address: from.address,
            latitude: from.latitude.map(|v| v.to_string()),
            longitude: from.longitude.map(|v| v.to_string()),
            contact_info: from.contact_info,
            menu_text: from.menu_text,
        }
    }
}

#[derive(FromForm, Debug, Default, Clone)]
pub struct ReviewForm {
    pub restaurant: Option<i64>,
    pub rating: Option<i64>,
    pub review_text: Option<String>,
}

#[derive(FromForm, Debug, Default, Clone)]
pub struct ReportForm {
    pub restaurant: Option<i64>,
    pub report_type: Option<String>,
    pub rating: Option<i64>,
}

#[derive(FromForm, Debug, Default)]
pub struct RejectionForm {
    pub rejection_message: Option<String>,
}

/// A validation message attached to a form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }

    /// Maps a rejected submission onto the offending form field.
    ///
    /// Returns `None` for errors the user cannot fix by editing the form.
    pub fn from_parameter_error(err: &ParameterError) -> Option<Self> {
        let field = match err {
            ParameterError::Latitude => "latitude",
            ParameterError::Longitude => "longitude",
            ParameterError::RatingTooLow | ParameterError::RatingTooHigh => "rating",
            ParameterError::ReportCategory => "report_type",
            ParameterError::TextTooLong(field, _) | ParameterError::EmptyField(field) => {
                form_field_name(field)
            }
            _ => return None,
        };
        Some(Self::new(field, err.to_string()))
    }
}

fn form_field_name(field: &str) -> &'static str {
    match field {
        "name" => "name",
        "address" => "address",
        "contact info" => "contact_info",
        "menu" => "menu_text",
        "review text" => "review_text",
        _ => "",
    }
}

pub fn errors_for<'a>(errors: &'a [FieldError], field: &'a str) -> impl Iterator<Item = &'a str> {
    errors
        .iter()
        .filter(move |e| e.field == field)
        .map(|e| e.message.as_str())
}
