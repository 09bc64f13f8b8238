use maud::{html, Markup};
use strum::IntoEnumIterator;

use super::page;
use crate::{
    core::prelude::*,
    web::frontend::forms::{errors_for, FieldError, ReportForm, RequestForm, ReviewForm},
};

fn field_errors(errors: &[FieldError], field: &str) -> Markup {
    html! {
        @for message in errors_for(errors, field) {
            span class="error" { (message) }
        }
    }
}

fn restaurant_select(
    name: &str,
    restaurants: &[Restaurant],
    selected: Option<i64>,
    empty_label: &str,
) -> Markup {
    html! {
        select name=(name) {
            option value="" selected[selected.is_none()] { (empty_label) }
            @for r in restaurants {
                option value=(r.id) selected[selected == Some(r.id.to_i64())] { (r.name) }
            }
        }
    }
}

fn success_message(success: bool, message: &str) -> Markup {
    html! {
        @if success {
            p class="success" { (message) }
        }
    }
}

fn login_hint(user: Option<&User>) -> Markup {
    html! {
        @if user.is_none() {
            p class="hint" { "Please " a href="/login" { "log in" } " first." }
        }
    }
}

pub fn request_form(
    user: Option<&User>,
    restaurants: &[Restaurant],
    form: &RequestForm,
    errors: &[FieldError],
    success: bool,
) -> Markup {
    let action = match form.corresponding_restaurant {
        Some(id) => format!("/restaurant_request/{id}/"),
        None => "/restaurant_request/".to_string(),
    };
    let text = |value: &Option<String>| value.clone().unwrap_or_default();
    page(
        "Propose a restaurant",
        user,
        None,
        None,
        html! {
            main class="form" {
                h2 { "Propose a new restaurant or a change" }
                (success_message(success, "Thank you! Your request will be reviewed."))
                (field_errors(errors, ""))
                form action=(action) method="POST" {
                    label {
                        "Restaurant to Change" br;
                        (restaurant_select("corresponding_restaurant", restaurants, form.corresponding_restaurant, "New Restaurant"))
                    }
                    br;
                    label {
                        "Proposed Name" br;
                        input type="text" name="name" value=(text(&form.name));
                        (field_errors(errors, "name"))
                    }
                    br;
                    label {
                        "Proposed Address" br;
                        input type="text" name="address" value=(text(&form.address));
                        (field_errors(errors, "address"))
                    }
                    br;
                    label {
                        "Proposed Latitude" br;
                        input type="number" step="any" name="latitude" value=(text(&form.latitude));
                        (field_errors(errors, "latitude"))
                    }
                    br;
                    label {
                        "Proposed Longitude" br;
                        input type="number" step="any" name="longitude" value=(text(&form.longitude));
                        (field_errors(errors, "longitude"))
                    }
                    br;
                    label {
                        "Proposed Contact Info" br;
                        input type="text" name="contact_info" value=(text(&form.contact_info));
                        (field_errors(errors, "contact_info"))
                    }
                    br;
                    label {
                        "Proposed Menu Text" br;
                        textarea name="menu_text" rows=(4) cols=(50) { (text(&form.menu_text)) }
                        (field_errors(errors, "menu_text"))
                    }
                    br;
                    input type="submit" value="Submit";
                }
            }
        },
    )
}

fn rating_input(rating: Option<i64>, errors: &[FieldError]) -> Markup {
    html! {
        label {
            "Rating (1-5)" br;
            input type="number" name="rating" min="1" max="5"
                value=(rating.map(|r| r.to_string()).unwrap_or_default());
            (field_errors(errors, "rating"))
        }
    }
}

pub fn review_form(
    user: Option<&User>,
    restaurants: &[Restaurant],
    form: &ReviewForm,
    errors: &[FieldError],
    success: bool,
) -> Markup {
    page(
        "Write a review",
        user,
        None,
        None,
        html! {
            main class="form" {
                h2 { "Write a review" }
                (success_message(success, "Thank you for your review!"))
                (login_hint(user))
                (field_errors(errors, ""))
                form action="/review" method="POST" {
                    label {
                        "Restaurant" br;
                        (restaurant_select("restaurant", restaurants, form.restaurant, "---------"))
                        (field_errors(errors, "restaurant"))
                    }
                    br;
                    label {
                        "Your Review" br;
                        textarea name="review_text" rows=(4) cols=(50) {
                            (form.review_text.as_deref().unwrap_or_default())
                        }
                        (field_errors(errors, "review_text"))
                    }
                    br;
                    (rating_input(form.rating, errors))
                    br;
                    input type="submit" value="Submit";
                }
            }
        },
    )
}

pub fn report_form(
    user: Option<&User>,
    restaurants: &[Restaurant],
    form: &ReportForm,
    errors: &[FieldError],
    success: bool,
) -> Markup {
    let selected_category = form
        .report_type
        .as_deref()
        .and_then(|t| t.parse::<ReportCategory>().ok())
        .unwrap_or_default();
    page(
        "Report",
        user,
        None,
        None,
        html! {
            main class="form" {
                h2 { "Report" }
                (success_message(success, "Thank you for your report!"))
                (login_hint(user))
                (field_errors(errors, ""))
                form action="/reports/create/" method="POST" {
                    label {
                        "Restaurant" br;
                        (restaurant_select("restaurant", restaurants, form.restaurant, "---------"))
                        (field_errors(errors, "restaurant"))
                    }
                    br;
                    label {
                        "Report Type" br;
                        select name="report_type" {
                            @for category in ReportCategory::iter() {
                                option value=(category) selected[category == selected_category] {
                                    (category.label())
                                }
                            }
                        }
                        (field_errors(errors, "report_type"))
                    }
                    br;
                    (rating_input(form.rating, errors))
                    br;
                    input type="submit" value="Submit";
                }
            }
        },
    )
}
