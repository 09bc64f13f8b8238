use maud::{html, Markup, PreEscaped};
use strum::IntoEnumIterator;

use crate::core::{prelude::*, usecases};
use restodb_core::rating::RestaurantRatings;

const LEAFLET_CSS_URL: &str = "https://cdnjs.cloudflare.com/ajax/libs/leaflet/1.4.0/leaflet.css";
const LEAFLET_CSS_SHA512: &str="sha512-puBpdR0798OZvTTbP4A8Ix/l+A4dHDD0DGqYW6RQ+9jxkRFclaxxQb/SJAWZfWAkuyeQUytO7+7N4QKrDh+drA==";
const LEAFLET_JS_URL: &str = "https://cdnjs.cloudflare.com/ajax/libs/leaflet/1.4.0/leaflet.js";
const LEAFLET_JS_SHA512 : &str="sha512-QVftwZFqvtRNi0ZyCtsznlKSWOStnDORoefr1enyq5mVL4tmKB3S/EnC3rRJcxCPavG10IcrVGSmPh6Qw5lwrg==";
const MAP_JS_URL: &str = "/map.js";

mod forms;
mod login;
mod page;
mod request;

pub use forms::*;
pub use login::*;
use page::*;
pub use request::*;

fn leaflet_css_link() -> Markup {
    html! {
            link
                rel="stylesheet"
                href=(LEAFLET_CSS_URL)
                integrity=(LEAFLET_CSS_SHA512)
                crossorigin="anonymous";
    }
}

/// The map with a marker for each restaurant.
///
/// `restaurants_json` must already be escaped for embedding into a script.
fn map(restaurants_json: &str) -> Markup {
    html! {
      div id="map" {}
      script {
        (PreEscaped(format!("window.RESTODB_RESTAURANTS={restaurants_json};")))
      }
      script
        src=(LEAFLET_JS_URL)
        integrity=(LEAFLET_JS_SHA512)
        crossorigin="anonymous" {}
      script src=(MAP_JS_URL){}
    }
}

pub fn index(user: Option<&User>, restaurants_json: &str, messages: &[RejectionMessage]) -> Markup {
    page(
        "RestoDB",
        user,
        None,
        Some(leaflet_css_link()),
        html! {
            main {
                h1 { "RestoDB" }
                @if !messages.is_empty() {
                    (rejection_messages(messages))
                }
                (map(restaurants_json))
            }
        },
    )
}

fn rejection_messages(messages: &[RejectionMessage]) -> Markup {
    html! {
        div class="messages" {
            h3 { "Your requests have been rejected" }
            ul {
                @for m in messages {
                    li {
                        strong { (m.for_what) } ": " (m.message)
                    }
                }
            }
            form action="/read_messages/" method="POST" {
                input type="submit" value="Mark all as read";
            }
        }
    }
}

pub fn restaurant_list(
    user: Option<&User>,
    restaurants: &[usecases::RestaurantWithRating],
    restaurants_json: &str,
    is_admin: bool,
) -> Markup {
    page(
        "Restaurants",
        user,
        None,
        Some(leaflet_css_link()),
        html! {
            main {
                h2 { "Restaurants" }
                @if is_admin {
                    p { a href="/restaurant_request/new" { "Pending new restaurants" } }
                }
                @if restaurants.is_empty() {
                    p { "No restaurants have been added yet." }
                } @else {
                    table class="restaurants" {
                        thead {
                            tr {
                                th { "Name"    }
                                th { "Address" }
                                th { "Rating"  }
                            }
                        }
                        tbody {
                            @for r in restaurants {
                                tr {
                                    td {
                                        a href=(format!("/restaurants/{}", r.restaurant.id)) {
                                            (r.restaurant.name)
                                        }
                                    }
                                    td { (r.restaurant.address) }
                                    td { (r.avg_rating) }
                                }
                            }
                        }
                    }
                }
                (map(restaurants_json))
            }
        },
    )
}

fn ratings_table(ratings: &RestaurantRatings) -> Markup {
    html! {
        table class="ratings" {
            tr {
                th { "Overall" }
                td { (ratings.overall) }
            }
            @for category in ReportCategory::iter() {
                tr {
                    th { (category.label()) }
                    td { (ratings.by_category(category)) }
                }
            }
        }
    }
}

pub fn restaurant(user: Option<&User>, details: &usecases::RestaurantDetails, is_admin: bool) -> Markup {
    let r = &details.restaurant;
    page(
        &r.name,
        user,
        None,
        None,
        html! {
            main class="restaurant" {
                h2 { (r.name) }
                p class="address" { (r.address) }
                p class="contact" { (r.contact_info) }
                @if !r.menu_text.is_empty() {
                    h3 { "Menu" }
                    pre class="menu" { (r.menu_text) }
                }
                h3 { "Ratings" }
                (ratings_table(&details.ratings))
                h3 { "Reviews" }
                @if details.reviews.is_empty() {
                    p { "No reviews yet." }
                } @else {
                    ul class="reviews" {
                        @for review in &details.reviews {
                            li {
                                a href=(format!("/reviews/{}", review.id)) {
                                    (review.rating) " / 5"
                                }
                                " " (review.review_text)
                            }
                        }
                    }
                }
                p {
                    a href=(format!("/restaurant_request/{}/", r.id)) { "Suggest a change" }
                }
                @if is_admin {
                    p {
                        a href=(format!("/restaurants/{}/update", r.id)) { "Pending changes" }
                    }
                }
            }
        },
    )
}

pub fn review(user: Option<&User>, review: &Review, restaurant: &Restaurant, author: &User) -> Markup {
    page(
        &format!("Review of {}", restaurant.name),
        user,
        None,
        None,
        html! {
            main class="review" {
                h2 {
                    "Review of "
                    a href=(format!("/restaurants/{}", restaurant.id)) { (restaurant.name) }
                }
                p class="rating" { (review.rating) " / 5" }
                p class="text" { (review.review_text) }
                p class="meta" {
                    @if author.name.is_empty() {
                        "Anonymous"
                    } @else {
                        (author.name)
                    }
                    ", " (review.created_at)
                }
            }
        },
    )
}
