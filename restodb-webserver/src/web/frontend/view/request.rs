use maud::{html, Markup};

use super::page;
use crate::core::prelude::*;

fn moderation_forms(request: &RestaurantRequest) -> Markup {
    html! {
        div class="moderation" {
            form action=(format!("/restaurant_request/{}/approve/", request.id)) method="POST" {
                input type="submit" value="Approve";
            }
            form action=(format!("/restaurant_request/{}/reject/", request.id)) method="POST" {
                textarea name="rejection_message" rows=(2) cols=(40) placeholder="Reason for the rejection" {}
                input type="submit" value="Reject";
            }
        }
    }
}

fn proposed_value(current: Option<&str>, proposed: &str) -> Markup {
    let changed = current.is_some_and(|current| current != proposed);
    html! {
        td class=[changed.then_some("changed")] { (proposed) }
    }
}

fn request_rows(current: Option<&Restaurant>, request: &RestaurantRequest) -> Markup {
    let pos = |p: MapPoint| format!("{}, {}", p.lat(), p.lon());
    let rows = [
        ("Name", current.map(|r| r.name.clone()), request.name.clone()),
        ("Address", current.map(|r| r.address.clone()), request.address.clone()),
        ("Position", current.map(|r| pos(r.pos)), pos(request.pos)),
        ("Contact info", current.map(|r| r.contact_info.clone()), request.contact_info.clone()),
        ("Menu", current.map(|r| r.menu_text.clone()), request.menu_text.clone()),
    ];
    html! {
        @for (label, current, proposed) in rows {
            tr {
                th { (label) }
                @if let Some(current) = &current {
                    td { (current) }
                }
                (proposed_value(current.as_deref(), &proposed))
            }
        }
    }
}

pub fn restaurant_update(
    user: Option<&User>,
    restaurant: &Restaurant,
    requests: &[RestaurantRequest],
    is_admin: bool,
) -> Markup {
    page(
        &format!("Pending changes of {}", restaurant.name),
        user,
        None,
        None,
        html! {
            main class="requests" {
                h2 {
                    "Pending changes of "
                    a href=(format!("/restaurants/{}", restaurant.id)) { (restaurant.name) }
                }
                @if !is_admin {
                    p { "Only admins of this restaurant may review the proposed changes." }
                } @else if requests.is_empty() {
                    p { "There are no pending changes." }
                } @else {
                    @for request in requests {
                        div class="request" {
                            table {
                                thead {
                                    tr {
                                        th {}
                                        th { "Current" }
                                        th { "Proposed" }
                                    }
                                }
                                tbody {
                                    (request_rows(Some(restaurant), request))
                                }
                            }
                            (moderation_forms(request))
                        }
                    }
                }
            }
        },
    )
}

pub fn new_restaurant_requests(
    user: Option<&User>,
    requests: &[RestaurantRequest],
    is_admin: bool,
) -> Markup {
    page(
        "New restaurants",
        user,
        None,
        None,
        html! {
            main class="requests" {
                h2 { "Proposed new restaurants" }
                @if !is_admin {
                    p { "Only admins may review new restaurants." }
                } @else if requests.is_empty() {
                    p { "There are no pending proposals." }
                } @else {
                    @for request in requests {
                        div class="request" {
                            table {
                                tbody {
                                    (request_rows(None, request))
                                }
                            }
                            (moderation_forms(request))
                        }
                    }
                }
            }
        },
    )
}
