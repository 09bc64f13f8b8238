use maud::{html, Markup, DOCTYPE};
use rocket::request::FlashMessage;

use crate::core::prelude::*;

const MAIN_CSS_URL: &str = "/main.css";

fn header(user: Option<&User>) -> Markup {
    html! {
        header {
            nav {
                a href="/" { "Map" }
                a href="/restaurants" { "Restaurants" }
                a href="/restaurant_request/" { "Propose a restaurant" }
                a href="/review" { "Write a review" }
                a href="/reports/create/" { "Report" }
            }
            div class="account" {
                @if let Some(user) = user {
                    span class="email" { (user.email) }
                    form class="logout" action="/logout" method="POST" {
                        input type="submit" value="logout";
                    }
                } @else {
                    a href="/login" { "login" }
                }
            }
        }
    }
}

fn flash_msg(flash: Option<FlashMessage>) -> Markup {
    html! {
        @if let Some(msg) = flash {
            div class=(format!("flash {}", msg.kind())) {
                (msg.message())
            }
        }
    }
}

pub fn page(
    title: &str,
    user: Option<&User>,
    flash: Option<FlashMessage>,
    h: Option<Markup>,
    content: Markup,
) -> Markup {
    html! {
        (DOCTYPE)
        html {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                link rel="stylesheet" href=(MAIN_CSS_URL);
                @if let Some(h) = h {
                    (h)
                }
            }
            body {
                (header(user))
                (flash_msg(flash))
                (content)
            }
        }
    }
}
