use maud::{html, Markup};
use rocket::request::FlashMessage;

use super::page;

pub fn login(flash: Option<FlashMessage>) -> Markup {
    page(
        "Login",
        None,
        flash,
        None,
        html! {
            main class="login" {
                h2 { "Login" }
                form action="/login" method="POST" {
                    fieldset {
                        label {
                            "eMail:"
                            br;
                            input type="email" name="email" required? placeholder="eMail address";
                        }
                        br;
                        label {
                            "Password:"
                            br;
                            input type="password" name="password" required? placeholder="Password";
                        }
                        br;
                        input type="submit" value="login";
                    }
                }
            }
        },
    )
}
