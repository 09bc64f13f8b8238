use maud::Markup;
use rocket::{
    self,
    form::Form,
    get,
    http::{Cookie, CookieJar, SameSite},
    post,
    request::FlashMessage,
    response::{Flash, Redirect},
    uri, FromForm,
};

use super::{super::guards::*, view};

use crate::{
    core::{prelude::*, usecases},
    web::sqlite::Connections,
};
use restodb_application::prelude as flows;
use restodb_core::usecases::Error as ParameterError;

const WRONG_CREDENTIALS: &str = "Invalid email or password.";

#[derive(FromForm)]
pub struct SignIn<'r> {
    email: &'r str,
    password: &'r str,
}

fn back_to_login(msg: &str) -> Flash<Redirect> {
    Flash::error(Redirect::found(uri!(get_login)), msg)
}

fn sign_in_failure(err: &AppError) -> &'static str {
    match err.as_parameter_error() {
        Some(ParameterError::Credentials) => WRONG_CREDENTIALS,
        Some(ParameterError::UserInactive) => "Your account has been deactivated.",
        _ => {
            error!("Unable to sign in: {err}");
            "We are so sorry! An internal server error has occurred. Please try again later."
        }
    }
}

/// The session only remembers the email of the signed in user.
fn session_cookie(user: User) -> Cookie<'static> {
    Cookie::build((COOKIE_EMAIL_KEY, user.email.into_string()))
        .http_only(true)
        .same_site(SameSite::Lax)
        .build()
}

#[allow(clippy::result_large_err)]
#[get("/login")]
pub fn get_login(
    account: Option<Account>,
    flash: Option<FlashMessage>,
) -> std::result::Result<Markup, Redirect> {
    match account {
        Some(_) => Err(Redirect::found(uri!(super::get_index))),
        None => Ok(view::login(flash)),
    }
}

#[allow(clippy::result_large_err)]
#[post("/login", data = "<sign_in>")]
pub fn post_login(
    db: Connections,
    sign_in: Form<SignIn>,
    cookies: &CookieJar<'_>,
) -> std::result::Result<Redirect, Flash<Redirect>> {
    let email = sign_in
        .email
        .trim()
        .parse::<EmailAddress>()
        .map_err(|_| back_to_login(WRONG_CREDENTIALS))?;
    let credentials = usecases::Credentials {
        email: &email,
        password: sign_in.password,
    };
    let user = flows::login_with_email(&db, &credentials)
        .map_err(|err| back_to_login(sign_in_failure(&err)))?;
    debug!("User {} signed in", user.id);
    cookies.add_private(session_cookie(user));
    Ok(Redirect::found(uri!(super::get_index)))
}

#[post("/logout")]
pub fn post_logout(cookies: &CookieJar<'_>) -> Flash<Redirect> {
    cookies.remove_private(COOKIE_EMAIL_KEY);
    Flash::success(
        Redirect::found(uri!(super::get_index)),
        "You have successfully logged out.",
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::web::tests::prelude::*;

    fn setup() -> (Client, crate::web::sqlite::Connections) {
        rocket_test_setup(vec![("/", super::super::routes())])
    }

    fn sign_in<'c>(client: &'c Client, body: &str) -> LocalResponse<'c> {
        client
            .post("/login")
            .header(ContentType::Form)
            .body(body)
            .dispatch()
    }

    fn login_page(client: &Client) -> String {
        client.get("/login").dispatch().into_string().unwrap()
    }

    #[test]
    fn signed_in_user_sees_email_in_header() {
        let (client, pool) = setup();
        register_user(&pool, "chef@resto.db", "s3cret pw", false);
        let res = sign_in(&client, "email=chef%40resto.db&password=s3cret+pw");
        assert_eq!(res.status(), Status::Found);
        assert_eq!(res.headers().get_one("Location"), Some("/"));

        let body = client.get("/").dispatch().into_string().unwrap();
        assert!(body.contains(r#"<span class="email">chef@resto.db</span>"#));
        assert!(body.contains(r#"action="/logout""#));
        let user = pool
            .shared()
            .unwrap()
            .get_user_by_email(&"chef@resto.db".parse().unwrap())
            .unwrap();
        assert!(user.last_login.is_some());
    }

    #[test]
    fn wrong_password_is_reported_on_login_page() {
        let (client, pool) = setup();
        register_user(&pool, "chef@resto.db", "s3cret", false);
        let res = sign_in(&client, "email=chef%40resto.db&password=guess");
        assert_eq!(res.headers().get_one("Location"), Some("/login"));
        let body = login_page(&client);
        assert!(body.contains(WRONG_CREDENTIALS));
        assert!(body.contains(r#"href="/login""#));
    }

    #[test]
    fn malformed_email_is_treated_as_wrong_credentials() {
        let (client, _) = setup();
        let res = sign_in(&client, "email=not-an-email&password=x");
        assert_eq!(res.headers().get_one("Location"), Some("/login"));
        assert!(login_page(&client).contains(WRONG_CREDENTIALS));
    }

    #[test]
    fn deactivated_user_cannot_sign_in() {
        let (client, pool) = setup();
        register_user(&pool, "gone@resto.db", "s3cret", false);
        {
            let db = pool.exclusive().unwrap();
            let mut user = db
                .get_user_by_email(&"gone@resto.db".parse().unwrap())
                .unwrap();
            user.is_active = false;
            db.update_user(&user).unwrap();
        }
        let res = sign_in(&client, "email=gone%40resto.db&password=s3cret");
        assert_eq!(res.headers().get_one("Location"), Some("/login"));
        assert!(login_page(&client).contains("Your account has been deactivated."));
    }

    #[test]
    fn logout_ends_the_session() {
        let (client, pool) = setup();
        register_user(&pool, "chef@resto.db", "s3cret", false);
        login(&client, "chef@resto.db", "s3cret");
        assert_eq!(
            client.post("/read_messages/").dispatch().status(),
            Status::Found
        );

        let res = client.post("/logout").dispatch();
        assert_eq!(res.headers().get_one("Location"), Some("/"));
        assert_eq!(
            client.post("/read_messages/").dispatch().status(),
            Status::Unauthorized
        );
        let body = client.get("/").dispatch().into_string().unwrap();
        assert!(!body.contains("chef@resto.db"));
    }
}
