use maud::Markup;
use rocket::{
    self,
    form::Form,
    get, post,
    response::{
        content::{RawCss, RawJavaScript},
        Redirect,
    },
    routes, uri, Route,
};

use crate::{
    adapters::json,
    core::{prelude::*, usecases},
    web::{api::ApiError, guards::*, sqlite},
};
use restodb_application::prelude as flows;

mod forms;
mod login;
mod view;


use self::forms::*;

const MAP_JS: &str = include_str!("map.js");
const MAIN_CSS: &str = include_str!("main.css");

const SUCCESS: &str = "True";

type Result<T> = std::result::Result<T, ApiError>;

/// Either a redirect after a successful submission
/// or the form again with validation errors.
type FormResult = Result<std::result::Result<Redirect, Markup>>;

fn is_success(success: Option<&str>) -> bool {
    success == Some(SUCCESS)
}

/// Re-renders the form for validation errors and
/// propagates all other errors.
fn form_errors(err: AppError) -> Result<Vec<FieldError>> {
    match err.as_parameter_error() {
        Some(param_err) if param_err.is_validation_error() => {
            let error = FieldError::from_parameter_error(param_err)
                .unwrap_or_else(|| FieldError::new("", param_err.to_string()));
            Ok(vec![error])
        }
        _ => Err(err.into()),
    }
}

fn moderation_redirect(restaurant_id: Option<Id>) -> Redirect {
    match restaurant_id {
        Some(id) => Redirect::found(uri!(get_restaurant_update(id.to_i64()))),
        None => Redirect::found(uri!(get_new_restaurant_requests)),
    }
}

#[get("/")]
pub fn get_index(db: sqlite::Connections, auth: Auth) -> Result<Markup> {
    let db = db.shared()?;
    let user = auth.user(&db)?;
    let restaurants = json::restaurant_list(usecases::load_restaurants(&db)?);
    let restaurants_json = json::restaurant_list_script(&restaurants)?;
    let messages = match &user {
        Some(user) => usecases::load_unread_messages(&db, user.id)?,
        None => vec![],
    };
    Ok(view::index(user.as_ref(), &restaurants_json, &messages))
}

#[get("/restaurants")]
pub fn get_restaurants(db: sqlite::Connections, auth: Auth) -> Result<Markup> {
    let db = db.shared()?;
    let user = auth.user(&db)?;
    let restaurants = usecases::load_restaurants(&db)?;
    let is_admin = match &user {
        Some(user) => usecases::is_global_admin(&db, user)?,
        None => false,
    };
    let items = json::restaurant_list(restaurants.clone());
    let restaurants_json = json::restaurant_list_script(&items)?;
    Ok(view::restaurant_list(
        user.as_ref(),
        &restaurants,
        &restaurants_json,
        is_admin,
    ))
}

#[get("/restaurants/<id>")]
pub fn get_restaurant(db: sqlite::Connections, auth: Auth, id: i64) -> Result<Markup> {
    let db = db.shared()?;
    let user = auth.user(&db)?;
    let details = usecases::load_restaurant_details(&db, Id::new(id))?;
    let is_admin = match &user {
        Some(user) => usecases::is_restaurant_admin(&db, user, details.restaurant.id)?,
        None => false,
    };
    Ok(view::restaurant(user.as_ref(), &details, is_admin))
}

#[get("/restaurants/<id>/update")]
pub fn get_restaurant_update(db: sqlite::Connections, auth: Auth, id: i64) -> Result<Markup> {
    let db = db.shared()?;
    let user = auth.user(&db)?;
    let restaurant = db.get_restaurant(Id::new(id))?;
    let requests = usecases::load_edit_requests(&db, restaurant.id)?;
    let is_admin = match &user {
        Some(user) => usecases::is_restaurant_admin(&db, user, restaurant.id)?,
        None => false,
    };
    Ok(view::restaurant_update(
        user.as_ref(),
        &restaurant,
        &requests,
        is_admin,
    ))
}

#[get("/restaurant_request/new")]
pub fn get_new_restaurant_requests(db: sqlite::Connections, auth: Auth) -> Result<Markup> {
    let db = db.shared()?;
    let user = auth.user(&db)?;
    let requests = usecases::load_new_restaurant_requests(&db)?;
    let is_admin = match &user {
        Some(user) => usecases::is_global_admin(&db, user)?,
        None => false,
    };
    Ok(view::new_restaurant_requests(
        user.as_ref(),
        &requests,
        is_admin,
    ))
}

#[post("/restaurant_request/<id>/approve")]
pub fn post_approve_restaurant_request(
    db: sqlite::Connections,
    account: Account,
    id: i64,
) -> Result<Redirect> {
    let approval = flows::approve_restaurant_request(&db, account.email(), Id::new(id))?;
    let restaurant_id = (!approval.created).then_some(approval.restaurant_id);
    Ok(moderation_redirect(restaurant_id))
}

#[post("/restaurant_request/<id>/reject", data = "<form>")]
pub fn post_reject_restaurant_request(
    db: sqlite::Connections,
    account: Account,
    id: i64,
    form: Form<RejectionForm>,
) -> Result<Redirect> {
    let RejectionForm { rejection_message } = form.into_inner();
    let rejection = flows::reject_restaurant_request(
        &db,
        account.email(),
        Id::new(id),
        rejection_message.as_deref(),
    )?;
    Ok(moderation_redirect(rejection.restaurant_id))
}

fn render_request_form<R: RestaurantRepo>(
    db: &R,
    user: Option<&User>,
    form: &RequestForm,
    errors: &[FieldError],
    success: bool,
) -> Result<Markup> {
    let restaurants = db.all_restaurants()?;
    Ok(view::request_form(
        user,
        &restaurants,
        form,
        errors,
        success,
    ))
}

#[get("/restaurant_request?<success>")]
pub fn get_restaurant_request_form(
    db: sqlite::Connections,
    auth: Auth,
    success: Option<&str>,
) -> Result<Markup> {
    let db = db.shared()?;
    let user = auth.user(&db)?;
    render_request_form(
        &db,
        user.as_ref(),
        &RequestForm::default(),
        &[],
        is_success(success),
    )
}

#[get("/restaurant_request/<restaurant_id>?<success>")]
pub fn get_restaurant_request_form_filled(
    db: sqlite::Connections,
    auth: Auth,
    restaurant_id: i64,
    success: Option<&str>,
) -> Result<Markup> {
    let db = db.shared()?;
    let user = auth.user(&db)?;
    let restaurant = db.get_restaurant(Id::new(restaurant_id))?;
    let form = usecases::RequestSubmission::from_restaurant(&restaurant).into();
    render_request_form(&db, user.as_ref(), &form, &[], is_success(success))
}

fn submit_restaurant_request(
    connections: &sqlite::Connections,
    auth: &Auth,
    form: RequestForm,
) -> FormResult {
    let user = auth.user(&connections.shared()?)?;
    let result = match form.to_submission(user.as_ref().map(|u| u.id)) {
        Ok(submission) => {
            flows::create_restaurant_request(connections, submission).map_err(form_errors)
        }
        Err(errors) => Err(Ok(errors)),
    };
    let errors = match result {
        Ok(_) => {
            return Ok(Ok(Redirect::found(uri!(get_restaurant_request_form(
                Some(SUCCESS)
            )))));
        }
        Err(errors) => errors?,
    };
    let db = connections.shared()?;
    Ok(Err(render_request_form(
        &db,
        user.as_ref(),
        &form,
        &errors,
        false,
    )?))
}

#[post("/restaurant_request", data = "<form>")]
pub fn post_restaurant_request(
    db: sqlite::Connections,
    auth: Auth,
    form: Form<RequestForm>,
) -> FormResult {
    submit_restaurant_request(&db, &auth, form.into_inner())
}

#[post("/restaurant_request/<restaurant_id>", data = "<form>")]
pub fn post_restaurant_request_filled(
    db: sqlite::Connections,
    auth: Auth,
    restaurant_id: i64,
    form: Form<RequestForm>,
) -> FormResult {
    // The selected restaurant wins over the pre-filled one
    let form = form.into_inner();
    if form.corresponding_restaurant != Some(restaurant_id) {
        debug!(
            "Request form of restaurant {restaurant_id} submitted for {:?}",
            form.corresponding_restaurant
        );
    }
    submit_restaurant_request(&db, &auth, form)
}

#[get("/reviews/<id>")]
pub fn get_review(db: sqlite::Connections, auth: Auth, id: i64) -> Result<Markup> {
    let db = db.shared()?;
    let user = auth.user(&db)?;
    let review = db.get_review(Id::new(id))?;
    let restaurant = db.get_restaurant(review.restaurant_id)?;
    let author = db.get_user(review.user_id)?;
    Ok(view::review(user.as_ref(), &review, &restaurant, &author))
}

#[get("/review?<success>")]
pub fn get_review_form(db: sqlite::Connections, auth: Auth, success: Option<&str>) -> Result<Markup> {
    let db = db.shared()?;
    let user = auth.user(&db)?;
    let restaurants = db.all_restaurants()?;
    Ok(view::review_form(
        user.as_ref(),
        &restaurants,
        &ReviewForm::default(),
        &[],
        is_success(success),
    ))
}

#[post("/review", data = "<form>")]
pub fn post_review(
    connections: sqlite::Connections,
    account: Account,
    form: Form<ReviewForm>,
) -> FormResult {
    let form = form.into_inner();
    let user = usecases::authorize_user_by_email(&connections.shared()?, account.email())?;
    let result = match form.restaurant {
        Some(restaurant_id) => flows::create_review(
            &connections,
            usecases::ReviewSubmission {
                user_id: user.id,
                restaurant_id: Id::new(restaurant_id),
                rating: form.rating.unwrap_or_default(),
                review_text: form.review_text.clone().unwrap_or_default(),
            },
        )
        .map_err(form_errors),
        None => Err(Ok(vec![FieldError::new(
            "restaurant",
            "Please select a restaurant",
        )])),
    };
    let errors = match result {
        Ok(_) => {
            return Ok(Ok(Redirect::found(uri!(get_review_form(Some(SUCCESS))))));
        }
        Err(errors) => errors?,
    };
    let restaurants = connections.shared()?.all_restaurants()?;
    Ok(Err(view::review_form(
        Some(&user),
        &restaurants,
        &form,
        &errors,
        false,
    )))
}

#[get("/reports/create?<success>")]
pub fn get_report_form(db: sqlite::Connections, auth: Auth, success: Option<&str>) -> Result<Markup> {
    let db = db.shared()?;
    let user = auth.user(&db)?;
    let restaurants = db.all_restaurants()?;
    Ok(view::report_form(
        user.as_ref(),
        &restaurants,
        &ReportForm::default(),
        &[],
        is_success(success),
    ))
}

#[post("/reports/create", data = "<form>")]
pub fn post_report(
    connections: sqlite::Connections,
    account: Account,
    form: Form<ReportForm>,
) -> FormResult {
    let form = form.into_inner();
    let user = usecases::authorize_user_by_email(&connections.shared()?, account.email())?;
    let result = match form.restaurant {
        Some(restaurant_id) => flows::create_report(
            &connections,
            usecases::ReportSubmission {
                user_id: user.id,
                restaurant_id: Id::new(restaurant_id),
                category: form
                    .report_type
                    .clone()
                    .filter(|t| !t.is_empty())
                    .unwrap_or_else(|| ReportCategory::default().to_string()),
                rating: form.rating.unwrap_or_default(),
            },
        )
        .map_err(form_errors),
        None => Err(Ok(vec![FieldError::new(
            "restaurant",
            "Please select a restaurant",
        )])),
    };
    let errors = match result {
        Ok(_) => {
            return Ok(Ok(Redirect::found(uri!(get_report_form(Some(SUCCESS))))));
        }
        Err(errors) => errors?,
    };
    let restaurants = connections.shared()?.all_restaurants()?;
    Ok(Err(view::report_form(
        Some(&user),
        &restaurants,
        &form,
        &errors,
        false,
    )))
}

#[post("/read_messages")]
pub fn post_read_messages(db: sqlite::Connections, account: Account) -> Result<Redirect> {
    flows::mark_messages_read(&db, account.email())?;
    Ok(Redirect::found(uri!(get_index)))
}

#[get("/map.js")]
pub fn get_map_js() -> RawJavaScript<&'static str> {
    RawJavaScript(MAP_JS)
}

#[get("/main.css")]
pub fn get_main_css() -> RawCss<&'static str> {
    RawCss(MAIN_CSS)
}

pub fn routes() -> Vec<Route> {
    routes![
        get_index,
        get_restaurants,
        get_restaurant,
        get_restaurant_update,
        get_new_restaurant_requests,
        post_approve_restaurant_request,
        post_reject_restaurant_request,
        get_restaurant_request_form,
        get_restaurant_request_form_filled,
        post_restaurant_request,
        post_restaurant_request_filled,
        get_review,
        get_review_form,
        post_review,
        get_report_form,
        post_report,
        post_read_messages,
        get_map_js,
        get_main_css,
        login::get_login,
        login::post_login,
        login::post_logout,
    ]
}
