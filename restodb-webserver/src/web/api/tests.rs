use super::*;

pub mod prelude {
    use crate::web::{self, api, sqlite};

    pub use crate::web::tests::prelude::{LocalResponse as Response, *};

    pub fn setup() -> (Client, sqlite::Connections) {
        web::tests::rocket_test_setup(vec![("/", api::routes())])
    }

    pub fn test_json(r: &Response) {
        assert_eq!(
            r.headers().get("Content-Type").collect::<Vec<_>>()[0],
            "application/json"
        );
    }
}

use self::prelude::*;

fn review(db: &sqlite::Connections, user_id: Id, restaurant_id: Id, rating: i64) {
    usecases::create_review(
        &db.exclusive().unwrap(),
        usecases::ReviewSubmission {
            user_id,
            restaurant_id,
            rating,
            review_text: "Nice".into(),
        },
    )
    .unwrap();
}

#[test]
fn list_restaurants_with_average_rating() {
    let (client, db) = setup();
    let user_id = register_user(&db, "foo@bar.com", "secret", false);
    let tacos = create_restaurant(&db, "Taco Stand");
    let noodles = create_restaurant(&db, "Noodle Bar");
    for rating in [5, 4, 4] {
        review(&db, user_id, tacos, rating);
    }

    let res = client.get("/restaurants").dispatch();
    assert_eq!(res.status(), Status::Ok);
    test_json(&res);
    let body = res.into_string().unwrap();
    let items: Vec<restodb_boundary::RestaurantListItem> = serde_json::from_str(&body).unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].pk, noodles.to_i64());
    assert_eq!(items[0].id, noodles.to_i64());
    assert_eq!(
        items[0].avg_rating,
        restodb_boundary::AvgRating::NotAvailable("N/A".into())
    );
    assert_eq!(items[1].name, "Taco Stand");
    assert_eq!(items[1].avg_rating, restodb_boundary::AvgRating::Value(4.33));
    assert!(body.contains(r#""avg_rating":"N/A""#));
    assert!(body.contains(r#""avg_rating":4.33"#));
}

#[test]
fn get_restaurant_details() {
    let (client, db) = setup();
    let user_id = register_user(&db, "foo@bar.com", "secret", false);
    let id = create_restaurant(&db, "Taco Stand");
    review(&db, user_id, id, 3);
    usecases::create_report(
        &db.exclusive().unwrap(),
        usecases::ReportSubmission {
            user_id,
            restaurant_id: id,
            category: "FR".into(),
            rating: 5,
        },
    )
    .unwrap();

    let res = client.get(format!("/restaurants/{id}")).dispatch();
    assert_eq!(res.status(), Status::Ok);
    test_json(&res);
    let details: restodb_boundary::RestaurantDetails =
        serde_json::from_str(&res.into_string().unwrap()).unwrap();
    assert_eq!(details.id, id.to_i64());
    assert_eq!(details.menu_text, "Tacos");
    assert_eq!(details.avg_rating, restodb_boundary::AvgRating::Value(3.0));
    assert_eq!(
        details.ratings.friendliness,
        restodb_boundary::AvgRating::Value(5.0)
    );
    assert_eq!(
        details.ratings.cleanliness,
        restodb_boundary::AvgRating::NotAvailable("N/A".into())
    );
    assert_eq!(details.reviews.len(), 1);
}

#[test]
fn get_unknown_restaurant() {
    let (client, _) = setup();
    let res = client.get("/restaurants/99").dispatch();
    assert_eq!(res.status(), Status::NotFound);
    test_json(&res);
    let err: restodb_boundary::Error = serde_json::from_str(&res.into_string().unwrap()).unwrap();
    assert_eq!(err.http_status, 404);
}

#[test]
fn get_version() {
    let (client, _) = setup();
    let res = client.get("/server/version").dispatch();
    assert_eq!(res.status(), Status::Ok);
    assert_eq!(
        res.into_string().unwrap(),
        format!(r#"{{"version":"{DUMMY_VERSION}"}}"#)
    );
}
