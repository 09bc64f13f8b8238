use super::*;

#[get("/restaurants")]
pub fn get_restaurants(db: sqlite::Connections) -> Result<Vec<restodb_boundary::RestaurantListItem>> {
    let restaurants = usecases::load_restaurants(&db.shared()?)?;
    Ok(Json(json::restaurant_list(restaurants)))
}

#[get("/restaurants/<id>")]
pub fn get_restaurant(db: sqlite::Connections, id: i64) -> Result<restodb_boundary::RestaurantDetails> {
    let details = usecases::load_restaurant_details(&db.shared()?, Id::new(id))?;
    Ok(Json(json::restaurant_details(details)))
}
