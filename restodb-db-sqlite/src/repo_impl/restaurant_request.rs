use super::*;

macro_rules! impl_restaurant_request_repo {
    ($db:ident) => {
        impl<'a> RestaurantRequestRepo for $db<'a> {
            fn create_restaurant_request(&self, request: &NewRestaurantRequest) -> Result<Id> {
                create_restaurant_request(&mut self.conn.borrow_mut(), request)
            }
            fn update_restaurant_request(&self, request: &RestaurantRequest) -> Result<()> {
                update_restaurant_request(&mut self.conn.borrow_mut(), request)
            }
            fn delete_restaurant_request(&self, id: Id) -> Result<()> {
                delete_restaurant_request(&mut self.conn.borrow_mut(), id)
            }

            fn get_restaurant_request(&self, id: Id) -> Result<RestaurantRequest> {
                get_restaurant_request(&mut self.conn.borrow_mut(), id)
            }
            fn list_restaurant_requests(
                &self,
                filter: RestaurantRequestFilter,
            ) -> Result<Vec<RestaurantRequest>> {
                list_restaurant_requests(&mut self.conn.borrow_mut(), filter)
            }
        }
    };
}

impl_restaurant_request_repo!(DbReadWrite);
impl_restaurant_request_repo!(DbConnection);

impl<'a> RestaurantRequestRepo for DbReadOnly<'a> {
    fn create_restaurant_request(&self, _request: &NewRestaurantRequest) -> Result<Id> {
        Err(read_only_violation("create_restaurant_request"))
    }
    fn update_restaurant_request(&self, _request: &RestaurantRequest) -> Result<()> {
        Err(read_only_violation("update_restaurant_request"))
    }
    fn delete_restaurant_request(&self, _id: Id) -> Result<()> {
        Err(read_only_violation("delete_restaurant_request"))
    }

    fn get_restaurant_request(&self, id: Id) -> Result<RestaurantRequest> {
        get_restaurant_request(&mut self.conn.borrow_mut(), id)
    }
    fn list_restaurant_requests(
        &self,
        filter: RestaurantRequestFilter,
    ) -> Result<Vec<RestaurantRequest>> {
        list_restaurant_requests(&mut self.conn.borrow_mut(), filter)
    }
}

fn create_restaurant_request(conn: &mut SqliteConnection, r: &NewRestaurantRequest) -> Result<Id> {
    diesel::insert_into(schema::restaurant_requests::table)
        .values(&models::NewRestaurantRequest::from(r))
        .execute(conn)
        .map_err(from_diesel_err)?;
    last_insert_id(conn)
}

fn update_restaurant_request(conn: &mut SqliteConnection, r: &RestaurantRequest) -> Result<()> {
    use schema::restaurant_requests::dsl;
    let count = diesel::update(dsl::restaurant_requests.filter(dsl::id.eq(r.id.to_i64())))
        .set(&models::NewRestaurantRequest::from(r))
        .execute(conn)
        .map_err(from_diesel_err)?;
    expect_single_row(count)
}

fn delete_restaurant_request(conn: &mut SqliteConnection, id: Id) -> Result<()> {
    use schema::restaurant_requests::dsl;
    let count = diesel::delete(dsl::restaurant_requests.filter(dsl::id.eq(id.to_i64())))
        .execute(conn)
        .map_err(from_diesel_err)?;
    expect_single_row(count)
}

fn get_restaurant_request(conn: &mut SqliteConnection, id: Id) -> Result<RestaurantRequest> {
    use schema::restaurant_requests::dsl;
    Ok(dsl::restaurant_requests
        .filter(dsl::id.eq(id.to_i64()))
        .first::<models::RestaurantRequestEntity>(conn)
        .map_err(from_diesel_err)?
        .into())
}

fn list_restaurant_requests(
    conn: &mut SqliteConnection,
    filter: RestaurantRequestFilter,
) -> Result<Vec<RestaurantRequest>> {
    use schema::restaurant_requests::dsl;
    let mut query = dsl::restaurant_requests.order_by(dsl::id).into_boxed();
    match filter {
        RestaurantRequestFilter::All => {}
        RestaurantRequestFilter::NewRestaurants => {
            query = query.filter(dsl::corresponding_restaurant.is_null());
        }
        RestaurantRequestFilter::ForRestaurant(id) => {
            query = query.filter(dsl::corresponding_restaurant.eq(id.to_i64()));
        }
    }
    Ok(query
        .load::<models::RestaurantRequestEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(Into::into)
        .collect())
}
