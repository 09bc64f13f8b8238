use super::*;

macro_rules! impl_restaurant_repo {
    ($db:ident) => {
        impl<'a> RestaurantRepo for $db<'a> {
            fn create_restaurant(&self, restaurant: &NewRestaurant) -> Result<Id> {
                create_restaurant(&mut self.conn.borrow_mut(), restaurant)
            }
            fn update_restaurant(&self, restaurant: &Restaurant) -> Result<()> {
                update_restaurant(&mut self.conn.borrow_mut(), restaurant)
            }
            fn set_restaurant_admin_group(&self, id: Id, group_id: Option<Id>) -> Result<()> {
                set_restaurant_admin_group(&mut self.conn.borrow_mut(), id, group_id)
            }
            fn delete_restaurant(&self, id: Id) -> Result<()> {
                delete_restaurant(&mut self.conn.borrow_mut(), id)
            }

            fn get_restaurant(&self, id: Id) -> Result<Restaurant> {
                get_restaurant(&mut self.conn.borrow_mut(), id)
            }
            fn all_restaurants(&self) -> Result<Vec<Restaurant>> {
                all_restaurants(&mut self.conn.borrow_mut())
            }
            fn count_restaurants(&self) -> Result<usize> {
                count_restaurants(&mut self.conn.borrow_mut())
            }
        }
    };
}

impl_restaurant_repo!(DbReadWrite);
impl_restaurant_repo!(DbConnection);

impl<'a> RestaurantRepo for DbReadOnly<'a> {
    fn create_restaurant(&self, _restaurant: &NewRestaurant) -> Result<Id> {
        Err(read_only_violation("create_restaurant"))
    }
    fn update_restaurant(&self, _restaurant: &Restaurant) -> Result<()> {
        Err(read_only_violation("update_restaurant"))
    }
    fn set_restaurant_admin_group(&self, _id: Id, _group_id: Option<Id>) -> Result<()> {
        Err(read_only_violation("set_restaurant_admin_group"))
    }
    fn delete_restaurant(&self, _id: Id) -> Result<()> {
        Err(read_only_violation("delete_restaurant"))
    }

    fn get_restaurant(&self, id: Id) -> Result<Restaurant> {
        get_restaurant(&mut self.conn.borrow_mut(), id)
    }
    fn all_restaurants(&self) -> Result<Vec<Restaurant>> {
        all_restaurants(&mut self.conn.borrow_mut())
    }
    fn count_restaurants(&self) -> Result<usize> {
        count_restaurants(&mut self.conn.borrow_mut())
    }
}

fn create_restaurant(conn: &mut SqliteConnection, r: &NewRestaurant) -> Result<Id> {
    diesel::insert_into(schema::restaurants::table)
        .values(&models::NewRestaurant::from(r))
        .execute(conn)
        .map_err(from_diesel_err)?;
    last_insert_id(conn)
}

fn update_restaurant(conn: &mut SqliteConnection, r: &Restaurant) -> Result<()> {
    use schema::restaurants::dsl;
    let count = diesel::update(dsl::restaurants.filter(dsl::id.eq(r.id.to_i64())))
        .set(&models::NewRestaurant::from(r))
        .execute(conn)
        .map_err(from_diesel_err)?;
    expect_single_row(count)
}

fn set_restaurant_admin_group(
    conn: &mut SqliteConnection,
    id: Id,
    group_id: Option<Id>,
) -> Result<()> {
    use schema::restaurants::dsl;
    let count = diesel::update(dsl::restaurants.filter(dsl::id.eq(id.to_i64())))
        .set(dsl::admin_group.eq(group_id.map(Id::to_i64)))
        .execute(conn)
        .map_err(from_diesel_err)?;
    expect_single_row(count)
}

fn delete_restaurant(conn: &mut SqliteConnection, id: Id) -> Result<()> {
    use schema::restaurants::dsl;
    let count = diesel::delete(dsl::restaurants.filter(dsl::id.eq(id.to_i64())))
        .execute(conn)
        .map_err(from_diesel_err)?;
    expect_single_row(count)
}

fn get_restaurant(conn: &mut SqliteConnection, id: Id) -> Result<Restaurant> {
    use schema::restaurants::dsl;
    Ok(dsl::restaurants
        .filter(dsl::id.eq(id.to_i64()))
        .first::<models::RestaurantEntity>(conn)
        .map_err(from_diesel_err)?
        .into())
}

fn all_restaurants(conn: &mut SqliteConnection) -> Result<Vec<Restaurant>> {
    use schema::restaurants::dsl;
    Ok(dsl::restaurants
        .order_by((dsl::name, dsl::id))
        .load::<models::RestaurantEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(Into::into)
        .collect())
}

fn count_restaurants(conn: &mut SqliteConnection) -> Result<usize> {
    use schema::restaurants::dsl;
    Ok(dsl::restaurants
        .select(diesel::dsl::count(dsl::id))
        .first::<i64>(conn)
        .map_err(from_diesel_err)? as usize)
}
