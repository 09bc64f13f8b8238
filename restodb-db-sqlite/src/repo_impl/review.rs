use super::*;

macro_rules! impl_review_repo {
    ($db:ident) => {
        impl<'a> ReviewRepo for $db<'a> {
            fn create_review(&self, review: &NewReview) -> Result<Id> {
                create_review(&mut self.conn.borrow_mut(), review)
            }
            fn delete_review(&self, id: Id) -> Result<()> {
                delete_review(&mut self.conn.borrow_mut(), id)
            }

            fn get_review(&self, id: Id) -> Result<Review> {
                get_review(&mut self.conn.borrow_mut(), id)
            }
            fn load_reviews_of_restaurant(&self, restaurant_id: Id) -> Result<Vec<Review>> {
                load_reviews_of_restaurant(&mut self.conn.borrow_mut(), restaurant_id)
            }
            fn load_reviews_of_user(&self, user_id: Id) -> Result<Vec<Review>> {
                load_reviews_of_user(&mut self.conn.borrow_mut(), user_id)
            }
        }
    };
}

impl_review_repo!(DbReadWrite);
impl_review_repo!(DbConnection);

impl<'a> ReviewRepo for DbReadOnly<'a> {
    fn create_review(&self, _review: &NewReview) -> Result<Id> {
        Err(read_only_violation("create_review"))
    }
    fn delete_review(&self, _id: Id) -> Result<()> {
        Err(read_only_violation("delete_review"))
    }

    fn get_review(&self, id: Id) -> Result<Review> {
        get_review(&mut self.conn.borrow_mut(), id)
    }
    fn load_reviews_of_restaurant(&self, restaurant_id: Id) -> Result<Vec<Review>> {
        load_reviews_of_restaurant(&mut self.conn.borrow_mut(), restaurant_id)
    }
    fn load_reviews_of_user(&self, user_id: Id) -> Result<Vec<Review>> {
        load_reviews_of_user(&mut self.conn.borrow_mut(), user_id)
    }
}

fn into_reviews(entities: Vec<models::ReviewEntity>) -> Result<Vec<Review>> {
    entities
        .into_iter()
        .map(|e| Review::try_from(e).map_err(repo::Error::Other))
        .collect()
}

fn create_review(conn: &mut SqliteConnection, r: &NewReview) -> Result<Id> {
    diesel::insert_into(schema::reviews::table)
        .values(&models::NewReview::from(r))
        .execute(conn)
        .map_err(from_diesel_err)?;
    last_insert_id(conn)
}

fn delete_review(conn: &mut SqliteConnection, id: Id) -> Result<()> {
    use schema::reviews::dsl;
    let count = diesel::delete(dsl::reviews.filter(dsl::id.eq(id.to_i64())))
        .execute(conn)
        .map_err(from_diesel_err)?;
    expect_single_row(count)
}

fn get_review(conn: &mut SqliteConnection, id: Id) -> Result<Review> {
    use schema::reviews::dsl;
    let entity = dsl::reviews
        .filter(dsl::id.eq(id.to_i64()))
        .first::<models::ReviewEntity>(conn)
        .map_err(from_diesel_err)?;
    Review::try_from(entity).map_err(repo::Error::Other)
}

fn load_reviews_of_restaurant(conn: &mut SqliteConnection, restaurant_id: Id) -> Result<Vec<Review>> {
    use schema::reviews::dsl;
    let entities = dsl::reviews
        .filter(dsl::restaurant_id.eq(restaurant_id.to_i64()))
        .order_by(dsl::created_at.desc())
        .then_order_by(dsl::id.desc())
        .load::<models::ReviewEntity>(conn)
        .map_err(from_diesel_err)?;
    into_reviews(entities)
}

fn load_reviews_of_user(conn: &mut SqliteConnection, user_id: Id) -> Result<Vec<Review>> {
    use schema::reviews::dsl;
    let entities = dsl::reviews
        .filter(dsl::user_id.eq(user_id.to_i64()))
        .order_by(dsl::created_at.desc())
        .then_order_by(dsl::id.desc())
        .load::<models::ReviewEntity>(conn)
        .map_err(from_diesel_err)?;
    into_reviews(entities)
}
