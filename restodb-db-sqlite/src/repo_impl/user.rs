use super::*;

macro_rules! impl_user_repo {
    ($db:ident) => {
        impl<'a> UserRepo for $db<'a> {
            fn create_user(&self, user: &NewUser) -> Result<Id> {
                create_user(&mut self.conn.borrow_mut(), user)
            }
            fn update_user(&self, user: &User) -> Result<()> {
                update_user(&mut self.conn.borrow_mut(), user)
            }
            fn delete_user(&self, id: Id) -> Result<()> {
                delete_user(&mut self.conn.borrow_mut(), id)
            }

            fn get_user(&self, id: Id) -> Result<User> {
                get_user(&mut self.conn.borrow_mut(), id)
            }
            fn get_user_by_email(&self, email: &EmailAddress) -> Result<User> {
                get_user_by_email(&mut self.conn.borrow_mut(), email)
            }
            fn try_get_user_by_email(&self, email: &EmailAddress) -> Result<Option<User>> {
                try_get_user_by_email(&mut self.conn.borrow_mut(), email)
            }

            fn all_users(&self) -> Result<Vec<User>> {
                all_users(&mut self.conn.borrow_mut())
            }
            fn count_users(&self) -> Result<usize> {
                count_users(&mut self.conn.borrow_mut())
            }
        }
    };
}

impl_user_repo!(DbReadWrite);
impl_user_repo!(DbConnection);

impl<'a> UserRepo for DbReadOnly<'a> {
    fn create_user(&self, _user: &NewUser) -> Result<Id> {
        Err(read_only_violation("create_user"))
    }
    fn update_user(&self, _user: &User) -> Result<()> {
        Err(read_only_violation("update_user"))
    }
    fn delete_user(&self, _id: Id) -> Result<()> {
        Err(read_only_violation("delete_user"))
    }

    fn get_user(&self, id: Id) -> Result<User> {
        get_user(&mut self.conn.borrow_mut(), id)
    }
    fn get_user_by_email(&self, email: &EmailAddress) -> Result<User> {
        get_user_by_email(&mut self.conn.borrow_mut(), email)
    }
    fn try_get_user_by_email(&self, email: &EmailAddress) -> Result<Option<User>> {
        try_get_user_by_email(&mut self.conn.borrow_mut(), email)
    }

    fn all_users(&self) -> Result<Vec<User>> {
        all_users(&mut self.conn.borrow_mut())
    }
    fn count_users(&self) -> Result<usize> {
        count_users(&mut self.conn.borrow_mut())
    }
}

fn create_user(conn: &mut SqliteConnection, u: &NewUser) -> Result<Id> {
    let new_user = models::NewUser {
        email: u.email.as_str(),
        name: &u.name,
        password: u.password.as_ref(),
        is_active: true,
        is_staff: u.is_staff,
        is_superuser: u.is_superuser,
        date_joined: Timestamp::now().as_millis(),
        last_login: None,
    };
    diesel::insert_into(schema::users::table)
        .values(&new_user)
        .execute(conn)
        .map_err(from_diesel_err)?;
    last_insert_id(conn)
}

fn update_user(conn: &mut SqliteConnection, u: &User) -> Result<()> {
    use schema::users::dsl;
    let count = diesel::update(dsl::users.filter(dsl::id.eq(u.id.to_i64())))
        .set(&models::NewUser::from(u))
        .execute(conn)
        .map_err(from_diesel_err)?;
    expect_single_row(count)
}

fn delete_user(conn: &mut SqliteConnection, id: Id) -> Result<()> {
    use schema::users::dsl;
    let count = diesel::delete(dsl::users.filter(dsl::id.eq(id.to_i64())))
        .execute(conn)
        .map_err(from_diesel_err)?;
    expect_single_row(count)
}

fn get_user(conn: &mut SqliteConnection, id: Id) -> Result<User> {
    use schema::users::dsl;
    Ok(dsl::users
        .filter(dsl::id.eq(id.to_i64()))
        .first::<models::UserEntity>(conn)
        .map_err(from_diesel_err)?
        .into())
}

fn get_user_by_email(conn: &mut SqliteConnection, email: &EmailAddress) -> Result<User> {
    try_get_user_by_email(conn, email)?.ok_or(repo::Error::NotFound)
}

fn try_get_user_by_email(
    conn: &mut SqliteConnection,
    email: &EmailAddress,
) -> Result<Option<User>> {
    use schema::users::dsl;
    Ok(dsl::users
        .filter(dsl::email.eq(email.as_str()))
        .first::<models::UserEntity>(conn)
        .optional()
        .map_err(from_diesel_err)?
        .map(Into::into))
}

fn all_users(conn: &mut SqliteConnection) -> Result<Vec<User>> {
    use schema::users::dsl;
    Ok(dsl::users
        .order_by(dsl::id)
        .load::<models::UserEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(Into::into)
        .collect())
}

fn count_users(conn: &mut SqliteConnection) -> Result<usize> {
    use schema::users::dsl;
    Ok(dsl::users
        .select(diesel::dsl::count(dsl::id))
        .first::<i64>(conn)
        .map_err(from_diesel_err)? as usize)
}
