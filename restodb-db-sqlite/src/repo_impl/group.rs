use super::*;

macro_rules! impl_group_repo {
    ($db:ident) => {
        impl<'a> GroupRepo for $db<'a> {
            fn get_or_create_group(&self, name: &str) -> Result<(Group, bool)> {
                get_or_create_group(&mut self.conn.borrow_mut(), name)
            }
            fn get_group(&self, id: Id) -> Result<Group> {
                get_group(&mut self.conn.borrow_mut(), id)
            }
            fn try_get_group_by_name(&self, name: &str) -> Result<Option<Group>> {
                try_get_group_by_name(&mut self.conn.borrow_mut(), name)
            }

            fn add_user_to_group(&self, user_id: Id, group_id: Id) -> Result<()> {
                add_user_to_group(&mut self.conn.borrow_mut(), user_id, group_id)
            }
            fn is_user_in_group(&self, user_id: Id, group_name: &str) -> Result<bool> {
                is_user_in_group(&mut self.conn.borrow_mut(), user_id, group_name)
            }
            fn groups_of_user(&self, user_id: Id) -> Result<Vec<Group>> {
                groups_of_user(&mut self.conn.borrow_mut(), user_id)
            }
        }
    };
}

impl_group_repo!(DbReadWrite);
impl_group_repo!(DbConnection);

impl<'a> GroupRepo for DbReadOnly<'a> {
    fn get_or_create_group(&self, name: &str) -> Result<(Group, bool)> {
        // Reading an existing group is fine
        match try_get_group_by_name(&mut self.conn.borrow_mut(), name)? {
            Some(group) => Ok((group, false)),
            None => Err(read_only_violation("get_or_create_group")),
        }
    }
    fn get_group(&self, id: Id) -> Result<Group> {
        get_group(&mut self.conn.borrow_mut(), id)
    }
    fn try_get_group_by_name(&self, name: &str) -> Result<Option<Group>> {
        try_get_group_by_name(&mut self.conn.borrow_mut(), name)
    }

    fn add_user_to_group(&self, _user_id: Id, _group_id: Id) -> Result<()> {
        Err(read_only_violation("add_user_to_group"))
    }
    fn is_user_in_group(&self, user_id: Id, group_name: &str) -> Result<bool> {
        is_user_in_group(&mut self.conn.borrow_mut(), user_id, group_name)
    }
    fn groups_of_user(&self, user_id: Id) -> Result<Vec<Group>> {
        groups_of_user(&mut self.conn.borrow_mut(), user_id)
    }
}

fn get_or_create_group(conn: &mut SqliteConnection, name: &str) -> Result<(Group, bool)> {
    if let Some(group) = try_get_group_by_name(conn, name)? {
        return Ok((group, false));
    }
    diesel::insert_into(schema::auth_groups::table)
        .values(&models::NewGroup { name })
        .execute(conn)
        .map_err(from_diesel_err)?;
    let id = last_insert_id(conn)?;
    let group = Group {
        id,
        name: name.to_owned(),
    };
    Ok((group, true))
}

fn get_group(conn: &mut SqliteConnection, id: Id) -> Result<Group> {
    use schema::auth_groups::dsl;
    Ok(dsl::auth_groups
        .filter(dsl::id.eq(id.to_i64()))
        .first::<models::GroupEntity>(conn)
        .map_err(from_diesel_err)?
        .into())
}

fn try_get_group_by_name(conn: &mut SqliteConnection, name: &str) -> Result<Option<Group>> {
    use schema::auth_groups::dsl;
    Ok(dsl::auth_groups
        .filter(dsl::name.eq(name))
        .first::<models::GroupEntity>(conn)
        .optional()
        .map_err(from_diesel_err)?
        .map(Into::into))
}

fn add_user_to_group(conn: &mut SqliteConnection, user_id: Id, group_id: Id) -> Result<()> {
    diesel::insert_or_ignore_into(schema::user_groups::table)
        .values(&models::UserGroup {
            user_id: user_id.to_i64(),
            group_id: group_id.to_i64(),
        })
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn is_user_in_group(conn: &mut SqliteConnection, user_id: Id, group_name: &str) -> Result<bool> {
    use schema::{auth_groups::dsl as g_dsl, user_groups::dsl as ug_dsl};
    let count = schema::user_groups::table
        .inner_join(schema::auth_groups::table)
        .filter(ug_dsl::user_id.eq(user_id.to_i64()))
        .filter(g_dsl::name.eq(group_name))
        .count()
        .get_result::<i64>(conn)
        .map_err(from_diesel_err)?;
    Ok(count > 0)
}

fn groups_of_user(conn: &mut SqliteConnection, user_id: Id) -> Result<Vec<Group>> {
    use schema::{auth_groups::dsl as g_dsl, user_groups::dsl as ug_dsl};
    Ok(schema::user_groups::table
        .inner_join(schema::auth_groups::table)
        .filter(ug_dsl::user_id.eq(user_id.to_i64()))
        .select((g_dsl::id, g_dsl::name))
        .order_by(g_dsl::id)
        .load::<models::GroupEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(Into::into)
        .collect())
}
