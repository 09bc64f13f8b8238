use super::*;

macro_rules! impl_rejection_message_repo {
    ($db:ident) => {
        impl<'a> RejectionMessageRepo for $db<'a> {
            fn create_rejection_message(&self, message: &NewRejectionMessage) -> Result<Id> {
                create_rejection_message(&mut self.conn.borrow_mut(), message)
            }
            fn load_rejection_messages(
                &self,
                recipient: Id,
                only_unread: bool,
            ) -> Result<Vec<RejectionMessage>> {
                load_rejection_messages(&mut self.conn.borrow_mut(), recipient, only_unread)
            }
            fn mark_rejection_messages_read(&self, recipient: Id) -> Result<usize> {
                mark_rejection_messages_read(&mut self.conn.borrow_mut(), recipient)
            }
        }
    };
}

impl_rejection_message_repo!(DbReadWrite);
impl_rejection_message_repo!(DbConnection);

impl<'a> RejectionMessageRepo for DbReadOnly<'a> {
    fn create_rejection_message(&self, _message: &NewRejectionMessage) -> Result<Id> {
        Err(read_only_violation("create_rejection_message"))
    }
    fn load_rejection_messages(
        &self,
        recipient: Id,
        only_unread: bool,
    ) -> Result<Vec<RejectionMessage>> {
        load_rejection_messages(&mut self.conn.borrow_mut(), recipient, only_unread)
    }
    fn mark_rejection_messages_read(&self, _recipient: Id) -> Result<usize> {
        Err(read_only_violation("mark_rejection_messages_read"))
    }
}

fn create_rejection_message(conn: &mut SqliteConnection, m: &NewRejectionMessage) -> Result<Id> {
    diesel::insert_into(schema::rejection_messages::table)
        .values(&models::NewRejectionMessage::from(m))
        .execute(conn)
        .map_err(from_diesel_err)?;
    last_insert_id(conn)
}

fn load_rejection_messages(
    conn: &mut SqliteConnection,
    recipient: Id,
    only_unread: bool,
) -> Result<Vec<RejectionMessage>> {
    use schema::rejection_messages::dsl;
    let mut query = dsl::rejection_messages
        .filter(dsl::recipient.eq(recipient.to_i64()))
        .order_by(dsl::id)
        .into_boxed();
    if only_unread {
        query = query.filter(dsl::read.eq(false));
    }
    Ok(query
        .load::<models::RejectionMessageEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(Into::into)
        .collect())
}

fn mark_rejection_messages_read(conn: &mut SqliteConnection, recipient: Id) -> Result<usize> {
    use schema::rejection_messages::dsl;
    diesel::update(
        dsl::rejection_messages
            .filter(dsl::recipient.eq(recipient.to_i64()))
            .filter(dsl::read.eq(false)),
    )
    .set(dsl::read.eq(true))
    .execute(conn)
    .map_err(from_diesel_err)
}
