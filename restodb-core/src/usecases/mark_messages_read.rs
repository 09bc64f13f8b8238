use super::prelude::*;

pub fn load_unread_messages<R>(repo: &R, recipient: Id) -> Result<Vec<RejectionMessage>>
where
    R: RejectionMessageRepo,
{
    Ok(repo.load_rejection_messages(recipient, true)?)
}

pub fn mark_messages_read<R>(repo: &R, recipient: Id) -> Result<usize>
where
    R: RejectionMessageRepo,
{
    let count = repo.mark_rejection_messages_read(recipient)?;
    log::debug!("Marked {count} message(s) of user {recipient} as read");
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::{
        super::{tests::MockDb, *},
        *,
    };

    fn send(db: &MockDb, recipient: i64, message: &str) {
        db.create_rejection_message(&NewRejectionMessage {
            recipient: Id::new(recipient),
            for_what: "Some place".into(),
            message: message.into(),
        })
        .unwrap();
    }

    #[test]
    fn mark_all_unread_messages_of_a_user() {
        let db = MockDb::default();
        send(&db, 1, "a");
        send(&db, 1, "b");
        send(&db, 2, "c");

        assert_eq!(mark_messages_read(&db, Id::new(1)).unwrap(), 2);
        assert!(load_unread_messages(&db, Id::new(1)).unwrap().is_empty());
        assert_eq!(load_unread_messages(&db, Id::new(2)).unwrap().len(), 1);

        // Already read messages are not touched again
        assert_eq!(mark_messages_read(&db, Id::new(1)).unwrap(), 0);
        assert_eq!(db.load_rejection_messages(Id::new(1), false).unwrap().len(), 2);
    }
}
