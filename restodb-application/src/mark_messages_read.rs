use super::*;

/// Marks all unread rejection messages of the account as read.
pub fn mark_messages_read(
    connections: &sqlite::Connections,
    account_email: &EmailAddress,
) -> Result<usize> {
    Ok(connections.exclusive()?.transaction(|conn| {
        let user = usecases::authorize_user_by_email(conn, account_email)?;
        usecases::mark_messages_read(conn, user.id)
    })?)
}
