use super::*;

/// Applies a pending request on behalf of an admin.
pub fn approve_restaurant_request(
    connections: &sqlite::Connections,
    account_email: &EmailAddress,
    request_id: Id,
) -> Result<usecases::Approval> {
    Ok(connections.exclusive()?.transaction(|conn| {
        let user = usecases::authorize_user_by_email(conn, account_email)?;
        usecases::authorize_restaurant_request_moderation(conn, &user, request_id)?;
        usecases::approve_restaurant_request(conn, request_id).map_err(|err| {
            warn!("Failed to approve request {request_id}: {err}");
            err
        })
    })?)
}

/// Discards a pending request on behalf of an admin.
pub fn reject_restaurant_request(
    connections: &sqlite::Connections,
    account_email: &EmailAddress,
    request_id: Id,
    reason: Option<&str>,
) -> Result<usecases::Rejection> {
    Ok(connections.exclusive()?.transaction(|conn| {
        let user = usecases::authorize_user_by_email(conn, account_email)?;
        usecases::authorize_restaurant_request_moderation(conn, &user, request_id)?;
        usecases::reject_restaurant_request(conn, request_id, reason).map_err(|err| {
            warn!("Failed to reject request {request_id}: {err}");
            err
        })
    })?)
}
