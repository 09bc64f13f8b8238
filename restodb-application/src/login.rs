use super::*;

/// Checks the credentials and records the time of the login.
pub fn login_with_email(
    connections: &sqlite::Connections,
    login: &usecases::Credentials,
) -> Result<User> {
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::login_with_email(conn, login).map_err(|err| {
            info!("Login of {} failed: {err}", login.email);
            err
        })
    })?)
}
