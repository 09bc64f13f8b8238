use super::*;

pub fn create_user(
    connections: &sqlite::Connections,
    registration: usecases::UserRegistration,
) -> Result<Id> {
    let email = registration.email.clone();
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::create_new_user(conn, registration).map_err(|err| {
            warn!("Failed to create user {email}: {err}");
            err
        })
    })?)
}
