use super::prelude::*;
use crate::util::validate;

#[derive(Debug, Clone, Default)]
pub struct UserRegistration {
    pub email: String,
    pub password: String,
    pub name: String,
    pub is_staff: bool,
    /// Adds the user to the group of global admins
    pub is_global_admin: bool,
}

pub fn create_new_user<R>(repo: &R, registration: UserRegistration) -> Result<Id>
where
    R: UserRepo + GroupRepo,
{
    let UserRegistration {
        email,
        password,
        name,
        is_staff,
        is_global_admin,
    } = registration;
    let email = email.parse::<EmailAddress>()?;
    if !validate::is_valid_email(email.as_str()) {
        return Err(Error::Email);
    }
    let password = password.parse::<Password>()?;
    if repo.try_get_user_by_email(&email)?.is_some() {
        return Err(Error::UserExists);
    }
    let new_user = NewUser {
        email,
        name: name.trim().to_owned(),
        password,
        is_staff,
        is_superuser: false,
    };
    log::debug!("Creating new user: email = {}", new_user.email);
    let user_id = repo.create_user(&new_user)?;
    if is_global_admin {
        let (group, _) = repo.get_or_create_group(GLOBAL_ADMIN_GROUP_NAME)?;
        repo.add_user_to_group(user_id, group.id)?;
        log::info!("Added user {} to '{}'", new_user.email, group.name);
    }
    Ok(user_id)
}
