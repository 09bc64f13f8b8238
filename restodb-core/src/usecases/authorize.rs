use super::prelude::*;

pub fn authorize_user_by_email<R: UserRepo>(repo: &R, email: &EmailAddress) -> Result<User> {
    match repo.try_get_user_by_email(email)? {
        Some(user) if user.is_active => Ok(user),
        _ => Err(Error::Unauthorized),
    }
}

/// Staff users and members of the global admin group.
pub fn is_global_admin<R: GroupRepo>(repo: &R, user: &User) -> Result<bool> {
    if user.is_staff || user.is_superuser {
        return Ok(true);
    }
    Ok(repo.is_user_in_group(user.id, GLOBAL_ADMIN_GROUP_NAME)?)
}

/// Global admins and members of the restaurant's admin group.
pub fn is_restaurant_admin<R: GroupRepo>(repo: &R, user: &User, restaurant_id: Id) -> Result<bool> {
    if is_global_admin(repo, user)? {
        return Ok(true);
    }
    Ok(repo.is_user_in_group(user.id, &restaurant_admin_group_name(restaurant_id))?)
}

pub fn authorize_restaurant_request_moderation<R>(
    repo: &R,
    user: &User,
    request_id: Id,
) -> Result<RestaurantRequest>
where
    R: GroupRepo + RestaurantRequestRepo,
{
    let request = repo.get_restaurant_request(request_id)?;
    let authorized = match request.corresponding_restaurant {
        Some(restaurant_id) => is_restaurant_admin(repo, user, restaurant_id)?,
        None => is_global_admin(repo, user)?,
    };
    if !authorized {
        log::warn!(
            "User {} is not allowed to moderate request {}",
            user.id,
            request.id
        );
        return Err(Error::Forbidden);
    }
    Ok(request)
}
