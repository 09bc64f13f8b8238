use super::{create_restaurant, ensure_authorization_group, prelude::*, update_restaurant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Approval {
    pub restaurant_id: Id,
    /// `true` if a new restaurant has been created
    pub created: bool,
}

/// Applies the proposed changes and deletes the request.
///
/// An edit proposal overwrites all editable fields of its
/// restaurant. A proposal without a corresponding restaurant
/// creates a new one. If the resulting restaurant is invalid
/// nothing is written and the request is kept.
pub fn approve_restaurant_request<R>(repo: &R, request_id: Id) -> Result<Approval>
where
    R: RestaurantRequestRepo + RestaurantRepo + GroupRepo,
{
    let request = repo.get_restaurant_request(request_id)?;
    let approval = match request.corresponding_restaurant {
        Some(restaurant_id) => {
            let mut restaurant = repo.get_restaurant(restaurant_id)?;
            request.apply_to(&mut restaurant);
            update_restaurant(repo, &restaurant)?;
            Approval {
                restaurant_id,
                created: false,
            }
        }
        None => {
            let restaurant_id = create_restaurant(repo, request.to_new_restaurant())?;
            ensure_authorization_group(repo, restaurant_id)?;
            Approval {
                restaurant_id,
                created: true,
            }
        }
    };
    repo.delete_restaurant_request(request.id)?;
    if approval.created {
        log::info!(
            "Approved request {}: created restaurant {}",
            request.id,
            approval.restaurant_id
        );
    } else {
        log::info!(
            "Approved request {}: updated restaurant {}",
            request.id,
            approval.restaurant_id
        );
    }
    Ok(approval)
}
