use super::prelude::*;
use crate::util::validate::Validate;

/// Validates and stores a new restaurant without an admin group.
///
/// The admin group can only be provisioned after the id has been
/// assigned, see [`ensure_authorization_group`]. Both steps should
/// be executed within the same transaction.
pub fn create_restaurant<R>(repo: &R, new_restaurant: NewRestaurant) -> Result<Id>
where
    R: RestaurantRepo,
{
    new_restaurant.validate()?;
    let id = repo.create_restaurant(&new_restaurant)?;
    log::debug!("Created restaurant {id} ({})", new_restaurant.name);
    Ok(id)
}

/// Makes sure that the group `"<id> admin"` exists and is linked
/// to the restaurant.
pub fn ensure_authorization_group<R>(repo: &R, restaurant_id: Id) -> Result<Group>
where
    R: RestaurantRepo + GroupRepo,
{
    let restaurant = repo.get_restaurant(restaurant_id)?;
    let group_name = restaurant_admin_group_name(restaurant.id);
    let (group, created) = repo.get_or_create_group(&group_name)?;
    if created {
        log::info!("Created admin group '{}' for restaurant {}", group.name, restaurant.id);
    }
    if restaurant.admin_group != Some(group.id) {
        repo.set_restaurant_admin_group(restaurant.id, Some(group.id))?;
    }
    Ok(group)
}

/// Stores the editable fields of an existing restaurant.
///
/// A missing admin group is provisioned afterwards.
pub fn update_restaurant<R>(repo: &R, restaurant: &Restaurant) -> Result<()>
where
    R: RestaurantRepo + GroupRepo,
{
    restaurant.validate()?;
    repo.update_restaurant(restaurant)?;
    if restaurant.admin_group.is_none() {
        ensure_authorization_group(repo, restaurant.id)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{
        super::{tests::MockDb, *},
        *,
    };
    use restodb_entities::builders::*;

    #[test]
    fn create_restaurant_and_provision_group() {
        let db = MockDb::default();
        let id = create_restaurant(&db, NewRestaurant::build().finish()).unwrap();
        assert!(db.get_restaurant(id).unwrap().admin_group.is_none());

        let group = ensure_authorization_group(&db, id).unwrap();
        assert_eq!(group.name, format!("{id} admin"));
        assert_eq!(db.get_restaurant(id).unwrap().admin_group, Some(group.id));
        assert_eq!(db.groups.borrow().len(), 1);
    }

    #[test]
    fn provisioning_the_group_twice_does_not_create_a_second_group() {
        let db = MockDb::default();
        let id = create_restaurant(&db, NewRestaurant::build().finish()).unwrap();
        let first = ensure_authorization_group(&db, id).unwrap();
        let second = ensure_authorization_group(&db, id).unwrap();
        assert_eq!(first, second);
        assert_eq!(db.groups.borrow().len(), 1);
    }

    #[test]
    fn reuse_an_existing_group_with_the_expected_name() {
        let db = MockDb::default();
        let id = create_restaurant(&db, NewRestaurant::build().finish()).unwrap();
        let (existing, _) = db.get_or_create_group(&format!("{id} admin")).unwrap();
        let group = ensure_authorization_group(&db, id).unwrap();
        assert_eq!(group, existing);
        assert_eq!(db.groups.borrow().len(), 1);
    }

    #[test]
    fn reject_invalid_coordinates_before_writing() {
        let db = MockDb::default();
        let err = create_restaurant(&db, NewRestaurant::build().pos(100.0, 0.0).finish())
            .err()
            .unwrap();
        assert!(matches!(err, Error::Latitude));
        let err = create_restaurant(&db, NewRestaurant::build().pos(0.0, -200.0).finish())
            .err()
            .unwrap();
        assert!(matches!(err, Error::Longitude));
        assert!(db.restaurants.borrow().is_empty());
        assert!(db.groups.borrow().is_empty());
    }

    #[test]
    fn update_restaurant_provisions_missing_group() {
        let db = MockDb::default();
        let id = create_restaurant(&db, NewRestaurant::build().finish()).unwrap();
        let mut restaurant = db.get_restaurant(id).unwrap();
        restaurant.name = "Renamed".into();
        update_restaurant(&db, &restaurant).unwrap();
        let updated = db.get_restaurant(id).unwrap();
        assert_eq!(updated.name, "Renamed");
        assert!(updated.admin_group.is_some());
    }

    #[test]
    fn reject_invalid_update() {
        let db = MockDb::default();
        let id = create_restaurant(&db, NewRestaurant::build().finish()).unwrap();
        let mut restaurant = db.get_restaurant(id).unwrap();
        restaurant.pos = MapPoint::new_unchecked(91.0, 0.0);
        assert!(update_restaurant(&db, &restaurant).is_err());
        assert_eq!(db.get_restaurant(id).unwrap().pos.lat(), 40.7128);
    }
}
