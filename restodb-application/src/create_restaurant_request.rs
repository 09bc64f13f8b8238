use super::*;

/// Stores a proposal for a new or an existing restaurant.
pub fn create_restaurant_request(
    connections: &sqlite::Connections,
    submission: usecases::RequestSubmission,
) -> Result<Id> {
    let corresponding_restaurant = submission.corresponding_restaurant;
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::create_restaurant_request(conn, submission).map_err(|err| {
            match corresponding_restaurant {
                Some(id) => warn!("Failed to store edit request for restaurant {id}: {err}"),
                None => warn!("Failed to store new restaurant request: {err}"),
            }
            err
        })
    })?)
}

#[cfg(test)]
mod tests {
    use super::super::tests::prelude::*;

    #[test]
    fn store_new_restaurant_request() {
        let fixture = BackendFixture::new();
        let id = flows::create_restaurant_request(
            &fixture.db_connections,
            usecases::RequestSubmission {
                name: Some("Noodle Bar".into()),
                address: Some("1 Main St".into()),
                ..Default::default()
            },
        )
        .unwrap();
        let request = fixture.get_request(id);
        assert!(request.is_new_restaurant());
        assert_eq!(request.name, "Noodle Bar");
        assert_eq!(request.pos.lat(), 0.0);
        assert_eq!(request.pos.lon(), 0.0);
    }

    #[test]
    fn back_fill_edit_request_from_restaurant() {
        let fixture = BackendFixture::new();
        let restaurant_id = fixture.create_restaurant("Taco Stand");
        let id = flows::create_restaurant_request(
            &fixture.db_connections,
            usecases::RequestSubmission {
                corresponding_restaurant: Some(restaurant_id),
                contact_info: Some("555-0100".into()),
                ..Default::default()
            },
        )
        .unwrap();
        let request = fixture.get_request(id);
        assert_eq!(request.corresponding_restaurant, Some(restaurant_id));
        assert_eq!(request.name, "Taco Stand");
        assert_eq!(request.contact_info, "555-0100");
    }

    #[test]
    fn reject_request_for_unknown_restaurant() {
        let fixture = BackendFixture::new();
        let err = flows::create_restaurant_request(
            &fixture.db_connections,
            usecases::RequestSubmission {
                corresponding_restaurant: Some(Id::new(42)),
                ..Default::default()
            },
        )
        .unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(fixture.count_requests(), 0);
    }
}
