use std::cell::{Cell, RefCell};

use super::prelude::*;
use crate::repositories::Error as RepoError;

type RepoResult<T> = std::result::Result<T, RepoError>;

trait Key {
    fn key(&self) -> Id;
}

macro_rules! impl_key {
    ($($t:ty),*) => {
        $(
            impl Key for $t {
                fn key(&self) -> Id {
                    self.id
                }
            }
        )*
    };
}

impl_key!(User, Group, Restaurant, Review, Report, RestaurantRequest, RejectionMessage);

#[derive(Default)]
pub struct MockDb {
    last_id: Cell<i64>,
    pub users: RefCell<Vec<User>>,
    pub groups: RefCell<Vec<Group>>,
    /// (user, group)
    pub memberships: RefCell<Vec<(Id, Id)>>,
    pub restaurants: RefCell<Vec<Restaurant>>,
    pub reviews: RefCell<Vec<Review>>,
    pub reports: RefCell<Vec<Report>>,
    pub requests: RefCell<Vec<RestaurantRequest>>,
    pub messages: RefCell<Vec<RejectionMessage>>,
}

impl MockDb {
    fn next_id(&self) -> Id {
        let id = self.last_id.get() + 1;
        self.last_id.set(id);
        Id::new(id)
    }
}

fn get<T: Clone + Key>(objects: &[T], id: Id) -> RepoResult<T> {
    match objects.iter().find(|x| x.key() == id) {
        Some(x) => Ok(x.clone()),
        None => Err(RepoError::NotFound),
    }
}

fn update<T: Clone + Key>(objects: &mut [T], e: &T) -> RepoResult<()> {
    if let Some(pos) = objects.iter().position(|x| x.key() == e.key()) {
        objects[pos] = e.clone();
    } else {
        return Err(RepoError::NotFound);
    }
    Ok(())
}

fn delete<T: Clone + Key>(objects: &mut Vec<T>, id: Id) -> RepoResult<()> {
    if let Some(pos) = objects.iter().position(|x| x.key() == id) {
        objects.remove(pos);
    } else {
        return Err(RepoError::NotFound);
    }
    Ok(())
}

impl UserRepo for MockDb {
    fn create_user(&self, user: &NewUser) -> RepoResult<Id> {
        if self.users.borrow().iter().any(|u| u.email == user.email) {
            return Err(RepoError::AlreadyExists);
        }
        let id = self.next_id();
        self.users.borrow_mut().push(User {
            id,
            email: user.email.clone(),
            name: user.name.clone(),
            password: user.password.clone(),
            is_active: true,
            is_staff: user.is_staff,
            is_superuser: user.is_superuser,
            date_joined: Timestamp::now(),
            last_login: None,
        });
        Ok(id)
    }
    fn update_user(&self, user: &User) -> RepoResult<()> {
        update(&mut self.users.borrow_mut(), user)
    }
    fn delete_user(&self, id: Id) -> RepoResult<()> {
        delete(&mut self.users.borrow_mut(), id)
    }
    fn get_user(&self, id: Id) -> RepoResult<User> {
        get(&self.users.borrow(), id)
    }
    fn get_user_by_email(&self, email: &EmailAddress) -> RepoResult<User> {
        self.try_get_user_by_email(email)?
            .ok_or(RepoError::NotFound)
    }
    fn try_get_user_by_email(&self, email: &EmailAddress) -> RepoResult<Option<User>> {
        Ok(self
            .users
            .borrow()
            .iter()
            .find(|u| &u.email == email)
            .cloned())
    }
    fn all_users(&self) -> RepoResult<Vec<User>> {
        Ok(self.users.borrow().clone())
    }
    fn count_users(&self) -> RepoResult<usize> {
        Ok(self.users.borrow().len())
    }
}

impl GroupRepo for MockDb {
    fn get_or_create_group(&self, name: &str) -> RepoResult<(Group, bool)> {
        if let Some(group) = self.try_get_group_by_name(name)? {
            return Ok((group, false));
        }
        let group = Group {
            id: self.next_id(),
            name: name.to_owned(),
        };
        self.groups.borrow_mut().push(group.clone());
        Ok((group, true))
    }
    fn get_group(&self, id: Id) -> RepoResult<Group> {
        get(&self.groups.borrow(), id)
    }
    fn try_get_group_by_name(&self, name: &str) -> RepoResult<Option<Group>> {
        Ok(self
            .groups
            .borrow()
            .iter()
            .find(|g| g.name == name)
            .cloned())
    }
    fn add_user_to_group(&self, user_id: Id, group_id: Id) -> RepoResult<()> {
        let membership = (user_id, group_id);
        let mut memberships = self.memberships.borrow_mut();
        if !memberships.contains(&membership) {
            memberships.push(membership);
        }
        Ok(())
    }
    fn is_user_in_group(&self, user_id: Id, group_name: &str) -> RepoResult<bool> {
        Ok(self
            .groups_of_user(user_id)?
            .iter()
            .any(|g| g.name == group_name))
    }
    fn groups_of_user(&self, user_id: Id) -> RepoResult<Vec<Group>> {
        let groups = self.groups.borrow();
        Ok(self
            .memberships
            .borrow()
            .iter()
            .filter(|(u, _)| *u == user_id)
            .filter_map(|(_, g)| groups.iter().find(|x| x.id == *g).cloned())
            .collect())
    }
}

impl RestaurantRepo for MockDb {
    fn create_restaurant(&self, r: &NewRestaurant) -> RepoResult<Id> {
        let id = self.next_id();
        self.restaurants.borrow_mut().push(r.clone().into_restaurant(id));
        Ok(id)
    }
    fn update_restaurant(&self, r: &Restaurant) -> RepoResult<()> {
        let mut restaurants = self.restaurants.borrow_mut();
        let Some(stored) = restaurants.iter_mut().find(|x| x.id == r.id) else {
            return Err(RepoError::NotFound);
        };
        let admin_group = stored.admin_group;
        *stored = Restaurant {
            admin_group,
            ..r.clone()
        };
        Ok(())
    }
    fn set_restaurant_admin_group(&self, id: Id, group_id: Option<Id>) -> RepoResult<()> {
        let mut restaurants = self.restaurants.borrow_mut();
        let Some(stored) = restaurants.iter_mut().find(|x| x.id == id) else {
            return Err(RepoError::NotFound);
        };
        stored.admin_group = group_id;
        Ok(())
    }
    fn delete_restaurant(&self, id: Id) -> RepoResult<()> {
        delete(&mut self.restaurants.borrow_mut(), id)
    }
    fn get_restaurant(&self, id: Id) -> RepoResult<Restaurant> {
        get(&self.restaurants.borrow(), id)
    }
    fn all_restaurants(&self) -> RepoResult<Vec<Restaurant>> {
        let mut restaurants = self.restaurants.borrow().clone();
        restaurants.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
        Ok(restaurants)
    }
    fn count_restaurants(&self) -> RepoResult<usize> {
        Ok(self.restaurants.borrow().len())
    }
}

impl ReviewRepo for MockDb {
    fn create_review(&self, r: &NewReview) -> RepoResult<Id> {
        let id = self.next_id();
        self.reviews.borrow_mut().push(Review {
            id,
            user_id: r.user_id,
            restaurant_id: r.restaurant_id,
            rating: r.rating,
            review_text: r.review_text.clone(),
            created_at: r.created_at,
        });
        Ok(id)
    }
    fn delete_review(&self, id: Id) -> RepoResult<()> {
        delete(&mut self.reviews.borrow_mut(), id)
    }
    fn get_review(&self, id: Id) -> RepoResult<Review> {
        get(&self.reviews.borrow(), id)
    }
    fn load_reviews_of_restaurant(&self, restaurant_id: Id) -> RepoResult<Vec<Review>> {
        Ok(self
            .reviews
            .borrow()
            .iter()
            .filter(|r| r.restaurant_id == restaurant_id)
            .cloned()
            .collect())
    }
    fn load_reviews_of_user(&self, user_id: Id) -> RepoResult<Vec<Review>> {
        Ok(self
            .reviews
            .borrow()
            .iter()
            .filter(|r| r.user_id == user_id)
            .cloned()
            .collect())
    }
}

impl ReportRepo for MockDb {
    fn create_report(&self, r: &NewReport) -> RepoResult<Id> {
        let id = self.next_id();
        self.reports.borrow_mut().push(Report {
            id,
            user_id: r.user_id,
            restaurant_id: r.restaurant_id,
            category: r.category,
            rating: r.rating,
            created_at: r.created_at,
        });
        Ok(id)
    }
    fn delete_report(&self, id: Id) -> RepoResult<()> {
        delete(&mut self.reports.borrow_mut(), id)
    }
    fn get_report(&self, id: Id) -> RepoResult<Report> {
        get(&self.reports.borrow(), id)
    }
    fn load_reports_of_restaurant(
        &self,
        restaurant_id: Id,
        category: Option<ReportCategory>,
    ) -> RepoResult<Vec<Report>> {
        Ok(self
            .reports
            .borrow()
            .iter()
            .filter(|r| r.restaurant_id == restaurant_id)
            .filter(|r| category.map_or(true, |c| c == r.category))
            .cloned()
            .collect())
    }
}

impl RestaurantRequestRepo for MockDb {
    fn create_restaurant_request(&self, r: &NewRestaurantRequest) -> RepoResult<Id> {
        let id = self.next_id();
        self.requests.borrow_mut().push(RestaurantRequest {
            id,
            corresponding_restaurant: r.corresponding_restaurant,
            requester: r.requester,
            name: r.name.clone(),
            address: r.address.clone(),
            pos: r.pos,
            contact_info: r.contact_info.clone(),
            menu_text: r.menu_text.clone(),
        });
        Ok(id)
    }
    fn update_restaurant_request(&self, r: &RestaurantRequest) -> RepoResult<()> {
        update(&mut self.requests.borrow_mut(), r)
    }
    fn delete_restaurant_request(&self, id: Id) -> RepoResult<()> {
        delete(&mut self.requests.borrow_mut(), id)
    }
    fn get_restaurant_request(&self, id: Id) -> RepoResult<RestaurantRequest> {
        get(&self.requests.borrow(), id)
    }
    fn list_restaurant_requests(
        &self,
        filter: RestaurantRequestFilter,
    ) -> RepoResult<Vec<RestaurantRequest>> {
        Ok(self
            .requests
            .borrow()
            .iter()
            .filter(|r| match filter {
                RestaurantRequestFilter::All => true,
                RestaurantRequestFilter::NewRestaurants => r.is_new_restaurant(),
                RestaurantRequestFilter::ForRestaurant(id) => {
                    r.corresponding_restaurant == Some(id)
                }
            })
            .cloned()
            .collect())
    }
}

impl RejectionMessageRepo for MockDb {
    fn create_rejection_message(&self, m: &NewRejectionMessage) -> RepoResult<Id> {
        let id = self.next_id();
        self.messages.borrow_mut().push(RejectionMessage {
            id,
            recipient: m.recipient,
            for_what: m.for_what.clone(),
            message: m.message.clone(),
            read: false,
        });
        Ok(id)
    }
    fn load_rejection_messages(
        &self,
        recipient: Id,
        only_unread: bool,
    ) -> RepoResult<Vec<RejectionMessage>> {
        Ok(self
            .messages
            .borrow()
            .iter()
            .filter(|m| m.recipient == recipient && !(only_unread && m.read))
            .cloned()
            .collect())
    }
    fn mark_rejection_messages_read(&self, recipient: Id) -> RepoResult<usize> {
        let mut count = 0;
        for m in self
            .messages
            .borrow_mut()
            .iter_mut()
            .filter(|m| m.recipient == recipient && !m.read)
        {
            m.read = true;
            count += 1;
        }
        Ok(count)
    }
}
