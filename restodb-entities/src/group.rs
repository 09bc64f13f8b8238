use crate::id::*;

/// Name of the group whose members may moderate everything,
/// including proposals for new restaurants.
pub const GLOBAL_ADMIN_GROUP_NAME: &str = "admin of everything";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub id: Id,
    pub name: String,
}

/// The name of the group that is entitled to edit
/// the restaurant with the given id.
pub fn restaurant_admin_group_name(restaurant_id: Id) -> String {
    format!("{restaurant_id} admin")
}
