///////////////////////////////////////////////////////////////////////
// Users & Groups
///////////////////////////////////////////////////////////////////////

table! {
    users (id) {
        id -> BigInt,
        email -> Text,
        name -> Text,
        password -> Text,
        is_active -> Bool,
        is_staff -> Bool,
        is_superuser -> Bool,
        date_joined -> BigInt,
        last_login -> Nullable<BigInt>,
    }
}

table! {
    auth_groups (id) {
        id -> BigInt,
        name -> Text,
    }
}

table! {
    user_groups (user_id, group_id) {
        user_id -> BigInt,
        group_id -> BigInt,
    }
}

joinable!(user_groups -> users (user_id));
joinable!(user_groups -> auth_groups (group_id));

///////////////////////////////////////////////////////////////////////
// Restaurants
///////////////////////////////////////////////////////////////////////

table! {
    restaurants (id) {
        id -> BigInt,
        name -> Text,
        address -> Text,
        lat -> Double,
        lon -> Double,
        contact_info -> Text,
        menu_text -> Text,
        admin_group -> Nullable<BigInt>,
    }
}

joinable!(restaurants -> auth_groups (admin_group));

///////////////////////////////////////////////////////////////////////
// Reviews & Reports
///////////////////////////////////////////////////////////////////////

table! {
    reviews (id) {
        id -> BigInt,
        user_id -> BigInt,
        restaurant_id -> BigInt,
        rating -> SmallInt,
        review_text -> Text,
        created_at -> BigInt,
    }
}

joinable!(reviews -> users (user_id));
joinable!(reviews -> restaurants (restaurant_id));

table! {
    reports (id) {
        id -> BigInt,
        user_id -> BigInt,
        restaurant_id -> BigInt,
        category -> SmallInt,
        rating -> SmallInt,
        created_at -> BigInt,
    }
}

joinable!(reports -> users (user_id));
joinable!(reports -> restaurants (restaurant_id));

///////////////////////////////////////////////////////////////////////
// Moderation
///////////////////////////////////////////////////////////////////////

table! {
    restaurant_requests (id) {
        id -> BigInt,
        corresponding_restaurant -> Nullable<BigInt>,
        requester -> Nullable<BigInt>,
        name -> Text,
        address -> Text,
        lat -> Double,
        lon -> Double,
        contact_info -> Text,
        menu_text -> Text,
    }
}

joinable!(restaurant_requests -> restaurants (corresponding_restaurant));
joinable!(restaurant_requests -> users (requester));

table! {
    rejection_messages (id) {
        id -> BigInt,
        recipient -> BigInt,
        for_what -> Text,
        message -> Text,
        read -> Bool,
    }
}

joinable!(rejection_messages -> users (recipient));

allow_tables_to_appear_in_same_query!(
    users,
    auth_groups,
    user_groups,
    restaurants,
    reviews,
    reports,
    restaurant_requests,
    rejection_messages,
);
