// Mirrors the externally owned SQLite schema; column names are kept as stored.

diesel::table! {
    dishes (id) {
        id -> Integer,
        name -> Text,
        price -> Double,
        #[sql_name = "isVeg"]
        is_veg -> Bool,
    }
}

diesel::table! {
    restaurants (id) {
        id -> Integer,
        name -> Text,
        cuisine -> Text,
        rating -> Double,
        #[sql_name = "isVeg"]
        is_veg -> Bool,
        #[sql_name = "hasOutdoorSeating"]
        has_outdoor_seating -> Bool,
        #[sql_name = "isLuxury"]
        is_luxury -> Bool,
    }
}

diesel::allow_tables_to_appear_in_same_query!(dishes, restaurants,);
