use diesel::prelude::*;

use crate::schema::{dishes, restaurants};

#[derive(Queryable, Selectable, Identifiable, Insertable, Debug, Clone, PartialEq)]
#[diesel(table_name = restaurants)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Restaurant {
    pub id: i32,
    pub name: String,
    pub cuisine: String,
    pub rating: f64,
    pub is_veg: bool,
    pub has_outdoor_seating: bool,
    pub is_luxury: bool,
}

#[derive(Queryable, Selectable, Identifiable, Insertable, Debug, Clone, PartialEq)]
#[diesel(table_name = dishes)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Dish {
    pub id: i32,
    pub name: String,
    pub price: f64,
    pub is_veg: bool,
}

/// Conjunctive match on all three restaurant flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RestaurantFilter {
    pub is_veg: bool,
    pub has_outdoor_seating: bool,
    pub is_luxury: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DishFilter {
    pub is_veg: bool,
}
