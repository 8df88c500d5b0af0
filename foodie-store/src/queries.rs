//! Parameterized reads over `restaurants` and `dishes`.
//!
//! Every function builds its statement through the diesel query builder, so
//! caller-supplied values only ever reach SQLite as bound parameters.

use diesel::prelude::*;
use diesel::SqliteConnection;

use crate::models::{Dish, DishFilter, Restaurant, RestaurantFilter};
use crate::schema::{dishes, restaurants};

pub fn list_restaurants(conn: &mut SqliteConnection) -> QueryResult<Vec<Restaurant>> {
    restaurants::table
        .select(Restaurant::as_select())
        .load(conn)
}

pub fn get_restaurant(conn: &mut SqliteConnection, id: i32) -> QueryResult<Option<Restaurant>> {
    restaurants::table
        .find(id)
        .select(Restaurant::as_select())
        .first(conn)
        .optional()
}

/// Exact, case-sensitive match on `cuisine`.
pub fn list_restaurants_by_cuisine(
    conn: &mut SqliteConnection,
    cuisine: &str,
) -> QueryResult<Vec<Restaurant>> {
    restaurants::table
        .filter(restaurants::cuisine.eq(cuisine))
        .select(Restaurant::as_select())
        .load(conn)
}

pub fn list_restaurants_by_filter(
    conn: &mut SqliteConnection,
    filter: RestaurantFilter,
) -> QueryResult<Vec<Restaurant>> {
    restaurants::table
        .filter(restaurants::is_veg.eq(filter.is_veg))
        .filter(restaurants::has_outdoor_seating.eq(filter.has_outdoor_seating))
        .filter(restaurants::is_luxury.eq(filter.is_luxury))
        .select(Restaurant::as_select())
        .load(conn)
}

pub fn list_restaurants_sorted_by_rating(
    conn: &mut SqliteConnection,
) -> QueryResult<Vec<Restaurant>> {
    restaurants::table
        .order(restaurants::rating.desc())
        .select(Restaurant::as_select())
        .load(conn)
}

pub fn list_dishes(conn: &mut SqliteConnection) -> QueryResult<Vec<Dish>> {
    dishes::table.select(Dish::as_select()).load(conn)
}

/// Unlike [`get_restaurant`], this yields every row matching the id rather
/// than an optional single row.
pub fn get_dish(conn: &mut SqliteConnection, id: i32) -> QueryResult<Vec<Dish>> {
    dishes::table
        .filter(dishes::id.eq(id))
        .select(Dish::as_select())
        .load(conn)
}

pub fn list_dishes_by_filter(
    conn: &mut SqliteConnection,
    filter: DishFilter,
) -> QueryResult<Vec<Dish>> {
    dishes::table
        .filter(dishes::is_veg.eq(filter.is_veg))
        .select(Dish::as_select())
        .load(conn)
}

pub fn list_dishes_sorted_by_price(conn: &mut SqliteConnection) -> QueryResult<Vec<Dish>> {
    dishes::table
        .order(dishes::price.asc())
        .select(Dish::as_select())
        .load(conn)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{sample_dishes, sample_restaurants, TestDatabase};

    fn seeded() -> (TestDatabase, SqliteConnection) {
        let db = TestDatabase::seeded(&sample_restaurants(), &sample_dishes());
        let conn = db.connection();
        (db, conn)
    }

    #[test]
    fn test_list_restaurants_keeps_store_order() {
        let (_db, mut conn) = seeded();

        let results = list_restaurants(&mut conn).unwrap();

        assert_eq!(results, sample_restaurants());
    }

    #[test]
    fn test_get_restaurant() {
        let (_db, mut conn) = seeded();

        for restaurant in sample_restaurants() {
            let found = get_restaurant(&mut conn, restaurant.id).unwrap();
            assert_eq!(found, Some(restaurant));
        }
        assert_eq!(get_restaurant(&mut conn, 999).unwrap(), None);
    }

    #[test]
    fn test_list_restaurants_by_cuisine_is_case_sensitive() {
        let (_db, mut conn) = seeded();

        let italian = list_restaurants_by_cuisine(&mut conn, "Italian").unwrap();
        assert_eq!(
            italian.iter().map(|r| r.id).collect::<Vec<_>>(),
            vec![1, 3]
        );
        assert!(italian.iter().all(|r| r.cuisine == "Italian"));

        assert!(list_restaurants_by_cuisine(&mut conn, "italian")
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_cuisine_value_is_bound_not_interpolated() {
        let (_db, mut conn) = seeded();

        let results = list_restaurants_by_cuisine(&mut conn, "Italian' OR '1'='1").unwrap();

        assert!(results.is_empty());
        assert_eq!(list_restaurants(&mut conn).unwrap().len(), 4);
    }

    #[test]
    fn test_list_restaurants_by_filter() {
        let (_db, mut conn) = seeded();

        let results = list_restaurants_by_filter(
            &mut conn,
            RestaurantFilter {
                is_veg: true,
                has_outdoor_seating: true,
                is_luxury: false,
            },
        )
        .unwrap();
        assert_eq!(results.iter().map(|r| r.id).collect::<Vec<_>>(), vec![1]);

        let none = list_restaurants_by_filter(
            &mut conn,
            RestaurantFilter {
                is_veg: true,
                has_outdoor_seating: false,
                is_luxury: true,
            },
        )
        .unwrap();
        assert!(none.is_empty());
    }

    #[test]
    fn test_list_restaurants_sorted_by_rating() {
        let (_db, mut conn) = seeded();

        let results = list_restaurants_sorted_by_rating(&mut conn).unwrap();

        assert_eq!(results.len(), 4);
        assert!(results.windows(2).all(|w| w[0].rating >= w[1].rating));
        assert_eq!(results[0].id, 3);
    }

    #[test]
    fn test_get_dish_returns_collection() {
        let (_db, mut conn) = seeded();

        let found = get_dish(&mut conn, 2).unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Pad Thai");

        assert!(get_dish(&mut conn, 999).unwrap().is_empty());
    }

    #[test]
    fn test_list_dishes_by_filter() {
        let (_db, mut conn) = seeded();

        let veg = list_dishes_by_filter(&mut conn, DishFilter { is_veg: true }).unwrap();
        assert!(!veg.is_empty());
        assert!(veg.iter().all(|d| d.is_veg));

        let non_veg = list_dishes_by_filter(&mut conn, DishFilter { is_veg: false }).unwrap();
        assert_eq!(veg.len() + non_veg.len(), list_dishes(&mut conn).unwrap().len());
    }

    #[test]
    fn test_list_dishes_sorted_by_price() {
        let (_db, mut conn) = seeded();

        let results = list_dishes_sorted_by_price(&mut conn).unwrap();

        assert_eq!(results.len(), sample_dishes().len());
        assert!(results.windows(2).all(|w| w[0].price <= w[1].price));
    }

    #[test]
    fn test_empty_tables() {
        let db = TestDatabase::new();
        let mut conn = db.connection();

        assert!(list_restaurants(&mut conn).unwrap().is_empty());
        assert!(list_restaurants_sorted_by_rating(&mut conn).unwrap().is_empty());
        assert!(list_dishes(&mut conn).unwrap().is_empty());
        assert!(list_dishes_sorted_by_price(&mut conn).unwrap().is_empty());
    }
}
