//! Throwaway SQLite databases for tests.

use diesel::prelude::*;
use diesel::{insert_into, SqliteConnection};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use tempfile::TempDir;

use crate::models::{Dish, Restaurant};
use crate::schema::{dishes, restaurants};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("./migrations");

/// A database file inside a temporary directory, removed on drop.
pub struct TestDatabase {
    _dir: TempDir,
    url: String,
}

impl TestDatabase {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let url = dir
            .path()
            .join("foodie.sqlite")
            .to_str()
            .expect("Temp path is not utf-8")
            .to_string();

        let db = Self { _dir: dir, url };
        let mut conn = db.connection();
        conn.run_pending_migrations(MIGRATIONS)
            .expect("Failed to run migrations");
        db
    }

    pub fn seeded(restaurant_rows: &[Restaurant], dish_rows: &[Dish]) -> Self {
        let db = Self::new();
        let conn = &mut db.connection();
        insert_into(restaurants::table)
            .values(restaurant_rows)
            .execute(conn)
            .expect("Failed to seed restaurants");
        insert_into(dishes::table)
            .values(dish_rows)
            .execute(conn)
            .expect("Failed to seed dishes");
        db
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Runs raw SQL, e.g. to break the schema under a live `Store`.
    pub fn execute(&self, sql: &str) {
        diesel::sql_query(sql)
            .execute(&mut self.connection())
            .unwrap_or_else(|e| panic!("Failed to execute {sql}: {e}"));
    }

    pub fn connection(&self) -> SqliteConnection {
        SqliteConnection::establish(&self.url)
            .unwrap_or_else(|_| panic!("Error connecting to {}", self.url))
    }
}

impl Default for TestDatabase {
    fn default() -> Self {
        Self::new()
    }
}

pub fn sample_restaurants() -> Vec<Restaurant> {
    vec![
        Restaurant {
            id: 1,
            name: "Luigi's Trattoria".to_string(),
            cuisine: "Italian".to_string(),
            rating: 4.5,
            is_veg: true,
            has_outdoor_seating: true,
            is_luxury: false,
        },
        Restaurant {
            id: 2,
            name: "Bangkok Street".to_string(),
            cuisine: "Thai".to_string(),
            rating: 3.9,
            is_veg: false,
            has_outdoor_seating: true,
            is_luxury: false,
        },
        Restaurant {
            id: 3,
            name: "Villa Toscana".to_string(),
            cuisine: "Italian".to_string(),
            rating: 4.8,
            is_veg: false,
            has_outdoor_seating: false,
            is_luxury: true,
        },
        Restaurant {
            id: 4,
            name: "Green Bowl".to_string(),
            cuisine: "Indian".to_string(),
            rating: 4.2,
            is_veg: true,
            has_outdoor_seating: false,
            is_luxury: false,
        },
    ]
}

pub fn sample_dishes() -> Vec<Dish> {
    vec![
        Dish {
            id: 1,
            name: "Margherita Pizza".to_string(),
            price: 12.5,
            is_veg: true,
        },
        Dish {
            id: 2,
            name: "Pad Thai".to_string(),
            price: 9.0,
            is_veg: false,
        },
        Dish {
            id: 3,
            name: "Paneer Tikka".to_string(),
            price: 8.0,
            is_veg: true,
        },
        Dish {
            id: 4,
            name: "Tiramisu".to_string(),
            price: 6.5,
            is_veg: true,
        },
    ]
}
