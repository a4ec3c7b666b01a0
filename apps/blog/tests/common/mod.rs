//! Shared fixture for the integration tests: an in-memory database with
//! two authors.

use blog::auth::password::MIN_COST;
use blog::domain::repositories::UserRepository;
use blog::domain::user::{User, Username};
use blog::infrastructure::database;
use blog::infrastructure::repositories::SqliteUserRepository;
use sqlx::SqlitePool;

pub struct TestApp {
    pub pool: SqlitePool,
    pub user_trump: User,
    pub user_obama: User,
}

/// Fresh database with the two fixture users
pub async fn setup() -> TestApp {
    let pool = database::connect_in_memory()
        .await
        .expect("Failed to open test database");

    let user_repo = SqliteUserRepository::with_hash_cost(pool.clone(), MIN_COST);
    let user_trump = user_repo
        .create_user(Username::new("trump").unwrap(), "somepassword")
        .await
        .expect("Failed to create user trump");
    let user_obama = user_repo
        .create_user(Username::new("obama").unwrap(), "somepassword")
        .await
        .expect("Failed to create user obama");

    TestApp {
        pool,
        user_trump,
        user_obama,
    }
}
