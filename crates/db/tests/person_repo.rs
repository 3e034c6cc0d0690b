//! Integration tests for the `users` table repository.
//!
//! Each test gets a fresh, empty database from `#[sqlx::test]`.

use assert_matches::assert_matches;
use duckpg_db::models::person::Person;
use duckpg_db::repositories::person_repo::{SEED_NAME, SEED_ROWS};
use duckpg_db::repositories::PersonRepo;
use futures::TryStreamExt;
use sqlx::pool::PoolConnection;
use sqlx::postgres::{PgConnection, PgRow};
use sqlx::Postgres;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn read_all(conn: &mut PgConnection) -> Vec<PgRow> {
    PersonRepo::stream_all(conn)
        .try_collect()
        .await
        .expect("select should succeed")
}

async fn read_names(conn: &mut PgConnection) -> Vec<String> {
    read_all(conn)
        .await
        .iter()
        .map(|row| Person::decode(row).expect("seeded rows decode").name)
        .collect()
}

// ---------------------------------------------------------------------------
// Seeding
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = false)]
async fn seed_inserts_ten_identical_rows(mut conn: PoolConnection<Postgres>) {
    PersonRepo::create_table(&mut conn).await.unwrap();

    let inserted = PersonRepo::seed(&mut conn).await.unwrap();
    assert_eq!(inserted, SEED_ROWS as u64);

    let count = PersonRepo::count(&mut conn).await.unwrap();
    assert_eq!(count, SEED_ROWS);

    let names = read_names(&mut conn).await;
    assert_eq!(names.len(), 10);
    assert!(names.iter().all(|name| name == SEED_NAME));
}

#[sqlx::test(migrations = false)]
async fn seed_without_table_fails(mut conn: PoolConnection<Postgres>) {
    let result = PersonRepo::seed(&mut conn).await;
    assert_matches!(result, Err(sqlx::Error::Database(_)));
}

// ---------------------------------------------------------------------------
// Schema creation
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = false)]
async fn create_table_twice_fails(mut conn: PoolConnection<Postgres>) {
    PersonRepo::create_table(&mut conn).await.unwrap();

    let second = PersonRepo::create_table(&mut conn).await;
    assert_matches!(second, Err(sqlx::Error::Database(_)));
}

#[sqlx::test(migrations = false)]
async fn new_table_is_empty(mut conn: PoolConnection<Postgres>) {
    PersonRepo::create_table(&mut conn).await.unwrap();

    assert_eq!(PersonRepo::count(&mut conn).await.unwrap(), 0);
    assert!(read_all(&mut conn).await.is_empty());
}

// ---------------------------------------------------------------------------
// Reading
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = false)]
async fn repeated_reads_return_same_rows(mut conn: PoolConnection<Postgres>) {
    PersonRepo::create_table(&mut conn).await.unwrap();
    PersonRepo::seed(&mut conn).await.unwrap();

    for _ in 0..3 {
        let names = read_names(&mut conn).await;
        assert_eq!(names, vec![SEED_NAME.to_string(); 10]);
    }
}

#[sqlx::test(migrations = false)]
async fn null_name_fails_to_decode(mut conn: PoolConnection<Postgres>) {
    PersonRepo::create_table(&mut conn).await.unwrap();
    sqlx::query("INSERT INTO users (name) VALUES (NULL)")
        .execute(&mut *conn)
        .await
        .unwrap();

    let rows = read_all(&mut conn).await;
    assert_eq!(rows.len(), 1);
    assert_matches!(
        Person::decode(&rows[0]),
        Err(sqlx::Error::ColumnDecode { .. })
    );
}

#[sqlx::test(migrations = false)]
async fn select_without_table_fails(mut conn: PoolConnection<Postgres>) {
    let result: Result<Vec<PgRow>, _> = PersonRepo::stream_all(&mut conn).try_collect().await;
    assert_matches!(result, Err(sqlx::Error::Database(_)));
}
