use migration::Migrator;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use sea_orm_migration::{MigratorTrait, SchemaManager};

async fn memory_db() -> DatabaseConnection {
    let mut opt = ConnectOptions::new("sqlite::memory:".to_owned());
    opt.max_connections(1).min_connections(1);
    Database::connect(opt).await.unwrap()
}

#[tokio::test]
async fn creates_all_tables() {
    let db = memory_db().await;
    Migrator::up(&db, None).await.unwrap();

    let manager = SchemaManager::new(&db);
    for table in ["venues", "artists", "shows"] {
        assert!(manager.has_table(table).await.unwrap(), "missing {table}");
    }
}

#[tokio::test]
async fn down_drops_tables_and_up_is_repeatable() {
    let db = memory_db().await;
    Migrator::up(&db, None).await.unwrap();
    Migrator::down(&db, None).await.unwrap();

    let manager = SchemaManager::new(&db);
    assert!(!manager.has_table("shows").await.unwrap());
    assert!(!manager.has_table("venues").await.unwrap());

    Migrator::up(&db, None).await.unwrap();
    assert!(manager.has_table("shows").await.unwrap());
}
