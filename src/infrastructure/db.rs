use sea_orm::{ConnectionTrait, Database, DatabaseConnection, DbErr, Statement};

// Children before parent: sqlx enables foreign keys on SQLite connections
const DROP_TABLES: [&str; 4] = [
    "DROP TABLE IF EXISTS publications",
    "DROP TABLE IF EXISTS teaching",
    "DROP TABLE IF EXISTS contact",
    "DROP TABLE IF EXISTS faculty",
];

const CREATE_TABLES: [&str; 4] = [
    r#"
    CREATE TABLE IF NOT EXISTS faculty (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        faculty_type TEXT,
        education TEXT,
        biography TEXT,
        specialization TEXT,
        profile_url TEXT
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS contact (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        faculty_id INTEGER,
        phone TEXT,
        email TEXT,
        address TEXT,
        FOREIGN KEY (faculty_id) REFERENCES faculty(id)
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS teaching (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        faculty_id INTEGER,
        subject TEXT,
        FOREIGN KEY (faculty_id) REFERENCES faculty(id)
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS publications (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        faculty_id INTEGER,
        publication TEXT,
        FOREIGN KEY (faculty_id) REFERENCES faculty(id)
    )
    "#,
];

/// Connect and make sure the four tables exist, so a fresh store reads as empty.
pub async fn init_db(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    let db = Database::connect(database_url).await?;
    create_tables(&db).await?;
    Ok(db)
}

pub async fn create_tables<C: ConnectionTrait>(db: &C) -> Result<(), DbErr> {
    for sql in CREATE_TABLES {
        db.execute(Statement::from_string(db.get_database_backend(), sql.to_owned()))
            .await?;
    }
    Ok(())
}

/// Drop and recreate every table. Run inside the load transaction.
pub async fn rebuild_schema<C: ConnectionTrait>(db: &C) -> Result<(), DbErr> {
    for sql in DROP_TABLES {
        db.execute(Statement::from_string(db.get_database_backend(), sql.to_owned()))
            .await?;
    }
    create_tables(db).await
}
