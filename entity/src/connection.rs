use sea_orm::{Database, DatabaseConnection, DbErr};

pub const DATABASE_URL: &str = "DATABASE_URL";

pub fn database_url() -> Result<String, DbErr> {
    dotenv::dotenv().ok();
    std::env::var(DATABASE_URL).map_err(|_| DbErr::Custom(format!("{DATABASE_URL} is not set")))
}

pub async fn get_connection() -> Result<DatabaseConnection, DbErr> {
    Database::connect(database_url()?).await
}
