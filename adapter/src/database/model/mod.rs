pub mod space;
pub mod vendor;

// INSERT ... RETURNING id の結果
#[derive(sqlx::FromRow)]
pub struct InsertedRow {
    pub id: i64,
}
