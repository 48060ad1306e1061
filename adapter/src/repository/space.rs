use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    id::SpaceId,
    space::{
        event::{CreateSpace, DeleteSpace, UpdateAvailability, UpdateSpace},
        Availability, CreatedSpace, Space,
    },
};
use kernel::repository::space::SpaceRepository;
use shared::error::{AppError, AppResult};
use sqlx::types::Json;

use crate::database::{
    model::{
        space::{SpaceAvailabilityRow, SpaceRow},
        InsertedRow,
    },
    ConnectionPool,
};

#[derive(new)]
pub struct SpaceRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl SpaceRepository for SpaceRepositoryImpl {
    async fn create(&self, event: CreateSpace) -> AppResult<CreatedSpace> {
        let space_id = SpaceId::new();
        let row: InsertedRow = sqlx::query_as(
            r#"
                INSERT INTO spaces
                (space_id, type, media, price, description, pincode, google_maps_url, availability)
                VALUES ($1, $2, $3, $4::NUMERIC, $5, $6, $7, $8)
                RETURNING id
            "#,
        )
        .bind(&space_id)
        .bind(&event.space_type)
        .bind(Json(&event.media))
        .bind(event.price.to_string())
        .bind(&event.description)
        .bind(&event.pincode)
        .bind(&event.google_maps_url)
        .bind(Json(&event.availability))
        .fetch_one(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        tracing::debug!(space_id = %space_id, id = row.id, "space created");

        Ok(CreatedSpace {
            id: row.id,
            space_id,
        })
    }

    async fn find_all(&self) -> AppResult<Vec<Space>> {
        let rows: Vec<SpaceRow> = sqlx::query_as(
            r#"
                SELECT
                    id,
                    space_id,
                    type AS space_type,
                    media,
                    price::TEXT AS price,
                    description,
                    pincode,
                    google_maps_url,
                    availability,
                    created_at
                FROM spaces
            "#,
        )
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        rows.into_iter().map(Space::try_from).collect()
    }

    async fn find_by_id(&self, space_id: &SpaceId) -> AppResult<Option<Space>> {
        let row: Option<SpaceRow> = sqlx::query_as(
            r#"
                SELECT
                    id,
                    space_id,
                    type AS space_type,
                    media,
                    price::TEXT AS price,
                    description,
                    pincode,
                    google_maps_url,
                    availability,
                    created_at
                FROM spaces
                WHERE space_id = $1
            "#,
        )
        .bind(space_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        row.map(Space::try_from).transpose()
    }

    async fn update(&self, event: UpdateSpace) -> AppResult<()> {
        let res = sqlx::query(
            r#"
                UPDATE spaces
                SET
                    type = $1,
                    media = $2,
                    price = $3::NUMERIC,
                    description = $4,
                    pincode = $5,
                    google_maps_url = $6,
                    availability = $7
                WHERE space_id = $8
            "#,
        )
        .bind(&event.space_type)
        .bind(Json(&event.media))
        .bind(event.price.to_string())
        .bind(&event.description)
        .bind(&event.pincode)
        .bind(&event.google_maps_url)
        .bind(Json(&event.availability))
        .bind(&event.space_id)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;
        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound("Space not found".into()));
        }

        Ok(())
    }

    async fn delete(&self, event: DeleteSpace) -> AppResult<()> {
        let res = sqlx::query(
            r#"
                DELETE FROM spaces
                WHERE space_id = $1
            "#,
        )
        .bind(&event.space_id)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;
        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound("Space not found".into()));
        }

        Ok(())
    }

    async fn find_availability(&self, space_id: &SpaceId) -> AppResult<Option<Availability>> {
        let row: Option<SpaceAvailabilityRow> = sqlx::query_as(
            r#"
                SELECT availability
                FROM spaces
                WHERE space_id = $1
            "#,
        )
        .bind(space_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(row.map(|row| row.availability.0))
    }

    async fn update_availability(&self, event: UpdateAvailability) -> AppResult<Availability> {
        let UpdateAvailability { space_id, change } = event;
        let mut tx = self.db.begin().await?;

        // 同じスペースへの同時更新で変更が失われないよう、対象行をロックしてから読み込む
        let row: Option<SpaceAvailabilityRow> = sqlx::query_as(
            r#"
                SELECT availability
                FROM spaces
                WHERE space_id = $1
                FOR UPDATE
            "#,
        )
        .bind(&space_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        let Some(SpaceAvailabilityRow {
            availability: Json(mut availability),
        }) = row
        else {
            return Err(AppError::EntityNotFound("Space not found".into()));
        };

        change.apply(&mut availability);

        let res = sqlx::query(
            r#"
                UPDATE spaces
                SET availability = $1
                WHERE space_id = $2
            "#,
        )
        .bind(Json(&availability))
        .bind(&space_id)
        .execute(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "No space availability has been updated".into(),
            ));
        }

        tx.commit().await.map_err(AppError::TransactionError)?;

        Ok(availability)
    }
}
