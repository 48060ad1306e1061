use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    id::VendorId,
    vendor::{
        event::{CreateVendor, DeleteVendor, UpdateVendor, UpdateVendorSpaces},
        CreatedVendor, SpaceIds, Vendor,
    },
};
use kernel::repository::vendor::VendorRepository;
use shared::error::{AppError, AppResult};
use sqlx::types::Json;

use crate::database::{
    model::{
        vendor::{VendorRow, VendorSpaceIdsRow},
        InsertedRow,
    },
    ConnectionPool,
};

#[derive(new)]
pub struct VendorRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl VendorRepository for VendorRepositoryImpl {
    async fn create(&self, event: CreateVendor) -> AppResult<CreatedVendor> {
        let vendor_id = VendorId::new();
        let row: InsertedRow = sqlx::query_as(
            r#"
                INSERT INTO vendors
                (vendor_id, name, firm_name, phone_number, email, gst_number, address, space_ids)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
                RETURNING id
            "#,
        )
        .bind(&vendor_id)
        .bind(&event.name)
        .bind(&event.firm_name)
        .bind(&event.phone_number)
        .bind(&event.email)
        .bind(&event.gst_number)
        .bind(&event.address)
        .bind(Json(&event.space_ids))
        .fetch_one(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        tracing::debug!(vendor_id = %vendor_id, id = row.id, "vendor created");

        Ok(CreatedVendor {
            id: row.id,
            vendor_id,
        })
    }

    async fn find_all(&self) -> AppResult<Vec<Vendor>> {
        sqlx::query_as::<_, VendorRow>(
            r#"
                SELECT
                    id,
                    vendor_id,
                    name,
                    firm_name,
                    phone_number,
                    email,
                    gst_number,
                    address,
                    space_ids,
                    created_at
                FROM vendors
            "#,
        )
        .fetch_all(self.db.inner_ref())
        .await
        .map(|rows| rows.into_iter().map(Vendor::from).collect())
        .map_err(AppError::SpecificOperationError)
    }

    async fn find_by_id(&self, vendor_id: &VendorId) -> AppResult<Option<Vendor>> {
        sqlx::query_as::<_, VendorRow>(
            r#"
                SELECT
                    id,
                    vendor_id,
                    name,
                    firm_name,
                    phone_number,
                    email,
                    gst_number,
                    address,
                    space_ids,
                    created_at
                FROM vendors
                WHERE vendor_id = $1
            "#,
        )
        .bind(vendor_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map(|row| row.map(Vendor::from))
        .map_err(AppError::SpecificOperationError)
    }

    async fn update(&self, event: UpdateVendor) -> AppResult<()> {
        let res = sqlx::query(
            r#"
                UPDATE vendors
                SET
                    name = $1,
                    firm_name = $2,
                    phone_number = $3,
                    email = $4,
                    gst_number = $5,
                    address = $6,
                    space_ids = $7
                WHERE vendor_id = $8
            "#,
        )
        .bind(&event.name)
        .bind(&event.firm_name)
        .bind(&event.phone_number)
        .bind(&event.email)
        .bind(&event.gst_number)
        .bind(&event.address)
        .bind(Json(&event.space_ids))
        .bind(&event.vendor_id)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;
        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound("Vendor not found".into()));
        }

        Ok(())
    }

    async fn delete(&self, event: DeleteVendor) -> AppResult<()> {
        let res = sqlx::query(
            r#"
                DELETE FROM vendors
                WHERE vendor_id = $1
            "#,
        )
        .bind(&event.vendor_id)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;
        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound("Vendor not found".into()));
        }

        Ok(())
    }

    async fn update_space_ids(&self, event: UpdateVendorSpaces) -> AppResult<SpaceIds> {
        let UpdateVendorSpaces { vendor_id, change } = event;
        let mut tx = self.db.begin().await?;

        // 行ロックを取ってから現在のスペース ID 一覧を読み込む
        let row: Option<VendorSpaceIdsRow> = sqlx::query_as(
            r#"
                SELECT space_ids
                FROM vendors
                WHERE vendor_id = $1
                FOR UPDATE
            "#,
        )
        .bind(&vendor_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        let Some(VendorSpaceIdsRow {
            space_ids: Json(mut space_ids),
        }) = row
        else {
            return Err(AppError::EntityNotFound("Vendor not found".into()));
        };

        change.apply(&mut space_ids);

        let res = sqlx::query(
            r#"
                UPDATE vendors
                SET space_ids = $1
                WHERE vendor_id = $2
            "#,
        )
        .bind(Json(&space_ids))
        .bind(&vendor_id)
        .execute(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "No vendor space_ids has been updated".into(),
            ));
        }

        tx.commit().await.map_err(AppError::TransactionError)?;

        Ok(space_ids)
    }
}
