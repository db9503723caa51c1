use ::entity::cupcake;
use chrono::Utc;
use sea_orm::*;

use crate::{error::ServiceError, payload::CupcakePayload, query::Query, validation};

pub struct Mutation;

impl Mutation {
    pub async fn create_cupcake(
        db: &DbConn,
        payload: CupcakePayload,
    ) -> Result<cupcake::Model, ServiceError> {
        validation::check_payload(db, &payload, None).await?;

        let created_by = payload.created_by;
        let mut cupcake = fill(cupcake::ActiveModel { ..Default::default() }, payload);
        if let Some(user_id) = created_by {
            cupcake.created_by = Set(Some(user_id));
        }
        Ok(cupcake.insert(db).await?)
    }

    pub async fn update_cupcake(
        db: &DbConn,
        id: i32,
        payload: CupcakePayload,
    ) -> Result<cupcake::Model, ServiceError> {
        let existing = Query::find_cupcake_by_id(db, id)
            .await?
            .ok_or(ServiceError::NotFound)?;
        validation::check_payload(db, &payload, Some(id)).await?;

        let updated_by = payload.updated_by;
        let mut cupcake = fill(existing.into_active_model(), payload);
        if let Some(user_id) = updated_by {
            cupcake.updated_by = Set(Some(user_id));
        }
        Ok(cupcake.update(db).await?)
    }

    /// Soft delete: stamps `deleted_at` and keeps the row. Already-deleted
    /// records fall out of the lookup and surface as `NotFound`.
    pub async fn delete_cupcake(db: &DbConn, id: i32) -> Result<(), ServiceError> {
        let existing = Query::find_cupcake_by_id(db, id)
            .await?
            .ok_or(ServiceError::NotFound)?;

        let mut cupcake = existing.into_active_model();
        cupcake.deleted_at = Set(Some(Utc::now()));
        cupcake.update(db).await?;
        Ok(())
    }
}

/// Copies the fields present in the payload onto the active model; absent
/// fields stay untouched. `created_by` / `updated_by` are handled at the
/// call sites since each write allows a different one.
fn fill(mut cupcake: cupcake::ActiveModel, payload: CupcakePayload) -> cupcake::ActiveModel {
    if let Some(title) = payload.title {
        cupcake.title = Set(title);
    }
    if let Some(author) = payload.author {
        cupcake.author = Set(author);
    }
    if let Some(publisher) = payload.publisher {
        cupcake.publisher = Set(Some(publisher));
    }
    if let Some(publication_year) = payload.publication_year {
        cupcake.publication_year = Set(Some(publication_year));
    }
    if let Some(cover) = payload.cover {
        cupcake.cover = Set(Some(cover));
    }
    if let Some(description) = payload.description {
        cupcake.description = Set(Some(description));
    }
    if let Some(price) = payload.price {
        cupcake.price = Set(Some(price));
    }
    cupcake
}
