use ::entity::{cupcake, cupcake::Entity as Cupcake};
use sea_orm::*;

pub struct Query;

impl Query {
    /// Select scoped to live rows. Every default read path goes through
    /// this, so soft-deleted records stay invisible.
    pub(crate) fn live() -> Select<Cupcake> {
        Cupcake::find().filter(cupcake::Column::DeletedAt.is_null())
    }

    pub async fn list_cupcakes(db: &DbConn) -> Result<Vec<cupcake::Model>, DbErr> {
        Self::live().order_by_asc(cupcake::Column::Id).all(db).await
    }

    pub async fn find_cupcake_by_id(
        db: &DbConn,
        id: i32,
    ) -> Result<Option<cupcake::Model>, DbErr> {
        Self::live()
            .filter(cupcake::Column::Id.eq(id))
            .one(db)
            .await
    }

    /// Explicit override of the live-row scope; soft-deleted rows included.
    pub async fn find_cupcake_by_id_with_deleted(
        db: &DbConn,
        id: i32,
    ) -> Result<Option<cupcake::Model>, DbErr> {
        Cupcake::find_by_id(id).one(db).await
    }
}
