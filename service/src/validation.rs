use ::entity::cupcake;
use sea_orm::*;

use crate::{error::ServiceError, payload::CupcakePayload, query::Query};

const AUTHOR_MAX_LEN: usize = 100;

/// Gate for create and update. Rules run in order and the first failure
/// aborts the write: title present, title unique among live rows, author
/// present, author within length.
///
/// `exclude_id` is the record being updated, so a record keeps passing the
/// uniqueness probe with its own title.
pub(crate) async fn check_payload(
    db: &DbConn,
    payload: &CupcakePayload,
    exclude_id: Option<i32>,
) -> Result<(), ServiceError> {
    let title = match payload.title.as_deref() {
        Some(title) if !title.is_empty() => title,
        _ => {
            return Err(ServiceError::Validation(
                "The title field is required.".to_owned(),
            ))
        }
    };
    if title_taken(db, title, exclude_id).await? {
        return Err(ServiceError::Validation(
            "The title has already been taken.".to_owned(),
        ));
    }
    let author = match payload.author.as_deref() {
        Some(author) if !author.is_empty() => author,
        _ => {
            return Err(ServiceError::Validation(
                "The author field is required.".to_owned(),
            ))
        }
    };
    if author.chars().count() > AUTHOR_MAX_LEN {
        return Err(ServiceError::Validation(format!(
            "The author may not be greater than {AUTHOR_MAX_LEN} characters."
        )));
    }
    Ok(())
}

/// Uniqueness probe, scoped to live rows: a soft-deleted title is free to
/// reuse, matching the read scope.
async fn title_taken(db: &DbConn, title: &str, exclude_id: Option<i32>) -> Result<bool, DbErr> {
    let mut select = Query::live().filter(cupcake::Column::Title.eq(title));
    if let Some(id) = exclude_id {
        select = select.filter(cupcake::Column::Id.ne(id));
    }
    Ok(select.count(db).await? > 0)
}
