use serde::Deserialize;

/// The allow-listed fields a caller may write through create and update.
///
/// `None` means the field was absent from the request and the stored value
/// is left untouched. Unknown JSON keys are dropped during deserialization
/// and can never reach the table.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct CupcakePayload {
    pub title: Option<String>,
    pub author: Option<String>,
    pub publisher: Option<String>,
    pub publication_year: Option<String>,
    pub cover: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub created_by: Option<i32>,
    pub updated_by: Option<i32>,
}
