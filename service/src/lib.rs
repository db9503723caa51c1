mod error;
mod mutation;
mod payload;
mod query;
mod validation;

pub use error::ServiceError;
pub use mutation::Mutation;
pub use payload::CupcakePayload;
pub use query::Query;
