pub mod cupcake;
pub mod user;

pub use sea_orm;
