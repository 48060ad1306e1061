pub mod health;
pub mod space;
pub mod vendor;
