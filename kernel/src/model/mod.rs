pub mod id;
pub mod price;
pub mod space;
pub mod vendor;
