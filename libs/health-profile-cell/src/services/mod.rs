pub mod profile;
pub mod vitals;
