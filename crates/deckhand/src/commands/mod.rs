pub mod check;
pub mod deploy;
pub mod params;
pub mod validate;
