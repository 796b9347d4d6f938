pub mod pvgis;
pub mod response;

pub use pvgis::*;
pub use response::*;
