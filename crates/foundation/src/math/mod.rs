pub mod along;
pub mod camera;
pub mod geodesy;
pub mod lonlat;

pub use along::*;
pub use camera::*;
pub use geodesy::*;
pub use lonlat::*;
