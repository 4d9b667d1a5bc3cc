pub mod chart;
pub mod layer;
pub mod map;
pub mod symbology;
pub mod terrain;
pub mod vector;

pub use chart::ChartSpec;
pub use layer::*;
pub use map::{MapScene, build_map_scene, style_url};
