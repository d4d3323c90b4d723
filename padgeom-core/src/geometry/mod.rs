pub mod bbox;
pub mod coord;
pub mod polygon;
pub mod vertex;
