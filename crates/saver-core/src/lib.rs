pub mod constants;
pub mod idle;
pub mod ribbon;
pub mod stroke;

pub use constants::*;
pub use idle::{IdleMonitor, Phase};
pub use ribbon::{Group, Point, RibbonField};
pub use stroke::{QuadSegment, RibbonStroke};
