pub mod error;
pub mod geometry;
pub mod light;
pub mod obstacle;
pub mod ray;
pub mod utils;

pub use glam;
pub use log;

#[macro_export]
macro_rules! error_continue {
    ($($arg:tt)+) => { { $crate::log::error!($($arg)+); continue; } };
}
