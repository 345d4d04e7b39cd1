//! Visual theme: color constants and global CSS.

pub mod colors;
mod styles;

pub use styles::GLOBAL_STYLES;
