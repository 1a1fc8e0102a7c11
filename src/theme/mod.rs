//! Theme for SnapSimp.

mod styles;

pub use styles::GLOBAL_STYLES;
