//! Infrastructure Adapters
//!
//! 六边形架构的适配器实现

pub mod transport;
pub mod ui;

pub use transport::*;
pub use ui::*;
