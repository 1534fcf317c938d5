pub mod consts;
pub mod engine;
pub mod error;
pub mod logging;
pub mod picker;
pub mod responses;
pub mod session;
