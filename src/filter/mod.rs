pub mod butterworth;
pub mod sos;

pub use butterworth::highpass;
pub use sos::{Section, SosFilter};
