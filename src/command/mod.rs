pub mod xcorr;

pub use xcorr::Xcorr;
pub use xcorr::XcorrParams;
