//! Serial link implementations

pub mod bitbang;

pub use bitbang::BitBangTransport;
