//! Error conversions between infrastructure libraries and ChronoDesk errors

pub mod conversions;
