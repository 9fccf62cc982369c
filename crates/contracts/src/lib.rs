//! Wire types of the public art catalog API shared by the frontend.

pub mod catalog;
