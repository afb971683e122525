pub mod cluster;
pub mod overlap;
pub mod palette;
pub mod union_find;
