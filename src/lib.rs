pub mod map;
pub mod region;
pub mod tags;
