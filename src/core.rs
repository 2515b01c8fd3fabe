pub mod bus;
pub mod map;
pub mod query;
pub mod registry;
pub mod seed;
pub mod sensor;
pub mod simulator;
