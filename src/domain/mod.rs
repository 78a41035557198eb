pub mod category;
pub mod money;
pub mod payment;
pub mod ports;
pub mod recap;
pub mod region;
pub mod serial;
