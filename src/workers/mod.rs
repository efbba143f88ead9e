pub mod core;
pub mod poller;

pub use poller::Poller;
