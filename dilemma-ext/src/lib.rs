pub mod gateways;
pub mod ranking;
