//! Application layer - Use cases and the ports they depend on
//!
//! This layer contains:
//! - Ports: inbound use-case traits and outbound storage traits
//! - DTOs: transport shapes exchanged with the HTTP layer
//! - Services: the settings synchronizer and its gateway

pub mod dto;
pub mod ports;
pub mod services;
