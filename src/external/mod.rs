//! Outbound HTTP plumbing shared by notification providers

pub mod client;

pub use client::HTTP_CLIENT;
