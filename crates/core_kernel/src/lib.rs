//! Core Kernel - Foundational types and utilities for the claim intake system
//!
//! This crate provides the fundamental building blocks used across all domain modules:
//! - Strongly-typed identifiers and the document-category slug
//! - Money types for user-entered amounts with precise decimal arithmetic
//! - Port abstractions shared by all external collaborators

pub mod money;
pub mod identifiers;
pub mod claim_type;
pub mod ports;

pub use money::{Money, Currency, MoneyError};
pub use identifiers::{UserId, PolicyId, ApplicationId, FileId, DocumentCategory};
pub use claim_type::{ClaimType, UnknownClaimType};
pub use ports::{
    PortError, DomainPort, OperationMetadata,
    HealthCheckable, HealthCheckResult, AdapterHealth,
};
