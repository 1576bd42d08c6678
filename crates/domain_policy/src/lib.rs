//! Policy Read Model
//!
//! The claim wizard never administers policies; it only lists the caller's
//! policies, filters them by the claim type being raised, and displays them
//! for selection. This crate carries that read model and the `PolicyProvider`
//! port it is fetched through.

pub mod policy;
pub mod ports;

pub use policy::Policy;
pub use ports::{PolicyProvider, InMemoryPolicyProvider};
