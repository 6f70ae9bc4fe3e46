//! # Transfer Module Core
//!
//! Owner-gated Safe module that forwards native value transfers out of
//! custodial smart accounts.
//!
//! ## Architecture
//!
//! This crate provides:
//! - **Authorization Gate**: exactly one owner, transferable only by that owner
//! - **Transfer Relay**: builds a plain-call [`TransferRequest`] and submits it to
//!   the custodial account's module entry point
//! - **Custodial Boundary**: the [`CustodialAccount`] trait, a Safe calldata codec,
//!   and an in-memory Safe for tests and local development
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use transfer_module_core::{ModuleConfig, TransferModule};
//! use transfer_module_core::custodial::MemorySafe;
//!
//! let mut module = TransferModule::new(module_addr, owner, ModuleConfig::default())?;
//!
//! let safe = MemorySafe::with_balance(safe_addr, U256::from(1_000));
//! safe.enable_module(module.address());
//!
//! // Only the owner may forward transfers
//! module.transfer(owner, &safe, recipient, U256::from(100))?;
//!
//! // Hand control to someone else
//! module.transfer_ownership(owner, new_owner)?;
//! ```
//!
//! ## Security Model
//!
//! - Every privileged call checks the caller before any side effect
//! - The relay can only issue standard calls with an empty payload; delegate
//!   calls are unreachable through the public surface
//! - The custodial account alone decides whether this module may act for it
//! - By default a rejected request fails the whole operation
//!   ([`FailurePolicy::Abort`])

pub mod config;
pub mod custodial;
pub mod error;
pub mod events;
pub mod gate;
pub mod module;
pub mod types;

pub use config::{FailurePolicy, ModuleConfig};
pub use custodial::CustodialAccount;
pub use error::{Error, Result};
pub use events::{ModuleEvent, OwnershipTransferred, TransferForwarded};
pub use gate::AuthorizationGate;
pub use module::TransferModule;
pub use types::{Amount, Identity, OperationKind, TransferRequest};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
