//! Custodial account boundary
//!
//! The transfer module never holds funds. It asks a custodial account (a
//! Safe-style smart account that has registered the module as a forwarder)
//! to move value on its behalf. The `CustodialAccount` trait is the whole
//! contract between the two: the module builds a [`TransferRequest`], the
//! account decides whether to execute it.
//!
//! Implementations:
//! - [`MemorySafe`] - in-memory account for tests and local development
//!
//! Accounts that talk to a deployed Safe can encode the request with
//! [`abi::encode_exec_transaction_from_module`].

use crate::{Identity, Result, TransferRequest};

pub mod abi;
pub mod memory;

pub use memory::MemorySafe;

/// Execution entry point of a custodial account
///
/// Return values:
/// - `Ok(true)` - the request was executed
/// - `Ok(false)` - the account declined or the inner call failed
/// - `Err(_)` - the account reverted (e.g. the forwarder is not registered)
///
/// The call is synchronous: it must not return before the account has
/// finished executing (or rejecting) the request.
pub trait CustodialAccount: Send + Sync {
    /// Address of the custodial account
    fn address(&self) -> Identity;

    /// Execute `request` on behalf of `forwarder`
    ///
    /// The account alone decides whether `forwarder` is allowed to act for it.
    fn execute_from_module(&self, forwarder: Identity, request: &TransferRequest) -> Result<bool>;
}

impl<T: CustodialAccount + ?Sized> CustodialAccount for &T {
    fn address(&self) -> Identity {
        (**self).address()
    }

    fn execute_from_module(&self, forwarder: Identity, request: &TransferRequest) -> Result<bool> {
        (**self).execute_from_module(forwarder, request)
    }
}

impl<T: CustodialAccount + ?Sized> CustodialAccount for std::sync::Arc<T> {
    fn address(&self) -> Identity {
        (**self).address()
    }

    fn execute_from_module(&self, forwarder: Identity, request: &TransferRequest) -> Result<bool> {
        (**self).execute_from_module(forwarder, request)
    }
}
