//! Single-owner authorization gate
//!
//! The gate holds exactly one controller identity. Every privileged entry
//! point of the module calls [`AuthorizationGate::check`] before doing
//! anything else, and the identity only changes through
//! [`AuthorizationGate::transfer`].

use crate::events::OwnershipTransferred;
use crate::{Error, Identity, Result};
use tracing::{debug, info, warn};

/// Owner gate embedded in the transfer module
///
/// Invariant: `owner` is never the zero address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorizationGate {
    owner: Identity,
}

impl AuthorizationGate {
    /// Create a gate controlled by `initial_owner`
    ///
    /// # Errors
    /// * `InvalidIdentity` - If `initial_owner` is the zero address
    pub fn new(initial_owner: Identity) -> Result<Self> {
        ensure_non_zero(initial_owner)?;
        Ok(Self {
            owner: initial_owner,
        })
    }

    /// Current owner
    pub fn current(&self) -> Identity {
        self.owner
    }

    /// Verify that `caller` is the current owner
    ///
    /// # Errors
    /// * `Unauthorized` - If `caller` is anyone else
    pub fn check(&self, caller: Identity) -> Result<()> {
        if caller != self.owner {
            warn!(caller = %caller, owner = %self.owner, "Rejected non-owner caller");
            return Err(Error::Unauthorized {
                caller,
                owner: self.owner,
            });
        }
        debug!(caller = %caller, "Owner check passed");
        Ok(())
    }

    /// Hand control to `new_owner`
    ///
    /// The caller check runs first; a rejected call leaves the gate untouched.
    ///
    /// # Errors
    /// * `Unauthorized` - If `caller` is not the current owner
    /// * `InvalidIdentity` - If `new_owner` is the zero address
    pub fn transfer(
        &mut self,
        caller: Identity,
        new_owner: Identity,
    ) -> Result<OwnershipTransferred> {
        self.check(caller)?;
        ensure_non_zero(new_owner)?;

        let previous_owner = std::mem::replace(&mut self.owner, new_owner);

        info!(
            previous_owner = %previous_owner,
            new_owner = %new_owner,
            "Ownership transferred"
        );

        Ok(OwnershipTransferred {
            previous_owner,
            new_owner,
        })
    }
}

fn ensure_non_zero(identity: Identity) -> Result<()> {
    if identity.is_zero() {
        return Err(Error::InvalidIdentity(
            "owner cannot be the zero address".to_string(),
        ));
    }
    Ok(())
}
