//! Owner-gated transfer module
//!
//! [`TransferModule`] composes the [`AuthorizationGate`] with the delegated
//! transfer relay. The module is stateless with respect to funds: it builds
//! a [`TransferRequest`] and asks the custodial account to execute it.
//!
//! ## Re-entrancy
//!
//! `transfer` holds `&mut self` for the whole call, including the nested
//! call into the custodial account, so the account cannot re-enter the same
//! module instance. The audit event is the only state written after the
//! nested call returns.

use crate::config::ModuleConfig;
use crate::custodial::CustodialAccount;
use crate::events::{EventLog, ModuleEvent, TransferForwarded};
use crate::gate::AuthorizationGate;
use crate::{Amount, Error, Identity, Result, TransferRequest};
use tracing::{debug, info, instrument, warn};

/// Safe module that lets a single owner move funds out of custodial accounts
#[derive(Debug, Clone)]
pub struct TransferModule {
    /// Address custodial accounts see as the forwarder
    address: Identity,
    gate: AuthorizationGate,
    config: ModuleConfig,
    events: EventLog,
}

impl TransferModule {
    /// Create a module at `address` owned by `deployer`
    ///
    /// # Errors
    /// * `InvalidIdentity` - If `deployer` is the zero address
    /// * `InvalidConfig` - If `config` fails validation
    pub fn new(address: Identity, deployer: Identity, config: ModuleConfig) -> Result<Self> {
        config.validate()?;
        let gate = AuthorizationGate::new(deployer)?;

        info!(
            module = %address,
            owner = %deployer,
            name = %config.name,
            policy = ?config.failure_policy,
            "Transfer module created"
        );

        Ok(Self {
            address,
            gate,
            config,
            events: EventLog::new(),
        })
    }

    /// Module address
    pub fn address(&self) -> Identity {
        self.address
    }

    /// Current owner
    pub fn owner(&self) -> Identity {
        self.gate.current()
    }

    pub fn config(&self) -> &ModuleConfig {
        &self.config
    }

    /// Events committed so far
    pub fn events(&self) -> &[ModuleEvent] {
        self.events.entries()
    }

    /// Remove and return committed events
    pub fn take_events(&mut self) -> Vec<ModuleEvent> {
        self.events.drain()
    }

    /// Hand ownership of the module to `new_owner`
    ///
    /// # Errors
    /// * `Unauthorized` - If `caller` is not the owner
    /// * `InvalidIdentity` - If `new_owner` is the zero address
    pub fn transfer_ownership(&mut self, caller: Identity, new_owner: Identity) -> Result<()> {
        let event = self.gate.transfer(caller, new_owner)?;
        self.events.record(event);
        Ok(())
    }

    /// Ask `account` to send `amount` to `destination`
    ///
    /// The request is always a plain call with an empty payload. Inputs are
    /// not validated here: a zero amount, a destination equal to the account,
    /// or an account that never enabled this module are forwarded as-is and
    /// surface through the account's answer.
    ///
    /// # Returns
    /// The custodial account's result. Under [`Abort`](crate::FailurePolicy::Abort)
    /// this is always `true`; `false` is only returned under
    /// [`Tolerate`](crate::FailurePolicy::Tolerate).
    ///
    /// # Errors
    /// * `Unauthorized` - If `caller` is not the owner (no request is sent)
    /// * `ExternalCallFailed` - If the account reverts with any error, or
    ///   returns `false` under [`Abort`](crate::FailurePolicy::Abort)
    #[instrument(skip(self, account), fields(module = %self.address, account = %account.address()))]
    pub fn transfer(
        &mut self,
        caller: Identity,
        account: &dyn CustodialAccount,
        destination: Identity,
        amount: Amount,
    ) -> Result<bool> {
        self.gate.check(caller)?;

        let request = TransferRequest::native_transfer(account.address(), destination, amount);
        debug!(request = %request, "Forwarding transfer request");

        let success = account
            .execute_from_module(self.address, &request)
            .map_err(|e| {
                let reason = match e {
                    Error::ExternalCallFailed { reason, .. } => reason,
                    other => other.to_string(),
                };
                warn!(
                    destination = %destination,
                    amount = %amount,
                    reason = %reason,
                    "Custodial account reverted transfer, aborting"
                );
                Error::ExternalCallFailed {
                    account: request.account,
                    reason,
                }
            })?;

        if !success {
            if self.config.failure_policy.aborts_on_failure() {
                warn!(
                    destination = %destination,
                    amount = %amount,
                    "Custodial account rejected transfer, aborting"
                );
                return Err(Error::ExternalCallFailed {
                    account: request.account,
                    reason: "execution returned false".to_string(),
                });
            }
            warn!(
                destination = %destination,
                amount = %amount,
                "Custodial account rejected transfer, tolerated by policy"
            );
        } else {
            info!(destination = %destination, amount = %amount, "Transfer executed");
        }

        self.events.record(TransferForwarded {
            caller,
            account: request.account,
            destination,
            amount,
            success,
        });

        Ok(success)
    }
}
