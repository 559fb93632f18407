#![no_std]
use soroban_sdk::{contracterror, log, Env, Symbol};

mod args;
mod envelope;
pub mod protocol;

pub use args::{btoi, identity, identity_arg, itob};
pub use envelope::{AppCall, Envelope, OnCompletion, Payment, Txn};

/// The only outcome a failed predicate can produce. The ledger reports
/// accept/reject and nothing else, so no finer code is exposed.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    RejectedCall = 1,
}

/// Log `reason` and produce the rejection.
pub fn reject(env: &Env, reason: Symbol) -> Error {
    log!(env, "call rejected: {}", reason);
    Error::RejectedCall
}

/// One conjunct of a handler's predicate chain.
pub fn require(env: &Env, ok: bool, reason: Symbol) -> Result<(), Error> {
    if ok {
        Ok(())
    } else {
        Err(reject(env, reason))
    }
}
