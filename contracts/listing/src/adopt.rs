//! Adoption predicates over the atomic group `[adopt call, payment]`.
//!
//! Everything here is read-only. The caller applies the returned
//! [`Adoption`] only once the whole chain has held.

use call_envelope::{identity, reject, require, Envelope, Error};
use soroban_sdk::{symbol_short, Address, Env};

use crate::reader::{read_foreign_fee, ForeignStateReader};
use crate::types::Adoption;

/// Position of the adoption call within its group.
pub const CALL_POSITION: u32 = 0;
/// Position of the payment leg.
pub const PAYMENT_POSITION: u32 = 1;
pub const GROUP_SIZE: u32 = 2;

pub fn check<R: ForeignStateReader>(
    e: &Env,
    envelope: &Envelope,
    owner: &Address,
    creator: &Address,
    reader: &R,
) -> Result<Adoption, Error> {
    require(e, envelope.group_size() == GROUP_SIZE, symbol_short!("grp_size"))?;
    require(e, envelope.index == CALL_POSITION, symbol_short!("grp_pos"))?;
    require(e, envelope.call.foreign_apps.len() == 1, symbol_short!("foreign"))?;
    require(e, envelope.arg_count() == 2, symbol_short!("arg_count"))?;

    let raw_owner = envelope.arg(1).ok_or(Error::RejectedCall)?;
    let new_owner = identity(e, &raw_owner)?;
    require(e, new_owner != *owner, symbol_short!("same_ownr"))?;

    let moderator = envelope.call.foreign_apps.get(0).ok_or(Error::RejectedCall)?;
    let fee = read_foreign_fee(reader, &moderator);
    require(e, fee > 0, symbol_short!("no_fee"))?;

    let payment = envelope
        .payment_at(PAYMENT_POSITION)
        .ok_or_else(|| reject(e, symbol_short!("no_pay")))?;
    require(e, payment.receiver == *creator, symbol_short!("pay_recv"))?;
    require(e, payment.amount == fee, symbol_short!("pay_amt"))?;
    let payer = envelope.sender_at(CALL_POSITION).ok_or(Error::RejectedCall)?;
    require(e, payment.sender == payer, symbol_short!("pay_sndr"))?;

    Ok(Adoption { new_owner, fee })
}
