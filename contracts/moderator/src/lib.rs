#![no_std]
use call_envelope::protocol::{MODERATOR_NOTE, UPDATE_FEE};
use call_envelope::{btoi, reject, require, Envelope, Error, Txn};
use soroban_sdk::{contract, contractimpl, symbol_short, Address, Env, Vec};

mod storage;

/// What a moderator call decodes to once every predicate has held.
#[derive(Clone, Debug, Eq, PartialEq)]
enum Operation {
    Initialize { fee: u64 },
    UpdateFee { fee: u64 },
    Delete,
}

#[contract]
pub struct ModeratorContract;

#[contractimpl]
impl ModeratorContract {
    /// Run the application call found at `index` of `group`.
    pub fn call(e: Env, group: Vec<Txn>, index: u32) -> Result<(), Error> {
        require(&e, !storage::is_deleted(&e), symbol_short!("deleted"))?;
        let envelope = Envelope::resolve(&e, group, index)?;
        let op = decode(&e, &envelope)?;
        apply(&e, &envelope, op);
        Ok(())
    }

    /// Current adoption fee, `None` until initialized or after deletion.
    pub fn fee(e: Env) -> Option<u64> {
        storage::fee(&e)
    }

    pub fn creator(e: Env) -> Option<Address> {
        storage::creator(&e)
    }
}

/// Route the call and check its predicates. Writes nothing.
fn decode(e: &Env, envelope: &Envelope) -> Result<Operation, Error> {
    if !storage::is_created(e) {
        return initialize(e, envelope);
    }
    if envelope.is_deletion() {
        let creator = storage::creator(e).ok_or(Error::RejectedCall)?;
        require(e, envelope.call.sender == creator, symbol_short!("not_crtr"))?;
        return Ok(Operation::Delete);
    }
    if envelope.is_no_op() && envelope.selects(e, UPDATE_FEE) {
        return update_fee(e, envelope);
    }
    Err(reject(e, symbol_short!("no_route")))
}

fn initialize(e: &Env, envelope: &Envelope) -> Result<Operation, Error> {
    require(e, envelope.arg_count() == 1, symbol_short!("arg_count"))?;
    require(e, envelope.note_is(e, MODERATOR_NOTE), symbol_short!("bad_note"))?;
    let fee = positive_fee(e, envelope, 0)?;
    Ok(Operation::Initialize { fee })
}

fn update_fee(e: &Env, envelope: &Envelope) -> Result<Operation, Error> {
    require(e, envelope.arg_count() == 2, symbol_short!("arg_count"))?;
    require(e, envelope.note_is(e, MODERATOR_NOTE), symbol_short!("bad_note"))?;
    let fee = positive_fee(e, envelope, 1)?;
    Ok(Operation::UpdateFee { fee })
}

fn positive_fee(e: &Env, envelope: &Envelope, position: u32) -> Result<u64, Error> {
    let raw = envelope.arg(position).ok_or(Error::RejectedCall)?;
    let fee = btoi(e, &raw)?;
    require(e, fee > 0, symbol_short!("zero_fee"))?;
    Ok(fee)
}

fn apply(e: &Env, envelope: &Envelope, op: Operation) {
    match op {
        Operation::Initialize { fee } => {
            storage::set_creator(e, &envelope.call.sender);
            storage::set_fee(e, fee);
            e.events()
                .publish((symbol_short!("init"), envelope.call.sender.clone()), fee);
        }
        Operation::UpdateFee { fee } => {
            storage::set_fee(e, fee);
            e.events()
                .publish((symbol_short!("fee"), envelope.call.sender.clone()), fee);
        }
        Operation::Delete => {
            storage::tear_down(e);
            e.events()
                .publish((symbol_short!("deleted"), envelope.call.sender.clone()), ());
        }
    }
}
