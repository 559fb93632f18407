#![no_std]
use call_envelope::protocol::{ADOPT, LISTING_NOTE, READ_FEE};
use call_envelope::{btoi, reject, require, Envelope, Error, Txn};
use soroban_sdk::{contract, contractimpl, symbol_short, Env, Vec};

pub mod adopt;
pub mod reader;
mod storage;
pub mod types;

pub use reader::{read_foreign_fee, ContractStateReader, ForeignStateReader};
pub use types::{Adoption, Operation, Pet};

#[contract]
pub struct ListingContract;

#[contractimpl]
impl ListingContract {
    /// Run the application call found at `index` of `group`.
    ///
    /// The first call ever made creates the listing. Later calls either
    /// delete it or name an operation in their first argument.
    pub fn call(e: Env, group: Vec<Txn>, index: u32) -> Result<(), Error> {
        require(&e, !storage::is_deleted(&e), symbol_short!("deleted"))?;
        let envelope = Envelope::resolve(&e, group, index)?;
        let op = decode(&e, &envelope, &ContractStateReader::new(&e))?;
        apply(&e, op);
        Ok(())
    }

    pub fn pet(e: Env) -> Option<Pet> {
        storage::get_pet(&e)
    }

    /// Fee recorded by the last adoption or diagnostic read.
    pub fn cached_fee(e: Env) -> u64 {
        storage::cached_fee(&e)
    }
}

/// Route the call and evaluate every predicate of the chosen operation.
/// Nothing is written until [`apply`].
fn decode<R: ForeignStateReader>(
    e: &Env,
    envelope: &Envelope,
    reader: &R,
) -> Result<Operation, Error> {
    if !storage::is_created(e) {
        return create(e, envelope);
    }
    if envelope.is_deletion() {
        let owner = storage::owner(e).ok_or(Error::RejectedCall)?;
        require(e, envelope.call.sender == owner, symbol_short!("not_owner"))?;
        return Ok(Operation::Delete);
    }
    if !envelope.is_no_op() {
        return Err(reject(e, symbol_short!("no_route")));
    }
    if envelope.selects(e, ADOPT) {
        let owner = storage::owner(e).ok_or(Error::RejectedCall)?;
        let creator = storage::creator(e).ok_or(Error::RejectedCall)?;
        let adoption = adopt::check(e, envelope, &owner, &creator, reader)?;
        return Ok(Operation::Adopt(adoption));
    }
    if envelope.selects(e, READ_FEE) {
        require(e, envelope.arg_count() == 1, symbol_short!("arg_count"))?;
        require(e, envelope.call.foreign_apps.len() == 1, symbol_short!("foreign"))?;
        let moderator = envelope.call.foreign_apps.get(0).ok_or(Error::RejectedCall)?;
        let fee = read_foreign_fee(reader, &moderator);
        return Ok(Operation::ReadFee { fee });
    }
    Err(reject(e, symbol_short!("no_route")))
}

fn create(e: &Env, envelope: &Envelope) -> Result<Operation, Error> {
    require(e, envelope.arg_count() == 5, symbol_short!("arg_count"))?;
    require(e, envelope.note_is(e, LISTING_NOTE), symbol_short!("bad_note"))?;
    let arg = |i: u32| envelope.arg(i).ok_or(Error::RejectedCall);
    let age = btoi(e, &arg(2)?)?;
    Ok(Operation::Create(Pet {
        name: arg(0)?,
        image: arg(1)?,
        age,
        breed: arg(3)?,
        location: arg(4)?,
        adopted: false,
        owner: envelope.call.sender.clone(),
        creator: envelope.call.sender.clone(),
    }))
}

fn apply(e: &Env, op: Operation) {
    match op {
        Operation::Create(pet) => {
            storage::put_pet(e, &pet);
            e.events()
                .publish((symbol_short!("listed"), pet.creator.clone()), pet.name);
        }
        Operation::Adopt(Adoption { new_owner, fee }) => {
            storage::record_adoption(e, &new_owner);
            storage::set_cached_fee(e, fee);
            e.events().publish((symbol_short!("adopted"), new_owner), fee);
        }
        Operation::ReadFee { fee } => storage::set_cached_fee(e, fee),
        Operation::Delete => {
            storage::tear_down(e);
            e.events().publish((symbol_short!("delisted"),), ());
        }
    }
}
