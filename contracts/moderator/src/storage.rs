use soroban_sdk::{symbol_short, Address, Env, Symbol};

pub fn k_fee() -> Symbol { symbol_short!("FEE") }
pub fn k_creator() -> Symbol { symbol_short!("CREATOR") }
pub fn k_deleted() -> Symbol { symbol_short!("DELETED") }

pub fn is_created(e: &Env) -> bool {
    e.storage().instance().has(&k_creator())
}

pub fn is_deleted(e: &Env) -> bool {
    e.storage().instance().get(&k_deleted()).unwrap_or(false)
}

pub fn fee(e: &Env) -> Option<u64> {
    e.storage().instance().get(&k_fee())
}

pub fn set_fee(e: &Env, fee: u64) {
    e.storage().instance().set(&k_fee(), &fee);
}

pub fn creator(e: &Env) -> Option<Address> {
    e.storage().instance().get(&k_creator())
}

pub fn set_creator(e: &Env, creator: &Address) {
    e.storage().instance().set(&k_creator(), creator);
}

/// Drop all instance state and leave the tombstone behind.
pub fn tear_down(e: &Env) {
    let store = e.storage().instance();
    store.remove(&k_fee());
    store.remove(&k_creator());
    store.set(&k_deleted(), &true);
}
