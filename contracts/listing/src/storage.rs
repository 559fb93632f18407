use soroban_sdk::{symbol_short, Address, Bytes, Env, Symbol};

use crate::types::Pet;

pub fn k_name() -> Symbol { symbol_short!("NAME") }
pub fn k_image() -> Symbol { symbol_short!("IMAGE") }
pub fn k_age() -> Symbol { symbol_short!("AGE") }
pub fn k_breed() -> Symbol { symbol_short!("BREED") }
pub fn k_location() -> Symbol { symbol_short!("LOCATION") }
pub fn k_adopted() -> Symbol { symbol_short!("ADOPTED") }
pub fn k_owner() -> Symbol { symbol_short!("OWNER") }
pub fn k_fee() -> Symbol { symbol_short!("ADOPT_FEE") }
pub fn k_creator() -> Symbol { symbol_short!("CREATOR") }
pub fn k_deleted() -> Symbol { symbol_short!("DELETED") }

pub fn is_created(e: &Env) -> bool {
    e.storage().instance().has(&k_creator())
}

pub fn is_deleted(e: &Env) -> bool {
    e.storage().instance().get(&k_deleted()).unwrap_or(false)
}

pub fn owner(e: &Env) -> Option<Address> {
    e.storage().instance().get(&k_owner())
}

pub fn creator(e: &Env) -> Option<Address> {
    e.storage().instance().get(&k_creator())
}

/// Fee cache; zero when nothing has been read yet.
pub fn cached_fee(e: &Env) -> u64 {
    e.storage().instance().get(&k_fee()).unwrap_or(0)
}

pub fn set_cached_fee(e: &Env, fee: u64) {
    e.storage().instance().set(&k_fee(), &fee);
}

pub fn record_adoption(e: &Env, new_owner: &Address) {
    let store = e.storage().instance();
    store.set(&k_adopted(), &true);
    store.set(&k_owner(), new_owner);
}

pub fn put_pet(e: &Env, pet: &Pet) {
    let store = e.storage().instance();
    store.set(&k_name(), &pet.name);
    store.set(&k_image(), &pet.image);
    store.set(&k_age(), &pet.age);
    store.set(&k_breed(), &pet.breed);
    store.set(&k_location(), &pet.location);
    store.set(&k_adopted(), &pet.adopted);
    store.set(&k_owner(), &pet.owner);
    store.set(&k_creator(), &pet.creator);
}

pub fn get_pet(e: &Env) -> Option<Pet> {
    let store = e.storage().instance();
    Some(Pet {
        name: store.get::<_, Bytes>(&k_name())?,
        image: store.get::<_, Bytes>(&k_image())?,
        age: store.get::<_, u64>(&k_age())?,
        breed: store.get::<_, Bytes>(&k_breed())?,
        location: store.get::<_, Bytes>(&k_location())?,
        adopted: store.get::<_, bool>(&k_adopted())?,
        owner: store.get::<_, Address>(&k_owner())?,
        creator: store.get::<_, Address>(&k_creator())?,
    })
}

/// Drop all instance state and leave the tombstone behind.
pub fn tear_down(e: &Env) {
    let store = e.storage().instance();
    for key in [
        k_name(),
        k_image(),
        k_age(),
        k_breed(),
        k_location(),
        k_adopted(),
        k_owner(),
        k_fee(),
        k_creator(),
    ] {
        store.remove(&key);
    }
    store.set(&k_deleted(), &true);
}
