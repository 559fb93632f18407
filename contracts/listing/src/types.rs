use soroban_sdk::{contracttype, Address, Bytes};

/// Everything the storefront shows for a listing.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Pet {
    pub name: Bytes,
    pub image: Bytes,
    pub age: u64,
    pub breed: Bytes,
    pub location: Bytes,
    pub adopted: bool,
    pub owner: Address,
    /// Payee of every adoption.
    pub creator: Address,
}

/// A validated adoption waiting to be applied.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Adoption {
    pub new_owner: Address,
    /// Fee read from the moderator and matched by the payment leg.
    pub fee: u64,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Operation {
    Create(Pet),
    Adopt(Adoption),
    ReadFee { fee: u64 },
    Delete,
}
