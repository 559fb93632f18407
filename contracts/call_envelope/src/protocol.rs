//! Protocol markers, operation selectors and group limits.

/// Note every moderator initialization and fee update must carry.
pub const MODERATOR_NOTE: &[u8] = b"pet-shop:uMod";

/// Note a listing creation must carry, byte for byte.
pub const LISTING_NOTE: &[u8] = b"pet-shop:uPets";

pub const UPDATE_FEE: &[u8] = b"newFee";
pub const ADOPT: &[u8] = b"adopt";
/// Diagnostic selector: performs only the foreign fee read.
pub const READ_FEE: &[u8] = b"read_fee";

/// Largest atomic group the ledger accepts.
pub const MAX_GROUP_SIZE: u32 = 16;

/// Length of a `G...` or `C...` strkey.
pub const STRKEY_LEN: u32 = 56;

/// Integer arguments are big-endian and at most this many bytes.
pub const MAX_INT_BYTES: u32 = 8;
