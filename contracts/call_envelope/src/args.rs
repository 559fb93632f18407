use soroban_sdk::{symbol_short, Address, Bytes, Env};

use crate::protocol::{MAX_INT_BYTES, STRKEY_LEN};
use crate::{require, Error};

/// Decode an integer argument: big-endian, empty is zero, longer than
/// eight bytes rejects.
pub fn btoi(env: &Env, raw: &Bytes) -> Result<u64, Error> {
    require(env, raw.len() <= MAX_INT_BYTES, symbol_short!("int_len"))?;
    Ok(raw.iter().fold(0u64, |acc, b| (acc << 8) | u64::from(b)))
}

/// Encode an integer argument the way `btoi` reads it.
pub fn itob(env: &Env, value: u64) -> Bytes {
    Bytes::from_array(env, &value.to_be_bytes())
}

/// Decode an identity argument from its strkey bytes.
///
/// Only the length is checked here; a malformed strkey of the right length
/// traps in the host, which fails the invocation all the same.
pub fn identity(env: &Env, raw: &Bytes) -> Result<Address, Error> {
    require(env, raw.len() == STRKEY_LEN, symbol_short!("id_len"))?;
    Ok(Address::from_string_bytes(raw))
}

/// Strkey bytes for `who`, suitable as an identity argument.
pub fn identity_arg(env: &Env, who: &Address) -> Bytes {
    let strkey = who.to_string();
    let mut buf = [0u8; STRKEY_LEN as usize];
    strkey.copy_into_slice(&mut buf);
    Bytes::from_slice(env, &buf)
}
