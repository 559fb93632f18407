use soroban_sdk::{contractclient, Address, Env};

/// Reads another contract's global fee at the moment of the call.
pub trait ForeignStateReader {
    fn read_fee(&self, moderator: &Address) -> Option<u64>;
}

/// The slice of the moderator interface a listing depends on.
#[contractclient(name = "ModeratorClient")]
pub trait ModeratorView {
    fn fee(env: Env) -> Option<u64>;
}

/// Reads through a cross-contract call to the moderator's `fee` view.
pub struct ContractStateReader<'a> {
    env: &'a Env,
}

impl<'a> ContractStateReader<'a> {
    pub fn new(env: &'a Env) -> Self {
        Self { env }
    }
}

impl ForeignStateReader for ContractStateReader<'_> {
    fn read_fee(&self, moderator: &Address) -> Option<u64> {
        // a failed invocation means there is no fee to read
        match ModeratorClient::new(self.env, moderator).try_fee() {
            Ok(Ok(fee)) => fee,
            _ => None,
        }
    }
}

/// The fee cache value for `moderator`: zero stands for "no valid fee".
pub fn read_foreign_fee<R: ForeignStateReader>(reader: &R, moderator: &Address) -> u64 {
    reader.read_fee(moderator).unwrap_or(0)
}
