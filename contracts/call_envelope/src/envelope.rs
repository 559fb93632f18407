use soroban_sdk::{contracttype, symbol_short, Address, Bytes, Env, Vec};

use crate::protocol::MAX_GROUP_SIZE;
use crate::{reject, require, Error};

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum OnCompletion {
    NoOp,
    OptIn,
    CloseOut,
    ClearState,
    UpdateApplication,
    DeleteApplication,
}

/// An application call as it sits in a group.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AppCall {
    /// Contract the call is addressed to.
    pub app: Address,
    pub sender: Address,
    pub on_completion: OnCompletion,
    pub args: Vec<Bytes>,
    pub note: Bytes,
    /// Other contracts whose global state the call may read.
    pub foreign_apps: Vec<Address>,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Payment {
    pub sender: Address,
    pub receiver: Address,
    pub amount: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Txn {
    AppCall(AppCall),
    Payment(Payment),
}

/// The call being executed together with the group it arrived in.
#[derive(Clone, Debug)]
pub struct Envelope {
    pub call: AppCall,
    pub group: Vec<Txn>,
    pub index: u32,
}

impl Envelope {
    /// Locate the call at `index` and check it is addressed to the running
    /// contract. The sender must authorize the invocation.
    pub fn resolve(env: &Env, group: Vec<Txn>, index: u32) -> Result<Self, Error> {
        require(
            env,
            !group.is_empty() && group.len() <= MAX_GROUP_SIZE,
            symbol_short!("grp_bound"),
        )?;
        let call = match group.get(index) {
            Some(Txn::AppCall(call)) => call,
            _ => return Err(reject(env, symbol_short!("not_call"))),
        };
        require(
            env,
            call.app == env.current_contract_address(),
            symbol_short!("wrong_app"),
        )?;
        call.sender.require_auth();
        Ok(Envelope { call, group, index })
    }

    pub fn group_size(&self) -> u32 {
        self.group.len()
    }

    pub fn arg_count(&self) -> u32 {
        self.call.args.len()
    }

    pub fn arg(&self, i: u32) -> Option<Bytes> {
        self.call.args.get(i)
    }

    /// True when the first argument equals `selector`.
    pub fn selects(&self, env: &Env, selector: &[u8]) -> bool {
        self.arg(0) == Some(Bytes::from_slice(env, selector))
    }

    pub fn note_is(&self, env: &Env, marker: &[u8]) -> bool {
        self.call.note == Bytes::from_slice(env, marker)
    }

    pub fn is_deletion(&self) -> bool {
        self.call.on_completion == OnCompletion::DeleteApplication
    }

    pub fn is_no_op(&self) -> bool {
        self.call.on_completion == OnCompletion::NoOp
    }

    /// The payment leg at group position `i`, if that position holds one.
    pub fn payment_at(&self, i: u32) -> Option<Payment> {
        match self.group.get(i) {
            Some(Txn::Payment(payment)) => Some(payment),
            _ => None,
        }
    }

    /// Sender of whatever transaction sits at group position `i`.
    pub fn sender_at(&self, i: u32) -> Option<Address> {
        match self.group.get(i)? {
            Txn::AppCall(call) => Some(call.sender),
            Txn::Payment(payment) => Some(payment.sender),
        }
    }
}
