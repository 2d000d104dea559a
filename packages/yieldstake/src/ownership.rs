//! Admin capability shared by every contract.
//!
//! The admin is stored in instance storage. Handing it over takes two calls:
//! the current admin proposes a successor and the successor accepts, so a
//! mistyped address can never take control.

use soroban_sdk::{ contracttype, log, panic_with_error, symbol_short, Address, Env, String, Symbol };

use crate::{ error::{ ErrorCode, YieldResult }, validate };

const ADMIN: Symbol = symbol_short!("ADMIN");
const PENDING_ADMIN: Symbol = symbol_short!("PEND_ADM");
const INITIALIZED: Symbol = symbol_short!("INIT");

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AdminHandover {
    pub previous: Address,
    pub current: Address,
}

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().get(&INITIALIZED).unwrap_or(false)
}

pub fn set_initialized(env: &Env) {
    env.storage().instance().set(&INITIALIZED, &true);
}

/// Marks the contract initialized, aborting with `AlreadyInitialized` on a
/// second attempt.
pub fn initialize_once(env: &Env, contract_name: &str) {
    if is_initialized(env) {
        log!(
            env,
            "{}: Initialize: initializing contract twice is not allowed",
            String::from_str(env, contract_name)
        );
        panic_with_error!(env, ErrorCode::AlreadyInitialized);
    }
    set_initialized(env);
}

pub fn save_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&ADMIN, admin);
}

pub fn get_admin(env: &Env) -> YieldResult<Address> {
    env.storage().instance().get(&ADMIN).ok_or(ErrorCode::NotWired)
}

/// Checks that `sender` is the stored admin and that it authorized the call.
pub fn require_admin(env: &Env, sender: &Address) -> YieldResult {
    let admin = get_admin(env)?;
    validate!(env, admin == *sender, ErrorCode::NotAuthorized, "You are not authorized!")?;
    sender.require_auth();
    Ok(())
}

pub fn get_pending_admin(env: &Env) -> Option<Address> {
    env.storage().instance().get(&PENDING_ADMIN)
}

pub fn propose_admin(env: &Env, sender: &Address, candidate: &Address) -> YieldResult {
    require_admin(env, sender)?;
    validate!(
        env,
        sender != candidate,
        ErrorCode::ZeroAddress,
        "proposed admin is already the admin"
    )?;
    env.storage().instance().set(&PENDING_ADMIN, candidate);
    Ok(())
}

pub fn accept_admin(env: &Env, sender: &Address) -> YieldResult<AdminHandover> {
    let pending = get_pending_admin(env).ok_or(ErrorCode::NoPendingAdmin)?;
    validate!(env, pending == *sender, ErrorCode::NotAuthorized, "only the proposed admin can accept")?;
    sender.require_auth();

    let previous = get_admin(env)?;
    save_admin(env, sender);
    env.storage().instance().remove(&PENDING_ADMIN);

    Ok(AdminHandover { previous, current: sender.clone() })
}
