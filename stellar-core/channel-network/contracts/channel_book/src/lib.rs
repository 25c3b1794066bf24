#![no_std]

use soroban_sdk::{contract, contractimpl, log, panic_with_error, token, Address, Bytes, Env};

mod error;
mod events;
mod storage;

pub use error::ChannelBookError;
pub use storage::Publication;

/// Membership registry gating a payment-channel network.
///
/// Members lock `required_deposit` units of the deposit token. Anything paid
/// above that is owed back and can be pulled with `withdraw_refund`. Members
/// may append records to a single ordered publication log.
#[contract]
pub struct ChannelBook;

#[contractimpl]
impl ChannelBook {
    /// Fix the deposit token and the required deposit for the lifetime of
    /// the contract.
    pub fn __constructor(env: Env, token: Address, required_deposit: i128) {
        if required_deposit <= 0 {
            panic_with_error!(&env, ChannelBookError::InvalidConfig);
        }

        storage::set_token(&env, &token);
        storage::set_required_deposit(&env, required_deposit);
        storage::set_member_count(&env, 0);
        storage::extend_instance(&env);
    }

    // ========================================================================
    // Registration
    // ========================================================================

    /// Lock `amount` of the deposit token and become a member.
    ///
    /// `amount` must be at least the required deposit. The excess is credited
    /// to the caller's refund balance rather than sent back in this call.
    pub fn register(env: Env, caller: Address, amount: i128) -> Result<(), ChannelBookError> {
        caller.require_auth();

        let required = storage::get_required_deposit(&env);
        if amount < required {
            return Err(ChannelBookError::InsufficientDeposit);
        }
        if storage::is_member(&env, &caller) {
            return Err(ChannelBookError::AlreadyMember);
        }

        let overpayment = amount - required;
        let owed = storage::get_refund(&env, &caller)
            .checked_add(overpayment)
            .ok_or(ChannelBookError::Overflow)?;
        let members = storage::get_member_count(&env)
            .checked_add(1)
            .ok_or(ChannelBookError::Overflow)?;

        let token = token::Client::new(&env, &storage::get_token(&env));
        token.transfer(&caller, &env.current_contract_address(), &amount);

        storage::set_member(&env, &caller);
        storage::set_member_count(&env, members);
        if overpayment > 0 {
            storage::set_refund(&env, &caller, owed);
        }
        storage::extend_instance(&env);

        log!(&env, "member registered", caller, amount, overpayment);
        events::registered(&env, &caller, amount, overpayment);
        Ok(())
    }

    pub fn is_member(env: Env, principal: Address) -> bool {
        storage::is_member(&env, &principal)
    }

    pub fn member_count(env: Env) -> u32 {
        storage::get_member_count(&env)
    }

    pub fn required_deposit(env: Env) -> i128 {
        storage::get_required_deposit(&env)
    }

    pub fn deposit_token(env: Env) -> Address {
        storage::get_token(&env)
    }

    // ========================================================================
    // Refunds
    // ========================================================================

    /// Overpayment currently owed to `principal`, zero if none.
    pub fn deposits_returned(env: Env, principal: Address) -> i128 {
        storage::get_refund(&env, &principal)
    }

    /// Pay out the caller's whole refund balance and return the amount sent.
    pub fn withdraw_refund(env: Env, caller: Address) -> Result<i128, ChannelBookError> {
        caller.require_auth();

        let owed = storage::get_refund(&env, &caller);
        if owed <= 0 {
            return Err(ChannelBookError::NothingToWithdraw);
        }

        // Clear the balance before the outbound transfer.
        storage::set_refund(&env, &caller, 0);

        let token = token::Client::new(&env, &storage::get_token(&env));
        token.transfer(&env.current_contract_address(), &caller, &owed);

        log!(&env, "refund withdrawn", caller, owed);
        events::refund_withdrawn(&env, &caller, owed);
        Ok(owed)
    }

    // ========================================================================
    // Publication log
    // ========================================================================

    /// Append `record` to the publication log. Only members may publish.
    pub fn publish(env: Env, caller: Address, record: Bytes) -> Result<u64, ChannelBookError> {
        caller.require_auth();

        if !storage::is_member(&env, &caller) {
            return Err(ChannelBookError::NotAMember);
        }

        let publication = Publication {
            publisher: caller.clone(),
            record,
            ledger: env.ledger().sequence(),
        };
        let index = storage::append_publication(&env, &publication);
        storage::extend_instance(&env);

        events::published(&env, &caller, index);
        Ok(index)
    }

    pub fn publication_at(env: Env, index: u64) -> Result<Bytes, ChannelBookError> {
        Self::publication(env, index).map(|publication| publication.record)
    }

    /// Full log entry at `index`, including who published it and when.
    pub fn publication(env: Env, index: u64) -> Result<Publication, ChannelBookError> {
        if index >= storage::get_publication_count(&env) {
            return Err(ChannelBookError::IndexOutOfRange);
        }
        storage::get_publication(&env, index).ok_or(ChannelBookError::IndexOutOfRange)
    }

    pub fn publication_count(env: Env) -> u64 {
        storage::get_publication_count(&env)
    }
}
