use soroban_sdk::{contracttype, Address, Bytes, Env};

const DAY_IN_LEDGERS: u32 = 17280;

pub(crate) const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
pub(crate) const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

pub(crate) const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub(crate) const PERSISTENT_LIFETIME_THRESHOLD: u32 = PERSISTENT_BUMP_AMOUNT - DAY_IN_LEDGERS;

/// A single entry of the publication log.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Publication {
    pub publisher: Address,
    pub record: Bytes,
    pub ledger: u32,
}

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Token,
    RequiredDeposit,
    MemberCount,
    PublicationCount,
    Member(Address),
    Refund(Address),
    Publication(u64),
}

pub fn extend_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

fn extend_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

// ============================================================================
// Configuration
// ============================================================================

pub fn get_token(env: &Env) -> Address {
    env.storage()
        .instance()
        .get(&DataKey::Token)
        .expect("deposit token is set at construction")
}

pub fn set_token(env: &Env, token: &Address) {
    env.storage().instance().set(&DataKey::Token, token);
}

pub fn get_required_deposit(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::RequiredDeposit)
        .expect("required deposit is set at construction")
}

pub fn set_required_deposit(env: &Env, amount: i128) {
    env.storage()
        .instance()
        .set(&DataKey::RequiredDeposit, &amount);
}

// ============================================================================
// Membership
// ============================================================================

pub fn is_member(env: &Env, principal: &Address) -> bool {
    env.storage()
        .persistent()
        .get(&DataKey::Member(principal.clone()))
        .unwrap_or(false)
}

pub fn set_member(env: &Env, principal: &Address) {
    let key = DataKey::Member(principal.clone());
    env.storage().persistent().set(&key, &true);
    extend_persistent(env, &key);
}

pub fn get_member_count(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::MemberCount)
        .unwrap_or(0)
}

pub fn set_member_count(env: &Env, count: u32) {
    env.storage().instance().set(&DataKey::MemberCount, &count);
}

// ============================================================================
// Refund ledger
// ============================================================================

/// Amount owed to `principal`. Absent entries read as zero.
pub fn get_refund(env: &Env, principal: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&DataKey::Refund(principal.clone()))
        .unwrap_or(0)
}

/// Stores the owed amount, dropping the entry entirely once it reaches zero.
pub fn set_refund(env: &Env, principal: &Address, amount: i128) {
    let key = DataKey::Refund(principal.clone());
    if amount == 0 {
        env.storage().persistent().remove(&key);
    } else {
        env.storage().persistent().set(&key, &amount);
        extend_persistent(env, &key);
    }
}

// ============================================================================
// Publication log
// ============================================================================

pub fn get_publication_count(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::PublicationCount)
        .unwrap_or(0)
}

pub fn get_publication(env: &Env, index: u64) -> Option<Publication> {
    env.storage()
        .persistent()
        .get(&DataKey::Publication(index))
}

/// Writes `publication` at the next free index and returns that index.
pub fn append_publication(env: &Env, publication: &Publication) -> u64 {
    let index = get_publication_count(env);
    let key = DataKey::Publication(index);
    env.storage().persistent().set(&key, publication);
    extend_persistent(env, &key);
    env.storage()
        .instance()
        .set(&DataKey::PublicationCount, &(index + 1));
    index
}
