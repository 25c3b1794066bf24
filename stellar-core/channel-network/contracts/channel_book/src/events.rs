use soroban_sdk::{symbol_short, Address, Env};

pub fn registered(env: &Env, member: &Address, amount: i128, overpayment: i128) {
    env.events()
        .publish((symbol_short!("register"), member.clone()), (amount, overpayment));
}

pub fn published(env: &Env, publisher: &Address, index: u64) {
    env.events()
        .publish((symbol_short!("publish"), publisher.clone()), index);
}

pub fn refund_withdrawn(env: &Env, member: &Address, amount: i128) {
    env.events()
        .publish((symbol_short!("withdraw"), member.clone()), amount);
}
