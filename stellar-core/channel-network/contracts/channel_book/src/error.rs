use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ChannelBookError {
    InsufficientDeposit = 1,
    NotAMember = 2,
    IndexOutOfRange = 3,
    AlreadyMember = 4,
    NothingToWithdraw = 5,
    InvalidConfig = 6,
    Overflow = 7,
}
