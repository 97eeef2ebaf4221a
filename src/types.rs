multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// Bounty Status — lifecycle states
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub enum BountyStatus {
    /// Created, not yet open for funding or bids.
    Draft,
    /// Listed in the active index. Fundable while the deadline holds.
    Active,
    /// Terminal. Removed from the active index.
    Closed,
}

// ============================================================
// Bounty — funding record owned by the bounty registry
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct Bounty<M: ManagedTypeApi> {
    pub id: u64,
    pub owner: ManagedAddress<M>,
    pub description: ManagedBuffer<M>,
    pub status: BountyStatus,
    /// Upper bound on `balance` (0 = uncapped)
    pub max_funding: BigUint<M>,
    /// Upper bound on a single payout call (0 = uncapped)
    pub max_payout: BigUint<M>,
    /// Always equal to the sum of the backer amounts
    pub balance: BigUint<M>,
    /// 1-based position in the active index of `token`, 0 while inactive
    pub active_index: u64,
    pub deadline: u64,
    pub token: TokenIdentifier<M>,
}

// ============================================================
// Bid Status — lifecycle states
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub enum BidStatus {
    Active,
    Withdrawn,
    Rejected,
    /// Only accepted bids take part in payouts.
    Accepted,
}

// ============================================================
// Bid — a team's claim on a bounty
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct Bid<M: ManagedTypeApi> {
    pub id: u64,
    pub owner: ManagedAddress<M>,
    pub description: ManagedBuffer<M>,
    pub status: BidStatus,
    pub bounty_id: u64,
    pub amount_paid: BigUint<M>,
    /// Live member count, which is also the last used 1-based slot
    pub members_pointer: u64,
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct BidMember<M: ManagedTypeApi> {
    pub shares: BigUint<M>,
    /// Back-reference into the bid's member slots
    pub slot: u64,
}

// ============================================================
// Payout working sets (never stored)
// ============================================================

#[derive(ManagedVecItem, Clone)]
pub struct MemberPayout<M: ManagedTypeApi> {
    pub bid_id: u64,
    pub member: ManagedAddress<M>,
    pub amount: BigUint<M>,
}

#[derive(ManagedVecItem, Clone)]
pub struct BackerDebit<M: ManagedTypeApi> {
    pub backer: ManagedAddress<M>,
    pub backed: BigUint<M>,
    pub cut: BigUint<M>,
}
