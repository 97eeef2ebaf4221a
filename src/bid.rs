multiversx_sc::imports!();

use crate::errors::{ERR_ACCESS_DENIED, ERR_INVALID_STATE, ERR_NOT_FOUND};
use crate::types::{Bid, BidMember, BidStatus, BountyStatus};

/// Shares the bid owner starts with when a bid is created
pub const OWNER_SHARES_DEFAULT: u64 = 1;

#[multiversx_sc::module]
pub trait BidModule:
    crate::events::EventsModule + crate::pool::PoolModule + crate::bounty::BountyModule
{
    // ========================================================
    // ENDPOINT: createBid
    // Only against an Active bounty. Caller becomes member #1.
    // ========================================================

    #[endpoint(createBid)]
    fn create_bid(&self, bounty_id: u64, description: ManagedBuffer) -> u64 {
        let bounty = self.require_bounty(bounty_id);
        require!(bounty.status == BountyStatus::Active, ERR_INVALID_STATE);

        let caller = self.blockchain().get_caller();
        let bid_id = self.bid_count().get() + 1u64;

        let mut bid = Bid {
            id: bid_id,
            owner: caller.clone(),
            description,
            status: BidStatus::Active,
            bounty_id,
            amount_paid: BigUint::zero(),
            members_pointer: 0,
        };
        self.push_member(&mut bid, &caller, BigUint::from(OWNER_SHARES_DEFAULT));

        self.bids(bid_id).set(&bid);
        self.bid_count().set(bid_id);
        self.bounty_bids(bounty_id).push(&bid_id);

        self.bid_created_event(bid_id, bounty_id, &caller);

        bid_id
    }

    // ========================================================
    // ENDPOINTS: membership
    // ========================================================

    #[endpoint(addMember)]
    fn add_member(&self, bid_id: u64, member: ManagedAddress, shares: BigUint) {
        let mut bid = self.require_bid(bid_id);
        self.require_bid_owner(&bid);
        require!(!self.is_member(bid_id, &member), ERR_INVALID_STATE);

        self.push_member(&mut bid, &member, shares.clone());
        self.bids(bid_id).set(&bid);

        self.member_added_event(bid_id, &member, &shares);
    }

    /// The bid owner can remove anyone but themselves; a member can leave.
    #[endpoint(removeMember)]
    fn remove_member(&self, bid_id: u64, member: ManagedAddress) {
        let mut bid = self.require_bid(bid_id);
        let caller = self.blockchain().get_caller();
        require!(
            caller == bid.owner || caller == member,
            ERR_ACCESS_DENIED
        );
        require!(self.is_member(bid_id, &member), ERR_NOT_FOUND);
        require!(member != bid.owner, ERR_INVALID_STATE);

        let entry = self.bid_member(bid_id, &member).get();
        let slot = entry.slot as usize;
        let mut members = self.bid_members(bid_id);
        let last = members.len();
        if slot != last {
            let moved = members.get(last);
            self.bid_member(bid_id, &moved)
                .update(|moved_entry| moved_entry.slot = slot as u64);
        }
        members.swap_remove(slot);
        self.bid_member(bid_id, &member).clear();

        bid.members_pointer -= 1;
        self.bids(bid_id).set(&bid);
        self.remove_bidder(bid.bounty_id, &member);

        self.member_removed_event(bid_id, &member);
    }

    /// Moves the owner pointer to an existing member. Membership is untouched.
    #[endpoint(setBidOwner)]
    fn set_bid_owner(&self, bid_id: u64, new_owner: ManagedAddress) {
        let mut bid = self.require_bid(bid_id);
        self.require_bid_owner(&bid);
        require!(self.is_member(bid_id, &new_owner), ERR_INVALID_STATE);

        let previous_owner = core::mem::replace(&mut bid.owner, new_owner);
        self.bids(bid_id).set(&bid);

        self.bid_owner_changed_event(bid_id, &previous_owner, &bid.owner);
    }

    #[endpoint(setShares)]
    fn set_shares(&self, bid_id: u64, member: ManagedAddress, shares: BigUint) {
        let bid = self.require_bid(bid_id);
        self.require_bid_owner(&bid);
        require!(self.is_member(bid_id, &member), ERR_NOT_FOUND);

        self.bid_member(bid_id, &member)
            .update(|entry| entry.shares = shares.clone());

        self.shares_set_event(bid_id, &member, &shares);
    }

    // ========================================================
    // ENDPOINTS: lifecycle
    // ========================================================

    #[endpoint(withdrawBid)]
    fn withdraw_bid(&self, bid_id: u64) {
        let mut bid = self.require_bid(bid_id);
        self.require_bid_owner(&bid);
        require!(bid.status == BidStatus::Active, ERR_INVALID_STATE);

        bid.status = BidStatus::Withdrawn;
        self.bids(bid_id).set(&bid);

        self.bid_withdrawn_event(bid_id, bid.bounty_id);
    }

    /// Bounty owner marks a bid as a winner. Several bids may be accepted.
    #[endpoint(acceptBid)]
    fn accept_bid(&self, bid_id: u64) {
        let mut bid = self.require_bid(bid_id);
        let bounty = self.require_bounty(bid.bounty_id);
        self.require_bounty_owner(&bounty);
        require!(bid.status == BidStatus::Active, ERR_INVALID_STATE);

        bid.status = BidStatus::Accepted;
        self.bids(bid_id).set(&bid);
        self.accepted_bids(bid.bounty_id).insert(bid_id);

        self.bid_accepted_event(bid_id, bid.bounty_id);
    }

    #[endpoint(rejectBid)]
    fn reject_bid(&self, bid_id: u64) {
        let mut bid = self.require_bid(bid_id);
        let bounty = self.require_bounty(bid.bounty_id);
        self.require_bounty_owner(&bounty);
        require!(bid.status == BidStatus::Active, ERR_INVALID_STATE);

        bid.status = BidStatus::Rejected;
        self.bids(bid_id).set(&bid);

        self.bid_rejected_event(bid_id, bid.bounty_id);
    }

    // ========================================================
    // INTERNAL
    // ========================================================

    fn require_bid(&self, bid_id: u64) -> Bid<Self::Api> {
        require!(!self.bids(bid_id).is_empty(), ERR_NOT_FOUND);
        self.bids(bid_id).get()
    }

    fn require_bid_owner(&self, bid: &Bid<Self::Api>) {
        let caller = self.blockchain().get_caller();
        require!(caller == bid.owner, ERR_ACCESS_DENIED);
    }

    fn is_member(&self, bid_id: u64, account: &ManagedAddress) -> bool {
        !self.bid_member(bid_id, account).is_empty()
    }

    /// Appends to the slot list and records the slot as the member's back-reference.
    fn push_member(&self, bid: &mut Bid<Self::Api>, member: &ManagedAddress, shares: BigUint) {
        let slot = self.bid_members(bid.id).push(member);
        self.bid_member(bid.id, member).set(BidMember {
            shares,
            slot: slot as u64,
        });
        bid.members_pointer = slot as u64;
        self.add_bidder(bid.bounty_id, member);
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getBid)]
    fn get_bid(&self, bid_id: u64) -> Bid<Self::Api> {
        self.require_bid(bid_id)
    }

    #[view(getBidCount)]
    fn get_bid_count(&self) -> u64 {
        self.bid_count().get()
    }

    #[view(getBidMember)]
    fn get_bid_member(&self, bid_id: u64, member: ManagedAddress) -> BidMember<Self::Api> {
        require!(self.is_member(bid_id, &member), ERR_NOT_FOUND);
        self.bid_member(bid_id, &member).get()
    }

    #[view(getMemberShares)]
    fn get_member_shares(&self, bid_id: u64, member: ManagedAddress) -> BigUint {
        if !self.is_member(bid_id, &member) {
            return BigUint::zero();
        }
        self.bid_member(bid_id, &member).get().shares
    }

    #[view(getBountyBidCount)]
    fn get_bounty_bid_count(&self, bounty_id: u64) -> u64 {
        self.bounty_bids(bounty_id).len() as u64
    }

    #[view(getAcceptedBidCount)]
    fn get_accepted_bid_count(&self, bounty_id: u64) -> u64 {
        self.accepted_bids(bounty_id).len() as u64
    }

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("bidCount")]
    fn bid_count(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("bids")]
    fn bids(&self, bid_id: u64) -> SingleValueMapper<Bid<Self::Api>>;

    /// 1-based member slots
    #[storage_mapper("bidMembers")]
    fn bid_members(&self, bid_id: u64) -> VecMapper<ManagedAddress>;

    #[storage_mapper("bidMember")]
    fn bid_member(&self, bid_id: u64, member: &ManagedAddress) -> SingleValueMapper<BidMember<Self::Api>>;
}
