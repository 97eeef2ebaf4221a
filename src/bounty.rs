multiversx_sc::imports!();

use crate::errors::{ERR_ACCESS_DENIED, ERR_INVALID_DEADLINE, ERR_INVALID_STATE, ERR_NOT_FOUND};
use crate::types::{Bounty, BountyStatus};

#[multiversx_sc::module]
pub trait BountyModule: crate::events::EventsModule + crate::pool::PoolModule {
    // ========================================================
    // ENDPOINT: createBounty
    // Caller becomes the owner of a new Draft bounty.
    // ========================================================

    #[endpoint(createBounty)]
    fn create_bounty(
        &self,
        description: ManagedBuffer,
        deadline: u64,
        token: TokenIdentifier,
    ) -> u64 {
        self.require_future_deadline(deadline);

        let caller = self.blockchain().get_caller();
        let bounty_id = self.bounty_count().get() + 1u64;

        let bounty = Bounty {
            id: bounty_id,
            owner: caller.clone(),
            description,
            status: BountyStatus::Draft,
            max_funding: self.default_max_funding().get(),
            max_payout: self.default_max_payout().get(),
            balance: BigUint::zero(),
            active_index: 0,
            deadline,
            token: token.clone(),
        };

        self.bounties(bounty_id).set(&bounty);
        self.bounty_count().set(bounty_id);

        self.bounty_created_event(bounty_id, &caller, &token, deadline);

        bounty_id
    }

    // ========================================================
    // ENDPOINT: activate
    // Draft → Active. Appends to the token's active index.
    // ========================================================

    #[endpoint(activate)]
    fn activate(&self, bounty_id: u64) {
        let mut bounty = self.require_bounty(bounty_id);
        self.require_bounty_owner(&bounty);
        require!(bounty.status == BountyStatus::Draft, ERR_INVALID_STATE);

        let active_index = self.active_bounties(&bounty.token).push(&bounty_id);
        bounty.active_index = active_index as u64;
        bounty.status = BountyStatus::Active;
        self.bounties(bounty_id).set(&bounty);

        self.bounty_activated_event(bounty_id, &bounty.token, bounty.active_index);
    }

    // ========================================================
    // ENDPOINT: close
    // Draft/Active → Closed (terminal). Backing goes back to the
    // pool; backers and balance stay as the bounty's record.
    // ========================================================

    #[endpoint(close)]
    fn close(&self, bounty_id: u64) {
        let mut bounty = self.require_bounty(bounty_id);
        self.require_bounty_owner(&bounty);
        require!(bounty.status != BountyStatus::Closed, ERR_INVALID_STATE);

        if bounty.status == BountyStatus::Active {
            self.remove_from_active_index(&bounty);
            bounty.active_index = 0;
        }
        for (backer, backed) in self.backers(bounty_id).iter() {
            self.release_delegation(&bounty.token, &backer, &backed);
        }
        bounty.status = BountyStatus::Closed;
        self.bounties(bounty_id).set(&bounty);

        self.bounty_closed_event(bounty_id, &bounty.balance);
    }

    #[endpoint(setBountyOwner)]
    fn set_bounty_owner(&self, bounty_id: u64, new_owner: ManagedAddress) {
        let mut bounty = self.require_bounty(bounty_id);
        self.require_bounty_owner(&bounty);

        let previous_owner = core::mem::replace(&mut bounty.owner, new_owner);
        self.bounties(bounty_id).set(&bounty);

        self.bounty_owner_changed_event(bounty_id, &previous_owner, &bounty.owner);
    }

    #[endpoint(setDeadline)]
    fn set_deadline(&self, bounty_id: u64, deadline: u64) {
        let mut bounty = self.require_bounty(bounty_id);
        self.require_bounty_owner(&bounty);
        require!(bounty.status != BountyStatus::Closed, ERR_INVALID_STATE);
        self.require_future_deadline(deadline);

        bounty.deadline = deadline;
        self.bounties(bounty_id).set(&bounty);

        self.bounty_deadline_changed_event(bounty_id, deadline);
    }

    #[endpoint(setMaxPayout)]
    fn set_max_payout(&self, bounty_id: u64, max_payout: BigUint) {
        let mut bounty = self.require_bounty(bounty_id);
        self.require_bounty_owner(&bounty);
        require!(bounty.status != BountyStatus::Closed, ERR_INVALID_STATE);

        bounty.max_payout = max_payout;
        self.bounties(bounty_id).set(&bounty);

        self.bounty_limits_changed_event(bounty_id, &bounty.max_funding, &bounty.max_payout);
    }

    #[endpoint(setMaxFunding)]
    fn set_max_funding(&self, bounty_id: u64, max_funding: BigUint) {
        let mut bounty = self.require_bounty(bounty_id);
        self.require_bounty_owner(&bounty);
        require!(bounty.status != BountyStatus::Closed, ERR_INVALID_STATE);

        bounty.max_funding = max_funding;
        self.bounties(bounty_id).set(&bounty);

        self.bounty_limits_changed_event(bounty_id, &bounty.max_funding, &bounty.max_payout);
    }

    #[endpoint(setDescription)]
    fn set_description(&self, bounty_id: u64, description: ManagedBuffer) {
        let mut bounty = self.require_bounty(bounty_id);
        self.require_bounty_owner(&bounty);

        bounty.description = description;
        self.bounties(bounty_id).set(&bounty);

        self.bounty_description_changed_event(bounty_id, &bounty.description);
    }

    // ========================================================
    // INTERNAL
    // ========================================================

    fn require_bounty(&self, bounty_id: u64) -> Bounty<Self::Api> {
        require!(!self.bounties(bounty_id).is_empty(), ERR_NOT_FOUND);
        self.bounties(bounty_id).get()
    }

    fn require_bounty_owner(&self, bounty: &Bounty<Self::Api>) {
        let caller = self.blockchain().get_caller();
        require!(caller == bounty.owner, ERR_ACCESS_DENIED);
    }

    fn require_future_deadline(&self, deadline: u64) {
        let now = self.blockchain().get_block_timestamp();
        require!(deadline > now, ERR_INVALID_DEADLINE);
    }

    /// Active status and an unexpired deadline.
    fn is_fundable(&self, bounty: &Bounty<Self::Api>) -> bool {
        bounty.status == BountyStatus::Active
            && bounty.deadline > self.blockchain().get_block_timestamp()
    }

    /// Swap-with-last removal. The bounty moved into the vacated slot gets
    /// its `active_index` rewritten so the back-reference stays exact.
    fn remove_from_active_index(&self, bounty: &Bounty<Self::Api>) {
        let mut index = self.active_bounties(&bounty.token);
        let slot = bounty.active_index as usize;
        let last = index.len();

        if slot != last {
            let moved_id = index.get(last);
            self.bounties(moved_id)
                .update(|moved| moved.active_index = slot as u64);
        }
        index.swap_remove(slot);
    }

    fn add_bidder(&self, bounty_id: u64, account: &ManagedAddress) {
        self.bidder_memberships(bounty_id, account)
            .update(|count| *count += 1);
    }

    fn remove_bidder(&self, bounty_id: u64, account: &ManagedAddress) {
        let count = self.bidder_memberships(bounty_id, account).get();
        if count <= 1 {
            self.bidder_memberships(bounty_id, account).clear();
        } else {
            self.bidder_memberships(bounty_id, account).set(count - 1);
        }
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getBounty)]
    fn get_bounty(&self, bounty_id: u64) -> Bounty<Self::Api> {
        self.require_bounty(bounty_id)
    }

    #[view(getBountyCount)]
    fn get_bounty_count(&self) -> u64 {
        self.bounty_count().get()
    }

    #[view(getActiveBountyCount)]
    fn get_active_bounty_count(&self, token: TokenIdentifier) -> u64 {
        self.active_bounties(&token).len() as u64
    }

    /// Bounty id at a 1-based position of the active index (0 when out of range).
    #[view(getActiveBountyAt)]
    fn get_active_bounty_at(&self, token: TokenIdentifier, index: u64) -> u64 {
        let active = self.active_bounties(&token);
        if index == 0 || index as usize > active.len() {
            return 0;
        }
        active.get(index as usize)
    }

    #[view(getBalance)]
    fn get_balance(&self, bounty_id: u64) -> BigUint {
        self.require_bounty(bounty_id).balance
    }

    #[view(isBidder)]
    fn is_bidder(&self, bounty_id: u64, account: ManagedAddress) -> bool {
        self.bidder_memberships(bounty_id, &account).get() > 0
    }

    // ========================================================
    // STORAGE
    // ========================================================

    // ── Configuration ──

    #[storage_mapper("defaultMaxFunding")]
    fn default_max_funding(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("defaultMaxPayout")]
    fn default_max_payout(&self) -> SingleValueMapper<BigUint>;

    // ── Bounties ──

    #[storage_mapper("bountyCount")]
    fn bounty_count(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("bounties")]
    fn bounties(&self, bounty_id: u64) -> SingleValueMapper<Bounty<Self::Api>>;

    #[storage_mapper("activeBounties")]
    fn active_bounties(&self, token: &TokenIdentifier) -> VecMapper<u64>;

    #[storage_mapper("backers")]
    fn backers(&self, bounty_id: u64) -> MapMapper<ManagedAddress, BigUint>;

    #[storage_mapper("bountyBids")]
    fn bounty_bids(&self, bounty_id: u64) -> VecMapper<u64>;

    #[storage_mapper("acceptedBids")]
    fn accepted_bids(&self, bounty_id: u64) -> UnorderedSetMapper<u64>;

    /// Number of bids on the bounty the account is a member of
    #[storage_mapper("bidderMemberships")]
    fn bidder_memberships(&self, bounty_id: u64, account: &ManagedAddress) -> SingleValueMapper<u32>;
}
