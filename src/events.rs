multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait EventsModule {
    // ── Bounties ──

    #[event("bountyCreated")]
    fn bounty_created_event(
        &self,
        #[indexed] bounty_id: u64,
        #[indexed] owner: &ManagedAddress,
        #[indexed] token: &TokenIdentifier,
        deadline: u64,
    );

    #[event("bountyActivated")]
    fn bounty_activated_event(
        &self,
        #[indexed] bounty_id: u64,
        #[indexed] token: &TokenIdentifier,
        active_index: u64,
    );

    #[event("bountyClosed")]
    fn bounty_closed_event(&self, #[indexed] bounty_id: u64, balance: &BigUint);

    #[event("bountyOwnerChanged")]
    fn bounty_owner_changed_event(
        &self,
        #[indexed] bounty_id: u64,
        #[indexed] previous_owner: &ManagedAddress,
        new_owner: &ManagedAddress,
    );

    #[event("bountyDeadlineChanged")]
    fn bounty_deadline_changed_event(&self, #[indexed] bounty_id: u64, deadline: u64);

    #[event("bountyDescriptionChanged")]
    fn bounty_description_changed_event(
        &self,
        #[indexed] bounty_id: u64,
        description: &ManagedBuffer,
    );

    #[event("bountyLimitsChanged")]
    fn bounty_limits_changed_event(
        &self,
        #[indexed] bounty_id: u64,
        #[indexed] max_funding: &BigUint,
        max_payout: &BigUint,
    );

    // ── Funding ──

    #[event("tokensDelegated")]
    fn tokens_delegated_event(
        &self,
        #[indexed] bounty_id: u64,
        #[indexed] backer: &ManagedAddress,
        #[indexed] amount: &BigUint,
        balance: &BigUint,
    );

    #[event("tokensRevoked")]
    fn tokens_revoked_event(
        &self,
        #[indexed] bounty_id: u64,
        #[indexed] backer: &ManagedAddress,
        #[indexed] amount: &BigUint,
        balance: &BigUint,
    );

    // ── Bids ──

    #[event("bidCreated")]
    fn bid_created_event(
        &self,
        #[indexed] bid_id: u64,
        #[indexed] bounty_id: u64,
        owner: &ManagedAddress,
    );

    #[event("memberAdded")]
    fn member_added_event(
        &self,
        #[indexed] bid_id: u64,
        #[indexed] member: &ManagedAddress,
        shares: &BigUint,
    );

    #[event("memberRemoved")]
    fn member_removed_event(&self, #[indexed] bid_id: u64, member: &ManagedAddress);

    #[event("bidOwnerChanged")]
    fn bid_owner_changed_event(
        &self,
        #[indexed] bid_id: u64,
        #[indexed] previous_owner: &ManagedAddress,
        new_owner: &ManagedAddress,
    );

    #[event("sharesSet")]
    fn shares_set_event(
        &self,
        #[indexed] bid_id: u64,
        #[indexed] member: &ManagedAddress,
        shares: &BigUint,
    );

    #[event("bidWithdrawn")]
    fn bid_withdrawn_event(&self, #[indexed] bid_id: u64, #[indexed] bounty_id: u64);

    #[event("bidAccepted")]
    fn bid_accepted_event(&self, #[indexed] bid_id: u64, #[indexed] bounty_id: u64);

    #[event("bidRejected")]
    fn bid_rejected_event(&self, #[indexed] bid_id: u64, #[indexed] bounty_id: u64);

    // ── Payouts ──

    #[event("bountyPayout")]
    fn bounty_payout_event(
        &self,
        #[indexed] bounty_id: u64,
        #[indexed] per_call_cap: &BigUint,
        #[indexed] disbursed: &BigUint,
        balance: &BigUint,
    );

    #[event("memberPaid")]
    fn member_paid_event(
        &self,
        #[indexed] bounty_id: u64,
        #[indexed] bid_id: u64,
        #[indexed] member: &ManagedAddress,
        amount: &BigUint,
    );

    // ── Pool ──

    #[event("poolFunded")]
    fn pool_funded_event(
        &self,
        #[indexed] funder: &ManagedAddress,
        #[indexed] token: &TokenIdentifier,
        amount: &BigUint,
    );

    #[event("delegatePermissionSet")]
    fn delegate_permission_event(&self, #[indexed] account: &ManagedAddress, allowed: bool);

    #[event("managerPermissionSet")]
    fn manager_permission_event(&self, #[indexed] account: &ManagedAddress, allowed: bool);

    #[event("poolTransferred")]
    fn pool_transfer_event(
        &self,
        #[indexed] manager: &ManagedAddress,
        #[indexed] token: &TokenIdentifier,
        #[indexed] to: &ManagedAddress,
        amount: &BigUint,
    );

    #[event("balanceWithdrawn")]
    fn balance_withdrawn_event(
        &self,
        #[indexed] account: &ManagedAddress,
        #[indexed] token: &TokenIdentifier,
        amount: &BigUint,
    );
}
