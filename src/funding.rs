multiversx_sc::imports!();

use crate::errors::{ERR_ACCESS_DENIED, ERR_INSUFFICIENT_FUNDS, ERR_INVALID_STATE};

/// Delegation of pool tokens into bounty balances.
///
/// A delegate's fair share of a token is `pool_supply / delegate_count`,
/// and everything the delegate currently backs in Active bounties of that
/// token counts against it.
#[multiversx_sc::module]
pub trait FundingModule:
    crate::events::EventsModule + crate::pool::PoolModule + crate::bounty::BountyModule
{
    // ========================================================
    // ENDPOINT: delegateTokens
    // ========================================================

    #[endpoint(delegateTokens)]
    fn delegate_tokens(&self, bounty_id: u64, amount: BigUint) {
        let mut bounty = self.require_bounty(bounty_id);
        require!(self.is_fundable(&bounty), ERR_INVALID_STATE);

        let caller = self.blockchain().get_caller();
        require!(self.delegates().contains(&caller), ERR_ACCESS_DENIED);
        require!(
            amount <= self.available_tokens(&bounty.token, &caller),
            ERR_INSUFFICIENT_FUNDS
        );

        let new_balance = &bounty.balance + &amount;
        if bounty.max_funding > 0u64 {
            require!(new_balance <= bounty.max_funding, ERR_INSUFFICIENT_FUNDS);
        }

        self.reserve_delegation(&bounty.token, &caller, &amount);

        let backed = self.backer_amount(bounty_id, &caller);
        self.backers(bounty_id).insert(caller.clone(), backed + &amount);
        bounty.balance = new_balance;
        self.bounties(bounty_id).set(&bounty);

        self.tokens_delegated_event(bounty_id, &caller, &amount, &bounty.balance);
    }

    // ========================================================
    // ENDPOINT: revokeTokens
    // Over-requests are clamped to what the caller has backed.
    // ========================================================

    #[endpoint(revokeTokens)]
    fn revoke_tokens(&self, bounty_id: u64, amount: BigUint) {
        let mut bounty = self.require_bounty(bounty_id);
        require!(self.is_fundable(&bounty), ERR_INVALID_STATE);

        let caller = self.blockchain().get_caller();
        let backed = self.backer_amount(bounty_id, &caller);
        let revoked = if amount < backed { amount } else { backed.clone() };
        if revoked == 0u64 {
            return;
        }

        let remaining = &backed - &revoked;
        if remaining == 0u64 {
            self.backers(bounty_id).remove(&caller);
        } else {
            self.backers(bounty_id).insert(caller.clone(), remaining);
        }
        bounty.balance -= &revoked;
        self.bounties(bounty_id).set(&bounty);

        self.release_delegation(&bounty.token, &caller, &revoked);

        self.tokens_revoked_event(bounty_id, &caller, &revoked, &bounty.balance);
    }

    // ========================================================
    // INTERNAL
    // ========================================================

    fn backer_amount(&self, bounty_id: u64, backer: &ManagedAddress) -> BigUint {
        self.backers(bounty_id)
            .get(backer)
            .unwrap_or_else(BigUint::zero)
    }

    /// Walks the live active index, so closed or newly activated
    /// bounties are reflected immediately.
    fn backer_active_amount(&self, backer: &ManagedAddress, token: &TokenIdentifier) -> BigUint {
        let mut total = BigUint::zero();
        for bounty_id in self.active_bounties(token).iter() {
            if let Some(backed) = self.backers(bounty_id).get(backer) {
                total += backed;
            }
        }
        total
    }

    /// Fair share minus active backing, never more than the pool still
    /// has undelegated.
    fn available_tokens(&self, token: &TokenIdentifier, backer: &ManagedAddress) -> BigUint {
        let fair_share = self.fair_share(token);
        let active = self.backer_active_amount(backer, token);
        if fair_share <= active {
            return BigUint::zero();
        }
        let undelegated = self.undelegated_supply(token);
        let headroom = fair_share - active;
        if headroom < undelegated {
            headroom
        } else {
            undelegated
        }
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getBackerAmount)]
    fn get_backer_amount(&self, bounty_id: u64, backer: ManagedAddress) -> BigUint {
        self.require_bounty(bounty_id);
        self.backer_amount(bounty_id, &backer)
    }

    #[view(getBackerActiveAmount)]
    fn get_backer_active_amount(&self, backer: ManagedAddress, token: TokenIdentifier) -> BigUint {
        self.backer_active_amount(&backer, &token)
    }

    #[view(getAvailableTokenCount)]
    fn get_available_token_count(&self, bounty_id: u64, backer: ManagedAddress) -> BigUint {
        let bounty = self.require_bounty(bounty_id);
        self.available_tokens(&bounty.token, &backer)
    }

    #[view(getAvailableTokens)]
    fn get_available_tokens(&self, token: TokenIdentifier, backer: ManagedAddress) -> BigUint {
        self.available_tokens(&token, &backer)
    }
}
