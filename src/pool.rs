multiversx_sc::imports!();

use crate::errors::{ERR_ACCESS_DENIED, ERR_INSUFFICIENT_FUNDS};

/// Shared token pool: supply per token kind, who may delegate it into
/// bounties, who may move it out, and what has been credited to members.
///
/// Invariant per token: `total_delegated <= pool_supply`.
#[multiversx_sc::module]
pub trait PoolModule: crate::events::EventsModule {
    // ========================================================
    // ENDPOINT: fundPool
    // Anyone can top up the pool with a single ESDT payment.
    // ========================================================

    #[endpoint(fundPool)]
    #[payable("*")]
    fn fund_pool(&self) {
        let payment = self.call_value().single_esdt();
        let token = payment.token_identifier.clone();
        let amount = payment.amount.clone();
        require!(amount > 0u64, ERR_INSUFFICIENT_FUNDS);

        self.pool_supply(&token).update(|supply| *supply += &amount);

        let caller = self.blockchain().get_caller();
        self.pool_funded_event(&caller, &token, &amount);
    }

    // ========================================================
    // ENDPOINTS: permissions (pool admin = contract owner)
    // ========================================================

    #[endpoint(setDelegatePermission)]
    fn set_delegate_permission(&self, account: ManagedAddress, allowed: bool) {
        self.require_pool_admin();
        if allowed {
            self.delegates().insert(account.clone());
        } else {
            self.delegates().swap_remove(&account);
        }
        self.delegate_permission_event(&account, allowed);
    }

    #[endpoint(setManagerPermission)]
    fn set_manager_permission(&self, account: ManagedAddress, allowed: bool) {
        self.require_pool_admin();
        if allowed {
            self.managers().insert(account.clone());
        } else {
            self.managers().swap_remove(&account);
        }
        self.manager_permission_event(&account, allowed);
    }

    // ========================================================
    // ENDPOINT: poolTransfer
    // Managers move undelegated pool tokens to an account.
    // ========================================================

    #[endpoint(poolTransfer)]
    fn pool_transfer(&self, token: TokenIdentifier, to: ManagedAddress, amount: BigUint) {
        let caller = self.blockchain().get_caller();
        require!(self.managers().contains(&caller), ERR_ACCESS_DENIED);
        require!(
            amount <= self.undelegated_supply(&token),
            ERR_INSUFFICIENT_FUNDS
        );

        self.credit_from_pool(&token, &to, &amount);
        self.pool_transfer_event(&caller, &token, &to, &amount);
    }

    // ========================================================
    // ENDPOINT: withdrawBalance
    // Sends everything credited to the caller for `token`.
    // ========================================================

    #[endpoint(withdrawBalance)]
    fn withdraw_balance(&self, token: TokenIdentifier) {
        let caller = self.blockchain().get_caller();
        let amount = self.credited_balance(&caller, &token).get();
        require!(amount > 0u64, ERR_INSUFFICIENT_FUNDS);

        // Zero the ledger before the transfer leaves the contract
        self.credited_balance(&caller, &token).clear();
        self.send().direct_esdt(&caller, &token, 0, &amount);

        self.balance_withdrawn_event(&caller, &token, &amount);
    }

    // ========================================================
    // INTERNAL: pool accounting
    // ========================================================

    fn require_pool_admin(&self) {
        let caller = self.blockchain().get_caller();
        require!(
            caller == self.blockchain().get_owner_address(),
            ERR_ACCESS_DENIED
        );
    }

    /// floor(pool supply / number of delegates)
    fn fair_share(&self, token: &TokenIdentifier) -> BigUint {
        let delegate_count = self.delegates().len() as u64;
        if delegate_count == 0 {
            return BigUint::zero();
        }
        self.pool_supply(token).get() / delegate_count
    }

    fn undelegated_supply(&self, token: &TokenIdentifier) -> BigUint {
        let supply = self.pool_supply(token).get();
        let delegated = self.total_delegated(token).get();
        if supply > delegated {
            supply - delegated
        } else {
            BigUint::zero()
        }
    }

    fn reserve_delegation(&self, token: &TokenIdentifier, owner: &ManagedAddress, amount: &BigUint) {
        require!(
            *amount <= self.undelegated_supply(token),
            ERR_INSUFFICIENT_FUNDS
        );
        self.delegated_balance(token, owner).update(|v| *v += amount);
        self.total_delegated(token).update(|v| *v += amount);
    }

    fn release_delegation(&self, token: &TokenIdentifier, owner: &ManagedAddress, amount: &BigUint) {
        self.delegated_balance(token, owner).update(|v| *v -= amount);
        self.total_delegated(token).update(|v| *v -= amount);
    }

    /// Moves `amount` out of the pool supply into the recipient's credited balance.
    fn credit_from_pool(&self, token: &TokenIdentifier, to: &ManagedAddress, amount: &BigUint) {
        require!(
            *amount <= self.pool_supply(token).get(),
            ERR_INSUFFICIENT_FUNDS
        );
        self.pool_supply(token).update(|supply| *supply -= amount);
        self.credited_balance(to, token).update(|v| *v += amount);
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getPoolBalance)]
    fn get_pool_balance(&self, token: TokenIdentifier) -> BigUint {
        self.pool_supply(&token).get()
    }

    #[view(balanceOf)]
    fn balance_of(&self, account: ManagedAddress, token: TokenIdentifier) -> BigUint {
        self.credited_balance(&account, &token).get()
    }

    #[view(isDelegate)]
    fn is_delegate(&self, account: ManagedAddress) -> bool {
        self.delegates().contains(&account)
    }

    #[view(isManager)]
    fn is_manager(&self, account: ManagedAddress) -> bool {
        self.managers().contains(&account)
    }

    #[view(getDelegateCount)]
    fn get_delegate_count(&self) -> u64 {
        self.delegates().len() as u64
    }

    #[view(getDelegatedBalance)]
    fn get_delegated_balance(&self, token: TokenIdentifier, owner: ManagedAddress) -> BigUint {
        self.delegated_balance(&token, &owner).get()
    }

    #[view(getTotalDelegated)]
    fn get_total_delegated(&self, token: TokenIdentifier) -> BigUint {
        self.total_delegated(&token).get()
    }

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("poolSupply")]
    fn pool_supply(&self, token: &TokenIdentifier) -> SingleValueMapper<BigUint>;

    #[storage_mapper("delegates")]
    fn delegates(&self) -> UnorderedSetMapper<ManagedAddress>;

    #[storage_mapper("managers")]
    fn managers(&self) -> UnorderedSetMapper<ManagedAddress>;

    #[storage_mapper("delegatedBalance")]
    fn delegated_balance(
        &self,
        token: &TokenIdentifier,
        owner: &ManagedAddress,
    ) -> SingleValueMapper<BigUint>;

    #[storage_mapper("totalDelegated")]
    fn total_delegated(&self, token: &TokenIdentifier) -> SingleValueMapper<BigUint>;

    #[storage_mapper("creditedBalance")]
    fn credited_balance(
        &self,
        account: &ManagedAddress,
        token: &TokenIdentifier,
    ) -> SingleValueMapper<BigUint>;
}
