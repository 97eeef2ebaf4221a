#![no_std]

multiversx_sc::imports!();

pub mod bid;
pub mod bounty;
pub mod bounty_market_proxy;
pub mod errors;
pub mod events;
pub mod funding;
pub mod payout;
pub mod pool;
pub mod types;

use bid::OWNER_SHARES_DEFAULT;

// ============================================================
// Contract
// ============================================================

/// Bounty marketplace ledger.
///
/// Delegates move their fair share of pooled tokens into bounties, teams
/// bid with weighted members, and accepted bids are paid out in capped,
/// proportional rounds credited back through the pool.
#[multiversx_sc::contract]
pub trait BountyMarket:
    events::EventsModule
    + pool::PoolModule
    + bounty::BountyModule
    + funding::FundingModule
    + bid::BidModule
    + payout::PayoutModule
{
    // ========================================================
    // Init / Upgrade
    // ========================================================

    /// Limits copied into every new bounty. 0 means uncapped.
    #[init]
    fn init(&self, default_max_funding: BigUint, default_max_payout: BigUint) {
        self.default_max_funding().set(&default_max_funding);
        self.default_max_payout().set(&default_max_payout);
        self.bounty_count().set(0u64);
        self.bid_count().set(0u64);
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getContractConfig)]
    fn get_contract_config(&self) -> MultiValue3<BigUint, BigUint, u64> {
        let max_funding = self.default_max_funding().get();
        let max_payout = self.default_max_payout().get();
        (max_funding, max_payout, OWNER_SHARES_DEFAULT).into()
    }
}
