// Shared harness for the bounty market blackbox tests.
//
// The contract runs on the Rust VM backend; every test starts from a fresh
// deploy with a funded pool and two registered delegates.

#![allow(dead_code)]

use bounty_market::bounty_market_proxy::BountyMarketProxy;
use multiversx_sc_scenario::imports::*;

pub const CODE_PATH: MxscPath = MxscPath::new("output/bounty-market.mxsc.json");

pub const OWNER: TestAddress = TestAddress::new("owner");
pub const SPONSOR: TestAddress = TestAddress::new("sponsor");
pub const BACKER_A: TestAddress = TestAddress::new("backer-a");
pub const BACKER_B: TestAddress = TestAddress::new("backer-b");
pub const ALICE: TestAddress = TestAddress::new("alice");
pub const BOB: TestAddress = TestAddress::new("bob");
pub const CAROL: TestAddress = TestAddress::new("carol");
pub const STRANGER: TestAddress = TestAddress::new("stranger");

pub const MARKET: TestSCAddress = TestSCAddress::new("bounty-market");

pub const POOL_TOKEN: TestTokenIdentifier = TestTokenIdentifier::new("POOL-123456");
pub const POOL_TOKEN_ID: &[u8] = b"POOL-123456";
pub const OTHER_TOKEN_ID: &[u8] = b"OTHER-654321";

pub const POOL_SUPPLY: u64 = 20_000;
pub const NOW: u64 = 1_000;
pub const DEADLINE: u64 = 100_000;

pub fn pool_token() -> TokenIdentifier<StaticApi> {
    TokenIdentifier::from_esdt_bytes(POOL_TOKEN_ID)
}

pub fn other_token() -> TokenIdentifier<StaticApi> {
    TokenIdentifier::from_esdt_bytes(OTHER_TOKEN_ID)
}

pub fn world() -> ScenarioWorld {
    let mut world = ScenarioWorld::new();
    world.register_contract(CODE_PATH, bounty_market::ContractBuilder);
    world
}

pub struct MarketTestState {
    pub world: ScenarioWorld,
}

impl MarketTestState {
    /// Deployed, pool funded with 20000 tokens, BACKER_A and BACKER_B are delegates.
    pub fn new() -> Self {
        let mut state = Self::deployed(0, 0);
        state.fund_pool(POOL_SUPPLY);
        state.set_delegate(BACKER_A, true);
        state.set_delegate(BACKER_B, true);
        state
    }

    pub fn deployed(default_max_funding: u64, default_max_payout: u64) -> Self {
        let mut world = world();

        world
            .account(OWNER)
            .nonce(1)
            .esdt_balance(POOL_TOKEN, POOL_SUPPLY);
        for account in [SPONSOR, BACKER_A, BACKER_B, ALICE, BOB, CAROL, STRANGER] {
            world.account(account).nonce(1);
        }
        world.current_block().block_timestamp(NOW);

        world
            .tx()
            .from(OWNER)
            .typed(BountyMarketProxy)
            .init(default_max_funding, default_max_payout)
            .code(CODE_PATH)
            .new_address(MARKET)
            .run();

        Self { world }
    }

    // ── Pool ──

    pub fn fund_pool(&mut self, amount: u64) {
        self.world
            .tx()
            .from(OWNER)
            .to(MARKET)
            .typed(BountyMarketProxy)
            .fund_pool()
            .single_esdt(&pool_token(), 0, &BigUint::from(amount))
            .run();
    }

    pub fn set_delegate(&mut self, account: TestAddress, allowed: bool) {
        self.world
            .tx()
            .from(OWNER)
            .to(MARKET)
            .typed(BountyMarketProxy)
            .set_delegate_permission(account, allowed)
            .run();
    }

    /// The contract needs the manager role to pay out of the pool.
    pub fn grant_market_manager(&mut self) {
        self.world
            .tx()
            .from(OWNER)
            .to(MARKET)
            .typed(BountyMarketProxy)
            .set_manager_permission(MARKET, true)
            .run();
    }

    // ── Bounties ──

    pub fn create_bounty(&mut self, owner: TestAddress) -> u64 {
        self.create_bounty_for(owner, pool_token())
    }

    pub fn create_bounty_for(&mut self, owner: TestAddress, token: TokenIdentifier<StaticApi>) -> u64 {
        self.world
            .tx()
            .from(owner)
            .to(MARKET)
            .typed(BountyMarketProxy)
            .create_bounty(ManagedBuffer::<StaticApi>::from("fix the indexer"), DEADLINE, token)
            .returns(ReturnsResult)
            .run()
    }

    pub fn activate(&mut self, owner: TestAddress, bounty_id: u64) {
        self.world
            .tx()
            .from(owner)
            .to(MARKET)
            .typed(BountyMarketProxy)
            .activate(bounty_id)
            .run();
    }

    pub fn create_active_bounty(&mut self, owner: TestAddress) -> u64 {
        let bounty_id = self.create_bounty(owner);
        self.activate(owner, bounty_id);
        bounty_id
    }

    pub fn close(&mut self, owner: TestAddress, bounty_id: u64) {
        self.world
            .tx()
            .from(owner)
            .to(MARKET)
            .typed(BountyMarketProxy)
            .close(bounty_id)
            .run();
    }

    pub fn set_max_payout(&mut self, owner: TestAddress, bounty_id: u64, max_payout: u64) {
        self.world
            .tx()
            .from(owner)
            .to(MARKET)
            .typed(BountyMarketProxy)
            .set_max_payout(bounty_id, max_payout)
            .run();
    }

    pub fn get_bounty(&mut self, bounty_id: u64) -> bounty_market::types::Bounty<StaticApi> {
        self.world
            .query()
            .to(MARKET)
            .typed(BountyMarketProxy)
            .get_bounty(bounty_id)
            .returns(ReturnsResult)
            .run()
    }

    // ── Funding ──

    pub fn delegate(&mut self, backer: TestAddress, bounty_id: u64, amount: u64) {
        self.world
            .tx()
            .from(backer)
            .to(MARKET)
            .typed(BountyMarketProxy)
            .delegate_tokens(bounty_id, amount)
            .run();
    }

    pub fn revoke(&mut self, backer: TestAddress, bounty_id: u64, amount: u64) {
        self.world
            .tx()
            .from(backer)
            .to(MARKET)
            .typed(BountyMarketProxy)
            .revoke_tokens(bounty_id, amount)
            .run();
    }

    pub fn check_balance(&mut self, bounty_id: u64, expected: u64) {
        self.world
            .query()
            .to(MARKET)
            .typed(BountyMarketProxy)
            .get_balance(bounty_id)
            .returns(ExpectValue(expected))
            .run();
    }

    pub fn check_backer_amount(&mut self, bounty_id: u64, backer: TestAddress, expected: u64) {
        self.world
            .query()
            .to(MARKET)
            .typed(BountyMarketProxy)
            .get_backer_amount(bounty_id, backer)
            .returns(ExpectValue(expected))
            .run();
    }

    pub fn check_available(&mut self, bounty_id: u64, backer: TestAddress, expected: u64) {
        self.world
            .query()
            .to(MARKET)
            .typed(BountyMarketProxy)
            .get_available_token_count(bounty_id, backer)
            .returns(ExpectValue(expected))
            .run();
    }

    // ── Bids ──

    pub fn create_bid(&mut self, owner: TestAddress, bounty_id: u64) -> u64 {
        self.world
            .tx()
            .from(owner)
            .to(MARKET)
            .typed(BountyMarketProxy)
            .create_bid(bounty_id, ManagedBuffer::<StaticApi>::from("we can do it"))
            .returns(ReturnsResult)
            .run()
    }

    pub fn add_member(&mut self, owner: TestAddress, bid_id: u64, member: TestAddress, shares: u64) {
        self.world
            .tx()
            .from(owner)
            .to(MARKET)
            .typed(BountyMarketProxy)
            .add_member(bid_id, member, shares)
            .run();
    }

    pub fn remove_member(&mut self, caller: TestAddress, bid_id: u64, member: TestAddress) {
        self.world
            .tx()
            .from(caller)
            .to(MARKET)
            .typed(BountyMarketProxy)
            .remove_member(bid_id, member)
            .run();
    }

    pub fn accept_bid(&mut self, bounty_owner: TestAddress, bid_id: u64) {
        self.world
            .tx()
            .from(bounty_owner)
            .to(MARKET)
            .typed(BountyMarketProxy)
            .accept_bid(bid_id)
            .run();
    }

    pub fn get_bid(&mut self, bid_id: u64) -> bounty_market::types::Bid<StaticApi> {
        self.world
            .query()
            .to(MARKET)
            .typed(BountyMarketProxy)
            .get_bid(bid_id)
            .returns(ReturnsResult)
            .run()
    }

    pub fn check_is_bidder(&mut self, bounty_id: u64, account: TestAddress, expected: bool) {
        self.world
            .query()
            .to(MARKET)
            .typed(BountyMarketProxy)
            .is_bidder(bounty_id, account)
            .returns(ExpectValue(expected))
            .run();
    }

    // ── Payout ──

    pub fn payout(&mut self, bounty_id: u64) {
        self.world
            .tx()
            .from(STRANGER)
            .to(MARKET)
            .typed(BountyMarketProxy)
            .payout(bounty_id, 0u64)
            .run();
    }

    pub fn check_credited(&mut self, account: TestAddress, expected: u64) {
        self.world
            .query()
            .to(MARKET)
            .typed(BountyMarketProxy)
            .balance_of(account, pool_token())
            .returns(ExpectValue(expected))
            .run();
    }
}
