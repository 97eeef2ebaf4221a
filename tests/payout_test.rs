mod common;

use bounty_market::bounty_market_proxy::BountyMarketProxy;
use bounty_market::errors::*;
use common::*;
use multiversx_sc_scenario::imports::*;

/// Active bounty backed with `backing` by BACKER_A, capped at `max_payout` per call.
fn funded_bounty(state: &mut MarketTestState, backing: u64, max_payout: u64) -> u64 {
    let bounty_id = state.create_active_bounty(SPONSOR);
    state.delegate(BACKER_A, bounty_id, backing);
    state.set_max_payout(SPONSOR, bounty_id, max_payout);
    bounty_id
}

fn check_pool_balance(state: &mut MarketTestState, expected: u64) {
    state
        .world
        .query()
        .to(MARKET)
        .typed(BountyMarketProxy)
        .get_pool_balance(pool_token())
        .returns(ExpectValue(expected))
        .run();
}

fn check_total_delegated(state: &mut MarketTestState, expected: u64) {
    state
        .world
        .query()
        .to(MARKET)
        .typed(BountyMarketProxy)
        .get_total_delegated(pool_token())
        .returns(ExpectValue(expected))
        .run();
}

#[test]
fn test_payout_splits_cap_evenly_across_two_accepted_bids() {
    let mut state = MarketTestState::new();
    state.grant_market_manager();
    let bounty_id = funded_bounty(&mut state, 1_000, 10);

    let first = state.create_bid(ALICE, bounty_id);
    let second = state.create_bid(BOB, bounty_id);
    state.accept_bid(SPONSOR, first);
    state.accept_bid(SPONSOR, second);

    state.payout(bounty_id);

    state.check_balance(bounty_id, 990);
    state.check_credited(ALICE, 5);
    state.check_credited(BOB, 5);
    assert_eq!(state.get_bid(first).amount_paid, BigUint::from(5u64));
    assert_eq!(state.get_bid(second).amount_paid, BigUint::from(5u64));

    state.check_backer_amount(bounty_id, BACKER_A, 990);
    check_pool_balance(&mut state, POOL_SUPPLY - 10);
    check_total_delegated(&mut state, 990);
}

#[test]
fn test_repeated_payouts_never_pay_twice_from_the_same_funds() {
    let mut state = MarketTestState::new();
    state.grant_market_manager();
    let bounty_id = funded_bounty(&mut state, 1_000, 10);

    let bid_id = state.create_bid(ALICE, bounty_id);
    state.add_member(ALICE, bid_id, BOB, 1);
    state.accept_bid(SPONSOR, bid_id);

    state.payout(bounty_id);
    state.payout(bounty_id);

    state.check_balance(bounty_id, 980);
    state.check_credited(ALICE, 10);
    state.check_credited(BOB, 10);
    assert_eq!(state.get_bid(bid_id).amount_paid, BigUint::from(20u64));
    check_pool_balance(&mut state, POOL_SUPPLY - 20);
}

#[test]
fn test_payout_is_proportional_and_leaves_dust() {
    let mut state = MarketTestState::new();
    state.grant_market_manager();
    let bounty_id = state.create_active_bounty(SPONSOR);
    state.delegate(BACKER_A, bounty_id, 600);
    state.delegate(BACKER_B, bounty_id, 400);
    state.set_max_payout(SPONSOR, bounty_id, 10);

    let bid_id = state.create_bid(ALICE, bounty_id);
    state.add_member(ALICE, bid_id, BOB, 2);
    state.accept_bid(SPONSOR, bid_id);

    state.payout(bounty_id);

    // 10 * 1/3 and 10 * 2/3, floored; 1 stays in the bounty
    state.check_credited(ALICE, 3);
    state.check_credited(BOB, 6);
    state.check_balance(bounty_id, 991);

    // 9 debited pro rata: 5.4 and 3.6 floored, the leftover unit to the first backer
    state.check_backer_amount(bounty_id, BACKER_A, 594);
    state.check_backer_amount(bounty_id, BACKER_B, 397);
    check_total_delegated(&mut state, 991);
}

#[test]
fn test_uncapped_payout_drains_the_bounty() {
    let mut state = MarketTestState::new();
    state.grant_market_manager();
    let bounty_id = funded_bounty(&mut state, 1_000, 0);

    let bid_id = state.create_bid(ALICE, bounty_id);
    state.accept_bid(SPONSOR, bid_id);

    state.payout(bounty_id);

    state.check_balance(bounty_id, 0);
    state.check_credited(ALICE, 1_000);
    state.check_backer_amount(bounty_id, BACKER_A, 0);
    check_total_delegated(&mut state, 0);
    check_pool_balance(&mut state, POOL_SUPPLY - 1_000);

    // nothing left to disburse
    state.payout(bounty_id);
    state.check_credited(ALICE, 1_000);
}

#[test]
fn test_payout_without_accepted_bids_is_a_no_op() {
    let mut state = MarketTestState::new();
    let bounty_id = funded_bounty(&mut state, 1_000, 10);
    state.create_bid(ALICE, bounty_id);

    // no manager role needed when there is nothing to pay
    state.payout(bounty_id);

    state.check_balance(bounty_id, 1_000);
    state.check_credited(ALICE, 0);
}

#[test]
fn test_payout_with_zero_total_shares_is_a_no_op() {
    let mut state = MarketTestState::new();
    state.grant_market_manager();
    let bounty_id = funded_bounty(&mut state, 1_000, 10);

    let bid_id = state.create_bid(ALICE, bounty_id);
    state
        .world
        .tx()
        .from(ALICE)
        .to(MARKET)
        .typed(BountyMarketProxy)
        .set_shares(bid_id, ALICE, 0u64)
        .run();
    state.accept_bid(SPONSOR, bid_id);

    state.payout(bounty_id);

    state.check_balance(bounty_id, 1_000);
    state.check_credited(ALICE, 0);
}

#[test]
fn test_payout_fails_atomically_without_manager_role() {
    let mut state = MarketTestState::new();
    let bounty_id = funded_bounty(&mut state, 1_000, 10);

    let bid_id = state.create_bid(ALICE, bounty_id);
    state.accept_bid(SPONSOR, bid_id);

    state
        .world
        .tx()
        .from(STRANGER)
        .to(MARKET)
        .typed(BountyMarketProxy)
        .payout(bounty_id, 0u64)
        .returns(ExpectError(4, ERR_ACCESS_DENIED))
        .run();

    state.check_balance(bounty_id, 1_000);
    state.check_backer_amount(bounty_id, BACKER_A, 1_000);
    state.check_credited(ALICE, 0);
    check_pool_balance(&mut state, POOL_SUPPLY);
    assert_eq!(state.get_bid(bid_id).amount_paid, BigUint::zero());

    // once granted, the same payout goes through
    state.grant_market_manager();
    state.payout(bounty_id);
    state.check_credited(ALICE, 10);
}

#[test]
fn test_payout_of_unknown_bounty_is_not_found() {
    let mut state = MarketTestState::new();

    state
        .world
        .tx()
        .from(STRANGER)
        .to(MARKET)
        .typed(BountyMarketProxy)
        .payout(5u64, 0u64)
        .returns(ExpectError(4, ERR_NOT_FOUND))
        .run();
}

#[test]
fn test_credited_balance_is_withdrawn_once() {
    let mut state = MarketTestState::new();
    state.grant_market_manager();
    let bounty_id = funded_bounty(&mut state, 1_000, 10);

    let first = state.create_bid(ALICE, bounty_id);
    let second = state.create_bid(BOB, bounty_id);
    state.accept_bid(SPONSOR, first);
    state.accept_bid(SPONSOR, second);
    state.payout(bounty_id);

    state
        .world
        .tx()
        .from(ALICE)
        .to(MARKET)
        .typed(BountyMarketProxy)
        .withdraw_balance(pool_token())
        .run();

    state.world.check_account(ALICE).esdt_balance(POOL_TOKEN, 5u64);
    state
        .world
        .check_account(MARKET)
        .esdt_balance(POOL_TOKEN, POOL_SUPPLY - 5);
    state.check_credited(ALICE, 0);
    state.check_credited(BOB, 5);

    state
        .world
        .tx()
        .from(ALICE)
        .to(MARKET)
        .typed(BountyMarketProxy)
        .withdraw_balance(pool_token())
        .returns(ExpectError(4, ERR_INSUFFICIENT_FUNDS))
        .run();
}

fn check_backers_sum_to_balance(state: &mut MarketTestState, bounty_id: u64) {
    let mut backed = BigUint::<StaticApi>::zero();
    for backer in [BACKER_A, BACKER_B] {
        let amount: BigUint<StaticApi> = state
            .world
            .query()
            .to(MARKET)
            .typed(BountyMarketProxy)
            .get_backer_amount(bounty_id, backer)
            .returns(ReturnsResult)
            .run();
        backed += amount;
    }

    let balance: BigUint<StaticApi> = state
        .world
        .query()
        .to(MARKET)
        .typed(BountyMarketProxy)
        .get_balance(bounty_id)
        .returns(ReturnsResult)
        .run();

    assert_eq!(backed, balance);
}

#[test]
fn test_balance_tracks_backers_through_delegate_revoke_and_payout() {
    let mut state = MarketTestState::new();
    state.grant_market_manager();
    let bounty_id = state.create_active_bounty(SPONSOR);
    state.set_max_payout(SPONSOR, bounty_id, 10);

    let bid_id = state.create_bid(ALICE, bounty_id);
    state.add_member(ALICE, bid_id, BOB, 2);
    state.accept_bid(SPONSOR, bid_id);

    state.delegate(BACKER_A, bounty_id, 700);
    check_backers_sum_to_balance(&mut state, bounty_id);
    state.delegate(BACKER_B, bounty_id, 300);
    check_backers_sum_to_balance(&mut state, bounty_id);

    state.payout(bounty_id);
    state.check_balance(bounty_id, 991);
    check_backers_sum_to_balance(&mut state, bounty_id);

    state.revoke(BACKER_A, bounty_id, 100);
    check_backers_sum_to_balance(&mut state, bounty_id);

    state.delegate(BACKER_B, bounty_id, 250);
    check_backers_sum_to_balance(&mut state, bounty_id);

    state.payout(bounty_id);
    check_backers_sum_to_balance(&mut state, bounty_id);

    state.revoke(BACKER_B, bounty_id, 10_000);
    state.check_backer_amount(bounty_id, BACKER_B, 0);
    check_backers_sum_to_balance(&mut state, bounty_id);

    state.payout(bounty_id);
    check_backers_sum_to_balance(&mut state, bounty_id);
}

#[test]
fn test_payout_from_closed_bounty_is_rejected() {
    let mut state = MarketTestState::new();
    state.grant_market_manager();
    let bounty_id = funded_bounty(&mut state, 1_000, 10);

    let bid_id = state.create_bid(ALICE, bounty_id);
    state.accept_bid(SPONSOR, bid_id);
    state.close(SPONSOR, bounty_id);

    state
        .world
        .tx()
        .from(STRANGER)
        .to(MARKET)
        .typed(BountyMarketProxy)
        .payout(bounty_id, 0u64)
        .returns(ExpectError(4, ERR_INVALID_STATE))
        .run();

    state.check_credited(ALICE, 0);
    check_total_delegated(&mut state, 0);
    check_pool_balance(&mut state, POOL_SUPPLY);
}

#[test]
fn test_availability_never_exceeds_undelegated_supply() {
    let mut state = MarketTestState::new();
    state.grant_market_manager();
    let first = funded_bounty(&mut state, 10_000, 10);
    let second = state.create_active_bounty(SPONSOR);
    state.delegate(BACKER_B, second, 10_000);

    let bid_id = state.create_bid(ALICE, first);
    state.accept_bid(SPONSOR, bid_id);
    state.payout(first);

    // fair share is now 9995 against 9990 backed, but every pooled token is delegated
    check_pool_balance(&mut state, POOL_SUPPLY - 10);
    check_total_delegated(&mut state, POOL_SUPPLY - 10);
    state.check_available(second, BACKER_A, 0);

    state
        .world
        .tx()
        .from(BACKER_A)
        .to(MARKET)
        .typed(BountyMarketProxy)
        .delegate_tokens(second, 5u64)
        .returns(ExpectError(4, ERR_INSUFFICIENT_FUNDS))
        .run();
}
