multiversx_sc::imports!();

use crate::errors::{ERR_ACCESS_DENIED, ERR_INSUFFICIENT_FUNDS, ERR_INVALID_STATE};
use crate::types::{BackerDebit, Bounty, BountyStatus, MemberPayout};

/// Capped, proportional disbursement of a bounty balance across every
/// member of every accepted bid.
///
/// All amounts are computed and checked before the first write. The bounty,
/// its backers and the pool tallies are debited before any member is credited,
/// and crediting only touches the internal ledger.
#[multiversx_sc::module]
pub trait PayoutModule:
    crate::events::EventsModule
    + crate::pool::PoolModule
    + crate::bounty::BountyModule
    + crate::funding::FundingModule
    + crate::bid::BidModule
{
    // ========================================================
    // ENDPOINT: payout
    // Anyone can trigger. `_batch_index` is reserved; every call
    // processes the whole accepted set.
    // ========================================================

    #[endpoint(payout)]
    fn payout(&self, bounty_id: u64, _batch_index: u64) {
        let mut bounty = self.require_bounty(bounty_id);
        // a closed bounty has already handed its backing back to the pool
        require!(bounty.status != BountyStatus::Closed, ERR_INVALID_STATE);
        if self.accepted_bids(bounty_id).is_empty() {
            return;
        }

        let per_call_cap = self.per_call_cap(&bounty);
        let total_shares = self.total_active_shares(bounty_id);
        if per_call_cap == 0u64 || total_shares == 0u64 {
            return;
        }

        let mut payouts: ManagedVec<MemberPayout<Self::Api>> = ManagedVec::new();
        let mut disbursed = BigUint::zero();
        for bid_id in self.accepted_bids(bounty_id).iter() {
            for member in self.bid_members(bid_id).iter() {
                let shares = self.bid_member(bid_id, &member).get().shares;
                let amount = &shares * &per_call_cap / &total_shares;
                if amount == 0u64 {
                    continue;
                }
                disbursed += &amount;
                payouts.push(MemberPayout {
                    bid_id,
                    member,
                    amount,
                });
            }
        }
        if disbursed == 0u64 {
            return;
        }

        let sc_address = self.blockchain().get_sc_address();
        require!(self.managers().contains(&sc_address), ERR_ACCESS_DENIED);
        require!(
            self.pool_supply(&bounty.token).get() >= disbursed,
            ERR_INSUFFICIENT_FUNDS
        );

        // ── Debit ──
        self.debit_backers(&bounty, &disbursed);
        bounty.balance -= &disbursed;
        self.bounties(bounty_id).set(&bounty);

        // ── Credit ──
        for share in payouts.iter() {
            self.credit_from_pool(&bounty.token, &share.member, &share.amount);
            self.bids(share.bid_id)
                .update(|bid| bid.amount_paid += &share.amount);
            self.member_paid_event(bounty_id, share.bid_id, &share.member, &share.amount);
        }

        self.bounty_payout_event(bounty_id, &per_call_cap, &disbursed, &bounty.balance);
    }

    // ========================================================
    // INTERNAL
    // ========================================================

    /// min(balance, max_payout), or the whole balance when uncapped.
    fn per_call_cap(&self, bounty: &Bounty<Self::Api>) -> BigUint {
        if bounty.max_payout == 0u64 {
            return bounty.balance.clone();
        }
        self.min_biguint(&bounty.balance, &bounty.max_payout)
    }

    fn total_active_shares(&self, bounty_id: u64) -> BigUint {
        let mut total = BigUint::zero();
        for bid_id in self.accepted_bids(bounty_id).iter() {
            for member in self.bid_members(bid_id).iter() {
                total += self.bid_member(bid_id, &member).get().shares;
            }
        }
        total
    }

    /// Spreads `disbursed` over the backers in proportion to what each backs.
    /// Floors first, then the remainder goes out in backer order, capped by
    /// what each backer still has. Expects `bounty.balance` to be the
    /// pre-debit balance.
    fn debit_backers(&self, bounty: &Bounty<Self::Api>, disbursed: &BigUint) {
        let mut debits: ManagedVec<BackerDebit<Self::Api>> = ManagedVec::new();
        let mut floored = BigUint::zero();
        for (backer, backed) in self.backers(bounty.id).iter() {
            let cut = &backed * disbursed / &bounty.balance;
            floored += &cut;
            debits.push(BackerDebit { backer, backed, cut });
        }

        let mut remainder = disbursed - &floored;
        for debit in debits.iter() {
            let mut cut = debit.cut.clone();
            if remainder > 0u64 {
                let extra = self.min_biguint(&remainder, &(&debit.backed - &cut));
                remainder -= &extra;
                cut += extra;
            }
            if cut == 0u64 {
                continue;
            }

            let left = &debit.backed - &cut;
            if left == 0u64 {
                self.backers(bounty.id).remove(&debit.backer);
            } else {
                self.backers(bounty.id).insert(debit.backer.clone(), left);
            }
            self.release_delegation(&bounty.token, &debit.backer, &cut);
        }
    }

    fn min_biguint(&self, a: &BigUint, b: &BigUint) -> BigUint {
        if a < b {
            a.clone()
        } else {
            b.clone()
        }
    }
}
