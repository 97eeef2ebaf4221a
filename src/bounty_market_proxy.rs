use multiversx_sc::proxy_imports::*;

pub struct BountyMarketProxy;

impl<Env, From, To, Gas> TxProxyTrait<Env, From, To, Gas> for BountyMarketProxy
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    type TxProxyMethods = BountyMarketProxyMethods<Env, From, To, Gas>;

    fn proxy_methods(self, tx: Tx<Env, From, To, (), Gas, (), ()>) -> Self::TxProxyMethods {
        BountyMarketProxyMethods { wrapped_tx: tx }
    }
}

pub struct BountyMarketProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    wrapped_tx: Tx<Env, From, To, (), Gas, (), ()>,
}

impl<Env, From, Gas> BountyMarketProxyMethods<Env, From, (), Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    Gas: TxGas<Env>,
{
    pub fn init<
        Arg0: ProxyArg<BigUint<Env::Api>>,
        Arg1: ProxyArg<BigUint<Env::Api>>,
    >(
        self,
        default_max_funding: Arg0,
        default_max_payout: Arg1,
    ) -> TxTypedDeploy<Env, From, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_deploy()
            .argument(&default_max_funding)
            .argument(&default_max_payout)
            .original_result()
    }
}

impl<Env, From, To, Gas> BountyMarketProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    pub fn upgrade(
        self,
    ) -> TxTypedUpgrade<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_upgrade()
            .original_result()
    }
}

impl<Env, From, To, Gas> BountyMarketProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    pub fn create_bounty<
        Arg0: ProxyArg<ManagedBuffer<Env::Api>>,
        Arg1: ProxyArg<u64>,
        Arg2: ProxyArg<TokenIdentifier<Env::Api>>,
    >(
        self,
        description: Arg0,
        deadline: Arg1,
        token: Arg2,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("createBounty")
            .argument(&description)
            .argument(&deadline)
            .argument(&token)
            .original_result()
    }

    pub fn activate<
        Arg0: ProxyArg<u64>,
    >(
        self,
        bounty_id: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("activate")
            .argument(&bounty_id)
            .original_result()
    }

    pub fn close<
        Arg0: ProxyArg<u64>,
    >(
        self,
        bounty_id: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("close")
            .argument(&bounty_id)
            .original_result()
    }

    pub fn set_bounty_owner<
        Arg0: ProxyArg<u64>,
        Arg1: ProxyArg<ManagedAddress<Env::Api>>,
    >(
        self,
        bounty_id: Arg0,
        new_owner: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("setBountyOwner")
            .argument(&bounty_id)
            .argument(&new_owner)
            .original_result()
    }

    pub fn set_deadline<
        Arg0: ProxyArg<u64>,
        Arg1: ProxyArg<u64>,
    >(
        self,
        bounty_id: Arg0,
        deadline: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("setDeadline")
            .argument(&bounty_id)
            .argument(&deadline)
            .original_result()
    }

    pub fn set_max_payout<
        Arg0: ProxyArg<u64>,
        Arg1: ProxyArg<BigUint<Env::Api>>,
    >(
        self,
        bounty_id: Arg0,
        max_payout: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("setMaxPayout")
            .argument(&bounty_id)
            .argument(&max_payout)
            .original_result()
    }

    pub fn set_max_funding<
        Arg0: ProxyArg<u64>,
        Arg1: ProxyArg<BigUint<Env::Api>>,
    >(
        self,
        bounty_id: Arg0,
        max_funding: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("setMaxFunding")
            .argument(&bounty_id)
            .argument(&max_funding)
            .original_result()
    }

    pub fn set_description<
        Arg0: ProxyArg<u64>,
        Arg1: ProxyArg<ManagedBuffer<Env::Api>>,
    >(
        self,
        bounty_id: Arg0,
        description: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("setDescription")
            .argument(&bounty_id)
            .argument(&description)
            .original_result()
    }

    pub fn delegate_tokens<
        Arg0: ProxyArg<u64>,
        Arg1: ProxyArg<BigUint<Env::Api>>,
    >(
        self,
        bounty_id: Arg0,
        amount: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("delegateTokens")
            .argument(&bounty_id)
            .argument(&amount)
            .original_result()
    }

    pub fn revoke_tokens<
        Arg0: ProxyArg<u64>,
        Arg1: ProxyArg<BigUint<Env::Api>>,
    >(
        self,
        bounty_id: Arg0,
        amount: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("revokeTokens")
            .argument(&bounty_id)
            .argument(&amount)
            .original_result()
    }

    pub fn create_bid<
        Arg0: ProxyArg<u64>,
        Arg1: ProxyArg<ManagedBuffer<Env::Api>>,
    >(
        self,
        bounty_id: Arg0,
        description: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("createBid")
            .argument(&bounty_id)
            .argument(&description)
            .original_result()
    }

    pub fn add_member<
        Arg0: ProxyArg<u64>,
        Arg1: ProxyArg<ManagedAddress<Env::Api>>,
        Arg2: ProxyArg<BigUint<Env::Api>>,
    >(
        self,
        bid_id: Arg0,
        member: Arg1,
        shares: Arg2,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("addMember")
            .argument(&bid_id)
            .argument(&member)
            .argument(&shares)
            .original_result()
    }

    pub fn remove_member<
        Arg0: ProxyArg<u64>,
        Arg1: ProxyArg<ManagedAddress<Env::Api>>,
    >(
        self,
        bid_id: Arg0,
        member: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("removeMember")
            .argument(&bid_id)
            .argument(&member)
            .original_result()
    }

    pub fn set_bid_owner<
        Arg0: ProxyArg<u64>,
        Arg1: ProxyArg<ManagedAddress<Env::Api>>,
    >(
        self,
        bid_id: Arg0,
        new_owner: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("setBidOwner")
            .argument(&bid_id)
            .argument(&new_owner)
            .original_result()
    }

    pub fn set_shares<
        Arg0: ProxyArg<u64>,
        Arg1: ProxyArg<ManagedAddress<Env::Api>>,
        Arg2: ProxyArg<BigUint<Env::Api>>,
    >(
        self,
        bid_id: Arg0,
        member: Arg1,
        shares: Arg2,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("setShares")
            .argument(&bid_id)
            .argument(&member)
            .argument(&shares)
            .original_result()
    }

    pub fn withdraw_bid<
        Arg0: ProxyArg<u64>,
    >(
        self,
        bid_id: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("withdrawBid")
            .argument(&bid_id)
            .original_result()
    }

    pub fn accept_bid<
        Arg0: ProxyArg<u64>,
    >(
        self,
        bid_id: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("acceptBid")
            .argument(&bid_id)
            .original_result()
    }

    pub fn reject_bid<
        Arg0: ProxyArg<u64>,
    >(
        self,
        bid_id: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("rejectBid")
            .argument(&bid_id)
            .original_result()
    }

    pub fn payout<
        Arg0: ProxyArg<u64>,
        Arg1: ProxyArg<u64>,
    >(
        self,
        bounty_id: Arg0,
        batch_index: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("payout")
            .argument(&bounty_id)
            .argument(&batch_index)
            .original_result()
    }

    pub fn fund_pool(
        self,
    ) -> TxTypedCall<Env, From, To, (), Gas, ()> {
        self.wrapped_tx
            .raw_call("fundPool")
            .original_result()
    }

    pub fn set_delegate_permission<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<bool>,
    >(
        self,
        account: Arg0,
        allowed: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("setDelegatePermission")
            .argument(&account)
            .argument(&allowed)
            .original_result()
    }

    pub fn set_manager_permission<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<bool>,
    >(
        self,
        account: Arg0,
        allowed: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("setManagerPermission")
            .argument(&account)
            .argument(&allowed)
            .original_result()
    }

    pub fn pool_transfer<
        Arg0: ProxyArg<TokenIdentifier<Env::Api>>,
        Arg1: ProxyArg<ManagedAddress<Env::Api>>,
        Arg2: ProxyArg<BigUint<Env::Api>>,
    >(
        self,
        token: Arg0,
        to: Arg1,
        amount: Arg2,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("poolTransfer")
            .argument(&token)
            .argument(&to)
            .argument(&amount)
            .original_result()
    }

    pub fn withdraw_balance<
        Arg0: ProxyArg<TokenIdentifier<Env::Api>>,
    >(
        self,
        token: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("withdrawBalance")
            .argument(&token)
            .original_result()
    }

    pub fn get_contract_config(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, MultiValue3<BigUint<Env::Api>, BigUint<Env::Api>, u64>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getContractConfig")
            .original_result()
    }

    pub fn get_bounty<
        Arg0: ProxyArg<u64>,
    >(
        self,
        bounty_id: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, crate::types::Bounty<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getBounty")
            .argument(&bounty_id)
            .original_result()
    }

    pub fn get_bounty_count(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getBountyCount")
            .original_result()
    }

    pub fn get_active_bounty_count<
        Arg0: ProxyArg<TokenIdentifier<Env::Api>>,
    >(
        self,
        token: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getActiveBountyCount")
            .argument(&token)
            .original_result()
    }

    pub fn get_active_bounty_at<
        Arg0: ProxyArg<TokenIdentifier<Env::Api>>,
        Arg1: ProxyArg<u64>,
    >(
        self,
        token: Arg0,
        index: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getActiveBountyAt")
            .argument(&token)
            .argument(&index)
            .original_result()
    }

    pub fn get_balance<
        Arg0: ProxyArg<u64>,
    >(
        self,
        bounty_id: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getBalance")
            .argument(&bounty_id)
            .original_result()
    }

    pub fn is_bidder<
        Arg0: ProxyArg<u64>,
        Arg1: ProxyArg<ManagedAddress<Env::Api>>,
    >(
        self,
        bounty_id: Arg0,
        account: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("isBidder")
            .argument(&bounty_id)
            .argument(&account)
            .original_result()
    }

    pub fn get_backer_amount<
        Arg0: ProxyArg<u64>,
        Arg1: ProxyArg<ManagedAddress<Env::Api>>,
    >(
        self,
        bounty_id: Arg0,
        backer: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getBackerAmount")
            .argument(&bounty_id)
            .argument(&backer)
            .original_result()
    }

    pub fn get_backer_active_amount<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<TokenIdentifier<Env::Api>>,
    >(
        self,
        backer: Arg0,
        token: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getBackerActiveAmount")
            .argument(&backer)
            .argument(&token)
            .original_result()
    }

    pub fn get_available_token_count<
        Arg0: ProxyArg<u64>,
        Arg1: ProxyArg<ManagedAddress<Env::Api>>,
    >(
        self,
        bounty_id: Arg0,
        backer: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getAvailableTokenCount")
            .argument(&bounty_id)
            .argument(&backer)
            .original_result()
    }

    pub fn get_available_tokens<
        Arg0: ProxyArg<TokenIdentifier<Env::Api>>,
        Arg1: ProxyArg<ManagedAddress<Env::Api>>,
    >(
        self,
        token: Arg0,
        backer: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getAvailableTokens")
            .argument(&token)
            .argument(&backer)
            .original_result()
    }

    pub fn get_bid<
        Arg0: ProxyArg<u64>,
    >(
        self,
        bid_id: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, crate::types::Bid<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getBid")
            .argument(&bid_id)
            .original_result()
    }

    pub fn get_bid_count(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getBidCount")
            .original_result()
    }

    pub fn get_bid_member<
        Arg0: ProxyArg<u64>,
        Arg1: ProxyArg<ManagedAddress<Env::Api>>,
    >(
        self,
        bid_id: Arg0,
        member: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, crate::types::BidMember<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getBidMember")
            .argument(&bid_id)
            .argument(&member)
            .original_result()
    }

    pub fn get_member_shares<
        Arg0: ProxyArg<u64>,
        Arg1: ProxyArg<ManagedAddress<Env::Api>>,
    >(
        self,
        bid_id: Arg0,
        member: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getMemberShares")
            .argument(&bid_id)
            .argument(&member)
            .original_result()
    }

    pub fn get_bounty_bid_count<
        Arg0: ProxyArg<u64>,
    >(
        self,
        bounty_id: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getBountyBidCount")
            .argument(&bounty_id)
            .original_result()
    }

    pub fn get_accepted_bid_count<
        Arg0: ProxyArg<u64>,
    >(
        self,
        bounty_id: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getAcceptedBidCount")
            .argument(&bounty_id)
            .original_result()
    }

    pub fn get_pool_balance<
        Arg0: ProxyArg<TokenIdentifier<Env::Api>>,
    >(
        self,
        token: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getPoolBalance")
            .argument(&token)
            .original_result()
    }

    pub fn balance_of<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<TokenIdentifier<Env::Api>>,
    >(
        self,
        account: Arg0,
        token: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("balanceOf")
            .argument(&account)
            .argument(&token)
            .original_result()
    }

    pub fn is_delegate<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
    >(
        self,
        account: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("isDelegate")
            .argument(&account)
            .original_result()
    }

    pub fn is_manager<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
    >(
        self,
        account: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("isManager")
            .argument(&account)
            .original_result()
    }

    pub fn get_delegate_count(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getDelegateCount")
            .original_result()
    }

    pub fn get_delegated_balance<
        Arg0: ProxyArg<TokenIdentifier<Env::Api>>,
        Arg1: ProxyArg<ManagedAddress<Env::Api>>,
    >(
        self,
        token: Arg0,
        owner: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getDelegatedBalance")
            .argument(&token)
            .argument(&owner)
            .original_result()
    }

    pub fn get_total_delegated<
        Arg0: ProxyArg<TokenIdentifier<Env::Api>>,
    >(
        self,
        token: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getTotalDelegated")
            .argument(&token)
            .original_result()
    }
}
