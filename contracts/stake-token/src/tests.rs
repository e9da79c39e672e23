#![cfg(test)]

mod tests {
    use crate::{StakeToken, StakeTokenClient};
    use shared::errors::Error;
    use shared::types::to_base_units;
    use soroban_sdk::{
        testutils::{Address as _, Ledger},
        Address, Env, String,
    };

    const INITIAL_SUPPLY: i128 = 1_000_000;

    fn tokens(whole: i128) -> i128 {
        to_base_units(whole).unwrap()
    }

    fn setup_env() -> (Env, Address, StakeTokenClient<'static>) {
        let env = Env::default();
        env.mock_all_auths();
        let admin = Address::generate(&env);
        let contract_id = env.register_contract(None, StakeToken);
        let client = StakeTokenClient::new(&env, &contract_id);
        client.initialize(
            &admin,
            &String::from_str(&env, "StakeToken"),
            &String::from_str(&env, "STK"),
            &INITIAL_SUPPLY,
        );
        (env, admin, client)
    }

    #[test]
    fn test_initialize_mints_supply_to_admin() {
        let (env, admin, client) = setup_env();

        assert_eq!(client.balance(&admin), tokens(INITIAL_SUPPLY));
        assert_eq!(client.total_supply(), tokens(INITIAL_SUPPLY));
        assert_eq!(client.decimals(), 18);
        assert_eq!(client.name(), String::from_str(&env, "StakeToken"));
        assert_eq!(client.symbol(), String::from_str(&env, "STK"));
        assert_eq!(client.get_admin(), admin);
    }

    #[test]
    fn test_initialize_twice_fails() {
        let (env, admin, client) = setup_env();

        let result = client.try_initialize(
            &admin,
            &String::from_str(&env, "StakeToken"),
            &String::from_str(&env, "STK"),
            &INITIAL_SUPPLY,
        );
        assert_eq!(result, Err(Ok(Error::AlreadyInit)));
    }

    #[test]
    fn test_initialize_negative_supply_fails() {
        let env = Env::default();
        env.mock_all_auths();
        let admin = Address::generate(&env);
        let client = StakeTokenClient::new(&env, &env.register_contract(None, StakeToken));

        let result = client.try_initialize(
            &admin,
            &String::from_str(&env, "StakeToken"),
            &String::from_str(&env, "STK"),
            &-1,
        );
        assert_eq!(result, Err(Ok(Error::InvInput)));
    }

    #[test]
    fn test_mint_increases_supply() {
        let (env, _, client) = setup_env();
        let user = Address::generate(&env);

        client.mint(&user, &500);

        assert_eq!(client.balance(&user), 500);
        assert_eq!(client.total_supply(), tokens(INITIAL_SUPPLY) + 500);
    }

    #[test]
    fn test_transfer() {
        let (env, admin, client) = setup_env();
        let user = Address::generate(&env);

        client.transfer(&admin, &user, &tokens(1000));

        assert_eq!(client.balance(&user), tokens(1000));
        assert_eq!(client.balance(&admin), tokens(INITIAL_SUPPLY - 1000));
    }

    #[test]
    #[should_panic(expected = "Error(Contract, #8)")]
    fn test_transfer_insufficient_funds() {
        let (env, _, client) = setup_env();
        let user = Address::generate(&env);
        let other = Address::generate(&env);

        client.transfer(&user, &other, &1);
    }

    #[test]
    fn test_transfer_requires_owner_signature() {
        let (env, admin, client) = setup_env();
        let user = Address::generate(&env);
        env.set_auths(&[]);

        let result = client.try_transfer(&admin, &user, &tokens(1));
        assert!(result.is_err());
        assert_eq!(client.balance(&user), 0);
        assert_eq!(client.balance(&admin), tokens(INITIAL_SUPPLY));
    }

    #[test]
    #[should_panic(expected = "Error(Contract, #4)")]
    fn test_transfer_negative_amount() {
        let (env, admin, client) = setup_env();
        let user = Address::generate(&env);

        client.transfer(&admin, &user, &-5);
    }

    #[test]
    fn test_approve_and_transfer_from() {
        let (env, admin, client) = setup_env();
        let spender = Address::generate(&env);
        let recipient = Address::generate(&env);

        client.approve(&admin, &spender, &300, &100);
        assert_eq!(client.allowance(&admin, &spender), 300);

        client.transfer_from(&spender, &admin, &recipient, &200);

        assert_eq!(client.balance(&recipient), 200);
        assert_eq!(client.allowance(&admin, &spender), 100);
    }

    #[test]
    #[should_panic(expected = "Error(Contract, #9)")]
    fn test_transfer_from_exceeds_allowance() {
        let (env, admin, client) = setup_env();
        let spender = Address::generate(&env);
        let recipient = Address::generate(&env);

        client.approve(&admin, &spender, &100, &100);
        client.transfer_from(&spender, &admin, &recipient, &101);
    }

    #[test]
    #[should_panic(expected = "Error(Contract, #8)")]
    fn test_transfer_from_exceeds_balance() {
        let (env, _, client) = setup_env();
        let owner = Address::generate(&env);
        let spender = Address::generate(&env);

        client.mint(&owner, &50);
        client.approve(&owner, &spender, &100, &100);
        client.transfer_from(&spender, &owner, &spender, &60);
    }

    #[test]
    fn test_allowance_expires() {
        let (env, admin, client) = setup_env();
        let spender = Address::generate(&env);

        client.approve(&admin, &spender, &300, &10);
        assert_eq!(client.allowance(&admin, &spender), 300);

        env.ledger().with_mut(|li| {
            li.sequence_number = 11;
        });
        assert_eq!(client.allowance(&admin, &spender), 0);
    }

    #[test]
    #[should_panic(expected = "Error(Contract, #4)")]
    fn test_approve_with_past_expiration() {
        let (env, admin, client) = setup_env();
        let spender = Address::generate(&env);

        env.ledger().with_mut(|li| {
            li.sequence_number = 50;
        });
        client.approve(&admin, &spender, &300, &10);
    }

    #[test]
    fn test_burn_and_burn_from() {
        let (env, admin, client) = setup_env();
        let spender = Address::generate(&env);

        client.burn(&admin, &tokens(10));
        assert_eq!(client.total_supply(), tokens(INITIAL_SUPPLY - 10));

        client.approve(&admin, &spender, &tokens(5), &100);
        client.burn_from(&spender, &admin, &tokens(5));

        assert_eq!(client.total_supply(), tokens(INITIAL_SUPPLY - 15));
        assert_eq!(client.balance(&admin), tokens(INITIAL_SUPPLY - 15));
        assert_eq!(client.allowance(&admin, &spender), 0);
    }
}
