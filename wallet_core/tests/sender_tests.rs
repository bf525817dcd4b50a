use multisend_ledger::parse_recipients;
use multisend_nullables::{NullContract, NullSession};
use multisend_transactions::{BatchError, DEFAULT_GAS};
use multisend_types::{NetworkId, OnChainAmount};
use multisend_wallet_core::{
    Sender, SenderConfig, Session, WalletError, CALL_FAILED_NOTICE,
};

fn e24(tokens: u64) -> OnChainAmount {
    format!("{tokens}{}", "0".repeat(24)).parse().unwrap()
}

fn sender(session: NullSession) -> Sender<NullSession, NullContract> {
    Sender::new(&SenderConfig::default(), session, NullContract::new())
}

#[tokio::test]
async fn submits_one_call_with_all_operations() {
    let sender = sender(NullSession::signed_in("me.testnet"));
    sender.caller().succeed_with("tx123");

    let parsed = parse_recipients("acct1 10\nacct2 30\nacct3 40");
    let receipt = sender.submit(&parsed).await.unwrap();

    assert_eq!(receipt.operations, 3);
    assert_eq!(receipt.deposit, e24(80));
    assert_eq!(receipt.transaction_hash.as_deref(), Some("tx123"));
    assert_eq!(
        receipt.signer_url,
        "https://explorer.testnet.near.org/accounts/me.testnet"
    );
    assert_eq!(
        receipt.contract_url,
        "https://explorer.testnet.near.org/accounts/multisender.testnet"
    );

    let calls = sender.caller().calls();
    assert_eq!(calls.len(), 1);
    let call = &calls[0];
    assert_eq!(call.signer_id.as_str(), "me.testnet");
    assert_eq!(call.method_name, "send");
    assert_eq!(call.gas, DEFAULT_GAS);
    assert_eq!(call.deposit, e24(80));
    let amounts: Vec<_> = call.args.operations.iter().map(|op| op.amount.clone()).collect();
    assert_eq!(amounts, [e24(10), e24(30), e24(40)]);
}

#[tokio::test]
async fn not_signed_in_never_calls_the_contract() {
    let sender = sender(NullSession::signed_out("me.testnet"));
    let err = sender.submit(&parse_recipients("alice 1")).await.unwrap_err();

    assert!(matches!(err, WalletError::NotSignedIn));
    assert!(sender.caller().calls().is_empty());
}

#[tokio::test]
async fn login_enables_submission() {
    let mut sender = sender(NullSession::signed_out("me.testnet"));
    sender.session_mut().login().unwrap();

    assert!(sender.submit(&parse_recipients("alice 1")).await.is_ok());
    assert_eq!(sender.session().logins(), 1);
}

#[tokio::test]
async fn empty_input_is_an_empty_batch() {
    let sender = sender(NullSession::signed_in("me.testnet"));
    let err = sender.submit(&parse_recipients("nothing here")).await.unwrap_err();

    assert!(matches!(err, WalletError::Batch(BatchError::EmptyBatch)));
    assert_ne!(err.user_notice(), CALL_FAILED_NOTICE);
    assert!(sender.caller().calls().is_empty());
}

#[tokio::test]
async fn call_failure_is_reported_once_without_retry() {
    let sender = sender(NullSession::signed_in("me.testnet"));
    sender
        .caller()
        .fail_with(WalletError::CallRejected("out of gas".into()));

    let err = sender.submit(&parse_recipients("alice 1")).await.unwrap_err();

    assert_eq!(err.user_notice(), CALL_FAILED_NOTICE);
    assert_eq!(sender.caller().calls().len(), 1);
}

#[tokio::test]
async fn config_drives_gas_contract_and_network() {
    let config = SenderConfig {
        network: NetworkId::Mainnet,
        contract_id: "multisender.near".parse().unwrap(),
        method_name: "multisend".into(),
        gas: 1_000,
        ..Default::default()
    };
    let sender = Sender::new(&config, NullSession::signed_in("me.near"), NullContract::new());

    let receipt = sender.submit(&parse_recipients("bob 2")).await.unwrap();
    let call = &sender.caller().calls()[0];

    assert_eq!(call.gas, 1_000);
    assert_eq!(call.contract_id.as_str(), "multisender.near");
    assert_eq!(call.method_name, "multisend");
    assert_eq!(
        receipt.contract_url,
        "https://explorer.mainnet.near.org/accounts/multisender.near"
    );
}

#[tokio::test]
async fn prepared_batch_is_submitted_unchanged() {
    let sender = sender(NullSession::signed_in("me.testnet"));
    let batch = sender.prepare(&parse_recipients("alice 1.5\nbob 0.5\nalice 1")).unwrap();
    let expected_ops = batch.operations().to_vec();
    let expected_deposit = batch.deposit().clone();

    sender.submit_batch(batch).await.unwrap();

    let call = &sender.caller().calls()[0];
    assert_eq!(call.args.operations, expected_ops);
    assert_eq!(call.deposit, expected_deposit);
    assert_eq!(call.deposit, e24(3));
}
