use blockchain_core::{OutPoint, ShaHash, ALL_SHAS};
use blockchain_rpc::{CmdError, CodecConfig, RawCmd};
use blockchain_ws::{
    parse_cmd, parse_cmd_with, registry, Cmd, CreateEncryptedWalletCmd, GetBalancesCmd,
    GetBestBlockCmd, GetCurrentNetCmd, ListAllTransactionsCmd, NotifyNewTXsCmd, NotifySpentCmd,
    RescanCmd, WalletIsLockedCmd, WsCmd, WsCommand,
};
use serde_json::{json, Value};
use std::collections::BTreeSet;

fn addresses(items: &[&str]) -> BTreeSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn sample_commands() -> Vec<WsCommand> {
    let hash = ShaHash::double_sha256(b"funding transaction");
    vec![
        GetCurrentNetCmd::new(1).into(),
        GetBestBlockCmd::new("best").into(),
        GetBalancesCmd::new(Value::Null).into(),
        CreateEncryptedWalletCmd::new(4, "acct", "my wallet", "hunter2").into(),
        WalletIsLockedCmd::new(5, None).into(),
        WalletIsLockedCmd::new(6, Some("bob".to_string())).into(),
        ListAllTransactionsCmd::new(7, None).into(),
        ListAllTransactionsCmd::new(8, Some("savings".to_string())).into(),
        NotifyNewTXsCmd::new(9, vec!["addr1".to_string(), "addr2".to_string()]).into(),
        NotifySpentCmd::new(10, OutPoint::new(hash, 0)).into(),
        NotifySpentCmd::new(11, OutPoint::new(hash, u32::MAX)).into(),
        RescanCmd::new(12, 100, addresses(&["1A", "1B"]), None).into(),
        RescanCmd::new(13, -5, addresses(&[]), Some(2000)).into(),
    ]
}

#[test]
fn test_every_command_round_trips() {
    for cmd in sample_commands() {
        let bytes = cmd.marshal_json().unwrap();
        let decoded = parse_cmd(&bytes).unwrap();
        assert_eq!(decoded, cmd, "round trip of {}", cmd.method());
        assert_eq!(decoded.to_raw(), cmd.to_raw());
    }

    println!("✓ All websocket commands round trip");
}

#[test]
fn test_encoded_envelopes_carry_version_and_method() {
    for cmd in sample_commands() {
        let value: Value = serde_json::from_slice(&cmd.marshal_json().unwrap()).unwrap();
        assert_eq!(value["jsonrpc"], json!("1.0"));
        assert_eq!(value["method"], json!(cmd.method()));
        assert_eq!(&value["id"], cmd.id());
        assert!(value["params"].is_array());
    }
}

#[test]
fn test_rescan_scenario() {
    let input = br#"{"jsonrpc":"1.0","method":"rescan","id":1,"params":[1000,{"1Address":null}]}"#;
    let cmd = match parse_cmd(input).unwrap() {
        WsCommand::Rescan(cmd) => cmd,
        other => panic!("Expected rescan, got {:?}", other),
    };

    assert_eq!(cmd.id(), &json!(1));
    assert_eq!(cmd.begin_block, 1000);
    assert_eq!(cmd.addresses, addresses(&["1Address"]));
    assert_eq!(cmd.end_block, ALL_SHAS);

    let reencoded = cmd.to_raw();
    let original = RawCmd::from_slice(input).unwrap();
    assert_eq!(reencoded.params.len(), original.params.len());
    assert_eq!(reencoded.params[0], original.params[0]);
    let keys: Vec<&String> = reencoded.params[1].as_object().unwrap().keys().collect();
    assert_eq!(keys, vec!["1Address"]);
}

#[test]
fn test_default_elision() {
    let unlocked = WalletIsLockedCmd::new(1, Some(String::new()));
    assert!(unlocked.to_raw().params.is_empty());
    let bob = WalletIsLockedCmd::new(1, Some("bob".to_string()));
    assert_eq!(bob.to_raw().params, vec![json!("bob")]);

    let rescan = RescanCmd::new(1, 100, addresses(&["1A"]), Some(ALL_SHAS));
    assert_eq!(rescan.to_raw().params.len(), 2);
    let rescan = RescanCmd::new(1, 100, addresses(&["1A"]), Some(0));
    assert_eq!(rescan.to_raw().params.len(), 3);
}

#[test]
fn test_fixed_arity_one_off() {
    let cases: Vec<(&str, Vec<Value>)> = vec![
        ("getcurrentnet", vec![json!(1)]),
        ("getbestblock", vec![json!(1)]),
        ("getbalances", vec![json!(1)]),
        ("createencryptedwallet", vec![json!("a"), json!("b")]),
        ("createencryptedwallet", vec![json!("a"), json!("b"), json!("c"), json!("d")]),
        ("notifynewtxs", vec![]),
        ("notifynewtxs", vec![json!([]), json!([])]),
        ("notifyspent", vec![json!("00")]),
        ("notifyspent", vec![json!("00"), json!(0), json!(0)]),
    ];

    for (method, params) in cases {
        let raw = RawCmd::new(method, json!(1), params);
        assert!(
            matches!(registry().unwrap().parse(&raw), Err(CmdError::WrongNumberOfParams)),
            "{} should reject wrong arity",
            method
        );
    }
}

#[test]
fn test_optional_bound_errors_are_distinct() {
    let too_many = parse_cmd(br#"{"jsonrpc":"1.0","method":"rescan","id":1,"params":[1,{},2,3]}"#)
        .unwrap_err();
    let too_few = parse_cmd(br#"{"jsonrpc":"1.0","method":"rescan","id":1,"params":[1]}"#)
        .unwrap_err();
    assert!(matches!(too_many, CmdError::TooManyOptArgs));
    assert!(matches!(too_few, CmdError::WrongNumberOfParams));

    let err = parse_cmd(br#"{"jsonrpc":"1.0","method":"walletislocked","id":1,"params":["a","b"]}"#)
        .unwrap_err();
    assert!(matches!(err, CmdError::InvalidParams));
    let err = parse_cmd(br#"{"jsonrpc":"1.0","method":"listalltransactions","id":1,"params":[1]}"#)
        .unwrap_err();
    assert!(matches!(err, CmdError::TypeMismatch { .. }));
}

#[test]
fn test_notify_new_txs_is_atomic() {
    let input = br#"{"jsonrpc":"1.0","method":"notifynewtxs","id":1,"params":[["addr1",5]]}"#;
    let err = parse_cmd(input).unwrap_err();
    assert!(matches!(err, CmdError::TypeMismatch { .. }));
    assert_eq!(err.to_rpc_error().code, -8);
}

#[test]
fn test_notify_spent_zero_index_round_trip() {
    let hash = ShaHash::double_sha256(b"spent");
    let input = format!(
        r#"{{"jsonrpc":"1.0","method":"notifyspent","id":"n","params":["{}",0]}}"#,
        hash
    );

    let mut cmd = NotifySpentCmd::new(Value::Null, OutPoint::new(ShaHash::zero(), 9));
    cmd.unmarshal_json(input.as_bytes()).unwrap();
    assert_eq!(cmd.outpoint, OutPoint::new(hash, 0));
    assert_eq!(cmd.id(), &json!("n"));

    let value: Value = serde_json::from_slice(&cmd.marshal_json().unwrap()).unwrap();
    assert_eq!(value["params"], json!([hash.to_string(), 0]));
}

#[test]
fn test_strict_codec_config() {
    let config = CodecConfig {
        strict_version: true,
        ..CodecConfig::default()
    };
    let bytes = br#"{"jsonrpc":"2.0","method":"getbalances","id":1,"params":[]}"#;
    assert!(parse_cmd(bytes).is_ok());
    assert!(matches!(
        parse_cmd_with(bytes, &config),
        Err(CmdError::UnsupportedVersion(_))
    ));
}

#[test]
fn test_concurrent_lookups() {
    blockchain_ws::init().unwrap();
    let payload = RescanCmd::new(1, 10, addresses(&["1A"]), Some(20))
        .marshal_json()
        .unwrap();

    std::thread::scope(|scope| {
        for _ in 0..8 {
            scope.spawn(|| {
                for _ in 0..100 {
                    let cmd = parse_cmd(&payload).unwrap();
                    assert_eq!(cmd.method(), "rescan");
                }
            });
        }
    });
}
