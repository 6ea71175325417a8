use blockchain_core::{OutPoint, ShaHash, ALL_SHAS};
use blockchain_ws::{
    parse_cmd, Cmd, ListAllTransactionsCmd, NotifyNewTXsCmd, NotifySpentCmd, RescanCmd,
    WalletIsLockedCmd, WsCommand,
};
use proptest::prelude::*;
use std::collections::BTreeSet;

fn decode(bytes: &[u8]) -> WsCommand {
    parse_cmd(bytes).unwrap()
}

proptest! {
    #[test]
    fn prop_wallet_is_locked_round_trips(account in "[a-zA-Z0-9 ]{0,12}", id in any::<i64>()) {
        let cmd = WalletIsLockedCmd::new(id, Some(account.clone()));
        prop_assert_eq!(cmd.to_raw().params.is_empty(), account.is_empty());
        prop_assert_eq!(decode(&cmd.marshal_json().unwrap()), WsCommand::from(cmd));
    }

    #[test]
    fn prop_list_all_transactions_round_trips(account in "\\PC{0,12}") {
        let cmd = ListAllTransactionsCmd::new("list", Some(account));
        prop_assert_eq!(decode(&cmd.marshal_json().unwrap()), WsCommand::from(cmd));
    }

    #[test]
    fn prop_notify_spent_round_trips(bytes in any::<[u8; 32]>(), index in any::<u32>()) {
        let cmd = NotifySpentCmd::new(1, OutPoint::new(ShaHash::from_bytes(bytes), index));
        prop_assert_eq!(decode(&cmd.marshal_json().unwrap()), WsCommand::from(cmd));
    }

    #[test]
    fn prop_notify_new_txs_round_trips(
        addresses in prop::collection::vec("[1-9A-HJ-NP-Za-km-z]{26,34}", 0..6),
    ) {
        let cmd = NotifyNewTXsCmd::new("n", addresses);
        prop_assert_eq!(decode(&cmd.marshal_json().unwrap()), WsCommand::from(cmd));
    }

    #[test]
    fn prop_rescan_round_trips(
        begin in any::<i32>(),
        addresses in prop::collection::btree_set("[1-9A-HJ-NP-Za-km-z]{26,34}", 0..6),
        end in prop::option::of(any::<i64>().prop_filter("bounded", |end| *end != ALL_SHAS)),
    ) {
        let cmd = RescanCmd::new(7, begin, addresses, end);
        let expected_len = if end.is_some() { 3 } else { 2 };
        prop_assert_eq!(cmd.to_raw().params.len(), expected_len);
        prop_assert_eq!(decode(&cmd.marshal_json().unwrap()), WsCommand::from(cmd));
    }
}

#[test]
fn test_rescan_sentinel_survives_round_trip() {
    let cmd = RescanCmd::new(1, 0, BTreeSet::new(), Some(ALL_SHAS));
    match decode(&cmd.marshal_json().unwrap()) {
        WsCommand::Rescan(decoded) => assert!(decoded.is_unbounded()),
        other => panic!("Expected rescan, got {:?}", other),
    }
}
