/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use directconnect::model::{
    AddressFamily, BgpPeer, BgpStatus, Connection, ConnectionState, Lag, RouteFilterPrefix, Tag,
    VirtualInterface, VirtualInterfaceState, VirtualInterfaceTestHistory,
};
use directconnect::Instant;
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

fn bgp_status() -> impl Strategy<Value = BgpStatus> {
    prop_oneof![
        Just("up".to_owned()),
        Just("down".to_owned()),
        Just("unknown".to_owned()),
        "[a-z]{1,8}",
    ]
    .prop_map(BgpStatus::from)
}

fn address_family() -> impl Strategy<Value = AddressFamily> {
    prop_oneof![Just(AddressFamily::Ipv4), Just(AddressFamily::Ipv6)]
}

fn bgp_peer() -> impl Strategy<Value = BgpPeer> {
    (
        proptest::option::of("bp-[a-z0-9]{1,8}"),
        proptest::option::of(any::<i32>()),
        proptest::option::of(address_family()),
        proptest::option::of(bgp_status()),
        proptest::option::of("[0-9]{1,3}\\.[0-9]{1,3}\\.[0-9]{1,3}\\.[0-9]{1,3}/30"),
    )
        .prop_map(|(id, asn, family, status, customer_address)| {
            BgpPeer::builder()
                .set_bgp_peer_id(id)
                .set_asn(asn)
                .set_address_family(family)
                .set_bgp_status(status)
                .set_customer_address(customer_address)
                .build()
        })
}

fn tag() -> impl Strategy<Value = Tag> {
    ("[a-z]{1,6}", proptest::option::of("[a-z0-9]{0,6}")).prop_map(|(key, value)| {
        Tag::builder().key(key).set_value(value).build()
    })
}

fn instant() -> impl Strategy<Value = Instant> {
    (0i64..4_102_444_800, 0u32..1_000_000_000)
        .prop_map(|(secs, nanos)| Instant::from_secs_and_nanos(secs, nanos))
}

fn virtual_interface() -> impl Strategy<Value = VirtualInterface> {
    (
        proptest::option::of("dxvif-[a-z0-9]{1,8}"),
        proptest::option::of(1i32..4095),
        proptest::option::of("[a-z]{1,10}".prop_map(VirtualInterfaceState::from)),
        proptest::option::of(proptest::collection::vec(bgp_peer(), 0..3)),
        proptest::option::of(proptest::collection::vec(
            "[0-9]{1,3}\\.[0-9]{1,3}\\.0\\.0/16".prop_map(|cidr| {
                RouteFilterPrefix::builder().cidr(cidr).build()
            }),
            0..3,
        )),
        proptest::option::of(proptest::collection::vec(tag(), 0..3)),
    )
        .prop_map(|(id, vlan, state, peers, prefixes, tags)| {
            VirtualInterface::builder()
                .set_virtual_interface_id(id)
                .set_vlan(vlan)
                .set_virtual_interface_state(state)
                .set_bgp_peers(peers)
                .set_route_filter_prefixes(prefixes)
                .set_tags(tags)
                .build()
        })
}

fn test_history() -> impl Strategy<Value = VirtualInterfaceTestHistory> {
    (
        proptest::option::of("[a-z0-9-]{1,12}"),
        proptest::option::of(proptest::collection::vec("bp-[a-z0-9]{1,6}", 0..4)),
        proptest::option::of(instant()),
        proptest::option::of(instant()),
    )
        .prop_map(|(id, peers, start, end)| {
            VirtualInterfaceTestHistory::builder()
                .set_test_id(id)
                .set_bgp_peers(peers)
                .set_start_time(start)
                .set_end_time(end)
                .build()
        })
}

proptest! {
    #[test]
    fn copied_nested_members_are_equal_and_hash_equal(vif in virtual_interface()) {
        let copy = VirtualInterface::builder()
            .set_virtual_interface_id(vif.virtual_interface_id().map(str::to_owned))
            .set_vlan(vif.vlan())
            .set_virtual_interface_state(vif.virtual_interface_state().cloned())
            .set_bgp_peers(vif.bgp_peers().map(<[BgpPeer]>::to_vec))
            .set_route_filter_prefixes(
                vif.route_filter_prefixes()
                    .map(<[RouteFilterPrefix]>::to_vec),
            )
            .set_tags(vif.tags().map(<[Tag]>::to_vec))
            .build();
        prop_assert_eq!(hash_of(&copy), hash_of(&vif));
        prop_assert_eq!(copy, vif);
    }

    #[test]
    fn copied_timestamps_are_equal_and_hash_equal(history in test_history()) {
        let copy = VirtualInterfaceTestHistory::builder()
            .set_test_id(history.test_id().map(str::to_owned))
            .set_bgp_peers(history.bgp_peers().map(<[String]>::to_vec))
            .set_start_time(history.start_time().copied())
            .set_end_time(history.end_time().copied())
            .build();
        prop_assert_eq!(hash_of(&copy), hash_of(&history));
        prop_assert_eq!(&copy, &history);
        prop_assert_eq!(copy.to_string(), history.to_string());
    }

    #[test]
    fn copied_members_are_equal_and_hash_equal(peer in bgp_peer()) {
        let copy = BgpPeer::builder()
            .set_bgp_peer_id(peer.bgp_peer_id().map(str::to_owned))
            .set_asn(peer.asn())
            .set_address_family(peer.address_family().cloned())
            .set_bgp_status(peer.bgp_status().cloned())
            .set_customer_address(peer.customer_address.clone())
            .build();
        prop_assert_eq!(&copy, &peer);
        prop_assert_eq!(hash_of(&copy), hash_of(&peer));
    }

    #[test]
    fn builder_roundtrip_preserves_equality(peer in bgp_peer()) {
        let rebuilt = directconnect::model::BgpPeerBuilder::from(peer.clone()).build();
        prop_assert_eq!(hash_of(&rebuilt), hash_of(&peer));
        prop_assert_eq!(rebuilt, peer);
    }

    #[test]
    fn list_appends_accumulate_in_order(tags in proptest::collection::vec(tag(), 1..6)) {
        let vif = tags
            .iter()
            .cloned()
            .fold(VirtualInterface::builder(), |builder, tag| builder.tags(tag))
            .build();
        prop_assert_eq!(vif.tags(), Some(&tags[..]));
    }

    #[test]
    fn list_setter_replaces(first in proptest::collection::vec(tag(), 0..4), second in proptest::collection::vec(tag(), 0..4)) {
        let lag = Lag::builder()
            .set_tags(Some(first))
            .set_tags(Some(second.clone()))
            .build();
        prop_assert_eq!(lag.tags(), Some(&second[..]));
    }

    #[test]
    fn single_member_renders_one_pair(name in "[a-z0-9-]{1,16}") {
        let rendered = Connection::builder().connection_name(name.clone()).build().to_string();
        prop_assert_eq!(rendered.matches(": ").count(), 1);
        prop_assert_eq!(rendered, format!("{{connectionName: {}}}", name));
    }

    #[test]
    fn enum_setter_accepts_strings(status in bgp_status()) {
        let from_enum = BgpPeer::builder().bgp_status(status.clone()).build();
        let from_str = BgpPeer::builder().bgp_status(status.as_str()).build();
        prop_assert_eq!(from_enum, from_str);
    }
}

#[test]
fn unset_differs_from_zero_like_values() {
    let empty = Connection::builder().build();
    assert_ne!(empty, Connection::builder().vlan(0).build());
    assert_ne!(empty, Connection::builder().connection_name("").build());
    assert_ne!(empty, Connection::builder().jumbo_frame_capable(false).build());
    assert_ne!(empty, Connection::builder().set_tags(Some(vec![])).build());
    assert_eq!(empty, Connection::default());
}

#[test]
fn list_order_matters() {
    let a = Tag::builder().key("a").build();
    let b = Tag::builder().key("b").build();
    let ab = Lag::builder().tags(a.clone()).tags(b.clone()).build();
    let ba = Lag::builder().tags(b).tags(a).build();
    assert_ne!(ab, ba);
}

#[test]
fn caller_vector_is_not_aliased() {
    let mut tags = vec![Tag::builder().key("env").build()];
    let lag = Lag::builder().set_tags(Some(tags.clone())).build();
    tags.push(Tag::builder().key("team").build());
    tags[0].key = Some("changed".to_owned());
    assert_eq!(lag.tags().map(|t| t.len()), Some(1));
    assert_eq!(lag.tags().and_then(|t| t[0].key()), Some("env"));
}

#[test]
fn known_enum_values_match_their_variants() {
    let by_str = Connection::builder().connection_state("available").build();
    let by_variant = Connection::builder()
        .connection_state(ConnectionState::Available)
        .build();
    assert_eq!(by_str, by_variant);
    assert_eq!(hash_of(&by_str), hash_of(&by_variant));
}

#[test]
fn enum_equality_follows_the_wire_string() {
    let from_payload = BgpPeer::builder()
        .bgp_status(BgpStatus::Unknown("up".to_owned()))
        .build();
    let from_str = BgpPeer::builder().bgp_status("up").build();
    assert_eq!(
        serde_json::to_string(&from_payload).unwrap(),
        serde_json::to_string(&from_str).unwrap()
    );
    assert_eq!(from_payload, from_str);
    assert_eq!(hash_of(&from_payload), hash_of(&from_str));

    assert_eq!(BgpStatus::Unknown("down".to_owned()), BgpStatus::Down);
    assert_ne!(BgpStatus::Unknown("Down".to_owned()), BgpStatus::Down);
    assert!(BgpStatus::Down < BgpStatus::Up);
    assert!(BgpStatus::Unknown("a".to_owned()) < BgpStatus::Down);
}

#[test]
fn bgp_peer_example() {
    let peer = BgpPeer::builder()
        .bgp_peer_id("bp-123")
        .asn(65000)
        .bgp_status(BgpStatus::Up)
        .build();
    assert_eq!(peer.bgp_peer_id(), Some("bp-123"));
    assert_eq!(peer.asn(), Some(65000));
    assert_eq!(peer.bgp_status(), Some(&BgpStatus::Up));
    assert_eq!(
        peer.to_string(),
        "{bgpPeerId: bp-123, asn: 65000, bgpStatus: up}"
    );
}

#[test]
fn debug_lists_unset_members() {
    let debug = format!("{:?}", Tag::builder().key("env").build());
    assert!(debug.contains("key: Some(\"env\")"), "{}", debug);
    assert!(debug.contains("value: None"), "{}", debug);
}
