/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use directconnect::input::{CreateBgpPeerInput, CreateLagInput, DescribeLoaInput};
use directconnect::json::{deserialize_output, parse_error, serialize_input};
use directconnect::model::{
    AddressFamily, BgpPeer, BgpStatus, ConnectionState, GatewayType, HasLogicalRedundancy,
    LoaContentType, NewBgpPeer, Tag,
};
use directconnect::operation::{
    CreateBgpPeer, CreateLag, DescribeConnections, DescribeDirectConnectGatewayAssociations,
    DescribeLoa, OperationShape,
};
use directconnect::{Blob, Instant};
use pretty_assertions::assert_eq;
use protocol_test_helpers::{assert_json_eq, assert_ok, forbid_members, require_members};

#[test]
fn create_bgp_peer_request_body() {
    let input = CreateBgpPeerInput::builder()
        .virtual_interface_id("dxvif-fg5678gh")
        .new_bgp_peer(
            NewBgpPeer::builder()
                .asn(64520)
                .address_family(AddressFamily::Ipv6)
                .build(),
        )
        .build();
    let body = serialize_input::<CreateBgpPeer>(&input).unwrap();
    assert_json_eq(
        &body,
        r#"{
            "virtualInterfaceId": "dxvif-fg5678gh",
            "newBGPPeer": { "asn": 64520, "addressFamily": "ipv6" }
        }"#,
    );
    assert_eq!(CreateBgpPeer::TARGET, "OvertureService.CreateBGPPeer");
}

#[test]
fn unset_members_are_not_serialized() {
    let input = CreateLagInput::builder()
        .number_of_connections(2)
        .location("EqDC2")
        .connections_bandwidth("10Gbps")
        .child_connection_tags(Tag::builder().key("role").value("member").build())
        .build();
    let body = serialize_input::<CreateLag>(&input).unwrap();
    assert_ok(require_members(
        &body,
        &["numberOfConnections", "location", "connectionsBandwidth", "childConnectionTags"],
    ));
    assert_ok(forbid_members(&body, &["lagName", "tags", "providerName", "connectionId"]));
}

#[test]
fn enum_members_serialize_as_raw_strings() {
    let input = DescribeLoaInput::builder()
        .connection_id("dxcon-abc123")
        .loa_content_type(LoaContentType::ApplicationPdf)
        .build();
    let body = serialize_input::<DescribeLoa>(&input).unwrap();
    assert_json_eq(
        &body,
        r#"{"connectionId": "dxcon-abc123", "loaContentType": "application/pdf"}"#,
    );
}

#[test]
fn describe_connections_response() {
    let body = br#"{
        "connections": [
            {
                "ownerAccount": "123456789012",
                "connectionId": "dxcon-fguhmqlc",
                "connectionName": "primary",
                "connectionState": "available",
                "region": "us-east-1",
                "location": "EqDC2",
                "bandwidth": "1Gbps",
                "vlan": 101,
                "loaIssueTime": 1576540098.5,
                "jumboFrameCapable": true,
                "hasLogicalRedundancy": "no",
                "tags": [{"key": "env", "value": "prod"}],
                "encryptionMode": "should_encrypt"
            },
            {
                "connectionId": "dxcon-ffzjp3mu",
                "connectionState": "provisioning"
            }
        ]
    }"#;
    let output = deserialize_output::<DescribeConnections>(body).unwrap();
    let connections = output.connections().unwrap();
    assert_eq!(connections.len(), 2);

    let primary = &connections[0];
    assert_eq!(primary.connection_id(), Some("dxcon-fguhmqlc"));
    assert_eq!(primary.connection_state(), Some(&ConnectionState::Available));
    assert_eq!(primary.vlan(), Some(101));
    assert_eq!(
        primary.loa_issue_time(),
        Some(&Instant::from_secs_and_nanos(1576540098, 500_000_000))
    );
    assert_eq!(primary.jumbo_frame_capable(), Some(true));
    assert_eq!(
        primary.has_logical_redundancy(),
        Some(&HasLogicalRedundancy::No)
    );
    assert_eq!(primary.tags().map(|t| t.len()), Some(1));
    assert_eq!(primary.lag_id(), None);

    let secondary = &connections[1];
    assert_eq!(
        secondary.connection_state(),
        Some(&ConnectionState::Unknown("provisioning".to_owned()))
    );
    assert_eq!(
        secondary.to_string(),
        "{connectionId: dxcon-ffzjp3mu, connectionState: provisioning}"
    );
}

#[test]
fn gateway_association_response() {
    let body = br#"{
        "directConnectGatewayAssociations": [{
            "directConnectGatewayId": "5f294f92-bafb-4011-916d-9b0bexample",
            "associationState": "associated",
            "associatedGateway": {
                "id": "tgw-02f776b1a7example",
                "type": "transitGateway",
                "ownerAccount": "123456789012",
                "region": "us-east-1"
            },
            "allowedPrefixesToDirectConnectGateway": [{"cidr": "10.0.0.0/16"}]
        }],
        "nextToken": "next"
    }"#;
    let output = deserialize_output::<DescribeDirectConnectGatewayAssociations>(body).unwrap();
    assert_eq!(output.next_token(), Some("next"));
    let association = &output.direct_connect_gateway_associations().unwrap()[0];
    let gateway = association.associated_gateway().unwrap();
    assert_eq!(gateway.r#type(), Some(&GatewayType::TransitGateway));
    assert_eq!(
        association
            .allowed_prefixes_to_direct_connect_gateway()
            .and_then(|p| p[0].cidr()),
        Some("10.0.0.0/16")
    );
}

#[test]
fn loa_content_is_base64() {
    let body = br#"{"loaContent": "JVBERi0xLjQ=", "loaContentType": "application/pdf"}"#;
    let loa = deserialize_output::<DescribeLoa>(body).unwrap();
    assert_eq!(loa.loa_content(), Some(&Blob::new(&b"%PDF-1.4"[..])));
    assert_eq!(loa.loa_content_type(), Some(&LoaContentType::ApplicationPdf));
    assert_eq!(
        loa.to_string(),
        "{loaContent: Blob(8 bytes), loaContentType: application/pdf}"
    );
}

#[test]
fn timestamps_serialize_as_epoch_seconds() {
    let history = directconnect::model::VirtualInterfaceTestHistory::builder()
        .test_id("test-1")
        .start_time(Instant::from_epoch_seconds(1576540098))
        .end_time(Instant::from_secs_and_nanos(1576540158, 250_000_000))
        .build();
    let body = serde_json::to_string(&history).unwrap();
    assert_json_eq(
        &body,
        r#"{"testId": "test-1", "startTime": 1576540098, "endTime": 1576540158.25}"#,
    );
}

#[test]
fn bgp_status_unknown_is_a_known_value() {
    let peer: BgpPeer = serde_json::from_str(r#"{"bgpStatus": "unknown"}"#).unwrap();
    assert!(matches!(peer.bgp_status(), Some(BgpStatus::UnknownValue)));
    assert_eq!(serde_json::to_string(&peer).unwrap(), r#"{"bgpStatus":"unknown"}"#);
}

#[test]
fn shapes_only_deserialize_from_objects() {
    let err = serde_json::from_str::<BgpPeer>(r#"["bp-1", 65000]"#).unwrap_err();
    assert!(err.to_string().contains("expected a BgpPeer object"), "{}", err);
    assert!(deserialize_output::<DescribeConnections>(b"[]").is_err());

    let peer: BgpPeer = serde_json::from_str(r#"{"bgpPeerId": "bp-1", "asn": 65000}"#).unwrap();
    assert_eq!(peer, BgpPeer::builder().bgp_peer_id("bp-1").asn(65000).build());
}

#[test]
fn service_error_response() {
    let err = parse_error(
        br#"{"__type": "DirectConnectClientException", "message": "Connection dxcon-1 not found"}"#,
    )
    .unwrap();
    assert!(err.is_direct_connect_client_exception());
    assert_eq!(
        err.to_string(),
        "DirectConnectClientException: Connection dxcon-1 not found"
    );
}
