/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Structures and enumerations shared between operations.
//!
//! Lifecycle fields such as [`Connection::connection_state`] mirror what the service reports.
//! Transitions between those states happen on the service side; nothing here enforces them.

use smithy_types::{Blob, Instant};

string_enum! {
    /// The address family of a BGP peer.
    pub enum AddressFamily {
        Ipv4 => "ipv4",
        Ipv6 => "ipv6",
    }
}

string_enum! {
    /// The state of a BGP peer.
    ///
    /// * `verifying`: the BGP peering addresses or ASN require validation before the peer can be
    ///   created. Only applies to public virtual interfaces.
    /// * `pending`: the peer is created and remains here until it is ready to be established.
    /// * `available`: the peer is ready to be established.
    /// * `deleting`: the peer is being deleted.
    /// * `deleted`: the peer is deleted and cannot be established.
    pub enum BgpPeerState {
        Available => "available",
        Deleted => "deleted",
        Deleting => "deleting",
        Pending => "pending",
        Verifying => "verifying",
    }
}

string_enum! {
    /// The status of a BGP peer session.
    pub enum BgpStatus {
        Down => "down",
        /// The session state could not be determined.
        UnknownValue => "unknown",
        Up => "up",
    }
}

string_enum! {
    /// The state of a connection.
    ///
    /// * `ordering`: the initial state of a hosted connection provisioned on an interconnect.
    ///   It stays here until the owner of the hosted connection accepts or rejects it.
    /// * `requested`: the initial state of a standard connection, until the Letter of
    ///   Authorization (LOA) is sent to the customer.
    /// * `pending`: the connection has been approved and is being initialized.
    /// * `available`: the network link is up and the connection is ready for use.
    /// * `down`: the network link is down.
    /// * `deleting`: the connection is being deleted.
    /// * `deleted`: the connection has been deleted.
    /// * `rejected`: a hosted connection in the `ordering` state enters `rejected` if it is
    ///   deleted by the customer.
    /// * `unknown`: the state of the connection is not available.
    pub enum ConnectionState {
        Available => "available",
        Deleted => "deleted",
        Deleting => "deleting",
        Down => "down",
        Ordering => "ordering",
        Pending => "pending",
        Rejected => "rejected",
        Requested => "requested",
        UnknownValue => "unknown",
    }
}

string_enum! {
    /// The state of a proposal to associate a gateway with a Direct Connect gateway.
    pub enum DirectConnectGatewayAssociationProposalState {
        Accepted => "accepted",
        Deleted => "deleted",
        Requested => "requested",
    }
}

string_enum! {
    /// The state of an association between a Direct Connect gateway and a virtual private
    /// gateway or transit gateway.
    pub enum DirectConnectGatewayAssociationState {
        Associated => "associated",
        Associating => "associating",
        Disassociated => "disassociated",
        Disassociating => "disassociating",
        Updating => "updating",
    }
}

string_enum! {
    /// The state of an attachment between a Direct Connect gateway and a virtual interface.
    pub enum DirectConnectGatewayAttachmentState {
        Attached => "attached",
        Attaching => "attaching",
        Detached => "detached",
        Detaching => "detaching",
    }
}

string_enum! {
    /// The type of virtual interface attached to a Direct Connect gateway.
    pub enum DirectConnectGatewayAttachmentType {
        PrivateVirtualInterface => "PrivateVirtualInterface",
        TransitVirtualInterface => "TransitVirtualInterface",
    }
}

string_enum! {
    /// The state of a Direct Connect gateway.
    pub enum DirectConnectGatewayState {
        Available => "available",
        Deleted => "deleted",
        Deleting => "deleting",
        Pending => "pending",
    }
}

string_enum! {
    /// The type of gateway associated with a Direct Connect gateway.
    pub enum GatewayType {
        TransitGateway => "transitGateway",
        VirtualPrivateGateway => "virtualPrivateGateway",
    }
}

string_enum! {
    /// Whether a resource can terminate on a second physical device in the same location.
    pub enum HasLogicalRedundancy {
        No => "no",
        UnknownValue => "unknown",
        Yes => "yes",
    }
}

string_enum! {
    /// The state of an interconnect.
    pub enum InterconnectState {
        Available => "available",
        Deleted => "deleted",
        Deleting => "deleting",
        Down => "down",
        Pending => "pending",
        Requested => "requested",
        UnknownValue => "unknown",
    }
}

string_enum! {
    /// The state of a link aggregation group (LAG).
    pub enum LagState {
        Available => "available",
        Deleted => "deleted",
        Deleting => "deleting",
        Down => "down",
        Pending => "pending",
        Requested => "requested",
        UnknownValue => "unknown",
    }
}

string_enum! {
    /// The content type of a Letter of Authorization document.
    pub enum LoaContentType {
        ApplicationPdf => "application/pdf",
    }
}

string_enum! {
    /// The state of a virtual interface.
    ///
    /// * `confirming`: creation of a hosted virtual interface is pending confirmation from its
    ///   owner.
    /// * `verifying`: only applies to public virtual interfaces, while the peering addresses are
    ///   verified.
    /// * `pending`: the interface is created and the circuit is being initialized.
    /// * `available`: the BGP session is ready to be established.
    /// * `down`: the BGP session is down.
    /// * `deleting`: the interface is being deleted.
    /// * `deleted`: the interface cannot forward traffic.
    /// * `rejected`: the owner declined a hosted virtual interface in the `confirming` state.
    /// * `unknown`: the state of the interface is not available.
    pub enum VirtualInterfaceState {
        Available => "available",
        Confirming => "confirming",
        Deleted => "deleted",
        Deleting => "deleting",
        Down => "down",
        Pending => "pending",
        Rejected => "rejected",
        UnknownValue => "unknown",
        Verifying => "verifying",
    }
}

shape! {
    /// Information about a gateway associated with a Direct Connect gateway.
    pub struct AssociatedGateway / AssociatedGatewayBuilder {
        /// The ID of the associated gateway.
        "id" => id / set_id: string,
        /// The type of associated gateway.
        "type" => r#type / set_type: value(GatewayType),
        /// The ID of the AWS account that owns the associated gateway.
        "ownerAccount" => owner_account / set_owner_account: string,
        /// The Region where the associated gateway is located.
        "region" => region / set_region: string,
    }
}

shape! {
    /// Information about a BGP peer.
    pub struct BgpPeer / BgpPeerBuilder {
        /// The ID of the BGP peer.
        "bgpPeerId" => bgp_peer_id / set_bgp_peer_id: string,
        /// The autonomous system (AS) number for Border Gateway Protocol (BGP) configuration.
        "asn" => asn / set_asn: primitive(i32),
        /// The authentication key for BGP configuration. This string has a minimum length of
        /// 6 characters and a maximum length of 80 characters.
        "authKey" => auth_key / set_auth_key: string,
        /// The address family for the BGP peer.
        "addressFamily" => address_family / set_address_family: value(AddressFamily),
        /// The IP address assigned to the Amazon interface.
        "amazonAddress" => amazon_address / set_amazon_address: string,
        /// The IP address assigned to the customer interface.
        "customerAddress" => customer_address / set_customer_address: string,
        /// The state of the BGP peer.
        "bgpPeerState" => bgp_peer_state / set_bgp_peer_state: value(BgpPeerState),
        /// The status of the BGP peer.
        "bgpStatus" => bgp_status / set_bgp_status: value(BgpStatus),
        /// The Direct Connect endpoint on which the BGP peer terminates.
        "awsDeviceV2" => aws_device_v2 / set_aws_device_v2: string,
    }
}

shape! {
    /// Information about an AWS Direct Connect connection.
    pub struct Connection / ConnectionBuilder {
        /// The ID of the AWS account that owns the connection.
        "ownerAccount" => owner_account / set_owner_account: string,
        /// The ID of the connection.
        "connectionId" => connection_id / set_connection_id: string,
        /// The name of the connection.
        "connectionName" => connection_name / set_connection_name: string,
        /// The state of the connection.
        "connectionState" => connection_state / set_connection_state: value(ConnectionState),
        /// The AWS Region where the connection is located.
        "region" => region / set_region: string,
        /// The location of the connection.
        "location" => location / set_location: string,
        /// The bandwidth of the connection.
        "bandwidth" => bandwidth / set_bandwidth: string,
        /// The ID of the VLAN.
        "vlan" => vlan / set_vlan: primitive(i32),
        /// The name of the AWS Direct Connect service provider associated with the connection.
        "partnerName" => partner_name / set_partner_name: string,
        /// The time of the most recent call to `DescribeLoa` for this connection.
        "loaIssueTime" => loa_issue_time / set_loa_issue_time: value(Instant),
        /// The ID of the LAG.
        "lagId" => lag_id / set_lag_id: string,
        /// The Direct Connect endpoint on which the physical connection terminates.
        "awsDevice" => aws_device / set_aws_device: string,
        /// Indicates whether jumbo frames (9001 MTU) are supported.
        "jumboFrameCapable" => jumbo_frame_capable / set_jumbo_frame_capable: primitive(bool),
        /// The Direct Connect endpoint on which the physical connection terminates.
        "awsDeviceV2" => aws_device_v2 / set_aws_device_v2: string,
        /// Indicates whether the connection supports a secondary BGP peer in the same address
        /// family (IPv4/IPv6).
        "hasLogicalRedundancy" => has_logical_redundancy / set_has_logical_redundancy: value(HasLogicalRedundancy),
        /// The tags associated with the connection.
        "tags" => tags / set_tags: list(Tag),
        /// The name of the service provider associated with the connection.
        "providerName" => provider_name / set_provider_name: string,
    }
}

shape! {
    /// Information about a Direct Connect gateway, which enables you to connect virtual
    /// interfaces and virtual private gateway or transit gateways.
    pub struct DirectConnectGateway / DirectConnectGatewayBuilder {
        /// The ID of the Direct Connect gateway.
        "directConnectGatewayId" => direct_connect_gateway_id / set_direct_connect_gateway_id: string,
        /// The name of the Direct Connect gateway.
        "directConnectGatewayName" => direct_connect_gateway_name / set_direct_connect_gateway_name: string,
        /// The autonomous system number (ASN) for the Amazon side of the connection.
        "amazonSideAsn" => amazon_side_asn / set_amazon_side_asn: primitive(i64),
        /// The ID of the AWS account that owns the Direct Connect gateway.
        "ownerAccount" => owner_account / set_owner_account: string,
        /// The state of the Direct Connect gateway.
        "directConnectGatewayState" => direct_connect_gateway_state / set_direct_connect_gateway_state: value(DirectConnectGatewayState),
        /// The error message if the state of an object failed to advance.
        "stateChangeError" => state_change_error / set_state_change_error: string,
    }
}

shape! {
    /// Information about an association between a Direct Connect gateway and a virtual private
    /// gateway or transit gateway.
    pub struct DirectConnectGatewayAssociation / DirectConnectGatewayAssociationBuilder {
        /// The ID of the Direct Connect gateway.
        "directConnectGatewayId" => direct_connect_gateway_id / set_direct_connect_gateway_id: string,
        /// The ID of the AWS account that owns the associated gateway.
        "directConnectGatewayOwnerAccount" => direct_connect_gateway_owner_account / set_direct_connect_gateway_owner_account: string,
        /// The state of the association.
        "associationState" => association_state / set_association_state: value(DirectConnectGatewayAssociationState),
        /// The error message if the state of an object failed to advance.
        "stateChangeError" => state_change_error / set_state_change_error: string,
        /// Information about the associated gateway.
        "associatedGateway" => associated_gateway / set_associated_gateway: value(AssociatedGateway),
        /// The ID of the Direct Connect gateway association.
        "associationId" => association_id / set_association_id: string,
        /// The Amazon VPC prefixes to advertise to the Direct Connect gateway.
        "allowedPrefixesToDirectConnectGateway" => allowed_prefixes_to_direct_connect_gateway / set_allowed_prefixes_to_direct_connect_gateway: list(RouteFilterPrefix),
        /// The ID of the virtual private gateway. Applies only to private virtual interfaces.
        "virtualGatewayId" => virtual_gateway_id / set_virtual_gateway_id: string,
        /// The AWS Region where the virtual private gateway is located.
        "virtualGatewayRegion" => virtual_gateway_region / set_virtual_gateway_region: string,
        /// The ID of the AWS account that owns the virtual private gateway.
        "virtualGatewayOwnerAccount" => virtual_gateway_owner_account / set_virtual_gateway_owner_account: string,
    }
}

shape! {
    /// Information about the proposal request to attach a virtual private gateway to a Direct
    /// Connect gateway.
    pub struct DirectConnectGatewayAssociationProposal / DirectConnectGatewayAssociationProposalBuilder {
        /// The ID of the association proposal.
        "proposalId" => proposal_id / set_proposal_id: string,
        /// The ID of the Direct Connect gateway.
        "directConnectGatewayId" => direct_connect_gateway_id / set_direct_connect_gateway_id: string,
        /// The ID of the AWS account that owns the Direct Connect gateway.
        "directConnectGatewayOwnerAccount" => direct_connect_gateway_owner_account / set_direct_connect_gateway_owner_account: string,
        /// The state of the proposal.
        "proposalState" => proposal_state / set_proposal_state: value(DirectConnectGatewayAssociationProposalState),
        /// Information about the associated gateway.
        "associatedGateway" => associated_gateway / set_associated_gateway: value(AssociatedGateway),
        /// The existing Amazon VPC prefixes advertised to the Direct Connect gateway.
        "existingAllowedPrefixesToDirectConnectGateway" => existing_allowed_prefixes_to_direct_connect_gateway / set_existing_allowed_prefixes_to_direct_connect_gateway: list(RouteFilterPrefix),
        /// The Amazon VPC prefixes to advertise to the Direct Connect gateway.
        "requestedAllowedPrefixesToDirectConnectGateway" => requested_allowed_prefixes_to_direct_connect_gateway / set_requested_allowed_prefixes_to_direct_connect_gateway: list(RouteFilterPrefix),
    }
}

shape! {
    /// Information about an attachment between a Direct Connect gateway and a virtual interface.
    pub struct DirectConnectGatewayAttachment / DirectConnectGatewayAttachmentBuilder {
        /// The ID of the Direct Connect gateway.
        "directConnectGatewayId" => direct_connect_gateway_id / set_direct_connect_gateway_id: string,
        /// The ID of the virtual interface.
        "virtualInterfaceId" => virtual_interface_id / set_virtual_interface_id: string,
        /// The AWS Region where the virtual interface is located.
        "virtualInterfaceRegion" => virtual_interface_region / set_virtual_interface_region: string,
        /// The ID of the AWS account that owns the virtual interface.
        "virtualInterfaceOwnerAccount" => virtual_interface_owner_account / set_virtual_interface_owner_account: string,
        /// The state of the attachment.
        "attachmentState" => attachment_state / set_attachment_state: value(DirectConnectGatewayAttachmentState),
        /// The type of attachment.
        "attachmentType" => attachment_type / set_attachment_type: value(DirectConnectGatewayAttachmentType),
        /// The error message if the state of an object failed to advance.
        "stateChangeError" => state_change_error / set_state_change_error: string,
    }
}

shape! {
    /// Information about an interconnect.
    pub struct Interconnect / InterconnectBuilder {
        /// The ID of the interconnect.
        "interconnectId" => interconnect_id / set_interconnect_id: string,
        /// The name of the interconnect.
        "interconnectName" => interconnect_name / set_interconnect_name: string,
        /// The state of the interconnect.
        "interconnectState" => interconnect_state / set_interconnect_state: value(InterconnectState),
        /// The AWS Region where the connection is located.
        "region" => region / set_region: string,
        /// The location of the connection.
        "location" => location / set_location: string,
        /// The bandwidth of the connection.
        "bandwidth" => bandwidth / set_bandwidth: string,
        /// The time of the most recent call to `DescribeLoa` for this connection.
        "loaIssueTime" => loa_issue_time / set_loa_issue_time: value(Instant),
        /// The ID of the LAG.
        "lagId" => lag_id / set_lag_id: string,
        /// The Direct Connect endpoint on which the physical connection terminates.
        "awsDevice" => aws_device / set_aws_device: string,
        /// Indicates whether jumbo frames (9001 MTU) are supported.
        "jumboFrameCapable" => jumbo_frame_capable / set_jumbo_frame_capable: primitive(bool),
        /// The Direct Connect endpoint on which the physical connection terminates.
        "awsDeviceV2" => aws_device_v2 / set_aws_device_v2: string,
        /// Indicates whether the interconnect supports a secondary BGP in the same address
        /// family (IPv4/IPv6).
        "hasLogicalRedundancy" => has_logical_redundancy / set_has_logical_redundancy: value(HasLogicalRedundancy),
        /// The tags associated with the interconnect.
        "tags" => tags / set_tags: list(Tag),
        /// The name of the service provider associated with the interconnect.
        "providerName" => provider_name / set_provider_name: string,
    }
}

shape! {
    /// Information about a link aggregation group (LAG).
    pub struct Lag / LagBuilder {
        /// The individual bandwidth of the physical connections bundled by the LAG. The possible
        /// values are 1Gbps and 10Gbps.
        "connectionsBandwidth" => connections_bandwidth / set_connections_bandwidth: string,
        /// The number of physical dedicated connections bundled by the LAG, up to a maximum of 10.
        "numberOfConnections" => number_of_connections / set_number_of_connections: primitive(i32),
        /// The ID of the LAG.
        "lagId" => lag_id / set_lag_id: string,
        /// The ID of the AWS account that owns the LAG.
        "ownerAccount" => owner_account / set_owner_account: string,
        /// The name of the LAG.
        "lagName" => lag_name / set_lag_name: string,
        /// The state of the LAG.
        "lagState" => lag_state / set_lag_state: value(LagState),
        /// The location of the LAG.
        "location" => location / set_location: string,
        /// The AWS Region where the connection is located.
        "region" => region / set_region: string,
        /// The minimum number of physical dedicated connections that must be operational for the
        /// LAG itself to be operational.
        "minimumLinks" => minimum_links / set_minimum_links: primitive(i32),
        /// The AWS Direct Connect endpoint that hosts the LAG.
        "awsDevice" => aws_device / set_aws_device: string,
        /// The AWS Direct Connect endpoint that hosts the LAG.
        "awsDeviceV2" => aws_device_v2 / set_aws_device_v2: string,
        /// The connections bundled by the LAG.
        "connections" => connections / set_connections: list(Connection),
        /// Indicates whether the LAG can host other connections.
        "allowsHostedConnections" => allows_hosted_connections / set_allows_hosted_connections: primitive(bool),
        /// Indicates whether jumbo frames (9001 MTU) are supported.
        "jumboFrameCapable" => jumbo_frame_capable / set_jumbo_frame_capable: primitive(bool),
        /// Indicates whether the LAG supports a secondary BGP peer in the same address family
        /// (IPv4/IPv6).
        "hasLogicalRedundancy" => has_logical_redundancy / set_has_logical_redundancy: value(HasLogicalRedundancy),
        /// The tags associated with the LAG.
        "tags" => tags / set_tags: list(Tag),
        /// The name of the service provider associated with the LAG.
        "providerName" => provider_name / set_provider_name: string,
    }
}

shape! {
    /// Information about a Letter of Authorization - Connecting Facility Assignment (LOA-CFA)
    /// for a connection.
    pub struct Loa / LoaBuilder {
        /// The binary contents of the LOA-CFA document.
        "loaContent" => loa_content / set_loa_content: value(Blob),
        /// The standard media type for the LOA-CFA document. The only supported value is
        /// `application/pdf`.
        "loaContentType" => loa_content_type / set_loa_content_type: value(LoaContentType),
    }
}

shape! {
    /// Information about an AWS Direct Connect location.
    pub struct Location / LocationBuilder {
        /// The code for the location.
        "locationCode" => location_code / set_location_code: string,
        /// The name of the location. This includes the name of the colocation partner and the
        /// physical site of the building.
        "locationName" => location_name / set_location_name: string,
        /// The AWS Region for the location.
        "region" => region / set_region: string,
        /// The available port speeds for the location.
        "availablePortSpeeds" => available_port_speeds / set_available_port_speeds: list(String),
        /// The name of the service provider for the location.
        "availableProviders" => available_providers / set_available_providers: list(String),
    }
}

shape! {
    /// Information about a new BGP peer.
    pub struct NewBgpPeer / NewBgpPeerBuilder {
        /// The autonomous system (AS) number for Border Gateway Protocol (BGP) configuration.
        "asn" => asn / set_asn: primitive(i32),
        /// The authentication key for BGP configuration. This string has a minimum length of
        /// 6 characters and a maximum length of 80 characters.
        "authKey" => auth_key / set_auth_key: string,
        /// The address family for the BGP peer.
        "addressFamily" => address_family / set_address_family: value(AddressFamily),
        /// The IP address assigned to the Amazon interface.
        "amazonAddress" => amazon_address / set_amazon_address: string,
        /// The IP address assigned to the customer interface.
        "customerAddress" => customer_address / set_customer_address: string,
    }
}

shape! {
    /// Information about a private virtual interface.
    pub struct NewPrivateVirtualInterface / NewPrivateVirtualInterfaceBuilder {
        /// The name of the virtual interface assigned by the customer network.
        "virtualInterfaceName" => virtual_interface_name / set_virtual_interface_name: string,
        /// The ID of the VLAN.
        "vlan" => vlan / set_vlan: primitive(i32),
        /// The autonomous system (AS) number for Border Gateway Protocol (BGP) configuration.
        /// The valid values are 1-2147483647.
        "asn" => asn / set_asn: primitive(i32),
        /// The maximum transmission unit (MTU), in bytes. The supported values are 1500 and
        /// 9001. The default value is 1500.
        "mtu" => mtu / set_mtu: primitive(i32),
        /// The authentication key for BGP configuration.
        "authKey" => auth_key / set_auth_key: string,
        /// The IP address assigned to the Amazon interface.
        "amazonAddress" => amazon_address / set_amazon_address: string,
        /// The IP address assigned to the customer interface.
        "customerAddress" => customer_address / set_customer_address: string,
        /// The address family for the BGP peer.
        "addressFamily" => address_family / set_address_family: value(AddressFamily),
        /// The ID of the virtual private gateway.
        "virtualGatewayId" => virtual_gateway_id / set_virtual_gateway_id: string,
        /// The ID of the Direct Connect gateway.
        "directConnectGatewayId" => direct_connect_gateway_id / set_direct_connect_gateway_id: string,
        /// The tags associated with the private virtual interface.
        "tags" => tags / set_tags: list(Tag),
    }
}

shape! {
    /// Information about a private virtual interface to be provisioned on a connection.
    pub struct NewPrivateVirtualInterfaceAllocation / NewPrivateVirtualInterfaceAllocationBuilder {
        /// The name of the virtual interface assigned by the customer network.
        "virtualInterfaceName" => virtual_interface_name / set_virtual_interface_name: string,
        /// The ID of the VLAN.
        "vlan" => vlan / set_vlan: primitive(i32),
        /// The autonomous system (AS) number for Border Gateway Protocol (BGP) configuration.
        "asn" => asn / set_asn: primitive(i32),
        /// The maximum transmission unit (MTU), in bytes. The supported values are 1500 and 9001.
        "mtu" => mtu / set_mtu: primitive(i32),
        /// The authentication key for BGP configuration.
        "authKey" => auth_key / set_auth_key: string,
        /// The IP address assigned to the Amazon interface.
        "amazonAddress" => amazon_address / set_amazon_address: string,
        /// The address family for the BGP peer.
        "addressFamily" => address_family / set_address_family: value(AddressFamily),
        /// The IP address assigned to the customer interface.
        "customerAddress" => customer_address / set_customer_address: string,
        /// The tags associated with the private virtual interface.
        "tags" => tags / set_tags: list(Tag),
    }
}

shape! {
    /// Information about a public virtual interface.
    pub struct NewPublicVirtualInterface / NewPublicVirtualInterfaceBuilder {
        /// The name of the virtual interface assigned by the customer network.
        "virtualInterfaceName" => virtual_interface_name / set_virtual_interface_name: string,
        /// The ID of the VLAN.
        "vlan" => vlan / set_vlan: primitive(i32),
        /// The autonomous system (AS) number for Border Gateway Protocol (BGP) configuration.
        "asn" => asn / set_asn: primitive(i32),
        /// The authentication key for BGP configuration.
        "authKey" => auth_key / set_auth_key: string,
        /// The IP address assigned to the Amazon interface.
        "amazonAddress" => amazon_address / set_amazon_address: string,
        /// The IP address assigned to the customer interface.
        "customerAddress" => customer_address / set_customer_address: string,
        /// The address family for the BGP peer.
        "addressFamily" => address_family / set_address_family: value(AddressFamily),
        /// The routes to be advertised to the AWS network in this Region. Applies to public
        /// virtual interfaces.
        "routeFilterPrefixes" => route_filter_prefixes / set_route_filter_prefixes: list(RouteFilterPrefix),
        /// The tags associated with the public virtual interface.
        "tags" => tags / set_tags: list(Tag),
    }
}

shape! {
    /// Information about a public virtual interface to be provisioned on a connection.
    pub struct NewPublicVirtualInterfaceAllocation / NewPublicVirtualInterfaceAllocationBuilder {
        /// The name of the virtual interface assigned by the customer network.
        "virtualInterfaceName" => virtual_interface_name / set_virtual_interface_name: string,
        /// The ID of the VLAN.
        "vlan" => vlan / set_vlan: primitive(i32),
        /// The autonomous system (AS) number for Border Gateway Protocol (BGP) configuration.
        "asn" => asn / set_asn: primitive(i32),
        /// The authentication key for BGP configuration.
        "authKey" => auth_key / set_auth_key: string,
        /// The IP address assigned to the Amazon interface.
        "amazonAddress" => amazon_address / set_amazon_address: string,
        /// The IP address assigned to the customer interface.
        "customerAddress" => customer_address / set_customer_address: string,
        /// The address family for the BGP peer.
        "addressFamily" => address_family / set_address_family: value(AddressFamily),
        /// The routes to be advertised to the AWS network in this Region.
        "routeFilterPrefixes" => route_filter_prefixes / set_route_filter_prefixes: list(RouteFilterPrefix),
        /// The tags associated with the public virtual interface.
        "tags" => tags / set_tags: list(Tag),
    }
}

shape! {
    /// Information about a transit virtual interface.
    pub struct NewTransitVirtualInterface / NewTransitVirtualInterfaceBuilder {
        /// The name of the virtual interface assigned by the customer network.
        "virtualInterfaceName" => virtual_interface_name / set_virtual_interface_name: string,
        /// The ID of the VLAN.
        "vlan" => vlan / set_vlan: primitive(i32),
        /// The autonomous system (AS) number for Border Gateway Protocol (BGP) configuration.
        "asn" => asn / set_asn: primitive(i32),
        /// The maximum transmission unit (MTU), in bytes. The supported values are 1500 and 8500.
        "mtu" => mtu / set_mtu: primitive(i32),
        /// The authentication key for BGP configuration.
        "authKey" => auth_key / set_auth_key: string,
        /// The IP address assigned to the Amazon interface.
        "amazonAddress" => amazon_address / set_amazon_address: string,
        /// The IP address assigned to the customer interface.
        "customerAddress" => customer_address / set_customer_address: string,
        /// The address family for the BGP peer.
        "addressFamily" => address_family / set_address_family: value(AddressFamily),
        /// The ID of the Direct Connect gateway.
        "directConnectGatewayId" => direct_connect_gateway_id / set_direct_connect_gateway_id: string,
        /// The tags associated with the transitive virtual interface.
        "tags" => tags / set_tags: list(Tag),
    }
}

shape! {
    /// Information about a transit virtual interface to be provisioned on a connection.
    pub struct NewTransitVirtualInterfaceAllocation / NewTransitVirtualInterfaceAllocationBuilder {
        /// The name of the virtual interface assigned by the customer network.
        "virtualInterfaceName" => virtual_interface_name / set_virtual_interface_name: string,
        /// The ID of the VLAN.
        "vlan" => vlan / set_vlan: primitive(i32),
        /// The autonomous system (AS) number for Border Gateway Protocol (BGP) configuration.
        "asn" => asn / set_asn: primitive(i32),
        /// The maximum transmission unit (MTU), in bytes. The supported values are 1500 and 8500.
        "mtu" => mtu / set_mtu: primitive(i32),
        /// The authentication key for BGP configuration.
        "authKey" => auth_key / set_auth_key: string,
        /// The IP address assigned to the Amazon interface.
        "amazonAddress" => amazon_address / set_amazon_address: string,
        /// The IP address assigned to the customer interface.
        "customerAddress" => customer_address / set_customer_address: string,
        /// The address family for the BGP peer.
        "addressFamily" => address_family / set_address_family: value(AddressFamily),
        /// The tags associated with the transitive virtual interface.
        "tags" => tags / set_tags: list(Tag),
    }
}

shape! {
    /// Information about a tag associated with an AWS Direct Connect resource.
    pub struct ResourceTag / ResourceTagBuilder {
        /// The Amazon Resource Name (ARN) of the resource.
        "resourceArn" => resource_arn / set_resource_arn: string,
        /// The tags.
        "tags" => tags / set_tags: list(Tag),
    }
}

shape! {
    /// Information about a route filter prefix that a customer can advertise through Border
    /// Gateway Protocol (BGP) over a public virtual interface.
    pub struct RouteFilterPrefix / RouteFilterPrefixBuilder {
        /// The CIDR block for the advertised route. Separate multiple routes using commas. An
        /// IPv6 CIDR must use /64 or shorter.
        "cidr" => cidr / set_cidr: string,
    }
}

shape! {
    /// Information about a tag.
    pub struct Tag / TagBuilder {
        /// The key.
        "key" => key / set_key: string,
        /// The value.
        "value" => value / set_value: string,
    }
}

shape! {
    /// Information about a virtual private gateway for a private virtual interface.
    pub struct VirtualGateway / VirtualGatewayBuilder {
        /// The ID of the virtual private gateway.
        "virtualGatewayId" => virtual_gateway_id / set_virtual_gateway_id: string,
        /// The state of the virtual private gateway: `pending`, `available`, `deleting` or
        /// `deleted`.
        "virtualGatewayState" => virtual_gateway_state / set_virtual_gateway_state: string,
    }
}

shape! {
    /// Information about a virtual interface.
    pub struct VirtualInterface / VirtualInterfaceBuilder {
        /// The ID of the AWS account that owns the virtual interface.
        "ownerAccount" => owner_account / set_owner_account: string,
        /// The ID of the virtual interface.
        "virtualInterfaceId" => virtual_interface_id / set_virtual_interface_id: string,
        /// The location of the connection.
        "location" => location / set_location: string,
        /// The ID of the connection.
        "connectionId" => connection_id / set_connection_id: string,
        /// The type of virtual interface. The possible values are `private` and `public`.
        "virtualInterfaceType" => virtual_interface_type / set_virtual_interface_type: string,
        /// The name of the virtual interface assigned by the customer network.
        "virtualInterfaceName" => virtual_interface_name / set_virtual_interface_name: string,
        /// The ID of the VLAN.
        "vlan" => vlan / set_vlan: primitive(i32),
        /// The autonomous system (AS) number for Border Gateway Protocol (BGP) configuration.
        "asn" => asn / set_asn: primitive(i32),
        /// The autonomous system number (ASN) for the Amazon side of the connection.
        "amazonSideAsn" => amazon_side_asn / set_amazon_side_asn: primitive(i64),
        /// The authentication key for BGP configuration.
        "authKey" => auth_key / set_auth_key: string,
        /// The IP address assigned to the Amazon interface.
        "amazonAddress" => amazon_address / set_amazon_address: string,
        /// The IP address assigned to the customer interface.
        "customerAddress" => customer_address / set_customer_address: string,
        /// The address family for the BGP peer.
        "addressFamily" => address_family / set_address_family: value(AddressFamily),
        /// The state of the virtual interface.
        "virtualInterfaceState" => virtual_interface_state / set_virtual_interface_state: value(VirtualInterfaceState),
        /// The customer router configuration.
        "customerRouterConfig" => customer_router_config / set_customer_router_config: string,
        /// The maximum transmission unit (MTU), in bytes.
        "mtu" => mtu / set_mtu: primitive(i32),
        /// Indicates whether jumbo frames (9001 MTU) are supported.
        "jumboFrameCapable" => jumbo_frame_capable / set_jumbo_frame_capable: primitive(bool),
        /// The ID of the virtual private gateway. Applies only to private virtual interfaces.
        "virtualGatewayId" => virtual_gateway_id / set_virtual_gateway_id: string,
        /// The ID of the Direct Connect gateway.
        "directConnectGatewayId" => direct_connect_gateway_id / set_direct_connect_gateway_id: string,
        /// The routes to be advertised to the AWS network in this Region. Applies to public
        /// virtual interfaces.
        "routeFilterPrefixes" => route_filter_prefixes / set_route_filter_prefixes: list(RouteFilterPrefix),
        /// The BGP peers configured on this virtual interface.
        "bgpPeers" => bgp_peers / set_bgp_peers: list(BgpPeer),
        /// The AWS Region where the virtual interface is located.
        "region" => region / set_region: string,
        /// The Direct Connect endpoint on which the virtual interface terminates.
        "awsDeviceV2" => aws_device_v2 / set_aws_device_v2: string,
        /// The tags associated with the virtual interface.
        "tags" => tags / set_tags: list(Tag),
    }
}

shape! {
    /// Information about a BGP failover test run on a virtual interface.
    pub struct VirtualInterfaceTestHistory / VirtualInterfaceTestHistoryBuilder {
        /// The ID of the virtual interface failover test.
        "testId" => test_id / set_test_id: string,
        /// The ID of the tested virtual interface.
        "virtualInterfaceId" => virtual_interface_id / set_virtual_interface_id: string,
        /// The BGP peers that were put in the DOWN state as part of the virtual interface failover
        /// test.
        "bgpPeers" => bgp_peers / set_bgp_peers: list(String),
        /// The status of the virtual interface failover test.
        "status" => status / set_status: string,
        /// The owner ID of the tested virtual interface.
        "ownerAccount" => owner_account / set_owner_account: string,
        /// The time that the virtual interface failover test ran in minutes.
        "testDurationInMinutes" => test_duration_in_minutes / set_test_duration_in_minutes: primitive(i32),
        /// The time that the virtual interface moves to the DOWN state.
        "startTime" => start_time / set_start_time: value(Instant),
        /// The time that the virtual interface moves out of the DOWN state.
        "endTime" => end_time / set_end_time: value(Instant),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn bgp_peer_scenario() {
        let peer = BgpPeer::builder()
            .bgp_peer_id("bp-123")
            .asn(65000)
            .bgp_status(BgpStatus::Up)
            .build();
        assert_eq!(peer.bgp_peer_id(), Some("bp-123"));
        assert_eq!(peer.asn(), Some(65000));
        assert_eq!(peer.bgp_status().map(BgpStatus::as_str), Some("up"));
        assert_eq!(
            peer.to_string(),
            "{bgpPeerId: bp-123, asn: 65000, bgpStatus: up}"
        );
    }

    #[test]
    fn enum_values_round_trip_through_strings() {
        for value in ConnectionState::values() {
            let state = ConnectionState::from(*value);
            assert!(!matches!(state, ConnectionState::Unknown(_)), "{}", value);
            assert_eq!(state.as_str(), *value);
        }
        assert_eq!(BgpStatus::from("unknown"), BgpStatus::UnknownValue);
        assert_eq!(
            LoaContentType::from("application/pdf"),
            LoaContentType::ApplicationPdf
        );
    }

    #[test]
    fn unrecognized_enum_values_are_kept() {
        let state: VirtualInterfaceState = "testing".parse().unwrap();
        assert_eq!(state, VirtualInterfaceState::Unknown("testing".to_owned()));
        assert_eq!(state.as_str(), "testing");
        assert_eq!(state.to_string(), "testing");
    }

    #[test]
    fn enum_matching_is_case_sensitive() {
        assert_eq!(
            GatewayType::from("TransitGateway"),
            GatewayType::Unknown("TransitGateway".to_owned())
        );
        assert!(matches!(
            GatewayType::from("transitGateway"),
            GatewayType::TransitGateway
        ));
        assert_ne!(GatewayType::from("TransitGateway"), GatewayType::TransitGateway);
    }

    #[test]
    fn raw_identifier_member() {
        let gateway = AssociatedGateway::builder()
            .id("tgw-1")
            .r#type(GatewayType::TransitGateway)
            .build();
        assert_eq!(gateway.r#type(), Some(&GatewayType::TransitGateway));
        assert_eq!(gateway.to_string(), "{id: tgw-1, type: transitGateway}");
    }

    #[test]
    fn nested_shapes_render_recursively() {
        let vif = VirtualInterface::builder()
            .virtual_interface_id("dxvif-1")
            .bgp_peers(BgpPeer::builder().bgp_peer_id("bp-1").build())
            .bgp_peers(BgpPeer::builder().bgp_peer_id("bp-2").build())
            .tags(Tag::builder().key("env").value("prod").build())
            .build();
        assert_eq!(
            vif.to_string(),
            "{virtualInterfaceId: dxvif-1, bgpPeers: [{bgpPeerId: bp-1}, {bgpPeerId: bp-2}], \
             tags: [{key: env, value: prod}]}"
        );
    }

    #[test]
    fn timestamps_render_as_dates() {
        let connection = Connection::builder()
            .connection_id("dxcon-1")
            .loa_issue_time(Instant::from_epoch_seconds(1576540098))
            .jumbo_frame_capable(false)
            .build();
        assert_eq!(
            connection.to_string(),
            "{connectionId: dxcon-1, loaIssueTime: 2019-12-16T23:48:18Z, jumboFrameCapable: false}"
        );
    }

    #[test]
    fn shapes_can_be_mutated_in_place() {
        let mut lag = Lag::builder().lag_id("dxlag-1").minimum_links(1).build();
        lag.minimum_links = Some(2);
        lag.lag_name = Some("primary".to_owned());
        lag.lag_id = None;
        assert_eq!(lag.minimum_links(), Some(2));
        assert_eq!(lag.lag_name(), Some("primary"));
        assert_eq!(lag.lag_id(), None);
    }

    #[test]
    fn builder_from_shape_keeps_members() {
        let tag = Tag::builder().key("env").value("prod").build();
        let renamed = TagBuilder::from(tag.clone()).value("dev").build();
        assert_eq!(renamed.key(), Some("env"));
        assert_eq!(renamed.value(), Some("dev"));
        assert_ne!(renamed, tag);
    }
}
