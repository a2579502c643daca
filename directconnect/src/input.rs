/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Request parameters, one structure per operation.

use crate::model::{
    LoaContentType, NewBgpPeer, NewPrivateVirtualInterface, NewPrivateVirtualInterfaceAllocation,
    NewPublicVirtualInterface, NewPublicVirtualInterfaceAllocation, NewTransitVirtualInterface,
    NewTransitVirtualInterfaceAllocation, RouteFilterPrefix, Tag,
};

shape! {
    /// Request parameters for `AcceptDirectConnectGatewayAssociationProposal`.
    pub struct AcceptDirectConnectGatewayAssociationProposalInput / AcceptDirectConnectGatewayAssociationProposalInputBuilder {
        /// The ID of the Direct Connect gateway.
        "directConnectGatewayId" => direct_connect_gateway_id / set_direct_connect_gateway_id: string,
        /// The ID of the request proposal.
        "proposalId" => proposal_id / set_proposal_id: string,
        /// The ID of the AWS account that owns the virtual private gateway or transit gateway.
        "associatedGatewayOwnerAccount" => associated_gateway_owner_account / set_associated_gateway_owner_account: string,
        /// Overrides the Amazon VPC prefixes advertised to the Direct Connect gateway.
        "overrideAllowedPrefixesToDirectConnectGateway" => override_allowed_prefixes_to_direct_connect_gateway / set_override_allowed_prefixes_to_direct_connect_gateway: list(RouteFilterPrefix),
    }
}

shape! {
    /// Request parameters for `AllocateConnectionOnInterconnect`.
    pub struct AllocateConnectionOnInterconnectInput / AllocateConnectionOnInterconnectInputBuilder {
        /// The bandwidth of the connection. The possible values are 50Mbps, 100Mbps, 200Mbps,
        /// 300Mbps, 400Mbps, 500Mbps, 1Gbps, 2Gbps, 5Gbps, and 10Gbps.
        "bandwidth" => bandwidth / set_bandwidth: string,
        /// The name of the provisioned connection.
        "connectionName" => connection_name / set_connection_name: string,
        /// The ID of the AWS account of the customer for whom the connection will be provisioned.
        "ownerAccount" => owner_account / set_owner_account: string,
        /// The ID of the interconnect on which the connection will be provisioned.
        "interconnectId" => interconnect_id / set_interconnect_id: string,
        /// The dedicated VLAN provisioned to the connection.
        "vlan" => vlan / set_vlan: primitive(i32),
    }
}

shape! {
    /// Request parameters for `AllocateHostedConnection`.
    pub struct AllocateHostedConnectionInput / AllocateHostedConnectionInputBuilder {
        /// The ID of the interconnect or LAG.
        "connectionId" => connection_id / set_connection_id: string,
        /// The ID of the AWS account ID of the customer for the connection.
        "ownerAccount" => owner_account / set_owner_account: string,
        /// The bandwidth of the connection.
        "bandwidth" => bandwidth / set_bandwidth: string,
        /// The name of the hosted connection.
        "connectionName" => connection_name / set_connection_name: string,
        /// The dedicated VLAN provisioned to the hosted connection.
        "vlan" => vlan / set_vlan: primitive(i32),
        /// The tags associated with the connection.
        "tags" => tags / set_tags: list(Tag),
    }
}

shape! {
    /// Request parameters for `AllocatePrivateVirtualInterface`.
    pub struct AllocatePrivateVirtualInterfaceInput / AllocatePrivateVirtualInterfaceInputBuilder {
        /// The ID of the connection on which the private virtual interface is provisioned.
        "connectionId" => connection_id / set_connection_id: string,
        /// The ID of the AWS account that owns the virtual private interface.
        "ownerAccount" => owner_account / set_owner_account: string,
        /// Information about the private virtual interface.
        "newPrivateVirtualInterfaceAllocation" => new_private_virtual_interface_allocation / set_new_private_virtual_interface_allocation: value(NewPrivateVirtualInterfaceAllocation),
    }
}

shape! {
    /// Request parameters for `AllocatePublicVirtualInterface`.
    pub struct AllocatePublicVirtualInterfaceInput / AllocatePublicVirtualInterfaceInputBuilder {
        /// The ID of the connection on which the public virtual interface is provisioned.
        "connectionId" => connection_id / set_connection_id: string,
        /// The ID of the AWS account that owns the public virtual interface.
        "ownerAccount" => owner_account / set_owner_account: string,
        /// Information about the public virtual interface.
        "newPublicVirtualInterfaceAllocation" => new_public_virtual_interface_allocation / set_new_public_virtual_interface_allocation: value(NewPublicVirtualInterfaceAllocation),
    }
}

shape! {
    /// Request parameters for `AllocateTransitVirtualInterface`.
    pub struct AllocateTransitVirtualInterfaceInput / AllocateTransitVirtualInterfaceInputBuilder {
        /// The ID of the connection on which the transit virtual interface is provisioned.
        "connectionId" => connection_id / set_connection_id: string,
        /// The ID of the AWS account that owns the transit virtual interface.
        "ownerAccount" => owner_account / set_owner_account: string,
        /// Information about the transit virtual interface.
        "newTransitVirtualInterfaceAllocation" => new_transit_virtual_interface_allocation / set_new_transit_virtual_interface_allocation: value(NewTransitVirtualInterfaceAllocation),
    }
}

shape! {
    /// Request parameters for `AssociateConnectionWithLag`.
    pub struct AssociateConnectionWithLagInput / AssociateConnectionWithLagInputBuilder {
        /// The ID of the connection.
        "connectionId" => connection_id / set_connection_id: string,
        /// The ID of the LAG with which to associate the connection.
        "lagId" => lag_id / set_lag_id: string,
    }
}

shape! {
    /// Request parameters for `AssociateHostedConnection`.
    pub struct AssociateHostedConnectionInput / AssociateHostedConnectionInputBuilder {
        /// The ID of the hosted connection.
        "connectionId" => connection_id / set_connection_id: string,
        /// The ID of the interconnect or the LAG.
        "parentConnectionId" => parent_connection_id / set_parent_connection_id: string,
    }
}

shape! {
    /// Request parameters for `AssociateVirtualInterface`.
    pub struct AssociateVirtualInterfaceInput / AssociateVirtualInterfaceInputBuilder {
        /// The ID of the virtual interface.
        "virtualInterfaceId" => virtual_interface_id / set_virtual_interface_id: string,
        /// The ID of the LAG or connection.
        "connectionId" => connection_id / set_connection_id: string,
    }
}

shape! {
    /// Request parameters for `ConfirmConnection`.
    pub struct ConfirmConnectionInput / ConfirmConnectionInputBuilder {
        /// The ID of the hosted connection.
        "connectionId" => connection_id / set_connection_id: string,
    }
}

shape! {
    /// Request parameters for `ConfirmPrivateVirtualInterface`.
    pub struct ConfirmPrivateVirtualInterfaceInput / ConfirmPrivateVirtualInterfaceInputBuilder {
        /// The ID of the virtual interface.
        "virtualInterfaceId" => virtual_interface_id / set_virtual_interface_id: string,
        /// The ID of the virtual private gateway.
        "virtualGatewayId" => virtual_gateway_id / set_virtual_gateway_id: string,
        /// The ID of the Direct Connect gateway.
        "directConnectGatewayId" => direct_connect_gateway_id / set_direct_connect_gateway_id: string,
    }
}

shape! {
    /// Request parameters for `ConfirmPublicVirtualInterface`.
    pub struct ConfirmPublicVirtualInterfaceInput / ConfirmPublicVirtualInterfaceInputBuilder {
        /// The ID of the virtual interface.
        "virtualInterfaceId" => virtual_interface_id / set_virtual_interface_id: string,
    }
}

shape! {
    /// Request parameters for `ConfirmTransitVirtualInterface`.
    pub struct ConfirmTransitVirtualInterfaceInput / ConfirmTransitVirtualInterfaceInputBuilder {
        /// The ID of the virtual interface.
        "virtualInterfaceId" => virtual_interface_id / set_virtual_interface_id: string,
        /// The ID of the Direct Connect gateway.
        "directConnectGatewayId" => direct_connect_gateway_id / set_direct_connect_gateway_id: string,
    }
}

shape! {
    /// Request parameters for `CreateBgpPeer`.
    pub struct CreateBgpPeerInput / CreateBgpPeerInputBuilder {
        /// The ID of the virtual interface.
        "virtualInterfaceId" => virtual_interface_id / set_virtual_interface_id: string,
        /// Information about the BGP peer.
        "newBGPPeer" => new_bgp_peer / set_new_bgp_peer: value(NewBgpPeer),
    }
}

shape! {
    /// Request parameters for `CreateConnection`.
    pub struct CreateConnectionInput / CreateConnectionInputBuilder {
        /// The location of the connection.
        "location" => location / set_location: string,
        /// The bandwidth of the connection.
        "bandwidth" => bandwidth / set_bandwidth: string,
        /// The name of the connection.
        "connectionName" => connection_name / set_connection_name: string,
        /// The ID of the LAG.
        "lagId" => lag_id / set_lag_id: string,
        /// The tags to associate with the connection.
        "tags" => tags / set_tags: list(Tag),
        /// The name of the service provider associated with the requested connection.
        "providerName" => provider_name / set_provider_name: string,
    }
}

shape! {
    /// Request parameters for `CreateDirectConnectGateway`.
    pub struct CreateDirectConnectGatewayInput / CreateDirectConnectGatewayInputBuilder {
        /// The name of the Direct Connect gateway.
        "directConnectGatewayName" => direct_connect_gateway_name / set_direct_connect_gateway_name: string,
        /// The autonomous system number (ASN) for Border Gateway Protocol (BGP) to be configured
        /// on the Amazon side of the connection. The ASN must be in the private range of 64,512
        /// to 65,534 or 4,200,000,000 to 4,294,967,294. The default is 64512.
        "amazonSideAsn" => amazon_side_asn / set_amazon_side_asn: primitive(i64),
    }
}

shape! {
    /// Request parameters for `CreateDirectConnectGatewayAssociation`.
    pub struct CreateDirectConnectGatewayAssociationInput / CreateDirectConnectGatewayAssociationInputBuilder {
        /// The ID of the Direct Connect gateway.
        "directConnectGatewayId" => direct_connect_gateway_id / set_direct_connect_gateway_id: string,
        /// The ID of the virtual private gateway or transit gateway.
        "gatewayId" => gateway_id / set_gateway_id: string,
        /// The Amazon VPC prefixes to advertise to the Direct Connect gateway.
        ///
        /// This parameter is required when you create an association to a transit gateway.
        "addAllowedPrefixesToDirectConnectGateway" => add_allowed_prefixes_to_direct_connect_gateway / set_add_allowed_prefixes_to_direct_connect_gateway: list(RouteFilterPrefix),
        /// The ID of the virtual private gateway.
        "virtualGatewayId" => virtual_gateway_id / set_virtual_gateway_id: string,
    }
}

shape! {
    /// Request parameters for `CreateDirectConnectGatewayAssociationProposal`.
    pub struct CreateDirectConnectGatewayAssociationProposalInput / CreateDirectConnectGatewayAssociationProposalInputBuilder {
        /// The ID of the Direct Connect gateway.
        "directConnectGatewayId" => direct_connect_gateway_id / set_direct_connect_gateway_id: string,
        /// The ID of the AWS account that owns the Direct Connect gateway.
        "directConnectGatewayOwnerAccount" => direct_connect_gateway_owner_account / set_direct_connect_gateway_owner_account: string,
        /// The ID of the virtual private gateway or transit gateway.
        "gatewayId" => gateway_id / set_gateway_id: string,
        /// The Amazon VPC prefixes to advertise to the Direct Connect gateway.
        "addAllowedPrefixesToDirectConnectGateway" => add_allowed_prefixes_to_direct_connect_gateway / set_add_allowed_prefixes_to_direct_connect_gateway: list(RouteFilterPrefix),
        /// The Amazon VPC prefixes to no longer advertise to the Direct Connect gateway.
        "removeAllowedPrefixesToDirectConnectGateway" => remove_allowed_prefixes_to_direct_connect_gateway / set_remove_allowed_prefixes_to_direct_connect_gateway: list(RouteFilterPrefix),
    }
}

shape! {
    /// Request parameters for `CreateInterconnect`.
    pub struct CreateInterconnectInput / CreateInterconnectInputBuilder {
        /// The name of the interconnect.
        "interconnectName" => interconnect_name / set_interconnect_name: string,
        /// The port bandwidth, in Gbps. The possible values are 1 and 10.
        "bandwidth" => bandwidth / set_bandwidth: string,
        /// The location of the interconnect.
        "location" => location / set_location: string,
        /// The ID of the LAG.
        "lagId" => lag_id / set_lag_id: string,
        /// The tags to associate with the interconnect.
        "tags" => tags / set_tags: list(Tag),
        /// The name of the service provider associated with the interconnect.
        "providerName" => provider_name / set_provider_name: string,
    }
}

shape! {
    /// Request parameters for `CreateLag`.
    pub struct CreateLagInput / CreateLagInputBuilder {
        /// The number of physical dedicated connections initially provisioned and bundled by the
        /// LAG.
        "numberOfConnections" => number_of_connections / set_number_of_connections: primitive(i32),
        /// The location for the LAG.
        "location" => location / set_location: string,
        /// The bandwidth of the individual physical dedicated connections bundled by the LAG.
        "connectionsBandwidth" => connections_bandwidth / set_connections_bandwidth: string,
        /// The name of the LAG.
        "lagName" => lag_name / set_lag_name: string,
        /// The ID of an existing dedicated connection to migrate to the LAG.
        "connectionId" => connection_id / set_connection_id: string,
        /// The tags to associate with the LAG.
        "tags" => tags / set_tags: list(Tag),
        /// The tags to associate with the automatically created LAGs.
        "childConnectionTags" => child_connection_tags / set_child_connection_tags: list(Tag),
        /// The name of the service provider associated with the LAG.
        "providerName" => provider_name / set_provider_name: string,
    }
}

shape! {
    /// Request parameters for `CreatePrivateVirtualInterface`.
    pub struct CreatePrivateVirtualInterfaceInput / CreatePrivateVirtualInterfaceInputBuilder {
        /// The ID of the connection.
        "connectionId" => connection_id / set_connection_id: string,
        /// Information about the private virtual interface.
        "newPrivateVirtualInterface" => new_private_virtual_interface / set_new_private_virtual_interface: value(NewPrivateVirtualInterface),
    }
}

shape! {
    /// Request parameters for `CreatePublicVirtualInterface`.
    pub struct CreatePublicVirtualInterfaceInput / CreatePublicVirtualInterfaceInputBuilder {
        /// The ID of the connection.
        "connectionId" => connection_id / set_connection_id: string,
        /// Information about the public virtual interface.
        "newPublicVirtualInterface" => new_public_virtual_interface / set_new_public_virtual_interface: value(NewPublicVirtualInterface),
    }
}

shape! {
    /// Request parameters for `CreateTransitVirtualInterface`.
    pub struct CreateTransitVirtualInterfaceInput / CreateTransitVirtualInterfaceInputBuilder {
        /// The ID of the connection.
        "connectionId" => connection_id / set_connection_id: string,
        /// Information about the transit virtual interface.
        "newTransitVirtualInterface" => new_transit_virtual_interface / set_new_transit_virtual_interface: value(NewTransitVirtualInterface),
    }
}

shape! {
    /// Request parameters for `DeleteBgpPeer`.
    pub struct DeleteBgpPeerInput / DeleteBgpPeerInputBuilder {
        /// The ID of the virtual interface.
        "virtualInterfaceId" => virtual_interface_id / set_virtual_interface_id: string,
        /// The autonomous system (AS) number for Border Gateway Protocol (BGP) configuration.
        "asn" => asn / set_asn: primitive(i32),
        /// The IP address assigned to the customer interface.
        "customerAddress" => customer_address / set_customer_address: string,
        /// The ID of the BGP peer.
        "bgpPeerId" => bgp_peer_id / set_bgp_peer_id: string,
    }
}

shape! {
    /// Request parameters for `DeleteConnection`.
    pub struct DeleteConnectionInput / DeleteConnectionInputBuilder {
        /// The ID of the connection.
        "connectionId" => connection_id / set_connection_id: string,
    }
}

shape! {
    /// Request parameters for `DeleteDirectConnectGateway`.
    pub struct DeleteDirectConnectGatewayInput / DeleteDirectConnectGatewayInputBuilder {
        /// The ID of the Direct Connect gateway.
        "directConnectGatewayId" => direct_connect_gateway_id / set_direct_connect_gateway_id: string,
    }
}

shape! {
    /// Request parameters for `DeleteDirectConnectGatewayAssociation`.
    pub struct DeleteDirectConnectGatewayAssociationInput / DeleteDirectConnectGatewayAssociationInputBuilder {
        /// The ID of the Direct Connect gateway association.
        "associationId" => association_id / set_association_id: string,
        /// The ID of the Direct Connect gateway.
        "directConnectGatewayId" => direct_connect_gateway_id / set_direct_connect_gateway_id: string,
        /// The ID of the virtual private gateway.
        "virtualGatewayId" => virtual_gateway_id / set_virtual_gateway_id: string,
    }
}

shape! {
    /// Request parameters for `DeleteDirectConnectGatewayAssociationProposal`.
    pub struct DeleteDirectConnectGatewayAssociationProposalInput / DeleteDirectConnectGatewayAssociationProposalInputBuilder {
        /// The ID of the proposal.
        "proposalId" => proposal_id / set_proposal_id: string,
    }
}

shape! {
    /// Request parameters for `DeleteInterconnect`.
    pub struct DeleteInterconnectInput / DeleteInterconnectInputBuilder {
        /// The ID of the interconnect.
        "interconnectId" => interconnect_id / set_interconnect_id: string,
    }
}

shape! {
    /// Request parameters for `DeleteLag`.
    pub struct DeleteLagInput / DeleteLagInputBuilder {
        /// The ID of the LAG.
        "lagId" => lag_id / set_lag_id: string,
    }
}

shape! {
    /// Request parameters for `DeleteVirtualInterface`.
    pub struct DeleteVirtualInterfaceInput / DeleteVirtualInterfaceInputBuilder {
        /// The ID of the virtual interface.
        "virtualInterfaceId" => virtual_interface_id / set_virtual_interface_id: string,
    }
}

shape! {
    /// Request parameters for `DescribeConnectionLoa`.
    pub struct DescribeConnectionLoaInput / DescribeConnectionLoaInputBuilder {
        /// The ID of the connection.
        "connectionId" => connection_id / set_connection_id: string,
        /// The name of the APN partner or service provider who establishes connectivity on your
        /// behalf. If you specify this parameter, the LOA-CFA lists the provider name alongside
        /// your company name as the requester of the cross connect.
        "providerName" => provider_name / set_provider_name: string,
        /// The standard media type for the LOA-CFA document.
        "loaContentType" => loa_content_type / set_loa_content_type: value(LoaContentType),
    }
}

shape! {
    /// Request parameters for `DescribeConnections`.
    pub struct DescribeConnectionsInput / DescribeConnectionsInputBuilder {
        /// The ID of the connection.
        "connectionId" => connection_id / set_connection_id: string,
    }
}

shape! {
    /// Request parameters for `DescribeConnectionsOnInterconnect`.
    pub struct DescribeConnectionsOnInterconnectInput / DescribeConnectionsOnInterconnectInputBuilder {
        /// The ID of the interconnect.
        "interconnectId" => interconnect_id / set_interconnect_id: string,
    }
}

shape! {
    /// Request parameters for `DescribeDirectConnectGatewayAssociationProposals`.
    pub struct DescribeDirectConnectGatewayAssociationProposalsInput / DescribeDirectConnectGatewayAssociationProposalsInputBuilder {
        /// The ID of the Direct Connect gateway.
        "directConnectGatewayId" => direct_connect_gateway_id / set_direct_connect_gateway_id: string,
        /// The ID of the proposal.
        "proposalId" => proposal_id / set_proposal_id: string,
        /// The ID of the associated gateway.
        "associatedGatewayId" => associated_gateway_id / set_associated_gateway_id: string,
        /// The maximum number of results to return with a single call.
        "maxResults" => max_results / set_max_results: primitive(i32),
        /// The token for the next page of results.
        "nextToken" => next_token / set_next_token: string,
    }
}

shape! {
    /// Request parameters for `DescribeDirectConnectGatewayAssociations`.
    pub struct DescribeDirectConnectGatewayAssociationsInput / DescribeDirectConnectGatewayAssociationsInputBuilder {
        /// The ID of the Direct Connect gateway association.
        "associationId" => association_id / set_association_id: string,
        /// The ID of the associated gateway.
        "associatedGatewayId" => associated_gateway_id / set_associated_gateway_id: string,
        /// The ID of the Direct Connect gateway.
        "directConnectGatewayId" => direct_connect_gateway_id / set_direct_connect_gateway_id: string,
        /// The maximum number of results to return with a single call.
        "maxResults" => max_results / set_max_results: primitive(i32),
        /// The token provided in the previous call to retrieve the next page.
        "nextToken" => next_token / set_next_token: string,
        /// The ID of the virtual private gateway.
        "virtualGatewayId" => virtual_gateway_id / set_virtual_gateway_id: string,
    }
}

shape! {
    /// Request parameters for `DescribeDirectConnectGatewayAttachments`.
    pub struct DescribeDirectConnectGatewayAttachmentsInput / DescribeDirectConnectGatewayAttachmentsInputBuilder {
        /// The ID of the Direct Connect gateway.
        "directConnectGatewayId" => direct_connect_gateway_id / set_direct_connect_gateway_id: string,
        /// The ID of the virtual interface.
        "virtualInterfaceId" => virtual_interface_id / set_virtual_interface_id: string,
        /// The maximum number of results to return with a single call.
        "maxResults" => max_results / set_max_results: primitive(i32),
        /// The token provided in the previous call to retrieve the next page.
        "nextToken" => next_token / set_next_token: string,
    }
}

shape! {
    /// Request parameters for `DescribeDirectConnectGateways`.
    pub struct DescribeDirectConnectGatewaysInput / DescribeDirectConnectGatewaysInputBuilder {
        /// The ID of the Direct Connect gateway.
        "directConnectGatewayId" => direct_connect_gateway_id / set_direct_connect_gateway_id: string,
        /// The maximum number of results to return with a single call.
        "maxResults" => max_results / set_max_results: primitive(i32),
        /// The token provided in the previous call to retrieve the next page.
        "nextToken" => next_token / set_next_token: string,
    }
}

shape! {
    /// Request parameters for `DescribeHostedConnections`.
    pub struct DescribeHostedConnectionsInput / DescribeHostedConnectionsInputBuilder {
        /// The ID of the interconnect or LAG.
        "connectionId" => connection_id / set_connection_id: string,
    }
}

shape! {
    /// Request parameters for `DescribeInterconnectLoa`.
    pub struct DescribeInterconnectLoaInput / DescribeInterconnectLoaInputBuilder {
        /// The ID of the interconnect.
        "interconnectId" => interconnect_id / set_interconnect_id: string,
        /// The name of the service provider who establishes connectivity on your behalf.
        "providerName" => provider_name / set_provider_name: string,
        /// The standard media type for the LOA-CFA document.
        "loaContentType" => loa_content_type / set_loa_content_type: value(LoaContentType),
    }
}

shape! {
    /// Request parameters for `DescribeInterconnects`.
    pub struct DescribeInterconnectsInput / DescribeInterconnectsInputBuilder {
        /// The ID of the interconnect.
        "interconnectId" => interconnect_id / set_interconnect_id: string,
    }
}

shape! {
    /// Request parameters for `DescribeLags`.
    pub struct DescribeLagsInput / DescribeLagsInputBuilder {
        /// The ID of the LAG.
        "lagId" => lag_id / set_lag_id: string,
    }
}

shape! {
    /// Request parameters for `DescribeLoa`.
    pub struct DescribeLoaInput / DescribeLoaInputBuilder {
        /// The ID of a connection, LAG, or interconnect.
        "connectionId" => connection_id / set_connection_id: string,
        /// The name of the service provider who establishes connectivity on your behalf.
        "providerName" => provider_name / set_provider_name: string,
        /// The standard media type for the LOA-CFA document.
        "loaContentType" => loa_content_type / set_loa_content_type: value(LoaContentType),
    }
}

shape! {
    /// Request parameters for `DescribeLocations`.
    pub struct DescribeLocationsInput / DescribeLocationsInputBuilder {}
}

shape! {
    /// Request parameters for `DescribeTags`.
    pub struct DescribeTagsInput / DescribeTagsInputBuilder {
        /// The Amazon Resource Names (ARNs) of the resources.
        "resourceArns" => resource_arns / set_resource_arns: list(String),
    }
}

shape! {
    /// Request parameters for `DescribeVirtualGateways`.
    pub struct DescribeVirtualGatewaysInput / DescribeVirtualGatewaysInputBuilder {}
}

shape! {
    /// Request parameters for `DescribeVirtualInterfaces`.
    pub struct DescribeVirtualInterfacesInput / DescribeVirtualInterfacesInputBuilder {
        /// The ID of the connection.
        "connectionId" => connection_id / set_connection_id: string,
        /// The ID of the virtual interface.
        "virtualInterfaceId" => virtual_interface_id / set_virtual_interface_id: string,
    }
}

shape! {
    /// Request parameters for `DisassociateConnectionFromLag`.
    pub struct DisassociateConnectionFromLagInput / DisassociateConnectionFromLagInputBuilder {
        /// The ID of the connection.
        "connectionId" => connection_id / set_connection_id: string,
        /// The ID of the LAG.
        "lagId" => lag_id / set_lag_id: string,
    }
}

shape! {
    /// Request parameters for `ListVirtualInterfaceTestHistory`.
    pub struct ListVirtualInterfaceTestHistoryInput / ListVirtualInterfaceTestHistoryInputBuilder {
        /// The ID of the virtual interface failover test.
        "testId" => test_id / set_test_id: string,
        /// The ID of the virtual interface that was tested.
        "virtualInterfaceId" => virtual_interface_id / set_virtual_interface_id: string,
        /// The BGP peers that were placed in the DOWN state during the virtual interface failover
        /// test.
        "bgpPeers" => bgp_peers / set_bgp_peers: list(String),
        /// The status of the virtual interface failover test.
        "status" => status / set_status: string,
        /// The maximum number of results to return with a single call.
        "maxResults" => max_results / set_max_results: primitive(i32),
        /// The token for the next page of results.
        "nextToken" => next_token / set_next_token: string,
    }
}

shape! {
    /// Request parameters for `StartBgpFailoverTest`.
    pub struct StartBgpFailoverTestInput / StartBgpFailoverTestInputBuilder {
        /// The ID of the virtual interface you want to test.
        "virtualInterfaceId" => virtual_interface_id / set_virtual_interface_id: string,
        /// The BGP peers to place in the DOWN state.
        "bgpPeers" => bgp_peers / set_bgp_peers: list(String),
        /// The time in minutes that the virtual interface failover test will last.
        ///
        /// Maximum value: 180 minutes (3 hours). Default: 180 minutes (3 hours).
        "testDurationInMinutes" => test_duration_in_minutes / set_test_duration_in_minutes: primitive(i32),
    }
}

shape! {
    /// Request parameters for `StopBgpFailoverTest`.
    pub struct StopBgpFailoverTestInput / StopBgpFailoverTestInputBuilder {
        /// The ID of the virtual interface you no longer want to test.
        "virtualInterfaceId" => virtual_interface_id / set_virtual_interface_id: string,
    }
}

shape! {
    /// Request parameters for `TagResource`.
    pub struct TagResourceInput / TagResourceInputBuilder {
        /// The Amazon Resource Name (ARN) of the resource.
        "resourceArn" => resource_arn / set_resource_arn: string,
        /// The tags to add.
        "tags" => tags / set_tags: list(Tag),
    }
}

shape! {
    /// Request parameters for `UntagResource`.
    pub struct UntagResourceInput / UntagResourceInputBuilder {
        /// The Amazon Resource Name (ARN) of the resource.
        "resourceArn" => resource_arn / set_resource_arn: string,
        /// The tag keys of the tags to remove.
        "tagKeys" => tag_keys / set_tag_keys: list(String),
    }
}

shape! {
    /// Request parameters for `UpdateDirectConnectGatewayAssociation`.
    pub struct UpdateDirectConnectGatewayAssociationInput / UpdateDirectConnectGatewayAssociationInputBuilder {
        /// The ID of the Direct Connect gateway association.
        "associationId" => association_id / set_association_id: string,
        /// The Amazon VPC prefixes to advertise to the Direct Connect gateway.
        "addAllowedPrefixesToDirectConnectGateway" => add_allowed_prefixes_to_direct_connect_gateway / set_add_allowed_prefixes_to_direct_connect_gateway: list(RouteFilterPrefix),
        /// The Amazon VPC prefixes to no longer advertise to the Direct Connect gateway.
        "removeAllowedPrefixesToDirectConnectGateway" => remove_allowed_prefixes_to_direct_connect_gateway / set_remove_allowed_prefixes_to_direct_connect_gateway: list(RouteFilterPrefix),
    }
}

shape! {
    /// Request parameters for `UpdateLag`.
    pub struct UpdateLagInput / UpdateLagInputBuilder {
        /// The ID of the LAG.
        "lagId" => lag_id / set_lag_id: string,
        /// The name of the LAG.
        "lagName" => lag_name / set_lag_name: string,
        /// The minimum number of physical connections that must be operational for the LAG
        /// itself to be operational.
        "minimumLinks" => minimum_links / set_minimum_links: primitive(i32),
    }
}

shape! {
    /// Request parameters for `UpdateVirtualInterfaceAttributes`.
    pub struct UpdateVirtualInterfaceAttributesInput / UpdateVirtualInterfaceAttributesInputBuilder {
        /// The ID of the virtual private interface.
        "virtualInterfaceId" => virtual_interface_id / set_virtual_interface_id: string,
        /// The maximum transmission unit (MTU), in bytes. The supported values are 1500 and 9001.
        /// The default value is 1500.
        "mtu" => mtu / set_mtu: primitive(i32),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn list_members_append_or_replace() {
        let t1 = Tag::builder().key("a").build();
        let t2 = Tag::builder().key("b").build();
        let appended = TagResourceInput::builder()
            .tags(t1.clone())
            .tags(t2.clone())
            .build();
        assert_eq!(appended.tags(), Some(&[t1.clone(), t2.clone()][..]));

        let replaced = TagResourceInput::builder()
            .set_tags(Some(vec![t1]))
            .set_tags(Some(vec![t2.clone()]))
            .build();
        assert_eq!(replaced.tags(), Some(&[t2][..]));
    }

    #[test]
    fn string_lists_accept_str() {
        let input = UntagResourceInput::builder()
            .resource_arn("arn:aws:directconnect:us-east-1:123456789012:dxcon/dxcon-1")
            .tag_keys("env")
            .tag_keys("team")
            .build();
        assert_eq!(
            input.tag_keys(),
            Some(&["env".to_owned(), "team".to_owned()][..])
        );
    }

    #[test]
    fn empty_inputs_render_braces() {
        assert_eq!(DescribeLocationsInput::builder().build().to_string(), "{}");
        assert_eq!(DescribeVirtualGatewaysInput::default().to_string(), "{}");
    }

    #[test]
    fn new_bgp_peer_member_keeps_wire_name() {
        let input = CreateBgpPeerInput::builder()
            .virtual_interface_id("dxvif-1")
            .new_bgp_peer(NewBgpPeer::builder().asn(65001).build())
            .build();
        assert_eq!(
            input.to_string(),
            "{virtualInterfaceId: dxvif-1, newBGPPeer: {asn: 65001}}"
        );
    }

    #[test]
    fn set_none_clears_member() {
        let input = UpdateLagInput::builder()
            .lag_id("dxlag-1")
            .minimum_links(2)
            .set_minimum_links(None)
            .build();
        assert_eq!(input.minimum_links(), None);
        assert_eq!(input.to_string(), "{lagId: dxlag-1}");
    }
}
