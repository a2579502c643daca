/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Response payloads, one per operation.
//!
//! Operations that return one of the shared structures directly use a type alias for it, so
//! `CreateConnectionOutput::builder()` and `Connection::builder()` are the same thing.

use crate::model::{
    Connection, ConnectionState, DirectConnectGateway, DirectConnectGatewayAssociation,
    DirectConnectGatewayAssociationProposal, DirectConnectGatewayAttachment, Interconnect,
    InterconnectState, Lag, Loa, Location, ResourceTag, VirtualGateway, VirtualInterface,
    VirtualInterfaceState, VirtualInterfaceTestHistory,
};

/// Response of `AllocateConnectionOnInterconnect`.
pub type AllocateConnectionOnInterconnectOutput = Connection;
/// Response of `AllocateHostedConnection`.
pub type AllocateHostedConnectionOutput = Connection;
/// Response of `AllocatePrivateVirtualInterface`.
pub type AllocatePrivateVirtualInterfaceOutput = VirtualInterface;
/// Response of `AllocatePublicVirtualInterface`.
pub type AllocatePublicVirtualInterfaceOutput = VirtualInterface;
/// Response of `AssociateConnectionWithLag`.
pub type AssociateConnectionWithLagOutput = Connection;
/// Response of `AssociateHostedConnection`.
pub type AssociateHostedConnectionOutput = Connection;
/// Response of `AssociateVirtualInterface`.
pub type AssociateVirtualInterfaceOutput = VirtualInterface;
/// Response of `CreateConnection`.
pub type CreateConnectionOutput = Connection;
/// Response of `CreateInterconnect`.
pub type CreateInterconnectOutput = Interconnect;
/// Response of `CreateLag`.
pub type CreateLagOutput = Lag;
/// Response of `CreatePrivateVirtualInterface`.
pub type CreatePrivateVirtualInterfaceOutput = VirtualInterface;
/// Response of `CreatePublicVirtualInterface`.
pub type CreatePublicVirtualInterfaceOutput = VirtualInterface;
/// Response of `DeleteConnection`.
pub type DeleteConnectionOutput = Connection;
/// Response of `DeleteLag`.
pub type DeleteLagOutput = Lag;
/// Response of `DescribeLoa`.
pub type DescribeLoaOutput = Loa;
/// Response of `DisassociateConnectionFromLag`.
pub type DisassociateConnectionFromLagOutput = Connection;
/// Response of `UpdateLag`.
pub type UpdateLagOutput = Lag;
/// Response of `UpdateVirtualInterfaceAttributes`.
pub type UpdateVirtualInterfaceAttributesOutput = VirtualInterface;

shape! {
    /// Response of `AcceptDirectConnectGatewayAssociationProposal`.
    pub struct AcceptDirectConnectGatewayAssociationProposalOutput / AcceptDirectConnectGatewayAssociationProposalOutputBuilder {
        /// Information about an association between a Direct Connect gateway and a virtual
        /// private gateway or transit gateway.
        "directConnectGatewayAssociation" => direct_connect_gateway_association / set_direct_connect_gateway_association: value(DirectConnectGatewayAssociation),
    }
}

shape! {
    /// Response of `AllocateTransitVirtualInterface`.
    pub struct AllocateTransitVirtualInterfaceOutput / AllocateTransitVirtualInterfaceOutputBuilder {
        /// Information about a virtual interface.
        "virtualInterface" => virtual_interface / set_virtual_interface: value(VirtualInterface),
    }
}

shape! {
    /// Response of `ConfirmConnection`.
    pub struct ConfirmConnectionOutput / ConfirmConnectionOutputBuilder {
        /// The state of the connection.
        "connectionState" => connection_state / set_connection_state: value(ConnectionState),
    }
}

shape! {
    /// Response of `ConfirmPrivateVirtualInterface`.
    pub struct ConfirmPrivateVirtualInterfaceOutput / ConfirmPrivateVirtualInterfaceOutputBuilder {
        /// The state of the virtual interface.
        "virtualInterfaceState" => virtual_interface_state / set_virtual_interface_state: value(VirtualInterfaceState),
    }
}

shape! {
    /// Response of `ConfirmPublicVirtualInterface`.
    pub struct ConfirmPublicVirtualInterfaceOutput / ConfirmPublicVirtualInterfaceOutputBuilder {
        /// The state of the virtual interface.
        "virtualInterfaceState" => virtual_interface_state / set_virtual_interface_state: value(VirtualInterfaceState),
    }
}

shape! {
    /// Response of `ConfirmTransitVirtualInterface`.
    pub struct ConfirmTransitVirtualInterfaceOutput / ConfirmTransitVirtualInterfaceOutputBuilder {
        /// The state of the virtual interface.
        "virtualInterfaceState" => virtual_interface_state / set_virtual_interface_state: value(VirtualInterfaceState),
    }
}

shape! {
    /// Response of `CreateBGPPeer`.
    pub struct CreateBgpPeerOutput / CreateBgpPeerOutputBuilder {
        /// The virtual interface.
        "virtualInterface" => virtual_interface / set_virtual_interface: value(VirtualInterface),
    }
}

shape! {
    /// Response of `CreateDirectConnectGateway`.
    pub struct CreateDirectConnectGatewayOutput / CreateDirectConnectGatewayOutputBuilder {
        /// The Direct Connect gateway.
        "directConnectGateway" => direct_connect_gateway / set_direct_connect_gateway: value(DirectConnectGateway),
    }
}

shape! {
    /// Response of `CreateDirectConnectGatewayAssociation`.
    pub struct CreateDirectConnectGatewayAssociationOutput / CreateDirectConnectGatewayAssociationOutputBuilder {
        /// The association to be created.
        "directConnectGatewayAssociation" => direct_connect_gateway_association / set_direct_connect_gateway_association: value(DirectConnectGatewayAssociation),
    }
}

shape! {
    /// Response of `CreateDirectConnectGatewayAssociationProposal`.
    pub struct CreateDirectConnectGatewayAssociationProposalOutput / CreateDirectConnectGatewayAssociationProposalOutputBuilder {
        /// Information about the Direct Connect gateway proposal.
        "directConnectGatewayAssociationProposal" => direct_connect_gateway_association_proposal / set_direct_connect_gateway_association_proposal: value(DirectConnectGatewayAssociationProposal),
    }
}

shape! {
    /// Response of `CreateTransitVirtualInterface`.
    pub struct CreateTransitVirtualInterfaceOutput / CreateTransitVirtualInterfaceOutputBuilder {
        /// Information about a virtual interface.
        "virtualInterface" => virtual_interface / set_virtual_interface: value(VirtualInterface),
    }
}

shape! {
    /// Response of `DeleteBGPPeer`.
    pub struct DeleteBgpPeerOutput / DeleteBgpPeerOutputBuilder {
        /// The virtual interface.
        "virtualInterface" => virtual_interface / set_virtual_interface: value(VirtualInterface),
    }
}

shape! {
    /// Response of `DeleteDirectConnectGateway`.
    pub struct DeleteDirectConnectGatewayOutput / DeleteDirectConnectGatewayOutputBuilder {
        /// The Direct Connect gateway.
        "directConnectGateway" => direct_connect_gateway / set_direct_connect_gateway: value(DirectConnectGateway),
    }
}

shape! {
    /// Response of `DeleteDirectConnectGatewayAssociation`.
    pub struct DeleteDirectConnectGatewayAssociationOutput / DeleteDirectConnectGatewayAssociationOutputBuilder {
        /// Information about the deleted association.
        "directConnectGatewayAssociation" => direct_connect_gateway_association / set_direct_connect_gateway_association: value(DirectConnectGatewayAssociation),
    }
}

shape! {
    /// Response of `DeleteDirectConnectGatewayAssociationProposal`.
    pub struct DeleteDirectConnectGatewayAssociationProposalOutput / DeleteDirectConnectGatewayAssociationProposalOutputBuilder {
        /// The ID of the associated gateway.
        "directConnectGatewayAssociationProposal" => direct_connect_gateway_association_proposal / set_direct_connect_gateway_association_proposal: value(DirectConnectGatewayAssociationProposal),
    }
}

shape! {
    /// Response of `DeleteInterconnect`.
    pub struct DeleteInterconnectOutput / DeleteInterconnectOutputBuilder {
        /// The state of the interconnect.
        "interconnectState" => interconnect_state / set_interconnect_state: value(InterconnectState),
    }
}

shape! {
    /// Response of `DeleteVirtualInterface`.
    pub struct DeleteVirtualInterfaceOutput / DeleteVirtualInterfaceOutputBuilder {
        /// The state of the virtual interface.
        "virtualInterfaceState" => virtual_interface_state / set_virtual_interface_state: value(VirtualInterfaceState),
    }
}

shape! {
    /// Response of `DescribeConnectionLoa`.
    pub struct DescribeConnectionLoaOutput / DescribeConnectionLoaOutputBuilder {
        /// The Letter of Authorization - Connecting Facility Assignment (LOA-CFA).
        "loa" => loa / set_loa: value(Loa),
    }
}

shape! {
    /// Response of `DescribeConnections`, `DescribeConnectionsOnInterconnect` and
    /// `DescribeHostedConnections`.
    pub struct Connections / ConnectionsBuilder {
        /// The connections.
        "connections" => connections / set_connections: list(Connection),
    }
}

/// Response of `DescribeConnections`.
pub type DescribeConnectionsOutput = Connections;
/// Response of `DescribeConnectionsOnInterconnect`.
pub type DescribeConnectionsOnInterconnectOutput = Connections;
/// Response of `DescribeHostedConnections`.
pub type DescribeHostedConnectionsOutput = Connections;

shape! {
    /// Response of `DescribeDirectConnectGatewayAssociationProposals`.
    pub struct DescribeDirectConnectGatewayAssociationProposalsOutput / DescribeDirectConnectGatewayAssociationProposalsOutputBuilder {
        /// Describes the Direct Connect gateway association proposals.
        "directConnectGatewayAssociationProposals" => direct_connect_gateway_association_proposals / set_direct_connect_gateway_association_proposals: list(DirectConnectGatewayAssociationProposal),
        /// The token to use to retrieve the next page of results. This value is unset when
        /// there are no more results to return.
        "nextToken" => next_token / set_next_token: string,
    }
}

shape! {
    /// Response of `DescribeDirectConnectGatewayAssociations`.
    pub struct DescribeDirectConnectGatewayAssociationsOutput / DescribeDirectConnectGatewayAssociationsOutputBuilder {
        /// Information about the associations.
        "directConnectGatewayAssociations" => direct_connect_gateway_associations / set_direct_connect_gateway_associations: list(DirectConnectGatewayAssociation),
        /// The token to retrieve the next page.
        "nextToken" => next_token / set_next_token: string,
    }
}

shape! {
    /// Response of `DescribeDirectConnectGatewayAttachments`.
    pub struct DescribeDirectConnectGatewayAttachmentsOutput / DescribeDirectConnectGatewayAttachmentsOutputBuilder {
        /// The attachments.
        "directConnectGatewayAttachments" => direct_connect_gateway_attachments / set_direct_connect_gateway_attachments: list(DirectConnectGatewayAttachment),
        /// The token to retrieve the next page.
        "nextToken" => next_token / set_next_token: string,
    }
}

shape! {
    /// Response of `DescribeDirectConnectGateways`.
    pub struct DescribeDirectConnectGatewaysOutput / DescribeDirectConnectGatewaysOutputBuilder {
        /// The Direct Connect gateways.
        "directConnectGateways" => direct_connect_gateways / set_direct_connect_gateways: list(DirectConnectGateway),
        /// The token to retrieve the next page.
        "nextToken" => next_token / set_next_token: string,
    }
}

shape! {
    /// Response of `DescribeInterconnectLoa`.
    pub struct DescribeInterconnectLoaOutput / DescribeInterconnectLoaOutputBuilder {
        /// The Letter of Authorization - Connecting Facility Assignment (LOA-CFA).
        "loa" => loa / set_loa: value(Loa),
    }
}

shape! {
    /// Response of `DescribeInterconnects`.
    pub struct DescribeInterconnectsOutput / DescribeInterconnectsOutputBuilder {
        /// The interconnects.
        "interconnects" => interconnects / set_interconnects: list(Interconnect),
    }
}

shape! {
    /// Response of `DescribeLags`.
    pub struct DescribeLagsOutput / DescribeLagsOutputBuilder {
        /// The LAGs.
        "lags" => lags / set_lags: list(Lag),
    }
}

shape! {
    /// Response of `DescribeLocations`.
    pub struct DescribeLocationsOutput / DescribeLocationsOutputBuilder {
        /// The locations.
        "locations" => locations / set_locations: list(Location),
    }
}

shape! {
    /// Response of `DescribeTags`.
    pub struct DescribeTagsOutput / DescribeTagsOutputBuilder {
        /// Information about the tags.
        "resourceTags" => resource_tags / set_resource_tags: list(ResourceTag),
    }
}

shape! {
    /// Response of `DescribeVirtualGateways`.
    pub struct DescribeVirtualGatewaysOutput / DescribeVirtualGatewaysOutputBuilder {
        /// The virtual private gateways.
        "virtualGateways" => virtual_gateways / set_virtual_gateways: list(VirtualGateway),
    }
}

shape! {
    /// Response of `DescribeVirtualInterfaces`.
    pub struct DescribeVirtualInterfacesOutput / DescribeVirtualInterfacesOutputBuilder {
        /// The virtual interfaces.
        "virtualInterfaces" => virtual_interfaces / set_virtual_interfaces: list(VirtualInterface),
    }
}

shape! {
    /// Response of `ListVirtualInterfaceTestHistory`.
    pub struct ListVirtualInterfaceTestHistoryOutput / ListVirtualInterfaceTestHistoryOutputBuilder {
        /// The ID of the tested virtual interface.
        "virtualInterfaceTestHistory" => virtual_interface_test_history / set_virtual_interface_test_history: list(VirtualInterfaceTestHistory),
        /// The token to use to retrieve the next page of results.
        "nextToken" => next_token / set_next_token: string,
    }
}

shape! {
    /// Response of `StartBgpFailoverTest`.
    pub struct StartBgpFailoverTestOutput / StartBgpFailoverTestOutputBuilder {
        /// Information about the virtual interface failover test.
        "virtualInterfaceTest" => virtual_interface_test / set_virtual_interface_test: value(VirtualInterfaceTestHistory),
    }
}

shape! {
    /// Response of `StopBgpFailoverTest`.
    pub struct StopBgpFailoverTestOutput / StopBgpFailoverTestOutputBuilder {
        /// Information about the virtual interface failover test.
        "virtualInterfaceTest" => virtual_interface_test / set_virtual_interface_test: value(VirtualInterfaceTestHistory),
    }
}

shape! {
    /// Response of `TagResource`.
    pub struct TagResourceOutput / TagResourceOutputBuilder {}
}

shape! {
    /// Response of `UntagResource`.
    pub struct UntagResourceOutput / UntagResourceOutputBuilder {}
}

shape! {
    /// Response of `UpdateDirectConnectGatewayAssociation`.
    pub struct UpdateDirectConnectGatewayAssociationOutput / UpdateDirectConnectGatewayAssociationOutputBuilder {
        /// Information about an association between a Direct Connect gateway and a virtual
        /// private gateway or transit gateway.
        "directConnectGatewayAssociation" => direct_connect_gateway_association / set_direct_connect_gateway_association: value(DirectConnectGatewayAssociation),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::model::{ConnectionState, Tag};

    #[test]
    fn aliased_outputs_share_the_structure() {
        let connection: CreateConnectionOutput = Connection::builder()
            .connection_id("dxcon-1")
            .connection_state(ConnectionState::Requested)
            .build();
        let same = CreateConnectionOutput::builder()
            .connection_id("dxcon-1")
            .connection_state("requested")
            .build();
        assert_eq!(connection, same);
    }

    #[test]
    fn describe_connections_outputs_are_interchangeable() {
        let output: DescribeHostedConnectionsOutput = Connections::builder()
            .connections(Connection::builder().connection_id("dxcon-1").build())
            .build();
        let on_interconnect: DescribeConnectionsOnInterconnectOutput = output.clone();
        assert_eq!(on_interconnect.connections().map(|c| c.len()), Some(1));
        assert_eq!(output.to_string(), "{connections: [{connectionId: dxcon-1}]}");
    }

    #[test]
    fn paginated_output_renders_next_token() {
        let output = DescribeDirectConnectGatewaysOutput::builder()
            .direct_connect_gateways(
                DirectConnectGateway::builder()
                    .direct_connect_gateway_id("dx-gw-1")
                    .amazon_side_asn(4_200_000_000i64)
                    .build(),
            )
            .next_token("page-2")
            .build();
        assert_eq!(
            output.to_string(),
            "{directConnectGateways: [{directConnectGatewayId: dx-gw-1, amazonSideAsn: 4200000000}], \
             nextToken: page-2}"
        );
    }

    #[test]
    fn nested_tags_in_lag_connections() {
        let lag = CreateLagOutput::builder()
            .lag_id("dxlag-1")
            .connections(
                Connection::builder()
                    .connection_id("dxcon-1")
                    .tags(Tag::builder().key("env").build())
                    .build(),
            )
            .build();
        let connections = lag.connections().unwrap_or_default();
        assert_eq!(connections[0].tags().map(|t| t.len()), Some(1));
    }
}
