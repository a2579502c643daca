/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Operation metadata: a zero-sized marker per operation tying its input, output and error
//! shapes to the names used on the wire.

use crate::input::*;
use crate::output::*;
use smithy_types::ShapeId;

/// Models the [Smithy Operation shape].
///
/// [Smithy Operation shape]: https://smithy.io/2.0/spec/service-types.html#operation
pub trait OperationShape {
    /// The name of the operation as modeled, e.g. `CreateBGPPeer`.
    const NAME: &'static str;
    /// The absolute shape ID of the operation.
    const ID: ShapeId;
    /// The `X-Amz-Target` header value for the `awsJson1_1` protocol.
    const TARGET: &'static str;

    /// The operation input.
    type Input;
    /// The operation output.
    type Output;
    /// The operation error.
    type Error;
}

macro_rules! operations {
    (
        $(
            $(#[$meta:meta])*
            $op:ident($wire:literal): $input:ty => $output:ty,
        )+
    ) => {
        $(
            $(#[$meta])*
            #[derive(std::clone::Clone, std::marker::Copy, std::default::Default, std::fmt::Debug)]
            pub struct $op;

            impl OperationShape for $op {
                const NAME: &'static str = $wire;
                const ID: ShapeId = ShapeId::new(
                    concat!("com.amazonaws.directconnect#", $wire),
                    "com.amazonaws.directconnect",
                    $wire,
                );
                const TARGET: &'static str = concat!("OvertureService.", $wire);

                type Input = $input;
                type Output = $output;
                type Error = crate::error::Error;
            }
        )+

        /// Shape IDs of every operation the service exposes.
        pub const OPERATIONS: &[ShapeId] = &[$(<$op as OperationShape>::ID,)+];
    };
}

operations! {
    /// Accepts a proposal request to attach a virtual private gateway or transit gateway to a
    /// Direct Connect gateway.
    AcceptDirectConnectGatewayAssociationProposal("AcceptDirectConnectGatewayAssociationProposal"):
        AcceptDirectConnectGatewayAssociationProposalInput => AcceptDirectConnectGatewayAssociationProposalOutput,
    /// Creates a hosted connection on the specified interconnect.
    AllocateConnectionOnInterconnect("AllocateConnectionOnInterconnect"):
        AllocateConnectionOnInterconnectInput => AllocateConnectionOnInterconnectOutput,
    /// Creates a hosted connection on the specified interconnect or a link aggregation group
    /// (LAG) of interconnects.
    AllocateHostedConnection("AllocateHostedConnection"):
        AllocateHostedConnectionInput => AllocateHostedConnectionOutput,
    /// Provisions a private virtual interface to be owned by the specified AWS account.
    AllocatePrivateVirtualInterface("AllocatePrivateVirtualInterface"):
        AllocatePrivateVirtualInterfaceInput => AllocatePrivateVirtualInterfaceOutput,
    /// Provisions a public virtual interface to be owned by the specified AWS account.
    AllocatePublicVirtualInterface("AllocatePublicVirtualInterface"):
        AllocatePublicVirtualInterfaceInput => AllocatePublicVirtualInterfaceOutput,
    /// Provisions a transit virtual interface to be owned by the specified AWS account.
    AllocateTransitVirtualInterface("AllocateTransitVirtualInterface"):
        AllocateTransitVirtualInterfaceInput => AllocateTransitVirtualInterfaceOutput,
    /// Associates an existing connection with a link aggregation group (LAG).
    AssociateConnectionWithLag("AssociateConnectionWithLag"):
        AssociateConnectionWithLagInput => AssociateConnectionWithLagOutput,
    /// Associates a hosted connection and its virtual interfaces with a LAG or interconnect.
    AssociateHostedConnection("AssociateHostedConnection"):
        AssociateHostedConnectionInput => AssociateHostedConnectionOutput,
    /// Associates a virtual interface with a specified link aggregation group (LAG) or
    /// connection.
    AssociateVirtualInterface("AssociateVirtualInterface"):
        AssociateVirtualInterfaceInput => AssociateVirtualInterfaceOutput,
    /// Confirms the creation of the specified hosted connection on an interconnect.
    ConfirmConnection("ConfirmConnection"):
        ConfirmConnectionInput => ConfirmConnectionOutput,
    /// Accepts ownership of a private virtual interface created by another AWS account.
    ConfirmPrivateVirtualInterface("ConfirmPrivateVirtualInterface"):
        ConfirmPrivateVirtualInterfaceInput => ConfirmPrivateVirtualInterfaceOutput,
    /// Accepts ownership of a public virtual interface created by another AWS account.
    ConfirmPublicVirtualInterface("ConfirmPublicVirtualInterface"):
        ConfirmPublicVirtualInterfaceInput => ConfirmPublicVirtualInterfaceOutput,
    /// Accepts ownership of a transit virtual interface created by another AWS account.
    ConfirmTransitVirtualInterface("ConfirmTransitVirtualInterface"):
        ConfirmTransitVirtualInterfaceInput => ConfirmTransitVirtualInterfaceOutput,
    /// Creates a BGP peer on the specified virtual interface.
    CreateBgpPeer("CreateBGPPeer"):
        CreateBgpPeerInput => CreateBgpPeerOutput,
    /// Creates a connection between a customer network and a specific AWS Direct Connect
    /// location.
    CreateConnection("CreateConnection"):
        CreateConnectionInput => CreateConnectionOutput,
    /// Creates a Direct Connect gateway.
    CreateDirectConnectGateway("CreateDirectConnectGateway"):
        CreateDirectConnectGatewayInput => CreateDirectConnectGatewayOutput,
    /// Creates an association between a Direct Connect gateway and a virtual private gateway.
    CreateDirectConnectGatewayAssociation("CreateDirectConnectGatewayAssociation"):
        CreateDirectConnectGatewayAssociationInput => CreateDirectConnectGatewayAssociationOutput,
    /// Creates a proposal to associate the specified virtual private gateway or transit gateway
    /// with the specified Direct Connect gateway.
    CreateDirectConnectGatewayAssociationProposal("CreateDirectConnectGatewayAssociationProposal"):
        CreateDirectConnectGatewayAssociationProposalInput => CreateDirectConnectGatewayAssociationProposalOutput,
    /// Creates an interconnect between an AWS Direct Connect Partner's network and a specific
    /// AWS Direct Connect location.
    CreateInterconnect("CreateInterconnect"):
        CreateInterconnectInput => CreateInterconnectOutput,
    /// Creates a link aggregation group (LAG) with the specified number of bundled physical
    /// dedicated connections.
    CreateLag("CreateLag"):
        CreateLagInput => CreateLagOutput,
    /// Creates a private virtual interface.
    CreatePrivateVirtualInterface("CreatePrivateVirtualInterface"):
        CreatePrivateVirtualInterfaceInput => CreatePrivateVirtualInterfaceOutput,
    /// Creates a public virtual interface.
    CreatePublicVirtualInterface("CreatePublicVirtualInterface"):
        CreatePublicVirtualInterfaceInput => CreatePublicVirtualInterfaceOutput,
    /// Creates a transit virtual interface.
    CreateTransitVirtualInterface("CreateTransitVirtualInterface"):
        CreateTransitVirtualInterfaceInput => CreateTransitVirtualInterfaceOutput,
    /// Deletes the specified BGP peer on the specified virtual interface.
    DeleteBgpPeer("DeleteBGPPeer"):
        DeleteBgpPeerInput => DeleteBgpPeerOutput,
    /// Deletes the specified connection.
    DeleteConnection("DeleteConnection"):
        DeleteConnectionInput => DeleteConnectionOutput,
    /// Deletes the specified Direct Connect gateway.
    DeleteDirectConnectGateway("DeleteDirectConnectGateway"):
        DeleteDirectConnectGatewayInput => DeleteDirectConnectGatewayOutput,
    /// Deletes the association between the specified Direct Connect gateway and virtual private
    /// gateway.
    DeleteDirectConnectGatewayAssociation("DeleteDirectConnectGatewayAssociation"):
        DeleteDirectConnectGatewayAssociationInput => DeleteDirectConnectGatewayAssociationOutput,
    /// Deletes the association proposal request between the specified Direct Connect gateway
    /// and virtual private gateway or transit gateway.
    DeleteDirectConnectGatewayAssociationProposal("DeleteDirectConnectGatewayAssociationProposal"):
        DeleteDirectConnectGatewayAssociationProposalInput => DeleteDirectConnectGatewayAssociationProposalOutput,
    /// Deletes the specified interconnect.
    DeleteInterconnect("DeleteInterconnect"):
        DeleteInterconnectInput => DeleteInterconnectOutput,
    /// Deletes the specified link aggregation group (LAG).
    DeleteLag("DeleteLag"):
        DeleteLagInput => DeleteLagOutput,
    /// Deletes a virtual interface.
    DeleteVirtualInterface("DeleteVirtualInterface"):
        DeleteVirtualInterfaceInput => DeleteVirtualInterfaceOutput,
    /// Gets the LOA-CFA for a connection. Deprecated in favour of `DescribeLoa`.
    DescribeConnectionLoa("DescribeConnectionLoa"):
        DescribeConnectionLoaInput => DescribeConnectionLoaOutput,
    /// Displays the specified connection or all connections in this Region.
    DescribeConnections("DescribeConnections"):
        DescribeConnectionsInput => DescribeConnectionsOutput,
    /// Lists the connections that have been provisioned on the specified interconnect.
    DescribeConnectionsOnInterconnect("DescribeConnectionsOnInterconnect"):
        DescribeConnectionsOnInterconnectInput => DescribeConnectionsOnInterconnectOutput,
    /// Describes one or more association proposals for connection between a virtual private
    /// gateway or transit gateway and a Direct Connect gateway.
    DescribeDirectConnectGatewayAssociationProposals("DescribeDirectConnectGatewayAssociationProposals"):
        DescribeDirectConnectGatewayAssociationProposalsInput => DescribeDirectConnectGatewayAssociationProposalsOutput,
    /// Lists the associations between your Direct Connect gateways and virtual private gateways.
    DescribeDirectConnectGatewayAssociations("DescribeDirectConnectGatewayAssociations"):
        DescribeDirectConnectGatewayAssociationsInput => DescribeDirectConnectGatewayAssociationsOutput,
    /// Lists the attachments between your Direct Connect gateways and virtual interfaces.
    DescribeDirectConnectGatewayAttachments("DescribeDirectConnectGatewayAttachments"):
        DescribeDirectConnectGatewayAttachmentsInput => DescribeDirectConnectGatewayAttachmentsOutput,
    /// Lists all your Direct Connect gateways or only the specified Direct Connect gateway.
    DescribeDirectConnectGateways("DescribeDirectConnectGateways"):
        DescribeDirectConnectGatewaysInput => DescribeDirectConnectGatewaysOutput,
    /// Lists the hosted connections that have been provisioned on the specified interconnect or
    /// link aggregation group (LAG).
    DescribeHostedConnections("DescribeHostedConnections"):
        DescribeHostedConnectionsInput => DescribeHostedConnectionsOutput,
    /// Gets the LOA-CFA for the specified interconnect. Deprecated in favour of `DescribeLoa`.
    DescribeInterconnectLoa("DescribeInterconnectLoa"):
        DescribeInterconnectLoaInput => DescribeInterconnectLoaOutput,
    /// Lists the interconnects owned by the AWS account or only the specified interconnect.
    DescribeInterconnects("DescribeInterconnects"):
        DescribeInterconnectsInput => DescribeInterconnectsOutput,
    /// Describes all your link aggregation groups (LAG) or the specified LAG.
    DescribeLags("DescribeLags"):
        DescribeLagsInput => DescribeLagsOutput,
    /// Gets the LOA-CFA for a connection, interconnect, or link aggregation group (LAG).
    DescribeLoa("DescribeLoa"):
        DescribeLoaInput => DescribeLoaOutput,
    /// Lists the AWS Direct Connect locations in the current AWS Region.
    DescribeLocations("DescribeLocations"):
        DescribeLocationsInput => DescribeLocationsOutput,
    /// Describes the tags associated with the specified AWS Direct Connect resources.
    DescribeTags("DescribeTags"):
        DescribeTagsInput => DescribeTagsOutput,
    /// Lists the virtual private gateways owned by the AWS account.
    DescribeVirtualGateways("DescribeVirtualGateways"):
        DescribeVirtualGatewaysInput => DescribeVirtualGatewaysOutput,
    /// Displays all virtual interfaces for an AWS account.
    DescribeVirtualInterfaces("DescribeVirtualInterfaces"):
        DescribeVirtualInterfacesInput => DescribeVirtualInterfacesOutput,
    /// Disassociates a connection from a link aggregation group (LAG).
    DisassociateConnectionFromLag("DisassociateConnectionFromLag"):
        DisassociateConnectionFromLagInput => DisassociateConnectionFromLagOutput,
    /// Lists the virtual interface failover test history.
    ListVirtualInterfaceTestHistory("ListVirtualInterfaceTestHistory"):
        ListVirtualInterfaceTestHistoryInput => ListVirtualInterfaceTestHistoryOutput,
    /// Starts the virtual interface failover test that verifies your configuration meets your
    /// resiliency requirements by placing the BGP peering session in the DOWN state.
    StartBgpFailoverTest("StartBgpFailoverTest"):
        StartBgpFailoverTestInput => StartBgpFailoverTestOutput,
    /// Stops the virtual interface failover test.
    StopBgpFailoverTest("StopBgpFailoverTest"):
        StopBgpFailoverTestInput => StopBgpFailoverTestOutput,
    /// Adds the specified tags to the specified AWS Direct Connect resource.
    TagResource("TagResource"):
        TagResourceInput => TagResourceOutput,
    /// Removes one or more tags from the specified AWS Direct Connect resource.
    UntagResource("UntagResource"):
        UntagResourceInput => UntagResourceOutput,
    /// Updates the specified attributes of the Direct Connect gateway association.
    UpdateDirectConnectGatewayAssociation("UpdateDirectConnectGatewayAssociation"):
        UpdateDirectConnectGatewayAssociationInput => UpdateDirectConnectGatewayAssociationOutput,
    /// Updates the attributes of the specified link aggregation group (LAG).
    UpdateLag("UpdateLag"):
        UpdateLagInput => UpdateLagOutput,
    /// Updates the specified attributes of the specified virtual private interface.
    UpdateVirtualInterfaceAttributes("UpdateVirtualInterfaceAttributes"):
        UpdateVirtualInterfaceAttributesInput => UpdateVirtualInterfaceAttributesOutput,
}

#[cfg(test)]
mod test {
    use super::{CreateBgpPeer, DescribeLags, OperationShape, OPERATIONS};
    use std::collections::HashSet;

    #[test]
    fn wire_names_keep_model_casing() {
        assert_eq!(CreateBgpPeer::NAME, "CreateBGPPeer");
        assert_eq!(CreateBgpPeer::TARGET, "OvertureService.CreateBGPPeer");
        assert_eq!(
            CreateBgpPeer::ID.absolute(),
            "com.amazonaws.directconnect#CreateBGPPeer"
        );
        assert_eq!(DescribeLags::ID.name(), "DescribeLags");
    }

    #[test]
    fn operation_ids_are_unique() {
        let unique: HashSet<_> = OPERATIONS.iter().map(|id| id.absolute()).collect();
        assert_eq!(unique.len(), OPERATIONS.len());
        assert_eq!(OPERATIONS.len(), 56);
        assert!(OPERATIONS
            .iter()
            .all(|id| id.namespace() == "com.amazonaws.directconnect"));
    }
}
