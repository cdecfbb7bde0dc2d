//! `mx-sdk-rs` server: how-to guides for building contracts with `sc-meta`.

use super::StaticResource;

/// Server identifier
pub const SERVER_NAME: &str = "mx-sdk-rs";
/// Server version
pub const SERVER_VERSION: &str = "0.1.0";

pub const RESOURCES: &[StaticResource] = &[
    StaticResource {
        uri: "mx-sdk-rs://creating-contracts",
        name: "How to create a new smart contract",
        description: "Command for creating a new smart contract.",
        text: "Contracts are created using the \"sc-meta\" cli tool. \
         The command is: \"sc-meta new \
         --name CONTRACT_NAME \
         --template TEMPLATE_NAME\". \
         If a contract name is not known, ask the user for the name. \
         Available templates can be listed by executing \"sc-meta templates\" \
         If the template name is still not provided, use the default template name \"empty\".",
    },
    StaticResource {
        uri: "mx-sdk-rs://building-contracts",
        name: "How to build a smart contract",
        description: "Command for building smart contracts.",
        text: "To build a contract, use the sc-meta cli tool by running the following command in the contract folder: \"sc-meta all build\". \
         If there are more contracts to be built, the command can also be executed in the containing folder to build all existing contracts in all subfolders at the same time. \
         At the end provide a short summary of the build.",
    },
    StaticResource {
        uri: "mx-sdk-rs://cleaning-contracts",
        name: "How to clean a smart contract build",
        description: "Command for cleaning smart contract builds.",
        text: "To clean a contract build, use the cargo cli tool by executing the following command in the contract folder:\"cargo clean\".",
    },
];
