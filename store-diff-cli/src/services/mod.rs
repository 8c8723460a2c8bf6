// Business logic services layer
//
// Orchestration that sits between the CLI commands and the api/diff modules.

pub mod comparison;
