// Providers layer - Work performers and business logic
//
// Providers contain business logic and provide composable operations that
// coordinators can orchestrate.

pub mod item_validator_provider;

pub use item_validator_provider::ItemValidatorProvider;
