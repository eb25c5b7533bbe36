// Coordinators layer - Workflow orchestration
//
// Coordinators compose provider and store operations for specific API
// endpoints and own the transaction boundary of each request.

pub mod item_coordinator;

pub use item_coordinator::ItemCoordinator;
