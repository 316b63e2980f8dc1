//! Entity module - Contains all SeaORM entity definitions for the store.
//!
//! Each entity has a Model struct for data and an Entity struct for
//! operations. The collections mirror a document store: ledger records carry
//! a plain `project_id` field with no enforced foreign key, so a deleted
//! project leaves its children behind as display artifacts.

pub mod allocation;
pub mod booking;
pub mod funding;
pub mod project;
pub mod staff_member;
pub mod team_member;
pub mod transaction;

// Re-export specific types to avoid conflicts
pub use allocation::{Column as AllocationColumn, Entity as Allocation, Model as AllocationModel};
pub use booking::{Column as BookingColumn, Entity as Booking, Model as BookingModel};
pub use funding::{Column as FundingColumn, Entity as Funding, Model as FundingModel};
pub use project::{Column as ProjectColumn, Entity as Project, Model as ProjectModel};
pub use staff_member::{
    Column as StaffMemberColumn, Entity as StaffMember, Model as StaffMemberModel,
};
pub use team_member::{Column as TeamMemberColumn, Entity as TeamMember, Model as TeamMemberModel};
pub use transaction::{
    Column as TransactionColumn, Entity as Transaction, Model as TransactionModel,
};
