//! Data transfer objects.
//!
//! Each submodule contains:
//! - A `Serialize` + `Deserialize` + `Validate` struct with camelCase wire names
//! - Its static field table (`DtoSchema`)
//! - A view trait presenting its collections as trait-object lists

pub mod account;
pub mod address;
pub mod ca_address;
pub mod contact;
pub mod email_address;
pub mod feature;
pub mod group;
pub mod mx_address;
pub mod organization;
pub mod phone_number;
pub mod project;
pub mod project_task;
pub mod sub_account;
pub mod task_assignment;
pub mod us_address;
pub mod user;

pub use account::{AccountDto, AccountView};
pub use address::{AddressDto, AddressView};
pub use ca_address::CaAddressDto;
pub use contact::{ContactDto, ContactView};
pub use email_address::{EmailAddressDto, EmailAddressView};
pub use feature::{FeatureDto, FeatureView};
pub use group::{GroupDto, GroupView};
pub use mx_address::MxAddressDto;
pub use organization::{OrganizationDto, OrganizationView};
pub use phone_number::{PhoneNumberDto, PhoneNumberView};
pub use project::{ProjectDto, ProjectView};
pub use project_task::{ProjectTaskDto, ProjectTaskView};
pub use sub_account::{SubAccountDto, SubAccountView};
pub use task_assignment::{TaskAssignmentDto, TaskAssignmentView};
pub use us_address::UsAddressDto;
pub use user::{UserDto, UserView};
