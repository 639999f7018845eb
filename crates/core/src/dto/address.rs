//! Country-neutral address view and the mixed address list element.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError, ValidationErrors};

use crate::codes::AddressType;
use crate::dto::ca_address::CaAddressDto;
use crate::dto::mx_address::MxAddressDto;
use crate::dto::us_address::UsAddressDto;
use crate::entity::DomainEntity;
use crate::error::CoreError;
use crate::types::DbId;

/// Read view shared by the US, Canadian and Mexican address DTOs.
pub trait AddressView: DomainEntity {
    fn street1(&self) -> Option<&str>;
    fn street2(&self) -> Option<&str>;
    fn city(&self) -> Option<&str>;
    /// State or province code.
    fn region_code(&self) -> Option<&'static str>;
    fn postal_code(&self) -> Option<&str>;
    fn country(&self) -> &str;
    fn address_type(&self) -> Option<AddressType>;
    fn is_primary(&self) -> bool;
}

/// One element of a mixed address list, tagged with `"kind"` on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum AddressDto {
    Us(UsAddressDto),
    Ca(CaAddressDto),
    Mx(MxAddressDto),
}

impl AddressDto {
    pub fn id(&self) -> DbId {
        self.as_view().id()
    }

    pub fn as_view(&self) -> &dyn AddressView {
        match self {
            AddressDto::Us(address) => address,
            AddressDto::Ca(address) => address,
            AddressDto::Mx(address) => address,
        }
    }

    /// Recover the concrete address behind a boxed view.
    pub fn from_view(view: Box<dyn AddressView>) -> Result<Self, CoreError> {
        let found = view.entity_name();
        let any = view.into_any();
        let any = match any.downcast::<UsAddressDto>() {
            Ok(address) => return Ok(AddressDto::Us(*address)),
            Err(any) => any,
        };
        let any = match any.downcast::<CaAddressDto>() {
            Ok(address) => return Ok(AddressDto::Ca(*address)),
            Err(any) => any,
        };
        match any.downcast::<MxAddressDto>() {
            Ok(address) => Ok(AddressDto::Mx(*address)),
            Err(_) => Err(CoreError::InvalidCast {
                expected: "AddressDTO",
                found,
            }),
        }
    }

    pub fn from_views(views: Vec<Box<dyn AddressView>>) -> Result<Vec<Self>, CoreError> {
        views.into_iter().map(Self::from_view).collect()
    }
}

impl From<UsAddressDto> for AddressDto {
    fn from(address: UsAddressDto) -> Self {
        AddressDto::Us(address)
    }
}

impl From<CaAddressDto> for AddressDto {
    fn from(address: CaAddressDto) -> Self {
        AddressDto::Ca(address)
    }
}

impl From<MxAddressDto> for AddressDto {
    fn from(address: MxAddressDto) -> Self {
        AddressDto::Mx(address)
    }
}

impl Validate for AddressDto {
    fn validate(&self) -> Result<(), ValidationErrors> {
        match self {
            AddressDto::Us(address) => address.validate(),
            AddressDto::Ca(address) => address.validate(),
            AddressDto::Mx(address) => address.validate(),
        }
    }
}

/// Custom validator for mixed address lists; reports the first invalid
/// element by index.
pub fn validate_addresses(addresses: &[AddressDto]) -> Result<(), ValidationError> {
    for (index, address) in addresses.iter().enumerate() {
        if let Err(errors) = address.validate() {
            let mut error = ValidationError::new("address")
                .with_message(format!("address {index} is invalid: {errors}").into());
            error.add_param("index".into(), &index);
            return Err(error);
        }
    }
    Ok(())
}

/// Borrow every element of a mixed list through the shared view.
pub fn address_views(addresses: &[AddressDto]) -> Vec<&dyn AddressView> {
    addresses.iter().map(AddressDto::as_view).collect()
}
