use serde::Deserialize;

use crate::domain::client::{NewClient, UpdateClient};
use crate::domain::types::{FirstName, IdNumber, LastName, MobileNumber, TypeConstraintError};

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
/// JSON body used both to create and to edit a client.
///
/// Every field is optional on the wire; absence is reported by validation
/// with the same message as a blank value.
pub struct ClientCreateRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub id_number: Option<String>,
    pub mobile_number: Option<String>,
    pub physical_address: Option<String>,
}

/// Field values that passed every check, in a shape shared by create and edit.
struct ValidatedFields {
    first_name: FirstName,
    last_name: LastName,
    id_number: IdNumber,
    mobile_number: MobileNumber,
    physical_address: Option<String>,
}

impl ClientCreateRequest {
    /// Runs the field checks in order and stops at the first failure.
    fn validated(&self) -> Result<ValidatedFields, TypeConstraintError> {
        let first_name = FirstName::new(self.first_name.clone().unwrap_or_default())?;
        let last_name = LastName::new(self.last_name.clone().unwrap_or_default())?;
        let id_number = IdNumber::new(self.id_number.clone().unwrap_or_default())?;
        let mobile_number = MobileNumber::new(self.mobile_number.clone().unwrap_or_default())?;

        Ok(ValidatedFields {
            first_name,
            last_name,
            id_number,
            mobile_number,
            physical_address: self.physical_address.clone(),
        })
    }
}

impl TryFrom<&ClientCreateRequest> for NewClient {
    type Error = TypeConstraintError;

    fn try_from(request: &ClientCreateRequest) -> Result<Self, Self::Error> {
        let fields = request.validated()?;
        Ok(NewClient::new(
            fields.first_name,
            fields.last_name,
            fields.id_number,
            fields.mobile_number,
            fields.physical_address,
        ))
    }
}

impl TryFrom<&ClientCreateRequest> for UpdateClient {
    type Error = TypeConstraintError;

    fn try_from(request: &ClientCreateRequest) -> Result<Self, Self::Error> {
        let fields = request.validated()?;
        Ok(UpdateClient::new(
            fields.first_name,
            fields.last_name,
            fields.id_number,
            fields.mobile_number,
            fields.physical_address,
        ))
    }
}
