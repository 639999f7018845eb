//! Account feature toggle.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::entity::{impl_domain_entity, DomainEntity};
use crate::schema::{max_len, DtoSchema, FieldSpec, CREATED_DATE_FIELD, ID_FIELD, MODIFIED_DATE_FIELD};
use crate::types::{DbId, Timestamp};

/// A named feature switched on or off for an account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct FeatureDto {
    #[validate(range(min = 0))]
    pub id: DbId,
    #[validate(length(max = 100))]
    pub feature_name: Option<String>,
    pub is_enabled: bool,
    pub created_date: Timestamp,
    pub modified_date: Option<Timestamp>,
}

impl Default for FeatureDto {
    fn default() -> Self {
        Self {
            id: 0,
            feature_name: None,
            is_enabled: false,
            created_date: Utc::now(),
            modified_date: None,
        }
    }
}

impl FeatureDto {
    pub fn new(feature_name: impl Into<String>, is_enabled: bool) -> Self {
        Self {
            feature_name: Some(feature_name.into()),
            is_enabled,
            ..Self::default()
        }
    }
}

impl DtoSchema for FeatureDto {
    const ENTITY: &'static str = "FeatureDTO";

    fn fields() -> &'static [FieldSpec] {
        const FIELDS: &[FieldSpec] = &[
            ID_FIELD,
            FieldSpec::new("feature_name", "featureName").with(&[max_len(100)]),
            FieldSpec::new("is_enabled", "isEnabled"),
            CREATED_DATE_FIELD,
            MODIFIED_DATE_FIELD,
        ];
        FIELDS
    }
}

impl_domain_entity!(FeatureDto, "FeatureDTO");

/// Read/write view of a feature.
pub trait FeatureView: DomainEntity {
    fn feature_name(&self) -> Option<&str>;
    fn set_feature_name(&mut self, name: Option<String>);
    fn is_enabled(&self) -> bool;
    fn set_enabled(&mut self, enabled: bool);
}

impl FeatureView for FeatureDto {
    fn feature_name(&self) -> Option<&str> {
        self.feature_name.as_deref()
    }

    fn set_feature_name(&mut self, name: Option<String>) {
        self.feature_name = name;
    }

    fn is_enabled(&self) -> bool {
        self.is_enabled
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.is_enabled = enabled;
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use crate::error::CoreError;
    use crate::schema::testing::assert_default_matches_table;

    #[test]
    fn defaults() {
        let before = Utc::now();
        let feature = FeatureDto::default();
        let after = Utc::now();

        assert_eq!(feature.id, 0);
        assert!(feature.feature_name.is_none());
        assert!(!feature.is_enabled);
        assert!(feature.created_date >= before && feature.created_date <= after);
        assert!(feature.modified_date.is_none());
    }

    #[test]
    fn wire_shape_matches_table() {
        assert_default_matches_table::<FeatureDto>();
    }

    #[test]
    fn view_writes_reach_the_struct() {
        let mut feature = FeatureDto::new("Reminders", false);
        let view: &mut dyn FeatureView = &mut feature;
        view.set_enabled(true);
        view.set_feature_name(Some("Calendar".into()));

        assert!(feature.is_enabled);
        assert_eq!(feature.feature_name.as_deref(), Some("Calendar"));
    }

    #[test]
    fn to_json_is_not_implemented() {
        let err = FeatureDto::default().to_json().unwrap_err();
        assert_matches!(
            err,
            CoreError::NotImplemented { entity: "FeatureDTO", operation: "to_json" }
        );
    }
}
