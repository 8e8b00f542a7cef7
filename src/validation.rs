use crate::features::{FeatureVector, FLAG_TYPES, PROTOCOL_TYPES, SERVICE_TYPES};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Single violated constraint of a [FeatureVector]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    fn new(field: &str, message: String) -> Self {
        Self {
            field: field.to_owned(),
            message,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NumericRule {
    NonNegative,
    Binary,
    NonNegativeInteger,
    Rate,
}

impl NumericRule {
    fn holds(self, value: f64) -> bool {
        match self {
            Self::NonNegative => value >= 0.0,
            Self::Binary => value == 0.0 || value == 1.0,
            Self::NonNegativeInteger => value >= 0.0 && value.fract() == 0.0,
            Self::Rate => (0.0..=1.0).contains(&value),
        }
    }

    fn message(self, field: &str) -> String {
        match self {
            Self::NonNegative => format!("{field} must be non-negative"),
            Self::Binary => format!("{field} must be 0 or 1"),
            Self::NonNegativeInteger => format!("{field} must be a non-negative integer"),
            Self::Rate => format!("{field} must be between 0 and 1"),
        }
    }
}

struct NumericCheck {
    field: &'static str,
    value: fn(&FeatureVector) -> f64,
    rule: NumericRule,
}

struct CategoricalCheck {
    field: &'static str,
    value: fn(&FeatureVector) -> &str,
    allowed: &'static [&'static str],
}

macro_rules! numeric {
    ($field:ident, $rule:ident) => {
        NumericCheck {
            field: stringify!($field),
            value: |v: &FeatureVector| v.$field,
            rule: NumericRule::$rule,
        }
    };
}

// Order of this table is the order in which errors are reported
const NUMERIC_CHECKS: &[NumericCheck] = &[
    numeric!(duration, NonNegative),
    numeric!(src_bytes, NonNegative),
    numeric!(dst_bytes, NonNegative),
    numeric!(land, Binary),
    numeric!(logged_in, Binary),
    numeric!(root_shell, Binary),
    numeric!(su_attempted, Binary),
    numeric!(is_host_login, Binary),
    numeric!(is_guest_login, Binary),
    numeric!(wrong_fragment, NonNegativeInteger),
    numeric!(urgent, NonNegativeInteger),
    numeric!(hot, NonNegativeInteger),
    numeric!(num_failed_logins, NonNegativeInteger),
    numeric!(num_compromised, NonNegativeInteger),
    numeric!(num_root, NonNegativeInteger),
    numeric!(num_file_creations, NonNegativeInteger),
    numeric!(num_shells, NonNegativeInteger),
    numeric!(num_access_files, NonNegativeInteger),
    numeric!(num_outbound_cmds, NonNegativeInteger),
    numeric!(count, NonNegativeInteger),
    numeric!(srv_count, NonNegativeInteger),
    numeric!(dst_host_count, NonNegativeInteger),
    numeric!(dst_host_srv_count, NonNegativeInteger),
    numeric!(serror_rate, Rate),
    numeric!(srv_serror_rate, Rate),
    numeric!(rerror_rate, Rate),
    numeric!(srv_rerror_rate, Rate),
    numeric!(same_srv_rate, Rate),
    numeric!(diff_srv_rate, Rate),
    numeric!(srv_diff_host_rate, Rate),
    numeric!(dst_host_same_srv_rate, Rate),
    numeric!(dst_host_diff_srv_rate, Rate),
    numeric!(dst_host_same_src_port_rate, Rate),
    numeric!(dst_host_srv_diff_host_rate, Rate),
    numeric!(dst_host_serror_rate, Rate),
    numeric!(dst_host_srv_serror_rate, Rate),
    numeric!(dst_host_rerror_rate, Rate),
    numeric!(dst_host_srv_rerror_rate, Rate),
];

const CATEGORICAL_CHECKS: &[CategoricalCheck] = &[
    CategoricalCheck {
        field: "protocol_type",
        value: |v| v.protocol_type.as_str(),
        allowed: &PROTOCOL_TYPES,
    },
    CategoricalCheck {
        field: "flag",
        value: |v| v.flag.as_str(),
        allowed: &FLAG_TYPES,
    },
    CategoricalCheck {
        field: "service",
        value: |v| v.service.as_str(),
        allowed: &SERVICE_TYPES,
    },
];

/// Check a feature vector against the domain constraints of every field
///
/// All checks are run regardless of the previous failures, so the returned list holds
/// every violation found in a single pass. An empty list means the vector can be sent
/// for classification.
pub fn validate(vector: &FeatureVector) -> Vec<ValidationError> {
    let mut errors = NUMERIC_CHECKS
        .iter()
        .filter(|check| !check.rule.holds((check.value)(vector)))
        .map(|check| ValidationError::new(check.field, check.rule.message(check.field)))
        .collect::<Vec<ValidationError>>();

    errors.extend(
        CATEGORICAL_CHECKS
            .iter()
            .filter(|check| !check.allowed.contains(&(check.value)(vector)))
            .map(|check| {
                ValidationError::new(
                    check.field,
                    format!("{} must be one of: {}", check.field, check.allowed.join(", ")),
                )
            }),
    );

    if vector.srv_count > vector.count {
        errors.push(ValidationError::new(
            "srv_count",
            "Service count cannot exceed total count".to_owned(),
        ));
    }

    if vector.dst_host_srv_count > vector.dst_host_count {
        errors.push(ValidationError::new(
            "dst_host_srv_count",
            "Destination host service count cannot exceed destination host count".to_owned(),
        ));
    }

    errors
}

/// Human readable form of a feature name, `dst_host_count` becomes `Dst Host Count`
pub fn format_field_name(field: &str) -> String {
    field
        .split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::samples::{attack_sample, normal_sample};
    use pretty_assertions::assert_eq;
    use test_case::case;

    const BINARY_FIELDS: [&str; 6] = [
        "land",
        "logged_in",
        "root_shell",
        "su_attempted",
        "is_host_login",
        "is_guest_login",
    ];

    const RATE_FIELDS: [&str; 15] = [
        "serror_rate",
        "srv_serror_rate",
        "rerror_rate",
        "srv_rerror_rate",
        "same_srv_rate",
        "diff_srv_rate",
        "srv_diff_host_rate",
        "dst_host_same_srv_rate",
        "dst_host_diff_srv_rate",
        "dst_host_same_src_port_rate",
        "dst_host_srv_diff_host_rate",
        "dst_host_serror_rate",
        "dst_host_srv_serror_rate",
        "dst_host_rerror_rate",
        "dst_host_srv_rerror_rate",
    ];

    /// Normal sample with a single numeric field overwritten
    fn sample_with(field: &str, value: f64) -> FeatureVector {
        let mut json = serde_json::to_value(normal_sample()).unwrap();
        json[field] = serde_json::json!(value);
        serde_json::from_value(json).unwrap()
    }

    fn fields_of(errors: &[ValidationError]) -> Vec<&str> {
        errors.iter().map(|e| e.field.as_str()).collect()
    }

    #[test]
    fn test_normal_sample_is_valid() {
        assert_eq!(Vec::<ValidationError>::new(), validate(&normal_sample()))
    }

    #[test]
    fn test_attack_sample_is_valid() {
        assert_eq!(Vec::<ValidationError>::new(), validate(&attack_sample()))
    }

    #[test]
    fn test_every_numeric_check_names_a_distinct_field() {
        let mut fields = NUMERIC_CHECKS.iter().map(|c| c.field).collect::<Vec<&str>>();
        fields.sort_unstable();
        fields.dedup();

        assert_eq!(38, fields.len())
    }

    #[case(2.0; "value above one")]
    #[case(-1.0; "negative value")]
    #[case(0.5; "fractional value")]
    fn test_binary_field_out_of_domain(value: f64) {
        for field in BINARY_FIELDS {
            let errors = validate(&sample_with(field, value));

            assert_eq!(vec![field], fields_of(&errors));
            assert_eq!(format!("{field} must be 0 or 1"), errors[0].message);
        }
    }

    #[case(-0.01; "just below zero")]
    #[case(1.01; "just above one")]
    #[case(42.0; "far above one")]
    fn test_rate_field_out_of_range(value: f64) {
        for field in RATE_FIELDS {
            let errors = validate(&sample_with(field, value));

            assert_eq!(vec![field], fields_of(&errors));
        }
    }

    #[case(0.0; "lower bound")]
    #[case(1.0; "upper bound")]
    fn test_rate_field_bounds_are_inclusive(value: f64) {
        for field in RATE_FIELDS {
            assert_eq!(
                Vec::<ValidationError>::new(),
                validate(&sample_with(field, value))
            );
        }
    }

    #[case("wrong_fragment", -1.0; "negative count")]
    #[case("hot", 1.5; "fractional count")]
    fn test_count_field_must_be_non_negative_integer(field: &str, value: f64) {
        let errors = validate(&sample_with(field, value));

        assert_eq!(vec![field], fields_of(&errors));
        assert_eq!(
            format!("{field} must be a non-negative integer"),
            errors[0].message
        );
    }

    #[case("duration", -0.5; "negative duration")]
    #[case("src_bytes", -1.0; "negative source bytes")]
    #[case("dst_bytes", -1.0; "negative destination bytes")]
    fn test_continuous_field_must_be_non_negative(field: &str, value: f64) {
        let errors = validate(&sample_with(field, value));

        assert_eq!(vec![field], fields_of(&errors));
    }

    // NaN compares false against every bound, it must still be reported
    #[test]
    fn test_not_a_number_is_rejected() {
        let vector = FeatureVector {
            duration: f64::NAN,
            land: f64::NAN,
            num_outbound_cmds: f64::NAN,
            serror_rate: f64::NAN,
            ..normal_sample()
        };

        assert_eq!(
            vec!["duration", "land", "num_outbound_cmds", "serror_rate"],
            fields_of(&validate(&vector))
        );
    }

    #[test]
    fn test_bytes_are_unbounded() {
        let vector = FeatureVector {
            src_bytes: 693_375_640.0,
            dst_bytes: 5_134_218.0,
            ..normal_sample()
        };

        assert_eq!(Vec::<ValidationError>::new(), validate(&vector))
    }

    #[case("protocol_type", "sctp"; "unknown protocol")]
    #[case("flag", "XX"; "unknown flag")]
    #[case("service", "gopher"; "unknown service")]
    #[case("flag", "sf"; "flag codes are case sensitive")]
    fn test_categorical_field_outside_catalog(field: &str, value: &str) {
        let mut json = serde_json::to_value(normal_sample()).unwrap();
        json[field] = serde_json::json!(value);
        let vector: FeatureVector = serde_json::from_value(json).unwrap();

        let errors = validate(&vector);

        assert_eq!(vec![field], fields_of(&errors));
    }

    #[test]
    fn test_srv_count_cannot_exceed_count() {
        let vector = FeatureVector {
            srv_count: 9.0,
            count: 8.0,
            ..normal_sample()
        };

        assert_eq!(vec!["srv_count"], fields_of(&validate(&vector)));
    }

    #[test]
    fn test_srv_count_equal_to_count_is_valid() {
        let vector = FeatureVector {
            srv_count: 8.0,
            count: 8.0,
            ..normal_sample()
        };

        assert_eq!(Vec::<ValidationError>::new(), validate(&vector));
    }

    #[test]
    fn test_dst_host_srv_count_cannot_exceed_dst_host_count() {
        let vector = FeatureVector {
            dst_host_srv_count: 10.0,
            dst_host_count: 9.0,
            ..normal_sample()
        };

        assert_eq!(vec!["dst_host_srv_count"], fields_of(&validate(&vector)));
    }

    #[test]
    fn test_dst_host_srv_count_equal_to_dst_host_count_is_valid() {
        let vector = FeatureVector {
            dst_host_srv_count: 25.0,
            dst_host_count: 25.0,
            ..normal_sample()
        };

        assert_eq!(Vec::<ValidationError>::new(), validate(&vector));
    }

    // All rules run, so a badly broken vector reports every problem in check order
    #[test]
    fn test_errors_are_accumulated_without_early_exit() {
        let vector = FeatureVector {
            duration: -1.0,
            land: 3.0,
            count: 2.5,
            srv_count: 4.0,
            serror_rate: 1.5,
            protocol_type: "sctp".to_owned(),
            flag: "??".to_owned(),
            ..normal_sample()
        };

        let errors = validate(&vector);

        assert_eq!(
            vec![
                "duration",
                "land",
                "count",
                "serror_rate",
                "protocol_type",
                "flag",
                "srv_count"
            ],
            fields_of(&errors)
        );
    }

    #[test]
    fn test_validation_is_idempotent() {
        let vector = FeatureVector {
            hot: -2.0,
            flag: "nope".to_owned(),
            ..attack_sample()
        };

        assert_eq!(validate(&vector), validate(&vector));
    }

    #[case("dst_host_count", "Dst Host Count"; "multiple words")]
    #[case("duration", "Duration"; "single word")]
    #[case("pop_3", "Pop 3"; "word with digit")]
    fn test_format_field_name(field: &str, expected: &str) {
        assert_eq!(expected, format_field_name(field))
    }
}
