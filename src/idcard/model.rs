use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One employee identity card.
///
/// Persisted as a JSON object with camelCase keys. Missing keys default to
/// empty strings and unknown keys are ignored, so hand-edited or older stores
/// still load. A `null` text value reads as empty and a number or boolean as
/// its JSON text. The optional image keys are left out of the JSON when empty:
/// their absence is what lets the photo and logo fallbacks kick in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EmployeeRecord {
    #[serde(deserialize_with = "lenient_text")]
    pub ec_no: String,
    #[serde(deserialize_with = "lenient_text")]
    pub name: String,
    /// Display form `DD/Mon/YYYY`, unlike the other dates.
    #[serde(deserialize_with = "lenient_text")]
    pub ec_date: String,
    #[serde(deserialize_with = "lenient_text")]
    pub birth_date: String,
    #[serde(deserialize_with = "lenient_text")]
    pub passport_no: String,
    #[serde(deserialize_with = "lenient_text")]
    pub passport_issue_date: String,
    #[serde(deserialize_with = "lenient_text")]
    pub passport_expire_date: String,
    #[serde(deserialize_with = "lenient_text")]
    pub visa_no: String,
    #[serde(deserialize_with = "lenient_text")]
    pub visa_issue_date: String,
    #[serde(deserialize_with = "lenient_text")]
    pub visa_expire_date: String,
    #[serde(deserialize_with = "lenient_text")]
    pub referral_no: String,
    #[serde(deserialize_with = "lenient_text")]
    pub recruiting_agency: String,
    #[serde(deserialize_with = "lenient_text")]
    pub employer: String,
    #[serde(deserialize_with = "lenient_text")]
    pub country: String,
    #[serde(deserialize_with = "lenient_text")]
    pub bmet_no: String,
    #[serde(deserialize_with = "lenient_text")]
    pub gender: String,
    #[serde(deserialize_with = "lenient_text")]
    pub blood_group: String,
    #[serde(deserialize_with = "lenient_text")]
    pub nid: String,
    #[serde(deserialize_with = "lenient_text")]
    pub passport_name: String,
    #[serde(deserialize_with = "lenient_text")]
    pub passport_no1: String,

    #[serde(skip_serializing_if = "is_blank", deserialize_with = "lenient_image")]
    pub photo_data: Option<String>,
    #[serde(skip_serializing_if = "is_blank", deserialize_with = "lenient_image")]
    pub photo: Option<String>,
    #[serde(skip_serializing_if = "is_blank", deserialize_with = "lenient_image")]
    pub logo_left: Option<String>,
    #[serde(skip_serializing_if = "is_blank", deserialize_with = "lenient_image")]
    pub logo_right: Option<String>,
}

fn lenient_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null | Value::Array(_) | Value::Object(_) => String::new(),
    })
}

fn lenient_image<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}

fn is_blank(value: &Option<String>) -> bool {
    non_empty(value).is_none()
}

/// Treats `None` and `Some("")` alike.
pub fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

impl EmployeeRecord {
    pub fn new(ec_no: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            ec_no: ec_no.into(),
            name: name.into(),
            ..Default::default()
        }
    }
}

/// A record together with its position in the stored sequence.
///
/// The position is what the edit form uses as identity; it shifts whenever
/// the sequence is rewritten with a different order.
#[derive(Debug, Clone, Serialize)]
pub struct IndexedRecord {
    pub index: usize,
    pub record: EmployeeRecord,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_camel_case_keys() {
        let mut record = EmployeeRecord::new("E1", "Alice");
        record.passport_no1 = "P-1".into();
        record.bmet_no = "B-9".into();

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["ecNo"], "E1");
        assert_eq!(json["passportNo1"], "P-1");
        assert_eq!(json["bmetNo"], "B-9");
        assert_eq!(json["ecDate"], "");
    }

    #[test]
    fn omits_empty_image_keys() {
        let mut record = EmployeeRecord::new("E1", "Alice");
        record.logo_left = Some(String::new());
        record.logo_right = Some("data:image/png;base64,AAAA".into());

        let json = serde_json::to_value(&record).unwrap();
        let obj = json.as_object().unwrap();
        assert!(!obj.contains_key("photoData"));
        assert!(!obj.contains_key("photo"));
        assert!(!obj.contains_key("logoLeft"));
        assert!(obj.contains_key("logoRight"));
    }

    #[test]
    fn deserializes_leniently() {
        let json = r#"{"ecNo":"E7","name":"Bob","favouriteColour":"blue","photo":null}"#;
        let record: EmployeeRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.ec_no, "E7");
        assert_eq!(record.name, "Bob");
        assert_eq!(record.country, "");
        assert_eq!(record.photo, None);
    }

    #[test]
    fn coerces_null_and_scalar_text_values() {
        let json = r#"{"ecNo":1001,"name":null,"gender":true,"nid":[1],"logoLeft":42}"#;
        let record: EmployeeRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.ec_no, "1001");
        assert_eq!(record.name, "");
        assert_eq!(record.gender, "true");
        assert_eq!(record.nid, "");
        assert_eq!(record.logo_left, None);
    }

    #[test]
    fn non_empty_filters_blank() {
        assert_eq!(non_empty(&None), None);
        assert_eq!(non_empty(&Some(String::new())), None);
        assert_eq!(non_empty(&Some("x".into())), Some("x"));
    }
}
