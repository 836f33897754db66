use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

use crate::models::{AdmissionInquiry, ContactInquiry, InquiryKind};

/// Body of `POST /api/contact-inquiry`, as submitted.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ContactInquiryRequest {
    #[validate(required, length(min = 1))]
    pub child_name: Option<String>,
    #[validate(required, length(min = 1))]
    pub phone: Option<String>,
    pub admission_class: Option<String>,
    #[validate(required, length(min = 1))]
    pub message: Option<String>,
}

/// Body of `POST /api/admission-inquiry`, as submitted.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AdmissionInquiryRequest {
    #[validate(required, length(min = 1))]
    pub student_name: Option<String>,
    #[validate(required, length(min = 1))]
    pub admission_class: Option<String>,
    #[validate(required, length(min = 1))]
    pub dob: Option<String>,
    #[validate(required, length(min = 1))]
    pub phone: Option<String>,
    pub last_school: Option<String>,
    pub address: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct InquiryAccepted {
    pub message: String,
}

/// Body of every rejected or failed submission.
#[derive(Debug, Serialize, Deserialize)]
pub struct InquiryErrorResponse {
    pub message: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub missing: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn rust_field_name(wire_name: &str) -> String {
    wire_name.chars().fold(String::new(), |mut name, c| {
        if c.is_ascii_uppercase() {
            name.push('_');
            name.push(c.to_ascii_lowercase());
        } else {
            name.push(c);
        }
        name
    })
}

/// Wire names of the required fields that failed validation, in form order.
fn missing_fields(kind: InquiryKind, errors: &ValidationErrors) -> Vec<&'static str> {
    kind.required_fields()
        .iter()
        .copied()
        .filter(|field| errors.errors().contains_key(rust_field_name(field).as_str()))
        .collect()
}

impl ContactInquiryRequest {
    /// Returns the absent required fields, in form order, on failure.
    pub fn into_inquiry(self) -> Result<ContactInquiry, Vec<&'static str>> {
        let kind = InquiryKind::Contact;
        self.validate().map_err(|e| missing_fields(kind, &e))?;

        match (self.child_name, self.phone, self.message) {
            (Some(child_name), Some(phone), Some(message)) => Ok(ContactInquiry {
                child_name,
                phone,
                admission_class: present(self.admission_class),
                message,
            }),
            _ => Err(kind.required_fields().to_vec()),
        }
    }
}

impl AdmissionInquiryRequest {
    /// Returns the absent required fields, in form order, on failure.
    pub fn into_inquiry(self) -> Result<AdmissionInquiry, Vec<&'static str>> {
        let kind = InquiryKind::Admission;
        self.validate().map_err(|e| missing_fields(kind, &e))?;

        match (self.student_name, self.admission_class, self.dob, self.phone) {
            (Some(student_name), Some(admission_class), Some(dob), Some(phone)) => {
                Ok(AdmissionInquiry {
                    student_name,
                    admission_class,
                    dob,
                    phone,
                    last_school: present(self.last_school),
                    address: present(self.address),
                })
            }
            _ => Err(kind.required_fields().to_vec()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contact_with_required_fields_validates() {
        let request: ContactInquiryRequest = serde_json::from_str(
            r#"{"childName":"Ravi","phone":"9999999999","message":"Interested"}"#,
        )
        .unwrap();

        let inquiry = request.into_inquiry().unwrap();
        assert_eq!(inquiry.child_name, "Ravi");
        assert_eq!(inquiry.phone, "9999999999");
        assert_eq!(inquiry.message, "Interested");
        assert_eq!(inquiry.admission_class, None);
    }

    #[test]
    fn empty_and_null_fields_count_as_missing() {
        let request: ContactInquiryRequest =
            serde_json::from_str(r#"{"childName":"","phone":null,"message":"Hi"}"#).unwrap();

        assert_eq!(request.into_inquiry().unwrap_err(), vec!["childName", "phone"]);
    }

    #[test]
    fn empty_optional_field_is_dropped() {
        let request = ContactInquiryRequest {
            child_name: Some("Ravi".into()),
            phone: Some("1".into()),
            admission_class: Some(String::new()),
            message: Some("Hi".into()),
        };
        assert_eq!(request.into_inquiry().unwrap().admission_class, None);
    }

    #[test]
    fn admission_reports_missing_fields_in_form_order() {
        let request: AdmissionInquiryRequest =
            serde_json::from_str(r#"{"studentName":"Asha","phone":"888"}"#).unwrap();

        assert_eq!(request.into_inquiry().unwrap_err(), vec!["admissionClass", "dob"]);
    }

    #[test]
    fn empty_admission_lists_every_required_field() {
        let missing = AdmissionInquiryRequest::default().into_inquiry().unwrap_err();
        assert_eq!(missing, InquiryKind::Admission.required_fields());
    }

    #[test]
    fn whitespace_only_value_is_present() {
        let request = ContactInquiryRequest {
            child_name: Some(" ".into()),
            phone: Some("1".into()),
            admission_class: None,
            message: Some("Hi".into()),
        };
        assert_eq!(request.into_inquiry().unwrap().child_name, " ");
    }

    #[test]
    fn wire_names_map_to_struct_fields() {
        assert_eq!(rust_field_name("childName"), "child_name");
        assert_eq!(rust_field_name("admissionClass"), "admission_class");
        assert_eq!(rust_field_name("dob"), "dob");
    }

    #[test]
    fn admission_keeps_optional_details() {
        let request: AdmissionInquiryRequest = serde_json::from_str(
            r#"{"studentName":"Asha","admissionClass":"UKG","dob":"2019-04-02","phone":"888","lastSchool":"Little Steps","address":"12 Park Road"}"#,
        )
        .unwrap();

        let inquiry = request.into_inquiry().unwrap();
        assert_eq!(inquiry.last_school.as_deref(), Some("Little Steps"));
        assert_eq!(inquiry.address.as_deref(), Some("12 Park Road"));
    }
}
