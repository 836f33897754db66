//! HTML bodies for the administrator emails.
//!
//! Layouts live under `templates/`; askama escapes every interpolated
//! value, including the `tel:` link target.

use askama::Template;

use crate::models::{AdmissionInquiry, ContactInquiry};

const PLACEHOLDER: &str = "-";

#[derive(Template)]
#[template(path = "contact.html")]
pub struct ContactEmailTemplate<'a> {
    pub child_name: &'a str,
    pub phone: &'a str,
    pub admission_class: &'a str,
    pub message: &'a str,
}

impl<'a> From<&'a ContactInquiry> for ContactEmailTemplate<'a> {
    fn from(inquiry: &'a ContactInquiry) -> Self {
        Self {
            child_name: &inquiry.child_name,
            phone: &inquiry.phone,
            admission_class: inquiry.admission_class.as_deref().unwrap_or(PLACEHOLDER),
            message: &inquiry.message,
        }
    }
}

#[derive(Template)]
#[template(path = "admission.html")]
pub struct AdmissionEmailTemplate<'a> {
    pub student_name: &'a str,
    pub admission_class: &'a str,
    pub dob: &'a str,
    pub phone: &'a str,
    pub last_school: &'a str,
    pub address: &'a str,
}

impl<'a> From<&'a AdmissionInquiry> for AdmissionEmailTemplate<'a> {
    fn from(inquiry: &'a AdmissionInquiry) -> Self {
        Self {
            student_name: &inquiry.student_name,
            admission_class: &inquiry.admission_class,
            dob: &inquiry.dob,
            phone: &inquiry.phone,
            last_school: inquiry.last_school.as_deref().unwrap_or(PLACEHOLDER),
            address: inquiry.address.as_deref().unwrap_or(PLACEHOLDER),
        }
    }
}

pub fn render_contact(inquiry: &ContactInquiry) -> Result<String, askama::Error> {
    ContactEmailTemplate::from(inquiry).render()
}

pub fn render_admission(inquiry: &AdmissionInquiry) -> Result<String, askama::Error> {
    AdmissionEmailTemplate::from(inquiry).render()
}
