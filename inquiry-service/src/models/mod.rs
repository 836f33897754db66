pub mod inquiry;

pub use inquiry::{AdmissionInquiry, ContactInquiry, InquiryKind};
