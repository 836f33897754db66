pub mod inquiry;

pub use inquiry::{
    AdmissionInquiryRequest, ContactInquiryRequest, InquiryAccepted, InquiryErrorResponse,
};
