/// Which website form a submission came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InquiryKind {
    Contact,
    Admission,
}

impl InquiryKind {
    pub fn required_fields(&self) -> &'static [&'static str] {
        match self {
            InquiryKind::Contact => &["childName", "phone", "message"],
            InquiryKind::Admission => &["studentName", "admissionClass", "dob", "phone"],
        }
    }

    pub fn required_message(&self) -> &'static str {
        match self {
            InquiryKind::Contact => "childName, phone and message required!",
            InquiryKind::Admission => "studentName, admissionClass, dob, phone required!",
        }
    }

    pub fn success_message(&self) -> &'static str {
        match self {
            InquiryKind::Contact => "✅ Contact inquiry email sent successfully!",
            InquiryKind::Admission => "✅ Admission inquiry email sent successfully!",
        }
    }

    pub fn failure_message(&self) -> &'static str {
        match self {
            InquiryKind::Contact => "❌ Failed to send contact inquiry email",
            InquiryKind::Admission => "❌ Failed to send admission inquiry email",
        }
    }
}

impl std::fmt::Display for InquiryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InquiryKind::Contact => write!(f, "contact"),
            InquiryKind::Admission => write!(f, "admission"),
        }
    }
}

/// A contact form submission with every required field present.
#[derive(Debug, Clone, PartialEq)]
pub struct ContactInquiry {
    pub child_name: String,
    pub phone: String,
    pub admission_class: Option<String>,
    pub message: String,
}

impl ContactInquiry {
    pub fn subject(&self) -> String {
        format!("📩 New Contact Inquiry: {}", self.child_name)
    }
}

/// An admission form submission with every required field present.
#[derive(Debug, Clone, PartialEq)]
pub struct AdmissionInquiry {
    pub student_name: String,
    pub admission_class: String,
    pub dob: String,
    pub phone: String,
    pub last_school: Option<String>,
    pub address: Option<String>,
}

impl AdmissionInquiry {
    pub fn subject(&self) -> String {
        format!(
            "🎓 New Admission Inquiry: {} ({})",
            self.student_name, self.admission_class
        )
    }
}
