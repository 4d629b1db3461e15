//! # VIKAS Service Catalogue
//!
//! File: cli/src/assistant/catalogue.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! The fixed, ordered list of service guides the assistant knows about, plus the
//! shared strings every reply draws from (default topics, default reassurance and
//! the closing line).
//!
//! ## Match Priority
//!
//! The order of [`SERVICE_GUIDES`] **is** the match priority. The intent matcher
//! scans it front to back and stops at the first guide with a keyword hit, so a
//! message mentioning both "pension" and "bank" is always answered as `pension`.
//! Guides are never re-ranked by specificity or score; reordering this slice
//! changes observable behaviour.
//!
//! Everything here is `'static` and immutable, so any number of sessions can read
//! it concurrently without synchronisation.
//!
use serde::Serialize;

/// Fixed multilingual thank-you line that ends every reply.
pub const CLOSING_LINE: &str =
    "धन्यवाद! 🙏 Aapka apna VIKAS CSC – Vikas ke sath aapke vikas ki baat.";

/// Reassurance used when a guide does not carry its own.
pub const DEFAULT_REASSURANCE: &str =
    "Aap har kadam par hamare with trained digital seva expert ke saath rahenge.";

/// Topics that seed every suggestion line, in display order.
pub const DEFAULT_SUGGESTIONS: &[&str] = &[
    "Pension / Life Certificate (DLC, Sparsh)",
    "Samman / Sambhal Card",
    "Banking, Aadhaar, PAN, Passport Services",
    "PM Schemes, Bill Payment, Recharge",
];

/// # Service Guide (`ServiceGuide`)
///
/// One catalogue entry: the keywords that select it, the numbered steps shown to
/// the user, related topics and an optional reassurance line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceGuide {
    /// Unique symbolic identifier, e.g. `"pension"`.
    pub id: &'static str,
    /// Lowercase substrings; any one contained in the lowercased message selects this guide.
    pub keywords: &'static [&'static str],
    /// Ordered instructions, rendered as `1.`, `2.`, ...
    pub steps: &'static [&'static str],
    /// Related topic labels offered as suggestions.
    pub suggestions: &'static [&'static str],
    /// Guide-specific reassurance. `None` falls back to [`DEFAULT_REASSURANCE`].
    pub reassurance: Option<&'static str>,
}

impl ServiceGuide {
    /// Reassurance line to render for this guide, substituting the default when absent.
    pub fn reassurance(&self) -> &'static str {
        self.reassurance.unwrap_or(DEFAULT_REASSURANCE)
    }

    /// Returns the first of this guide's keywords contained in `lowered`.
    ///
    /// `lowered` must already be lowercase. Containment is a plain substring test,
    /// not a word match: "pan" is found inside "pandemic".
    pub fn matched_keyword(&self, lowered: &str) -> Option<&'static str> {
        self.keywords
            .iter()
            .copied()
            .find(|keyword| lowered.contains(keyword))
    }
}

/// The catalogue, in match-priority order.
pub static SERVICE_GUIDES: &[ServiceGuide] = &[
    ServiceGuide {
        id: "pension",
        keywords: &["pension", "life certificate", "dlc", "sparsh", "jeevan pramaan"],
        steps: &[
            "Apni PPO number, Aadhaar card, bank passbook aur recent passport size photo ready rakhiye.",
            "VIKAS CSC par biometric device se Digital Life Certificate banwayen ya Sparsh portal ke liye appointment fix karein.",
            "Certificate generate hone ke baad receipt save karke apne pension record me update confirm kijiye.",
        ],
        suggestions: &[
            "Pension / Life Certificate (DLC, Sparsh)",
            "Doorstep Biometric Seva",
            "Banking aur Passbook Update Assistance",
        ],
        reassurance: Some(
            "Senior citizens aur veterans ke liye hum priority slot rakhte hain, isliye bina jhijhak bataye.",
        ),
    },
    ServiceGuide {
        id: "samman",
        keywords: &["samman card", "sambhal card", "samman", "sambhal"],
        steps: &[
            "Aapke rajya ke portal ke hisaab se required documents jaise Aadhaar, address proof, aur photo ready rakhiye.",
            "VIKAS CSC se online form fill karwayen aur biometric/OTP verification complete kijiye.",
            "Application submit hone ke baad acknowledgement slip sambhal ke rakhiye aur status track kijiye.",
        ],
        suggestions: &[
            "Samman / Sambhal Card Registration",
            "Document Scanning & Upload Seva",
            "State Welfare Scheme Guidance",
        ],
        reassurance: None,
    },
    ServiceGuide {
        id: "aadhaar",
        keywords: &[
            "aadhaar",
            "adhar",
            "aadhar",
            "pan",
            "passport",
            "update address",
            "dob",
            "name change",
        ],
        steps: &[
            "Original Aadhaar card, proof of identity, aur proof of address documents ikattha kijiye.",
            "VIKAS CSC par update appointment le kar biometric/photo capture karwayen.",
            "Update request number (URN) ko track karke status confirm kijiye.",
        ],
        suggestions: &[
            "Aadhaar Update & Enrollment",
            "PAN Application / Correction",
            "Passport Seva Booking Support",
        ],
        reassurance: None,
    },
    ServiceGuide {
        id: "banking",
        keywords: &[
            "bank",
            "account",
            "passbook",
            "cash deposit",
            "aeps",
            "withdrawal",
            "micro atm",
            "loan",
        ],
        steps: &[
            "Valid Aadhaar ya account number ke saath VIKAS CSC visit kijiye.",
            "Apni banking zaroorat bataiye, jaise cash deposit, withdrawal, balance enquiry ya loan application.",
            "Transaction receipt aur acknowledgement turant check karke safe rakhiye.",
        ],
        suggestions: &[
            "AEPS Banking & Micro ATM",
            "Savings / RD / FD Account Assistance",
            "Loan & Insurance Consultation",
        ],
        reassurance: None,
    },
    ServiceGuide {
        id: "pm-schemes",
        keywords: &[
            "pm",
            "pradhan mantri",
            "scheme",
            "yojana",
            "pmjay",
            "ayushman",
            "ujjwala",
            "pm kisan",
            "bill",
            "recharge",
            "electricity",
            "water bill",
        ],
        steps: &[
            "Scheme ya bill ka naam bataakar required documents ready kijiye.",
            "VIKAS CSC par online portal login karke form fill ya payment initiate karwayen.",
            "Submission / payment receipt ko save karke confirmation SMS check kijiye.",
        ],
        suggestions: &[
            "PM Yojana Registration & Support",
            "Utility Bill Payment",
            "Mobile / DTH Recharge",
        ],
        reassurance: None,
    },
];

/// Returns the catalogue in match-priority order.
pub fn guides() -> &'static [ServiceGuide] {
    SERVICE_GUIDES
}

/// Looks up a guide by its `id`.
pub fn find_guide(id: &str) -> Option<&'static ServiceGuide> {
    SERVICE_GUIDES.iter().find(|guide| guide.id == id)
}
