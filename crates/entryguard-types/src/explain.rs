//! Explain registry for admission rules and reason codes.
//!
//! Maps rule IDs and codes to human-readable explanations with guidance for the traveler record.

use crate::ids;

/// Explanation entry for a rule or code.
#[derive(Debug, Clone)]
pub struct Explanation {
    /// Short description of the rule/code.
    pub title: &'static str,
    /// What the rule checks and which decision it produces.
    pub description: &'static str,
    /// What has to change in the record for the rule to stop firing.
    pub remediation: &'static str,
    /// Before/after record examples.
    pub examples: ExamplePair,
}

/// Before and after record examples.
#[derive(Debug, Clone)]
pub struct ExamplePair {
    /// Record fragment that fires the rule.
    pub before: &'static str,
    /// Record fragment that does not.
    pub after: &'static str,
}

/// Look up an explanation by rule_id or code.
///
/// Returns `None` if the identifier is not recognized.
pub fn lookup_explanation(identifier: &str) -> Option<Explanation> {
    match identifier {
        // Rule IDs
        ids::RULE_MEDICAL_ADVISORY => Some(explain_medical_advisory()),
        ids::RULE_RECORD_FORMAT => Some(explain_record_format()),
        ids::RULE_VISITOR_VISA => Some(explain_visitor_visa()),
        ids::RULE_TRANSIT_VISA => Some(explain_transit_visa()),
        ids::RULE_WATCHLIST => Some(explain_watchlist()),

        // Codes
        ids::CODE_ORIGIN_MEDICAL_ADVISORY | ids::CODE_TRANSIT_MEDICAL_ADVISORY => {
            Some(explain_medical_advisory())
        }
        ids::CODE_INCOMPLETE_RECORD => Some(explain_incomplete_record()),
        ids::CODE_INVALID_PASSPORT => Some(explain_invalid_passport()),
        ids::CODE_INVALID_BIRTH_DATE | ids::CODE_INVALID_VISA_DATE => {
            Some(explain_invalid_date())
        }
        ids::CODE_VISITOR_VISA_MISSING | ids::CODE_VISITOR_VISA_INVALID => {
            Some(explain_visitor_visa())
        }
        ids::CODE_TRANSIT_VISA_MISSING | ids::CODE_TRANSIT_VISA_INVALID => {
            Some(explain_transit_visa())
        }
        ids::CODE_WATCHLIST_NAME => Some(explain_watchlist_name()),
        ids::CODE_WATCHLIST_PASSPORT => Some(explain_watchlist()),

        _ => None,
    }
}

/// List all known rule IDs.
pub fn all_rule_ids() -> &'static [&'static str] {
    &[
        ids::RULE_MEDICAL_ADVISORY,
        ids::RULE_RECORD_FORMAT,
        ids::RULE_VISITOR_VISA,
        ids::RULE_TRANSIT_VISA,
        ids::RULE_WATCHLIST,
    ]
}

/// List all known codes.
pub fn all_codes() -> &'static [&'static str] {
    &[
        ids::CODE_ORIGIN_MEDICAL_ADVISORY,
        ids::CODE_TRANSIT_MEDICAL_ADVISORY,
        ids::CODE_INCOMPLETE_RECORD,
        ids::CODE_INVALID_PASSPORT,
        ids::CODE_INVALID_BIRTH_DATE,
        ids::CODE_INVALID_VISA_DATE,
        ids::CODE_VISITOR_VISA_MISSING,
        ids::CODE_VISITOR_VISA_INVALID,
        ids::CODE_TRANSIT_VISA_MISSING,
        ids::CODE_TRANSIT_VISA_INVALID,
        ids::CODE_WATCHLIST_NAME,
        ids::CODE_WATCHLIST_PASSPORT,
    ]
}

// --- Rule-level explanations ---

fn explain_medical_advisory() -> Explanation {
    Explanation {
        title: "Medical Advisory",
        description: "\
Quarantines travelers who come from, or travel via, a country that currently has a
medical advisory in the country policy table.

Both the origin (`from`) and the transit (`via`) country are checked. A record with no
transit country is only checked against its origin.

Decision: Quarantine. This outranks every other outcome, including Reject.",
        remediation: "\
Nothing in the record can clear this rule: it follows the country policy table.
The advisory must be lifted for the country before the traveler can be admitted.",
        examples: ExamplePair {
            before: r#"{ "from": { "country": "LUG" }, "entry_reason": "returning" }
// LUG has "medical_advisory": "CHOLERA""#,
            after: r#"{ "from": { "country": "ALB" }, "entry_reason": "returning" }
// ALB has "medical_advisory": """#,
        },
    }
}

fn explain_record_format() -> Explanation {
    Explanation {
        title: "Record Completeness and Format",
        description: "\
Rejects records that are incomplete or carry malformed identity data.

The rule fires when any of these hold:
- a required field is absent: first_name, last_name, from, entry_reason, passport,
  birth_date, home
- the passport number is not five groups of five letters or digits joined by dashes
- the birth date is not a real calendar date written as YYYY-MM-DD
- a visa is present and its date is not a real calendar date written as YYYY-MM-DD

Decision: Reject.",
        remediation: "\
Supply every required field and correct the passport or date formatting.
A missing visa is not a format problem; see admission.visitor_visa and
admission.transit_visa for when a visa is required.",
        examples: ExamplePair {
            before: r#"{ "passport": "6P294-42HR2-95PSF-93NFF", "birth_date": "1952-13-04" }"#,
            after: r#"{ "passport": "6P294-42HR2-95PSF-93NFF-2G8P1", "birth_date": "1952-12-04" }"#,
        },
    }
}

fn explain_visitor_visa() -> Explanation {
    Explanation {
        title: "Visitor Visa Required",
        description: "\
Rejects travelers whose entry reason is `visit` (any case) when their origin country
requires a visitor visa and the record holds no valid visa.

A visa is valid when its date is a well-formed calendar date and it was issued fewer
than the configured number of days (730 by default) before the evaluation date. A visa
exactly 730 days old is already expired.

Decision: Reject.",
        remediation: "\
Attach a visa issued within the validity window, or correct the entry reason if the
traveler is not visiting.",
        examples: ExamplePair {
            before: r#"{ "entry_reason": "visit", "from": { "country": "BRD" } }"#,
            after: r#"{ "entry_reason": "visit", "from": { "country": "BRD" },
  "visa": { "date": "2025-11-01", "code": "CFR6X-XSMVA" } }"#,
        },
    }
}

fn explain_transit_visa() -> Explanation {
    Explanation {
        title: "Transit Visa Required",
        description: "\
Rejects travelers whose entry reason is `transit` (any case) when their origin country
requires a transit visa and the record holds no valid visa.

Visa validity follows the same window as admission.visitor_visa.

Decision: Reject.",
        remediation: "\
Attach a visa issued within the validity window, or correct the entry reason if the
traveler is not transiting.",
        examples: ExamplePair {
            before: r#"{ "entry_reason": "transit", "from": { "country": "KRA" },
  "visa": { "date": "2020-01-05", "code": "GFRE4-ZFBB5" } }"#,
            after: r#"{ "entry_reason": "transit", "from": { "country": "KRA" },
  "visa": { "date": "2026-01-05", "code": "GFRE4-ZFBB5" } }"#,
        },
    }
}

fn explain_watchlist() -> Explanation {
    Explanation {
        title: "Watchlist",
        description: "\
Sends travelers to secondary screening when their passport number, or their first and
last name, appears on the watchlist. Matching ignores case.

Decision: Secondary. Quarantine and Reject both outrank it.",
        remediation: "\
Secondary screening is an officer decision; the record is not at fault. If the match
is a false positive, update the watchlist.",
        examples: ExamplePair {
            before: r#"{ "passport": "zz4uf-6xd3r-h8f7m-j6xzj-vdkcw" }
// watchlist: { "passport": "ZZ4UF-6XD3R-H8F7M-J6XZJ-VDKCW" }"#,
            after: r#"{ "passport": "6P294-42HR2-95PSF-93NFF-2G8P1" }"#,
        },
    }
}

// --- Code-level explanations ---

fn explain_incomplete_record() -> Explanation {
    let mut exp = explain_record_format();
    exp.title = "Incomplete Record";
    exp
}

fn explain_invalid_passport() -> Explanation {
    let mut exp = explain_record_format();
    exp.title = "Invalid Passport Number";
    exp
}

fn explain_invalid_date() -> Explanation {
    let mut exp = explain_record_format();
    exp.title = "Invalid Date";
    exp
}

fn explain_watchlist_name() -> Explanation {
    Explanation {
        title: "Watchlist Name Match",
        description: "\
The traveler's first name appears among the watchlist first names and their last
name appears among the watchlist last names.

Under the default `any_entry` name matching, the two names may come from different
watchlist entries. The `strict` profile (`name_match = \"same_entry\"`) only matches
when a single entry carries both names.

Decision: Secondary.",
        remediation: "\
Secondary screening is an officer decision. To stop cross-entry matches, select
`name_match = \"same_entry\"` in entryguard.toml.",
        examples: ExamplePair {
            before: r#"{ "first_name": "Bob", "last_name": "Smith" }
// watchlist: [{ "first_name": "Bob", "last_name": "Jones" },
//             { "first_name": "Ann", "last_name": "Smith" }]"#,
            after: r#"# entryguard.toml
name_match = "same_entry""#,
        },
    }
}
