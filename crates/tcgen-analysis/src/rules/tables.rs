//! Declarative rule tables.
//!
//! Each field defaults to the built-in vocabulary, so a TOML override
//! may replace a single table and inherit the rest.

use serde::{Deserialize, Serialize};

use tcgen_core::PipelineError;

/// The complete, versioned vocabulary used by the pipeline stages.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleSet {
    /// Table version recorded for audit purposes.
    pub version: String,
    /// Modal verbs that anchor actor/action slot extraction.
    pub modal_verbs: Vec<String>,
    /// Single-token markers that open a conditional clause.
    pub conditional_markers: Vec<String>,
    /// Multi-word markers that open a trailing outcome clause.
    pub outcome_markers: Vec<String>,
    /// Articles and determiners stripped from slot heads.
    pub articles: Vec<String>,
    /// Prepositions skipped when extracting an object head.
    pub prepositions: Vec<String>,
    /// Actor tokens that mark a human-driven requirement shape.
    pub user_actor_terms: Vec<String>,
    /// Vague qualifiers flagged when no measurable quantity is nearby.
    pub vague_terms: Vec<String>,
    /// Verb lexicon for behavior extraction and compound-action splits.
    pub action_verbs: Vec<String>,
    /// Per-class keyword/pattern tables for the classifier.
    pub classification: Vec<ClassRules>,
    /// Terms that force a High priority hint.
    pub high_priority_terms: Vec<String>,
    /// Cosmetic/informational terms that allow a Low priority hint.
    pub low_priority_terms: Vec<String>,
    /// Shared contestable-resource cues (require Concurrency coverage).
    pub shared_resource_terms: Vec<String>,
    /// Explicit concurrency cues.
    pub concurrency_terms: Vec<String>,
    /// Payment/auth/credential-flow cues (require Security coverage).
    pub payment_auth_terms: Vec<String>,
    /// Regexes that detect a measurable quantity near vague wording.
    pub measurable_patterns: Vec<String>,
    /// Regexes that detect a numeric input range (require Boundary coverage).
    pub boundary_range_patterns: Vec<String>,
}

/// Keyword/pattern table for one requirement class. Keyword hits score
/// 1 each, regex pattern hits score 2 each.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassRules {
    /// Report-facing class name ("Security", "API behavior", …).
    pub class: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub patterns: Vec<String>,
}

impl RuleSet {
    /// Parse a (possibly partial) rule-table override from TOML.
    pub fn from_toml_str(s: &str) -> Result<Self, PipelineError> {
        toml::from_str(s).map_err(|e| PipelineError::RuleTable { message: e.to_string() })
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self {
            version: default_version(),
            modal_verbs: default_modal_verbs(),
            conditional_markers: default_conditional_markers(),
            outcome_markers: default_outcome_markers(),
            articles: default_articles(),
            prepositions: default_prepositions(),
            user_actor_terms: default_user_actor_terms(),
            vague_terms: default_vague_terms(),
            action_verbs: default_action_verbs(),
            classification: default_classification(),
            high_priority_terms: default_high_priority_terms(),
            low_priority_terms: default_low_priority_terms(),
            shared_resource_terms: default_shared_resource_terms(),
            concurrency_terms: default_concurrency_terms(),
            payment_auth_terms: default_payment_auth_terms(),
            measurable_patterns: default_measurable_patterns(),
            boundary_range_patterns: default_boundary_range_patterns(),
        }
    }
}

fn strs(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn default_version() -> String {
    "rules-v1".to_string()
}

fn default_modal_verbs() -> Vec<String> {
    strs(&["shall", "must", "will", "should", "may", "can"])
}

fn default_conditional_markers() -> Vec<String> {
    strs(&["when", "if", "while", "unless", "for", "during"])
}

fn default_outcome_markers() -> Vec<String> {
    strs(&["so that", "to ensure that", "to ensure", "resulting in", "in order to"])
}

fn default_articles() -> Vec<String> {
    strs(&["the", "a", "an", "all", "any", "every", "each"])
}

fn default_prepositions() -> Vec<String> {
    strs(&["with", "to", "from", "into", "in", "on", "at", "of", "by", "via", "using"])
}

fn default_user_actor_terms() -> Vec<String> {
    strs(&[
        "user", "users", "admin", "admins", "administrator", "administrators",
        "customer", "customers", "operator", "operators", "member", "members",
        "guest", "guests", "client", "clients", "visitor", "visitors",
    ])
}

fn default_vague_terms() -> Vec<String> {
    strs(&[
        "fast", "quick", "quickly", "slow", "secure", "safe", "appropriate",
        "appropriately", "reasonable", "reasonably", "user-friendly",
        "intuitive", "efficient", "efficiently", "easily", "easy", "simple",
        "robust", "flexible", "scalable", "seamless", "timely", "adequate",
        "optimal", "responsive", "reliable", "modern",
    ])
}

fn default_action_verbs() -> Vec<String> {
    strs(&[
        "login", "log", "logout", "sign", "authenticate", "authorize",
        "redirect", "create", "add", "update", "modify", "edit", "delete",
        "remove", "display", "show", "render", "list", "process", "validate",
        "verify", "sanitize", "reserve", "book", "block", "release", "send",
        "receive", "generate", "calculate", "compute", "store", "save",
        "retrieve", "fetch", "load", "submit", "cancel", "confirm", "notify",
        "alert", "encrypt", "decrypt", "record", "reject", "approve",
        "search", "filter", "sort", "export", "import", "access", "perform",
        "handle", "respond", "return", "prevent", "maintain", "support",
        "provide", "allow", "enable", "disable", "track", "monitor",
        "upload", "download", "synchronize", "sync", "backup", "restore",
        "archive", "assign", "schedule", "manage", "check", "detect",
        "parse", "convert", "transform", "route", "queue", "retry", "limit",
        "throttle",
    ])
}

fn default_classification() -> Vec<ClassRules> {
    vec![
        ClassRules {
            class: "Functional".to_string(),
            keywords: strs(&[
                "create", "creates", "add", "adds", "update", "updates",
                "edit", "delete", "deletes", "remove", "login", "log in",
                "logout", "register", "submit", "submits", "view", "display",
                "displays", "manage", "search", "upload", "download", "save",
                "process", "processes",
            ]),
            patterns: vec![],
        },
        ClassRules {
            class: "Security".to_string(),
            keywords: strs(&[
                "encrypt", "encrypts", "encrypted", "encryption", "decrypt",
                "authorize", "authorizes", "authorization", "authorized",
                "authenticate", "authenticates", "authentication", "password",
                "passwords", "token", "tokens", "credential", "credentials",
                "unauthorized", "permission", "permissions", "role", "roles",
                "access control", "secure", "security", "sensitive",
            ]),
            patterns: vec![],
        },
        ClassRules {
            class: "Performance".to_string(),
            keywords: strs(&[
                "performance", "latency", "throughput", "response time",
                "load time", "uptime",
            ]),
            patterns: strs(&[
                r"(?i)\b\d+(?:\.\d+)?\s*(?:ms|milliseconds?|seconds?|secs?|minutes?|mins?|hours?)\b",
                r"(?i)\bwithin\s+\d+",
            ]),
        },
        ClassRules {
            class: "Validation".to_string(),
            keywords: strs(&[
                "validate", "validates", "validated", "validation",
                "sanitize", "sanitizes", "sanitized", "format", "length",
                "range", "input", "inputs", "required field", "mandatory",
                "invalid", "reject", "rejects",
            ]),
            patterns: vec![],
        },
        ClassRules {
            class: "API behavior".to_string(),
            keywords: strs(&[
                "endpoint", "endpoints", "api", "rest", "http", "request",
                "requests", "response", "responses", "status code", "payload",
                "header", "headers", "json",
            ]),
            patterns: strs(&[r"\b(?:GET|POST|PUT|PATCH|DELETE)\s+/\S*"]),
        },
        ClassRules {
            class: "Concurrency".to_string(),
            keywords: strs(&[
                "concurrent", "concurrently", "concurrency", "simultaneous",
                "simultaneously", "parallel", "race condition", "deadlock",
                "lock", "locking", "mutex", "thread", "threads",
                "at the same time", "multiple users", "contention",
            ]),
            patterns: vec![],
        },
        ClassRules {
            class: "NFR".to_string(),
            keywords: strs(&[
                "uptime", "availability", "available", "reliability",
                "maintainability", "portability", "compliance", "compliant",
                "disaster recovery", "recover", "recovery", "backup",
                "retention", "sla",
            ]),
            patterns: strs(&[r"(?i)\b\d+(?:\.\d+)?\s*%"]),
        },
        ClassRules {
            class: "Usability".to_string(),
            keywords: strs(&[
                "usability", "user interface", "ui", "layout", "navigation",
                "accessible", "accessibility", "readable", "tooltip", "label",
                "labels", "color", "colors", "font", "fonts", "icon", "icons",
                "cosmetic", "styling", "theme",
            ]),
            patterns: vec![],
        },
        ClassRules {
            class: "Data integrity".to_string(),
            keywords: strs(&[
                "data loss", "data integrity", "integrity", "consistency",
                "consistent", "transaction", "transactions", "rollback",
                "atomic", "durable", "corruption", "irreversible",
                "permanently", "archival", "audit log",
            ]),
            patterns: vec![],
        },
    ]
}

fn default_high_priority_terms() -> Vec<String> {
    strs(&[
        "unauthorized", "breach", "data loss", "irreversible", "irreversibly",
        "permanently delete", "permanent deletion", "cannot be undone",
        "payment", "payments", "credit card", "refund", "compliance",
        "critical", "corruption",
    ])
}

fn default_low_priority_terms() -> Vec<String> {
    strs(&[
        "cosmetic", "informational", "tooltip", "hint text", "caption",
        "styling", "font", "color scheme", "label text", "nice to have",
        "optional",
    ])
}

fn default_shared_resource_terms() -> Vec<String> {
    strs(&[
        "reserve", "reserves", "reservation", "reservations", "slot",
        "slots", "seat", "seats", "booking", "bookings", "book", "ticket",
        "tickets", "inventory", "stock", "appointment", "appointments",
        "quota",
    ])
}

fn default_concurrency_terms() -> Vec<String> {
    strs(&[
        "concurrent", "concurrently", "concurrency", "simultaneous",
        "simultaneously", "parallel", "race condition", "multiple users",
        "at the same time", "contention",
    ])
}

fn default_payment_auth_terms() -> Vec<String> {
    strs(&[
        "payment", "payments", "credit card", "debit card", "card number",
        "checkout", "billing", "transaction", "transactions",
        "authenticate", "authentication", "authorization", "login",
        "log in", "password", "passwords", "credential", "credentials",
        "token", "tokens",
    ])
}

fn default_measurable_patterns() -> Vec<String> {
    strs(&[
        r"\d",
        r"(?i)\b(?:ms|milliseconds?|seconds?|minutes?|hours?|days?)\b",
        r"(?i)\b(?:kb|mb|gb|tb|bytes?|percent)\b|%",
    ])
}

fn default_boundary_range_patterns() -> Vec<String> {
    strs(&[
        r"(?i)\bbetween\s+\d+(?:\.\d+)?\s+and\s+\d+(?:\.\d+)?",
        r"(?i)\b(?:at\s+least|at\s+most|minimum|maximum|no\s+more\s+than|no\s+fewer\s+than|up\s+to|exceeds?|limit\s+of)\b[^.]*\d",
        r"[<>]=?\s*\d",
        r"(?i)\b\d+\s*(?:characters?|digits?|items?|attempts?|retries|entries|records|files)\b",
    ])
}
