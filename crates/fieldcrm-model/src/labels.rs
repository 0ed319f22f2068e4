//! Label dictionaries: enum code <-> localized display label.
//!
//! ## Forward lookup
//!
//! [`translate_or_fallback`] never fails. An empty code renders as
//! [`NO_VALUE`]; a code the dictionary does not know is returned unchanged so
//! values added on the server side still display.
//!
//! ## Reverse lookup
//!
//! The label -> code direction is always derived from the forward entries via
//! [`build_reverse_map`]; it is never maintained by hand.
//!
//! ## Example
//!
//! ```text
//! object-status:  NEW -> "Новый", DONE -> "Завершён"
//! reverse:        "новый" -> NEW,   "завершён" -> DONE
//! ```

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::enums::DictionaryKind;
use crate::lookup::ReverseLabelMap;

/// Placeholder rendered for a missing code.
pub const NO_VALUE: &str = "-";

/// One code with its display label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelEntry {
    pub code: String,
    pub label: String,
}

/// Ordered code -> label table for one enumeration.
#[derive(Debug, Clone)]
pub struct LabelDictionary {
    pub kind: DictionaryKind,
    entries: Vec<LabelEntry>,
    index: HashMap<String, usize>,
}

impl LabelDictionary {
    /// Create an empty dictionary.
    pub fn new(kind: DictionaryKind) -> Self {
        Self {
            kind,
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Create a dictionary from `(code, label)` pairs, keeping their order.
    pub fn from_pairs<I, C, L>(kind: DictionaryKind, pairs: I) -> Self
    where
        I: IntoIterator<Item = (C, L)>,
        C: Into<String>,
        L: Into<String>,
    {
        let mut dictionary = Self::new(kind);
        for (code, label) in pairs {
            dictionary.insert(code, label);
        }
        dictionary
    }

    /// Add an entry. Re-inserting a code replaces its label, so every code
    /// keeps exactly one label.
    pub fn insert(&mut self, code: impl Into<String>, label: impl Into<String>) {
        let code = code.into();
        let label = label.into();
        if let Some(&idx) = self.index.get(&code) {
            self.entries[idx].label = label;
            return;
        }
        self.index.insert(code.clone(), self.entries.len());
        self.entries.push(LabelEntry { code, label });
    }

    /// Label for an exact code.
    pub fn label(&self, code: &str) -> Option<&str> {
        self.index
            .get(code)
            .map(|&idx| self.entries[idx].label.as_str())
    }

    pub fn entries(&self) -> &[LabelEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Display text for a possibly missing code.
    pub fn translate_or_fallback<'a>(&'a self, code: Option<&'a str>) -> &'a str {
        translate_or_fallback(self, code)
    }

    /// Derive the case-insensitive label -> code map.
    pub fn reverse_map(&self) -> ReverseLabelMap {
        build_reverse_map(self)
    }

    /// Object types with their Russian labels.
    pub fn object_types() -> Self {
        Self::from_pairs(
            DictionaryKind::ObjectType,
            [
                ("MKD", "МКД"),
                ("BUSINESS_CENTER", "Бизнес-центр"),
                ("SHOPPING_CENTER", "ТЦ"),
                ("SCHOOL", "Школа"),
                ("HOSPITAL", "Больница"),
                ("HOTEL", "Отель"),
                ("CAFE", "Кафе"),
                ("OTHER", "Другое"),
            ],
        )
    }

    /// Object statuses with their Russian labels.
    pub fn object_statuses() -> Self {
        Self::from_pairs(
            DictionaryKind::ObjectStatus,
            [
                ("NEW", "Новый"),
                ("INTEREST", "В работе"),
                ("CALLBACK", "Ожидание"),
                ("DONE", "Завершён"),
                ("REJECTED", "Отказ"),
            ],
        )
    }

    /// Visit statuses with their Russian labels.
    pub fn visit_statuses() -> Self {
        Self::from_pairs(
            DictionaryKind::VisitStatus,
            [
                ("PLANNED", "Запланирован"),
                ("IN_PROGRESS", "В процессе"),
                ("DONE", "Завершён"),
                ("CANCELLED", "Отменён"),
            ],
        )
    }

    /// Customer interest tags with their Russian labels.
    pub fn interests() -> Self {
        Self::from_pairs(
            DictionaryKind::Interest,
            [
                ("INTERNET", "Интернет"),
                ("TV", "ТВ"),
                ("CCTV", "Видеонаблюдение"),
                ("BABY_MONITOR", "Интернет-няня"),
                ("OTHER", "Другое"),
            ],
        )
    }

    /// User roles with their Russian labels.
    pub fn roles() -> Self {
        Self::from_pairs(
            DictionaryKind::Role,
            [
                ("ADMIN", "Администратор"),
                ("SUPERVISOR", "Супервайзер"),
                ("ENGINEER", "Инженер"),
            ],
        )
    }

    /// The built-in dictionary for a kind.
    pub fn standard(kind: DictionaryKind) -> Self {
        match kind {
            DictionaryKind::ObjectType => Self::object_types(),
            DictionaryKind::ObjectStatus => Self::object_statuses(),
            DictionaryKind::VisitStatus => Self::visit_statuses(),
            DictionaryKind::Interest => Self::interests(),
            DictionaryKind::Role => Self::roles(),
        }
    }
}

/// Returns the label for `code`, [`NO_VALUE`] for a missing or empty code,
/// or the code itself when the dictionary does not know it.
pub fn translate_or_fallback<'a>(dictionary: &'a LabelDictionary, code: Option<&'a str>) -> &'a str {
    match code {
        None | Some("") => NO_VALUE,
        Some(code) => dictionary.label(code).unwrap_or(code),
    }
}

/// Builds the lowercased label -> code map for import.
pub fn build_reverse_map(dictionary: &LabelDictionary) -> ReverseLabelMap {
    ReverseLabelMap::new(
        dictionary
            .entries
            .iter()
            .map(|entry| (entry.code.as_str(), entry.label.as_str())),
    )
}

/// All dictionaries the application works with, keyed by kind.
///
/// Built once at start-up and passed by reference.
#[derive(Debug, Clone, Default)]
pub struct LabelCatalog {
    dictionaries: BTreeMap<DictionaryKind, LabelDictionary>,
}

impl LabelCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog with every built-in dictionary.
    pub fn standard() -> Self {
        let mut catalog = Self::new();
        for kind in DictionaryKind::ALL {
            catalog.add(LabelDictionary::standard(kind));
        }
        catalog
    }

    /// Add or replace the dictionary for its kind.
    pub fn add(&mut self, dictionary: LabelDictionary) {
        self.dictionaries.insert(dictionary.kind, dictionary);
    }

    pub fn get(&self, kind: DictionaryKind) -> Option<&LabelDictionary> {
        self.dictionaries.get(&kind)
    }

    pub fn dictionaries(&self) -> impl Iterator<Item = &LabelDictionary> {
        self.dictionaries.values()
    }

    /// Translate a code of the given kind. Missing dictionaries behave like
    /// empty ones.
    pub fn translate<'a>(&'a self, kind: DictionaryKind, code: Option<&'a str>) -> &'a str {
        match self.get(kind) {
            Some(dictionary) => translate_or_fallback(dictionary, code),
            None => match code {
                None | Some("") => NO_VALUE,
                Some(code) => code,
            },
        }
    }

    /// Reverse map for a kind; empty when the catalog has no such dictionary.
    pub fn reverse_map(&self, kind: DictionaryKind) -> ReverseLabelMap {
        self.get(kind).map(build_reverse_map).unwrap_or_default()
    }
}
