pub mod access;
pub mod badge;
pub mod enums;
pub mod error;
pub mod labels;
pub mod lookup;
pub mod object;
pub mod phone;

pub use access::{RouteDecision, check_role, guard_route, home_for};
pub use badge::{BadgeTone, object_status_badge};
pub use enums::{DictionaryKind, UserRole};
pub use error::{ModelError, Result};
pub use labels::{
    LabelCatalog, LabelDictionary, LabelEntry, NO_VALUE, build_reverse_map, translate_or_fallback,
};
pub use lookup::ReverseLabelMap;
pub use object::{DEFAULT_OBJECT_STATUS, NamedRef, ObjectCreatePayload, PageResponse, SiteObject};
pub use phone::{is_valid_phone, normalize_phone};
