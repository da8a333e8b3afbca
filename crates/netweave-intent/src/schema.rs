//! The schema model: the single definition of valid configuration shape.
//!
//! Wire documents are rooted at a `campus-network` container in a fixed
//! namespace, holding zero or more `vlan` elements with exactly three
//! children: `id` (integer in [`VlanId::MIN`]..=[`VlanId::MAX`]), `name`,
//! and `policy` (one of [`Policy::ALL`]). Both the renderer and the parser
//! in [`crate::xml`] are written against these constants, so the document
//! is schema-valid at every boundary.
//!
//! [`VlanId::MIN`]: netweave_types::VlanId::MIN
//! [`VlanId::MAX`]: netweave_types::VlanId::MAX
//! [`Policy::ALL`]: netweave_types::Policy::ALL

/// Fixed namespace of the configuration container.
pub const NAMESPACE: &str = "urn:example:campus-lan";

/// Root container element.
pub const CONTAINER_ELEMENT: &str = "campus-network";

/// Per-segment element.
pub const SEGMENT_ELEMENT: &str = "vlan";

/// Segment identifier child element.
pub const ID_ELEMENT: &str = "id";

/// Segment name child element.
pub const NAME_ELEMENT: &str = "name";

/// Segment policy child element.
pub const POLICY_ELEMENT: &str = "policy";
