//! Well-known service type names.
//!
//! Service types are free text chosen by the volunteer when they publish
//! their offerings; the backend does not maintain a closed catalog. The one
//! name the matcher treats specially is listed here so the rule is not an
//! inline string literal.

/// The service type consulted by the emergency-availability rule.
///
/// A volunteer who has published `Hospital Visit` with `is_available = false`
/// is excluded from emergency matches, whatever their other offerings say.
pub const HOSPITAL_VISIT: &str = "Hospital Visit";
