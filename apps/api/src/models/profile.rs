use serde::{Deserialize, Serialize};

/// Identity fields attached to a rendered resume. Every field is optional;
/// absent fields are simply not drawn.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserProfile {
    pub full_name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub location: Option<String>,
    pub linkedin: Option<String>,
    pub portfolio: Option<String>,
}
