//! Admin Commands for Contact Info
//!
//! Single-record get/save for the contact page details.

use crate::domain::ContactInfo;
use crate::AppState;

/// Read the contact info, if it was ever saved
pub async fn get_contact(state: &AppState) -> Result<Option<ContactInfo>, String> {
    state.contact.load().await.map_err(|e| e.to_string())
}

/// Save the contact info, creating or replacing the single record
pub async fn save_contact(
    state: &AppState,
    email: String,
    phone: Option<String>,
    location: Option<String>,
) -> Result<ContactInfo, String> {
    let mut info = ContactInfo::new(1, email);
    info.phone = phone;
    info.location = location;

    state.contact.save(&info).await.map_err(|e| e.to_string())
}
