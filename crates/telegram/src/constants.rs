//! Constants used throughout the telegram bot

/// Button labels
pub mod label {
    pub const JOIN_CHANNEL: &str = "Join Channel";
    pub const CHECK_MEMBERSHIP: &str = "Check Membership";
}

/// Message texts
pub mod text {
    pub const WELCOME: &str = "Welcome! Please join all the channels to get the direct video file.";
    pub const SELECT_SERIES: &str = "Select a series to view episodes:";
    pub const SELECT_EPISODE: &str = "Select an episode:";
    pub const NOT_A_MEMBER: &str = "You need to join all the channels first!";
}

/// "Not available" reply pointing at a human contact
pub fn not_available(support_contact: &str) -> String {
    format!(
        "Sorry, the requested file is not available. Kindly contact the admin {} .",
        support_contact
    )
}

/// Caption attached to a relayed episode
pub fn relay_caption(series: &str, episode: &str) -> String {
    format!("Here is {} - {}", series, episode)
}
