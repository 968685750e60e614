/// Session status of a user.
///
/// At most one user is `Online` at any time: the most recently
/// authenticated one. Every login attempt clears all online flags
/// before credentials are even checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserStatus {
    Online,
    Offline,
}

impl UserStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Online => "ONLINE",
            Self::Offline => "OFFLINE",
        }
    }
}

/// User model
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct User {
    pub id: i32,
    pub username: String,
    /// Display name. Also plays the password role at login.
    pub name: String,
    /// Opaque bearer token, regenerated on creation and on every
    /// successful login. Not unique across users, never expires.
    pub token: String,
    pub status: UserStatus,
    /// Formatted `dd/MM/yyyy HH:mm:ss`, set once at creation.
    pub creation_date: String,
    pub birthday: Option<String>,
}

/// A user record ready for insertion, before the store assigns an id.
#[derive(Clone, Debug)]
pub struct NewUser {
    pub username: String,
    pub name: String,
    pub token: String,
    pub status: UserStatus,
    pub creation_date: String,
    pub birthday: Option<String>,
}
