/// Candidate data for registration and login.
///
/// `name` is the second credential factor; any other attribute a
/// caller supplies is ignored for security-relevant fields.
#[derive(Clone, Debug)]
pub struct CreateUserDto {
    pub username: String,
    pub name: String,
}
