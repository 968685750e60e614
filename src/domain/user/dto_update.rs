/// Partial profile update. Absent fields are left untouched.
#[derive(Clone, Debug, Default)]
pub struct UpdateUserDto {
    pub username: Option<String>,
    pub birthday: Option<String>,
}
