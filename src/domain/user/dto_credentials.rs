#[derive(Debug, Clone)]
pub struct UpdatePasswordDto {
    /// Current password
    pub password: String,
    pub new_password: String,
    pub new_password_confirm: String,
}

#[derive(Debug, Clone)]
pub struct UpdateEmailDto {
    /// Current password
    pub password: String,
    pub new_email: String,
}
