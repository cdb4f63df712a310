use chrono::NaiveDate;

/// Partial update of a user's data. `None` leaves the field untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateUserDto {
    pub dni: Option<String>,
    pub email: Option<String>,
    pub name: Option<String>,
    pub last_name: Option<String>,
    pub gender: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub role_id: Option<String>,
}
