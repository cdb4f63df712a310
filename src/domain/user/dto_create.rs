use chrono::NaiveDate;

#[derive(Debug, Clone)]
pub struct CreateUserDto {
    pub dni: String,
    pub email: String,
    pub name: String,
    pub last_name: String,
    /// Raw gender value; validated by the service
    pub gender: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub role_id: String,
}
