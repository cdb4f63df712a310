use crate::shared::{validate_pagination, PaginationParams};

/// Raw list query, exactly as received. Every value is optional text so that
/// malformed input falls back to defaults instead of failing the request.
#[derive(Debug, Clone, Default)]
pub struct GetUserDto {
    pub page: Option<String>,
    pub limit: Option<String>,
    /// `"1"` selects active users, any other non-empty value inactive ones
    pub is_active: Option<String>,
    pub role: Option<String>,
    /// Free-text search
    pub s: Option<String>,
    pub order_by: Option<String>,
    pub sort: Option<String>,
}

/// Fields a user list may be ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserSortField {
    Name,
    LastName,
    Email,
    Dni,
    BirthDate,
    CreatedAt,
}

impl UserSortField {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "name" => Some(Self::Name),
            "lastName" => Some(Self::LastName),
            "email" => Some(Self::Email),
            "dni" => Some(Self::Dni),
            "birthDate" => Some(Self::BirthDate),
            "createdAt" => Some(Self::CreatedAt),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "asc" => Some(Self::Asc),
            "desc" => Some(Self::Desc),
            _ => None,
        }
    }
}

/// Normalized list filter handed to the repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserFilter {
    pub is_active: Option<bool>,
    /// Upper-cased role name; an unknown name simply matches nobody
    pub role: Option<String>,
    pub search: Option<String>,
    pub pagination: PaginationParams,
    /// `None` means newest first
    pub order: Option<(UserSortField, SortOrder)>,
}

fn non_empty(value: Option<&String>) -> Option<&str> {
    value.map(|s| s.trim()).filter(|s| !s.is_empty())
}

impl From<&GetUserDto> for UserFilter {
    fn from(dto: &GetUserDto) -> Self {
        let pagination = validate_pagination(dto.page.as_deref(), dto.limit.as_deref());

        let order = non_empty(dto.order_by.as_ref())
            .and_then(UserSortField::parse)
            .map(|field| {
                let direction = non_empty(dto.sort.as_ref())
                    .and_then(SortOrder::parse)
                    .unwrap_or_default();
                (field, direction)
            });

        Self {
            is_active: non_empty(dto.is_active.as_ref()).map(|v| v == "1"),
            role: non_empty(dto.role.as_ref()).map(str::to_uppercase),
            search: non_empty(dto.s.as_ref()).map(str::to_string),
            pagination,
            order,
        }
    }
}
