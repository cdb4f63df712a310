use crate::domain::SortOrder;
use crate::shared::{validate_pagination, PaginationParams};

#[derive(Debug, Clone)]
pub struct CreateClassDto {
    pub name: String,
    pub description: Option<String>,
}

/// Partial update. A blank description clears it.
#[derive(Debug, Clone, Default)]
pub struct UpdateClassDto {
    pub name: Option<String>,
    pub description: Option<String>,
}

/// Raw list query; malformed values fall back to defaults
#[derive(Debug, Clone, Default)]
pub struct GetClassDto {
    pub page: Option<String>,
    pub limit: Option<String>,
    /// Search in name and description
    pub s: Option<String>,
    pub order_by: Option<String>,
    pub sort: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassSortField {
    Name,
    CreatedAt,
}

impl ClassSortField {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "name" => Some(Self::Name),
            "createdAt" => Some(Self::CreatedAt),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassFilter {
    pub search: Option<String>,
    pub pagination: PaginationParams,
    /// `None` means newest first
    pub order: Option<(ClassSortField, SortOrder)>,
}

impl From<&GetClassDto> for ClassFilter {
    fn from(dto: &GetClassDto) -> Self {
        let trimmed = |v: &Option<String>| {
            v.as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        };

        let order = trimmed(&dto.order_by)
            .and_then(|f| ClassSortField::parse(&f))
            .map(|field| {
                let direction = trimmed(&dto.sort)
                    .and_then(|s| SortOrder::parse(&s))
                    .unwrap_or_default();
                (field, direction)
            });

        Self {
            search: trimmed(&dto.s),
            pagination: validate_pagination(dto.page.as_deref(), dto.limit.as_deref()),
            order,
        }
    }
}
