//! DTOs for companies_sea adapter.

/// DTO for inserting a company row.
#[derive(Debug, Clone)]
pub struct CompanyCreate {
    pub code: String,
    pub name: String,
    pub description: Option<String>,
}

impl CompanyCreate {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }
}

/// DTO for replacing a company's mutable fields.
#[derive(Debug, Clone)]
pub struct CompanyUpdate {
    pub name: String,
    pub description: Option<String>,
}
