use crate::domain::catalog::entity::{CatalogEntity, EntityId, EntityKind};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Provider {
    pub id: EntityId,
    pub name: String,
    pub phone: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProviderProps {
    pub name: String,
    pub phone: String,
    pub email: String,
}

impl NewProviderProps {
    /// Provider fields are free text; the only normalisation is trimming.
    pub fn new(name: &str, phone: &str, email: &str) -> Self {
        Self {
            name: name.trim().to_string(),
            phone: phone.trim().to_string(),
            email: email.trim().to_string(),
        }
    }
}

impl Provider {
    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(id: EntityId, name: String, phone: String, email: String) -> Self {
        Self {
            id,
            name,
            phone,
            email,
        }
    }
}

impl CatalogEntity for Provider {
    const KIND: EntityKind = EntityKind::Provider;

    type Draft = NewProviderProps;

    fn id(&self) -> EntityId {
        self.id
    }

    fn from_draft(id: EntityId, draft: NewProviderProps) -> Self {
        Self {
            id,
            name: draft.name,
            phone: draft.phone,
            email: draft.email,
        }
    }

    fn seed() -> Vec<Self> {
        vec![
            Provider::from_repository(
                1,
                "Tech Solutions Ltd".to_string(),
                "+84 901 234 567".to_string(),
                "contact@techsolutions.com".to_string(),
            ),
            Provider::from_repository(
                2,
                "Global Logistics Co".to_string(),
                "+84 902 345 678".to_string(),
                "info@globallogistics.com".to_string(),
            ),
            Provider::from_repository(
                3,
                "Green Energy Corp".to_string(),
                "+84 903 456 789".to_string(),
                "hello@greenenergy.com".to_string(),
            ),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_trim_every_field() {
        let props = NewProviderProps::new("  Acme ", " +84 1 ", "  a@b.c");
        assert_eq!(props.name, "Acme");
        assert_eq!(props.phone, "+84 1");
        assert_eq!(props.email, "a@b.c");
    }

    #[test]
    fn should_seed_three_providers() {
        let names: Vec<String> = Provider::seed().into_iter().map(|p| p.name).collect();
        assert_eq!(
            names,
            vec!["Tech Solutions Ltd", "Global Logistics Co", "Green Energy Corp"]
        );
    }
}
