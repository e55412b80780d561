//! Facade: one product lookup call hides the user, availability and product services.

use crate::domain::model::DemoKind;
use crate::domain::ports::Demo;
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::sync::OnceLock;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub name: String,
    pub price: u32,
}

fn all_items() -> &'static [Item] {
    static ITEMS: OnceLock<Vec<Item>> = OnceLock::new();
    ITEMS.get_or_init(|| {
        [("printer", 350), ("tablet", 1100), ("router", 720)]
            .into_iter()
            .map(|(name, price)| Item {
                name: name.to_string(),
                price,
            })
            .collect()
    })
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Anonymous,
    Customer,
    #[default]
    Admin,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("User is not authenticated")]
    Unauthenticated,

    #[error("User role {role:?} is not authorised to look up items")]
    Unauthorized { role: UserRole },

    #[error("Item '{name}' not found")]
    ItemNotFound { name: String },
}

pub trait UserDirectory {
    fn current_role(&self) -> UserRole;
    fn is_authorized(&self, role: UserRole) -> bool;
}

pub trait Availability {
    fn is_available(&self, item_name: &str) -> bool;
}

pub trait Catalog {
    fn item_by_name(&self, name: &str) -> Option<Item>;
}

pub struct UserService {
    role: UserRole,
}

impl UserService {
    pub fn new(role: UserRole) -> Self {
        Self { role }
    }
}

impl UserDirectory for UserService {
    fn current_role(&self) -> UserRole {
        self.role
    }

    fn is_authorized(&self, role: UserRole) -> bool {
        role == UserRole::Admin
    }
}

pub struct AvailabilityService;

impl Availability for AvailabilityService {
    fn is_available(&self, item_name: &str) -> bool {
        all_items().iter().any(|item| item.name == item_name)
    }
}

pub struct ProductService;

impl Catalog for ProductService {
    fn item_by_name(&self, name: &str) -> Option<Item> {
        all_items().iter().find(|item| item.name == name).cloned()
    }
}

pub struct ProductFacade<U, A, C> {
    users: U,
    availability: A,
    catalog: C,
}

impl<U: UserDirectory, A: Availability, C: Catalog> ProductFacade<U, A, C> {
    pub fn new(users: U, availability: A, catalog: C) -> Self {
        Self {
            users,
            availability,
            catalog,
        }
    }

    /// Checks authentication, then authorisation, then availability, in that order.
    pub fn try_get_item(&self, item_name: &str) -> std::result::Result<Item, LookupError> {
        let role = self.users.current_role();
        if role == UserRole::Anonymous {
            return Err(LookupError::Unauthenticated);
        }

        if !self.users.is_authorized(role) {
            return Err(LookupError::Unauthorized { role });
        }

        let not_found = || LookupError::ItemNotFound {
            name: item_name.to_string(),
        };
        if !self.availability.is_available(item_name) {
            return Err(not_found());
        }

        self.catalog.item_by_name(item_name).ok_or_else(not_found)
    }
}

pub struct Executor {
    role: UserRole,
    item: String,
}

impl Executor {
    pub fn new(role: UserRole, item: impl Into<String>) -> Self {
        Self {
            role,
            item: item.into(),
        }
    }
}

impl Demo for Executor {
    fn kind(&self) -> DemoKind {
        DemoKind::Facade
    }

    fn run(&self, out: &mut dyn Write) -> Result<()> {
        let facade = ProductFacade::new(
            UserService::new(self.role),
            AvailabilityService,
            ProductService,
        );

        match facade.try_get_item(&self.item) {
            Ok(item) => writeln!(out, "{}", item.price)?,
            Err(LookupError::Unauthenticated) => writeln!(out, "UserNotAuthenticated")?,
            Err(LookupError::Unauthorized { .. }) => writeln!(out, "UserNotAuthorised")?,
            Err(LookupError::ItemNotFound { .. }) => writeln!(out, "ItemNotFound")?,
        }
        Ok(())
    }
}
