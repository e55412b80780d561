//! Adapter: a query that splits users into identity and location records is made to look like
//! the plain user query.

use crate::domain::model::DemoKind;
use crate::domain::ports::Demo;
use crate::utils::error::{PatternError, Result};
use std::collections::HashMap;
use std::io::Write;
use std::sync::OnceLock;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub country: String,
    pub hometown: String,
}

impl User {
    pub fn new(
        username: &str,
        first_name: &str,
        last_name: &str,
        country: &str,
        hometown: &str,
    ) -> Self {
        Self {
            username: username.to_string(),
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            country: country.to_string(),
            hometown: hometown.to_string(),
        }
    }
}

fn all_users() -> &'static [User] {
    static USERS: OnceLock<Vec<User>> = OnceLock::new();
    USERS.get_or_init(|| {
        vec![
            User::new("jlocke", "John", "Locke", "England", "Essex"),
            User::new("taquinas", "Thomas", "Aquinas", "Kingdom of Sicily", "Roccasecca"),
            User::new("rdescartes", "René", "Descartes", "Kingdom of France", "La Haye en Touraine"),
            User::new("thobbes", "Thomas", "Hobbes", "England", "Westport"),
        ]
    })
}

pub trait UserQuery {
    fn all_users(&self) -> Result<Vec<User>>;
}

pub struct SimpleUserQuery;

impl UserQuery for SimpleUserQuery {
    fn all_users(&self) -> Result<Vec<User>> {
        Ok(all_users().to_vec())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserIdentityInfo {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserLocationInfo {
    pub username: String,
    pub country: String,
    pub hometown: String,
}

/// The incompatible interface: identity and location come back as separate lists.
pub trait SplitUserSource {
    fn identity_infos(&self) -> Vec<UserIdentityInfo>;
    fn location_infos(&self) -> Vec<UserLocationInfo>;
}

pub struct ComplexUserQuery;

impl SplitUserSource for ComplexUserQuery {
    fn identity_infos(&self) -> Vec<UserIdentityInfo> {
        all_users()
            .iter()
            .map(|user| UserIdentityInfo {
                username: user.username.clone(),
                first_name: user.first_name.clone(),
                last_name: user.last_name.clone(),
            })
            .collect()
    }

    fn location_infos(&self) -> Vec<UserLocationInfo> {
        all_users()
            .iter()
            .map(|user| UserLocationInfo {
                username: user.username.clone(),
                country: user.country.clone(),
                hometown: user.hometown.clone(),
            })
            .collect()
    }
}

pub struct ComplexUserQueryAdapter<S> {
    source: S,
}

impl<S: SplitUserSource> ComplexUserQueryAdapter<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }
}

impl<S: SplitUserSource> UserQuery for ComplexUserQueryAdapter<S> {
    /// Joins identities with their single location record, keeping identity order.
    fn all_users(&self) -> Result<Vec<User>> {
        let mut locations: HashMap<String, Vec<UserLocationInfo>> = HashMap::new();
        for location in self.source.location_infos() {
            locations
                .entry(location.username.clone())
                .or_default()
                .push(location);
        }

        self.source
            .identity_infos()
            .into_iter()
            .map(|identity| {
                let mut matches = locations.remove(&identity.username).unwrap_or_default();
                if matches.len() != 1 {
                    return Err(PatternError::MissingUserLocation {
                        username: identity.username,
                        found: matches.len(),
                    });
                }
                let location = matches.remove(0);
                Ok(User {
                    username: identity.username,
                    first_name: identity.first_name,
                    last_name: identity.last_name,
                    country: location.country,
                    hometown: location.hometown,
                })
            })
            .collect()
    }
}

pub struct Executor;

impl Executor {
    fn print_users(out: &mut dyn Write, users: &[User]) -> Result<()> {
        for user in users {
            writeln!(
                out,
                "username: {} | firstname: {} | country: {}",
                user.username, user.first_name, user.country
            )?;
        }
        writeln!(out)?;
        Ok(())
    }
}

impl Demo for Executor {
    fn kind(&self) -> DemoKind {
        DemoKind::Adapter
    }

    fn run(&self, out: &mut dyn Write) -> Result<()> {
        Self::print_users(out, &SimpleUserQuery.all_users()?)?;

        let adapter = ComplexUserQueryAdapter::new(ComplexUserQuery);
        Self::print_users(out, &adapter.all_users()?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct PartialSource {
        identities: Vec<UserIdentityInfo>,
        locations: Vec<UserLocationInfo>,
    }

    impl SplitUserSource for PartialSource {
        fn identity_infos(&self) -> Vec<UserIdentityInfo> {
            self.identities.clone()
        }

        fn location_infos(&self) -> Vec<UserLocationInfo> {
            self.locations.clone()
        }
    }

    #[test]
    fn test_adapter_matches_simple_query() {
        let simple = SimpleUserQuery.all_users().unwrap();
        let adapted = ComplexUserQueryAdapter::new(ComplexUserQuery)
            .all_users()
            .unwrap();
        assert_eq!(simple, adapted);
        assert_eq!(adapted.len(), 4);
    }

    #[test]
    fn test_adapter_reports_missing_location() {
        let source = PartialSource {
            identities: vec![UserIdentityInfo {
                username: "dhume".to_string(),
                first_name: "David".to_string(),
                last_name: "Hume".to_string(),
            }],
            locations: vec![],
        };
        let err = ComplexUserQueryAdapter::new(source).all_users().unwrap_err();
        assert!(matches!(
            err,
            PatternError::MissingUserLocation { ref username, found: 0 } if username == "dhume"
        ));
    }

    #[test]
    fn test_executor_prints_both_listings() {
        let mut out = Vec::new();
        Executor.run(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        let line = "username: rdescartes | firstname: René | country: Kingdom of France";
        assert_eq!(text.matches(line).count(), 2);
        assert_eq!(text.lines().filter(|l| l.is_empty()).count(), 2);
    }
}
