//! Conversion session as an explicit state machine
//!
//! A session moves from `Connecting` (credentials not yet accepted) to
//! `Selecting` (on-demand scenarios listed) to `Converting` (document
//! generated). Transitions borrow the current state and return a new
//! snapshot, so a failed step leaves the caller holding the previous one.

use crate::config::ConnectionConfig;
use crate::error::{Make2OasError, Result};
use crate::models::{OpenApiDocument, Scenario, ScenarioInterface};
use crate::openapi::generate_document;

#[derive(Debug, Clone, PartialEq)]
pub enum Session {
    Connecting {
        last_error: Option<String>,
    },
    Selecting {
        connection: ConnectionConfig,
        scenarios: Vec<Scenario>,
    },
    Converting {
        connection: ConnectionConfig,
        scenarios: Vec<Scenario>,
        scenario: Scenario,
        interface: ScenarioInterface,
        document: OpenApiDocument,
    },
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self::Connecting { last_error: None }
    }

    pub fn step_name(&self) -> &'static str {
        match self {
            Self::Connecting { .. } => "connecting",
            Self::Selecting { .. } => "selecting",
            Self::Converting { .. } => "converting",
        }
    }

    /// Credentials accepted and the listing fetched. Only on-demand
    /// scenarios are kept.
    pub fn connected(
        &self,
        connection: ConnectionConfig,
        scenarios: Vec<Scenario>,
    ) -> Result<Self> {
        match self {
            Self::Connecting { .. } => Ok(Self::Selecting {
                connection,
                scenarios: scenarios
                    .into_iter()
                    .filter(Scenario::is_on_demand)
                    .collect(),
            }),
            other => Err(invalid("connected", other)),
        }
    }

    /// Record a failed step. Only `Connecting` keeps the message; other
    /// states are returned unchanged.
    pub fn failed(self, error: &Make2OasError) -> Self {
        match self {
            Self::Connecting { .. } => Self::Connecting {
                last_error: Some(error.to_string()),
            },
            other => other,
        }
    }

    /// A scenario was picked and its interface fetched
    pub fn converted(&self, scenario_id: i64, interface: ScenarioInterface) -> Result<Self> {
        match self {
            Self::Selecting {
                connection,
                scenarios,
            } => {
                let scenario = self.find_scenario(scenario_id)?.clone();
                let document = generate_document(&scenario, &interface, &connection.origin);

                Ok(Self::Converting {
                    connection: connection.clone(),
                    scenarios: scenarios.clone(),
                    scenario,
                    interface,
                    document,
                })
            }
            other => Err(invalid("converted", other)),
        }
    }

    /// Leave the scenario list and re-enter credentials
    pub fn back(&self) -> Result<Self> {
        match self {
            Self::Selecting { .. } => Ok(Self::new()),
            other => Err(invalid("back", other)),
        }
    }

    /// Convert another scenario from the same listing
    pub fn reset(&self) -> Result<Self> {
        match self {
            Self::Converting {
                connection,
                scenarios,
                ..
            } => Ok(Self::Selecting {
                connection: connection.clone(),
                scenarios: scenarios.clone(),
            }),
            other => Err(invalid("reset", other)),
        }
    }

    pub fn connection(&self) -> Option<&ConnectionConfig> {
        match self {
            Self::Connecting { .. } => None,
            Self::Selecting { connection, .. } | Self::Converting { connection, .. } => {
                Some(connection)
            }
        }
    }

    pub fn scenarios(&self) -> &[Scenario] {
        match self {
            Self::Connecting { .. } => &[],
            Self::Selecting { scenarios, .. } | Self::Converting { scenarios, .. } => scenarios,
        }
    }

    /// Look up a listed scenario by id
    pub fn find_scenario(&self, scenario_id: i64) -> Result<&Scenario> {
        self.scenarios()
            .iter()
            .find(|scenario| scenario.id == scenario_id)
            .ok_or(Make2OasError::ScenarioNotFound(scenario_id))
    }

    pub fn document(&self) -> Option<&OpenApiDocument> {
        match self {
            Self::Converting { document, .. } => Some(document),
            _ => None,
        }
    }
}

fn invalid(action: &str, state: &Session) -> Make2OasError {
    Make2OasError::InvalidTransition(format!(
        "'{}' is not allowed while {}",
        action,
        state.step_name()
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConnectionInput;
    use crate::models::Field;

    fn connection() -> ConnectionConfig {
        ConnectionConfig::from_input(ConnectionInput {
            base_url: Some("eu1.make.com".to_string()),
            api_key: Some("k".to_string()),
            ..Default::default()
        })
        .unwrap()
    }

    fn listing() -> Vec<Scenario> {
        vec![
            Scenario::new(42, "Daily Sync").with_scheduling("on-demand"),
            Scenario::new(43, "Nightly").with_scheduling("indefinitely"),
        ]
    }

    fn interface() -> ScenarioInterface {
        ScenarioInterface::new(vec![Field::new("note", "text")], vec![])
    }

    #[test]
    fn test_full_flow_and_reset() {
        let session = Session::new().connected(connection(), listing()).unwrap();
        assert_eq!(session.step_name(), "selecting");
        assert_eq!(session.scenarios().len(), 1);

        let session = session.converted(42, interface()).unwrap();
        let document = session.document().unwrap();
        assert_eq!(document.info.title, "Run Daily Sync");
        assert_eq!(document.servers[0].url, "https://eu1.make.com/api/v2");

        let session = session.reset().unwrap();
        assert_eq!(session.step_name(), "selecting");
        assert_eq!(session.scenarios()[0].id, 42);
        assert!(session.document().is_none());
    }

    #[test]
    fn test_unknown_scenario_is_an_error() {
        let session = Session::new().connected(connection(), listing()).unwrap();
        let err = session.converted(43, interface()).unwrap_err();
        assert!(matches!(err, Make2OasError::ScenarioNotFound(43)));
    }

    #[test]
    fn test_failed_conversion_keeps_listing() {
        let session = Session::new().connected(connection(), listing()).unwrap();

        let err = session.converted(99, interface()).unwrap_err();
        assert!(matches!(err, Make2OasError::ScenarioNotFound(99)));
        assert_eq!(session.step_name(), "selecting");
        assert_eq!(session.scenarios()[0].id, 42);

        let retried = session.converted(42, interface()).unwrap();
        assert_eq!(retried.step_name(), "converting");
    }

    #[test]
    fn test_invalid_transition_keeps_document() {
        let converting = Session::new()
            .connected(connection(), listing())
            .unwrap()
            .converted(42, interface())
            .unwrap();

        assert!(converting.back().is_err());
        assert_eq!(converting.document().unwrap().info.title, "Run Daily Sync");
    }

    #[test]
    fn test_failed_step_keeps_selection() {
        let session = Session::new().connected(connection(), listing()).unwrap();
        let before = session.clone();

        let error = Make2OasError::RemoteInterfaceFailed {
            status: 500,
            scenario_id: 42,
            message: "down".to_string(),
        };
        assert_eq!(session.failed(&error), before);
    }

    #[test]
    fn test_failed_connect_records_error() {
        let error = Make2OasError::InvalidConnectionInput("bad".to_string());
        match Session::new().failed(&error) {
            Session::Connecting { last_error } => {
                assert!(last_error.unwrap().contains("bad"));
            }
            other => panic!("unexpected state {}", other.step_name()),
        }
    }

    #[test]
    fn test_invalid_transitions() {
        assert!(Session::new().reset().is_err());
        assert!(Session::new().back().is_err());
        assert!(Session::new().converted(1, interface()).is_err());

        let selecting = Session::new().connected(connection(), listing()).unwrap();
        assert!(selecting.reset().is_err());
        assert_eq!(selecting.back().unwrap(), Session::new());
    }
}
