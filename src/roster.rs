use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::{info, warn};

/// Errors that can occur while loading or persisting the roster
#[derive(Debug, Error)]
pub enum RosterError {
    /// Failed to read an existing roster file
    #[error("failed to read roster file {path}: {source}")]
    Read {
        /// Path to the roster file
        path: String,
        /// Underlying error
        source: std::io::Error,
    },

    /// Failed to write the synthesized default roster
    #[error("failed to write default roster to {path}: {source}")]
    Write {
        /// Path to the roster file
        path: String,
        /// Underlying error
        source: std::io::Error,
    },

    /// Failed to encode the roster document
    #[error("failed to encode roster: {0}")]
    Encode(#[from] serde_json::Error),
}

/// One known person that may attend meetings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Employee {
    pub id: u32,
    /// Canonical full name, "Given [Middle...] Family" capitalized
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

/// The authoritative list of known names used for correction
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Roster {
    pub employees: Vec<Employee>,
}

impl Roster {
    /// Load the roster from `path`, synthesizing and persisting a default
    /// example roster when the file does not exist
    ///
    /// Unparseable content degrades to an empty roster with a warning so a
    /// corrupt file never takes the pipeline down. Entries with blank names
    /// are dropped at load time.
    ///
    /// # Errors
    /// Returns error if the file cannot be read or the default cannot be written
    pub fn load_or_init(path: &Path) -> Result<Self, RosterError> {
        if !path.exists() {
            let roster = Self::default_example();
            roster.persist(path)?;
            return Ok(roster);
        }

        let contents = fs::read_to_string(path).map_err(|source| RosterError::Read {
            path: path.display().to_string(),
            source,
        })?;

        match serde_json::from_str::<Self>(&contents) {
            Ok(roster) => Ok(roster.without_blank_names()),
            Err(e) => {
                warn!(
                    "malformed roster at {}: {e}, continuing with empty roster",
                    path.display()
                );
                Ok(Self::default())
            }
        }
    }

    /// Ordered list of roster names for matching
    pub fn names(&self) -> Vec<String> {
        self.employees.iter().map(|e| e.name.clone()).collect()
    }

    /// True when the roster holds no entries
    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    fn without_blank_names(mut self) -> Self {
        self.employees.retain(|e| {
            let keep = !e.name.trim().is_empty();
            if !keep {
                warn!(id = e.id, "dropping roster entry with blank name");
            }
            keep
        });
        self
    }

    fn persist(&self, path: &Path) -> Result<(), RosterError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| RosterError::Write {
                path: path.display().to_string(),
                source,
            })?;
        }

        let contents = serde_json::to_string_pretty(self)?;
        fs::write(path, contents).map_err(|source| RosterError::Write {
            path: path.display().to_string(),
            source,
        })?;

        info!("default roster written to {}", path.display());
        Ok(())
    }

    /// The example roster written on first run
    fn default_example() -> Self {
        let entries = [
            (1, "Mateus Estival", "Engenharia", "Desenvolvedor"),
            (2, "João Silva", "Engenharia", "Tech Lead"),
            (3, "Maria Santos", "Produto", "Gerente de Produto"),
            (4, "Pedro Oliveira", "Engenharia", "Desenvolvedor"),
            (5, "Ana Costa", "Design", "Designer"),
            (6, "Carlos Ferreira", "Comercial", "Analista"),
        ];

        Self {
            employees: entries
                .into_iter()
                .map(|(id, name, department, role)| Employee {
                    id,
                    name: name.to_owned(),
                    department: Some(department.to_owned()),
                    role: Some(role.to_owned()),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_or_init_synthesizes_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data").join("roster.json");

        let roster = Roster::load_or_init(&path).unwrap();

        assert!(path.exists());
        assert_eq!(roster.employees.len(), 6);
        assert_eq!(roster.names()[0], "Mateus Estival");
    }

    #[test]
    fn test_load_or_init_rereads_persisted_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("roster.json");

        let first = Roster::load_or_init(&path).unwrap();
        let second = Roster::load_or_init(&path).unwrap();

        assert_eq!(first.names(), second.names());
    }

    #[test]
    fn test_blank_names_excluded_at_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("roster.json");
        fs::write(
            &path,
            r#"{"employees": [
                {"id": 1, "name": "Ana Costa"},
                {"id": 2, "name": "   "},
                {"id": 3, "name": ""}
            ]}"#,
        )
        .unwrap();

        let roster = Roster::load_or_init(&path).unwrap();

        assert_eq!(roster.names(), vec!["Ana Costa"]);
    }

    #[test]
    fn test_malformed_file_degrades_to_empty_roster() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("roster.json");
        fs::write(&path, "not a roster").unwrap();

        let roster = Roster::load_or_init(&path).unwrap();

        assert!(roster.is_empty());
    }

    #[test]
    fn test_names_preserve_order() {
        let roster = Roster {
            employees: vec![
                Employee {
                    id: 1,
                    name: "Carlos Ferreira".to_owned(),
                    department: None,
                    role: None,
                },
                Employee {
                    id: 2,
                    name: "Ana Costa".to_owned(),
                    department: None,
                    role: None,
                },
            ],
        };

        assert_eq!(roster.names(), vec!["Carlos Ferreira", "Ana Costa"]);
    }
}
