//! The ordered set of reports known to the demo.
//!
//! A [`Registry`] is built once at startup, either from the built-in demo set
//! or from a JSON file, and never changes afterwards. Declaration order is the
//! default build and presentation order.

mod types;

use std::path::Path;

use tracing::debug;

pub use types::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registry {
  reports: Vec<ReportDefinition>,
}

impl Registry {
  /// Build a registry, rejecting duplicate names.
  pub fn new(reports: Vec<ReportDefinition>) -> Result<Self, RegistryError> {
    for (i, report) in reports.iter().enumerate() {
      if reports[..i].iter().any(|r| r.name == report.name) {
        return Err(RegistryError::Duplicate(report.name.clone()));
      }
    }
    Ok(Self { reports })
  }

  /// The reports published on the demo site.
  pub fn builtin() -> Self {
    Self {
      reports: vec![
        ReportDefinition::new("2020-03-03", "2020-03-03/ca/sf", "March 3, 2020 Consolidated Presidential Primary"),
        ReportDefinition::new("2019-11-05", "2019-11-05", "November 5, 2019 Consolidated Municipal Election"),
        ReportDefinition::new("2018-11-06", "2018-11-06", "November 6, 2018 Consolidated General Election"),
        // "Zero report" for the Nov. 2018 election.
        ReportDefinition::new("2018-11-06-zero", "2018-11-06", "November 6, 2018 Consolidated General Election")
          .with_result_subset("resultdata-zero"),
        ReportDefinition::new("2018-06-05", "2018-06-05", "June 5, 2018 Consolidated Statewide Direct Primary"),
        ReportDefinition::new("minimal-demo", crate::consts::MINIMAL_DEMO_DATASET, "Minimal Demo"),
      ],
    }
  }

  /// Load a registry from a JSON array of report definitions.
  pub fn from_file(path: &Path) -> Result<Self, RegistryError> {
    let content = std::fs::read_to_string(path).map_err(|source| RegistryError::Read {
      path: path.to_path_buf(),
      source,
    })?;
    let reports: Vec<ReportDefinition> = serde_json::from_str(&content).map_err(|source| RegistryError::Parse {
      path: path.to_path_buf(),
      source,
    })?;
    debug!(path = %path.display(), count = reports.len(), "loaded report registry");
    Self::new(reports)
  }

  /// Report names in declaration order.
  pub fn all_names(&self) -> Vec<&str> {
    self.reports.iter().map(|r| r.name.as_str()).collect()
  }

  /// Report names sorted alphabetically, for help and error messages.
  pub fn sorted_names(&self) -> Vec<String> {
    let mut names: Vec<String> = self.reports.iter().map(|r| r.name.clone()).collect();
    names.sort();
    names
  }

  pub fn lookup(&self, name: &str) -> Result<&ReportDefinition, RegistryError> {
    self
      .reports
      .iter()
      .find(|r| r.name == name)
      .ok_or_else(|| RegistryError::NotFound(name.to_string()))
  }

  pub fn reports(&self) -> &[ReportDefinition] {
    &self.reports
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use tempfile::TempDir;

  #[test]
  fn builtin_order_is_declaration_order() {
    let registry = Registry::builtin();
    assert_eq!(
      registry.all_names(),
      vec!["2020-03-03", "2019-11-05", "2018-11-06", "2018-11-06-zero", "2018-06-05", "minimal-demo"]
    );
  }

  #[test]
  fn builtin_zero_report_has_subset() {
    let registry = Registry::builtin();
    let zero = registry.lookup("2018-11-06-zero").unwrap();
    assert_eq!(zero.input_dataset, "2018-11-06");
    assert_eq!(zero.result_subset.as_deref(), Some("resultdata-zero"));
  }

  #[test]
  fn lookup_missing_fails() {
    let registry = Registry::builtin();
    assert!(matches!(registry.lookup("nope"), Err(RegistryError::NotFound(name)) if name == "nope"));
  }

  #[test]
  fn sorted_names_are_sorted() {
    let registry = Registry::builtin();
    let names = registry.sorted_names();
    assert_eq!(names.first().map(String::as_str), Some("2018-06-05"));
    assert_eq!(names.last().map(String::as_str), Some("minimal-demo"));
  }

  #[test]
  fn duplicate_names_rejected() {
    let result = Registry::new(vec![ReportDefinition::new("a", "a", "A"), ReportDefinition::new("a", "b", "B")]);
    assert!(matches!(result, Err(RegistryError::Duplicate(name)) if name == "a"));
  }

  #[test]
  fn from_file_preserves_order() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("reports.json");
    std::fs::write(
      &path,
      r#"[
        {"name": "b", "input_dataset": "b", "display_title": "B"},
        {"name": "a", "input_dataset": "a", "result_subset": "zero", "display_title": "A"}
      ]"#,
    )
    .unwrap();

    let registry = Registry::from_file(&path).unwrap();
    assert_eq!(registry.all_names(), vec!["b", "a"]);
    assert_eq!(registry.lookup("a").unwrap().result_subset.as_deref(), Some("zero"));
  }

  #[test]
  fn from_file_reports_parse_errors() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("reports.json");
    std::fs::write(&path, r#"[{"name": "a"}]"#).unwrap();

    assert!(matches!(Registry::from_file(&path), Err(RegistryError::Parse { .. })));
    assert!(matches!(
      Registry::from_file(&temp.path().join("missing.json")),
      Err(RegistryError::Read { .. })
    ));
  }
}
