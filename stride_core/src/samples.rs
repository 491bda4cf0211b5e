//! Built-in sample sensor packages.

use crate::dispatch::read_package;
use once_cell::sync::Lazy;

/// A raw sensor package: activity code plus positional fields
#[derive(Clone, Debug, PartialEq)]
pub struct Package {
    pub code: &'static str,
    pub data: Vec<f64>,
}

impl Package {
    pub fn new(code: &'static str, data: &[f64]) -> Self {
        Self {
            code,
            data: data.to_vec(),
        }
    }
}

/// Cached sample packages - built once and reused
static SAMPLE_PACKAGES: Lazy<Vec<Package>> = Lazy::new(build_sample_packages);

/// Get the sample packages processed by the driver, in order
pub fn get_sample_packages() -> &'static [Package] {
    &SAMPLE_PACKAGES
}

fn build_sample_packages() -> Vec<Package> {
    vec![
        Package::new("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]),
        Package::new("RUN", &[15000.0, 1.0, 75.0]),
        Package::new("WLK", &[9000.0, 1.0, 75.0, 180.0]),
    ]
}

/// Check packages against the dispatcher
///
/// Returns one message per package that would fail to dispatch.
pub fn validate_packages(packages: &[Package]) -> Vec<String> {
    packages
        .iter()
        .enumerate()
        .filter_map(|(i, pkg)| {
            read_package(pkg.code, &pkg.data)
                .err()
                .map(|e| format!("Package {} ({}): {}", i, pkg.code, e))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Workout;

    #[test]
    fn test_samples_load() {
        let packages = get_sample_packages();
        let codes: Vec<_> = packages.iter().map(|p| p.code).collect();
        assert_eq!(codes, vec!["SWM", "RUN", "WLK"]);
    }

    #[test]
    fn test_samples_validate() {
        let errors = validate_packages(get_sample_packages());
        assert!(
            errors.is_empty(),
            "Sample packages have validation errors: {:?}",
            errors
        );
    }

    #[test]
    fn test_samples_dispatch_to_matching_activities() {
        let workouts: Vec<Workout> = get_sample_packages()
            .iter()
            .map(|p| read_package(p.code, &p.data).unwrap())
            .collect();
        assert!(matches!(workouts[0], Workout::Swimming(_)));
        assert!(matches!(workouts[1], Workout::Running(_)));
        assert!(matches!(workouts[2], Workout::Walking(_)));
    }

    #[test]
    fn test_validate_reports_bad_packages() {
        let packages = vec![
            Package::new("RUN", &[15000.0, 1.0, 75.0]),
            Package::new("XYZ", &[1.0]),
            Package::new("WLK", &[9000.0, 1.0, 75.0]),
        ];
        let errors = validate_packages(&packages);
        assert_eq!(errors.len(), 2);
        assert!(errors[0].starts_with("Package 1 (XYZ)"));
        assert!(errors[1].starts_with("Package 2 (WLK)"));
    }
}
