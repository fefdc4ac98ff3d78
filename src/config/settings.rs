//! Overridable settings and the environment-variable import table

use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fmt;

/// How a raw flag value is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingKind {
    /// Comma-separated list, replaced as a whole.
    List,
    Text,
    Integer,
}

/// One overridable input, named after its command-line flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Setting {
    SearchHosts,
    CellbaseMongoHosts,
    CellbaseMongoHostsUser,
    CellbaseMongoHostsPassword,
    CellbaseRestUrl,
    CatalogDatabaseHosts,
    CatalogDatabaseUser,
    CatalogDatabasePassword,
    CatalogSearchHosts,
    CatalogSearchUser,
    CatalogSearchPassword,
    RestHost,
    GrpcHost,
    BatchExecutionMode,
    BatchAccountName,
    BatchAccountKey,
    BatchEndpoint,
    BatchPoolId,
    BatchDockerArgs,
    BatchDockerImage,
    BatchMaxConcurrentJobs,
    HbaseSshDns,
    HbaseSshUser,
    HbaseSshPass,
    HbaseSshRemoteOpencgaHome,
    HealthCheckInterval,
}

impl Setting {
    pub const ALL: [Setting; 26] = [
        Setting::SearchHosts,
        Setting::CellbaseMongoHosts,
        Setting::CellbaseMongoHostsUser,
        Setting::CellbaseMongoHostsPassword,
        Setting::CellbaseRestUrl,
        Setting::CatalogDatabaseHosts,
        Setting::CatalogDatabaseUser,
        Setting::CatalogDatabasePassword,
        Setting::CatalogSearchHosts,
        Setting::CatalogSearchUser,
        Setting::CatalogSearchPassword,
        Setting::RestHost,
        Setting::GrpcHost,
        Setting::BatchExecutionMode,
        Setting::BatchAccountName,
        Setting::BatchAccountKey,
        Setting::BatchEndpoint,
        Setting::BatchPoolId,
        Setting::BatchDockerArgs,
        Setting::BatchDockerImage,
        Setting::BatchMaxConcurrentJobs,
        Setting::HbaseSshDns,
        Setting::HbaseSshUser,
        Setting::HbaseSshPass,
        Setting::HbaseSshRemoteOpencgaHome,
        Setting::HealthCheckInterval,
    ];

    /// Long flag name without the leading dashes.
    pub fn flag(self) -> &'static str {
        match self {
            Setting::SearchHosts => "search-hosts",
            Setting::CellbaseMongoHosts => "cellbase-mongo-hosts",
            Setting::CellbaseMongoHostsUser => "cellbase-mongo-hosts-user",
            Setting::CellbaseMongoHostsPassword => "cellbase-mongo-hosts-password",
            Setting::CellbaseRestUrl => "cellbase-rest-url",
            Setting::CatalogDatabaseHosts => "catalog-database-hosts",
            Setting::CatalogDatabaseUser => "catalog-database-user",
            Setting::CatalogDatabasePassword => "catalog-database-password",
            Setting::CatalogSearchHosts => "catalog-search-hosts",
            Setting::CatalogSearchUser => "catalog-search-user",
            Setting::CatalogSearchPassword => "catalog-search-password",
            Setting::RestHost => "rest-host",
            Setting::GrpcHost => "grpc-host",
            Setting::BatchExecutionMode => "batch-execution-mode",
            Setting::BatchAccountName => "batch-account-name",
            Setting::BatchAccountKey => "batch-account-key",
            Setting::BatchEndpoint => "batch-endpoint",
            Setting::BatchPoolId => "batch-pool-id",
            Setting::BatchDockerArgs => "batch-docker-args",
            Setting::BatchDockerImage => "batch-docker-image",
            Setting::BatchMaxConcurrentJobs => "batch-max-concurrent-jobs",
            Setting::HbaseSshDns => "hbase-ssh-dns",
            Setting::HbaseSshUser => "hbase-ssh-user",
            Setting::HbaseSshPass => "hbase-ssh-pass",
            Setting::HbaseSshRemoteOpencgaHome => "hbase-ssh-remote-opencga-home",
            Setting::HealthCheckInterval => "health-check-interval",
        }
    }

    /// Canonical environment variable: `INIT_` followed by the flag in upper snake case.
    pub fn env_var(self) -> String {
        format!("{}{}", ENV_PREFIX, self.flag().replace('-', "_").to_ascii_uppercase())
    }

    pub fn kind(self) -> SettingKind {
        match self {
            Setting::SearchHosts
            | Setting::CellbaseMongoHosts
            | Setting::CellbaseRestUrl
            | Setting::CatalogDatabaseHosts
            | Setting::CatalogSearchHosts => SettingKind::List,
            Setting::BatchMaxConcurrentJobs => SettingKind::Integer,
            _ => SettingKind::Text,
        }
    }

    /// Values that must never reach a log line.
    pub fn is_secret(self) -> bool {
        matches!(
            self,
            Setting::CellbaseMongoHostsPassword
                | Setting::CatalogDatabasePassword
                | Setting::CatalogSearchPassword
                | Setting::BatchAccountKey
                | Setting::HbaseSshPass
        )
    }
}

impl fmt::Display for Setting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "--{}", self.flag())
    }
}

pub const ENV_PREFIX: &str = "INIT_";

/// Environment variables imported as settings, in lookup order.
///
/// Every setting has its canonical `INIT_*` name. Aliases come after the
/// canonical names so the canonical variable wins when both are set.
pub(crate) static ENV_VARS: Lazy<Vec<(String, Setting)>> = Lazy::new(|| {
    let mut table: Vec<(String, Setting)> =
        Setting::ALL.iter().map(|setting| (setting.env_var(), *setting)).collect();
    // Older init scripts export the search hosts under the clinical name.
    table.push(("INIT_CLINICAL_HOSTS".to_string(), Setting::SearchHosts));
    table
});

/// Environment variable names per setting, preserving table order.
pub(crate) static ENV_VARS_BY_SETTING: Lazy<HashMap<Setting, Vec<&'static str>>> = Lazy::new(|| {
    let mut index: HashMap<Setting, Vec<&'static str>> = HashMap::new();
    for (name, setting) in ENV_VARS.iter() {
        index.entry(*setting).or_default().push(name.as_str());
    }
    index
});

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_env_var_names() {
        assert_eq!(Setting::SearchHosts.env_var(), "INIT_SEARCH_HOSTS");
        assert_eq!(
            Setting::HbaseSshRemoteOpencgaHome.env_var(),
            "INIT_HBASE_SSH_REMOTE_OPENCGA_HOME"
        );
        assert_eq!(Setting::BatchMaxConcurrentJobs.env_var(), "INIT_BATCH_MAX_CONCURRENT_JOBS");
    }

    #[test]
    fn test_flags_are_unique() {
        let flags: HashSet<&str> = Setting::ALL.iter().map(|s| s.flag()).collect();
        assert_eq!(flags.len(), Setting::ALL.len());
    }

    #[test]
    fn test_clinical_hosts_alias_follows_canonical_name() {
        let names = &ENV_VARS_BY_SETTING[&Setting::SearchHosts];
        assert_eq!(names, &vec!["INIT_SEARCH_HOSTS", "INIT_CLINICAL_HOSTS"]);
    }

    #[test]
    fn test_every_setting_has_env_var() {
        for setting in Setting::ALL {
            assert!(ENV_VARS_BY_SETTING.contains_key(&setting), "{setting} has no env var");
        }
    }

    #[test]
    fn test_kinds() {
        assert_eq!(Setting::CellbaseRestUrl.kind(), SettingKind::List);
        assert_eq!(Setting::BatchMaxConcurrentJobs.kind(), SettingKind::Integer);
        assert_eq!(Setting::HealthCheckInterval.kind(), SettingKind::Text);
        assert!(Setting::HbaseSshPass.is_secret());
        assert!(!Setting::HbaseSshUser.is_secret());
    }
}
