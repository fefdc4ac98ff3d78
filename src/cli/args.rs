//! Override flags

use clap::Args;
use std::path::PathBuf;

use crate::config::{FlagSource, Setting};
use crate::template::TemplatePaths;

/// Template paths plus one optional flag per overridable setting.
///
/// Every override flag may be repeated; the last occurrence wins. List
/// flags take a comma-separated value.
#[derive(Args, Debug)]
pub struct OverrideArgs {
    /// Main configuration template (configuration.yml)
    #[arg(long, value_name = "FILE", env = "INIT_CONFIG_PATH")]
    pub config_path: PathBuf,

    /// Client configuration template (client-configuration.yml)
    #[arg(long, value_name = "FILE", env = "INIT_CLIENT_CONFIG_PATH")]
    pub client_config_path: PathBuf,

    /// Storage configuration template (storage-configuration.yml)
    #[arg(long, value_name = "FILE", env = "INIT_STORAGE_CONFIG_PATH")]
    pub storage_config_path: PathBuf,

    /// Variant search hosts (comma-separated)
    #[arg(long, value_name = "HOSTS")]
    pub search_hosts: Option<String>,

    /// Cellbase MongoDB hosts (comma-separated); empty selects the REST annotator
    #[arg(long, value_name = "HOSTS")]
    pub cellbase_mongo_hosts: Option<String>,

    /// Cellbase MongoDB user
    #[arg(long, value_name = "USER")]
    pub cellbase_mongo_hosts_user: Option<String>,

    /// Cellbase MongoDB password
    #[arg(long, value_name = "PASSWORD")]
    pub cellbase_mongo_hosts_password: Option<String>,

    /// Cellbase REST URLs (comma-separated)
    #[arg(long, value_name = "URLS")]
    pub cellbase_rest_url: Option<String>,

    /// Catalog database hosts (comma-separated)
    #[arg(long, value_name = "HOSTS")]
    pub catalog_database_hosts: Option<String>,

    /// Catalog database user
    #[arg(long, value_name = "USER")]
    pub catalog_database_user: Option<String>,

    /// Catalog database password
    #[arg(long, value_name = "PASSWORD")]
    pub catalog_database_password: Option<String>,

    /// Catalog search engine hosts (comma-separated)
    #[arg(long, value_name = "HOSTS")]
    pub catalog_search_hosts: Option<String>,

    /// Catalog search engine user
    #[arg(long, value_name = "USER")]
    pub catalog_search_user: Option<String>,

    /// Catalog search engine password
    #[arg(long, value_name = "PASSWORD")]
    pub catalog_search_password: Option<String>,

    /// REST host for the client configuration
    #[arg(long, value_name = "HOST")]
    pub rest_host: Option<String>,

    /// gRPC host for the client configuration
    #[arg(long, value_name = "HOST")]
    pub grpc_host: Option<String>,

    /// Analysis execution backend id
    #[arg(long, value_name = "MODE")]
    pub batch_execution_mode: Option<String>,

    /// Azure Batch account name
    #[arg(long, value_name = "NAME")]
    pub batch_account_name: Option<String>,

    /// Azure Batch account key
    #[arg(long, value_name = "KEY")]
    pub batch_account_key: Option<String>,

    /// Azure Batch endpoint
    #[arg(long, value_name = "URL")]
    pub batch_endpoint: Option<String>,

    /// Azure Batch pool id
    #[arg(long, value_name = "ID")]
    pub batch_pool_id: Option<String>,

    /// Docker arguments for Azure Batch jobs
    #[arg(long, value_name = "ARGS", allow_hyphen_values = true)]
    pub batch_docker_args: Option<String>,

    /// Docker image for Azure Batch jobs
    #[arg(long, value_name = "IMAGE")]
    pub batch_docker_image: Option<String>,

    /// Maximum concurrent index jobs
    #[arg(long, value_name = "N")]
    pub batch_max_concurrent_jobs: Option<String>,

    /// SSH host of the HBase cluster's MapReduce executor
    #[arg(long, value_name = "HOST")]
    pub hbase_ssh_dns: Option<String>,

    /// SSH user for the MapReduce executor
    #[arg(long, value_name = "USER")]
    pub hbase_ssh_user: Option<String>,

    /// SSH password for the MapReduce executor
    #[arg(long, value_name = "PASSWORD")]
    pub hbase_ssh_pass: Option<String>,

    /// Remote installation directory used by the MapReduce executor
    #[arg(long, value_name = "DIR")]
    pub hbase_ssh_remote_opencga_home: Option<String>,

    /// Health check interval in seconds
    #[arg(long, value_name = "SECONDS")]
    pub health_check_interval: Option<String>,
}

impl OverrideArgs {
    pub fn template_paths(&self) -> TemplatePaths {
        TemplatePaths {
            storage: self.storage_config_path.clone(),
            configuration: self.config_path.clone(),
            client: self.client_config_path.clone(),
        }
    }

    /// Flags that were given on the command line, empty values included.
    pub fn flag_source(&self) -> FlagSource {
        let mut flags = FlagSource::new();
        for (setting, value) in self.values() {
            if let Some(value) = value {
                flags.set(setting, value.as_str());
            }
        }
        flags
    }

    fn values(&self) -> [(Setting, &Option<String>); 26] {
        [
            (Setting::SearchHosts, &self.search_hosts),
            (Setting::CellbaseMongoHosts, &self.cellbase_mongo_hosts),
            (Setting::CellbaseMongoHostsUser, &self.cellbase_mongo_hosts_user),
            (Setting::CellbaseMongoHostsPassword, &self.cellbase_mongo_hosts_password),
            (Setting::CellbaseRestUrl, &self.cellbase_rest_url),
            (Setting::CatalogDatabaseHosts, &self.catalog_database_hosts),
            (Setting::CatalogDatabaseUser, &self.catalog_database_user),
            (Setting::CatalogDatabasePassword, &self.catalog_database_password),
            (Setting::CatalogSearchHosts, &self.catalog_search_hosts),
            (Setting::CatalogSearchUser, &self.catalog_search_user),
            (Setting::CatalogSearchPassword, &self.catalog_search_password),
            (Setting::RestHost, &self.rest_host),
            (Setting::GrpcHost, &self.grpc_host),
            (Setting::BatchExecutionMode, &self.batch_execution_mode),
            (Setting::BatchAccountName, &self.batch_account_name),
            (Setting::BatchAccountKey, &self.batch_account_key),
            (Setting::BatchEndpoint, &self.batch_endpoint),
            (Setting::BatchPoolId, &self.batch_pool_id),
            (Setting::BatchDockerArgs, &self.batch_docker_args),
            (Setting::BatchDockerImage, &self.batch_docker_image),
            (Setting::BatchMaxConcurrentJobs, &self.batch_max_concurrent_jobs),
            (Setting::HbaseSshDns, &self.hbase_ssh_dns),
            (Setting::HbaseSshUser, &self.hbase_ssh_user),
            (Setting::HbaseSshPass, &self.hbase_ssh_pass),
            (Setting::HbaseSshRemoteOpencgaHome, &self.hbase_ssh_remote_opencga_home),
            (Setting::HealthCheckInterval, &self.health_check_interval),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Cli;
    use crate::config::SettingSource;
    use clap::{CommandFactory, Parser};

    const PATHS: [&str; 6] = [
        "--config-path",
        "configuration.yml",
        "--client-config-path",
        "client-configuration.yml",
        "--storage-config-path",
        "storage-configuration.yml",
    ];

    fn parse(extra: &[&str]) -> Cli {
        let args = std::iter::once("override-yaml").chain(PATHS).chain(extra.iter().copied());
        Cli::try_parse_from(args).expect("parse")
    }

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_every_setting_has_a_matching_flag() {
        let command = Cli::command();
        for setting in Setting::ALL {
            assert!(
                command.get_arguments().any(|arg| arg.get_long() == Some(setting.flag())),
                "no flag for {setting}"
            );
        }
    }

    #[test]
    fn test_last_occurrence_wins() {
        let cli = parse(&[
            "--search-hosts",
            "test-search-host1,test-search-host2",
            "--search-hosts",
            "test-search-host",
        ]);
        let flags = cli.overrides.flag_source();
        assert_eq!(flags.get(Setting::SearchHosts).as_deref(), Some("test-search-host"));
    }

    #[test]
    fn test_empty_flag_is_recorded() {
        let cli = parse(&["--cellbase-mongo-hosts", ""]);
        let flags = cli.overrides.flag_source();
        assert_eq!(flags.get(Setting::CellbaseMongoHosts).as_deref(), Some(""));
        assert_eq!(flags.len(), 1);
    }

    #[test]
    fn test_template_paths() {
        let cli = parse(&[]);
        let paths = cli.overrides.template_paths();
        assert_eq!(paths.storage, PathBuf::from("storage-configuration.yml"));
        assert_eq!(paths.configuration, PathBuf::from("configuration.yml"));
        assert_eq!(paths.client, PathBuf::from("client-configuration.yml"));
        assert!(!cli.save);
    }
}
